use actix::Message;
use common::VamosError;
use common::links::OrderLink;
use common::types::customer_info::CustomerField;
use common::types::dtos::{CartDTO, MenuDTO};
use common::types::menu::{MenuCategory, Selector};
use common::types::order_channel::OrderChannel;

/// Current menu and selected category.
#[derive(Message, Debug, Clone)]
#[rtype(result = "MenuDTO")]
pub struct GetMenu;

/// Snapshot of cart and delivery form.
#[derive(Message, Debug, Clone)]
#[rtype(result = "CartDTO")]
pub struct GetStatus;

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<MenuCategory, VamosError>")]
pub struct SelectCategory {
    pub selector: Selector,
}

/// Positions refer to the selected category, ids to the whole menu.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<CartDTO, VamosError>")]
pub struct AddToCart {
    pub selector: Selector,
}

/// Quantity 0 removes the line.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<CartDTO, VamosError>")]
pub struct UpdateQuantity {
    pub item_id: String,
    pub quantity: u32,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<CartDTO, VamosError>")]
pub struct IncrementItem {
    pub item_id: String,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<CartDTO, VamosError>")]
pub struct DecrementItem {
    pub item_id: String,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<CartDTO, VamosError>")]
pub struct RemoveItem {
    pub item_id: String,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "CartDTO")]
pub struct ClearCart;

#[derive(Message, Debug, Clone)]
#[rtype(result = "CartDTO")]
pub struct SetCustomerField {
    pub field: CustomerField,
    pub value: String,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<OrderLink, VamosError>")]
pub struct SendOrder {
    pub channel: OrderChannel,
}
