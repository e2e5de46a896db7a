use crate::types::cart::{Cart, CartItem};
use crate::types::coordinate::Coordinate;
use crate::types::customer_info::CustomerInfo;
use crate::types::menu::MenuCategory;
use serde::{Deserialize, Serialize};

/// Snapshot of the cart sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartDTO {
    /// Lines currently in the cart.
    pub items: Vec<CartItem>,
    /// Sum of price × quantity over all lines.
    pub total: u64,
    /// Number of distinct lines, shown on the cart button.
    pub item_count: usize,
    /// Delivery form as typed so far.
    pub customer: CustomerInfo,
    /// Whether the send buttons are enabled.
    pub can_submit: bool,
}

impl CartDTO {
    pub fn new(cart: &Cart, customer: &CustomerInfo) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
            customer: customer.clone(),
            can_submit: !cart.is_empty() && customer.can_submit(),
        }
    }
}

/// Snapshot of the menu page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDTO {
    pub categories: Vec<MenuCategory>,
    pub selected_category: String,
}

impl MenuDTO {
    pub fn selected(&self) -> Option<&MenuCategory> {
        self.categories
            .iter()
            .find(|c| c.id == self.selected_category)
    }
}

/// Current state of the delivery map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewDTO {
    pub center: Coordinate,
    pub zoom: u8,
    /// Whether the view center lies inside the delivery zone.
    pub center_in_zone: bool,
}
