use crate::messages::internal_messages::*;
use actix::prelude::*;
use colored::Color;
use common::VamosError;
use common::links::{OrderLink, build_order_link};
use common::logger::Logger;
use common::types::cart::Cart;
use common::types::customer_info::CustomerInfo;
use common::types::dtos::{CartDTO, MenuDTO};
use common::types::menu::{Menu, MenuCategory};
use common::types::restaurant_info::RestaurantInfo;

/// The `Client` actor owns everything the customer changes while browsing:
/// the selected menu category, the cart and the delivery form.
///
/// ## Responsibilities:
/// - Resolve category and item selections against the menu.
/// - Keep the cart consistent (merged lines, no zero quantities).
/// - Compose the order link once the cart and the form allow it.
pub struct Client {
    /// Menu being browsed.
    pub menu: Menu,
    /// Id of the category whose items are shown.
    pub selected_category: String,
    /// Lines chosen so far.
    pub cart: Cart,
    /// Delivery form next to the cart.
    pub customer: CustomerInfo,
    /// Restaurant the order goes to.
    pub restaurant: RestaurantInfo,
    pub logger: Logger,
}

impl Client {
    pub fn new(menu: Menu, restaurant: RestaurantInfo) -> Self {
        let selected_category = menu.first_category_id().unwrap_or_default().to_string();
        Self {
            menu,
            selected_category,
            cart: Cart::new(),
            customer: CustomerInfo::default(),
            restaurant,
            logger: Logger::new("Client", Color::Cyan),
        }
    }

    fn snapshot(&self) -> CartDTO {
        CartDTO::new(&self.cart, &self.customer)
    }

    /// Runs a cart mutation and reports the resulting snapshot.
    fn update_cart<F>(&mut self, action: &str, item_id: &str, f: F) -> Result<CartDTO, VamosError>
    where
        F: FnOnce(&mut Cart) -> Result<(), VamosError>,
    {
        f(&mut self.cart)?;
        self.logger.debug(format!(
            "{} {} -> {} lines, total {}",
            action,
            item_id,
            self.cart.item_count(),
            self.cart.total()
        ));
        Ok(self.snapshot())
    }
}

impl Actor for Client {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.debug(format!(
            "Client started with {} categories",
            self.menu.categories.len()
        ));
    }
}

impl Handler<GetMenu> for Client {
    type Result = MessageResult<GetMenu>;

    fn handle(&mut self, _msg: GetMenu, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(MenuDTO {
            categories: self.menu.categories.clone(),
            selected_category: self.selected_category.clone(),
        })
    }
}

impl Handler<GetStatus> for Client {
    type Result = MessageResult<GetStatus>;

    fn handle(&mut self, _msg: GetStatus, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.snapshot())
    }
}

impl Handler<SelectCategory> for Client {
    type Result = Result<MenuCategory, VamosError>;

    fn handle(&mut self, msg: SelectCategory, _ctx: &mut Self::Context) -> Self::Result {
        let category = self.menu.resolve_category(&msg.selector)?.clone();
        self.selected_category = category.id.clone();
        self.logger.debug(format!("Selected category {}", category.id));
        Ok(category)
    }
}

impl Handler<AddToCart> for Client {
    type Result = Result<CartDTO, VamosError>;

    fn handle(&mut self, msg: AddToCart, _ctx: &mut Self::Context) -> Self::Result {
        let item = self
            .menu
            .resolve_item(&self.selected_category, &msg.selector)?
            .clone();
        self.update_cart("add", &item.id, |cart| {
            cart.add_item(&item);
            Ok(())
        })
    }
}

impl Handler<UpdateQuantity> for Client {
    type Result = Result<CartDTO, VamosError>;

    fn handle(&mut self, msg: UpdateQuantity, _ctx: &mut Self::Context) -> Self::Result {
        self.update_cart("set quantity of", &msg.item_id, |cart| {
            cart.update_quantity(&msg.item_id, msg.quantity)
        })
    }
}

impl Handler<IncrementItem> for Client {
    type Result = Result<CartDTO, VamosError>;

    fn handle(&mut self, msg: IncrementItem, _ctx: &mut Self::Context) -> Self::Result {
        self.update_cart("increment", &msg.item_id, |cart| cart.increment(&msg.item_id))
    }
}

impl Handler<DecrementItem> for Client {
    type Result = Result<CartDTO, VamosError>;

    fn handle(&mut self, msg: DecrementItem, _ctx: &mut Self::Context) -> Self::Result {
        self.update_cart("decrement", &msg.item_id, |cart| cart.decrement(&msg.item_id))
    }
}

impl Handler<RemoveItem> for Client {
    type Result = Result<CartDTO, VamosError>;

    fn handle(&mut self, msg: RemoveItem, _ctx: &mut Self::Context) -> Self::Result {
        self.update_cart("remove", &msg.item_id, |cart| cart.remove_item(&msg.item_id))
    }
}

impl Handler<ClearCart> for Client {
    type Result = MessageResult<ClearCart>;

    fn handle(&mut self, _msg: ClearCart, _ctx: &mut Self::Context) -> Self::Result {
        self.cart.clear();
        self.logger.debug("Cart cleared");
        MessageResult(self.snapshot())
    }
}

impl Handler<SetCustomerField> for Client {
    type Result = MessageResult<SetCustomerField>;

    fn handle(&mut self, msg: SetCustomerField, _ctx: &mut Self::Context) -> Self::Result {
        self.customer.set(msg.field, msg.value);
        MessageResult(self.snapshot())
    }
}

impl Handler<SendOrder> for Client {
    type Result = Result<OrderLink, VamosError>;

    fn handle(&mut self, msg: SendOrder, _ctx: &mut Self::Context) -> Self::Result {
        let link = build_order_link(msg.channel, &self.cart, &self.customer, &self.restaurant)?;
        self.logger.info(format!(
            "Order composed for {} ({} lines, total {})",
            link.channel,
            self.cart.item_count(),
            self.cart.total()
        ));
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::customer_info::CustomerField;
    use common::types::menu::Selector;
    use common::types::order_channel::OrderChannel;

    fn start_client() -> Addr<Client> {
        Client::new(Menu::default(), RestaurantInfo::default()).start()
    }

    async fn fill_form(client: &Addr<Client>) {
        client
            .send(SetCustomerField {
                field: CustomerField::Address,
                value: "حي الأصبحي".to_string(),
            })
            .await
            .unwrap();
        client
            .send(SetCustomerField {
                field: CustomerField::Phone,
                value: "773000000".to_string(),
            })
            .await
            .unwrap();
    }

    #[actix_rt::test]
    async fn test_first_category_selected_on_start() {
        let client = start_client();
        let menu = client.send(GetMenu).await.unwrap();
        assert_eq!(menu.selected_category, "broast");
        assert_eq!(menu.selected().map(|c| c.items.len()), Some(1));
    }

    #[actix_rt::test]
    async fn test_select_category_by_position_and_add_by_position() {
        let client = start_client();
        let category = client
            .send(SelectCategory {
                selector: Selector::Index(4),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(category.id, "shawarma");

        let cart = client
            .send(AddToCart {
                selector: Selector::Index(4),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cart.items[0].id, "shawarma-plate");
        assert_eq!(cart.total, 2000);
    }

    #[actix_rt::test]
    async fn test_unknown_category_keeps_selection() {
        let client = start_client();
        let result = client
            .send(SelectCategory {
                selector: Selector::Id("pizza".to_string()),
            })
            .await
            .unwrap();
        assert!(matches!(result, Err(VamosError::UnknownCategory(_))));
        let menu = client.send(GetMenu).await.unwrap();
        assert_eq!(menu.selected_category, "broast");
    }

    #[actix_rt::test]
    async fn test_cart_total_tracks_quantity_changes() {
        let client = start_client();
        for id in ["beef-double", "fries", "beef-double"] {
            client
                .send(AddToCart {
                    selector: Selector::Id(id.to_string()),
                })
                .await
                .unwrap()
                .unwrap();
        }
        let cart = client.send(GetStatus).await.unwrap();
        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.total, 2 * 1400 + 1000);

        let cart = client
            .send(UpdateQuantity {
                item_id: "fries".to_string(),
                quantity: 3,
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cart.total, 2 * 1400 + 3 * 1000);

        let cart = client
            .send(DecrementItem {
                item_id: "beef-double".to_string(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cart.total, 1400 + 3 * 1000);

        let cart = client
            .send(RemoveItem {
                item_id: "fries".to_string(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cart.total, 1400);

        let cart = client.send(ClearCart).await.unwrap();
        assert_eq!(cart.total, 0);
        assert_eq!(cart.item_count, 0);
    }

    #[actix_rt::test]
    async fn test_send_order_requires_form() {
        let client = start_client();
        let result = client
            .send(SendOrder {
                channel: OrderChannel::WhatsApp,
            })
            .await
            .unwrap();
        assert!(matches!(result, Err(VamosError::EmptyCart)));

        client
            .send(AddToCart {
                selector: Selector::Index(1),
            })
            .await
            .unwrap()
            .unwrap();
        let result = client
            .send(SendOrder {
                channel: OrderChannel::Sms,
            })
            .await
            .unwrap();
        assert!(matches!(
            result,
            Err(VamosError::MissingCustomerField(CustomerField::Address))
        ));

        fill_form(&client).await;
        let cart = client.send(GetStatus).await.unwrap();
        assert!(cart.can_submit);

        let link = client
            .send(SendOrder {
                channel: OrderChannel::WhatsApp,
            })
            .await
            .unwrap()
            .unwrap();
        assert!(link.url.starts_with("https://wa.me/967782977923?text="));
        assert!(link.message.contains("بروست x1 - 1,200 ريال"));
    }
}
