use crate::client_actors::client::Client;
use crate::commands::UserCommand;
use crate::messages::internal_messages::*;
use crate::messages::messages::{GetCurrentPage, UserInput};
use crate::pages;
use actix::dev::ToEnvelope;
use actix::prelude::*;
use colored::Color;
use common::VamosError;
use common::logger::Logger;
use common::types::dtos::CartDTO;
use common::types::geofence::GeofenceConfig;
use common::types::page::Page;
use common::types::restaurant_info::RestaurantInfo;
use std::io;
use tokio::sync::oneshot;

/// Actor UIHandler: turns typed lines into requests to the `Client` actor
/// and prints the answers.
pub struct UIHandler {
    /// Channel to the `Client` actor.
    pub client: Addr<Client>,
    pub restaurant: RestaurantInfo,
    /// Free delivery zone shown on the delivery page.
    pub zone: GeofenceConfig,
    pub page: Page,
    /// Fired once when the user quits or input ends.
    pub shutdown: Option<oneshot::Sender<()>>,
    pub logger: Logger,
}

impl UIHandler {
    pub fn new(
        client: Addr<Client>,
        restaurant: RestaurantInfo,
        shutdown: Option<oneshot::Sender<()>>,
    ) -> Self {
        UIHandler {
            client,
            restaurant,
            zone: GeofenceConfig::default(),
            page: Page::Home,
            shutdown,
            logger: Logger::new("UI", Color::Magenta),
        }
    }

    fn show(&self, lines: Vec<String>) {
        for line in lines {
            self.logger.info(line);
        }
    }

    fn request_shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }

    /// Sends `msg` to the client and handles the reply before reading the
    /// next line.
    fn ask<M, F>(&mut self, msg: M, ctx: &mut Context<Self>, on_reply: F)
    where
        M: Message + Send + 'static,
        M::Result: Send,
        Client: Handler<M>,
        <Client as Actor>::Context: ToEnvelope<Client, M>,
        F: FnOnce(&mut Self, M::Result) + 'static,
    {
        self.client
            .send(msg)
            .into_actor(self)
            .map(move |res, act, _ctx| match res {
                Ok(reply) => on_reply(act, reply),
                Err(e) => act
                    .logger
                    .error(format!("Client actor unreachable: {}", e)),
            })
            .wait(ctx);
    }

    fn on_cart_reply(&mut self, reply: Result<CartDTO, VamosError>) {
        match reply {
            Ok(cart) => self.show(pages::cart_lines(&cart)),
            Err(e) => self.logger.warn(e.to_string()),
        }
    }

    fn render_page(&mut self, ctx: &mut Context<Self>) {
        self.show(pages::header_lines(&self.restaurant));
        self.show(pages::navigation_lines(self.page));
        match self.page {
            Page::Home => {
                self.ask(GetMenu, ctx, |act, menu| act.show(pages::menu_lines(&menu)));
                self.ask(GetStatus, ctx, |act, cart| act.show(pages::cart_lines(&cart)));
            }
            Page::Delivery => self.show(pages::delivery_lines(&self.zone)),
        }
    }

    fn handle_line(&mut self, line: &str, ctx: &mut Context<Self>) {
        if line.trim().is_empty() {
            return;
        }
        let command = match UserCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                self.logger.warn(e.to_string());
                return;
            }
        };
        self.logger.debug(format!("Command: {:?}", command));

        match command {
            UserCommand::Help => self.show(pages::help_lines()),
            UserCommand::Menu => {
                self.ask(GetMenu, ctx, |act, menu| act.show(pages::menu_lines(&menu)))
            }
            UserCommand::Category(selector) => {
                self.ask(SelectCategory { selector }, ctx, |act, reply| {
                    if let Err(e) = reply {
                        act.logger.warn(e.to_string());
                    }
                });
                self.ask(GetMenu, ctx, |act, menu| act.show(pages::menu_lines(&menu)));
            }
            UserCommand::Add(selector) => {
                self.ask(AddToCart { selector }, ctx, Self::on_cart_reply)
            }
            UserCommand::Increment(item_id) => {
                self.ask(IncrementItem { item_id }, ctx, Self::on_cart_reply)
            }
            UserCommand::Decrement(item_id) => {
                self.ask(DecrementItem { item_id }, ctx, Self::on_cart_reply)
            }
            UserCommand::Quantity(item_id, quantity) => self.ask(
                UpdateQuantity { item_id, quantity },
                ctx,
                Self::on_cart_reply,
            ),
            UserCommand::Remove(item_id) => {
                self.ask(RemoveItem { item_id }, ctx, Self::on_cart_reply)
            }
            UserCommand::Cart => {
                self.ask(GetStatus, ctx, |act, cart| act.show(pages::cart_lines(&cart)))
            }
            UserCommand::Clear => {
                self.ask(ClearCart, ctx, |act, cart| act.show(pages::cart_lines(&cart)))
            }
            UserCommand::Set(field, value) => {
                self.ask(SetCustomerField { field, value }, ctx, move |act, cart| {
                    act.logger.info(format!("Saved {}", field));
                    if cart.can_submit {
                        act.logger.info("Order can be sent now");
                    }
                })
            }
            UserCommand::Send(channel) => {
                self.ask(SendOrder { channel }, ctx, |act, reply| match reply {
                    Ok(link) => act.show(pages::order_link_lines(&link)),
                    Err(e) => act.logger.warn(e.to_string()),
                })
            }
            UserCommand::Page(page) => {
                self.page = page;
                self.render_page(ctx);
            }
            UserCommand::Zone(point) => {
                let check = self.zone.check(point);
                self.show(pages::zone_check_lines(&check));
            }
            UserCommand::Contact => self.show(pages::footer_lines(&self.restaurant)),
            UserCommand::Export => self.ask(GetStatus, ctx, |act, cart| {
                match serde_json::to_string_pretty(&cart) {
                    Ok(json) => println!("{}", json),
                    Err(e) => act.logger.error(format!("Failed to export cart: {}", e)),
                }
            }),
            UserCommand::Quit => {
                self.show(pages::footer_lines(&self.restaurant));
                self.logger.info("شكراً لزيارتكم");
                self.request_shutdown();
                ctx.stop();
            }
        }
    }
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.debug("UIHandler started");
        self.render_page(ctx);
        self.logger.info("Type 'help' to see the available commands");
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.request_shutdown();
    }
}

impl StreamHandler<Result<String, io::Error>> for UIHandler {
    fn handle(&mut self, item: Result<String, io::Error>, ctx: &mut Self::Context) {
        match item {
            Ok(line) => self.handle_line(&line, ctx),
            Err(e) => self
                .logger
                .error(format!("Error while reading input: {}", e)),
        }
    }

    fn finished(&mut self, ctx: &mut Self::Context) {
        self.logger.info("Input closed");
        ctx.stop();
    }
}

impl Handler<UserInput> for UIHandler {
    type Result = ();

    fn handle(&mut self, msg: UserInput, ctx: &mut Self::Context) {
        self.handle_line(&msg.0, ctx);
    }
}

impl Handler<GetCurrentPage> for UIHandler {
    type Result = MessageResult<GetCurrentPage>;

    fn handle(&mut self, _msg: GetCurrentPage, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::menu::Menu;

    fn start_pair() -> (Addr<Client>, Addr<UIHandler>, oneshot::Receiver<()>) {
        let restaurant = RestaurantInfo::default();
        let client = Client::new(Menu::default(), restaurant.clone()).start();
        let (tx, rx) = oneshot::channel();
        let ui = UIHandler::new(client.clone(), restaurant, Some(tx)).start();
        (client, ui, rx)
    }

    async fn type_line(ui: &Addr<UIHandler>, line: &str) {
        ui.send(UserInput(line.to_string())).await.unwrap();
    }

    #[actix_rt::test]
    async fn test_typed_commands_reach_the_cart() {
        let (client, ui, _rx) = start_pair();
        type_line(&ui, "category fajita").await;
        type_line(&ui, "add 4").await;
        type_line(&ui, "add 4").await;
        type_line(&ui, "set address شارع هائل").await;
        type_line(&ui, "set phone 770000000").await;

        let cart = client.send(GetStatus).await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, "fajita-large-cheese");
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total, 2200);
        assert_eq!(cart.customer.address, "شارع هائل");
        assert!(cart.can_submit);
    }

    #[actix_rt::test]
    async fn test_invalid_lines_do_not_change_state() {
        let (client, ui, _rx) = start_pair();
        type_line(&ui, "add 99").await;
        type_line(&ui, "fly me to the moon").await;
        type_line(&ui, "qty broast-1 3").await;

        let cart = client.send(GetStatus).await.unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, 0);
    }

    #[actix_rt::test]
    async fn test_page_navigation() {
        let (_client, ui, _rx) = start_pair();
        assert_eq!(ui.send(GetCurrentPage).await.unwrap(), Page::Home);
        type_line(&ui, "page delivery").await;
        assert_eq!(ui.send(GetCurrentPage).await.unwrap(), Page::Delivery);
        type_line(&ui, "go /").await;
        assert_eq!(ui.send(GetCurrentPage).await.unwrap(), Page::Home);
    }

    #[actix_rt::test]
    async fn test_quit_fires_shutdown() {
        let (_client, ui, rx) = start_pair();
        type_line(&ui, "quit").await;
        assert!(rx.await.is_ok());
    }
}
