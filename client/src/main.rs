use actix::prelude::*;
use client::client_actors::client::Client;
use client::client_actors::ui_handler::UIHandler;
use common::types::menu::Menu;
use common::types::restaurant_info::RestaurantInfo;
use common::utils::print_welcome_message;
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::ctrl_c;
use tokio::sync::oneshot;
use tokio_stream::wrappers::LinesStream;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [menu.json]", args[0]);
        std::process::exit(1);
    }

    let menu = match args.get(1) {
        Some(path) => Menu::from_json_file(path).map_err(std::io::Error::other)?,
        None => Menu::default(),
    };
    let restaurant = RestaurantInfo::default();

    print_welcome_message(&restaurant.title, &restaurant.tagline);

    let client = Client::new(menu, restaurant.clone()).start();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    UIHandler::create(|ctx| {
        let lines = BufReader::new(tokio::io::stdin()).lines();
        ctx.add_stream(LinesStream::new(lines));
        UIHandler::new(client, restaurant, Some(shutdown_tx))
    });

    tokio::select! {
        _ = ctrl_c() => {
            println!("Ctrl-C received, shutting down...");
        }
        _ = shutdown_rx => {}
    }
    System::current().stop();
    Ok(())
}
