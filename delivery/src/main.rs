use actix::prelude::*;
use common::constants::DELIVERY_TIME;
use common::types::coordinate::Coordinate;
use common::types::geofence::GeofenceConfig;
use common::types::restaurant_info::RestaurantInfo;
use common::utils::print_welcome_message;
use delivery::delivery_actors::delivery_map::DeliveryMap;
use delivery::delivery_actors::map_ui::{MapUIHandler, check_line};
use delivery::messages::internal_messages::{CheckAddress, GetZoneGeoJson};
use std::env;
use std::io;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::ctrl_c;
use tokio::sync::oneshot;
use tokio_stream::wrappers::LinesStream;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [--geojson] [<lat> <lng>]", program);
    std::process::exit(1);
}

fn parse_point(program: &str, lat: &str, lng: &str) -> Coordinate {
    match (lat.parse::<f64>(), lng.parse::<f64>()) {
        (Ok(lat), Ok(lng)) if lat.is_finite() && lng.is_finite() => Coordinate::new(lat, lng),
        _ => usage(program),
    }
}

#[actix::main]
async fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "delivery".to_string());
    let geojson = args.iter().skip(1).any(|a| a == "--geojson");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--geojson").collect();
    let point = match positional.as_slice() {
        [] => None,
        [lat, lng] => Some(parse_point(&program, lat, lng)),
        _ => usage(&program),
    };

    let restaurant = RestaurantInfo::default();
    let zone = GeofenceConfig::default();
    let map = DeliveryMap::new(restaurant.clone(), zone).start();

    if geojson {
        let raw = map
            .send(GetZoneGeoJson)
            .await
            .map_err(io::Error::other)?
            .map_err(io::Error::other)?;
        println!("{}", raw);
        return Ok(());
    }

    print_welcome_message(&restaurant.title, "منطقة التوصيل المجاني");
    println!("🍔 {} - منطقة التوصيل {} كم", restaurant.name, zone.radius_km);
    println!("{}", DELIVERY_TIME);
    println!("موقع المطعم: {}", restaurant.maps_url);

    // a point on the command line is checked once, without opening the prompt
    if let Some(point) = point {
        let check = map
            .send(CheckAddress { point })
            .await
            .map_err(io::Error::other)?;
        println!("{}", check_line(&check));
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    MapUIHandler::create(|ctx| {
        let lines = BufReader::new(tokio::io::stdin()).lines();
        ctx.add_stream(LinesStream::new(lines));
        MapUIHandler::new(map, Some(shutdown_tx))
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
