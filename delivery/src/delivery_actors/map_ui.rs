use crate::commands::{MapCommand, help_lines};
use crate::delivery_actors::delivery_map::DeliveryMap;
use crate::messages::internal_messages::*;
use crate::messages::messages::UserInput;
use actix::dev::ToEnvelope;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::dtos::MapViewDTO;
use common::types::geofence::DeliveryCheck;
use std::io;
use tokio::sync::oneshot;

/// Actor MapUIHandler: reads map commands and forwards them to the
/// `DeliveryMap` actor.
pub struct MapUIHandler {
    pub map: Addr<DeliveryMap>,
    /// Fired once when the user quits or input ends.
    pub shutdown: Option<oneshot::Sender<()>>,
    pub logger: Logger,
}

pub fn view_line(status: &MapViewDTO) -> String {
    let zone = if status.center_in_zone {
        "inside the zone"
    } else {
        "outside the zone"
    };
    format!("Center {} zoom {} ({})", status.center, status.zoom, zone)
}

pub fn check_line(check: &DeliveryCheck) -> String {
    let verdict = if check.within {
        "✅ داخل منطقة التوصيل المجاني"
    } else {
        "❌ خارج منطقة التوصيل المجاني، يُرجى التواصل معنا"
    };
    format!("{} is {:.2} km away: {}", check.point, check.distance_km, verdict)
}

impl MapUIHandler {
    pub fn new(map: Addr<DeliveryMap>, shutdown: Option<oneshot::Sender<()>>) -> Self {
        Self {
            map,
            shutdown,
            logger: Logger::new("Map UI", Color::Magenta),
        }
    }

    fn request_shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }

    fn ask<M, F>(&mut self, msg: M, ctx: &mut Context<Self>, on_reply: F)
    where
        M: Message + Send + 'static,
        M::Result: Send,
        DeliveryMap: Handler<M>,
        <DeliveryMap as Actor>::Context: ToEnvelope<DeliveryMap, M>,
        F: FnOnce(&mut Self, M::Result) + 'static,
    {
        self.map
            .send(msg)
            .into_actor(self)
            .map(move |res, act, _ctx| match res {
                Ok(reply) => on_reply(act, reply),
                Err(e) => act
                    .logger
                    .error(format!("Delivery map unreachable: {}", e)),
            })
            .wait(ctx);
    }

    fn show_view(&mut self, status: MapViewDTO) {
        self.logger.info(view_line(&status));
    }

    fn handle_line(&mut self, line: &str, ctx: &mut Context<Self>) {
        if line.trim().is_empty() {
            return;
        }
        let command = match MapCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                self.logger.warn(e.to_string());
                return;
            }
        };
        self.logger.debug(format!("Command: {:?}", command));

        match command {
            MapCommand::Help => {
                for line in help_lines() {
                    self.logger.info(line);
                }
            }
            MapCommand::Status => self.ask(GetStatus, ctx, Self::show_view),
            MapCommand::Zoom(zoom) => self.ask(ZoomTo { zoom }, ctx, Self::show_view),
            MapCommand::ZoomAt(zoom, focus) => {
                self.ask(ZoomAt { zoom, focus }, ctx, Self::show_view)
            }
            MapCommand::Move(center) => self.ask(MoveTo { center }, ctx, Self::show_view),
            MapCommand::Check(point) => self.ask(CheckAddress { point }, ctx, |act, check| {
                act.logger.info(check_line(&check))
            }),
            MapCommand::GeoJson => self.ask(GetZoneGeoJson, ctx, |act, reply| match reply {
                Ok(raw) => println!("{}", raw),
                Err(e) => act.logger.error(format!("Failed to export zone: {}", e)),
            }),
            MapCommand::Quit => {
                self.request_shutdown();
                ctx.stop();
            }
        }
    }
}

impl Actor for MapUIHandler {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.ask(GetStatus, ctx, Self::show_view);
        self.logger.info("Type 'help' to see the available commands");
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.request_shutdown();
    }
}

impl StreamHandler<Result<String, io::Error>> for MapUIHandler {
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

impl Handler<UserInput> for MapUIHandler {
    type Result = ();

    fn handle(&mut self, msg: UserInput, ctx: &mut Self::Context) {
        self.handle_line(&msg.0, ctx);
    }
}
