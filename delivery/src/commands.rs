use common::VamosError;
use common::types::coordinate::Coordinate;

/// Commands accepted by the delivery map prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    Help,
    Status,
    Zoom(u8),
    ZoomAt(u8, Coordinate),
    Move(Coordinate),
    Check(Coordinate),
    GeoJson,
    Quit,
}

fn invalid(msg: impl Into<String>) -> VamosError {
    VamosError::InvalidCommand(msg.into())
}

fn parse_degrees(raw: &str) -> Result<f64, VamosError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(format!("'{}' is not a coordinate", raw)))
}

fn parse_point(lat: &str, lng: &str) -> Result<Coordinate, VamosError> {
    Ok(Coordinate::new(parse_degrees(lat)?, parse_degrees(lng)?))
}

impl MapCommand {
    pub fn parse(line: &str) -> Result<MapCommand, VamosError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        match (keyword.as_str(), args.as_slice()) {
            ("help" | "?", []) => Ok(MapCommand::Help),
            ("status" | "view", []) => Ok(MapCommand::Status),
            ("zoom", [zoom]) => Ok(MapCommand::Zoom(parse_zoom(zoom)?)),
            ("zoom", [zoom, lat, lng]) => {
                Ok(MapCommand::ZoomAt(parse_zoom(zoom)?, parse_point(lat, lng)?))
            }
            ("zoom", _) => Err(invalid("usage: zoom <level> [<lat> <lng>]")),
            ("move", [lat, lng]) => Ok(MapCommand::Move(parse_point(lat, lng)?)),
            ("move", _) => Err(invalid("usage: move <lat> <lng>")),
            ("check", [lat, lng]) => Ok(MapCommand::Check(parse_point(lat, lng)?)),
            ("check", _) => Err(invalid("usage: check <lat> <lng>")),
            ("geojson", []) => Ok(MapCommand::GeoJson),
            ("quit" | "exit", []) => Ok(MapCommand::Quit),
            ("", _) => Err(invalid("empty input, type 'help'")),
            (other, _) => Err(invalid(format!("unknown command '{}', type 'help'", other))),
        }
    }
}

/// Levels above `u8::MAX` are clamped later by the map view, so they only
/// need to be whole numbers here.
fn parse_zoom(raw: &str) -> Result<u8, VamosError> {
    raw.parse::<u32>()
        .map(|zoom| zoom.min(u32::from(u8::MAX)) as u8)
        .map_err(|_| invalid(format!("'{}' is not a zoom level", raw)))
}

pub fn help_lines() -> Vec<String> {
    [
        "status                    show center and zoom",
        "zoom <level>              zoom around the current center",
        "zoom <level> <lat> <lng>  zoom around a point",
        "move <lat> <lng>          pan the map",
        "check <lat> <lng>         check the free delivery zone",
        "geojson | quit",
    ]
    .iter()
    .map(|l| l.to_string())
    .collect()
}
