use common::VamosError;
use common::types::coordinate::Coordinate;
use common::types::customer_info::CustomerField;
use common::types::menu::Selector;
use common::types::order_channel::OrderChannel;
use common::types::page::Page;

/// Everything the user can type at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    Help,
    Menu,
    Category(Selector),
    Add(Selector),
    Increment(String),
    Decrement(String),
    Quantity(String, u32),
    Remove(String),
    Cart,
    Clear,
    Set(CustomerField, String),
    Send(OrderChannel),
    Page(Page),
    Zone(Coordinate),
    Contact,
    Export,
    Quit,
}

fn invalid(msg: impl Into<String>) -> VamosError {
    VamosError::InvalidCommand(msg.into())
}

fn required<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str, VamosError> {
    arg.filter(|a| !a.is_empty())
        .ok_or_else(|| invalid(format!("usage: {}", usage)))
}

fn parse_degrees(raw: &str) -> Result<f64, VamosError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(format!("'{}' is not a coordinate", raw)))
}

impl UserCommand {
    pub fn parse(line: &str) -> Result<UserCommand, VamosError> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        match keyword.to_ascii_lowercase().as_str() {
            "help" | "?" => Ok(UserCommand::Help),
            "menu" => Ok(UserCommand::Menu),
            "category" | "cat" => {
                let raw = required(args.next(), "category <id|number>")?;
                Ok(UserCommand::Category(Selector::parse(raw)))
            }
            "add" => {
                let raw = required(args.next(), "add <id|number>")?;
                Ok(UserCommand::Add(Selector::parse(raw)))
            }
            "inc" | "+" => {
                let id = required(args.next(), "inc <item-id>")?;
                Ok(UserCommand::Increment(id.to_string()))
            }
            "dec" | "-" => {
                let id = required(args.next(), "dec <item-id>")?;
                Ok(UserCommand::Decrement(id.to_string()))
            }
            "qty" => {
                let usage = "qty <item-id> <quantity>";
                let id = required(args.next(), usage)?;
                let quantity = required(args.next(), usage)?
                    .parse::<u32>()
                    .map_err(|_| invalid(format!("usage: {}", usage)))?;
                Ok(UserCommand::Quantity(id.to_string(), quantity))
            }
            "remove" | "rm" => {
                let id = required(args.next(), "remove <item-id>")?;
                Ok(UserCommand::Remove(id.to_string()))
            }
            "cart" => Ok(UserCommand::Cart),
            "clear" => Ok(UserCommand::Clear),
            "set" => {
                let usage = "set <address|phone|location|notes> <value>";
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                let field = required(Some(field), usage)?.parse::<CustomerField>()?;
                Ok(UserCommand::Set(field, value.to_string()))
            }
            "send" => {
                let channel = required(args.next(), "send <whatsapp|sms>")?;
                Ok(UserCommand::Send(channel.parse()?))
            }
            "page" | "go" => {
                let route = required(args.next(), "page <home|delivery>")?;
                Page::from_route(route)
                    .map(UserCommand::Page)
                    .ok_or_else(|| invalid(format!("unknown page '{}'", route)))
            }
            "zone" => {
                let usage = "zone <lat> <lng>";
                let lat = parse_degrees(required(args.next(), usage)?)?;
                let lng = parse_degrees(required(args.next(), usage)?)?;
                Ok(UserCommand::Zone(Coordinate::new(lat, lng)))
            }
            "contact" => Ok(UserCommand::Contact),
            "export" => Ok(UserCommand::Export),
            "quit" | "exit" => Ok(UserCommand::Quit),
            "" => Err(invalid("empty input, type 'help'")),
            other => Err(invalid(format!("unknown command '{}', type 'help'", other))),
        }
    }
}
