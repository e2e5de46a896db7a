use serde::{Deserialize, Serialize};
use std::fmt;

/// The two pages of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// Menu and cart.
    #[default]
    Home,
    /// Free delivery zone.
    Delivery,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Delivery];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Delivery => "/delivery",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "الرئيسية",
            Page::Delivery => "التوصيل المجاني",
        }
    }

    /// Accepts a route path or a short name.
    pub fn from_route(route: &str) -> Option<Page> {
        match route.trim().to_ascii_lowercase().as_str() {
            "/" | "home" | "menu" => Some(Page::Home),
            "/delivery" | "delivery" => Some(Page::Delivery),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.path())
    }
}
