use crate::error::VamosError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a composed order is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderChannel {
    WhatsApp,
    Sms,
}

impl fmt::Display for OrderChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderChannel::WhatsApp => write!(f, "WhatsApp"),
            OrderChannel::Sms => write!(f, "SMS"),
        }
    }
}

impl FromStr for OrderChannel {
    type Err = VamosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(OrderChannel::WhatsApp),
            "sms" | "text" => Ok(OrderChannel::Sms),
            other => Err(VamosError::InvalidCommand(format!(
                "unknown channel '{}', expected whatsapp or sms",
                other
            ))),
        }
    }
}
