use crate::error::VamosError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery form filled in next to the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub address: String,
    pub phone: String,
    /// Optional link to the customer's position on a map.
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerField {
    Address,
    Phone,
    Location,
    Notes,
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerField::Address => write!(f, "address"),
            CustomerField::Phone => write!(f, "phone"),
            CustomerField::Location => write!(f, "location"),
            CustomerField::Notes => write!(f, "notes"),
        }
    }
}

impl FromStr for CustomerField {
    type Err = VamosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "address" => Ok(CustomerField::Address),
            "phone" => Ok(CustomerField::Phone),
            "location" => Ok(CustomerField::Location),
            "notes" => Ok(CustomerField::Notes),
            other => Err(VamosError::InvalidCommand(format!(
                "unknown field '{}', expected address, phone, location or notes",
                other
            ))),
        }
    }
}

impl CustomerInfo {
    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CustomerField::Address => self.address = value,
            CustomerField::Phone => self.phone = value,
            CustomerField::Location => self.location = value,
            CustomerField::Notes => self.notes = value,
        }
    }

    /// First required field that is still blank, if any.
    pub fn missing_required(&self) -> Option<CustomerField> {
        if self.address.trim().is_empty() {
            Some(CustomerField::Address)
        } else if self.phone.trim().is_empty() {
            Some(CustomerField::Phone)
        } else {
            None
        }
    }

    /// Submission buttons are enabled only once address and phone are filled.
    pub fn can_submit(&self) -> bool {
        self.missing_required().is_none()
    }
}
