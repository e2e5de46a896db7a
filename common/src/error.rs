use crate::types::customer_info::CustomerField;

/// Every way an operation on the ordering site can be refused.
#[derive(thiserror::Error, Debug)]
pub enum VamosError {
    #[error("The cart is empty, add something before ordering")]
    EmptyCart,
    #[error("Missing required field: {0}")]
    MissingCustomerField(CustomerField),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown menu item: {0}")]
    UnknownItem(String),
    #[error("Item {0} is not in the cart")]
    NotInCart(String),
    #[error("Invalid menu: {0}")]
    InvalidMenu(String),
    #[error("Failed to read menu file {path}: {source}")]
    MenuRead {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
