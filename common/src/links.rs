//! Outbound links: order messages sent through WhatsApp or SMS, and the
//! static contact links shown in the footer.

use crate::constants::{CURRENCY, NOT_SPECIFIED, WHATSAPP_BASE_URL};
use crate::error::VamosError;
use crate::types::cart::Cart;
use crate::types::customer_info::CustomerInfo;
use crate::types::order_channel::OrderChannel;
use crate::types::restaurant_info::RestaurantInfo;
use crate::utils::format_price;
use serde::{Deserialize, Serialize};

/// A composed order, ready to be opened by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLink {
    pub channel: OrderChannel,
    pub message: String,
    pub url: String,
}

fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

/// One `"<name> x<qty> - <subtotal> ريال"` line per cart item.
pub fn order_lines(cart: &Cart) -> String {
    cart.items()
        .iter()
        .map(|item| {
            format!(
                "{} x{} - {} {}",
                item.name,
                item.quantity,
                format_price(item.subtotal()),
                CURRENCY
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn total_line(cart: &Cart) -> String {
    format!("الإجمالي: {} {}", format_price(cart.total()), CURRENCY)
}

pub fn compose_whatsapp_message(cart: &Cart, customer: &CustomerInfo) -> String {
    let location = if customer.location.trim().is_empty() {
        String::new()
    } else {
        format!("رابط الموقع: {}", customer.location)
    };
    let notes = if customer.notes.trim().is_empty() {
        String::new()
    } else {
        format!("ملاحظات: {}", customer.notes)
    };
    format!(
        "مرحباً، أريد أن أطلب:\n\n{}\n\n{}\n\nالعنوان: {}\nرقم التواصل: {}\n{}\n{}\n\nشكراً لكم",
        order_lines(cart),
        total_line(cart),
        or_not_specified(&customer.address),
        or_not_specified(&customer.phone),
        location,
        notes
    )
}

pub fn compose_sms_message(cart: &Cart, customer: &CustomerInfo, restaurant_name: &str) -> String {
    format!(
        "طلب من {}:\n{}\n{}\nالعنوان: {} - رقم: {}",
        restaurant_name,
        order_lines(cart),
        total_line(cart),
        or_not_specified(&customer.address),
        or_not_specified(&customer.phone)
    )
}

pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        phone,
        urlencoding::encode(message)
    )
}

pub fn sms_url(phone: &str, message: &str) -> String {
    format!("sms:+{}?body={}", phone, urlencoding::encode(message))
}

/// Composes the order for `channel`. Refused while the cart is empty or a
/// required delivery field is blank.
pub fn build_order_link(
    channel: OrderChannel,
    cart: &Cart,
    customer: &CustomerInfo,
    restaurant: &RestaurantInfo,
) -> Result<OrderLink, VamosError> {
    if cart.is_empty() {
        return Err(VamosError::EmptyCart);
    }
    if let Some(field) = customer.missing_required() {
        return Err(VamosError::MissingCustomerField(field));
    }
    let (message, url) = match channel {
        OrderChannel::WhatsApp => {
            let message = compose_whatsapp_message(cart, customer);
            let url = whatsapp_url(&restaurant.phone, &message);
            (message, url)
        }
        OrderChannel::Sms => {
            let message = compose_sms_message(cart, customer, &restaurant.name);
            let url = sms_url(&restaurant.phone, &message);
            (message, url)
        }
    };
    Ok(OrderLink {
        channel,
        message,
        url,
    })
}

/// Static links of the footer and header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub call: String,
    pub whatsapp: String,
    pub email: String,
    pub maps: String,
    pub instagram: String,
    pub facebook: String,
}

impl ContactLinks {
    pub fn for_restaurant(restaurant: &RestaurantInfo) -> Self {
        Self {
            call: format!("tel:+{}", restaurant.phone),
            whatsapp: format!("{}/{}", WHATSAPP_BASE_URL, restaurant.phone),
            email: format!("mailto:{}", restaurant.email),
            maps: restaurant.maps_url.clone(),
            instagram: restaurant.instagram_url.clone(),
            facebook: restaurant.facebook_url.clone(),
        }
    }
}
