//! Text rendering of the site sections. Every function returns the lines to
//! print so the UI handler decides how they are logged.

use common::constants::{CURRENCY, DELIVERY_TIME};
use common::links::{ContactLinks, OrderLink};
use common::types::dtos::{CartDTO, MenuDTO};
use common::types::geofence::{DeliveryCheck, GeofenceConfig};
use common::types::page::Page;
use common::types::restaurant_info::RestaurantInfo;
use common::utils::format_price;

fn price(amount: u64) -> String {
    format!("{} {}", format_price(amount), CURRENCY)
}

pub fn header_lines(restaurant: &RestaurantInfo) -> Vec<String> {
    vec![
        restaurant.title.clone(),
        restaurant.tagline.clone(),
        format!("📍 {}", restaurant.address),
        format!("🕐 {}", restaurant.working_hours),
    ]
}

pub fn navigation_lines(current: Page) -> Vec<String> {
    let tabs = Page::ALL
        .iter()
        .map(|page| {
            if *page == current {
                format!("[{}]", page)
            } else {
                format!(" {} ", page)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    vec![tabs]
}

/// Category tabs followed by the items of the selected one.
pub fn menu_lines(menu: &MenuDTO) -> Vec<String> {
    let mut lines = vec!["منيو الأطعمة".to_string()];
    for (i, category) in menu.categories.iter().enumerate() {
        let marker = if category.id == menu.selected_category {
            "*"
        } else {
            " "
        };
        lines.push(format!("{} {}. {} ({})", marker, i + 1, category.name, category.id));
    }
    if let Some(category) = menu.selected() {
        lines.push(format!("— {} —", category.name));
        for (i, item) in category.items.iter().enumerate() {
            lines.push(format!(
                "  {}. {} - {} [{}]",
                i + 1,
                item.name,
                price(item.price),
                item.id
            ));
        }
    }
    lines
}

pub fn cart_lines(cart: &CartDTO) -> Vec<String> {
    let mut lines = vec![format!(
        "🛒 سلة الطلبات ({}) - {}",
        cart.item_count,
        price(cart.total)
    )];
    if cart.items.is_empty() {
        lines.push("سلتك فارغة".to_string());
        return lines;
    }
    for item in &cart.items {
        lines.push(format!(
            "  {} [{}] {} x{} = {}",
            item.name,
            item.id,
            price(item.price),
            item.quantity,
            price(item.subtotal())
        ));
    }
    lines.push(format!("الإجمالي: {}", price(cart.total)));
    lines.push(format!(
        "العنوان: {} | رقم التواصل: {}",
        cart.customer.address, cart.customer.phone
    ));
    if cart.can_submit {
        lines.push("Ready to send: 'send whatsapp' or 'send sms'".to_string());
    } else {
        lines.push("Fill in address and phone to send the order".to_string());
    }
    lines
}

pub fn order_link_lines(link: &OrderLink) -> Vec<String> {
    let mut lines = vec![format!("Open this link to send your order via {}:", link.channel)];
    lines.push(link.url.clone());
    lines.push("Message preview:".to_string());
    lines.extend(link.message.lines().map(|l| format!("  {}", l)));
    lines
}

pub fn delivery_lines(zone: &GeofenceConfig) -> Vec<String> {
    vec![
        "منطقة التوصيل المجاني".to_string(),
        format!(
            "التوصيل مجاني داخل دائرة {} كم من المطعم",
            format_radius(zone.radius_km)
        ),
        format!("Center: {}", zone.center),
        DELIVERY_TIME.to_string(),
        "Check an address with 'zone <lat> <lng>'".to_string(),
    ]
}

fn format_radius(radius_km: f64) -> String {
    if radius_km.fract() == 0.0 {
        format!("{:.0}", radius_km)
    } else {
        format!("{:.1}", radius_km)
    }
}

pub fn zone_check_lines(check: &DeliveryCheck) -> Vec<String> {
    let verdict = if check.within {
        "✅ داخل منطقة التوصيل المجاني"
    } else {
        "❌ خارج منطقة التوصيل المجاني، يُرجى التواصل معنا"
    };
    vec![format!(
        "{} is {:.2} km from the restaurant: {}",
        check.point, check.distance_km, verdict
    )]
}

pub fn footer_lines(restaurant: &RestaurantInfo) -> Vec<String> {
    let links = ContactLinks::for_restaurant(restaurant);
    vec![
        format!("العنوان: {} ({})", restaurant.address, links.maps),
        format!("اتصال مباشر: {}", links.call),
        format!("واتساب: {}", links.whatsapp),
        format!("البريد الإلكتروني: {}", links.email),
        format!("Instagram: {}", links.instagram),
        format!("Facebook: {}", links.facebook),
        restaurant.working_hours.clone(),
    ]
}

pub fn help_lines() -> Vec<String> {
    [
        "menu                      show categories and items",
        "category <id|number>      select a category",
        "add <id|number>           add an item to the cart",
        "inc|dec <item-id>         change a quantity by one",
        "qty <item-id> <n>         set a quantity (0 removes)",
        "remove <item-id>          remove a line",
        "cart | clear              show or empty the cart",
        "set <field> <value>       address, phone, location or notes",
        "send <whatsapp|sms>       compose the order link",
        "page <home|delivery>      switch page",
        "zone <lat> <lng>          check the free delivery zone",
        "contact | export | quit",
    ]
    .iter()
    .map(|l| l.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::cart::Cart;
    use common::types::customer_info::CustomerInfo;
    use common::types::menu::Menu;

    #[test]
    fn menu_marks_selected_category() {
        let menu = Menu::default();
        let dto = MenuDTO {
            categories: menu.categories.clone(),
            selected_category: "chips".to_string(),
        };
        let lines = menu_lines(&dto);
        assert!(lines.iter().any(|l| l.starts_with("* 10. شبس")));
        assert!(lines.iter().any(|l| l.contains("طبق شبس - 300 ريال [chips-plate]")));
        assert!(!lines.iter().any(|l| l.contains("broast-1")));
    }

    #[test]
    fn cart_shows_total_and_submit_hint() {
        let menu = Menu::default();
        let mut cart = Cart::new();
        cart.add_item(menu.find_item("shawarma-plate").unwrap());
        cart.add_item(menu.find_item("shawarma-plate").unwrap());
        let dto = CartDTO::new(&cart, &CustomerInfo::default());
        let lines = cart_lines(&dto);
        assert_eq!(lines[0], "🛒 سلة الطلبات (1) - 4,000 ريال");
        assert!(lines.contains(&"الإجمالي: 4,000 ريال".to_string()));
        assert!(lines.last().unwrap().starts_with("Fill in"));

        let empty = cart_lines(&CartDTO::new(&Cart::new(), &CustomerInfo::default()));
        assert_eq!(empty[1], "سلتك فارغة");
    }

    #[test]
    fn navigation_highlights_current_page() {
        let lines = navigation_lines(Page::Delivery);
        assert!(lines[0].contains("[التوصيل المجاني (/delivery)]"));
        assert!(!lines[0].contains("[الرئيسية"));
    }

    #[test]
    fn delivery_page_mentions_radius() {
        let lines = delivery_lines(&GeofenceConfig::default());
        assert!(lines[1].contains("3 كم"));
    }
}
