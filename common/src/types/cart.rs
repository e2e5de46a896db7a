use crate::error::VamosError;
use crate::types::menu::MenuItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl CartItem {
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Cart lines in the order they were first added. A line never has quantity 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .map(CartItem::subtotal)
            .fold(0, u64::saturating_add)
    }

    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.items.iter().find(|i| i.id == id).map(|i| i.quantity)
    }

    /// Adds one unit of `item`, merging with an existing line. A line
    /// already at `u32::MAX` stays there.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            }),
        }
    }

    /// Sets the quantity of a line; 0 removes it.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Result<(), VamosError> {
        if quantity == 0 {
            return self.remove_item(id);
        }
        let line = self
            .items
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or_else(|| VamosError::NotInCart(id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn increment(&mut self, id: &str) -> Result<(), VamosError> {
        let current = self
            .quantity_of(id)
            .ok_or_else(|| VamosError::NotInCart(id.to_string()))?;
        self.update_quantity(id, current.saturating_add(1))
    }

    pub fn decrement(&mut self, id: &str) -> Result<(), VamosError> {
        let current = self
            .quantity_of(id)
            .ok_or_else(|| VamosError::NotInCart(id.to_string()))?;
        self.update_quantity(id, current - 1)
    }

    pub fn remove_item(&mut self, id: &str) -> Result<(), VamosError> {
        let before = self.items.len();
        self.items.retain(|line| line.id != id);
        if self.items.len() == before {
            return Err(VamosError::NotInCart(id.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::menu::Menu;

    fn expected_total(cart: &Cart) -> u64 {
        cart.items()
            .iter()
            .map(|i| i.price * u64::from(i.quantity))
            .sum()
    }

    fn menu_item(id: &str) -> MenuItem {
        Menu::default().find_item(id).cloned().unwrap()
    }

    #[test]
    fn adding_twice_merges_lines() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("broast-1"));
        cart.add_item(&menu_item("broast-1"));
        cart.add_item(&menu_item("fries"));
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.quantity_of("broast-1"), Some(2));
        assert_eq!(cart.total(), 2 * 1200 + 1000);
    }

    #[test]
    fn total_follows_every_change() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0);
        for id in ["beef-cheese", "shawarma-plate", "falafel-4", "beef-cheese"] {
            cart.add_item(&menu_item(id));
            assert_eq!(cart.total(), expected_total(&cart));
        }
        cart.update_quantity("falafel-4", 7).unwrap();
        assert_eq!(cart.total(), expected_total(&cart));
        assert_eq!(cart.total(), 2 * 700 + 2000 + 7 * 100);

        cart.increment("shawarma-plate").unwrap();
        assert_eq!(cart.total(), expected_total(&cart));

        cart.decrement("beef-cheese").unwrap();
        assert_eq!(cart.total(), expected_total(&cart));

        cart.remove_item("shawarma-plate").unwrap();
        assert_eq!(cart.total(), expected_total(&cart));
        assert_eq!(cart.total(), 700 + 7 * 100);
    }

    #[test]
    fn zero_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("chips-plate"));
        cart.decrement("chips-plate").unwrap();
        assert!(cart.is_empty());

        cart.add_item(&menu_item("chips-plate"));
        cart.update_quantity("chips-plate", 0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn unknown_lines_are_rejected() {
        let mut cart = Cart::new();
        assert!(matches!(cart.update_quantity("tea", 2), Err(VamosError::NotInCart(_))));
        assert!(matches!(cart.increment("tea"), Err(VamosError::NotInCart(_))));
        assert!(matches!(cart.decrement("tea"), Err(VamosError::NotInCart(_))));
        assert!(matches!(cart.remove_item("tea"), Err(VamosError::NotInCart(_))));
    }

    #[test]
    fn huge_quantities_saturate() {
        let fries = menu_item("fries");
        let mut cart = Cart::new();
        cart.add_item(&fries);
        cart.update_quantity("fries", u32::MAX).unwrap();
        cart.add_item(&fries);
        cart.increment("fries").unwrap();
        assert_eq!(cart.quantity_of("fries"), Some(u32::MAX));

        let pricey = MenuItem {
            id: "gold-plate".to_string(),
            name: "طبق ذهبي".to_string(),
            price: u64::MAX / 2,
            ..fries.clone()
        };
        cart.add_item(&pricey);
        cart.add_item(&pricey);
        cart.add_item(&pricey);
        assert_eq!(cart.items()[1].subtotal(), u64::MAX);
        assert_eq!(cart.total(), u64::MAX);

        cart.decrement("fries").unwrap();
        assert_eq!(cart.quantity_of("fries"), Some(u32::MAX - 1));
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("zinger-large"));
        cart.add_item(&menu_item("fajita-small"));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
