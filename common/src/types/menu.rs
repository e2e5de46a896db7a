use crate::error::VamosError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in whole riyals.
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// How the user points at a category or item: by id or by its 1-based
/// position in the list currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    Id(String),
    Index(usize),
}

impl Selector {
    /// Numbers are positions, anything else is an id.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<usize>() {
            Ok(index) => Selector::Index(index),
            Err(_) => Selector::Id(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    /// Builds a menu, rejecting empty menus and duplicated ids.
    pub fn new(categories: Vec<MenuCategory>) -> Result<Self, VamosError> {
        let menu = Menu { categories };
        menu.validate()?;
        Ok(menu)
    }

    pub fn from_json(raw: &str) -> Result<Self, VamosError> {
        let menu: Menu = serde_json::from_str(raw)?;
        menu.validate()?;
        Ok(menu)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VamosError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| VamosError::MenuRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    fn validate(&self) -> Result<(), VamosError> {
        if self.categories.is_empty() {
            return Err(VamosError::InvalidMenu("menu has no categories".to_string()));
        }
        let mut category_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(VamosError::InvalidMenu(format!(
                    "duplicated category id '{}'",
                    category.id
                )));
            }
            for item in &category.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(VamosError::InvalidMenu(format!(
                        "duplicated item id '{}'",
                        item.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Id of the category shown when the page opens.
    pub fn first_category_id(&self) -> Option<&str> {
        self.categories.first().map(|c| c.id.as_str())
    }

    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn resolve_category(&self, selector: &Selector) -> Result<&MenuCategory, VamosError> {
        match selector {
            Selector::Id(id) => self
                .category(id)
                .ok_or_else(|| VamosError::UnknownCategory(id.clone())),
            Selector::Index(index) => index
                .checked_sub(1)
                .and_then(|i| self.categories.get(i))
                .ok_or_else(|| VamosError::UnknownCategory(index.to_string())),
        }
    }

    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.id == id)
    }

    /// Ids resolve across the whole menu, positions within `category_id`.
    pub fn resolve_item(
        &self,
        category_id: &str,
        selector: &Selector,
    ) -> Result<&MenuItem, VamosError> {
        match selector {
            Selector::Id(id) => self
                .find_item(id)
                .ok_or_else(|| VamosError::UnknownItem(id.clone())),
            Selector::Index(index) => self
                .category(category_id)
                .and_then(|c| index.checked_sub(1).and_then(|i| c.items.get(i)))
                .ok_or_else(|| VamosError::UnknownItem(index.to_string())),
        }
    }
}

fn item(id: &str, name: &str, price: u64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

fn category(id: &str, name: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        items,
    }
}

impl Default for Menu {
    /// The restaurant's current menu.
    fn default() -> Self {
        Menu {
            categories: vec![
                category("broast", "بروست", vec![item("broast-1", "بروست", 1200)]),
                category(
                    "beef-burger",
                    "برجر لحم",
                    vec![
                        item("beef-cheese", "برجر لحم مع الجبن", 700),
                        item("beef-cheese-egg", "برجر لحم مع الجبن والبيض", 900),
                        item("beef-double", "برجر دبل لحم وجبن", 1400),
                    ],
                ),
                category(
                    "chicken-burger",
                    "برجر دجاج",
                    vec![
                        item("chicken-cheese", "برجر دجاج مع الجبن", 700),
                        item("chicken-cheese-egg", "برجر دجاج مع الجبن والبيض", 900),
                        item("chicken-double", "برجر دبل دجاج وجبن", 1400),
                    ],
                ),
                category(
                    "shawarma",
                    "شاورما",
                    vec![
                        item("shawarma-small", "سندوتش شاورما صغير", 400),
                        item("shawarma-medium", "سندوتش شاورما وسط", 700),
                        item("shawarma-vamos", "سندوتش شاورما ڤاموس", 1000),
                        item("shawarma-plate", "صحن شاورما", 2000),
                    ],
                ),
                category(
                    "falafel",
                    "فلافل",
                    vec![
                        item("falafel-4", "4 حبات فلافل", 100),
                        item("falafel-small", "سندوتش فلافل صغير", 150),
                        item("falafel-arabic", "سندوتش فلافل خبز عربي", 250),
                        item("falafel-vamos", "سندوتش فلافل ڤاموس", 350),
                    ],
                ),
                category(
                    "fajita",
                    "فاهيتا",
                    vec![
                        item("fajita-small", "فاهيتا صغير عادي", 600),
                        item("fajita-small-cheese", "فاهيتا صغير مع الجبن", 700),
                        item("fajita-large", "فاهيتا كبير عادي", 1000),
                        item("fajita-large-cheese", "فاهيتا كبير مع الجبن", 1100),
                    ],
                ),
                category(
                    "zinger",
                    "زنجر",
                    vec![
                        item("zinger-small", "زنجر صغير عادي", 600),
                        item("zinger-small-cheese", "زنجر صغير مع الجبن", 700),
                        item("zinger-large", "زنجر كبير عادي", 1000),
                        item("zinger-large-cheese", "زنجر كبير مع الجبن", 1100),
                    ],
                ),
                category("fries", "فرايز", vec![item("fries", "فرايز", 1000)]),
                category(
                    "chicken-fries",
                    "تشيكن فرايز",
                    vec![item("chicken-fries", "تشيكن فرايز", 1500)],
                ),
                category(
                    "chips",
                    "شبس",
                    vec![
                        item("chips-plate", "طبق شبس", 300),
                        item("chips-sandwich", "سندويتش شبس مع الجبن", 150),
                    ],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_menu_is_valid() {
        let menu = Menu::default();
        assert!(Menu::new(menu.categories.clone()).is_ok());
        assert_eq!(menu.categories.len(), 10);
        assert_eq!(menu.first_category_id(), Some("broast"));
        assert_eq!(menu.find_item("shawarma-plate").map(|i| i.price), Some(2000));
    }

    #[test]
    fn resolves_categories_by_id_and_position() {
        let menu = Menu::default();
        let by_id = menu.resolve_category(&Selector::parse("falafel")).unwrap();
        let by_index = menu.resolve_category(&Selector::parse("5")).unwrap();
        assert_eq!(by_id, by_index);
        assert!(matches!(
            menu.resolve_category(&Selector::Index(0)),
            Err(VamosError::UnknownCategory(_))
        ));
        assert!(matches!(
            menu.resolve_category(&Selector::Index(11)),
            Err(VamosError::UnknownCategory(_))
        ));
        assert!(matches!(
            menu.resolve_category(&Selector::parse("pizza")),
            Err(VamosError::UnknownCategory(_))
        ));
    }

    #[test]
    fn positions_are_relative_to_the_given_category() {
        let menu = Menu::default();
        let item = menu.resolve_item("beef-burger", &Selector::Index(2)).unwrap();
        assert_eq!(item.id, "beef-cheese-egg");
        let item = menu.resolve_item("beef-burger", &Selector::parse("zinger-large")).unwrap();
        assert_eq!(item.price, 1000);
        assert!(menu.resolve_item("broast", &Selector::Index(2)).is_err());
    }

    #[test]
    fn loads_menu_from_json() {
        let raw = r#"{"categories":[{"id":"drinks","name":"Drinks","items":[
            {"id":"tea","name":"Tea","price":100},
            {"id":"juice","name":"Juice","price":350}]}]}"#;
        let menu = Menu::from_json(raw).unwrap();
        assert_eq!(menu.first_category_id(), Some("drinks"));
        assert_eq!(menu.find_item("juice").map(|i| i.price), Some(350));
    }

    #[test]
    fn rejects_invalid_menus() {
        assert!(matches!(
            Menu::from_json(r#"{"categories":[]}"#),
            Err(VamosError::InvalidMenu(_))
        ));
        let duplicated = r#"{"categories":[
            {"id":"a","name":"A","items":[{"id":"x","name":"X","price":1}]},
            {"id":"b","name":"B","items":[{"id":"x","name":"X2","price":2}]}]}"#;
        assert!(matches!(
            Menu::from_json(duplicated),
            Err(VamosError::InvalidMenu(_))
        ));
        assert!(matches!(Menu::from_json("not json"), Err(VamosError::Json(_))));
        assert!(matches!(
            Menu::from_json_file("/definitely/not/here.json"),
            Err(VamosError::MenuRead { .. })
        ));
    }
}
