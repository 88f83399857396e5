//! Products, attribute combinations and stock.
//!
//! A product with attributes (size, color, …) is sold through
//! combinations: one per concrete choice of values, each with its own
//! stock and optional price override.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Attribute name to chosen value.
pub type Selection = BTreeMap<String, String>;

/// An attribute a shopper chooses a value for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

/// A concrete, purchasable choice of attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    pub id: String,
    pub attributes: Selection,
    #[serde(default)]
    pub stock: u32,
    /// Overrides the product price when set.
    #[serde(default)]
    pub price: Option<f64>,
}

impl Combination {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether every entry of `selection` agrees with this combination,
    /// ignoring `except`.
    fn agrees_with(&self, selection: &Selection, except: Option<&str>) -> bool {
        selection
            .iter()
            .filter(|(name, _)| Some(name.as_str()) != except)
            .all(|(name, value)| self.attributes.get(name) == Some(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub combinations: Vec<Combination>,
    /// Stock for products sold without combinations.
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Whether the product is sold through combinations.
    pub fn has_combinations(&self) -> bool {
        !self.combinations.is_empty()
    }

    /// Finds the combination matching `selection` exactly.
    ///
    /// Every attribute of the product must be selected; a partial selection
    /// matches nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_builder::{Product, Selection};
    ///
    /// let product: Product = serde_json::from_str(r#"{
    ///     "id": "tee", "name": "Tee", "price": 20.0,
    ///     "attributes": [{"name": "size", "values": ["S", "M"]}],
    ///     "combinations": [
    ///         {"id": "tee-s", "attributes": {"size": "S"}, "stock": 3},
    ///         {"id": "tee-m", "attributes": {"size": "M"}, "stock": 0}
    ///     ]
    /// }"#).unwrap();
    ///
    /// let selection = Selection::from([("size".to_string(), "S".to_string())]);
    /// assert_eq!(product.find_combination(&selection).map(|c| c.id.as_str()), Some("tee-s"));
    /// ```
    pub fn find_combination(&self, selection: &Selection) -> Option<&Combination> {
        let complete = self
            .attributes
            .iter()
            .all(|attribute| selection.contains_key(&attribute.name));
        if !complete {
            return None;
        }
        self.combinations
            .iter()
            .find(|combination| combination.agrees_with(selection, None))
    }

    /// Values of `attribute` that can still be chosen given the rest of the
    /// selection: some in-stock combination has that value and agrees with
    /// every other selected attribute.
    ///
    /// Values keep the order the product lists them in.
    pub fn available_values(&self, attribute: &str, selection: &Selection) -> Vec<&str> {
        let Some(definition) = self.attributes.iter().find(|a| a.name == attribute) else {
            return Vec::new();
        };
        definition
            .values
            .iter()
            .filter(|value| {
                self.combinations.iter().any(|combination| {
                    combination.in_stock()
                        && combination.attributes.get(attribute) == Some(*value)
                        && combination.agrees_with(selection, Some(attribute))
                })
            })
            .map(String::as_str)
            .collect()
    }

    /// Price of the given combination, or the product price.
    pub fn effective_price(&self, combination: Option<&Combination>) -> f64 {
        combination
            .and_then(|combination| combination.price)
            .unwrap_or(self.price)
    }

    /// Stock available for the given combination, or the product's own stock.
    pub fn available_stock(&self, combination: Option<&Combination>) -> u32 {
        combination.map_or(self.stock, |combination| combination.stock)
    }

    /// Whether anything of this product can be bought.
    pub fn in_stock(&self) -> bool {
        if self.has_combinations() {
            self.combinations.iter().any(Combination::in_stock)
        } else {
            self.stock > 0
        }
    }
}

/// Read-only product lookup.
pub trait CatalogSource: Send + Sync {
    fn product(&self, id: &str) -> Option<&Product>;

    /// All products, in catalog order.
    fn products(&self) -> Vec<&Product>;
}

/// A catalog held in memory, for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    order: Vec<String>,
    products: HashMap<String, Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product);
        }
        catalog
    }

    /// Adds or replaces a product.
    pub fn insert(&mut self, product: Product) {
        if !self.products.contains_key(&product.id) {
            self.order.push(product.id.clone());
        }
        self.products.insert(product.id.clone(), product);
    }
}

impl CatalogSource for InMemoryCatalog {
    fn product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    fn products(&self) -> Vec<&Product> {
        self.order
            .iter()
            .filter_map(|id| self.products.get(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(pairs: &[(&str, &str)]) -> Selection {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn combo(id: &str, size: &str, color: &str, stock: u32) -> Combination {
        Combination {
            id: id.to_string(),
            attributes: sel(&[("size", size), ("color", color)]),
            stock,
            price: None,
        }
    }

    fn shirt() -> Product {
        Product {
            id: "shirt".into(),
            name: "Shirt".into(),
            price: 30.0,
            attributes: vec![
                Attribute {
                    name: "size".into(),
                    values: vec!["S".into(), "M".into(), "L".into()],
                },
                Attribute {
                    name: "color".into(),
                    values: vec!["red".into(), "blue".into()],
                },
            ],
            combinations: vec![
                combo("s-red", "S", "red", 2),
                combo("s-blue", "S", "blue", 0),
                combo("m-blue", "M", "blue", 5),
                Combination {
                    price: Some(35.0),
                    ..combo("l-red", "L", "red", 1)
                },
            ],
            stock: 0,
        }
    }

    #[test]
    fn test_exact_match() {
        let product = shirt();
        let found = product.find_combination(&sel(&[("size", "M"), ("color", "blue")]));
        assert_eq!(found.map(|c| c.id.as_str()), Some("m-blue"));
    }

    #[test]
    fn test_partial_selection_matches_nothing() {
        let product = shirt();
        assert!(product.find_combination(&sel(&[("size", "M")])).is_none());
    }

    #[test]
    fn test_missing_combination() {
        let product = shirt();
        assert!(product
            .find_combination(&sel(&[("size", "M"), ("color", "red")]))
            .is_none());
    }

    #[test]
    fn test_available_values_respect_other_selection_and_stock() {
        let product = shirt();
        assert_eq!(product.available_values("color", &sel(&[("size", "S")])), vec!["red"]);
        assert_eq!(product.available_values("size", &sel(&[("color", "blue")])), vec!["M"]);
        // The attribute's own current value is ignored.
        assert_eq!(
            product.available_values("size", &sel(&[("size", "S"), ("color", "red")])),
            vec!["S", "L"]
        );
        assert_eq!(product.available_values("size", &Selection::new()), vec!["S", "M", "L"]);
        assert!(product.available_values("fabric", &Selection::new()).is_empty());
    }

    #[test]
    fn test_effective_price() {
        let product = shirt();
        let large = product.find_combination(&sel(&[("size", "L"), ("color", "red")]));
        assert_eq!(product.effective_price(large), 35.0);
        let small = product.find_combination(&sel(&[("size", "S"), ("color", "red")]));
        assert_eq!(product.effective_price(small), 30.0);
        assert_eq!(product.effective_price(None), 30.0);
    }

    #[test]
    fn test_stock() {
        let product = shirt();
        assert!(product.in_stock());
        let simple = Product {
            combinations: vec![],
            attributes: vec![],
            stock: 0,
            ..shirt()
        };
        assert!(!simple.in_stock());
        assert_eq!(simple.available_stock(None), 0);
    }

    #[test]
    fn test_in_memory_catalog_keeps_order() {
        let mut catalog = InMemoryCatalog::with_products([
            Product { id: "b".into(), ..shirt() },
            Product { id: "a".into(), ..shirt() },
        ]);
        catalog.insert(Product {
            id: "b".into(),
            price: 1.0,
            ..shirt()
        });
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.product("b").map(|p| p.price), Some(1.0));
        assert!(catalog.product("zzz").is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let product: Product = serde_json::from_str(
            r#"{"id": "mug", "name": "Mug", "price": 12.5, "stock": 4}"#,
        )
        .unwrap();
        assert!(!product.has_combinations());
        assert!(product.in_stock());
    }
}
