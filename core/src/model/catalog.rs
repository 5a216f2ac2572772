// Average unit weights in grams. The table is fixed at startup and identical
// for every session; nothing in the tracker edits it.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub key: &'static str,
    pub name: &'static str,
    pub grams: u32,
}

const STANDARD_PRODUCTS: &[Product] = &[
    Product {
        key: "bottle",
        name: "Plastic Water Bottle",
        grams: 20,
    },
    Product {
        key: "container",
        name: "Plastic food container",
        grams: 50,
    },
    Product {
        key: "bags",
        name: "Plastic bags",
        grams: 6,
    },
    Product {
        key: "wrap",
        name: "Wrap Materials (Groceries, Electronics)",
        grams: 5,
    },
    Product {
        key: "cup",
        name: "Plastic Cup",
        grams: 10,
    },
    Product {
        key: "liners",
        name: "Dustbin Covers and disposable bags",
        grams: 5,
    },
    Product {
        key: "wrapper",
        name: "Food and Beverage Wrapper",
        grams: 6,
    },
];

#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: &'static [Product],
}

impl ProductCatalog {
    pub fn standard() -> Self {
        Self {
            products: STANDARD_PRODUCTS,
        }
    }

    pub fn products(&self) -> &[Product] {
        self.products
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.products.iter().map(|p| p.key).collect()
    }

    pub fn weight_of(&self, key: &str) -> Option<u32> {
        self.products.iter().find(|p| p.key == key).map(|p| p.grams)
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_lookup() {
        let catalog = ProductCatalog::standard();
        assert_eq!(catalog.weight_of("bottle"), Some(20));
        assert_eq!(catalog.weight_of("container"), Some(50));
        assert_eq!(catalog.weight_of("straw"), None);
    }

    #[test]
    fn test_display_order_is_stable() {
        let catalog = ProductCatalog::standard();
        let keys = catalog.keys();
        assert_eq!(keys.first(), Some(&"bottle"));
        assert_eq!(keys.last(), Some(&"wrapper"));
        assert_eq!(keys.len(), 7);
    }
}
