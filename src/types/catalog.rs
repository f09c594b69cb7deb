use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Hair,
    Baked,
}

impl ToString for ProductCategory {
    fn to_string(&self) -> String {
        match self {
            ProductCategory::Hair => String::from("Hair Services"),
            ProductCategory::Baked => String::from("Baked Goods"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
}

impl Product {
    pub fn new(id: &str, name: &str, category: ProductCategory) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category,
        }
    }
}

/// The enumerated domain of orderable products and cupcake flavors.
///
/// Built once at startup and shared read-only with the form and the order
/// endpoint; both validate submitted ids and flavors against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub cupcake_flavors: Vec<String>,
}

pub const CUPCAKES: &str = "cupcakes";

impl Catalog {
    pub fn new(products: Vec<Product>, cupcake_flavors: Vec<String>) -> Catalog {
        Catalog {
            products,
            cupcake_flavors,
        }
    }

    pub fn storefront() -> Catalog {
        let products = vec![
            Product::new("blowout", "Signature Blowout ($15)", ProductCategory::Hair),
            Product::new("curly-q", "Curly Q ($17)", ProductCategory::Hair),
            Product::new("flat-iron", "Flat Iron ($10)", ProductCategory::Hair),
            Product::new("blowout-curls", "Blowout Curls ($15)", ProductCategory::Hair),
            Product::new("heat-curls", "Heat Styled Curls ($15)", ProductCategory::Hair),
            Product::new(CUPCAKES, "Cupcakes", ProductCategory::Baked),
            Product::new("brownies", "Brownies", ProductCategory::Baked),
            Product::new("strawberries", "Chocolate-Covered Strawberries", ProductCategory::Baked),
            Product::new("tiramisu", "Tiramisu Cups", ProductCategory::Baked),
        ];

        let cupcake_flavors = ["Vanilla", "Chocolate", "Red Velvet", "Lemon", "Strawberry", "Cookies & Cream"]
            .iter()
            .map(|flavor| flavor.to_string())
            .collect();

        Catalog::new(products, cupcake_flavors)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains_product(&self, id: &str) -> bool {
        self.product(id).is_some()
    }

    pub fn contains_flavor(&self, flavor: &str) -> bool {
        self.cupcake_flavors.iter().any(|f| f == flavor)
    }

    pub fn products_in(&self, category: ProductCategory) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::storefront()
    }
}
