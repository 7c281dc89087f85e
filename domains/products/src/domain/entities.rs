//! Domain entities for the Products domain

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_common::{Error, Result};

/// Product entity
///
/// `images` holds reference strings (URLs or data URLs); no real upload
/// pipeline exists behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub images: Vec<String>,
    pub category: String,
}

/// Input for creating a product; the repository assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
}

impl NewProduct {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("Product name is required".to_string()));
        }
        if self.price < Decimal::ZERO {
            return Err(Error::Validation(
                "Product price cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            images: self.images,
            category: self.category,
        }
    }
}
