//! Product repository
//!
//! In-memory mock persistence with simulated round-trip latency. Ids are
//! assigned sequentially in the `P###` scheme of the seed data. Unlike
//! customers, products can be deleted.

use std::sync::{Arc, RwLock};

use backoffice_common::{Error, Latency, Result};

use crate::domain::entities::{NewProduct, Product};

#[derive(Clone)]
pub struct ProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    latency: Latency,
}

impl ProductRepository {
    pub fn new(latency: Latency) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    pub fn seeded(products: Vec<Product>, latency: Latency) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            latency,
        }
    }

    /// List all products in insertion order
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.latency.simulate().await;
        let products = self.products.read().expect("store lock poisoned");
        Ok(products.clone())
    }

    /// Find a product by id
    pub async fn get(&self, id: &str) -> Result<Option<Product>> {
        self.latency.simulate().await;
        let products = self.products.read().expect("store lock poisoned");
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    /// Add a new product, assigning the next id
    pub async fn add(&self, input: NewProduct) -> Result<Product> {
        input.validate()?;
        self.latency.simulate().await;

        let mut products = self.products.write().expect("store lock poisoned");
        let id = format!("P{:03}", products.len() + 1);
        let product = input.into_product(id);

        tracing::debug!(product_id = %product.id, "Adding product");

        products.push(product.clone());
        Ok(product)
    }

    /// Replace an existing product record
    pub async fn update(&self, id: &str, updated: Product) -> Result<Product> {
        self.latency.simulate().await;

        let mut products = self.products.write().expect("store lock poisoned");
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("Product {} not found", id)))?;

        *slot = updated.clone();
        Ok(updated)
    }

    /// Remove a product from the catalog
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.latency.simulate().await;

        let mut products = self.products.write().expect("store lock poisoned");
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("Product {} not found", id)))?;

        tracing::debug!(product_id = %id, "Deleting product");

        products.remove(index);
        Ok(())
    }
}
