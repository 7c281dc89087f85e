//! Customer repository
//!
//! In-memory mock persistence with simulated round-trip latency. Ids are
//! assigned sequentially in the `C###` scheme of the seed data.

use std::sync::{Arc, RwLock};

use backoffice_common::{Error, Latency, Result};

use crate::domain::entities::{Customer, NewCustomer};

#[derive(Clone)]
pub struct CustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
    latency: Latency,
}

impl CustomerRepository {
    pub fn new(latency: Latency) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    pub fn seeded(customers: Vec<Customer>, latency: Latency) -> Self {
        Self {
            customers: Arc::new(RwLock::new(customers)),
            latency,
        }
    }

    /// List all customers in insertion order
    pub async fn list(&self) -> Result<Vec<Customer>> {
        self.latency.simulate().await;
        let customers = self.customers.read().expect("store lock poisoned");
        Ok(customers.clone())
    }

    /// Find a customer by id
    pub async fn get(&self, id: &str) -> Result<Option<Customer>> {
        self.latency.simulate().await;
        let customers = self.customers.read().expect("store lock poisoned");
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    /// Add a new customer, assigning the next id
    pub async fn add(&self, input: NewCustomer) -> Result<Customer> {
        input.validate()?;
        self.latency.simulate().await;

        let mut customers = self.customers.write().expect("store lock poisoned");
        let id = format!("C{:03}", customers.len() + 1);
        let customer = input.into_customer(id);

        tracing::debug!(customer_id = %customer.id, "Adding customer");

        customers.push(customer.clone());
        Ok(customer)
    }

    /// Replace an existing customer record
    pub async fn update(&self, id: &str, updated: Customer) -> Result<Customer> {
        self.latency.simulate().await;

        let mut customers = self.customers.write().expect("store lock poisoned");
        let slot = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("Customer {} not found", id)))?;

        *slot = updated.clone();
        Ok(updated)
    }
}
