//! Domain entities for the Customers domain

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_common::{Error, Result};

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_orders: u32,
    pub total_spent: Decimal,
}

/// Input for creating a customer; the repository assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl NewCustomer {
    /// Validate the input fields
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("Customer name is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(Error::Validation(format!(
                "Invalid email address: {}",
                self.email
            )));
        }
        Ok(())
    }

    /// Build the customer record with the assigned id
    pub fn into_customer(self, id: String) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            total_orders: 0,
            total_spent: Decimal::ZERO,
        }
    }
}
