//! Customers domain: customer records and in-memory repository

pub mod domain;
pub mod repository;

pub use domain::entities::{Customer, NewCustomer};
pub use repository::CustomerRepository;
