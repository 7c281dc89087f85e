//! Products domain: catalog records and in-memory repository

pub mod domain;
pub mod repository;

pub use domain::entities::{NewProduct, Product};
pub use repository::ProductRepository;
