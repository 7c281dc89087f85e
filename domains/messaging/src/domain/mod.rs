//! Domain entities and business rules for the Messaging domain

pub mod entities;
