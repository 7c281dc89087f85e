//! Messaging services: reply sending and AI draft generation

pub mod draft;
pub mod send;
