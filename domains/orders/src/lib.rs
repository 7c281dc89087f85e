//! Orders domain: order records, status state machine, in-memory repository

pub mod domain;
pub mod repository;

pub use domain::entities::{Order, OrderItem, OrderStatus};
pub use domain::state::{OrderEvent, OrderStateMachine, StateError};
pub use repository::OrderRepository;
