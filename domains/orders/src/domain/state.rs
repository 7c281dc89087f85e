//! State machine for order status transitions
//!
//! Pending → Shipped → Delivered, with cancellation allowed from Pending
//! and Shipped. Delivered and Cancelled are terminal.

use thiserror::Error;

use crate::domain::entities::OrderStatus;

/// Errors that can occur during status transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot transition from {from} to {to} via {event}")]
    InvalidTransition {
        from: String,
        to: String,
        event: String,
    },

    #[error("Terminal state: {0} is a terminal state and cannot transition")]
    TerminalState(String),
}

impl OrderStatus {
    /// Get all valid next statuses from the current status
    pub fn valid_transitions(&self) -> &'static [OrderStatus] {
        match self {
            Self::Pending => &[Self::Shipped, Self::Cancelled],
            Self::Shipped => &[Self::Delivered, Self::Cancelled],
            Self::Delivered => &[],
            Self::Cancelled => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

/// Events that trigger order status transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderEvent {
    Ship,
    Deliver,
    Cancel,
}

impl std::fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ship => write!(f, "ship"),
            Self::Deliver => write!(f, "deliver"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

/// Order status state machine
pub struct OrderStateMachine;

impl OrderStateMachine {
    /// Attempt a status transition
    pub fn transition(
        current: OrderStatus,
        event: OrderEvent,
    ) -> Result<OrderStatus, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        let next = match (&current, &event) {
            (OrderStatus::Pending, OrderEvent::Ship) => OrderStatus::Shipped,
            (OrderStatus::Pending, OrderEvent::Cancel) => OrderStatus::Cancelled,
            (OrderStatus::Shipped, OrderEvent::Deliver) => OrderStatus::Delivered,
            (OrderStatus::Shipped, OrderEvent::Cancel) => OrderStatus::Cancelled,
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    to: "unknown".to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }
}
