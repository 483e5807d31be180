//! Wire model for the order-management API, shared by every client.

pub mod order;

pub use order::{Order, OrderCreation, OrderStatus, StatusUpdate, ValidationError};
