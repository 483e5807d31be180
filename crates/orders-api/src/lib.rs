//! Client to the order-management REST API and the application state that
//! drives it from UI events.

pub mod api;
pub mod app;
pub mod notify;

pub use {
    api::{Error, OrdersApi},
    app::OrderApp,
    notify::{Confirm, LogNotifier, Notification, Notifier, Severity},
};
