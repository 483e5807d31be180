//! UI-facing application state. Each operation follows the same shape:
//! build the request, await the call, fold the response into local state,
//! emit a notification. The order collection mirrors the server after
//! every successful mutation; failed calls never touch it.

use {
    crate::{
        api::OrdersApi,
        notify::{Confirm, Notification, Notifier},
    },
    model::{Order, OrderCreation, OrderStatus},
};

pub struct OrderApp {
    api: OrdersApi,
    notifier: Box<dyn Notifier>,
    confirm: Box<dyn Confirm>,
    pub orders: Vec<Order>,
    pub loading: bool,
    pub error: bool,
    pub show_create_modal: bool,
    pub show_edit_modal: bool,
    pub new_order: OrderCreation,
    pub editing_order: Option<Order>,
}

impl OrderApp {
    pub fn new(api: OrdersApi, notifier: Box<dyn Notifier>, confirm: Box<dyn Confirm>) -> Self {
        Self {
            api,
            notifier,
            confirm,
            orders: Vec::new(),
            loading: false,
            error: false,
            show_create_modal: false,
            show_edit_modal: false,
            new_order: OrderCreation::default(),
            editing_order: None,
        }
    }

    /// Replaces the local collection with the server's listing. On failure
    /// the previous collection stays untouched and the error flag is set.
    pub async fn load_orders(&mut self) {
        self.loading = true;
        self.error = false;
        match self.api.list().await {
            Ok(orders) => self.orders = orders,
            Err(err) => {
                tracing::error!(?err, "failed to load orders");
                self.error = true;
                self.notifier.notify(Notification::error("Failed to load orders"));
            }
        }
        self.loading = false;
    }

    /// Submits the creation draft. Invalid drafts abort with the specific
    /// rule's message before any request is sent.
    pub async fn create_order(&mut self) {
        if let Err(err) = self.new_order.validate() {
            self.notifier.notify(Notification::error(err.to_string()));
            return;
        }
        self.loading = true;
        match self.api.create(&self.new_order).await {
            Ok(order) => {
                self.orders.push(order);
                self.new_order = OrderCreation::default();
                self.show_create_modal = false;
                self.notifier
                    .notify(Notification::success("Order created successfully"));
            }
            Err(err) => {
                tracing::error!(?err, "failed to create order");
                self.notifier.notify(Notification::error("Failed to create order"));
            }
        }
        self.loading = false;
    }

    /// Buffers a copy of the order for editing and opens the edit UI.
    pub fn edit_order(&mut self, order: Order) {
        self.editing_order = Some(order);
        self.show_edit_modal = true;
    }

    /// Submits the edit buffer as a full update. The matching local entry
    /// is replaced with the server's version; if the id is gone from the
    /// collection the response is dropped.
    pub async fn update_order(&mut self) {
        let Some(order) = self.editing_order.clone() else {
            return;
        };
        if let Err(err) = order.validate() {
            self.notifier.notify(Notification::error(err.to_string()));
            return;
        }
        self.loading = true;
        match self.api.update(&order).await {
            Ok(updated) => {
                if let Some(existing) = self.orders.iter_mut().find(|o| o.id == updated.id) {
                    *existing = updated;
                }
                self.show_edit_modal = false;
                self.editing_order = None;
                self.notifier
                    .notify(Notification::success("Order updated successfully"));
            }
            Err(err) => {
                tracing::error!(?err, "failed to update order");
                self.notifier.notify(Notification::error("Failed to update order"));
            }
        }
        self.loading = false;
    }

    /// Patches a single order's status. Only the status field of the cached
    /// entry is touched; the other fields keep their previously cached
    /// values even if the server changed them.
    pub async fn update_order_status(&mut self, id: i64, status: OrderStatus) {
        self.loading = true;
        match self.api.patch_status(id, status).await {
            Ok(()) => {
                if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
                    order.status = status;
                }
                self.notifier
                    .notify(Notification::success("Status updated successfully"));
            }
            Err(err) => {
                tracing::error!(?err, "failed to update order status");
                self.notifier.notify(Notification::error("Failed to update status"));
            }
        }
        self.loading = false;
    }

    /// Deletes an order after the user confirms. Declining aborts without
    /// a request or a notification.
    pub async fn delete_order(&mut self, id: i64) {
        if !self.confirm.confirm("Are you sure you want to delete this order?") {
            return;
        }
        self.loading = true;
        match self.api.delete(id).await {
            Ok(()) => {
                self.orders.retain(|order| order.id != id);
                self.notifier
                    .notify(Notification::success("Order deleted successfully"));
            }
            Err(err) => {
                tracing::error!(?err, "failed to delete order");
                self.notifier.notify(Notification::error("Failed to delete order"));
            }
        }
        self.loading = false;
    }
}
