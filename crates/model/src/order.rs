//! Contains the order types as serialized by the order-management API.

use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    strum::{AsRefStr, Display, EnumString},
};

/// Lifecycle state of an order.
#[derive(
    Eq, PartialEq, Clone, Copy, Debug, Default, Deserialize, Serialize, Hash, AsRefStr, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// An order as returned by the API.
///
/// `total`, `created_at` and `updated_at` are assigned by the server and
/// never computed locally.
#[derive(PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Pre-flight check applied before a full update is submitted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.customer_name, &self.product_name, self.quantity, self.price)
    }
}

/// Draft of a new order as captured by the creation form.
///
/// [`Default`] is the form's reset state.
#[derive(PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct OrderCreation {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub notes: String,
}

impl Default for OrderCreation {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            product_name: String::new(),
            quantity: 1,
            price: 0.,
            notes: String::new(),
        }
    }
}

impl OrderCreation {
    /// Pre-flight check applied before the draft is submitted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.customer_name, &self.product_name, self.quantity, self.price)
    }
}

/// Body of a status patch.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Deserialize, Serialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// A draft that failed the local checks. No request is sent for it; the
/// rendered message is what the user gets to see.
#[derive(Eq, PartialEq, Clone, Copy, Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("customer name is required")]
    MissingCustomerName,
    #[error("product name is required")]
    MissingProductName,
    #[error("quantity must be greater than 0")]
    NonPositiveQuantity,
    #[error("price must be greater than 0")]
    NonPositivePrice,
}

// The first failing rule wins. NaN prices fail the comparison and are
// rejected like any other non-positive value.
fn validate(
    customer_name: &str,
    product_name: &str,
    quantity: u32,
    price: f64,
) -> Result<(), ValidationError> {
    if customer_name.trim().is_empty() {
        return Err(ValidationError::MissingCustomerName);
    }
    if product_name.trim().is_empty() {
        return Err(ValidationError::MissingProductName);
    }
    if quantity == 0 {
        return Err(ValidationError::NonPositiveQuantity);
    }
    if !(price > 0.) {
        return Err(ValidationError::NonPositivePrice);
    }
    Ok(())
}
