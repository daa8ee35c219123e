use serde::{Deserialize, Serialize};

/// What a logged-in identity may do: customers write the cart and submit,
/// admins additionally transition order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

/// The identity attached to a session. Never persisted beyond the process.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    /// Display name, also stamped onto submitted orders as `customerName`.
    pub username: String,
    pub role: Role,
}
