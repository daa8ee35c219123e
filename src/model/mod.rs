//! Domain data types: the static dish catalog entry, the cart accumulator,
//! the order record, and the session identity.

pub mod cart;
pub mod dish;
pub mod order;
pub mod user;

pub use cart::{Cart, CartLine};
pub use dish::{Dish, DishId};
pub use order::{Order, OrderId, OrderStatus};
pub use user::{Role, User};
