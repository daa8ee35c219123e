//! # Gourmet Express POS
//!
//! A small restaurant point-of-sale core: customers build a cart from a
//! fixed menu and submit a table order; an admin view lists, filters, and
//! completes orders. The order collection is mirrored into a single named
//! storage slot and synchronized across every view attached to that slot,
//! the way browser tabs share one localStorage key.
//!
//! ## Architecture
//!
//! - [`model`] — the domain data: dishes, cart lines, orders, identities.
//! - [`menu`] — the static catalog collaborator (dishes and table labels).
//! - [`store`] — the order store. Each view runs one store actor that owns
//!   its in-memory collection and processes requests sequentially; a typed
//!   [`OrderStoreClient`] turns method calls into messages.
//! - [`slot`] — the persistence adapter: full-replace writes to one shared
//!   slot, origin-tagged change broadcasts, silent degradation on missing
//!   or malformed contents.
//! - [`session`] / [`terminal`] — identity + screen state machine, and the
//!   view controller that routes user actions through it.
//! - [`recommend`] — the fire-and-forget upsell collaborator; failures are
//!   replaced by a fixed fallback and never block checkout.
//! - [`runtime`] — lifecycle orchestration ([`PosSystem`]) and tracing
//!   setup.
//! - [`ids`] — injectable id and clock generators, deterministic in tests.
//!
//! ## Synchronization model
//!
//! The slot is the single shared mutable resource; each store actor's
//! collection is a cache of it. A mutation serializes the full collection
//! and replaces the slot's value; every *other* actor on the slot refreshes
//! from the broadcast change, while the writer recognizes its own origin
//! token and skips the echo. Concurrent writers are last-write-wins.
//!
//! ## Quick start
//!
//! ```rust
//! use gourmet_pos::model::CartLine;
//! use gourmet_pos::{menu, MemorySlot, OrderFilter, PosSystem};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut system = PosSystem::new(Arc::new(MemorySlot::new()));
//!     let store = system.attach_store();
//!
//!     let pho = menu::dishes().remove(0);
//!     let order = store
//!         .submit(vec![CartLine { dish: pho, quantity: 2 }], "Bàn 01", "lan")
//!         .await
//!         .unwrap();
//!     assert_eq!(order.total_price, 130_000);
//!
//!     let pending = store.list(OrderFilter::Pending).await.unwrap();
//!     assert_eq!(pending.len(), 1);
//!
//!     drop(store);
//!     system.shutdown().await;
//! }
//! ```

pub mod ids;
pub mod menu;
pub mod model;
pub mod recommend;
pub mod runtime;
pub mod session;
pub mod slot;
pub mod store;
pub mod terminal;

pub use model::{Cart, CartLine, Dish, DishId, Order, OrderId, OrderStatus, Role, User};
pub use recommend::{Recommender, FALLBACK_TIP};
pub use runtime::{setup_tracing, PosSystem};
pub use session::{Screen, Session};
pub use slot::{FileSlot, MemorySlot, StorageSlot, SLOT_NAME};
pub use store::{OrderFilter, OrderStoreClient, StoreError, StoreStats};
pub use terminal::{Terminal, TerminalError};
