//! Runtime orchestration and lifecycle management: building the shared
//! storage slot, spawning a store actor per attached view, coordinating
//! shutdown, and initializing the tracing infrastructure.

pub mod pos_system;
pub mod tracing;

pub use pos_system::PosSystem;
pub use tracing::setup_tracing;
