//! Orchestration: actor startup/shutdown wiring and tracing setup.

pub mod demo_system;
pub mod tracing;

pub use demo_system::DemoSystem;
pub use self::tracing::setup_tracing;
