//! Generic page-session framework.
//!
//! This module provides the core building blocks for driving per-page view
//! state behind type-safe command channels.
//!
//! # Main Components
//!
//! - [`PageSession`] - Trait each page's state machine implements
//! - [`PageActor`] - Generic actor that owns a session
//! - [`SessionClient`] - Type-safe client for a page actor
//! - [`FrameworkError`] - Transport error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
