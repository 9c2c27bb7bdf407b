//! # Observability & Tracing
//!
//! Structured logging for the whole page system, built on the `tracing`
//! crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! log lines carry a `page` field instead. Levels come from `RUST_LOG`.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full command payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=chaintrust::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, reset, shutdown per page
//! - **Commands**: every command at `debug`, failures at `warn`
//! - **Lookups**: hit/miss per key at `debug`
//! - **Notifications**: each posted toast at `trace`
//!
//! A typical interaction at `RUST_LOG=debug`:
//!
//! ```text
//! DEBUG search: Sending request input="P001"
//! DEBUG Command page="TraceabilitySession" command=Search("P001")
//! DEBUG Trace lookup product_id="P001" found=true
//! DEBUG Command ok page="TraceabilitySession"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use the page field instead
        .compact()
        .init();
}
