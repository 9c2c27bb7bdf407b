#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # ChainTrust Demo Core
//!
//! > **The in-memory core of a "blockchain + AI retail" demo.**
//!
//! This crate implements the logic behind a four-page product demo — Home,
//! Inventory, Traceability, Returns — as isolated page sessions over a
//! shared, read-only catalog. Everything is mock: the "AI predictions" are
//! fixed strings, the "blockchain hashes" are random hex for visual
//! effect, and simulated actions (ship, restock, submit claim) produce
//! nothing but a toast notification.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why Page Sessions as Actors?
//!
//! Each page owns exactly one piece of mutable state: its current
//! selection (plus, for Returns, a claim form). Wrapping each page in an
//! actor gives us:
//! - **Isolation**: a page's state is private to its task; pages share
//!   only the immutable catalog and the notification sink.
//! - **Serialized interactions**: commands on one page run to completion
//!   in order, exactly like a single user clicking through a UI.
//! - **Type Safety**: an inventory command cannot reach the returns page;
//!   the compiler rejects it.
//!
//! ### Generics: The Power of `P`
//! You'll see `PageActor<P: PageSession>` everywhere. We wrote the message
//! loop, channel plumbing, and logging **once**, and it works for all four
//! pages.
//!
//! ### Mocking: Testing without Pain
//! Clients can be tested without spawning real actors. See the
//! [`framework::mock`] module.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Misses Are Not Errors
//! The only domain failure is a lookup miss. A miss emits a
//! destructive-severity notification and clears the page's selection; it
//! never becomes an `Err`. `Err` is reserved for transport faults and
//! invalid command payloads, with a typed error per page (e.g.
//! [`ReturnsError`](returns_page::ReturnsError)).
//!
//! ### 2. Total Derivations
//! Every derived value in [`present`] is total: zero stock totals yield
//! 0%, unparsable warranty periods yield 0 days remaining, and every
//! status-to-class mapping has an explicit default arm so unknown strings
//! degrade to neutral display instead of failing.
//!
//! ### 3. Concurrency Model
//! Each page actor runs in its own Tokio task and processes commands
//! sequentially (no locks needed for its state), but the four pages run in
//! parallel and never depend on one another.
//!
//! ### 4. Observability
//! We use `tracing` with structured fields throughout: commands at
//! `debug`, lookup hit/miss at `debug`, failures at `warn`. See
//! [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `PageActor<P>` / `SessionClient<P>` pair that powers every
//! page.
//! - **Key items**: [`PageSession`](framework::PageSession),
//!   [`PageActor`](framework::PageActor).
//!
//! ### 2. The Data ([`catalog`], [`present`], [`notify`])
//! The four fixed collections with their lookup engine, the pure
//! derivation helpers, and the fire-and-forget notification sink.
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific clients that hide the message passing.
//! - **Key items**: [`TraceabilityClient`](clients::TraceabilityClient),
//!   [`ReturnsClient`](clients::ReturnsClient).
//!
//! ### 4. The Pages ([`home_page`], [`inventory_page`],
//! [`traceability_page`], [`returns_page`])
//! Concrete [`PageSession`](framework::PageSession) implementations.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Spins up the four actors, wires the shared catalog and notifier, and
//! shuts everything down.
//! - **Key items**: [`DemoSystem`](lifecycle::DemoSystem),
//!   [`shutdown`](lifecycle::DemoSystem::shutdown).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo tour with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod catalog;
pub mod clients;
pub mod framework;
pub mod home_page;
pub mod inventory_page;
pub mod lifecycle;
pub mod notify;
pub mod present;
pub mod returns_page;
pub mod traceability_page;
