//! # Core Page-Session Framework
//!
//! This module defines the generic building blocks for the page system.
//!
//! ## Key Types
//!
//! - [`PageSession`]: The trait each page's state machine implements.
//! - [`PageActor`]: The generic actor that owns a session and serializes
//!   its commands.
//! - [`SessionClient`]: The generic client for communicating with a page
//!   actor.
//! - [`FrameworkError`]: Transport errors (e.g. ActorClosed).
//!
//! # Architecture Note
//! Every page in the demo has the same shape: private view state, a small
//! command vocabulary, and a derived view. By defining that contract once
//! (`PageSession`) we write the message loop, channel plumbing, and
//! logging once and reuse them for Home, Inventory, Traceability, and
//! Returns. Associated types keep the pages honest — an inventory command
//! cannot be sent to the returns page; the compiler rejects it.
//!
//! # Concurrency Model
//! Each [`PageActor`] runs in its own Tokio task and processes its own
//! commands *sequentially*, so a page's selection state needs no locks:
//! every user interaction runs to completion before the next one starts,
//! which is exactly the single-user model of the demo. Distinct pages are
//! independent actors and share nothing but the read-only catalog and the
//! notification sink, both injected as context at startup.

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait a page's state machine implements to be driven by [`PageActor`].
///
/// # Context Injection
/// Dependencies (the shared catalog, the notifier) are injected at
/// `run()` time via the `Context` associated type, not at construction.
/// Sessions stay plain data until the actor starts.
#[async_trait]
pub trait PageSession: Send + 'static {
    /// The page's command vocabulary (search, scan, view, ...).
    type Command: Send + Debug;

    /// The page's reply vocabulary, usually an enum mirroring `Command`.
    type Reply: Send + Debug;

    /// Runtime dependencies injected into every command. Use `()` if the
    /// page needs none.
    type Context: Send + Sync;

    /// Handles one command against the current session state.
    ///
    /// A lookup miss is **not** an `Err` — the session notifies and clears
    /// its selection instead. `Err` is reserved for invalid command
    /// payloads and is surfaced to the client as
    /// [`FrameworkError::Custom`].
    async fn handle(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Reply, String>;

    /// Returns the session to its initial state (the navigation hook).
    fn reset(&mut self);
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the page framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by page actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a page actor.
#[derive(Debug)]
pub enum SessionRequest<P: PageSession> {
    Command {
        command: P::Command,
        respond_to: Response<P::Reply>,
    },
    Reset {
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR
// =============================================================================

/// The generic actor that owns one page session.
///
/// This is the "server" half: it owns the session state and the receiver
/// end of the command channel, and it is the only code that ever touches
/// that state. No `Mutex` needed — exclusive ownership within the task.
pub struct PageActor<P: PageSession> {
    receiver: mpsc::Receiver<SessionRequest<P>>,
    session: P,
}

impl<P: PageSession> PageActor<P> {
    pub fn new(buffer_size: usize, session: P) -> (Self, SessionClient<P>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, session };
        let client = SessionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing commands until the channel
    /// closes (i.e. until every client has been dropped).
    pub async fn run(mut self, context: P::Context) {
        // Extract just the type name (e.g. "ReturnsSession" instead of
        // "chaintrust::returns_page::session::ReturnsSession").
        let page = std::any::type_name::<P>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(page, "Page session started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Command { command, respond_to } => {
                    debug!(page, ?command, "Command");
                    let result = self
                        .session
                        .handle(command, &context)
                        .await
                        .map_err(FrameworkError::Custom);
                    match &result {
                        Ok(_) => debug!(page, "Command ok"),
                        Err(e) => warn!(page, error = %e, "Command failed"),
                    }
                    let _ = respond_to.send(result);
                }
                SessionRequest::Reset { respond_to } => {
                    self.session.reset();
                    info!(page, "Session reset");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(page, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`PageActor`].
pub struct SessionClient<P: PageSession> {
    sender: mpsc::Sender<SessionRequest<P>>,
}

// Manual impl: cloning only clones the channel sender, so no bound on `P`
// is required.
impl<P: PageSession> Clone for SessionClient<P> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<P: PageSession> SessionClient<P> {
    pub fn new(sender: mpsc::Sender<SessionRequest<P>>) -> Self {
        Self { sender }
    }

    pub async fn command(&self, command: P::Command) -> Result<P::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Command { command, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn reset(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Reset { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- A minimal page: select a color, view it, reset it ---

    #[derive(Debug, Default)]
    struct SwatchSession {
        selected: Option<String>,
    }

    #[derive(Debug)]
    enum SwatchCommand {
        Select(String),
        View,
    }

    #[derive(Debug, PartialEq)]
    enum SwatchReply {
        Selection(Option<String>),
        View(Option<String>),
    }

    #[async_trait]
    impl PageSession for SwatchSession {
        type Command = SwatchCommand;
        type Reply = SwatchReply;
        type Context = Vec<String>; // the "catalog" of valid colors

        async fn handle(
            &mut self,
            command: SwatchCommand,
            ctx: &Vec<String>,
        ) -> Result<SwatchReply, String> {
            match command {
                SwatchCommand::Select(color) => {
                    self.selected = ctx.contains(&color).then_some(color);
                    Ok(SwatchReply::Selection(self.selected.clone()))
                }
                SwatchCommand::View => Ok(SwatchReply::View(self.selected.clone())),
            }
        }

        fn reset(&mut self) {
            self.selected = None;
        }
    }

    #[tokio::test]
    async fn page_actor_serializes_commands_and_resets() {
        let (actor, client) = PageActor::new(10, SwatchSession::default());
        let palette = vec!["teal".to_string(), "ochre".to_string()];
        tokio::spawn(actor.run(palette));

        // Miss leaves no selection.
        let reply = client.command(SwatchCommand::Select("puce".into())).await.unwrap();
        assert_eq!(reply, SwatchReply::Selection(None));

        // Hit selects; view reflects it.
        let reply = client.command(SwatchCommand::Select("teal".into())).await.unwrap();
        assert_eq!(reply, SwatchReply::Selection(Some("teal".into())));
        let reply = client.command(SwatchCommand::View).await.unwrap();
        assert_eq!(reply, SwatchReply::View(Some("teal".into())));

        // Reset restores the initial state.
        client.reset().await.unwrap();
        let reply = client.command(SwatchCommand::View).await.unwrap();
        assert_eq!(reply, SwatchReply::View(None));
    }

    #[tokio::test]
    async fn dropped_clients_shut_the_actor_down() {
        let (actor, client) = PageActor::new(4, SwatchSession::default());
        let handle = tokio::spawn(actor.run(vec![]));
        drop(client);
        handle.await.expect("actor task should exit cleanly");
    }
}
