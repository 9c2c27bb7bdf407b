//! # Mock Framework
//!
//! Utilities for testing page clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then inspect
//! the requests arriving on the receiver and answer them deterministically.
//! Or use [`MockClient`] for a fluent expectation API.

use crate::framework::{FrameworkError, PageSession, SessionClient, SessionRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request with its scripted response.
enum Expectation<P: PageSession> {
    Command {
        response: Result<P::Reply, FrameworkError>,
    },
    Reset {
        response: Result<(), FrameworkError>,
    },
}

/// A mock session client with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<TraceabilitySession>::new();
/// mock.expect_command().return_ok(TraceabilityReply::Selection(Some("P001".into())));
///
/// let client = TraceabilityClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockClient<P: PageSession> {
    client: SessionClient<P>,
    expectations: Arc<Mutex<VecDeque<Expectation<P>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<P: PageSession> MockClient<P> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<P>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<P>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request with the next expectation.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        SessionRequest::Command { respond_to, .. },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Reset { respond_to },
                        Some(Expectation::Reset { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: SessionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SessionClient<P> {
        self.client.clone()
    }

    /// Expects a `command` request.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<P> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `reset` request.
    pub fn expect_reset(&mut self) -> ResetExpectationBuilder<P> {
        ResetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<P: PageSession> Default for MockClient<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `command` expectations.
pub struct CommandExpectationBuilder<P: PageSession> {
    expectations: Arc<Mutex<VecDeque<Expectation<P>>>>,
}

impl<P: PageSession> CommandExpectationBuilder<P> {
    pub fn return_ok(self, reply: P::Reply) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Command { response: Ok(reply) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Command { response: Err(error) });
    }
}

/// Builder for `reset` expectations.
pub struct ResetExpectationBuilder<P: PageSession> {
    expectations: Arc<Mutex<VecDeque<Expectation<P>>>>,
}

impl<P: PageSession> ResetExpectationBuilder<P> {
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Reset { response: Ok(()) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Reset { response: Err(error) });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When testing *client* logic we don't want to spin up a full
/// [`PageActor`](crate::framework::PageActor). The mock client sends
/// requests to a channel the test controls, so the test can assert the
/// request and script the response (success, failure, delay).
pub fn create_mock_client<P: PageSession>(
    buffer_size: usize,
) -> (SessionClient<P>, mpsc::Receiver<SessionRequest<P>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Helper to verify that the next request is a Command.
pub async fn expect_command<P: PageSession>(
    receiver: &mut mpsc::Receiver<SessionRequest<P>>,
) -> Option<(P::Command, crate::framework::Response<P::Reply>)> {
    match receiver.recv().await {
        Some(SessionRequest::Command { command, respond_to }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Reset.
pub async fn expect_reset<P: PageSession>(
    receiver: &mut mpsc::Receiver<SessionRequest<P>>,
) -> Option<crate::framework::Response<()>> {
    match receiver.recv().await {
        Some(SessionRequest::Reset { respond_to }) => Some(respond_to),
        _ => None,
    }
}
