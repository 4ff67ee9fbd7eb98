//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running actor. Use it to unit-test code
//! that sits *around* a client (gateways, store adapters) without spawning actors.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted responses | Real state |
//! | **Error Injection** | Easy (`return_err`) | Hard (must close the channel) |
//! | **Use Case** | Logic around the client | The actor itself or the full system |
//!
//! ```rust
//! use checkout_orders::framework::mock::MockClient;
//! use checkout_orders::framework::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug)]
//! struct Widget { id: u32 }
//! impl ActorEntity for Widget {
//!     type Id = u32;
//!     fn id(&self) -> &u32 { &self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Widget>::new();
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(matches!(client.get(1).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Use [`create_mock_client`] when the test needs to inspect the raw requests instead.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Filter, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// Scripted answer for the next request.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    /// On success the request's mutator is applied to `current` and the result returned.
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    /// On success the request's filter is applied to `items`.
    Query {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("mock expectations poisoned")
        .push_back(expectation);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were registered; a request
/// that does not match the next expectation (kind or id) panics the mock task, which
/// the caller observes as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "MockClient: unexpected get id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update {
                            id,
                            mutator,
                            respond_to,
                        },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "MockClient: unexpected update id");
                        let response = response.map(|mut current| {
                            mutator(&mut current);
                            current
                        });
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Query { filter, respond_to },
                        Some(Expectation::Query { response }),
                    ) => {
                        let response = response
                            .map(|items| items.into_iter().filter(|i| filter(i)).collect::<Vec<T>>());
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("MockClient: unexpected request {:?}", request);
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: Ok(value),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        push(&self.expectations, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Create {
                response: Err(error),
            },
        );
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    /// Applies the incoming mutator to `current` and answers with the result.
    pub fn apply_to(self, current: T) {
        push(
            &self.expectations,
            Expectation::Update {
                id: self.id,
                response: Ok(current),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Update {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> QueryExpectationBuilder<T> {
    /// Answers with the subset of `items` accepted by the incoming filter.
    pub fn filter_over(self, items: Vec<T>) {
        push(&self.expectations, Expectation::Query { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Query {
                response: Err(error),
            },
        );
    }
}

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it pulls requests off `receiver` and answers them.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Query request.
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Gadget {
        id: u32,
        label: String,
    }

    impl ActorEntity for Gadget {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn gadget(id: u32, label: &str) -> Gadget {
        Gadget {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Gadget>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(gadget(1, "lamp")));
        mock.expect_update(1).apply_to(gadget(1, "lamp"));

        let client = mock.client();
        assert_eq!(client.create(gadget(1, "lamp")).await.unwrap(), 1);
        assert_eq!(client.get(1).await.unwrap(), Some(gadget(1, "lamp")));

        let updated = client
            .update(1, Box::new(|g: &mut Gadget| g.label = "desk lamp".to_string()))
            .await
            .unwrap();
        assert_eq!(updated.label, "desk lamp");

        mock.verify();
    }

    #[tokio::test]
    async fn test_query_expectation_applies_filter() {
        let mut mock = MockClient::<Gadget>::new();
        mock.expect_query()
            .filter_over(vec![gadget(1, "lamp"), gadget(2, "fan"), gadget(3, "lamp")]);

        let lamps = mock
            .client()
            .query(Box::new(|g: &Gadget| g.label == "lamp"))
            .await
            .unwrap();
        assert_eq!(lamps.len(), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn test_raw_receiver_helper() {
        let (client, mut receiver) = create_mock_client::<Gadget>(4);
        let task = tokio::spawn(async move { client.query(Box::new(|g: &Gadget| g.id > 1)).await });

        let (filter, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert!(!filter(&gadget(1, "lamp")));
        responder.send(Ok(vec![gadget(2, "fan")])).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), vec![gadget(2, "fan")]);
    }
}
