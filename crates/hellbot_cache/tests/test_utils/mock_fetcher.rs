//! Mock remote fetcher.

use async_trait::async_trait;
use hellbot_error::{FetchError, FetchErrorKind, FetchResult};
use hellbot_interface::{FetchResponse, OrderFetcher};
use serde_json::Value as JsonValue;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Answer with the given status and payload
    Respond { status: u16, payload: JsonValue },
    /// Fail without a response
    Error(FetchErrorKind),
    /// Wait, then answer 200 with the payload
    Delayed { delay: Duration, payload: JsonValue },
    /// Never answer
    Hang,
    /// Answer 200 with each payload in turn, repeating the last
    Sequence(Vec<JsonValue>),
}

/// Mock fetcher that records how often it was called.
#[derive(Clone)]
pub struct MockFetcher {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    queries: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockFetcher {
    /// Create a fetcher with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer 200 with `payload`.
    pub fn new_success(payload: JsonValue) -> Self {
        Self::new_with_behavior(MockBehavior::Respond {
            status: 200,
            payload,
        })
    }

    /// Always answer with `status` and an error body.
    pub fn new_status(status: u16) -> Self {
        Self::new_with_behavior(MockBehavior::Respond {
            status,
            payload: serde_json::json!({"error": "upstream failure"}),
        })
    }

    /// Answer 200 with each payload in turn.
    pub fn new_sequence(payloads: Vec<JsonValue>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(payloads))
    }

    /// Number of times fetch() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Queries received, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderFetcher for MockFetcher {
    async fn fetch(&self, query: &str) -> FetchResult<FetchResponse> {
        let call = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            *count - 1
        };
        self.queries.lock().unwrap().push(query.to_string());

        match &self.behavior {
            MockBehavior::Respond { status, payload } => {
                Ok(FetchResponse::new(payload.clone(), *status))
            }
            MockBehavior::Error(kind) => Err(FetchError::new(kind.clone())),
            MockBehavior::Delayed { delay, payload } => {
                tokio::time::sleep(*delay).await;
                Ok(FetchResponse::new(payload.clone(), 200))
            }
            MockBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(FetchResponse::new(JsonValue::Null, 200))
            }
            MockBehavior::Sequence(payloads) => {
                let payload = payloads
                    .get(call)
                    .or_else(|| payloads.last())
                    .cloned()
                    .unwrap_or(JsonValue::Array(Vec::new()));
                Ok(FetchResponse::new(payload, 200))
            }
        }
    }
}
