//! Values exchanged with the collaborators.

use hellbot_error::{FetchError, FetchErrorKind, FetchResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Raw answer from the remote source.
///
/// Carries whatever status the source returned; interpreting a non-200
/// status as a failure is [`FetchResponse::into_payload`]'s job, so the
/// payload shape is never inspected for an error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct FetchResponse {
    /// Decoded JSON body, `Null` when an error response had no JSON body
    payload: JsonValue,
    /// HTTP status code
    status: u16,
}

impl FetchResponse {
    /// Create a response from a payload and status code.
    pub fn new(payload: JsonValue, status: u16) -> Self {
        Self { payload, status }
    }

    /// Whether the remote source answered 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Take the payload, turning any non-200 status into a typed failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use hellbot_interface::FetchResponse;
    /// use serde_json::json;
    ///
    /// let failed = FetchResponse::new(json!({"error": "boom"}), 500);
    /// assert_eq!(failed.into_payload().unwrap_err().status(), Some(500));
    ///
    /// let ok = FetchResponse::new(json!([]), 200);
    /// assert_eq!(ok.into_payload().unwrap(), json!([]));
    /// ```
    #[track_caller]
    pub fn into_payload(self) -> FetchResult<JsonValue> {
        if self.is_ok() {
            Ok(self.payload)
        } else {
            Err(FetchError::new(FetchErrorKind::Status(self.status)))
        }
    }
}

/// What `upsert_seen` did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpsertOutcome {
    /// No active row had this order id; a new active row was written
    Inserted,
    /// An active row existed; its `last_fetched` and `ttl` were refreshed
    Refreshed,
}

/// Totals for one reconciliation batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileSummary {
    /// New active rows written
    pub inserted: usize,
    /// Existing active rows refreshed
    pub refreshed: usize,
    /// Active rows deactivated because the source no longer lists them
    pub retired: usize,
}

impl ReconcileSummary {
    /// Count one upsert outcome.
    pub fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Inserted => self.inserted += 1,
            UpsertOutcome::Refreshed => self.refreshed += 1,
        }
    }
}
