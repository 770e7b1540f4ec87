//! Conversion of raw assignment payloads into validated orders.
//!
//! Parsing is a pure transform: no network, no storage. Each element is
//! validated on its own so one malformed element never sinks the batch.

use crate::{NO_REWARD_TYPE_INDEX, ParsedOrder, parse_timestamp};
use hellbot_error::{ParseError, ParseErrorKind};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// One element of the remote assignment list.
///
/// Required fields are optional here so that an absent or null value is
/// reported by name instead of as a generic shape error.
#[derive(Debug, Deserialize)]
struct AssignmentDto {
    id: Option<i64>,
    briefing: Option<String>,
    expiration: Option<String>,
    #[serde(default)]
    rewards: Option<Vec<RewardDto>>,
    /// Older API shape with a single reward object
    #[serde(default)]
    reward: Option<RewardDto>,
}

#[derive(Debug, Deserialize)]
struct RewardDto {
    #[serde(rename = "type", default)]
    type_index: Option<i64>,
    /// Kept raw; normalised after deserialization
    #[serde(default)]
    amount: Option<Value>,
}

impl AssignmentDto {
    /// First entry of `rewards`, else the legacy `reward`.
    fn primary_reward(&self) -> Option<&RewardDto> {
        self.rewards
            .as_deref()
            .and_then(<[RewardDto]>::first)
            .or(self.reward.as_ref())
    }
}

/// Outcome of parsing one remote response.
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    /// Valid orders, in payload order
    pub orders: Vec<ParsedOrder>,
    /// One error per skipped element
    pub rejected: Vec<ParseError>,
}

impl ParsedBatch {
    /// True when every element parsed.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse every element of an assignment payload.
///
/// Malformed elements are logged and collected in
/// [`ParsedBatch::rejected`]; the remaining elements still parse.
///
/// # Examples
///
/// ```
/// use hellbot_core::parse_major_orders;
/// use serde_json::json;
///
/// let payload = json!([
///     {"id": 1, "briefing": "Liberate Malevelon Creek",
///      "expiration": "2025-05-30T14:28:16.3524321Z",
///      "rewards": [{"type": 1, "amount": 50}]},
///     {"id": 2, "expiration": "2025-05-30T14:28:16Z"}
/// ]);
///
/// let batch = parse_major_orders(payload.as_array().unwrap());
/// assert_eq!(batch.orders.len(), 1);
/// assert_eq!(batch.rejected.len(), 1);
/// assert_eq!(batch.rejected[0].index, 1);
/// ```
#[instrument(skip(elements), fields(count = elements.len()))]
pub fn parse_major_orders(elements: &[Value]) -> ParsedBatch {
    let mut batch = ParsedBatch::default();

    for (index, element) in elements.iter().enumerate() {
        match parse_major_order(index, element) {
            Ok(order) => batch.orders.push(order),
            Err(error) => {
                warn!(index, error = %error.kind, "Skipping malformed order payload");
                batch.rejected.push(error);
            }
        }
    }

    debug!(
        parsed = batch.orders.len(),
        rejected = batch.rejected.len(),
        "Parsed Major Orders"
    );
    batch
}

/// Parse one element of an assignment payload.
///
/// `id`, `briefing` and `expiration` are required. Reward fields are
/// optional: the first entry of `rewards` is used, falling back to a
/// singular `reward` object; absent values yield index `-1` and amount `0`.
pub fn parse_major_order(index: usize, element: &Value) -> Result<ParsedOrder, ParseError> {
    if !element.is_object() {
        return Err(ParseError::new(index, ParseErrorKind::NotAnObject));
    }

    let dto = AssignmentDto::deserialize(element)
        .map_err(|e| ParseError::new(index, ParseErrorKind::Malformed(e.to_string())))?;

    let order_id = dto.id.ok_or_else(|| missing(index, "id"))?;
    let briefing = dto.briefing.clone().ok_or_else(|| missing(index, "briefing"))?;
    let expiration_text = dto
        .expiration
        .as_deref()
        .ok_or_else(|| missing(index, "expiration"))?;
    let expiration = parse_timestamp(expiration_text).map_err(|e| {
        ParseError::new(
            index,
            ParseErrorKind::InvalidField {
                field: "expiration".to_string(),
                reason: e.to_string(),
            },
        )
    })?;

    let (reward_type_index, reward_amount) = dto
        .primary_reward()
        .map(|reward| {
            (
                reward.type_index.unwrap_or(NO_REWARD_TYPE_INDEX),
                reward.amount.as_ref().map(normalize_amount).unwrap_or(0),
            )
        })
        .unwrap_or((NO_REWARD_TYPE_INDEX, 0));

    Ok(ParsedOrder::new(
        order_id,
        briefing,
        reward_type_index,
        reward_amount,
        expiration,
    ))
}

#[track_caller]
fn missing(index: usize, field: &str) -> ParseError {
    ParseError::new(index, ParseErrorKind::MissingField(field.to_string()))
}

// Negative, fractional-negative and non-numeric amounts all become 0.
fn normalize_amount(amount: &Value) -> u64 {
    amount
        .as_u64()
        .or_else(|| {
            amount
                .as_f64()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .map(|value| value as u64)
        })
        .unwrap_or(0)
}
