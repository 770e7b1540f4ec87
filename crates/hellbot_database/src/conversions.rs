//! Conversions between order records and database rows.

use crate::{MajorOrderRow, NewMajorOrderRow, RefreshMajorOrderRow};
use chrono::{DateTime, Utc};
use hellbot_core::{MajorOrder, MajorOrderBuilder, ParsedOrder, RewardType, format_timestamp, parse_timestamp};
use hellbot_error::{StorageError, StorageErrorKind, StorageResult};
use std::str::FromStr;

/// Status code recorded for rows confirmed by a successful fetch.
pub const FETCHED_RESPONSE_CODE: i32 = 200;

/// Build the insert row for an order first seen at `now`.
pub fn parsed_to_new_row(order: &ParsedOrder, now: DateTime<Utc>) -> NewMajorOrderRow {
    NewMajorOrderRow {
        order_id: *order.order_id(),
        briefing: order.briefing().clone(),
        reward_type_index: *order.reward_type_index(),
        reward_amount: clamp_amount(*order.reward_amount()),
        expiration: format_timestamp(order.expiration()),
        last_fetched: format_timestamp(&now),
        reward_type: order.reward_type().to_string(),
        ttl: order.ttl(now),
        response_code: FETCHED_RESPONSE_CODE,
        active: true,
    }
}

/// Build the changeset for an active order confirmed again at `now`.
pub fn parsed_to_refresh(order: &ParsedOrder, now: DateTime<Utc>) -> RefreshMajorOrderRow {
    RefreshMajorOrderRow {
        last_fetched: format_timestamp(&now),
        ttl: order.ttl(now),
        response_code: FETCHED_RESPONSE_CODE,
    }
}

/// Convert a stored row back into a record.
pub fn row_to_major_order(row: MajorOrderRow) -> StorageResult<MajorOrder> {
    let expiration = parse_stored_timestamp(row.id, "expiration", &row.expiration)?;
    let last_fetched = parse_stored_timestamp(row.id, "last_fetched", &row.last_fetched)?;
    let reward_type = RewardType::from_str(&row.reward_type).map_err(|e| {
        StorageError::new(StorageErrorKind::Serialization(format!(
            "row {}: reward_type '{}': {}",
            row.id, row.reward_type, e
        )))
    })?;
    let reward_amount = u64::try_from(row.reward_amount).map_err(|_| {
        StorageError::new(StorageErrorKind::Serialization(format!(
            "row {}: negative reward_amount {}",
            row.id, row.reward_amount
        )))
    })?;

    MajorOrderBuilder::default()
        .row_id(row.id)
        .order_id(row.order_id)
        .briefing(row.briefing)
        .reward_type_index(row.reward_type_index)
        .reward_amount(reward_amount)
        .reward_type(reward_type)
        .expiration(expiration)
        .last_fetched(last_fetched)
        .active(row.active)
        .build()
        .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))
}

fn parse_stored_timestamp(id: i32, column: &str, text: &str) -> StorageResult<DateTime<Utc>> {
    parse_timestamp(text).map_err(|e| {
        StorageError::new(StorageErrorKind::Serialization(format!(
            "row {}: {} '{}': {}",
            id, column, text, e
        )))
    })
}

fn clamp_amount(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}
