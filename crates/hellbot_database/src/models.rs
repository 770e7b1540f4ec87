//! Diesel models for the `major_orders` table.

use crate::schema::major_orders;
use diesel::prelude::*;

/// Database row for the `major_orders` table.
///
/// Timestamps are fixed-width RFC 3339 UTC text; see
/// [`hellbot_core::format_timestamp`].
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable)]
#[diesel(table_name = major_orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MajorOrderRow {
    pub id: i32,
    pub order_id: i64,
    pub briefing: String,
    pub reward_type_index: i64,
    pub reward_amount: i64,
    pub expiration: String,
    pub last_fetched: String,
    pub reward_type: String,
    pub ttl: i64,
    pub response_code: i32,
    pub active: bool,
}

/// Insertable struct for a newly seen order.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = major_orders)]
pub struct NewMajorOrderRow {
    pub order_id: i64,
    pub briefing: String,
    pub reward_type_index: i64,
    pub reward_amount: i64,
    pub expiration: String,
    pub last_fetched: String,
    pub reward_type: String,
    pub ttl: i64,
    pub response_code: i32,
    pub active: bool,
}

/// Changeset applied when an active order is confirmed again.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = major_orders)]
pub struct RefreshMajorOrderRow {
    pub last_fetched: String,
    pub ttl: i64,
    pub response_code: i32,
}
