//! Order cache queries.
//!
//! The `*_row` helpers do the work against a connection that is already
//! inside a transaction; the public functions wrap them in
//! `BEGIN IMMEDIATE` so each write holds the write lock for its whole
//! read-modify-write cycle.

use crate::schema::major_orders;
use crate::{MajorOrderRow, parsed_to_new_row, parsed_to_refresh, row_to_major_order};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use hellbot_core::{MajorOrder, ParsedOrder, format_timestamp};
use hellbot_error::StorageResult;
use hellbot_interface::{ReconcileSummary, UpsertOutcome};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Active records in insertion order.
pub fn load_active(conn: &mut SqliteConnection) -> StorageResult<Vec<MajorOrder>> {
    let rows = major_orders::table
        .filter(major_orders::active.eq(true))
        .order(major_orders::id.asc())
        .select(MajorOrderRow::as_select())
        .load(conn)?;

    rows.into_iter().map(row_to_major_order).collect()
}

/// Every order id ever stored.
pub fn load_known_ids(conn: &mut SqliteConnection) -> StorageResult<BTreeSet<i64>> {
    let ids: Vec<i64> = major_orders::table
        .select(major_orders::order_id)
        .distinct()
        .load(conn)?;
    Ok(ids.into_iter().collect())
}

/// Total rows for `order_id`, active or not.
pub fn count_rows(conn: &mut SqliteConnection, order_id: i64) -> StorageResult<i64> {
    Ok(major_orders::table
        .filter(major_orders::order_id.eq(order_id))
        .count()
        .get_result(conn)?)
}

/// Insert or refresh one order in its own transaction.
#[instrument(skip(conn, order), fields(order_id = order.order_id()))]
pub fn upsert_seen(
    conn: &mut SqliteConnection,
    order: &ParsedOrder,
    now: DateTime<Utc>,
) -> StorageResult<UpsertOutcome> {
    conn.immediate_transaction(|conn| upsert_seen_row(conn, order, now))
}

/// Upsert `orders` and optionally retire active records missing from them,
/// all in one transaction.
#[instrument(skip(conn, orders), fields(count = orders.len()))]
pub fn reconcile_batch(
    conn: &mut SqliteConnection,
    orders: &[ParsedOrder],
    retire_missing: bool,
    now: DateTime<Utc>,
) -> StorageResult<ReconcileSummary> {
    conn.immediate_transaction(|conn| {
        let mut summary = ReconcileSummary::default();
        for order in orders {
            summary.record(upsert_seen_row(conn, order, now)?);
        }
        if retire_missing {
            let seen: Vec<i64> = orders.iter().map(|o| *o.order_id()).collect();
            summary.retired = retire_missing_rows(conn, &seen)?;
        }
        debug!(
            inserted = summary.inserted,
            refreshed = summary.refreshed,
            retired = summary.retired,
            "Reconciled batch"
        );
        Ok(summary)
    })
}

/// Deactivate every active record whose expiration is at or before `now`.
#[instrument(skip(conn))]
pub fn sweep_expired(conn: &mut SqliteConnection, now: DateTime<Utc>) -> StorageResult<usize> {
    // Fixed-width UTC text compares in time order.
    let cutoff = format_timestamp(&now);
    conn.immediate_transaction(|conn| {
        let swept = diesel::update(
            major_orders::table
                .filter(major_orders::active.eq(true))
                .filter(major_orders::expiration.le(&cutoff)),
        )
        .set(major_orders::active.eq(false))
        .execute(conn)?;
        if swept > 0 {
            debug!(swept, "Deactivated expired orders");
        }
        Ok(swept)
    })
}

fn upsert_seen_row(
    conn: &mut SqliteConnection,
    order: &ParsedOrder,
    now: DateTime<Utc>,
) -> StorageResult<UpsertOutcome> {
    let active_id: Option<i32> = major_orders::table
        .filter(major_orders::order_id.eq(order.order_id()))
        .filter(major_orders::active.eq(true))
        .select(major_orders::id)
        .first(conn)
        .optional()?;

    match active_id {
        Some(id) => {
            diesel::update(major_orders::table.find(id))
                .set(&parsed_to_refresh(order, now))
                .execute(conn)?;
            Ok(UpsertOutcome::Refreshed)
        }
        None => {
            diesel::insert_into(major_orders::table)
                .values(&parsed_to_new_row(order, now))
                .execute(conn)?;
            Ok(UpsertOutcome::Inserted)
        }
    }
}

fn retire_missing_rows(conn: &mut SqliteConnection, seen: &[i64]) -> StorageResult<usize> {
    let active = major_orders::table.filter(major_orders::active.eq(true));
    let retired = if seen.is_empty() {
        diesel::update(active)
            .set(major_orders::active.eq(false))
            .execute(conn)?
    } else {
        diesel::update(active.filter(diesel::dsl::not(major_orders::order_id.eq_any(seen))))
            .set(major_orders::active.eq(false))
            .execute(conn)?
    };
    Ok(retired)
}
