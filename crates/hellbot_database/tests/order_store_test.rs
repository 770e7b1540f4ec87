//! Tests for the SQLite order cache store.

use chrono::{DateTime, Duration, TimeZone, Utc};
use hellbot_core::{ParsedOrder, ParsedOrderBuilder, RewardType};
use hellbot_database::{DatabaseConfig, SqliteOrderStore};
use hellbot_interface::{OrderStore, UpsertOutcome};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 28, 12, 0, 0).unwrap()
}

fn order(id: i64, expiration: DateTime<Utc>) -> ParsedOrder {
    ParsedOrderBuilder::default()
        .order_id(id)
        .briefing(format!("Major Order {}", id))
        .reward_type_index(1)
        .reward_amount(50)
        .expiration(expiration)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_upsert_seen_inserts_new_order() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();

    let outcome = store
        .upsert_seen(&order(1, now + Duration::hours(48)), now)
        .await
        .unwrap();

    assert_eq!(outcome, UpsertOutcome::Inserted);
    let active = store.get_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(*active[0].order_id(), 1);
    assert_eq!(*active[0].reward_type(), RewardType::Medals);
    assert_eq!(*active[0].reward_amount(), 50);
    assert_eq!(active[0].ttl(now), 172_800);
    assert_eq!(*active[0].last_fetched(), now);
    assert!(*active[0].active());
}

#[tokio::test]
async fn test_upsert_seen_is_idempotent() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let first = base_time();
    let second = first + Duration::minutes(30);
    let record = order(1, first + Duration::hours(48));

    store.upsert_seen(&record, first).await.unwrap();
    let outcome = store.upsert_seen(&record, second).await.unwrap();

    assert_eq!(outcome, UpsertOutcome::Refreshed);
    let active = store.get_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(*active[0].last_fetched(), second);
    assert_eq!(store.row_count(1).await.unwrap(), 1);
}

#[tokio::test]
async fn test_get_active_preserves_insertion_order() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();

    for id in [30, 10, 20] {
        store
            .upsert_seen(&order(id, now + Duration::hours(10)), now)
            .await
            .unwrap();
    }

    let ids: Vec<i64> = store
        .get_active()
        .await
        .unwrap()
        .iter()
        .map(|o| *o.order_id())
        .collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[tokio::test]
async fn test_sweep_expired_deactivates_and_never_resurfaces() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();
    store
        .upsert_seen(&order(2, now - Duration::hours(1)), now - Duration::hours(3))
        .await
        .unwrap();
    store
        .upsert_seen(&order(3, now + Duration::hours(1)), now)
        .await
        .unwrap();

    let swept = store.sweep_expired(now).await.unwrap();

    assert_eq!(swept, 1);
    let ids: Vec<i64> = store
        .get_active()
        .await
        .unwrap()
        .iter()
        .map(|o| *o.order_id())
        .collect();
    assert_eq!(ids, vec![3]);

    for hours in [1, 24, 24 * 30] {
        store
            .sweep_expired(now + Duration::hours(hours))
            .await
            .unwrap();
        let active = store.get_active().await.unwrap();
        assert!(active.iter().all(|o| *o.order_id() != 2));
    }
}

#[tokio::test]
async fn test_sweep_expired_boundary_is_inclusive() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();
    store.upsert_seen(&order(4, now), now - Duration::hours(1)).await.unwrap();

    assert_eq!(store.sweep_expired(now).await.unwrap(), 1);
    assert!(store.get_active().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_known_ids_include_inactive() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();
    store
        .upsert_seen(&order(1, now - Duration::minutes(1)), now - Duration::hours(1))
        .await
        .unwrap();
    store
        .upsert_seen(&order(2, now + Duration::hours(1)), now)
        .await
        .unwrap();
    store.sweep_expired(now).await.unwrap();

    let known = store.get_known_ids().await.unwrap();

    assert!(known.contains(&1));
    assert!(known.contains(&2));
    assert_eq!(store.get_active().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_reappearing_order_is_new_row() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();
    store
        .upsert_seen(&order(7, now - Duration::minutes(5)), now - Duration::hours(2))
        .await
        .unwrap();
    store.sweep_expired(now).await.unwrap();

    let outcome = store
        .upsert_seen(&order(7, now + Duration::hours(24)), now)
        .await
        .unwrap();

    assert_eq!(outcome, UpsertOutcome::Inserted);
    assert_eq!(store.row_count(7).await.unwrap(), 2);
    let active = store.get_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(*active[0].expiration(), now + Duration::hours(24));
}

#[tokio::test]
async fn test_upsert_batch_retires_missing_orders() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();
    let exp = now + Duration::hours(24);
    store
        .upsert_batch(&[order(1, exp), order(2, exp)], true, now)
        .await
        .unwrap();

    let later = now + Duration::hours(1);
    let summary = store
        .upsert_batch(&[order(2, exp), order(3, exp)], true, later)
        .await
        .unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.refreshed, 1);
    assert_eq!(summary.retired, 1);
    let ids: Vec<i64> = store
        .get_active()
        .await
        .unwrap()
        .iter()
        .map(|o| *o.order_id())
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn test_upsert_batch_empty_retires_everything() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();
    store
        .upsert_seen(&order(1, now + Duration::hours(24)), now)
        .await
        .unwrap();

    let summary = store.upsert_batch(&[], true, now).await.unwrap();

    assert_eq!(summary.retired, 1);
    assert!(store.get_active().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upsert_batch_without_retire_keeps_missing() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();
    store
        .upsert_seen(&order(1, now + Duration::hours(24)), now)
        .await
        .unwrap();

    let summary = store
        .upsert_batch(&[order(2, now + Duration::hours(24))], false, now)
        .await
        .unwrap();

    assert_eq!(summary.retired, 0);
    assert_eq!(store.get_active().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_concurrent_upserts_never_duplicate_active_rows() {
    let store = SqliteOrderStore::in_memory().unwrap();
    let now = base_time();
    let record = order(9, now + Duration::hours(24));

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        let record = record.clone();
        handles.push(tokio::spawn(async move {
            store
                .upsert_seen(&record, now + Duration::seconds(i))
                .await
                .unwrap()
        }));
    }
    let mut inserted = 0;
    for handle in handles {
        if handle.await.unwrap() == UpsertOutcome::Inserted {
            inserted += 1;
        }
    }

    assert_eq!(inserted, 1);
    assert_eq!(store.row_count(9).await.unwrap(), 1);
    assert_eq!(store.get_active().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("orders.db");
    let config = DatabaseConfig::new(path.to_string_lossy());
    let now = base_time();

    {
        let store = SqliteOrderStore::open(&config).unwrap();
        store
            .upsert_seen(&order(1, now + Duration::hours(24)), now)
            .await
            .unwrap();
    }

    let reopened = SqliteOrderStore::open(&config).unwrap();
    let active = reopened.get_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(*active[0].order_id(), 1);
}
