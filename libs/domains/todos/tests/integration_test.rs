//! Integration tests for the Todos domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Database queries work correctly
//! - The recent-incomplete listing orders and limits as expected
//! - Completion is a single atomic transition

use chrono::{DurationRound, TimeDelta, Utc};
use domain_todos::*;
use sea_orm::ConnectionTrait;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

// ============================================================================
// Repository Tests
// ============================================================================

/// Pin a todo's creation time so ordering tests are deterministic
async fn set_created_at(db: &TestDatabase, id: i32, minutes_ago: i64) {
    let sql = format!(
        "UPDATE todo SET created_at = NOW() - INTERVAL '{} minutes' WHERE id = {}",
        minutes_ago, id
    );
    db.connection
        .execute_unprepared(&sql)
        .await
        .expect("Failed to adjust created_at");
}

#[tokio::test]
async fn test_create_and_find_todo() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let input = CreateTodo {
        title: builder.name("todo", "main"),
        description: "Integration test todo".to_string(),
    };

    // Postgres keeps microsecond precision, so truncate the reference
    // instant the same way before comparing
    let before = Utc::now().duration_trunc(TimeDelta::microseconds(1)).unwrap();

    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.title, input.title);
    assert_eq!(created.description, input.description);
    assert!(!created.is_completed);
    assert!(created.created_at >= before);

    let retrieved = repo.find_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "todo should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.title, created.title);
    assert_eq!(retrieved.created_at, created.created_at);

    // The listing returns the stored timestamp unchanged
    let listed = repo.find_recent_incomplete(5).await.unwrap();
    let summary = listed
        .iter()
        .find(|t| t.id == created.id)
        .expect("created todo should be listed");

    assert_eq!(summary.title, created.title);
    assert_eq!(summary.description, created.description);
    assert_eq!(summary.created_at, created.created_at);
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());

    let result = repo.find_by_id(12345).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_listing_orders_newest_first_and_limits() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listing_order");

    // Seven todos, each older than the previous
    let mut ids = Vec::new();
    for i in 0..7 {
        let created = repo
            .create(CreateTodo {
                title: builder.name("todo", &format!("t{}", i)),
                description: "ordering".to_string(),
            })
            .await
            .unwrap();
        set_created_at(&db, created.id, 70 - i * 10).await;
        ids.push(created.id);
    }

    let listed = repo.find_recent_incomplete(5).await.unwrap();

    assert_eq!(listed.len(), 5);
    // Newest first: the last five created, in reverse creation order
    let expected: Vec<i32> = ids.iter().rev().take(5).copied().collect();
    let actual: Vec<i32> = listed.iter().map(|t| t.id).collect();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_listing_breaks_timestamp_ties_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listing_ties");

    let mut ids = Vec::new();
    for i in 0..3 {
        let created = repo
            .create(CreateTodo {
                title: builder.name("todo", &format!("tie{}", i)),
                description: "tie".to_string(),
            })
            .await
            .unwrap();
        // Same timestamp for all three
        set_created_at(&db, created.id, 10).await;
        ids.push(created.id);
    }

    let listed = repo.find_recent_incomplete(5).await.unwrap();
    let actual: Vec<i32> = listed.iter().map(|t| t.id).collect();

    let mut expected = ids.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_listing_excludes_completed() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listing_excludes");

    let open = repo
        .create(CreateTodo {
            title: builder.name("todo", "open"),
            description: "stays".to_string(),
        })
        .await
        .unwrap();
    let done = repo
        .create(CreateTodo {
            title: builder.name("todo", "done"),
            description: "goes".to_string(),
        })
        .await
        .unwrap();

    assert!(repo.complete(done.id).await.unwrap());

    let listed = repo.find_recent_incomplete(5).await.unwrap();
    let ids: Vec<i32> = listed.iter().map(|t| t.id).collect();
    assert!(ids.contains(&open.id));
    assert!(!ids.contains(&done.id));
}

#[tokio::test]
async fn test_complete_transitions_exactly_once() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("complete_once");

    let todo = repo
        .create(CreateTodo {
            title: builder.name("todo", "once"),
            description: "complete me".to_string(),
        })
        .await
        .unwrap();

    assert!(repo.complete(todo.id).await.unwrap());
    // Already completed: no row transitions
    assert!(!repo.complete(todo.id).await.unwrap());

    let stored = repo.find_by_id(todo.id).await.unwrap();
    let stored = assert_some(stored, "todo should still exist");
    assert!(stored.is_completed);
}

#[tokio::test]
async fn test_complete_missing_id_returns_false() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());

    assert!(!repo.complete(99999).await.unwrap());
}

// ============================================================================
// Service Tests (against real storage)
// ============================================================================

#[tokio::test]
async fn test_service_end_to_end() {
    let db = TestDatabase::new().await;
    let service = TodoService::new(PgTodoRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_e2e");

    let todo = service
        .create_todo(CreateTodo {
            title: builder.name("todo", "e2e"),
            description: "end to end".to_string(),
        })
        .await
        .unwrap();

    let listed = service.list_recent().await.unwrap();
    assert!(listed.iter().any(|t| t.id == todo.id));

    service.complete_todo(todo.id).await.unwrap();

    let err = service.complete_todo(todo.id).await.unwrap_err();
    assert!(matches!(err, TodoError::NotFound));

    let listed = service.list_recent().await.unwrap();
    assert!(!listed.iter().any(|t| t.id == todo.id));
}
