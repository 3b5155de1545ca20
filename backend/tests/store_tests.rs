//! Entity store integration tests
//!
//! Exercises the real in-memory stores: id assignment, update merging,
//! delete semantics, and NotFound behavior.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use farmsync_backend::error::AppError;
use farmsync_backend::services::farm::{CreateFarmInput, FarmService};
use farmsync_backend::services::store::Latency;
use farmsync_backend::services::task::{CreateTaskInput, TaskService, UpdateTaskInput};
use shared::models::{SizeUnit, Task, TaskPriority};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_task(id: i64) -> Task {
    Task {
        id,
        farm_id: 1,
        title: format!("Task {id}"),
        description: String::new(),
        due_date: date(2024, 6, 15),
        priority: TaskPriority::Medium,
        category: "watering".to_string(),
        completed: false,
    }
}

fn task_input(title: &str) -> CreateTaskInput {
    CreateTaskInput {
        farm_id: 1,
        title: title.to_string(),
        description: String::new(),
        due_date: date(2024, 7, 1),
        priority: TaskPriority::High,
        category: "harvesting".to_string(),
    }
}

fn farm_input(name: &str) -> CreateFarmInput {
    CreateFarmInput {
        name: name.to_string(),
        location: "Cedar Rapids, IA".to_string(),
        size: Decimal::from(40),
        size_unit: SizeUnit::Acres,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

mod unit_tests {
    use super::*;

    #[tokio::test]
    async fn create_on_empty_store_assigns_id_one() {
        let service = FarmService::new(Vec::new(), Latency::none());
        let farm = service.create_farm(farm_input("Maple Grove Farm")).await;
        assert_eq!(farm.id, 1);
    }

    #[tokio::test]
    async fn create_assigns_max_plus_one() {
        let service = TaskService::new(vec![seeded_task(1), seeded_task(5)], Latency::none());
        let task = service.create_task(task_input("new")).await;
        assert_eq!(task.id, 6);
    }

    #[tokio::test]
    async fn deleted_max_id_is_reused_by_next_create() {
        let seed = vec![seeded_task(1), seeded_task(2), seeded_task(3)];
        let service = TaskService::new(seed, Latency::none());

        service.delete_task(3).await.unwrap();
        let task = service.create_task(task_input("new")).await;
        // Max of {1, 2} is 2, so the freed id comes back
        assert_eq!(task.id, 3);
    }

    #[tokio::test]
    async fn create_stamps_server_side_defaults() {
        let tasks = TaskService::new(Vec::new(), Latency::none());
        let task = tasks.create_task(task_input("new")).await;
        assert!(!task.completed);

        let farms = FarmService::new(Vec::new(), Latency::none());
        let farm = farms.create_farm(farm_input("Hillcrest Orchard")).await;
        assert!(farm.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn update_merges_only_provided_fields() {
        let service = TaskService::new(vec![seeded_task(1)], Latency::none());
        let before = service.get_task(1).await.unwrap();

        let updated = service
            .update_task(
                1,
                UpdateTaskInput {
                    farm_id: None,
                    title: Some("Renamed".to_string()),
                    description: None,
                    due_date: None,
                    priority: None,
                    category: None,
                    completed: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.id, before.id);
        assert_eq!(updated.farm_id, before.farm_id);
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.due_date, before.due_date);
        assert_eq!(updated.priority, before.priority);
        assert_eq!(updated.category, before.category);
        assert_eq!(updated.completed, before.completed);
    }

    #[tokio::test]
    async fn delete_then_lookup_fails() {
        let service = TaskService::new(vec![seeded_task(1), seeded_task(2)], Latency::none());

        let removed = service.delete_task(2).await.unwrap();
        assert_eq!(removed.id, 2);

        assert!(matches!(
            service.get_task(2).await,
            Err(AppError::NotFound(_))
        ));
        let remaining = service.get_tasks().await;
        assert!(remaining.iter().all(|t| t.id != 2));
    }

    #[tokio::test]
    async fn missing_ids_fail_and_leave_store_unchanged() {
        let seed = vec![seeded_task(1), seeded_task(2)];
        let service = TaskService::new(seed, Latency::none());
        let before = service.get_tasks().await;

        let update = service
            .update_task(
                99,
                UpdateTaskInput {
                    farm_id: None,
                    title: Some("ghost".to_string()),
                    description: None,
                    due_date: None,
                    priority: None,
                    category: None,
                    completed: None,
                },
            )
            .await;
        assert!(matches!(update, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.delete_task(99).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.toggle_complete(99).await,
            Err(AppError::NotFound(_))
        ));

        assert_eq!(service.get_tasks().await, before);
    }

    #[tokio::test]
    async fn toggle_complete_flips_both_ways() {
        let service = TaskService::new(vec![seeded_task(1)], Latency::none());

        let task = service.toggle_complete(1).await.unwrap();
        assert!(task.completed);

        let task = service.toggle_complete(1).await.unwrap();
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn get_all_preserves_insertion_order() {
        let service = TaskService::new(vec![seeded_task(4), seeded_task(2)], Latency::none());
        service.create_task(task_input("appended")).await;

        let ids: Vec<i64> = service.get_tasks().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 2, 5]);
    }

    #[tokio::test]
    async fn get_by_farm_id_filters_ownership() {
        let mut other_farm = seeded_task(3);
        other_farm.farm_id = 2;
        let service = TaskService::new(
            vec![seeded_task(1), seeded_task(2), other_farm],
            Latency::none(),
        );

        let tasks = service.get_tasks_by_farm(2).await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 3);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// A created id is always max(existing) + 1, whatever ids the store holds
        #[test]
        fn prop_create_assigns_max_plus_one(
            ids in proptest::collection::btree_set(1i64..500, 1..20)
        ) {
            let seed: Vec<Task> = ids.iter().map(|&id| seeded_task(id)).collect();
            let service = TaskService::new(seed, Latency::none());

            let created = tokio_test::block_on(service.create_task(task_input("fresh")));
            let expected = ids.iter().max().copied().unwrap_or(0) + 1;
            prop_assert_eq!(created.id, expected);
        }

        /// Deleting one record never disturbs the others
        #[test]
        fn prop_delete_removes_exactly_one(
            ids in proptest::collection::btree_set(1i64..100, 2..15),
            pick in any::<prop::sample::Index>()
        ) {
            let ids: Vec<i64> = ids.into_iter().collect();
            let victim = ids[pick.index(ids.len())];
            let seed: Vec<Task> = ids.iter().map(|&id| seeded_task(id)).collect();
            let service = TaskService::new(seed, Latency::none());

            let removed = tokio_test::block_on(service.delete_task(victim)).unwrap();
            prop_assert_eq!(removed.id, victim);

            let rest = tokio_test::block_on(service.get_tasks());
            prop_assert_eq!(rest.len(), ids.len() - 1);
            prop_assert!(rest.iter().all(|t| t.id != victim));
        }
    }
}
