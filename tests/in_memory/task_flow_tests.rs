//! Owner-scoped task lifecycle flows over the public API.

use super::helpers::{TaskHarness, task_harness};
use rstest::rstest;
use taskdesk::task::domain::{TaskOverwrite, TaskStatus};
use taskdesk::task::services::{CreateTaskRequest, TaskCollectionError};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_update_delete(task_harness: TaskHarness) {
    let created = task_harness
        .collection
        .create_task(
            CreateTaskRequest::new("a@example.com", "plan sprint")
                .with_description("backlog grooming")
                .with_category("work"),
        )
        .await
        .expect("creation should succeed");
    let id = created.id().to_string();

    task_harness
        .collection
        .update_task(
            &id,
            &TaskOverwrite::new()
                .with_title("plan sprint 12")
                .with_category("work")
                .with_status(TaskStatus::Completed),
        )
        .await
        .expect("update should succeed");

    let listed = task_harness
        .collection
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 1);
    let updated = listed.first().expect("task should exist");
    assert_eq!(updated.title(), Some("plan sprint 12"));
    assert_eq!(updated.status(), Some(TaskStatus::Completed));

    task_harness
        .collection
        .delete_task(&id)
        .await
        .expect("delete should succeed");
    let remaining = task_harness
        .collection
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    assert!(remaining.is_empty());

    // Deleting again reports the missing document.
    let result = task_harness.collection.delete_task(&id).await;
    assert!(matches!(result, Err(TaskCollectionError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owners_see_only_their_own_tasks(task_harness: TaskHarness) {
    for (owner, title) in [
        ("a@example.com", "alpha"),
        ("b@example.com", "bravo"),
        ("a@example.com", "another alpha"),
    ] {
        task_harness
            .collection
            .create_task(CreateTaskRequest::new(owner, title))
            .await
            .expect("creation should succeed");
    }

    let alices = task_harness
        .collection
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    let bobs = task_harness
        .collection
        .list_tasks_for_owner("b@example.com")
        .await
        .expect("listing should succeed");

    assert_eq!(alices.len(), 2);
    assert_eq!(bobs.len(), 1);
    assert!(alices.iter().all(|task| task.owner().as_str() == "a@example.com"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ordering_marker_is_assigned_at_creation(task_harness: TaskHarness) {
    let first = task_harness
        .collection
        .create_task(CreateTaskRequest::new("a@example.com", "first"))
        .await
        .expect("creation should succeed");
    let second = task_harness
        .collection
        .create_task(CreateTaskRequest::new("a@example.com", "second"))
        .await
        .expect("creation should succeed");

    // Coarse clock: later creations never sort before earlier ones, ties
    // are acceptable.
    assert!(second.order() >= first.order());
}
