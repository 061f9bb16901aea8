//! Service orchestration tests for the task collection.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskOverwrite, TaskStatus},
    services::{CreateTaskRequest, TaskCollectionError, TaskCollectionService},
};
use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskCollectionService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskCollectionService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_listed_for_its_owner(service: TestService) {
    let request = CreateTaskRequest::new("a@example.com", "write report")
        .with_description("quarterly numbers")
        .with_category("work");
    let created = service
        .create_task(request)
        .await
        .expect("creation should succeed");

    let listed = service
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");

    assert_eq!(listed, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_filters_strictly_by_owner(service: TestService) {
    service
        .create_task(
            CreateTaskRequest::new("a@example.com", "mine")
                .with_deadline(Utc::now() - Duration::hours(1)),
        )
        .await
        .expect("creation should succeed");
    service
        .create_task(
            CreateTaskRequest::new("b@example.com", "theirs").with_status(TaskStatus::Completed),
        )
        .await
        .expect("creation should succeed");

    let listed = service
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(|task| task.title()), Some(Some("mine")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_rejects_empty_email(service: TestService) {
    let result = service.list_tasks_for_owner("").await;
    assert!(matches!(
        result,
        Err(TaskCollectionError::Domain(
            TaskDomainError::EmptyOwnerEmail
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_without_title_is_rejected_and_persists_nothing(service: TestService) {
    let result = service
        .create_task(CreateTaskRequest::new("a@example.com", "  "))
        .await;

    assert!(matches!(
        result,
        Err(TaskCollectionError::Domain(TaskDomainError::EmptyTitle))
    ));
    let listed = service
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_without_email_is_rejected(service: TestService) {
    let result = service.create_task(CreateTaskRequest::new("", "title")).await;
    assert!(matches!(
        result,
        Err(TaskCollectionError::Domain(
            TaskDomainError::EmptyOwnerEmail
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_fields_and_clears_omitted_ones(service: TestService) {
    let created = service
        .create_task(
            CreateTaskRequest::new("a@example.com", "old title").with_description("old"),
        )
        .await
        .expect("creation should succeed");

    service
        .update_task(
            &created.id().to_string(),
            &TaskOverwrite::new()
                .with_title("new title")
                .with_status(TaskStatus::Completed),
        )
        .await
        .expect("update should succeed");

    let listed = service
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    let updated = listed.first().expect("task should still exist");
    assert_eq!(updated.title(), Some("new title"));
    assert_eq!(updated.description(), None, "omitted field should clear");
    assert_eq!(updated.status(), Some(TaskStatus::Completed));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_malformed_id_is_an_input_error(service: TestService) {
    let result = service
        .update_task("not-an-id", &TaskOverwrite::new().with_title("x"))
        .await;
    assert!(matches!(
        result,
        Err(TaskCollectionError::Domain(
            TaskDomainError::InvalidTaskId(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_reports_not_found(service: TestService) {
    let result = service
        .update_task(
            &TaskId::new().to_string(),
            &TaskOverwrite::new().with_title("x"),
        )
        .await;
    assert!(matches!(result, Err(TaskCollectionError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_unchanged_values_reports_not_found(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("a@example.com", "write report"))
        .await
        .expect("creation should succeed");

    // Re-sending the stored values modifies zero documents, which the
    // service reports the same way as a missing task. The task itself is
    // untouched.
    let result = service
        .update_task(
            &created.id().to_string(),
            &TaskOverwrite::new()
                .with_title("write report")
                .with_status(TaskStatus::Active),
        )
        .await;

    assert!(matches!(result, Err(TaskCollectionError::NotFound(_))));
    let listed = service
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    assert_eq!(listed.first().map(|task| task.title()), Some(Some("write report")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("a@example.com", "throwaway"))
        .await
        .expect("creation should succeed");

    service
        .delete_task(&created.id().to_string())
        .await
        .expect("delete should succeed");

    let listed = service
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_unknown_id_reports_not_found(service: TestService) {
    let result = service.delete_task(&TaskId::new().to_string()).await;
    assert!(matches!(result, Err(TaskCollectionError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_with_malformed_id_is_an_input_error(service: TestService) {
    let result = service.delete_task("99999").await;
    assert!(matches!(
        result,
        Err(TaskCollectionError::Domain(
            TaskDomainError::InvalidTaskId(_)
        ))
    ));
}
