//! End-to-end expiration sweep behaviour over the public API.

use super::helpers::{TaskHarness, task_harness};
use chrono::{Duration, Utc};
use rstest::rstest;
use taskdesk::task::domain::TaskStatus;
use taskdesk::task::services::CreateTaskRequest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_task_times_out_and_stays_timed_out(task_harness: TaskHarness) {
    task_harness
        .collection
        .create_task(
            CreateTaskRequest::new("a@example.com", "file taxes")
                .with_deadline(Utc::now() - Duration::hours(1)),
        )
        .await
        .expect("creation should succeed");

    let outcome = task_harness
        .sweep
        .run_manual()
        .await
        .expect("sweep should succeed");
    assert_eq!(outcome.modified, 1);

    let listed = task_harness
        .collection
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    assert_eq!(
        listed.first().and_then(taskdesk::task::domain::Task::status),
        Some(TaskStatus::Timeout)
    );

    // Running the sweep again finds nothing to do.
    let repeat = task_harness
        .sweep
        .run_manual()
        .await
        .expect("sweep should succeed");
    assert_eq!(repeat.matched, 0);
    assert_eq!(repeat.modified, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sweep_leaves_other_owners_tasks_alone_unless_overdue(task_harness: TaskHarness) {
    task_harness
        .collection
        .create_task(
            CreateTaskRequest::new("a@example.com", "late")
                .with_deadline(Utc::now() - Duration::minutes(5)),
        )
        .await
        .expect("creation should succeed");
    task_harness
        .collection
        .create_task(
            CreateTaskRequest::new("b@example.com", "on time")
                .with_deadline(Utc::now() + Duration::minutes(5)),
        )
        .await
        .expect("creation should succeed");

    task_harness.sweep.run_tick().await;

    let late = task_harness
        .collection
        .list_tasks_for_owner("a@example.com")
        .await
        .expect("listing should succeed");
    let on_time = task_harness
        .collection
        .list_tasks_for_owner("b@example.com")
        .await
        .expect("listing should succeed");

    assert_eq!(
        late.first().and_then(taskdesk::task::domain::Task::status),
        Some(TaskStatus::Timeout)
    );
    assert_eq!(
        on_time.first().and_then(taskdesk::task::domain::Task::status),
        Some(TaskStatus::Active)
    );
}
