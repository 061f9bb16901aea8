//! User registry flows over the public API.

use super::helpers::registry;
use rstest::rstest;
use serde_json::json;
use taskdesk::user::adapters::memory::InMemoryUserRepository;
use taskdesk::user::services::{RegisterUserRequest, UserRegistryService};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registration_is_idempotent_per_email(
    registry: UserRegistryService<InMemoryUserRepository>,
) {
    let first = registry
        .register(
            RegisterUserRequest::new("a@example.com")
                .with_profile(json!({"name": "Alice", "photo": "https://example.com/a.png"})),
        )
        .await
        .expect("registration should succeed");
    let second = registry
        .register(RegisterUserRequest::new("a@example.com"))
        .await
        .expect("repeat registration should succeed");

    assert!(first.created());
    assert!(!second.created());

    let found = registry
        .find_users_by_email("a@example.com")
        .await
        .expect("lookup should succeed");
    assert_eq!(found.len(), 1);
    assert_eq!(
        found.first().map(|user| user.profile().clone()),
        Some(json!({"name": "Alice", "photo": "https://example.com/a.png"})),
        "the original profile must survive repeat registrations"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn distinct_emails_register_independently(
    registry: UserRegistryService<InMemoryUserRepository>,
) {
    let alice = registry
        .register(RegisterUserRequest::new("a@example.com"))
        .await
        .expect("registration should succeed");
    let bob = registry
        .register(RegisterUserRequest::new("b@example.com"))
        .await
        .expect("registration should succeed");

    assert!(alice.created());
    assert!(bob.created());
    assert_ne!(alice.user_id(), bob.user_id());
}
