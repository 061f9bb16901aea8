//! Unit tests for user domain types.

use crate::user::domain::{EmailAddress, User, UserDomainError};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("a@example.com")]
#[case("First.Last@example.com")]
fn valid_email_addresses_are_accepted(#[case] input: &str) {
    let address = EmailAddress::new(input).expect("valid address");
    assert_eq!(address.as_str(), input);
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_or_whitespace_email_is_rejected(#[case] input: &str) {
    assert_eq!(EmailAddress::new(input), Err(UserDomainError::EmptyEmail));
}

#[rstest]
fn email_is_trimmed_but_case_preserved() {
    let address = EmailAddress::new("  Alice@Example.com ").expect("valid address");
    assert_eq!(address.as_str(), "Alice@Example.com");
}

#[rstest]
fn overlong_email_is_rejected() {
    let input = format!("{}@example.com", "a".repeat(300));
    assert!(matches!(
        EmailAddress::new(input),
        Err(UserDomainError::EmailTooLong(_))
    ));
}

#[rstest]
fn new_user_carries_its_profile_verbatim() {
    let address = EmailAddress::new("a@example.com").expect("valid address");
    let profile = json!({"name": "Alice", "photo": "https://example.com/a.png"});

    let user = User::new(address.clone(), profile.clone());

    assert_eq!(user.email(), &address);
    assert_eq!(user.profile(), &profile);
}

#[rstest]
fn users_get_distinct_identifiers() {
    let first = User::new(
        EmailAddress::new("a@example.com").expect("valid address"),
        json!(null),
    );
    let second = User::new(
        EmailAddress::new("b@example.com").expect("valid address"),
        json!(null),
    );
    assert_ne!(first.id(), second.id());
}
