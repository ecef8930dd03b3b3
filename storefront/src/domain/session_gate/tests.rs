//! Tests for the session gate state machine.

use super::*;
use crate::domain::ports::{FixtureProfileStore, MockProfileStore};
use crate::domain::profile::ProfileField;
use mockall::predicate::function;
use rstest::rstest;

fn complete_profile() -> StoredProfile {
    StoredProfile {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

fn store_reading(stored: Option<StoredProfile>) -> MockProfileStore {
    let mut store = MockProfileStore::new();
    store
        .expect_read_profile()
        .returning(move || Ok(stored.clone()));
    store
}

fn gate_at(destination: Destination, store: MockProfileStore) -> SessionGate<MockProfileStore> {
    SessionGate {
        store,
        current: destination,
    }
}

#[rstest]
#[case(None, Destination::Onboarding)]
#[case(Some(StoredProfile::default()), Destination::Onboarding)]
#[case(
    Some(StoredProfile { first_name: "Jane".to_owned(), email: " ".to_owned(), ..StoredProfile::default() }),
    Destination::Onboarding
)]
#[case(
    Some(StoredProfile { email: "a@b.com".to_owned(), ..StoredProfile::default() }),
    Destination::Home
)]
#[case(Some(complete_profile()), Destination::Home)]
fn initial_destination_follows_stored_email(
    #[case] stored: Option<StoredProfile>,
    #[case] expected: Destination,
) {
    let gate = SessionGate::start(store_reading(stored)).expect("session starts");
    assert_eq!(gate.current_destination(), expected);
}

#[rstest]
fn unreadable_store_fails_startup() {
    let mut store = MockProfileStore::new();
    store
        .expect_read_profile()
        .returning(|| Err(ProfileStoreError::read("corrupt")));

    let result = SessionGate::start(store);
    assert!(matches!(
        result,
        Err(SessionError::Store(ProfileStoreError::Read { .. }))
    ));
}

#[rstest]
fn blank_registration_is_rejected_without_writing() {
    let mut store = MockProfileStore::new();
    store.expect_write_profile().times(0);
    let mut gate = gate_at(Destination::Onboarding, store);

    let err = gate
        .register("", "Doe", "a@b.com")
        .expect_err("registration should fail");

    match err {
        SessionError::Validation(validation) => {
            assert_eq!(validation.blank_fields(), &[ProfileField::FirstName]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(gate.current_destination(), Destination::Onboarding);
}

#[rstest]
fn valid_registration_writes_and_moves_home() {
    let mut store = MockProfileStore::new();
    store
        .expect_write_profile()
        .with(function(|profile: &Profile| {
            profile.first_name() == "Jane"
                && profile.last_name() == "Doe"
                && profile.email() == "a@b.com"
        }))
        .times(1)
        .returning(|_| Ok(()));
    let mut gate = gate_at(Destination::Onboarding, store);

    let destination = gate
        .register("Jane", "Doe", "a@b.com")
        .expect("registration succeeds");

    assert_eq!(destination, Destination::Home);
    assert_eq!(gate.current_destination(), Destination::Home);
}

#[rstest]
fn failed_write_keeps_onboarding() {
    let mut store = MockProfileStore::new();
    store
        .expect_write_profile()
        .times(1)
        .returning(|_| Err(ProfileStoreError::write("disk full")));
    let mut gate = gate_at(Destination::Onboarding, store);

    let err = gate
        .register("Jane", "Doe", "a@b.com")
        .expect_err("write failure surfaces");

    assert_eq!(err, SessionError::Store(ProfileStoreError::write("disk full")));
    assert_eq!(gate.current_destination(), Destination::Onboarding);
}

#[rstest]
#[case(Destination::Home)]
#[case(Destination::Profile)]
fn registration_outside_onboarding_is_an_invalid_transition(#[case] current: Destination) {
    let mut store = MockProfileStore::new();
    store.expect_write_profile().times(0);
    let mut gate = gate_at(current, store);

    let err = gate
        .register("Jane", "Doe", "a@b.com")
        .expect_err("registration should be rejected");

    assert_eq!(
        err,
        SessionError::InvalidTransition {
            from: current,
            to: Destination::Home
        }
    );
    assert_eq!(gate.current_destination(), current);
}

#[rstest]
fn logout_clears_store_then_returns_to_onboarding() {
    let mut store = MockProfileStore::new();
    store.expect_clear_profile().times(1).returning(|| Ok(()));
    let mut gate = gate_at(Destination::Profile, store);

    assert_eq!(gate.logout(), Ok(Destination::Onboarding));
    assert_eq!(gate.current_destination(), Destination::Onboarding);
}

#[rstest]
fn failed_clear_keeps_profile_screen() {
    let mut store = MockProfileStore::new();
    store
        .expect_clear_profile()
        .times(1)
        .returning(|| Err(ProfileStoreError::unavailable("locked")));
    let mut gate = gate_at(Destination::Profile, store);

    assert!(matches!(gate.logout(), Err(SessionError::Store(_))));
    assert_eq!(gate.current_destination(), Destination::Profile);
}

#[rstest]
#[case(Destination::Onboarding)]
#[case(Destination::Home)]
fn logout_outside_profile_is_rejected(#[case] current: Destination) {
    let mut store = MockProfileStore::new();
    store.expect_clear_profile().times(0);
    let mut gate = gate_at(current, store);

    assert_eq!(
        gate.logout(),
        Err(SessionError::InvalidTransition {
            from: current,
            to: Destination::Onboarding
        })
    );
}

#[rstest]
#[case(Destination::Home, Destination::Profile)]
#[case(Destination::Profile, Destination::Home)]
fn free_navigation_moves_without_store_access(
    #[case] from: Destination,
    #[case] to: Destination,
) {
    let mut gate = gate_at(from, MockProfileStore::new());
    assert_eq!(gate.navigate(to), Ok(to));
    assert_eq!(gate.current_destination(), to);
}

#[rstest]
#[case(Destination::Onboarding, Destination::Home)]
#[case(Destination::Onboarding, Destination::Profile)]
#[case(Destination::Onboarding, Destination::Onboarding)]
#[case(Destination::Home, Destination::Onboarding)]
#[case(Destination::Home, Destination::Home)]
#[case(Destination::Profile, Destination::Profile)]
fn undefined_navigation_is_rejected(#[case] from: Destination, #[case] to: Destination) {
    let mut gate = gate_at(from, MockProfileStore::new());
    assert_eq!(
        gate.navigate(to),
        Err(SessionError::InvalidTransition { from, to })
    );
    assert_eq!(gate.current_destination(), from);
}

#[rstest]
fn navigating_to_onboarding_from_profile_logs_out() {
    let mut store = MockProfileStore::new();
    store.expect_clear_profile().times(1).returning(|| Ok(()));
    let mut gate = gate_at(Destination::Profile, store);

    assert_eq!(gate.navigate(Destination::Onboarding), Ok(Destination::Onboarding));
}

#[rstest]
#[case(Destination::Onboarding, vec![Destination::Home])]
#[case(Destination::Home, vec![Destination::Profile])]
#[case(Destination::Profile, vec![Destination::Home, Destination::Onboarding])]
fn available_destinations_follow_the_table(
    #[case] current: Destination,
    #[case] expected: Vec<Destination>,
) {
    let gate = gate_at(current, MockProfileStore::new());
    assert_eq!(gate.available_destinations(), expected);
}

#[rstest]
fn stored_profile_reads_through_the_store() {
    let gate = gate_at(Destination::Profile, store_reading(Some(complete_profile())));
    assert_eq!(gate.stored_profile(), Ok(Some(complete_profile())));
}

#[rstest]
fn fixture_store_always_starts_onboarding() {
    let gate = SessionGate::start(FixtureProfileStore).expect("session starts");
    assert_eq!(gate.current_destination(), Destination::Onboarding);
}

#[rstest]
fn destinations_render_route_names() {
    let routes: Vec<String> = [Destination::Onboarding, Destination::Home, Destination::Profile]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(routes, vec!["onboarding", "home", "profile"]);
}
