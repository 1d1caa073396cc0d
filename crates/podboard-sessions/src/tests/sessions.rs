//! End-to-end session tests: enrichment, hydration, authorization.

use super::helpers::*;
use podboard_auth_core::Role;

#[test]
fn credential_round_trip_preserves_identity_and_grant() {
    let service = test_service();
    let record = credential_record();

    let token = service.establish_session(&record).unwrap();
    let view = service.read_session(&token).unwrap();

    assert_eq!(view.user.id, record.id);
    assert_eq!(view.user.email, record.email);
    assert_eq!(view.user.name, record.name);
    assert_eq!(view.user.role, Some(Role::PodLead));
    assert_eq!(view.access_token.as_deref(), Some("svc-token"));
}

#[test]
fn oauth_round_trip_preserves_degraded_state() {
    let service = test_service();
    let record = degraded_oauth_record();

    let token = service.establish_session(&record).unwrap();
    let view = service.read_session(&token).unwrap();

    assert_eq!(view.user.id, record.id);
    assert_eq!(view.user.role, None);
    assert_eq!(view.access_token, None);
}

#[test]
fn hydration_is_idempotent() {
    let service = test_service();
    let token = service.establish_session(&credential_record()).unwrap();

    let first = service.read_session(&token).unwrap();
    let second = service.read_session(&token).unwrap();

    assert_eq!(first, second);
}

#[test]
fn enrich_without_login_event_is_a_passthrough() {
    let service = test_service();
    let claims = service.enrich(None, Some(&credential_record())).unwrap();

    let passed = service.enrich(Some(claims.clone()), None).unwrap();
    assert_eq!(passed, claims);

    assert!(service.enrich(None, None).is_none());
}

#[test]
fn fresh_login_replaces_previous_claims() {
    let service = test_service();
    let previous = service.enrich(None, Some(&credential_record())).unwrap();

    let replaced = service
        .enrich(Some(previous.clone()), Some(&degraded_oauth_record()))
        .unwrap();

    assert_ne!(replaced.sub, previous.sub);
    assert!(replaced.grant().is_none());
}

#[test]
fn partial_grant_reads_as_grant_less() {
    let service = test_service();
    let mut claims = service.enrich(None, Some(&credential_record())).unwrap();
    claims.access_token = None;

    assert!(claims.grant().is_none());

    let view = service.project(&claims);
    assert_eq!(view.user.role, None);
    assert_eq!(view.access_token, None);
    assert!(!view.authorizes(Role::Observer));
}

#[test]
fn missing_role_denies_every_authorization_check() {
    let service = test_service();
    let token = service.establish_session(&degraded_oauth_record()).unwrap();
    let view = service.read_session(&token).unwrap();

    // Never a permissive default: not even observer access.
    assert!(!view.authorizes(Role::Observer));
    assert!(!view.authorizes(Role::Member));
    assert!(!view.authorizes(Role::PodLead));
    assert!(!view.authorizes(Role::Admin));
}

#[test]
fn role_ranking_gates_authorization() {
    let service = test_service();
    let token = service.establish_session(&credential_record()).unwrap();
    let view = service.read_session(&token).unwrap();

    assert!(view.authorizes(Role::Observer));
    assert!(view.authorizes(Role::Member));
    assert!(view.authorizes(Role::PodLead));
    assert!(!view.authorizes(Role::Admin));
}
