use super::*;
use crate::http::ApiResponse;
use crate::http::types::AUTHORIZATION;
use crate::pipeline::test_helpers::{MockBackend, seed_session, session_over, session_with_store, test_user};
use crate::store::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY, DEMO_MODE_KEY, KeyValueStore, MemoryStore, REFRESH_TOKEN_KEY};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};
use std::thread::JoinHandle as ThreadHandle;
use std::time::Duration;

// =========================================================================
// login
// =========================================================================

#[tokio::test]
async fn login_persists_tokens_and_user() {
    let backend = Arc::new(MockBackend::new());
    let (session, _) = session_over(&backend);

    let auth = session.login("alice@globalco.test", "s3cret").await.unwrap();
    assert_eq!(auth.user, test_user());
    assert_eq!(session.access_token().as_deref(), Some("access-1"));
    assert_eq!(session.credentials().refresh_token().as_deref(), Some("refresh-1"));
    assert_eq!(session.current_user(), Some(test_user()));
    assert!(session.is_authenticated());
    assert!(!session.is_demo());

    let sent = backend.requests_to(LOGIN_PATH);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, Some(json!({ "email": "alice@globalco.test", "password": "s3cret" })));
    assert!(sent[0].header(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn rejected_login_keeps_prior_state_and_surfaces_detail() {
    let backend = Arc::new(MockBackend::new().with_login(ApiResponse::json(
        401,
        &json!({ "detail": "No active account found with the given credentials" }),
    )));
    let (session, _) = session_over(&backend);
    session.login_demo(CurrentUser::demo_hr()).unwrap();
    let before = session.credentials().snapshot();

    let err = session.login("alice@globalco.test", "wrong").await.unwrap_err();
    match err {
        AuthError::Rejected { status, detail } => {
            assert_eq!(status, 401);
            assert_eq!(detail.to_string(), "No active account found with the given credentials");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(session.credentials().snapshot(), before);
    assert_eq!(session.current_user(), Some(CurrentUser::demo_hr()));
}

#[tokio::test]
async fn field_errors_are_kept_per_field() {
    let backend = Arc::new(MockBackend::new().with_login(ApiResponse::json(
        400,
        &json!({ "detail": { "email": ["Enter a valid email address."] } }),
    )));
    let (session, _) = session_over(&backend);

    let err = session.login("not-an-email", "pw").await.unwrap_err();
    let AuthError::Rejected { detail: ErrorDetail::Fields(fields), .. } = err else {
        panic!("expected field errors");
    };
    assert_eq!(fields["email"], vec!["Enter a valid email address.".to_string()]);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn login_with_unparseable_error_body_uses_fallback() {
    let backend = Arc::new(MockBackend::new().with_login(ApiResponse::new(502, None, b"Bad Gateway".to_vec())));
    let (session, _) = session_over(&backend);

    let err = session.login("a@b.c", "pw").await.unwrap_err();
    assert!(err.to_string().contains("login failed (status 502)"));
}

#[tokio::test]
async fn login_keeps_demo_flag_when_already_in_demo_mode() {
    let backend = Arc::new(MockBackend::new());
    let kv = Arc::new(MemoryStore::new());
    kv.set(DEMO_MODE_KEY, "true").unwrap();
    let (session, _) = session_with_store(&backend, kv);

    session.login("admin@demo.com", "demo").await.unwrap();
    assert!(session.is_demo());
}

// =========================================================================
// login_demo
// =========================================================================

#[tokio::test]
async fn demo_login_sets_flag_and_demo_tokens_without_network() {
    let backend = Arc::new(MockBackend::new());
    let (session, _) = session_over(&backend);

    session.login_demo(CurrentUser::demo_admin()).unwrap();

    let snap = session.credentials().snapshot();
    assert!(snap.is_demo);
    assert!(snap.access_token.unwrap().starts_with("demo-access-"));
    assert!(snap.refresh_token.unwrap().starts_with("demo-refresh-"));
    assert_eq!(session.user_role(), Some(Role::Admin));
    assert_eq!(session.company_id().as_deref(), Some("demo-co-001"));
    assert!(backend.requests().is_empty());
}

// =========================================================================
// refresh_token
// =========================================================================

#[tokio::test]
async fn refresh_overwrites_only_the_access_token() {
    let backend = Arc::new(MockBackend::new());
    let (session, _) = session_over(&backend);
    seed_session(&session);

    let token = session.refresh_token().await.unwrap();
    assert_eq!(token, "access-2");
    assert_eq!(session.access_token().as_deref(), Some("access-2"));
    assert_eq!(session.credentials().refresh_token().as_deref(), Some("refresh-1"));
    assert_eq!(session.current_user(), Some(test_user()));

    let sent = backend.requests_to(REFRESH_PATH);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, Some(json!({ "refresh": "refresh-1" })));
    assert!(sent[0].bearer_token().is_none());
}

#[tokio::test]
async fn refresh_without_refresh_token_fails_locally() {
    let backend = Arc::new(MockBackend::new());
    let (session, _) = session_over(&backend);

    let err = session.refresh_token().await.unwrap_err();
    assert!(matches!(err, AuthError::MissingRefreshToken));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn rejected_refresh_leaves_state_for_the_caller() {
    let backend = Arc::new(MockBackend::new().failing_refresh(401));
    let (session, nav) = session_over(&backend);
    seed_session(&session);

    let err = session.refresh_token().await.unwrap_err();
    assert!(matches!(err, AuthError::Rejected { status: 401, .. }));
    assert_eq!(session.access_token().as_deref(), Some("access-1"));
    assert!(nav.routes().is_empty());
}

#[tokio::test]
async fn refresh_result_is_discarded_after_logout() {
    let backend = Arc::new(MockBackend::new().with_refresh_delay(Duration::from_millis(60)));
    let (session, _) = session_over(&backend);
    seed_session(&session);

    let (result, ()) = tokio::join!(session.refresh_token(), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        let _ = session.logout();
    });

    assert!(matches!(result, Err(AuthError::SessionChanged)));
    assert!(session.access_token().is_none());
    assert!(!session.is_authenticated());
}

/// Store that ends the session from another thread as soon as the refresh
/// token is read a second time, then gives that thread time to run.
#[derive(Default)]
struct LogoutOnSecondRead {
    inner: MemoryStore,
    target: OnceLock<CredentialStore>,
    reads: AtomicUsize,
    racer: Mutex<Option<ThreadHandle<()>>>,
}

impl KeyValueStore for LogoutOnSecondRead {
    fn get(&self, key: &str) -> Option<String> {
        let value = self.inner.get(key);
        if key == REFRESH_TOKEN_KEY {
            if let Some(creds) = self.target.get() {
                if self.reads.fetch_add(1, Ordering::SeqCst) == 1 {
                    let creds = creds.clone();
                    *self.racer.lock().unwrap() = Some(std::thread::spawn(move || creds.clear().unwrap()));
                    std::thread::sleep(Duration::from_millis(50));
                }
            }
        }
        value
    }

    fn set(&self, key: &str, value: &str) -> Result<(), crate::store::StoreError> {
        self.inner.set(key, value)
    }

    fn remove(&self, keys: &[&str]) -> Result<(), crate::store::StoreError> {
        self.inner.remove(keys)
    }
}

#[tokio::test]
async fn logout_between_recheck_and_write_leaves_no_orphan_token() {
    let backend = Arc::new(MockBackend::new());
    let kv = Arc::new(LogoutOnSecondRead::default());
    let (session, _) = session_with_store(&backend, kv.clone());
    seed_session(&session);
    let _ = kv.target.set(session.credentials().clone());

    let _ = session.refresh_token().await;
    let racer = kv.racer.lock().unwrap().take().expect("logout thread started");
    racer.join().unwrap();

    assert!(kv.inner.get(CURRENT_USER_KEY).is_none());
    assert!(kv.inner.get(ACCESS_TOKEN_KEY).is_none());
    assert!(kv.inner.get(REFRESH_TOKEN_KEY).is_none());
}

// =========================================================================
// logout
// =========================================================================

#[tokio::test]
async fn logout_clears_everything_and_revokes() {
    let backend = Arc::new(MockBackend::new());
    let (session, nav) = session_over(&backend);
    seed_session(&session);

    let revoke = session.logout().expect("revoke should be spawned");
    revoke.await.unwrap();

    assert_eq!(session.credentials().snapshot(), crate::store::credentials::Credential::default());
    assert!(session.current_user().is_none());
    assert_eq!(nav.last().as_deref(), Some(LANDING_ROUTE));

    let sent = backend.requests_to(LOGOUT_PATH);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, Some(json!({ "refresh": "refresh-1" })));
    assert_eq!(sent[0].bearer_token(), Some("access-1"));
}

#[tokio::test]
async fn logout_twice_is_harmless() {
    let backend = Arc::new(MockBackend::new());
    let (session, nav) = session_over(&backend);
    seed_session(&session);

    if let Some(handle) = session.logout() {
        handle.await.unwrap();
    }
    assert!(session.logout().is_none());

    assert!(!session.is_authenticated());
    assert_eq!(nav.routes(), vec![LANDING_ROUTE.to_string(), LANDING_ROUTE.to_string()]);
    assert_eq!(backend.count(LOGOUT_PATH), 1);
}

#[tokio::test]
async fn demo_logout_skips_revocation() {
    let backend = Arc::new(MockBackend::new());
    let (session, nav) = session_over(&backend);
    session.login_demo(CurrentUser::demo_admin()).unwrap();

    assert!(session.logout().is_none());
    assert!(!session.is_demo());
    assert!(!session.is_authenticated());
    assert_eq!(nav.last().as_deref(), Some(LANDING_ROUTE));
    assert!(backend.requests().is_empty());
}

#[test]
fn logout_outside_runtime_still_clears_state() {
    let backend = Arc::new(MockBackend::new());
    let (session, nav) = session_over(&backend);
    seed_session(&session);

    assert!(session.logout().is_none());
    assert!(!session.is_authenticated());
    assert_eq!(nav.last().as_deref(), Some(LANDING_ROUTE));
}

// =========================================================================
// derivations
// =========================================================================

#[test]
fn role_checks_follow_the_cached_user() {
    let backend = Arc::new(MockBackend::new());
    let (session, _) = session_over(&backend);
    assert_eq!(session.user_role(), None);
    assert!(!session.has_role(&Role::ALL));

    session.login_demo(CurrentUser::demo_hr()).unwrap();
    assert_eq!(session.user_role(), Some(Role::Hr));
    assert!(session.has_role(&[Role::Admin, Role::Hr]));
    assert!(!session.has_role(&[Role::Accountant]));
    assert!(!session.has_role(&[]));
    assert!(session.can_manage_employees());
    assert!(!session.can_manage_finance());
}

#[test]
fn accountant_can_manage_finance_only() {
    let backend = Arc::new(MockBackend::new());
    let (session, _) = session_over(&backend);
    let user = CurrentUser { role: Role::Accountant, ..test_user() };
    session.credentials().set_session("a", "r", &user, false).unwrap();

    assert!(session.can_manage_finance());
    assert!(!session.can_manage_employees());
}

// =========================================================================
// restore
// =========================================================================

#[test]
fn token_without_user_is_cleared_on_restore() {
    let kv = Arc::new(MemoryStore::new());
    kv.set(ACCESS_TOKEN_KEY, "access-1").unwrap();
    kv.set(REFRESH_TOKEN_KEY, "refresh-1").unwrap();

    let (session, _) = session_with_store(&Arc::new(MockBackend::new()), kv.clone());
    assert!(session.access_token().is_none());
    assert!(kv.get(REFRESH_TOKEN_KEY).is_none());
}

#[tokio::test]
async fn orphan_refresh_token_is_cleared_on_restore() {
    let kv = Arc::new(MemoryStore::new());
    kv.set(REFRESH_TOKEN_KEY, "refresh-1").unwrap();

    let backend = Arc::new(MockBackend::new());
    let (session, _) = session_with_store(&backend, kv.clone());
    assert!(kv.get(REFRESH_TOKEN_KEY).is_none());

    assert!(matches!(session.refresh_token().await, Err(AuthError::MissingRefreshToken)));
    assert!(session.access_token().is_none());
    assert_eq!(backend.count(REFRESH_PATH), 0);
}

#[test]
fn malformed_user_is_cleared_on_restore() {
    let kv = Arc::new(MemoryStore::new());
    kv.set(ACCESS_TOKEN_KEY, "access-1").unwrap();
    kv.set(CURRENT_USER_KEY, "{not json").unwrap();

    let (session, _) = session_with_store(&Arc::new(MockBackend::new()), kv.clone());
    assert!(!session.is_authenticated());
    assert!(kv.get(ACCESS_TOKEN_KEY).is_none());
    assert!(kv.get(CURRENT_USER_KEY).is_none());
}

#[test]
fn consistent_session_survives_restore() {
    let kv: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    CredentialStore::new(kv.clone())
        .set_session("access-1", "refresh-1", &test_user(), false)
        .unwrap();

    let (session, _) = session_with_store(&Arc::new(MockBackend::new()), kv);
    assert_eq!(session.current_user(), Some(test_user()));
    assert_eq!(session.access_token().as_deref(), Some("access-1"));
}
