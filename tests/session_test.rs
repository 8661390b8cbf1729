use orgdesk::auth::{self, SessionControl, SessionStorage};
use orgdesk::model::{Department, PersonKind, Role, User, UserId};
use orgdesk::store::UserRepository;
use orgdesk::store::sqlite::SqliteStore;

/// Helper: a temp dir holding a database path shared by store and sessions.
fn temp_db() -> (String, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orgdesk.db");
    (path.to_string_lossy().into_owned(), dir)
}

async fn seed(db: &str, user: &User) {
    SqliteStore::open(db).unwrap().save(user).await.unwrap();
}

// ── Sign in / sign out ────────────────────────────────────────────

#[tokio::test]
async fn login_stores_session_for_known_user() {
    let (db, _dir) = temp_db();
    seed(&db, &User::applicant("u1", Some("Ada".to_string()))).await;

    let session = auth::login(&db, &UserId::from("u1")).await.unwrap();
    assert_eq!(session.user_id, UserId::from("u1"));
    assert_eq!(session.kind, PersonKind::Applicant);

    let current = SessionStorage::open(&db).unwrap().current().unwrap();
    assert_eq!(current, Some(session));
}

#[tokio::test]
async fn login_rejects_unknown_user() {
    let (db, _dir) = temp_db();
    let err = auth::login(&db, &UserId::from("ghost")).await.unwrap_err();
    assert!(err.to_string().contains("ghost"));
    assert!(SessionStorage::open(&db).unwrap().current().unwrap().is_none());
}

#[tokio::test]
async fn logout_clears_session() {
    let (db, _dir) = temp_db();
    seed(&db, &User::applicant("u1", None)).await;
    auth::login(&db, &UserId::from("u1")).await.unwrap();

    auth::logout(&db).unwrap();
    assert!(SessionStorage::open(&db).unwrap().current().unwrap().is_none());
    // signing out twice is harmless
    auth::logout(&db).unwrap();
}

#[tokio::test]
async fn fresh_login_picks_up_promotion() {
    let (db, _dir) = temp_db();
    let mut user = User::applicant("u1", None);
    seed(&db, &user).await;
    auth::login(&db, &UserId::from("u1")).await.unwrap();

    user.kind = PersonKind::Member;
    user.role = Some(Role::Analyst);
    user.department = Some(Department::Finance);
    seed(&db, &user).await;

    let storage = SessionStorage::open(&db).unwrap();
    storage.invalidate().await.unwrap();
    assert!(storage.current().unwrap().is_none());

    let session = auth::login(&db, &UserId::from("u1")).await.unwrap();
    assert_eq!(session.kind, PersonKind::Member);
}

#[tokio::test]
async fn session_survives_reopen() {
    let (db, _dir) = temp_db();
    seed(&db, &User::applicant("u1", None)).await;
    auth::login(&db, &UserId::from("u1")).await.unwrap();

    let reopened = SessionStorage::open(&db).unwrap();
    assert_eq!(
        reopened.current().unwrap().map(|s| s.user_id),
        Some(UserId::from("u1"))
    );
}
