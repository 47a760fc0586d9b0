use super::*;

#[test]
fn action_names_match_wire_format() {
    assert_eq!(SecurityAction::Login.as_str(), "login");
    assert_eq!(SecurityAction::LoginFailed.as_str(), "login_failed");
    assert_eq!(SecurityAction::Logout.as_str(), "logout");
    assert_eq!(SecurityAction::Register.as_str(), "register");
    assert_eq!(SecurityAction::UserCreated.as_str(), "user_created");
    assert_eq!(SecurityAction::UserUpdated.as_str(), "user_updated");
    assert_eq!(SecurityAction::UserDeleted.as_str(), "user_deleted");
}

#[tokio::test]
async fn record_assigns_ids_and_timestamp() {
    let log = SecurityLog::default();
    let first = log.record(SecurityAction::Register, Some(1), None, None).await;
    let second = log
        .record(SecurityAction::Login, Some(1), None, Some("10.0.0.1".to_owned()))
        .await;
    assert_eq!((first.id, second.id), (1, 2));
    assert!(first.timestamp.ends_with('Z'), "{}", first.timestamp);
    assert_eq!(second.ip_address.as_deref(), Some("10.0.0.1"));
}

#[tokio::test]
async fn list_is_newest_first() {
    let log = SecurityLog::default();
    log.record(SecurityAction::Register, Some(1), None, None).await;
    log.record(SecurityAction::Login, Some(1), None, None).await;
    log.record(SecurityAction::Logout, Some(1), None, None).await;
    let actions: Vec<_> = log.list().await.into_iter().map(|e| e.action).collect();
    assert_eq!(actions, ["logout", "login", "register"]);
}

#[tokio::test]
async fn capacity_drops_oldest() {
    let log = SecurityLog::with_capacity(2);
    for _ in 0..3 {
        log.record(SecurityAction::LoginFailed, None, Some("username=x".to_owned()), None).await;
    }
    let ids: Vec<_> = log.list().await.into_iter().map(|e| e.id).collect();
    assert_eq!(ids, [3, 2]);
}

#[tokio::test]
async fn entry_serializes_with_expected_keys() {
    let log = SecurityLog::default();
    let entry = log.record(SecurityAction::LoginFailed, None, Some("username=bob".to_owned()), None).await;
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["action"], "login_failed");
    assert!(json["user_id"].is_null());
    assert_eq!(json["details"], "username=bob");
    assert!(json.get("timestamp").is_some());
    assert!(json.get("ip_address").is_some());
}

#[tokio::test]
async fn recent_limits_newest_first() {
    let log = SecurityLog::default();
    for _ in 0..4 {
        log.record(SecurityAction::Login, Some(1), None, None).await;
    }
    let ids: Vec<_> = log.recent(2).await.into_iter().map(|e| e.id).collect();
    assert_eq!(ids, [4, 3]);
}
