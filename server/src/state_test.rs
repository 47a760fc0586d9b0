use super::*;

fn test_config() -> ServerConfig {
    ServerConfig { session_ttl: Duration::from_secs(60), ..ServerConfig::default() }
}

#[tokio::test]
async fn new_state_has_no_accounts_and_a_seeded_catalog() {
    let state = AppState::new(test_config());
    assert_eq!(state.users.count().await, 0);
    assert_eq!(state.sessions.len().await, 0);
    assert!(state.security_log.list().await.is_empty());
    assert!(state.pets.counts().await.total > 0);
    assert_eq!(state.sessions.ttl(), Duration::from_secs(60));
}

#[tokio::test]
async fn seed_admin_creates_admin_account() {
    let state = AppState::new(test_config());
    let seed = AdminSeed { username: "root".to_owned(), password: "secret1".to_owned() };
    let admin = state.seed_admin(&seed).await.unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(state.users.authenticate("root", "secret1").await, Some(admin));
}

#[tokio::test]
async fn clones_share_stores() {
    let state = AppState::new(test_config());
    let clone = state.clone();
    let token = clone.sessions.create(1).await;
    assert_eq!(state.sessions.validate(&token).await, Ok(1));
}
