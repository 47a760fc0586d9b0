use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_unique() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn created_session_validates() {
    let store = SessionStore::new(Duration::from_secs(60));
    let token = store.create(7).await;
    assert_eq!(store.validate(&token).await, Ok(7));
}

#[tokio::test]
async fn unknown_token_is_not_found() {
    let store = SessionStore::new(Duration::from_secs(60));
    assert_eq!(store.validate("nope").await, Err(SessionError::NotFound));
}

#[tokio::test]
async fn expired_session_is_rejected_and_dropped() {
    let store = SessionStore::new(Duration::ZERO);
    let token = store.create(7).await;
    assert_eq!(store.validate(&token).await, Err(SessionError::Expired));
    assert_eq!(store.validate(&token).await, Err(SessionError::NotFound));
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn revoke_removes_session() {
    let store = SessionStore::new(Duration::from_secs(60));
    let token = store.create(3).await;
    assert_eq!(store.revoke(&token).await, Some(3));
    assert_eq!(store.revoke(&token).await, None);
    assert_eq!(store.validate(&token).await, Err(SessionError::NotFound));
}

#[tokio::test]
async fn purge_only_drops_expired() {
    let live = SessionStore::new(Duration::from_secs(60));
    live.create(1).await;
    assert_eq!(live.purge_expired().await, 0);

    let dead = SessionStore::new(Duration::ZERO);
    dead.create(1).await;
    dead.create(2).await;
    assert_eq!(dead.purge_expired().await, 2);
    assert_eq!(dead.len().await, 0);
}

#[tokio::test]
async fn revoke_user_drops_all_of_their_sessions() {
    let store = SessionStore::new(Duration::from_secs(60));
    let a = store.create(1).await;
    let b = store.create(1).await;
    let other = store.create(2).await;
    assert_eq!(store.revoke_user(1).await, 2);
    assert_eq!(store.validate(&a).await, Err(SessionError::NotFound));
    assert_eq!(store.validate(&b).await, Err(SessionError::NotFound));
    assert_eq!(store.validate(&other).await, Ok(2));
}
