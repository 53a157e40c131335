use super::*;
use crate::config::ServerConfig;

fn test_state() -> AppState {
    let config = ServerConfig::from_lookup(|key| (key == "CSRF_TOKEN").then(|| "tok".to_owned())).unwrap();
    AppState::seeded(config)
}

// =============================================================================
// list_leads / get_lead
// =============================================================================

#[tokio::test]
async fn list_leads_sorted_by_id() {
    let state = test_state();
    let ids: Vec<u64> = list_leads(&state).await.iter().map(|l| l.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(ids.contains(&42));
}

#[tokio::test]
async fn get_lead_missing_is_not_found() {
    let state = test_state();
    assert_eq!(get_lead(&state, 999).await, Err(LeadError::NotFound(999)));
}

// =============================================================================
// update_status
// =============================================================================

#[tokio::test]
async fn update_status_moves_lead() {
    let state = test_state();
    let lead = update_status(&state, 42, "contacted").await.unwrap();
    assert_eq!(lead.status, "contacted");
    assert_eq!(get_lead(&state, 42).await.unwrap().status, "contacted");
}

#[tokio::test]
async fn update_status_rejects_unknown_status() {
    let state = test_state();
    let err = update_status(&state, 42, "archived").await.unwrap_err();
    assert_eq!(err, LeadError::UnknownStatus("archived".to_owned()));
    assert_eq!(get_lead(&state, 42).await.unwrap().status, "nouveau");
}

#[tokio::test]
async fn update_status_unknown_lead_is_not_found() {
    let state = test_state();
    assert_eq!(update_status(&state, 999, "won").await, Err(LeadError::NotFound(999)));
}

#[tokio::test]
async fn update_status_to_same_status_is_ok() {
    let state = test_state();
    let lead = update_status(&state, 42, "nouveau").await.unwrap();
    assert_eq!(lead.status, "nouveau");
}

// =============================================================================
// set_tags
// =============================================================================

#[tokio::test]
async fn set_tags_replaces_and_cleans() {
    let state = test_state();
    let tags = vec![" Rails ".to_owned(), String::new(), "Ruby".to_owned(), "Rails".to_owned()];
    let lead = set_tags(&state, 42, tags).await.unwrap();
    assert_eq!(lead.tags, vec!["Rails".to_owned(), "Ruby".to_owned()]);
}

#[tokio::test]
async fn set_tags_blank_keeps_existing_tags() {
    let state = test_state();
    let err = set_tags(&state, 42, vec!["  ".to_owned()]).await.unwrap_err();
    assert_eq!(err, LeadError::BlankTags);
    assert_eq!(get_lead(&state, 42).await.unwrap().tags, vec!["Rust".to_owned()]);
}

#[tokio::test]
async fn set_tags_unknown_lead_is_not_found() {
    let state = test_state();
    assert_eq!(set_tags(&state, 999, vec!["Rust".to_owned()]).await, Err(LeadError::NotFound(999)));
}
