use futures::executor::block_on;

use super::*;

fn change(card_id: &str, to: &str) -> StatusChange {
    StatusChange { seq: 1, card_id: card_id.to_owned(), from: "nouveau".to_owned(), to: to.to_owned() }
}

#[test]
fn status_update_path_joins_prefix_and_id() {
    assert_eq!(status_update_path("/leads", "42"), "/leads/42");
    assert_eq!(status_update_path("/leads/", "42"), "/leads/42");
    assert_eq!(status_update_path("/crm/prospects", "7"), "/crm/prospects/7");
}

#[test]
fn lead_endpoint_formats_expected_path() {
    assert_eq!(lead_endpoint(9), "/api/leads/9");
}

#[test]
fn status_update_headers_carry_csrf_and_json() {
    let headers = status_update_headers("tok-123");
    assert!(headers.contains(&("X-CSRF-Token", "tok-123".to_owned())));
    assert!(headers.contains(&("Accept", "application/json".to_owned())));
    assert!(headers.contains(&("Content-Type", "application/json".to_owned())));
}

#[test]
fn leads_request_failed_message_formats_status() {
    assert_eq!(leads_request_failed_message(503), "leads request failed: 503");
}

#[test]
fn http_sync_targets_configured_prefix() {
    let config = ClientConfig { status_prefix: "/leads".to_owned(), csrf_token: "t".to_owned(), ..ClientConfig::default() };
    let sync = HttpStatusSync::from_config(&config);
    assert_eq!(sync.url_for(&change("42", "contacted")), "/leads/42");
    assert_eq!(sync, HttpStatusSync::new("/leads", "t"));
}

#[test]
fn http_sync_is_unavailable_outside_browser() {
    let sync = HttpStatusSync::new("/leads", "t");
    let result = block_on(sync.update_status(&change("42", "contacted")));
    assert_eq!(result, Err(SyncError::Unavailable));
}

#[test]
fn fetch_leads_is_unavailable_outside_browser() {
    assert!(block_on(fetch_leads()).is_err());
    assert!(block_on(fetch_lead(1)).is_none());
}
