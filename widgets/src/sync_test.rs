use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

struct FixedStatus {
    status: u16,
    seen: RefCell<Vec<StatusChange>>,
}

impl StatusSync for FixedStatus {
    fn update_status(&self, change: &StatusChange) -> impl Future<Output = Result<(), SyncError>> {
        self.seen.borrow_mut().push(change.clone());
        let status = self.status;
        async move { check_status(status) }
    }
}

fn change() -> StatusChange {
    StatusChange { seq: 1, card_id: "42".into(), from: "nouveau".into(), to: "contacted".into() }
}

#[test]
fn is_success_accepts_only_2xx() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(is_success(299));
    assert!(!is_success(199));
    assert!(!is_success(300));
    assert!(!is_success(302));
    assert!(!is_success(422));
    assert!(!is_success(500));
}

#[test]
fn check_status_maps_failures_to_status_error() {
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(500), Err(SyncError::Status(500)));
}

#[test]
fn sync_error_display() {
    assert_eq!(SyncError::Network("offline".into()).to_string(), "network error: offline");
    assert_eq!(SyncError::Status(500).to_string(), "server responded with status 500");
    assert_eq!(SyncError::Unavailable.to_string(), "status sync unavailable");
}

#[test]
fn status_sync_implementation_sees_each_change_once() {
    let sync = FixedStatus { status: 200, seen: RefCell::new(Vec::new()) };
    assert_eq!(block_on(sync.update_status(&change())), Ok(()));
    assert_eq!(sync.seen.borrow().as_slice(), [change()]);
}

#[test]
fn status_change_serializes_field_names() {
    let json = serde_json::to_value(change()).unwrap();
    assert_eq!(json["card_id"], "42");
    assert_eq!(json["to"], "contacted");
}
