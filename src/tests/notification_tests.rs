use std::time::{Duration, Instant};

use crate::pages::{NotificationKind, NotificationSlot};

#[test]
fn test_notification_expires_after_ttl() {
    let mut slot = NotificationSlot::new(Duration::from_secs(4));
    let start = Instant::now();
    slot.show_at("Team created successfully!", NotificationKind::Success, start);

    slot.expire(start + Duration::from_millis(3999));
    assert_eq!(slot.message(), Some("Team created successfully!"));
    assert_eq!(slot.remaining_secs(start + Duration::from_secs(1)), 3);

    slot.expire(start + Duration::from_secs(4));
    assert!(slot.current().is_none());
    assert_eq!(slot.remaining_secs(start), 0);
}

#[test]
fn test_new_notification_replaces_old() {
    let mut slot = NotificationSlot::new(Duration::from_secs(4));
    let start = Instant::now();
    slot.show_at("first", NotificationKind::Success, start);
    slot.show_at("second", NotificationKind::Error, start + Duration::from_secs(3));

    // the replacement restarts the clock
    slot.expire(start + Duration::from_secs(5));
    let current = slot.current().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.kind, NotificationKind::Error);
}

#[test]
fn test_dismiss() {
    let mut slot = NotificationSlot::new(Duration::from_secs(4));
    slot.error("Failed to copy link.");
    slot.dismiss();
    assert!(slot.current().is_none());
}
