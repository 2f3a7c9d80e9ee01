// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

//! Integration tests for MediaPermissions and the permission event bus.

#![cfg(not(target_arch = "wasm32"))]

mod support;

use std::cell::RefCell;
use std::rc::Rc;

use mic_check::{
    subscribe_permission_events, ErrorKind, FixedRuntime, MediaConstraints, MediaPermissions,
    PermissionEvent, PermissionProber, RuntimeIdentity,
};
use support::StubHost;

fn permissions(
    host: StubHost,
    runtime: RuntimeIdentity,
) -> MediaPermissions<StubHost, FixedRuntime> {
    MediaPermissions::new(PermissionProber::new(host, FixedRuntime::new(runtime)))
}

#[tokio::test]
async fn nothing_is_granted_before_a_request() {
    let permissions =
        permissions(StubHost::granting(&["audio", "video"]), RuntimeIdentity::Chrome);
    assert!(!permissions.is_granted());
    assert!(!permissions.is_audio_granted());
    assert!(!permissions.is_video_granted());
}

#[tokio::test]
async fn grant_sets_flags_and_calls_back() {
    let mut permissions =
        permissions(StubHost::granting(&["audio", "video"]), RuntimeIdentity::Chrome);
    let granted = Rc::new(RefCell::new(Vec::new()));
    let granted_clone = granted.clone();
    permissions.set_on_granted(Rc::new(move |c| granted_clone.borrow_mut().push(c)));

    permissions.request(None).await.unwrap();

    assert!(permissions.is_granted());
    assert_eq!(*granted.borrow(), vec![MediaConstraints::default()]);
    assert_eq!(permissions.prober().host().stop_counts(), vec![1, 1]);
}

#[tokio::test]
async fn audio_grant_leaves_video_untouched() {
    let permissions = permissions(StubHost::granting(&["audio"]), RuntimeIdentity::Safari);

    permissions.request_audio().await.unwrap();

    assert!(permissions.is_audio_granted());
    assert!(!permissions.is_video_granted());
    assert!(!permissions.is_granted());
}

#[tokio::test]
async fn denial_calls_back_with_classified_error() {
    let mut permissions = permissions(
        StubHost::rejecting("NotAllowedError", "Permission dismissed"),
        RuntimeIdentity::Chrome,
    );
    let denied = Rc::new(RefCell::new(None));
    let denied_clone = denied.clone();
    permissions.set_on_denied(Rc::new(move |e| *denied_clone.borrow_mut() = Some(e)));

    let result = permissions.request_video().await;

    assert_eq!(result.unwrap_err().kind, ErrorKind::UserPermissionDenied);
    assert_eq!(
        denied.borrow().as_ref().map(|e| e.kind),
        Some(ErrorKind::UserPermissionDenied)
    );
    assert!(!permissions.is_video_granted());
}

#[tokio::test]
async fn events_are_broadcast_to_subscribers() {
    let mut rx = subscribe_permission_events();
    let permissions =
        permissions(StubHost::rejecting("NotFoundError", ""), RuntimeIdentity::Firefox);

    let _ = permissions.request(None).await;

    // Other tests in this binary share the global bus; look for ours.
    let mut seen = Vec::new();
    while let Ok(event) = rx.try_recv() {
        seen.push(event);
    }
    assert!(
        seen.iter().any(|event| matches!(
            event,
            PermissionEvent::Denied(e)
                if e.kind == ErrorKind::SystemPermissionDenied
                    && e.original_identifier == "NotFoundError"
        )),
        "events seen: {seen:?}"
    );
}
