//! This crate asks the host browser for camera and microphone access and turns the many
//! browser-specific ways that request can fail into a small set of error kinds an application can
//! branch on.
//!
//! The permission probe acquires the requested tracks and stops them straight away; it only tests
//! permission. Failures are classified from the rejection's `name` and `message` together with the
//! detected browser engine, using the table in [`classifier`].
//!
//! This crate makes no assumptions about the UI. Dialog copy, retry buttons and settings links
//! belong to the app; [`guidance`] only says which of those applies.
//!
//! # Outline of usage
//!
//! ## Probe from Rust:
//! ```ignore
//! let prober = PermissionProber::new(WebMediaHost, NavigatorDetector::default());
//!
//! match prober.probe(None).await {
//!     Ok(()) => { /* camera and mic granted */ }
//!     Err(e) => match e.kind {
//!         ErrorKind::SystemPermissionDenied => { /* OS settings */ }
//!         ErrorKind::UserPermissionDenied => { /* unblock in the address bar */ }
//!         ErrorKind::CouldNotStartVideoSource => { /* device busy, retry later */ }
//!         ErrorKind::Generic => {}
//!     },
//! }
//! ```
//!
//! ## Track grant state:
//! ```ignore
//! let mut permissions = MediaPermissions::new(prober);
//! permissions.on_denied = Rc::new(|error| ...); // callback
//! permissions.request(None).await;
//! permissions.is_granted();
//! ```
//!
//! ## From JavaScript (with the `wasm` feature):
//! ```js
//! await requestMediaPermissions({ audio: true, video: false });
//! ```

pub mod classifier;
pub mod config;
pub mod event_bus;
pub mod events;
pub mod guidance;
pub mod host;
mod media_permissions;
pub mod prober;
pub mod runtime;

#[cfg(feature = "wasm")]
pub mod web;

pub use classifier::{
    classify, classify_failure, ClassificationRule, MessageMatch, CLASSIFICATION_RULES,
};
pub use config::PermissionsConfig;
pub use event_bus::{emit_permission_event, global_permission_sender, subscribe_permission_events};
pub use events::PermissionEvent;
pub use guidance::{Remediation, RetryStrategy, SettingsTarget};
pub use host::{MediaHost, MediaTrack};
pub use media_permissions::MediaPermissions;
pub use mic_check_types::{
    ClassifiedError, ErrorKind, MediaConstraints, OsIdentity, RawFailure, RuntimeIdentity,
};
pub use prober::PermissionProber;
pub use runtime::{FixedRuntime, RuntimeDetector, UserAgentDetector};

#[cfg(feature = "wasm")]
pub use web::{NavigatorDetector, WebMediaHost};
