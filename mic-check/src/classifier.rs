/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Maps host-reported permission failures onto [`ErrorKind`].
//!
//! The decision data lives in [`CLASSIFICATION_RULES`]; [`classify`] is a
//! first-match scan over it. Matching is exact string equality. Browser
//! wording drifts between versions, so anything the table does not name falls
//! through to [`ErrorKind::Generic`]. That is expected traffic, not a gap to be
//! filled speculatively.

use mic_check_types::{ClassifiedError, ErrorKind, RawFailure, RuntimeIdentity};

pub const NOT_ALLOWED_ERROR: &str = "NotAllowedError";
pub const NOT_READABLE_ERROR: &str = "NotReadableError";
pub const NOT_FOUND_ERROR: &str = "NotFoundError";
pub const ABORT_ERROR: &str = "AbortError";

/// How a rule constrains the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageMatch {
    Any,
    /// The message must equal one of these strings exactly.
    OneOf(&'static [&'static str]),
}

impl MessageMatch {
    fn matches(&self, message: &str) -> bool {
        match self {
            MessageMatch::Any => true,
            MessageMatch::OneOf(candidates) => candidates.iter().any(|c| *c == message),
        }
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub runtime: RuntimeIdentity,
    pub identifier: &'static str,
    pub message: MessageMatch,
    pub kind: ErrorKind,
}

impl ClassificationRule {
    const fn new(
        runtime: RuntimeIdentity,
        identifier: &'static str,
        message: MessageMatch,
        kind: ErrorKind,
    ) -> Self {
        Self {
            runtime,
            identifier,
            message,
            kind,
        }
    }

    pub fn matches(&self, raw: &RawFailure, runtime: RuntimeIdentity) -> bool {
        self.runtime == runtime
            && self.identifier == raw.identifier
            && self.message.matches(&raw.message)
    }
}

const CHROME_SYSTEM_DENIED: &[&str] = &["Permission denied by system"];
const CHROME_USER_DENIED: &[&str] = &["Permission denied", "Permission dismissed"];

/// Runtime → identifier → optional message → kind.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule::new(
        RuntimeIdentity::Chrome,
        NOT_ALLOWED_ERROR,
        MessageMatch::OneOf(CHROME_SYSTEM_DENIED),
        ErrorKind::SystemPermissionDenied,
    ),
    ClassificationRule::new(
        RuntimeIdentity::Chrome,
        NOT_ALLOWED_ERROR,
        MessageMatch::OneOf(CHROME_USER_DENIED),
        ErrorKind::UserPermissionDenied,
    ),
    ClassificationRule::new(
        RuntimeIdentity::Chrome,
        NOT_READABLE_ERROR,
        MessageMatch::Any,
        ErrorKind::CouldNotStartVideoSource,
    ),
    ClassificationRule::new(
        RuntimeIdentity::Safari,
        NOT_ALLOWED_ERROR,
        MessageMatch::Any,
        ErrorKind::UserPermissionDenied,
    ),
    ClassificationRule::new(
        RuntimeIdentity::Edge,
        NOT_ALLOWED_ERROR,
        MessageMatch::Any,
        ErrorKind::UserPermissionDenied,
    ),
    ClassificationRule::new(
        RuntimeIdentity::Edge,
        NOT_READABLE_ERROR,
        MessageMatch::Any,
        ErrorKind::CouldNotStartVideoSource,
    ),
    // https://developer.mozilla.org/en-US/docs/Web/API/MediaDevices/getUserMedia#exceptions
    ClassificationRule::new(
        RuntimeIdentity::Firefox,
        NOT_FOUND_ERROR,
        MessageMatch::Any,
        ErrorKind::SystemPermissionDenied,
    ),
    ClassificationRule::new(
        RuntimeIdentity::Firefox,
        NOT_READABLE_ERROR,
        MessageMatch::Any,
        ErrorKind::SystemPermissionDenied,
    ),
    ClassificationRule::new(
        RuntimeIdentity::Firefox,
        NOT_ALLOWED_ERROR,
        MessageMatch::Any,
        ErrorKind::UserPermissionDenied,
    ),
    ClassificationRule::new(
        RuntimeIdentity::Firefox,
        ABORT_ERROR,
        MessageMatch::Any,
        ErrorKind::CouldNotStartVideoSource,
    ),
];

/// Classifies a raw host failure for the given runtime.
pub fn classify(raw: &RawFailure, runtime: RuntimeIdentity) -> ErrorKind {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(raw, runtime))
        .map(|rule| rule.kind)
        .unwrap_or(ErrorKind::Generic)
}

/// Classifies `raw` and keeps its original strings for diagnostics.
pub fn classify_failure(raw: RawFailure, runtime: RuntimeIdentity) -> ClassifiedError {
    let kind = classify(&raw, runtime);
    ClassifiedError::new(kind, raw)
}
