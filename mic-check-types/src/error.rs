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

//! The caller-facing error taxonomy.
//!
//! Hosts report permission failures through vendor-defined identifier and
//! message strings. Callers should branch on [`ErrorKind`] only; the original
//! strings are kept for diagnostic display and change between browser versions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable classification of a failed permission probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The operating system's privacy settings block the browser itself (macOS).
    SystemPermissionDenied,
    /// The person declined the in-page permission prompt.
    UserPermissionDenied,
    /// The device exists but could not be started, usually because another
    /// application or tab holds it (Windows).
    CouldNotStartVideoSource,
    /// No runtime-specific rule matched.
    Generic,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SystemPermissionDenied => "SystemPermissionDenied",
            ErrorKind::UserPermissionDenied => "UserPermissionDenied",
            ErrorKind::CouldNotStartVideoSource => "CouldNotStartVideoSource",
            ErrorKind::Generic => "Generic",
        }
    }

    /// A retry cannot succeed until the person changes a browser or OS setting.
    pub fn requires_settings_change(&self) -> bool {
        matches!(
            self,
            ErrorKind::SystemPermissionDenied | ErrorKind::UserPermissionDenied
        )
    }

    /// The failure often clears on its own once another application releases
    /// the device.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorKind::CouldNotStartVideoSource)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure exactly as the host reported it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFailure {
    /// The `name` of the rejection, e.g. `NotAllowedError`.
    pub identifier: String,
    /// The `message` of the rejection; empty when the host gave none.
    pub message: String,
}

impl RawFailure {
    pub fn new(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            message: message.into(),
        }
    }
}

/// Result of classifying a [`RawFailure`].
///
/// Serializes to `{ "type": ..., "name": ..., "message": ... }` so JS callers
/// see the same object shape on every browser.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} ({original_identifier}: {original_message})")]
pub struct ClassifiedError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    #[serde(rename = "name")]
    pub original_identifier: String,
    #[serde(rename = "message", default)]
    pub original_message: String,
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind, raw: RawFailure) -> Self {
        Self {
            kind,
            original_identifier: raw.identifier,
            original_message: raw.message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
