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

//! Remediation hints for UI layers.
//!
//! This module only picks *what* the person should do; wording and rendering
//! belong to the UI.

use mic_check_types::{ClassifiedError, ErrorKind, OsIdentity, RuntimeIdentity};
use serde::Serialize;

/// An OS settings pane that controls browser access to devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsTarget {
    pub name: &'static str,
    pub link: &'static str,
}

const MACOS_PRIVACY_SETTINGS: SettingsTarget = SettingsTarget {
    name: "System Preferences",
    link: "x-apple.systempreferences:com.apple.preference.security?Privacy_Camera",
};

/// Returns a deep link into the OS privacy settings, where one is known.
pub fn settings_target(os: OsIdentity) -> Option<SettingsTarget> {
    match os {
        OsIdentity::MacOs => Some(MACOS_PRIVACY_SETTINGS),
        _ => None,
    }
}

/// How a "try again" action should be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RetryStrategy {
    /// Issue a new probe.
    Reprobe,
    /// Reload the page. Safari misbehaves when permissions are re-requested
    /// on the same page.
    ReloadPage,
}

pub fn retry_strategy(runtime: RuntimeIdentity) -> RetryStrategy {
    match runtime {
        RuntimeIdentity::Safari => RetryStrategy::ReloadPage,
        _ => RetryStrategy::Reprobe,
    }
}

/// What the person has to do before a retry can succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Grant the browser access in the OS privacy settings.
    OpenSystemSettings(Option<SettingsTarget>),
    /// Unblock the site via the browser's address bar or site settings.
    UnblockInBrowser,
    /// Close whatever application or tab is holding the device.
    ReleaseDevice,
    /// Nothing specific is known.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remediation {
    pub action: Action,
    pub retry: RetryStrategy,
}

impl Remediation {
    pub fn for_error(error: &ClassifiedError, runtime: RuntimeIdentity, os: OsIdentity) -> Self {
        let action = match error.kind {
            ErrorKind::SystemPermissionDenied => Action::OpenSystemSettings(settings_target(os)),
            ErrorKind::UserPermissionDenied => Action::UnblockInBrowser,
            ErrorKind::CouldNotStartVideoSource => Action::ReleaseDevice,
            ErrorKind::Generic => Action::None,
        };
        Self {
            action,
            retry: retry_strategy(runtime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mic_check_types::RawFailure;

    fn error(kind: ErrorKind) -> ClassifiedError {
        ClassifiedError::new(kind, RawFailure::new("NotAllowedError", ""))
    }

    #[test]
    fn system_denial_on_macos_links_to_privacy_settings() {
        let remediation = Remediation::for_error(
            &error(ErrorKind::SystemPermissionDenied),
            RuntimeIdentity::Chrome,
            OsIdentity::MacOs,
        );
        assert_eq!(
            remediation.action,
            Action::OpenSystemSettings(Some(MACOS_PRIVACY_SETTINGS))
        );
        assert_eq!(remediation.retry, RetryStrategy::Reprobe);
    }

    #[test]
    fn system_denial_elsewhere_has_no_deep_link() {
        let remediation = Remediation::for_error(
            &error(ErrorKind::SystemPermissionDenied),
            RuntimeIdentity::Firefox,
            OsIdentity::Windows,
        );
        assert_eq!(remediation.action, Action::OpenSystemSettings(None));
    }

    #[test]
    fn safari_retries_by_reloading() {
        let remediation = Remediation::for_error(
            &error(ErrorKind::UserPermissionDenied),
            RuntimeIdentity::Safari,
            OsIdentity::MacOs,
        );
        assert_eq!(remediation.action, Action::UnblockInBrowser);
        assert_eq!(remediation.retry, RetryStrategy::ReloadPage);
    }

    #[test]
    fn busy_device_and_generic() {
        assert_eq!(
            Remediation::for_error(
                &error(ErrorKind::CouldNotStartVideoSource),
                RuntimeIdentity::Edge,
                OsIdentity::Windows
            )
            .action,
            Action::ReleaseDevice
        );
        assert_eq!(
            Remediation::for_error(
                &error(ErrorKind::Generic),
                RuntimeIdentity::Other,
                OsIdentity::Linux
            )
            .action,
            Action::None
        );
    }
}
