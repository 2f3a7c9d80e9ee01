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

use serde::{Deserialize, Serialize};

/// The browser engine that issued a permission request.
///
/// Chromium derivatives that do not announce themselves (Brave strips its
/// name from the user agent) report as [`RuntimeIdentity::Chrome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeIdentity {
    Chrome,
    Safari,
    Edge,
    Firefox,
    Other,
}

impl RuntimeIdentity {
    pub const ALL: [RuntimeIdentity; 5] = [
        RuntimeIdentity::Chrome,
        RuntimeIdentity::Safari,
        RuntimeIdentity::Edge,
        RuntimeIdentity::Firefox,
        RuntimeIdentity::Other,
    ];

    /// Maps a browser name, as produced by user-agent parsing, onto a runtime.
    pub fn from_browser_name(name: &str) -> Self {
        match name {
            "Chrome" | "Chromium" => RuntimeIdentity::Chrome,
            "Safari" => RuntimeIdentity::Safari,
            "Microsoft Edge" => RuntimeIdentity::Edge,
            "Firefox" => RuntimeIdentity::Firefox,
            _ => RuntimeIdentity::Other,
        }
    }
}

impl std::fmt::Display for RuntimeIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            RuntimeIdentity::Chrome => "Chrome",
            RuntimeIdentity::Safari => "Safari",
            RuntimeIdentity::Edge => "Edge",
            RuntimeIdentity::Firefox => "Firefox",
            RuntimeIdentity::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// Operating system hosting the browser. Only used to pick remediation hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsIdentity {
    MacOs,
    Windows,
    Linux,
    Ios,
    Android,
    Other,
}

impl std::fmt::Display for OsIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            OsIdentity::MacOs => "macOS",
            OsIdentity::Windows => "Windows",
            OsIdentity::Linux => "Linux",
            OsIdentity::Ios => "iOS",
            OsIdentity::Android => "Android",
            OsIdentity::Other => "Other",
        };
        write!(f, "{name}")
    }
}
