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

//! Browser and OS detection.
//!
//! Classification is keyed on the requesting browser engine, so every probe
//! asks a [`RuntimeDetector`] which engine it is running in. The browser build
//! sniffs `navigator.userAgent`; tests and configuration overrides use
//! [`FixedRuntime`].

use mic_check_types::{OsIdentity, RuntimeIdentity};

/// Source of the [`RuntimeIdentity`] used to pick a classification bucket.
pub trait RuntimeDetector {
    fn detect_runtime_identity(&self) -> RuntimeIdentity;

    fn detect_os(&self) -> OsIdentity {
        OsIdentity::Other
    }
}

/// Returns the browser name for a user agent string, or `""` if unknown.
///
/// Order matters: Edge, Opera, Samsung Internet and the other Chromium
/// derivatives all carry `Chrome/` and `Safari/` tokens, and Chrome carries
/// `Safari/`. Derivatives that name themselves are reported under their own
/// name so their failures are not read with Chrome's strings.
pub fn parse_browser_name(user_agent: &str) -> &'static str {
    let ua = user_agent.to_lowercase();
    let has = |token: &str| ua.contains(token);

    if has("edg/") || has("edge/") || has("edga/") || has("edgios/") {
        "Microsoft Edge"
    } else if has("opr/") || has("opera") {
        "Opera"
    } else if has("samsungbrowser/") {
        "Samsung Internet for Android"
    } else if has("vivaldi/") {
        "Vivaldi"
    } else if has("yabrowser/") {
        "Yandex Browser"
    } else if has("whale/") {
        "NAVER Whale Browser"
    } else if has("ucbrowser/") {
        "UC Browser"
    } else if has("firefox/") || has("fxios/") {
        "Firefox"
    } else if has("chromium/") {
        "Chromium"
    } else if has("chrome/") || has("crios/") {
        "Chrome"
    } else if has("safari/") {
        "Safari"
    } else {
        ""
    }
}

pub fn parse_os(user_agent: &str) -> OsIdentity {
    let ua = user_agent.to_lowercase();

    // iPadOS and iOS announce "like Mac OS X"; Android announces "Linux".
    if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
        OsIdentity::Ios
    } else if ua.contains("android") {
        OsIdentity::Android
    } else if ua.contains("windows") {
        OsIdentity::Windows
    } else if ua.contains("mac os x") || ua.contains("macintosh") {
        OsIdentity::MacOs
    } else if ua.contains("linux") {
        OsIdentity::Linux
    } else {
        OsIdentity::Other
    }
}

/// Detects the runtime from a user agent string.
#[derive(Debug, Clone, Default)]
pub struct UserAgentDetector {
    user_agent: String,
    browser_override: Option<RuntimeIdentity>,
}

impl UserAgentDetector {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            browser_override: None,
        }
    }

    /// Forces the runtime to the one named by `browser_name`, skipping UA
    /// sniffing. `None` keeps sniffing.
    pub fn with_browser_override(mut self, browser_name: Option<&str>) -> Self {
        self.browser_override = browser_name.map(RuntimeIdentity::from_browser_name);
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl RuntimeDetector for UserAgentDetector {
    fn detect_runtime_identity(&self) -> RuntimeIdentity {
        if let Some(runtime) = self.browser_override {
            log::debug!("Runtime detection: override in effect, runtime={runtime}");
            return runtime;
        }
        let browser_name = parse_browser_name(&self.user_agent);
        let runtime = RuntimeIdentity::from_browser_name(browser_name);
        log::debug!(
            "Runtime detection: UA='{}', browser='{browser_name}', runtime={runtime}",
            self.user_agent
        );
        runtime
    }

    fn detect_os(&self) -> OsIdentity {
        parse_os(&self.user_agent)
    }
}

/// A detector that always reports the same runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRuntime {
    pub runtime: RuntimeIdentity,
    pub os: OsIdentity,
}

impl FixedRuntime {
    pub fn new(runtime: RuntimeIdentity) -> Self {
        Self {
            runtime,
            os: OsIdentity::Other,
        }
    }

    pub fn with_os(mut self, os: OsIdentity) -> Self {
        self.os = os;
        self
    }
}

impl RuntimeDetector for FixedRuntime {
    fn detect_runtime_identity(&self) -> RuntimeIdentity {
        self.runtime
    }

    fn detect_os(&self) -> OsIdentity {
        self.os
    }
}
