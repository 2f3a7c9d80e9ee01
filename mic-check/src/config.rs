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

//! Runtime configuration.
//!
//! In the browser the host page may define `window.__MIC_CHECK_CONFIG` before
//! the module loads; every key is optional.
//!
//! ```js
//! window.__MIC_CHECK_CONFIG = { defaultVideo: false, logLevel: "debug" };
//! ```

use anyhow::Context;
use log::Level;
use mic_check_types::MediaConstraints;
use serde::Deserialize;
use std::str::FromStr;

/// Name of the global the browser build reads its configuration from.
pub const CONFIG_GLOBAL: &str = "__MIC_CHECK_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionsConfig {
    /// Whether `probe(None)` asks for the microphone.
    pub default_audio: bool,
    /// Whether `probe(None)` asks for the camera.
    pub default_video: bool,
    pub log_level: String,
    /// Browser name to use instead of sniffing the user agent,
    /// e.g. `"Firefox"` or `"Microsoft Edge"`.
    pub browser_override: Option<String>,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            default_audio: true,
            default_video: true,
            log_level: "info".to_string(),
            browser_override: None,
        }
    }
}

impl PermissionsConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse mic-check configuration")
    }

    pub fn default_constraints(&self) -> MediaConstraints {
        MediaConstraints::new(self.default_audio, self.default_video)
    }

    /// Falls back to `Info` for unrecognised level names.
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or_else(|_| {
            log::warn!("Unknown log level '{}', using info", self.log_level);
            Level::Info
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = PermissionsConfig::from_json("{}").unwrap();
        assert_eq!(config, PermissionsConfig::default());
        assert_eq!(config.default_constraints(), MediaConstraints::default());
        assert_eq!(config.log_level(), Level::Info);
    }

    #[test]
    fn camel_case_keys() {
        let config = PermissionsConfig::from_json(
            r#"{
                "defaultAudio": true,
                "defaultVideo": false,
                "logLevel": "debug",
                "browserOverride": "Firefox"
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_constraints(), MediaConstraints::AUDIO_ONLY);
        assert_eq!(config.log_level(), Level::Debug);
        assert_eq!(config.browser_override.as_deref(), Some("Firefox"));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = PermissionsConfig::from_json(r#"{"logLevel": "chatty"}"#).unwrap();
        assert_eq!(config.log_level(), Level::Info);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = PermissionsConfig::from_json(r#"{"defaultAudio": "yes"}"#).unwrap_err();
        assert!(err.to_string().contains("mic-check configuration"));
    }
}
