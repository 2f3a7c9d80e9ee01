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

//! JS entry points, shaped after the `mic-check` npm API.
//!
//! ```js
//! import { requestMediaPermissions } from "mic-check";
//!
//! requestMediaPermissions()
//!   .then(() => { /* granted */ })
//!   .catch((err) => {
//!     // err.type is one of SystemPermissionDenied, UserPermissionDenied,
//!     // CouldNotStartVideoSource, Generic
//!   });
//! ```

use gloo_utils::window;
use js_sys::{Promise, Reflect};
use mic_check_types::{ClassifiedError, MediaConstraints, RawFailure, RuntimeIdentity};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::detector::NavigatorDetector;
use super::host::WebMediaHost;
use crate::classifier::classify;
use crate::config::{PermissionsConfig, CONFIG_GLOBAL};
use crate::prober::PermissionProber;

impl PermissionsConfig {
    /// Reads `window.__MIC_CHECK_CONFIG`, using defaults when it is absent or
    /// malformed.
    pub fn from_window() -> Self {
        let value = Reflect::get(&window(), &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
            log::warn!("Failed to parse window.{CONFIG_GLOBAL}: {e:?}, using defaults");
            Self::default()
        })
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    let config = PermissionsConfig::from_window();
    // The embedding app may already own the logger.
    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("Logger already initialised");
    }
    log::info!("mic-check loaded");
}

fn prober(config: &PermissionsConfig) -> PermissionProber<WebMediaHost, NavigatorDetector> {
    PermissionProber::new(WebMediaHost, NavigatorDetector::new(config.browser_override.clone()))
}

fn error_to_js(error: &ClassifiedError) -> JsValue {
    serde_wasm_bindgen::to_value(error).unwrap_or_else(|e| {
        log::error!("Failed to convert permission error to JS: {e:?}");
        JsValue::from_str(&error.to_string())
    })
}

fn probe_promise(constraints: MediaConstraints, config: PermissionsConfig) -> Promise {
    future_to_promise(async move {
        prober(&config)
            .probe(Some(constraints))
            .await
            .map(|()| JsValue::TRUE)
            .map_err(|e| error_to_js(&e))
    })
}

/// Request camera and mic permissions from the browser.
///
/// `constraints` is a `MediaStreamConstraints` object; when omitted, the configured defaults
/// (audio and video unless overridden) are requested.
///
/// Resolves `true`, or rejects with `{ type, name, message }`.
#[wasm_bindgen(js_name = requestMediaPermissions)]
pub fn request_media_permissions(constraints: JsValue) -> Promise {
    let config = PermissionsConfig::from_window();
    if constraints.is_undefined() || constraints.is_null() {
        return probe_promise(config.default_constraints(), config);
    }
    // Anything else goes to getUserMedia verbatim, deviceId and all.
    future_to_promise(async move {
        log::debug!("Requesting media permissions with {constraints:?}");
        let prober = prober(&config);
        let outcome = prober.host().acquire_js(&constraints).await;
        prober
            .settle(outcome)
            .map(|()| JsValue::TRUE)
            .map_err(|e| error_to_js(&e))
    })
}

#[wasm_bindgen(js_name = requestAudioPermissions)]
pub fn request_audio_permissions() -> Promise {
    probe_promise(MediaConstraints::AUDIO_ONLY, PermissionsConfig::from_window())
}

#[wasm_bindgen(js_name = requestVideoPermissions)]
pub fn request_video_permissions() -> Promise {
    probe_promise(MediaConstraints::VIDEO_ONLY, PermissionsConfig::from_window())
}

/// Classifies an error from an app's own `getUserMedia` call.
///
/// `browser_name` is a user-agent parser name such as `"Chrome"` or
/// `"Microsoft Edge"`. Returns the error kind as a string.
#[wasm_bindgen(js_name = classifyMediaError)]
pub fn classify_media_error(name: String, message: Option<String>, browser_name: String) -> String {
    let raw = RawFailure::new(name, message.unwrap_or_default());
    classify(&raw, RuntimeIdentity::from_browser_name(&browser_name))
        .as_str()
        .to_string()
}
