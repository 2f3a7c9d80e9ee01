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

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_utils::window;
use js_sys::Reflect;
use mic_check_types::{MediaConstraints, RawFailure};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, MediaDevices, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::host::{MediaHost, MediaTrack};

/// Identifier reported when the page has no `navigator.mediaDevices`
/// (insecure context or very old browser).
pub const NOT_SUPPORTED_ERROR: &str = "NotSupportedError";

/// A track returned by `getUserMedia`.
pub struct WebTrack(pub MediaStreamTrack);

impl MediaTrack for WebTrack {
    fn kind(&self) -> String {
        self.0.kind()
    }

    fn stop(&self) {
        self.0.stop();
    }
}

/// [`MediaHost`] backed by `navigator.mediaDevices.getUserMedia`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMediaHost;

impl WebMediaHost {
    /// Calls `getUserMedia` with a caller-supplied constraints object, passed
    /// through untouched so track constraints such as `deviceId` reach the
    /// browser.
    pub async fn acquire_js(&self, constraints: &JsValue) -> Result<Vec<WebTrack>, RawFailure> {
        Self::get_user_media(constraints.unchecked_ref()).await
    }

    async fn get_user_media(
        constraints: &MediaStreamConstraints,
    ) -> Result<Vec<WebTrack>, RawFailure> {
        let media_devices = media_devices()?;

        // getUserMedia throws synchronously for malformed constraints
        let promise = media_devices
            .get_user_media_with_constraints(constraints)
            .map_err(|e| raw_failure_from_js(&e))?;

        let stream: MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| raw_failure_from_js(&e))?
            .unchecked_into();

        Ok(stream
            .get_tracks()
            .iter()
            .map(|track| WebTrack(track.unchecked_into::<MediaStreamTrack>()))
            .collect())
    }

    async fn get_user_media_with_flags(
        constraints: MediaConstraints,
    ) -> Result<Vec<WebTrack>, RawFailure> {
        let js_constraints = MediaStreamConstraints::new();
        js_constraints.set_audio(&JsValue::from_bool(constraints.audio));
        js_constraints.set_video(&JsValue::from_bool(constraints.video));
        Self::get_user_media(&js_constraints).await
    }
}

/// `navigator.mediaDevices` is absent outside secure contexts. The web-sys
/// getter hands back `undefined` rather than an error in that case.
fn media_devices() -> Result<MediaDevices, RawFailure> {
    let navigator = window().navigator();
    match Reflect::get(&navigator, &JsValue::from_str("mediaDevices")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => Ok(value.unchecked_into()),
        Ok(_) => Err(RawFailure::new(
            NOT_SUPPORTED_ERROR,
            "navigator.mediaDevices is not available",
        )),
        Err(e) => Err(RawFailure::new(NOT_SUPPORTED_ERROR, raw_failure_from_js(&e).message)),
    }
}

impl MediaHost for WebMediaHost {
    type Track = WebTrack;

    fn acquire(
        &self,
        constraints: MediaConstraints,
    ) -> LocalBoxFuture<'_, Result<Vec<Self::Track>, RawFailure>> {
        Self::get_user_media_with_flags(constraints).boxed_local()
    }
}

/// Reads `name` and `message` off a rejection value.
///
/// Browsers normally reject with a `DOMException`, but polyfills and
/// extensions have been seen rejecting with plain objects or strings.
pub fn raw_failure_from_js(value: &JsValue) -> RawFailure {
    if let Some(exception) = value.dyn_ref::<DomException>() {
        return RawFailure::new(exception.name(), exception.message());
    }
    if let Some(text) = value.as_string() {
        return RawFailure::new("", text);
    }
    let field = |key: &str| {
        Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    RawFailure::new(field("name"), field("message"))
}
