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

//! Browser implementations of the host seams, plus the JS-facing API.
//!
//! Compiled with the `wasm` feature.

mod bindings;
mod detector;
mod host;

pub use bindings::{
    classify_media_error, request_audio_permissions, request_media_permissions,
    request_video_permissions, start,
};
pub use detector::NavigatorDetector;
pub use host::{raw_failure_from_js, WebMediaHost, WebTrack, NOT_SUPPORTED_ERROR};
