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

/// Shape of a capability request: which kinds of media to ask the host for.
///
/// Nothing stops both fields from being `false`; such a request is
/// meaningless and the host will usually reject it with a `TypeError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaConstraints {
    pub audio: bool,
    pub video: bool,
}

impl MediaConstraints {
    /// Microphone only.
    pub const AUDIO_ONLY: Self = Self {
        audio: true,
        video: false,
    };

    /// Camera only.
    pub const VIDEO_ONLY: Self = Self {
        audio: false,
        video: true,
    };

    pub fn new(audio: bool, video: bool) -> Self {
        Self { audio, video }
    }
}

/// Both microphone and camera.
impl Default for MediaConstraints {
    fn default() -> Self {
        Self {
            audio: true,
            video: true,
        }
    }
}

impl std::fmt::Display for MediaConstraints {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{audio: {}, video: {}}}", self.audio, self.video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requests_both_devices() {
        assert_eq!(MediaConstraints::default(), MediaConstraints::new(true, true));
    }

    #[test]
    fn narrowed_constraints() {
        assert_eq!(MediaConstraints::AUDIO_ONLY, MediaConstraints::new(true, false));
        assert_eq!(MediaConstraints::VIDEO_ONLY, MediaConstraints::new(false, true));
    }

    #[test]
    fn display_matches_js_object_shape() {
        assert_eq!(
            MediaConstraints::AUDIO_ONLY.to_string(),
            "{audio: true, video: false}"
        );
    }
}
