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

use mic_check_types::{ClassifiedError, MediaConstraints, RawFailure};

use crate::classifier::classify_failure;
use crate::host::{MediaHost, MediaTrack};
use crate::runtime::RuntimeDetector;

/// Tests whether the host will grant camera and/or microphone access.
///
/// Each probe makes one acquisition request. Granted tracks are stopped before
/// the probe resolves; a probe never hands out a live stream. Failures are
/// classified against the runtime detected for that probe. Nothing is retried
/// and no state is shared between probes, so concurrent probes each raise
/// their own prompt.
pub struct PermissionProber<H, D> {
    host: H,
    detector: D,
}

impl<H: MediaHost, D: RuntimeDetector> PermissionProber<H, D> {
    pub fn new(host: H, detector: D) -> Self {
        Self { host, detector }
    }

    /// Probes with `constraints`, or audio and video when `None`.
    pub async fn probe(
        &self,
        constraints: Option<MediaConstraints>,
    ) -> Result<(), ClassifiedError> {
        let constraints = constraints.unwrap_or_default();
        log::debug!("Requesting media permissions with {constraints}");

        let outcome = self.host.acquire(constraints).await;
        self.settle(outcome)
    }

    /// Finishes a probe whose acquisition was issued directly against the
    /// host, e.g. with constraints the host understands but
    /// [`MediaConstraints`] cannot express. Granted tracks are stopped and
    /// failures classified exactly as in [`probe`](Self::probe).
    pub fn settle(
        &self,
        outcome: Result<Vec<H::Track>, RawFailure>,
    ) -> Result<(), ClassifiedError> {
        match outcome {
            Ok(tracks) => {
                release_tracks(&tracks);
                log::info!("Media permissions granted");
                Ok(())
            }
            Err(raw) => {
                let runtime = self.detector.detect_runtime_identity();
                let error = classify_failure(raw, runtime);
                log::warn!("Media permissions denied on {runtime}: {error}");
                Err(error)
            }
        }
    }

    pub async fn probe_audio_only(&self) -> Result<(), ClassifiedError> {
        self.probe(Some(MediaConstraints::AUDIO_ONLY)).await
    }

    pub async fn probe_video_only(&self) -> Result<(), ClassifiedError> {
        self.probe(Some(MediaConstraints::VIDEO_ONLY)).await
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }
}

fn release_tracks<T: MediaTrack>(tracks: &[T]) {
    for track in tracks {
        log::debug!("Stopping {} track acquired by permission probe", track.kind());
        track.stop();
    }
}
