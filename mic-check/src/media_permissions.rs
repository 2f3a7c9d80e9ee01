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

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use mic_check_types::{ClassifiedError, MediaConstraints};

use crate::event_bus::emit_permission_event;
use crate::events::PermissionEvent;
use crate::host::MediaHost;
use crate::prober::PermissionProber;
use crate::runtime::RuntimeDetector;

/// [MediaPermissions] is a utility to request the user's permission to access the microphone and
/// camera, and remember the outcome for the lifetime of the page.
///
/// Outcomes are reported three ways: the return value of [`request()`](Self::request), the
/// `on_granted` / `on_denied` callbacks, and the event bus:
/// - `PermissionEvent::Granted(constraints)` when permission is granted
/// - `PermissionEvent::Denied(error)` when permission is denied
///
/// Nothing is persisted; a new page load starts from "not granted".
pub struct MediaPermissions<H, D> {
    prober: PermissionProber<H, D>,
    audio_granted: AtomicBool,
    video_granted: AtomicBool,

    // Callback that is called when the user grants access permission
    pub on_granted: Rc<dyn Fn(MediaConstraints)>,

    // Callback that is called when access could not be obtained
    pub on_denied: Rc<dyn Fn(ClassifiedError)>,
}

impl<H: MediaHost, D: RuntimeDetector> MediaPermissions<H, D> {
    /// After construction, optionally set the callbacks, then call
    /// [`request()`](Self::request).
    pub fn new(prober: PermissionProber<H, D>) -> Self {
        Self {
            prober,
            audio_granted: AtomicBool::new(false),
            video_granted: AtomicBool::new(false),
            on_granted: Rc::new(|_| {}),
            on_denied: Rc::new(|_| {}),
        }
    }

    pub fn set_on_granted(&mut self, callback: Rc<dyn Fn(MediaConstraints)>) {
        self.on_granted = callback;
    }

    pub fn set_on_denied(&mut self, callback: Rc<dyn Fn(ClassifiedError)>) {
        self.on_denied = callback;
    }

    pub fn is_audio_granted(&self) -> bool {
        self.audio_granted.load(Ordering::Acquire)
    }

    pub fn is_video_granted(&self) -> bool {
        self.video_granted.load(Ordering::Acquire)
    }

    /// Returns true if both microphone and camera have been granted
    pub fn is_granted(&self) -> bool {
        self.is_audio_granted() && self.is_video_granted()
    }

    /// Causes the browser to request the user's permission for `constraints` (audio and video
    /// when `None`).
    ///
    /// A denial clears the flags of every kind that was requested: the host does not say which
    /// device was refused.
    pub async fn request(
        &self,
        constraints: Option<MediaConstraints>,
    ) -> Result<(), ClassifiedError> {
        let constraints = constraints.unwrap_or_default();
        let result = self.prober.probe(Some(constraints)).await;

        let granted = result.is_ok();
        if constraints.audio {
            self.audio_granted.store(granted, Ordering::Release);
        }
        if constraints.video {
            self.video_granted.store(granted, Ordering::Release);
        }

        match &result {
            Ok(()) => {
                emit_permission_event(PermissionEvent::Granted(constraints));
                (self.on_granted)(constraints);
            }
            Err(error) => {
                emit_permission_event(PermissionEvent::Denied(error.clone()));
                (self.on_denied)(error.clone());
            }
        }
        result
    }

    pub async fn request_audio(&self) -> Result<(), ClassifiedError> {
        self.request(Some(MediaConstraints::AUDIO_ONLY)).await
    }

    pub async fn request_video(&self) -> Result<(), ClassifiedError> {
        self.request(Some(MediaConstraints::VIDEO_ONLY)).await
    }

    pub fn prober(&self) -> &PermissionProber<H, D> {
        &self.prober
    }
}
