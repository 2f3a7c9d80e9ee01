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

//! Seams to the host media subsystem.
//!
//! In the browser these are backed by `navigator.mediaDevices.getUserMedia`
//! (see the `web` module). Tests provide their own implementations.

use futures::future::LocalBoxFuture;
use mic_check_types::{MediaConstraints, RawFailure};

/// A live track handed out by the host.
pub trait MediaTrack {
    /// `"audio"` or `"video"`.
    fn kind(&self) -> String;

    /// Releases the underlying device.
    fn stop(&self);
}

/// A host capable of acquiring media tracks.
///
/// Futures are not `Send`: browser hosts live on the single JS thread.
pub trait MediaHost {
    type Track: MediaTrack;

    /// Issues exactly one acquisition request using `constraints` verbatim.
    /// The host decides whether a permission prompt is shown.
    fn acquire(
        &self,
        constraints: MediaConstraints,
    ) -> LocalBoxFuture<'_, Result<Vec<Self::Track>, RawFailure>>;
}
