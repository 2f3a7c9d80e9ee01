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

//! Framework-agnostic permission events.
//!
//! These events are emitted via the event bus and can be subscribed to by any
//! frontend framework (Yew, Dioxus, Leptos, React via wasm-bindgen, etc.)

use mic_check_types::{ClassifiedError, MediaConstraints};

/// Outcome of a permission request made through [`MediaPermissions`](crate::MediaPermissions).
#[derive(Clone, Debug, PartialEq)]
pub enum PermissionEvent {
    /// Access was granted for the given constraints
    Granted(MediaConstraints),

    /// Access was denied; UI layers switch on the error kind
    Denied(ClassifiedError),
}
