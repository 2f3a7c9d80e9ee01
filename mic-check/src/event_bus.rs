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

//! Global event bus for permission events.
//!
//! A broadcast channel: every subscriber sees every event emitted after it
//! subscribed.
//!
//! # Example
//!
//! ```ignore
//! use mic_check::{subscribe_permission_events, PermissionEvent};
//!
//! let mut rx = subscribe_permission_events();
//! wasm_bindgen_futures::spawn_local(async move {
//!     while let Ok(event) = rx.recv().await {
//!         if let PermissionEvent::Denied(error) = event {
//!             // pick a dialog based on error.kind
//!         }
//!     }
//! });
//! ```

use crate::events::PermissionEvent;
use async_broadcast::{broadcast, InactiveReceiver, Receiver, Sender};
use once_cell::sync::Lazy;
use std::ops::Deref;

/// Capacity of the event bus channel
pub const EVENT_BUS_CAPACITY: usize = 64;

struct EventBus {
    sender: Sender<PermissionEvent>,
    // Keeps the channel open while nobody is subscribed.
    _keepalive: InactiveReceiver<PermissionEvent>,
}

static BUS: Lazy<EventBus> = Lazy::new(|| {
    let (mut sender, receiver) = broadcast(EVENT_BUS_CAPACITY);
    sender.set_overflow(true);
    EventBus {
        sender,
        _keepalive: receiver.deactivate(),
    }
});

/// Get the global sender for emitting permission events.
pub fn global_permission_sender() -> Sender<PermissionEvent> {
    BUS.deref().sender.clone()
}

/// Subscribe to permission events.
///
/// Past events are not replayed.
pub fn subscribe_permission_events() -> Receiver<PermissionEvent> {
    BUS.deref().sender.new_receiver()
}

/// Emit a permission event to all subscribers.
///
/// Never blocks. When a subscriber falls `EVENT_BUS_CAPACITY` events behind,
/// the oldest event is dropped.
pub fn emit_permission_event(event: PermissionEvent) {
    if let Err(e) = BUS.deref().sender.try_broadcast(event) {
        log::debug!("Permission event not delivered: {e}");
    }
}
