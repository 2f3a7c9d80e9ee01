// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared stubs for the native integration tests: a scripted media host whose
// tracks count their stop() calls, and a detector that counts how often it is
// asked for the runtime.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use mic_check::{
    MediaConstraints, MediaHost, MediaTrack, RawFailure, RuntimeDetector, RuntimeIdentity,
};

pub struct StubTrack {
    kind: String,
    stops: Rc<Cell<u32>>,
}

impl MediaTrack for StubTrack {
    fn kind(&self) -> String {
        self.kind.clone()
    }

    fn stop(&self) {
        self.stops.set(self.stops.get() + 1);
    }
}

/// Grants the configured tracks or rejects with the configured failure.
pub struct StubHost {
    outcome: Result<Vec<&'static str>, RawFailure>,
    pub requests: RefCell<Vec<MediaConstraints>>,
    pub stop_counters: RefCell<Vec<Rc<Cell<u32>>>>,
}

impl StubHost {
    pub fn granting(kinds: &[&'static str]) -> Self {
        Self {
            outcome: Ok(kinds.to_vec()),
            requests: RefCell::new(Vec::new()),
            stop_counters: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting(identifier: &str, message: &str) -> Self {
        Self {
            outcome: Err(RawFailure::new(identifier, message)),
            requests: RefCell::new(Vec::new()),
            stop_counters: RefCell::new(Vec::new()),
        }
    }

    pub fn stop_counts(&self) -> Vec<u32> {
        self.stop_counters.borrow().iter().map(|c| c.get()).collect()
    }
}

impl MediaHost for StubHost {
    type Track = StubTrack;

    fn acquire(
        &self,
        constraints: MediaConstraints,
    ) -> LocalBoxFuture<'_, Result<Vec<StubTrack>, RawFailure>> {
        self.requests.borrow_mut().push(constraints);
        let outcome = self.outcome.clone().map(|kinds| {
            kinds
                .into_iter()
                .map(|kind| {
                    let stops = Rc::new(Cell::new(0));
                    self.stop_counters.borrow_mut().push(stops.clone());
                    StubTrack {
                        kind: kind.to_string(),
                        stops,
                    }
                })
                .collect()
        });
        async move { outcome }.boxed_local()
    }
}

/// Reports a fixed runtime and counts detections.
pub struct CountingDetector {
    runtime: RuntimeIdentity,
    pub calls: Cell<u32>,
}

impl CountingDetector {
    pub fn new(runtime: RuntimeIdentity) -> Self {
        Self {
            runtime,
            calls: Cell::new(0),
        }
    }
}

impl RuntimeDetector for CountingDetector {
    fn detect_runtime_identity(&self) -> RuntimeIdentity {
        self.calls.set(self.calls.get() + 1);
        self.runtime
    }
}
