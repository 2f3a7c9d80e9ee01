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

use gloo_utils::window;
use mic_check_types::{OsIdentity, RuntimeIdentity};

use crate::runtime::{RuntimeDetector, UserAgentDetector};

/// Detects the runtime from `navigator.userAgent`, read afresh on every call.
#[derive(Debug, Clone, Default)]
pub struct NavigatorDetector {
    browser_override: Option<String>,
}

impl NavigatorDetector {
    pub fn new(browser_override: Option<String>) -> Self {
        Self { browser_override }
    }

    fn current(&self) -> UserAgentDetector {
        let user_agent = window().navigator().user_agent().unwrap_or_else(|e| {
            log::warn!("Could not read user agent: {e:?}");
            String::new()
        });
        UserAgentDetector::new(user_agent).with_browser_override(self.browser_override.as_deref())
    }
}

impl RuntimeDetector for NavigatorDetector {
    fn detect_runtime_identity(&self) -> RuntimeIdentity {
        self.current().detect_runtime_identity()
    }

    fn detect_os(&self) -> OsIdentity {
        self.current().detect_os()
    }
}
