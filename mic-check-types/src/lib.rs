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

//! Shared data model for mic-check.
//!
//! These types carry no browser dependencies so they can be used by UI crates,
//! native tooling and tests alike.

pub mod constraints;
pub mod error;
pub mod runtime;

pub use constraints::MediaConstraints;
pub use error::{ClassifiedError, ErrorKind, RawFailure};
pub use runtime::{OsIdentity, RuntimeIdentity};
