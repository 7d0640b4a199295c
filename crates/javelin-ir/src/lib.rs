// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Javelin IR — the structural type model the JVM backend lowers.
//!
//! The module loader owns and constructs these nodes; backend crates only
//! borrow them for inspection.

mod types;

pub use types::Type;
