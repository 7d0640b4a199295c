// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Javelin type lowering — IR types → JVM value kinds, widths, and sizes.
//!
//! Everything here is a pure function of a borrowed [`javelin_ir::Type`]
//! plus an optional `expand` flag. `expand` widens sub-32-bit integers to a
//! full 32-bit slot for calling-convention uniformity; layout queries leave
//! it off to keep exact storage widths.

mod classify;
mod descriptor;
mod errors;
mod layout;
mod width;

pub use classify::{ensure_supported, is_scalar, is_supported};
pub use descriptor::{
    jvm_kind, type_descriptor, type_name, type_postfix, type_prefix, JvmKind,
};
pub use errors::{LowerError, LowerResult};
pub use layout::{advance_offset, alloc_size};
pub use width::{bit_width, byte_width};
