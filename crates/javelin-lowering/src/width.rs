// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Byte and bit widths of IR types on the JVM.
//!
//! Pointers and aggregates travel as 64-bit heap addresses, so all four
//! reference-like categories answer 8/64 unconditionally. Integer widths
//! follow the type exactly unless `expand` is set.

use javelin_ir::Type;

use crate::errors::{LowerError, LowerResult};

/// Validate an integer bit count against the widths the mapping knows.
/// Numba-generated bitcode truncates i64 to i63 in loop-range code, so 63
/// is folded into 64 instead of rejected.
fn canonical_int_bits(bits: u32, category: &'static str) -> LowerResult<u32> {
    match bits {
        1 | 8 | 16 | 32 | 64 => Ok(bits),
        63 => Ok(64),
        other => Err(LowerError::UnsupportedWidth {
            category,
            bits: other,
        }),
    }
}

/// Storage bytes of a value of this type: 1, 2, 4, or 8.
pub fn byte_width(ty: &Type, expand: bool) -> LowerResult<u32> {
    match ty {
        Type::Pointer(_) | Type::Array { .. } | Type::Vector { .. } | Type::Struct(_) => Ok(8),
        Type::Int(bits) => {
            let n = canonical_int_bits(*bits, ty.category_name())?;
            if expand && n <= 32 {
                Ok(4)
            } else if n == 1 {
                Ok(1)
            } else {
                Ok(n / 8)
            }
        }
        Type::Float => Ok(4),
        Type::Double => Ok(8),
        Type::Void => Err(LowerError::InvalidCategory {
            category: ty.category_name(),
            query: "byte width",
        }),
        other => Err(LowerError::Unrepresentable {
            category: other.category_name(),
        }),
    }
}

/// Bit width of a value of this type: 1, 8, 16, 32, or 64.
pub fn bit_width(ty: &Type, expand: bool) -> LowerResult<u32> {
    match ty {
        Type::Pointer(_) | Type::Array { .. } | Type::Vector { .. } | Type::Struct(_) => Ok(64),
        Type::Int(bits) => {
            let n = canonical_int_bits(*bits, ty.category_name())?;
            if expand && n < 32 {
                Ok(32)
            } else {
                Ok(n)
            }
        }
        Type::Float => Ok(32),
        Type::Double => Ok(64),
        Type::Void => Err(LowerError::InvalidCategory {
            category: ty.category_name(),
            query: "bit width",
        }),
        other => Err(LowerError::Unrepresentable {
            category: other.category_name(),
        }),
    }
}
