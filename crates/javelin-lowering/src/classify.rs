// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Structural validity of IR types on the JVM.

use javelin_ir::Type;

use crate::errors::{LowerError, LowerResult};

/// True for the scalar categories: fixed-width integers, float, double.
pub fn is_scalar(ty: &Type) -> bool {
    matches!(ty, Type::Int(_) | Type::Float | Type::Double)
}

fn is_aggregate(ty: &Type) -> bool {
    matches!(ty, Type::Struct(_) | Type::Array { .. } | Type::Vector { .. })
}

/// Whether a type's shape is expressible at all on the target.
///
/// Structs reject fields that point directly at an aggregate; exactly one
/// level of indirection is inspected, so a pointer-to-pointer field passes.
/// Array and vector elements must be scalar. Terminal categories always
/// pass — category-level rejection happens at lowering time, not here.
pub fn is_supported(ty: &Type) -> bool {
    match ty {
        Type::Struct(fields) => fields.iter().all(field_supported),
        Type::Array { elem, .. } | Type::Vector { elem, .. } => is_scalar(elem),
        _ => true,
    }
}

fn field_supported(field: &Type) -> bool {
    match field {
        Type::Pointer(pointee) => !is_aggregate(pointee),
        Type::Struct(_) | Type::Array { .. } | Type::Vector { .. } => is_supported(field),
        _ => true,
    }
}

/// [`is_supported`] as a failure: the pre-check for lowering entry points
/// that want an error value instead of a flag.
pub fn ensure_supported(ty: &Type) -> LowerResult<()> {
    if is_supported(ty) {
        Ok(())
    } else {
        Err(LowerError::UnsupportedStructure { ty: ty.to_string() })
    }
}
