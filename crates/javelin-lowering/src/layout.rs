// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Storage sizes and field offsets under the unpadded layout model.

use javelin_ir::Type;

use crate::errors::LowerResult;
use crate::width::byte_width;

/// Storage bytes a value of this type occupies.
///
/// Struct fields are summed in order with no alignment padding; the runtime
/// memory helpers address fields at these exact offsets, so padding must
/// not be introduced here without changing them in lockstep.
pub fn alloc_size(ty: &Type) -> LowerResult<u32> {
    match ty {
        Type::Struct(fields) => {
            let mut total = 0;
            for field in fields {
                total += alloc_size(field)?;
            }
            Ok(total)
        }
        Type::Array { elem, len } => Ok(alloc_size(elem)? * len),
        Type::Vector { elem, lanes } => Ok(alloc_size(elem)? * lanes),
        leaf => byte_width(leaf, false),
    }
}

/// Offset of the slot following a value of type `ty` placed at `offset`.
/// Offsets accumulate with no alignment rounding.
pub fn advance_offset(offset: u32, ty: &Type) -> LowerResult<u32> {
    Ok(offset + alloc_size(ty)?)
}
