// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! IR type → JVM kind translation.
//!
//! A kind is one of the eight JVM value categories. Pointers and aggregates
//! all collapse to `Long`: they travel as opaque 64-bit addresses into the
//! runtime heap.

use javelin_ir::Type;

use crate::errors::{LowerError, LowerResult};
use crate::width::bit_width;

/// The eight JVM value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JvmKind {
    Void,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl JvmKind {
    /// Java source name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            JvmKind::Void => "void",
            JvmKind::Boolean => "boolean",
            JvmKind::Byte => "byte",
            JvmKind::Short => "short",
            JvmKind::Int => "int",
            JvmKind::Long => "long",
            JvmKind::Float => "float",
            JvmKind::Double => "double",
        }
    }

    /// Single-letter descriptor used to build method and field signatures.
    pub fn descriptor(self) -> char {
        match self {
            JvmKind::Void => 'V',
            JvmKind::Boolean => 'Z',
            JvmKind::Byte => 'B',
            JvmKind::Short => 'S',
            JvmKind::Int => 'I',
            JvmKind::Long => 'J',
            JvmKind::Float => 'F',
            JvmKind::Double => 'D',
        }
    }

    /// Opcode-family prefix ("i" as in iload/iadd). A void value never
    /// reaches the operand stack, so void has no prefix.
    pub fn prefix(self) -> LowerResult<&'static str> {
        match self {
            JvmKind::Boolean | JvmKind::Byte => Ok("b"),
            JvmKind::Short => Ok("s"),
            JvmKind::Int => Ok("i"),
            JvmKind::Long => Ok("l"),
            JvmKind::Float => Ok("f"),
            JvmKind::Double => Ok("d"),
            JvmKind::Void => Err(LowerError::InvalidCategory {
                category: "void",
                query: "prefix",
            }),
        }
    }
}

/// Map an IR type to its JVM kind.
pub fn jvm_kind(ty: &Type, expand: bool) -> LowerResult<JvmKind> {
    match ty {
        Type::Void => Ok(JvmKind::Void),
        Type::Int(_) => Ok(match bit_width(ty, expand)? {
            1 => JvmKind::Boolean,
            8 => JvmKind::Byte,
            16 => JvmKind::Short,
            32 => JvmKind::Int,
            // bit_width admits nothing else for integers
            _ => JvmKind::Long,
        }),
        Type::Float => Ok(JvmKind::Float),
        Type::Double => Ok(JvmKind::Double),
        Type::Pointer(_) | Type::Array { .. } | Type::Vector { .. } | Type::Struct(_) => {
            Ok(JvmKind::Long)
        }
        other => Err(LowerError::Unrepresentable {
            category: other.category_name(),
        }),
    }
}

/// Java source name of the lowered type ("int", "long", ...).
pub fn type_name(ty: &Type, expand: bool) -> LowerResult<&'static str> {
    Ok(jvm_kind(ty, expand)?.name())
}

/// Signature descriptor letter of the lowered type.
pub fn type_descriptor(ty: &Type, expand: bool) -> LowerResult<char> {
    Ok(jvm_kind(ty, expand)?.descriptor())
}

/// Opcode-family prefix of the lowered type.
pub fn type_prefix(ty: &Type, expand: bool) -> LowerResult<&'static str> {
    jvm_kind(ty, expand)?.prefix()
}

/// Runtime-helper postfix. Unlike the kind, this keeps the raw integer
/// width: an i8 field loads through the `i8` helper even though it becomes
/// an `int` on the operand stack. Helper names key on these strings, so the
/// mapping is bit-exact.
pub fn type_postfix(ty: &Type, expand: bool) -> LowerResult<String> {
    match ty {
        Type::Void => Ok("void".to_string()),
        Type::Int(_) => Ok(format!("i{}", bit_width(ty, expand)?)),
        Type::Float => Ok("f32".to_string()),
        Type::Double => Ok("f64".to_string()),
        Type::Pointer(_) | Type::Array { .. } | Type::Vector { .. } | Type::Struct(_) => {
            Ok("i64".to_string())
        }
        other => Err(LowerError::Unrepresentable {
            category: other.category_name(),
        }),
    }
}
