// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lowering error types.

/// A fatal lowering failure.
///
/// Every variant is unrecoverable for the current compilation unit: the
/// answer is a static property of the input type, so retrying cannot change
/// it. The driver renders these and fails the unit; nothing in this crate
/// prints or aborts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// An integer bit width outside {1, 8, 16, 32, 63, 64}.
    #[error("unsupported {category} width: {bits} bits")]
    UnsupportedWidth { category: &'static str, bits: u32 },

    /// A composite shape with no JVM representation (pointer-to-aggregate
    /// field, or a sequence of non-scalar elements).
    #[error("unsupported structure: {ty}")]
    UnsupportedStructure { ty: String },

    /// A query with no defined answer for this category, such as the
    /// opcode prefix of void.
    #[error("{category} type has no {query}")]
    InvalidCategory {
        category: &'static str,
        query: &'static str,
    },

    /// A category the target value model has no case for at all.
    #[error("{category} type cannot be represented on the JVM")]
    Unrepresentable { category: &'static str },
}

pub type LowerResult<T> = Result<T, LowerError>;
