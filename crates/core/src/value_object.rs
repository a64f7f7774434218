//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity. Two instances holding the same attributes
/// are interchangeable, so they are compared with `PartialEq` and copied
/// freely.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct QualityBounds {
///     min: i64,
///     max: i64,
/// }
///
/// impl ValueObject for QualityBounds {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
