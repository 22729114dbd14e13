//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A `Money` of
/// `$2` equals every other `Money` of `$2`; a `Query` is fully described by
/// its four fields. To "modify" one, build a new value (the UI layer does this
/// for every interaction).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     minor_units: u64,
///     currency: char,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
