//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value; inventory records and SKUs follow this rule so that
/// derived data (flags, decorated labels) never writes back into its source.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Sku(String);
///
/// impl ValueObject for Sku {}
///
/// assert_eq!(Sku("CC-330".into()), Sku("CC-330".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
