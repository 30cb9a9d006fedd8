//! Compile-time forcing wrapper
//!
//! This module pins a computed value into a type so that its evaluation
//! cannot be deferred past translation.

/// Carrier type that forces its argument to be evaluated at compile time.
///
/// A const generic argument must be fully evaluated during translation, so
/// `ForceConst::<{ expr }>::VALUE` is guaranteed to be a literal, usable
/// for array lengths, const parameters, and any other context that needs
/// one. Each distinct input value is a distinct type; two mentions with
/// equal values name the same type and are interchangeable.
pub struct ForceConst<const V: u32>;

impl<const V: u32> ForceConst<V> {
    /// The forced value.
    pub const VALUE: u32 = V;
}
