//! Error types for registration and resolution.

use crate::resolver::TypeKey;

/// Why a registration attempt was rejected.
///
/// Both variants leave the registry exactly as it was: a failed
/// registration never clobbers an active one and never half-installs.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// The factory ran but produced no resolver.
    #[error("resolver factory produced no resolver")]
    NullResolver,

    /// A resolver is already registered. Replacement and stacking are not
    /// supported; remove the active registration first.
    #[error("a resolver is already registered")]
    AlreadyRegistered,
}

/// Why [`try_get`](crate::registry::ResolverRegistry::try_get) produced no
/// instance.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No resolver is registered at all.
    #[error("no resolver is registered: type={type_key:?}")]
    NoResolver {
        /// The type the caller asked for.
        type_key: TypeKey,
    },

    /// The active resolver has no instance for the requested type.
    #[error("resolver has no instance: type={type_key:?}")]
    NotFound {
        /// The type the caller asked for.
        type_key: TypeKey,
    },
}
