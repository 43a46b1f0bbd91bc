//! Process-wide registry holding at most one active resolver.
//!
//! Design goals:
//! - A composition routine registers one resolver at startup and removes it
//!   at shutdown; arbitrary consumer code resolves through it in between.
//! - Consumers never receive the resolver through a constructor — they ask
//!   the registry, which is what makes this usable under host frameworks
//!   that instantiate objects themselves.
//! - Removal is gated on the identity of the factory handle used to
//!   register, so code that never held that handle cannot evict an active
//!   resolver.
//!
//! Typical flows:
//! - Startup: build a [`ResolverFactory`], keep a clone, pass it to
//!   [`ResolverRegistry::register`] on [`global()`].
//! - Steady state: consumers call [`ResolverRegistry::get`] /
//!   [`ResolverRegistry::try_get`] from any thread.
//! - Shutdown: pass the retained handle to [`ResolverRegistry::remove`].
//! - Tests: construct owned [`ResolverRegistry`] values; the global is
//!   never reset.
//!
//! Implementation details:
//! - One slot behind a `parking_lot::RwLock`; reads take the read lock,
//!   register/remove the write lock. Every operation is synchronous and
//!   returns without suspending or blocking on anything but the lock.
//! - The factory is invoked exactly once, at registration. It is retained
//!   afterwards only so `Arc::ptr_eq` can authorize removal.

use crate::error::{RegisterError, ResolveError};
use crate::resolver::{ServiceResolver, TypeKey};
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

/// Zero-argument constructor for a resolver.
///
/// The `Arc` is both the callable and the identity token: keep a clone of
/// the exact handle passed to [`ResolverRegistry::register`], because only
/// that handle authorizes [`ResolverRegistry::remove`].
pub type ResolverFactory = Arc<dyn Fn() -> Option<Arc<dyn ServiceResolver>> + Send + Sync>;

/// The one active registration: resolver plus the factory that produced it.
/// The factory is kept for identity comparison only and is never invoked
/// again.
struct Registration {
    resolver: Arc<dyn ServiceResolver>,
    factory: ResolverFactory,
}

/// Single indirection point between consumers and one active resolver.
///
/// Two states only: empty and populated. [`register`](Self::register) is
/// the one transition in, a matching [`remove`](Self::remove) the one
/// transition out; everything else is a pure read valid in either state.
pub struct ResolverRegistry {
    slot: RwLock<Option<Registration>>,
}

impl ResolverRegistry {
    /// Create an empty, owned registry. Tests use this instead of
    /// [`global()`].
    #[inline]
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Install the resolver produced by `factory`.
    ///
    /// The factory is invoked exactly once, immediately. On success both
    /// the resolver and the factory handle are stored; the handle is only
    /// ever compared, not called, from then on.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::NullResolver`] when the factory produces `None`;
    ///   the registry stays empty.
    /// - [`RegisterError::AlreadyRegistered`] when a resolver is active;
    ///   the existing registration is left untouched.
    pub fn register(&self, factory: ResolverFactory) -> Result<(), RegisterError> {
        let resolver = factory().ok_or(RegisterError::NullResolver)?;

        let mut slot = self.slot.write();
        if slot.is_some() {
            return Err(RegisterError::AlreadyRegistered);
        }
        *slot = Some(Registration { resolver, factory });
        tracing::debug!("resolver registered");
        Ok(())
    }

    /// Clear the registration installed with `factory`.
    ///
    /// Pointer identity gates the removal: if `factory` is not the exact
    /// handle passed to [`register`](Self::register), the call is a silent
    /// no-op. That silence is deliberate — unauthorized removal must not
    /// be observable, let alone effective.
    pub fn remove(&self, factory: &ResolverFactory) {
        let mut slot = self.slot.write();
        match slot.as_ref() {
            Some(active) if Arc::ptr_eq(&active.factory, factory) => {
                *slot = None;
                tracing::debug!("resolver removed");
            }
            _ => {
                tracing::trace!("removal ignored: no matching registration");
            }
        }
    }

    /// Resolve an instance of `T` through the active resolver.
    ///
    /// Returns the resolver's answer unchanged; `None` when no resolver is
    /// registered. Absence is never an error here.
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let slot = self.slot.read();
        let active = slot.as_ref()?;
        active.resolver.get::<T>()
    }

    /// Resolve an instance of `T`, reporting why when it cannot.
    ///
    /// Succeeds exactly when a non-null instance was obtained.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NoResolver`] when nothing is registered.
    /// - [`ResolveError::NotFound`] when the active resolver has no
    ///   instance for `T`.
    pub fn try_get<T>(&self) -> Result<Arc<T>, ResolveError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let slot = self.slot.read();
        let Some(active) = slot.as_ref() else {
            return Err(ResolveError::NoResolver {
                type_key: TypeKey::of::<T>(),
            });
        };
        active.resolver.get::<T>().ok_or(ResolveError::NotFound {
            type_key: TypeKey::of::<T>(),
        })
    }

    /// True while a registration is active.
    #[inline]
    pub fn is_registered(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: LazyLock<ResolverRegistry> = LazyLock::new(ResolverRegistry::new);

/// The process-wide registry instance.
///
/// Composition code registers here once at startup and removes once at
/// shutdown. Consumers may resolve through it from any thread in between.
#[inline]
pub fn global() -> &'static ResolverRegistry {
    &GLOBAL
}
