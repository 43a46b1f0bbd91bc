//! Resolver capability: the abstraction consumers resolve services through.
//!
//! The registry implements no service lookup of its own. A composition
//! routine builds a concrete [`ServiceResolver`] (how types map to
//! instances, whether they are cached or constructed per call, is entirely
//! the implementer's concern) and installs it in the registry; consumers
//! only ever see the typed accessor on the trait object.
//!
//! Implementation details:
//! - Key = [`TypeKey`]. We use `type_name::<T>()`, which works for
//!   `T = dyn Trait`.
//! - Entry = `Arc<T>` held behind `dyn Any` (downcast on read).
//! - Absence is `None`, never a panic and never an error.

use std::{any::Any, fmt, sync::Arc};

/// Stable key for a requested type, derived from the fully-qualified
/// `type_name::<T>()` so that trait objects can be requested too.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TypeKey(&'static str);

impl TypeKey {
    /// Key for the type `T` a consumer asks for.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(std::any::type_name::<T>())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Type-directed instance lookup.
///
/// Stateless contract with a single operation. Implementations must be safe
/// for concurrent reads once installed; the registry delegates that
/// guarantee to the implementation and does not enforce it.
pub trait ServiceResolver: Send + Sync {
    /// Look up the entry held for `key`.
    ///
    /// The returned reference must point at an `Arc<T>` where `T` is the
    /// type `key` was produced from; [`dyn ServiceResolver::get`] downcasts
    /// it back. `None` means the resolver has nothing for that type.
    fn lookup(&self, key: &TypeKey) -> Option<&(dyn Any + Send + Sync)>;
}

impl dyn ServiceResolver {
    /// Resolve an instance of `T`, or `None` when unavailable.
    ///
    /// `T` can be a trait object like `dyn my_module::contract::MyApi`.
    /// An entry stored under the right key but with the wrong concrete
    /// shape fails the downcast and degrades to `None`.
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let entry = self.lookup(&TypeKey::of::<T>())?;
        entry.downcast_ref::<Arc<T>>().map(Arc::clone)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct EnglishGreeter;
    impl Greeter for EnglishGreeter {
        fn greet(&self) -> String {
            "hello".into()
        }
    }

    /// Resolver holding exactly one entry.
    struct OneEntry {
        key: TypeKey,
        entry: Box<dyn Any + Send + Sync>,
    }

    impl ServiceResolver for OneEntry {
        fn lookup(&self, key: &TypeKey) -> Option<&(dyn Any + Send + Sync)> {
            (*key == self.key).then_some(self.entry.as_ref())
        }
    }

    #[test]
    fn type_key_debug_prints_the_type_name() {
        let key = TypeKey::of::<dyn Greeter>();
        assert!(
            format!("{key:?}").contains("Greeter"),
            "key should render the requested type name"
        );
    }

    #[test]
    fn type_key_distinguishes_types() {
        assert_eq!(TypeKey::of::<dyn Greeter>(), TypeKey::of::<dyn Greeter>());
        assert_ne!(TypeKey::of::<dyn Greeter>(), TypeKey::of::<String>());
    }

    #[test]
    fn typed_get_downcasts_the_stored_entry() {
        let resolver: Arc<dyn ServiceResolver> = Arc::new(OneEntry {
            key: TypeKey::of::<dyn Greeter>(),
            entry: Box::new(Arc::new(EnglishGreeter) as Arc<dyn Greeter>),
        });

        let greeter = resolver
            .get::<dyn Greeter>()
            .expect("entry was stored under this key");
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn typed_get_returns_none_for_unknown_type() {
        let resolver: Arc<dyn ServiceResolver> = Arc::new(OneEntry {
            key: TypeKey::of::<dyn Greeter>(),
            entry: Box::new(Arc::new(EnglishGreeter) as Arc<dyn Greeter>),
        });

        assert!(
            resolver.get::<String>().is_none(),
            "nothing was stored for String"
        );
    }

    #[test]
    fn typed_get_returns_none_when_the_entry_has_the_wrong_shape() {
        // Entry stored under the Greeter key but not as `Arc<dyn Greeter>`.
        let resolver: Arc<dyn ServiceResolver> = Arc::new(OneEntry {
            key: TypeKey::of::<dyn Greeter>(),
            entry: Box::new(EnglishGreeter),
        });

        assert!(
            resolver.get::<dyn Greeter>().is_none(),
            "a mis-shaped entry must fail the downcast, not panic"
        );
    }
}
