//! Process-wide resolver registration point.
//!
//! This crate exists for environments where objects are instantiated by a
//! host framework and constructor injection is unavailable: consumers need
//! a way to obtain a service-resolution object without receiving it through
//! a constructor. The whole crate is that one indirection primitive.
//!
//! Design goals:
//! - A composition routine registers exactly one [`ServiceResolver`] at
//!   startup and removes it at shutdown.
//! - Consumers fetch instances by *type* (including trait objects) through
//!   [`ResolverRegistry::get`] / [`ResolverRegistry::try_get`] at any point
//!   in between; absence is `None`/`Err`, never a panic.
//! - Removal is authorized by the identity of the factory handle used to
//!   register — code that never held it cannot evict the resolver.
//! - No service lookup logic lives here: resolvers are supplied externally
//!   and their internals are entirely their own concern.
//!
//! ```
//! use resolver_hub::{ResolverFactory, ResolverRegistry, ServiceResolver, TypeKey};
//! use std::any::Any;
//! use std::sync::Arc;
//!
//! // The concrete resolver normally lives in the composition crate.
//! struct StaticResolver {
//!     key: TypeKey,
//!     entry: Box<dyn Any + Send + Sync>,
//! }
//!
//! impl ServiceResolver for StaticResolver {
//!     fn lookup(&self, key: &TypeKey) -> Option<&(dyn Any + Send + Sync)> {
//!         (*key == self.key).then_some(self.entry.as_ref())
//!     }
//! }
//!
//! struct Motd(&'static str);
//!
//! let registry = ResolverRegistry::new();
//! let factory: ResolverFactory = Arc::new(|| {
//!     Some(Arc::new(StaticResolver {
//!         key: TypeKey::of::<Motd>(),
//!         entry: Box::new(Arc::new(Motd("welcome"))),
//!     }) as Arc<dyn ServiceResolver>)
//! });
//!
//! registry.register(Arc::clone(&factory)).expect("registry starts empty");
//! let motd = registry.get::<Motd>().expect("registered above");
//! assert_eq!(motd.0, "welcome");
//!
//! registry.remove(&factory);
//! assert!(registry.get::<Motd>().is_none());
//! ```
//!
//! Long-lived processes use the [`registry::global()`] instance instead of
//! an owned one; tests stick to owned registries so no state leaks between
//! them.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod registry;
pub mod resolver;

// Re-export commonly used types
pub use error::{RegisterError, ResolveError};
pub use registry::{ResolverFactory, ResolverRegistry, global};
pub use resolver::{ServiceResolver, TypeKey};
