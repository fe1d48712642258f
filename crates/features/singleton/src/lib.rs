//! # Singleton
//!
//! An instance-limited holder: at most [`GLOBAL_LIMIT`] [`Singleton`] values exist in the
//! process at any moment. Asking for one more is an ordinary error the caller can handle,
//! and dropping a holder frees its slot for the next one.
//!
//! ```rust
//! use motif_singleton::{Singleton, SingletonError};
//!
//! let mut first = Singleton::new()?;
//! first.set_first(42);
//!
//! assert!(matches!(Singleton::new(), Err(SingletonError::LimitExceeded { limit: 1, .. })));
//!
//! drop(first);
//! let again = Singleton::new()?;
//! assert_eq!(again.first(), 0);
//! # Ok::<(), SingletonError>(())
//! ```
//!
//! Other caps are built the same way from a `static` [`InstanceLimit`] and
//! [`Singleton::with_limit`].

mod error;
mod holder;
mod limit;

pub use crate::error::{SingletonError, SingletonErrorExt};
pub use crate::holder::{GLOBAL_LIMIT, Singleton};
pub use crate::limit::{InstanceGuard, InstanceLimit};
