//! Facade crate for the `motif` feature crates and shared modules.
//! Keep this crate thin: it should compose other crates, not implement behaviour.
//!
//! ## Usage
//! - Add `motif` with the desired feature flags (`builder`, `factory`, `singleton`; all on
//!   by default).
//! - [`features::ENABLED`] lists what was compiled in; the shell logs it at startup.

pub use motif_kernel as kernel;

#[cfg(feature = "builder")]
pub use motif_builder as builder;
#[cfg(feature = "factory")]
pub use motif_factory as factory;
#[cfg(feature = "singleton")]
pub use motif_singleton as singleton;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "builder")]
        "builder",
        #[cfg(feature = "factory")]
        "factory",
        #[cfg(feature = "singleton")]
        "singleton",
    ];
}
