//! # Factory
//!
//! Creates cars by name without the caller knowing their concrete types.
//!
//! Two ways in, depending on whether the variant set is fixed:
//!
//! * **Closed set**: [`CarKind`] enumerates the built-in cars and builds them by exhaustive
//!   match. Parsing a `CarKind` from a string is exact and case-sensitive.
//! * **Open set**: [`Registry`] maps discriminator strings to construction rules for any
//!   interface. Third parties add variants with [`Registry::register`] without touching
//!   lookup logic. [`car_registry`] returns one pre-populated with every [`CarKind`].
//!
//! Either way the caller receives a `Box<dyn Drivable>` it exclusively owns; dropping it
//! is all the cleanup there is.
//!
//! ## Example
//!
//! ```rust
//! use motif_factory::car_registry;
//!
//! let registry = car_registry();
//!
//! let mut out = Vec::new();
//! for name in ["RaceCar", "OffRoadCar", "TownCar"] {
//!     registry.create(name)?.drive(&mut out)?;
//! }
//! assert_eq!(
//!     String::from_utf8(out)?,
//!     "Driving a race car!\nDriving an off-road car!\nDriving a town car!\n"
//! );
//!
//! assert!(registry.create("Unknown").unwrap_err().is_not_found());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cars;
mod drivable;
mod error;
mod registry;

pub use crate::cars::{CarKind, OffRoadCar, RaceCar, TownCar};
pub use crate::drivable::Drivable;
pub use crate::error::{FactoryError, FactoryErrorExt};
pub use crate::registry::Registry;

use strum::IntoEnumIterator;

/// A registry holding one rule per [`CarKind`], keyed by the kind's name.
#[must_use]
pub fn car_registry() -> Registry<dyn Drivable> {
    let mut registry = Registry::new();
    for kind in CarKind::iter() {
        if let Err(err) = registry.register(kind.as_str(), move || kind.create()) {
            tracing::error!(%err, "Built-in car kinds must have distinct names");
        }
    }
    registry
}
