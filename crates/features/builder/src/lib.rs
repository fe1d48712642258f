//! # Builder
//!
//! Entities whose fields are filled in step by step through a fluent configurator.
//!
//! Every entity here is declared with [`motif_derive::entity`], which provides:
//!
//! * `set_<field>` mutators and read accessors on the entity itself,
//! * `describe()` / `Display`: one `Label: value` line per field in declaration order,
//! * a `<Name>Builder` configurator whose setters chain by value.
//!
//! Fields never set keep their defaults (empty string, zero). Setting a field twice keeps
//! the last value, and the order of setter calls does not matter.
//!
//! ## Example
//!
//! ```rust
//! use motif_builder::Car;
//!
//! let car = Car::builder()
//!     .make("Toyota")
//!     .model("Camry")
//!     .year(2023)
//!     .color("Blue")
//!     .build();
//!
//! assert_eq!(
//!     car.describe(),
//!     "Car Details:\nMake: Toyota\nModel: Camry\nYear: 2023\nColor: Blue"
//! );
//! ```
//!
//! ## Single use
//!
//! `build` consumes the configurator. Touching it afterwards is a compile error rather
//! than a runtime surprise:
//!
//! ```rust,compile_fail
//! use motif_builder::Car;
//!
//! let builder = Car::builder().make("BMW");
//! let first = builder.build();
//! let second = builder.model("X6").build(); // use of moved value
//! ```
//!
//! To tweak a finished entity, reopen it explicitly:
//!
//! ```rust
//! use motif_builder::{Car, CarBuilder};
//!
//! let car = Car::builder().make("BMW").model("X6").build();
//! let repainted = CarBuilder::from(car.clone()).color("Black").build();
//! assert_eq!(repainted.make(), "BMW");
//! assert_eq!(car.color(), "");
//! ```

mod car;
mod person;

pub use car::{Car, CarBuilder};
pub use person::{Person, PersonBuilder};
