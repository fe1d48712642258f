use crate::models::args::{CarArgs, PersonArgs};
use anyhow::Result;
use motif::builder::{Car, Person};
use std::io::Write;
use tracing::debug;

/// Configures a car from the given fields and prints its description.
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn build_car(args: CarArgs, out: &mut impl Write) -> Result<()> {
    let mut builder = Car::builder();

    if let Some(make) = args.make {
        builder = builder.make(make);
    }
    if let Some(model) = args.model {
        builder = builder.model(model);
    }
    if let Some(year) = args.year {
        builder = builder.year(year);
    }
    if let Some(color) = args.color {
        builder = builder.color(color);
    }

    let car = builder.build();
    debug!(?car, "Car configured");

    writeln!(out, "{car}")?;
    Ok(())
}

/// Configures a person in one chain; absent fields stay at their defaults.
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn build_person(args: PersonArgs, out: &mut impl Write) -> Result<()> {
    let person = Person::builder()
        .name(args.name.unwrap_or_default())
        .age(args.age.unwrap_or_default())
        .address(args.address.unwrap_or_default())
        .build();

    writeln!(out, "{person}")?;
    Ok(())
}
