use anyhow::{Result, bail};
use motif::factory::{Drivable, Registry};
use std::io::Write;
use tracing::{debug, warn};

/// Creates every named car through `registry` and drives it.
///
/// Unknown names are reported on `out` and do not stop the remaining names.
///
/// # Errors
/// Fails after the last name if any name was unknown, immediately if a registered rule
/// fails, or if `out` cannot be written.
pub fn drive(
    registry: &Registry<dyn Drivable>,
    names: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let mut unknown = 0usize;

    for name in names {
        match registry.create(name) {
            Ok(car) => {
                debug!(kind = car.kind(), "Driving");
                car.drive(&mut *out)?;
            },
            Err(err) if err.is_not_found() => {
                warn!(%err, "Skipping unknown car");
                writeln!(out, "{err}")?;
                unknown += 1;
            },
            Err(err) => return Err(err.into()),
        }
    }

    if unknown > 0 {
        bail!("{unknown} of {} car name(s) not recognised", names.len());
    }
    Ok(())
}

/// Prints one registered discriminator per line, sorted.
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn list(registry: &Registry<dyn Drivable>, out: &mut impl Write) -> Result<()> {
    for name in registry.discriminators() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
