use anyhow::Result;
use motif::singleton::{InstanceLimit, Singleton};
use std::io::Write;

/// Creates a holder against `limit`, shows that a second one is refused while it lives,
/// and that the slot comes back once it is dropped.
///
/// # Errors
/// Fails if the first holder cannot be created (another one is already alive elsewhere),
/// or if `out` cannot be written.
pub fn demonstrate(limit: &'static InstanceLimit, out: &mut impl Write) -> Result<()> {
    let mut holder = Singleton::with_limit(limit)?;
    writeln!(out, "Instance created. Instances: {}", limit.live())?;
    writeln!(out, "first = {}", holder.first())?;
    writeln!(out, "second = {}", holder.second())?;

    holder.set_first(1);
    holder.set_second(2);
    writeln!(out, "Updated: first = {}, second = {}", holder.first(), holder.second())?;

    match Singleton::with_limit(limit) {
        Ok(_) => writeln!(out, "Second instance created unexpectedly")?,
        Err(err) => writeln!(out, "Second instance refused: {err}")?,
    }

    drop(holder);
    writeln!(out, "Instance released. Instances: {}", limit.live())?;
    Ok(())
}
