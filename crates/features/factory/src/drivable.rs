use std::borrow::Cow;
use std::fmt::Debug;
use std::io::{self, Write};

/// The capability every car variant shares.
///
/// Implementors only provide their discriminator and the text of their action;
/// [`Drivable::drive`] writes that text to any output stream.
pub trait Drivable: Debug + Send + Sync {
    /// The name this variant is registered under.
    fn kind(&self) -> &'static str;

    /// What driving this variant looks like.
    fn action(&self) -> Cow<'static, str>;

    /// Performs the characteristic action by writing one line to `out`.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.action())
    }
}
