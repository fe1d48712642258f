//! # Factory Errors
//!
//! [`FactoryError`] keeps "nobody registered that name" apart from "the rule for that name
//! failed", so callers can fall back on the first and escalate the second.

use std::borrow::Cow;

#[motif_derive::motif_error]
#[derive(PartialEq, Eq)]
pub enum FactoryError {
    /// No construction rule is registered under the discriminator.
    ///
    /// An ordinary outcome of [`Registry::create`](crate::Registry::create); lookups are
    /// exact and case-sensitive.
    #[error("No variant registered under '{discriminator}'{}", format_context(.context))]
    NotFound { discriminator: String, context: Option<Cow<'static, str>> },

    /// [`Registry::register`](crate::Registry::register) was given a discriminator that
    /// already has a rule. The existing rule is kept.
    #[error("Discriminator '{discriminator}' is already registered{}", format_context(.context))]
    DuplicateDiscriminator { discriminator: String, context: Option<Cow<'static, str>> },

    /// A registered rule could not produce its variant (exhausted resource, bad state).
    #[error("Construction failed{}: {message}", format_context(.context))]
    Construction { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal factory error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl FactoryError {
    /// Shorthand for a [`FactoryError::Construction`] without context.
    pub fn construction(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Construction { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
