use crate::error::{FactoryError, FactoryErrorExt};
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::fmt;
use tracing::{debug, trace};

/// A zero-argument construction rule.
type Rule<T> = Box<dyn Fn() -> Result<Box<T>, FactoryError> + Send + Sync>;

/// Maps discriminator strings to construction rules for one interface `T`.
///
/// Each [`Registry::create`] runs the matching rule once and hands the caller exclusive
/// ownership of the result; nothing is cached. Discriminators are unique and matched
/// exactly (case-sensitive).
///
/// The registry holds no locks. Once populated it can be shared read-only across threads,
/// since every rule is `Send + Sync`.
///
/// # Example
/// ```rust
/// use motif_factory::{Drivable, FactoryError, Registry, TownCar};
///
/// let mut registry: Registry<dyn Drivable> = Registry::new();
/// registry.register("TownCar", || -> Box<dyn Drivable> { Box::new(TownCar) })?;
///
/// let car = registry.create("TownCar")?;
/// assert_eq!(car.action(), "Driving a town car!");
/// assert!(registry.create("Limousine").unwrap_err().is_not_found());
/// # Ok::<(), FactoryError>(())
/// ```
pub struct Registry<T: ?Sized + 'static> {
    rules: FxHashMap<Cow<'static, str>, Rule<T>>,
}

impl<T: ?Sized + 'static> Default for Registry<T> {
    fn default() -> Self {
        Self { rules: FxHashMap::default() }
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("discriminators", &self.discriminators()).finish()
    }
}

impl<T: ?Sized + 'static> Registry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an infallible rule under `discriminator`.
    ///
    /// # Errors
    /// [`FactoryError::DuplicateDiscriminator`] if the name is taken; the registry is left
    /// unchanged.
    pub fn register<F>(
        &mut self,
        discriminator: impl Into<Cow<'static, str>>,
        rule: F,
    ) -> Result<&mut Self, FactoryError>
    where
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        self.register_fallible(discriminator, move || Ok(rule()))
    }

    /// Registers a rule that may fail to build its variant.
    ///
    /// Failures surface from [`Registry::create`] unchanged apart from added context,
    /// so they never look like [`FactoryError::NotFound`] unless the rule says so.
    ///
    /// # Errors
    /// [`FactoryError::DuplicateDiscriminator`] if the name is taken.
    pub fn register_fallible<F>(
        &mut self,
        discriminator: impl Into<Cow<'static, str>>,
        rule: F,
    ) -> Result<&mut Self, FactoryError>
    where
        F: Fn() -> Result<Box<T>, FactoryError> + Send + Sync + 'static,
    {
        match self.rules.entry(discriminator.into()) {
            Entry::Occupied(taken) => Err(FactoryError::DuplicateDiscriminator {
                discriminator: taken.key().to_string(),
                context: None,
            }),
            Entry::Vacant(slot) => {
                debug!(discriminator = %slot.key(), "Registered construction rule");
                slot.insert(Box::new(rule));
                Ok(self)
            },
        }
    }

    /// Builds a new variant for `discriminator`.
    ///
    /// # Errors
    /// * [`FactoryError::NotFound`] when no rule matches.
    /// * Whatever the rule itself reports (normally [`FactoryError::Construction`]),
    ///   with the discriminator added as context.
    pub fn create(&self, discriminator: &str) -> Result<Box<T>, FactoryError> {
        let Some(rule) = self.rules.get(discriminator) else {
            debug!(discriminator, "No construction rule registered");
            return Err(FactoryError::NotFound {
                discriminator: discriminator.to_owned(),
                context: None,
            });
        };

        trace!(discriminator, "Constructing variant");
        rule().context(format!("creating '{discriminator}'"))
    }

    #[must_use]
    pub fn contains(&self, discriminator: &str) -> bool {
        self.rules.contains_key(discriminator)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered discriminators in lexical order.
    #[must_use]
    pub fn discriminators(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(AsRef::as_ref).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Shape: fmt::Debug {
        fn sides(&self) -> u8;
    }

    #[derive(Debug)]
    struct Triangle;

    impl Shape for Triangle {
        fn sides(&self) -> u8 {
            3
        }
    }

    fn triangle() -> Box<dyn Shape> {
        Box::new(Triangle)
    }

    #[test]
    fn registered_rule_is_found() {
        let mut registry: Registry<dyn Shape> = Registry::new();
        registry.register("Triangle", triangle).unwrap();

        assert!(registry.contains("Triangle"));
        assert_eq!(registry.create("Triangle").unwrap().sides(), 3);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut registry: Registry<dyn Shape> = Registry::new();
        registry.register("Triangle", triangle).unwrap();

        let err = registry.create("triangle").unwrap_err();
        assert_eq!(
            err,
            FactoryError::NotFound { discriminator: "triangle".to_owned(), context: None }
        );
    }

    #[test]
    fn duplicate_keeps_the_first_rule() {
        let mut registry: Registry<dyn Shape> = Registry::new();
        registry.register("Triangle", triangle).unwrap();

        let err = registry
            .register_fallible("Triangle", || Err(FactoryError::construction("never used")))
            .unwrap_err();

        assert!(matches!(err, FactoryError::DuplicateDiscriminator { .. }));
        assert_eq!(registry.len(), 1);
        assert!(registry.create("Triangle").is_ok());
    }

    #[test]
    fn failing_rule_is_not_reported_as_not_found() {
        let mut registry: Registry<dyn Shape> = Registry::new();
        registry
            .register_fallible("Hexagon", || Err(FactoryError::construction("out of pencils")))
            .unwrap();

        let err = registry.create("Hexagon").unwrap_err();
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Construction failed (creating 'Hexagon'): out of pencils");
    }

    #[test]
    fn debug_lists_sorted_discriminators() {
        let mut registry: Registry<dyn Shape> = Registry::new();
        registry.register("b", triangle).unwrap().register("a", triangle).unwrap();

        assert_eq!(format!("{registry:?}"), r#"Registry { discriminators: ["a", "b"] }"#);
    }
}
