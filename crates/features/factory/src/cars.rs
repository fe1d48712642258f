use crate::drivable::Drivable;
use std::borrow::Cow;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The built-in car variants, as a closed set.
///
/// Parsing is exact and case-sensitive: `"RaceCar".parse::<CarKind>()` succeeds,
/// `"racecar"` does not.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum CarKind {
    RaceCar,
    OffRoadCar,
    TownCar,
}

impl CarKind {
    /// Builds a fresh, owned instance of this variant.
    #[must_use]
    pub fn create(self) -> Box<dyn Drivable> {
        match self {
            Self::RaceCar => Box::new(RaceCar),
            Self::OffRoadCar => Box::new(OffRoadCar),
            Self::TownCar => Box::new(TownCar),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaceCar;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffRoadCar;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TownCar;

impl Drivable for RaceCar {
    fn kind(&self) -> &'static str {
        CarKind::RaceCar.as_str()
    }

    fn action(&self) -> Cow<'static, str> {
        Cow::Borrowed("Driving a race car!")
    }
}

impl Drivable for OffRoadCar {
    fn kind(&self) -> &'static str {
        CarKind::OffRoadCar.as_str()
    }

    fn action(&self) -> Cow<'static, str> {
        Cow::Borrowed("Driving an off-road car!")
    }
}

impl Drivable for TownCar {
    fn kind(&self) -> &'static str {
        CarKind::TownCar.as_str()
    }

    fn action(&self) -> Cow<'static, str> {
        Cow::Borrowed("Driving a town car!")
    }
}
