//! Catalog of buildable species.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Every animal the library can build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    /// Eagle perched on a leafy branch.
    Eagle,
    /// Sitting cat with a curled tail.
    Cat,
    /// Rabbit on a mossy log.
    Rabbit,
    /// Two small eagles on separate branches.
    Twins,
    /// Sitting dog with floppy ears.
    Dog,
    /// Turtle with a domed shell.
    Turtle,
    /// Squirrel with a tall tail.
    Squirrel,
    /// Fish with fins and scales.
    Fish,
    /// Elephant with trunk and tusks.
    Elephant,
    /// Lion with a mane.
    Lion,
    /// Coiled snake.
    Snake,
    /// Sitting bear.
    Bear,
    /// Upright dinosaur with spines.
    Dinosaur,
}

impl Species {
    /// All species, in catalog order.
    pub const ALL: [Self; 13] = [
        Self::Eagle,
        Self::Cat,
        Self::Rabbit,
        Self::Twins,
        Self::Dog,
        Self::Turtle,
        Self::Squirrel,
        Self::Fish,
        Self::Elephant,
        Self::Lion,
        Self::Snake,
        Self::Bear,
        Self::Dinosaur,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eagle => "eagle",
            Self::Cat => "cat",
            Self::Rabbit => "rabbit",
            Self::Twins => "twins",
            Self::Dog => "dog",
            Self::Turtle => "turtle",
            Self::Squirrel => "squirrel",
            Self::Fish => "fish",
            Self::Elephant => "elephant",
            Self::Lion => "lion",
            Self::Snake => "snake",
            Self::Bear => "bear",
            Self::Dinosaur => "dinosaur",
        }
    }

    /// Position in [`Species::ALL`].
    #[must_use]
    pub const fn index(self) -> u64 {
        self as u64
    }

    /// Whether builds of this species consume random numbers.
    #[must_use]
    pub const fn uses_randomness(self) -> bool {
        matches!(self, Self::Eagle | Self::Rabbit | Self::Twins)
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for Species {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::UnknownSpecies(s.to_owned()))
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
