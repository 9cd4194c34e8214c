use crate::constants::{KG_PER_TON, M_EARTH, M_SUN};
use crate::input::mass_errors::MassError;
use std::fmt;
use std::str::FromStr;

/// Units accepted on the mass prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Ton,
    Earth,
    Sun,
}

impl MassUnit {
    pub const ALL: [MassUnit; 5] = [
        MassUnit::Gram,
        MassUnit::Kilogram,
        MassUnit::Ton,
        MassUnit::Earth,
        MassUnit::Sun,
    ];

    /// Singular lowercase name; the plural adds a trailing `s`.
    pub fn name(&self) -> &'static str {
        match self {
            MassUnit::Gram => "gram",
            MassUnit::Kilogram => "kilogram",
            MassUnit::Ton => "ton",
            MassUnit::Earth => "earth",
            MassUnit::Sun => "sun",
        }
    }

    pub fn kg_per_unit(&self) -> f64 {
        self.to_kg(1.0)
    }

    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            MassUnit::Gram => value / 1000.0, // division keeps "1000 grams" at exactly 1 kg
            MassUnit::Kilogram => value,
            MassUnit::Ton => value * KG_PER_TON,
            MassUnit::Earth => value * M_EARTH,
            MassUnit::Sun => value * M_SUN,
        }
    }
}

impl FromStr for MassUnit {
    type Err = MassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let singular = lowered.strip_suffix('s').unwrap_or(&lowered);
        MassUnit::ALL
            .into_iter()
            .find(|unit| unit.name() == singular)
            .ok_or_else(|| MassError::UnrecognizedUnit(s.to_string()))
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}s", self.name())
    }
}

/// A black hole mass in kilograms. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Mass(f64);

impl Mass {
    pub fn from_kg(kg: f64) -> Result<Self, MassError> {
        if kg.is_finite() && kg > 0.0 {
            Ok(Self(kg))
        } else {
            Err(MassError::NonPhysicalMass(kg))
        }
    }

    pub fn from_value(value: f64, unit: MassUnit) -> Result<Self, MassError> {
        Self::from_kg(unit.to_kg(value))
    }

    pub fn kg(&self) -> f64 {
        self.0
    }
}
