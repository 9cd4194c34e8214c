use super::scientific::custom_scientific_notation;
use crate::constants::LIGHT_YEAR;
use std::fmt;

/// Display unit chosen for a Schwarzschild radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthScale {
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    LightYears,
    /// Radii of a light year and beyond stay in plain meters.
    MetersUnscaled,
}

impl LengthScale {
    /// Picks the scale for a length in meters. Each lower bound is inclusive.
    pub fn select(meters: f64) -> Self {
        if meters < 1e-3 {
            LengthScale::Millimeters
        } else if meters < 1.0 {
            LengthScale::Centimeters
        } else if meters < 1e3 {
            LengthScale::Meters
        } else if meters < 1e6 {
            LengthScale::Kilometers
        } else if meters < LIGHT_YEAR {
            LengthScale::LightYears
        } else {
            LengthScale::MetersUnscaled
        }
    }

    pub fn scale(&self, meters: f64) -> f64 {
        match self {
            LengthScale::Millimeters => meters * 1e3,
            LengthScale::Centimeters => meters * 1e2,
            LengthScale::Meters | LengthScale::MetersUnscaled => meters,
            LengthScale::Kilometers => meters * 1e-3,
            LengthScale::LightYears => meters / LIGHT_YEAR,
        }
    }

    pub fn unit_name(&self) -> &'static str {
        match self {
            LengthScale::Millimeters => "millimeters",
            LengthScale::Centimeters => "centimeters",
            LengthScale::Meters | LengthScale::MetersUnscaled => "meters",
            LengthScale::Kilometers => "kilometers",
            LengthScale::LightYears => "light years",
        }
    }
}

impl fmt::Display for LengthScale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.unit_name())
    }
}

/// Formats a length in meters using the scale picked by [`LengthScale::select`].
pub fn convert_units(meters: f64) -> String {
    let scale = LengthScale::select(meters);
    format!("{} {}", custom_scientific_notation(scale.scale(meters)), scale)
}
