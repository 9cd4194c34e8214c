use super::energy::{energy_released, EnergyEquivalents};
use crate::config::physical::PhysicalConstants;
use crate::constants::{PI, SECONDS_PER_YEAR};
use crate::models::mass::Mass;
use log::debug;

/// A non-rotating, uncharged black hole described only by its mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHole {
    pub mass: Mass,
}

/// Every quantity derived from a black hole's mass, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHoleProperties {
    pub mass_kg: f64,
    pub schwarzschild_radius: f64, // m
    pub surface_gravity: f64,      // m/s²
    pub lifetime_seconds: f64,
    pub lifetime_years: f64,
    pub evaporation_energy: f64, // J
    pub equivalents: EnergyEquivalents,
}

impl BlackHole {
    pub fn new(mass: Mass) -> Self {
        BlackHole { mass }
    }

    /// Schwarzschild radius r_s = 2GM / c²
    pub fn schwarzschild_radius(&self, constants: &PhysicalConstants) -> f64 {
        2.0 * constants.g * self.mass.kg() / constants.c_squared()
    }

    /// Newtonian acceleration at the event horizon, g = GM / r_s²
    pub fn surface_gravity(&self, constants: &PhysicalConstants) -> f64 {
        let r_s = self.schwarzschild_radius(constants);
        constants.g * self.mass.kg() / (r_s * r_s)
    }

    /// Hawking evaporation time τ = 5120 π G² M³ / (ħ c⁴)
    pub fn lifetime_seconds(&self, constants: &PhysicalConstants) -> f64 {
        let m = self.mass.kg();
        5120.0 * PI * constants.g.powi(2) * m.powi(3) / (constants.hbar * constants.c.powi(4))
    }

    pub fn lifetime_years(&self, constants: &PhysicalConstants) -> f64 {
        self.lifetime_seconds(constants) / SECONDS_PER_YEAR
    }

    pub fn evaporation_energy(&self, constants: &PhysicalConstants) -> f64 {
        energy_released(self.mass.kg(), constants)
    }

    pub fn properties(&self, constants: &PhysicalConstants) -> BlackHoleProperties {
        let evaporation_energy = self.evaporation_energy(constants);
        let properties = BlackHoleProperties {
            mass_kg: self.mass.kg(),
            schwarzschild_radius: self.schwarzschild_radius(constants),
            surface_gravity: self.surface_gravity(constants),
            lifetime_seconds: self.lifetime_seconds(constants),
            lifetime_years: self.lifetime_years(constants),
            evaporation_energy,
            equivalents: EnergyEquivalents::from_joules(evaporation_energy),
        };
        debug!("Derived black hole properties: {:?}", properties);
        properties
    }
}
