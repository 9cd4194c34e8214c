use crate::constants::{C, G, G0, HBAR};

/// Physical constants fed into every black hole formula.
///
/// Formulas take this by reference instead of reading the globals in
/// [`crate::constants`] so alternative values can be swapped in (for
/// instance the exact speed of light) without touching the physics code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub g: f64,    // Gravitational constant (m³/kg/s²)
    pub c: f64,    // Speed of light (m/s)
    pub hbar: f64, // Reduced Planck constant (J·s)
    pub g0: f64,   // Reference surface gravity (m/s²)
}

impl PhysicalConstants {
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        g: G,
        c: C,
        hbar: HBAR,
        g0: G0,
    };

    pub fn c_squared(&self) -> f64 {
        self.c * self.c
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
