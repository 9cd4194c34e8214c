use crate::config::physical::PhysicalConstants;
use crate::constants::{HIROSHIMA_KILOTONS, KILOTON_TNT, TSAR_BOMBA_YIELD};

/// Total energy released by full evaporation, E = M c²
pub fn energy_released(mass_kg: f64, constants: &PhysicalConstants) -> f64 {
    mass_kg * constants.c_squared()
}

/// An energy expressed against familiar explosive yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyEquivalents {
    pub joules: f64,
    pub kilotons: f64,
    pub hiroshima_bombs: f64,
    pub tsar_bombas: f64,
}

impl EnergyEquivalents {
    pub fn from_joules(joules: f64) -> Self {
        let kilotons = joules / KILOTON_TNT;
        EnergyEquivalents {
            joules,
            kilotons,
            hiroshima_bombs: kilotons / HIROSHIMA_KILOTONS,
            tsar_bombas: joules / TSAR_BOMBA_YIELD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    #[test_case(1.0, 9e16; "one kilogram")]
    #[test_case(1e-3, 9e13; "one gram")]
    fn test_energy_released(kg: f64, expected: f64) {
        assert_relative_eq!(
            energy_released(kg, &PhysicalConstants::STANDARD),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_one_kilogram_equivalents() {
        let equivalents = EnergyEquivalents::from_joules(9e16);
        assert_eq!(format!("{:.3}", equivalents.kilotons), "21510.516");
        assert_eq!(format!("{:.3}", equivalents.hiroshima_bombs), "1434.034");
        assert_eq!(format!("{:.3}", equivalents.tsar_bombas), "430.210");
    }

    #[test]
    fn test_one_tsar_bomba() {
        let equivalents = EnergyEquivalents::from_joules(TSAR_BOMBA_YIELD);
        assert_eq!(format!("{:.3}", equivalents.tsar_bombas), "1.000");
    }

    #[test]
    fn test_one_hiroshima() {
        let equivalents = EnergyEquivalents::from_joules(15.0 * KILOTON_TNT);
        assert_abs_diff_eq!(equivalents.kilotons, 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(equivalents.hiroshima_bombs, 1.0, epsilon = 1e-9);
    }
}
