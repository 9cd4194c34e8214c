use crate::constants::{MAX_REALISTIC_MASS, MIN_REALISTIC_MASS};
use crate::models::mass::Mass;
use log::info;
use std::fmt;

/// Non-fatal warning for masses outside the range where the formulas are
/// considered meaningful. Computation proceeds regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeAdvisory {
    TooSmall,
    TooLarge,
}

impl RangeAdvisory {
    pub fn for_mass(mass: &Mass) -> Option<RangeAdvisory> {
        let kg = mass.kg();
        let advisory = if kg < MIN_REALISTIC_MASS {
            Some(RangeAdvisory::TooSmall)
        } else if kg > MAX_REALISTIC_MASS {
            Some(RangeAdvisory::TooLarge)
        } else {
            None
        };

        if let Some(advisory) = advisory {
            info!("Mass of {} kg is {}", kg, advisory.describe());
        }
        advisory
    }

    fn describe(&self) -> &'static str {
        match self {
            RangeAdvisory::TooSmall => "extremely small",
            RangeAdvisory::TooLarge => "extremely large",
        }
    }
}

impl fmt::Display for RangeAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Warning: The black hole mass is {}, which may produce unrealistic results.",
            self.describe()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1e-4 => Some(RangeAdvisory::TooSmall); "below one gram")]
    #[test_case(1e-3 => None; "exactly one gram")]
    #[test_case(1.0 => None; "one kilogram")]
    #[test_case(1e50 => None; "upper bound inclusive")]
    #[test_case(1e51 => Some(RangeAdvisory::TooLarge); "above upper bound")]
    fn test_for_mass(kg: f64) -> Option<RangeAdvisory> {
        RangeAdvisory::for_mass(&Mass::from_kg(kg).unwrap())
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RangeAdvisory::TooSmall.to_string(),
            "Warning: The black hole mass is extremely small, which may produce unrealistic results."
        );
    }
}
