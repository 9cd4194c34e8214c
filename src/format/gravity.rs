use super::scientific::custom_scientific_notation;
use crate::config::physical::PhysicalConstants;

/// Expresses an acceleration in multiples of the reference gravity `g0`.
pub fn gravitational_pull_in_g(g_pull: f64, constants: &PhysicalConstants) -> String {
    custom_scientific_notation(g_pull / constants.g0)
}
