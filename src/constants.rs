pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const C: f64 = 3e8; // Speed of light (m/s)
pub const HBAR: f64 = 1.0545718e-34; // Reduced Planck constant (J·s)
pub const G0: f64 = 9.81; // Earth's surface gravity, 1 g (m/s²)

// Mass units (kg)
pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const M_SUN: f64 = 1.989e30; // Mass of the Sun (kg)
pub const KG_PER_TON: f64 = 1000.0; // Metric ton

// Range advisory bounds (kg)
pub const MIN_REALISTIC_MASS: f64 = 1e-3;
pub const MAX_REALISTIC_MASS: f64 = 1e50;

// Length scales
pub const LIGHT_YEAR: f64 = 9.461e15; // meters

// Time
pub const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 24.0 * 365.25; // Julian year

// Energy yields
pub const KILOTON_TNT: f64 = 4.184e12; // Joules per kiloton of TNT
pub const HIROSHIMA_KILOTONS: f64 = 15.0;
pub const TSAR_BOMBA_YIELD: f64 = 50e3 * 4.184e9; // Tsar Bomba yield in Joules (50 megatons, 4.184e9 J per kiloton)

// Math
pub const PI: f64 = std::f64::consts::PI;
