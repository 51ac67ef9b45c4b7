use crate::params::*;

/// Returns density of air, kg/m^3
///
/// Uses the ideal gas law for dry air at standard sea level pressure:
/// rho = p / (R * T)
///
/// # Arguments
/// * `te_air_deg_c` - ambient temperature of air, °C
pub fn get_rho_air(te_air_deg_c: f64) -> f64 {
    ATMOSPHERIC_PRESSURE_PA / (R_AIR * (te_air_deg_c + ZERO_DEG_C_IN_K))
}
