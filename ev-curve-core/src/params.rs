//! Module containing physical constants, model defaults, and input domains.

use crate::utils::{FieldSpec, ValRange};

/// Unit conversions that should NEVER change
pub const MPS_PER_KMH: f64 = 1000. / 3600.;
/// 1 N = 1 Ws / m = (100 / 3600) kWh / 100km
pub const KWH_PER_100KM_PER_N: f64 = 100. / 3600.;
pub const W_PER_KW: f64 = 1000.;
pub const WH_PER_KWH: f64 = 1000.;

/// Standard atmospheric pressure at sea level, Pa
pub const ATMOSPHERIC_PRESSURE_PA: f64 = 101_325.;
/// Specific gas constant for dry air, J/(K kg)
pub const R_AIR: f64 = 287.053;
/// 0 °C in K
pub const ZERO_DEG_C_IN_K: f64 = 273.15;
/// Standard gravity, m/s^2
pub const A_GRAV_MPS2: f64 = 9.81;

/// Passengers and cargo added on top of the curb weight, kg
pub const DEFAULT_LOAD_KG: f64 = 90.;
pub const DEFAULT_DRAG_COEF: f64 = 0.27;
/// Compensates for the frontal area not being a rectangle, see "Prediction of vehicle
/// reference frontal area", <https://www.osti.gov/biblio/6602653>
pub const FRONTAL_AREA_FACTOR: f64 = 0.8;
pub const DEFAULT_WHEEL_RR_COEF: f64 = 0.01;
pub const DEFAULT_DRIVETRAIN_EFF: f64 = 0.9;
pub const DEFAULT_IDLE_POWER_KW: f64 = 0.5;
pub const DEFAULT_TEMPERATURE_DEG_C: f64 = 20.;
pub const DEFAULT_MAX_SPEED_KMH: f64 = 200.;

/// Curve sampling
pub const MIN_SPEED_KMH: u32 = 10;
pub const SPEED_STEP_KMH: u32 = 10;

/// Reference condition of the highway consumption used for calibration
pub const HIGHWAY_SPEED_KMH: f64 = 110.;
pub const HIGHWAY_TEMPERATURE_DEG_C: f64 = 23.;

// Input domains, named after their command line flags
pub const WEIGHT: FieldSpec = FieldSpec::new("weight", ValRange::new(200., 80_000.));
pub const CURB_WEIGHT: FieldSpec = FieldSpec::new("curb-weight", ValRange::new(200., 80_000.));
pub const DRAG_AREA: FieldSpec = FieldSpec::new("drag-area", ValRange::new(0.1, 4.0));
pub const DRAG_COEF: FieldSpec = FieldSpec::new("drag-coefficient", ValRange::new(0.03, 5.0));
pub const FRONTAL_AREA: FieldSpec = FieldSpec::new("frontal-area", ValRange::new(0.5, 8.0));
pub const WIDTH: FieldSpec = FieldSpec::new("width", ValRange::new(0.5, 4.0));
pub const HEIGHT: FieldSpec = FieldSpec::new("height", ValRange::new(0.5, 4.0));
pub const WHEEL_RR_COEF: FieldSpec = FieldSpec::new(
    "rolling-resistance-coefficient",
    ValRange::new(0.003, 0.05),
);
pub const DRIVETRAIN_EFF: FieldSpec =
    FieldSpec::new("drivetrain-efficiency", ValRange::above(0.0, 1.0));
pub const IDLE_POWER: FieldSpec = FieldSpec::new("idle-power", ValRange::new(0.0, 6.0));
pub const HIGHWAY_CONSUMPTION: FieldSpec =
    FieldSpec::new("highway-consumption", ValRange::new(50., 1000.));
pub const TEMPERATURE: FieldSpec = FieldSpec::new("temperature", ValRange::new(-90., 60.));
pub const MAX_SPEED: FieldSpec = FieldSpec::new("max-speed", ValRange::new(20., 250.));
