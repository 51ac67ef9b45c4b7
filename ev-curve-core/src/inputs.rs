//! Module resolving partial, possibly redundant user input into a complete [Vehicle] and
//! [RunParams].
//!
//! Every numeric input is range checked first; only then are the mutually exclusive
//! derivation paths for mass and drag area examined.

use crate::curve::RunParams;
use crate::imports::*;
use crate::params::*;
use crate::vehicle::Vehicle;

/// Raw vehicle inputs as supplied by the user.  `None` means "not given".
#[derive(Default, Clone, Debug, PartialEq)]
pub struct VehicleInputs {
    /// Total weight including passengers and load, kg
    pub weight_kg: Option<f64>,
    /// Curb weight, kg; [DEFAULT_LOAD_KG] is added on top
    pub curb_weight_kg: Option<f64>,
    pub drag_area_m2: Option<f64>,
    pub drag_coef: Option<f64>,
    pub frontal_area_m2: Option<f64>,
    pub width_m: Option<f64>,
    pub height_m: Option<f64>,
    pub wheel_rr_coef: Option<f64>,
    pub drivetrain_eff: Option<f64>,
    pub idle_power_kw: Option<f64>,
}

impl VehicleInputs {
    /// True if no vehicle input at all was given
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn check_ranges(&self) -> Result<(), InputError> {
        WEIGHT.check_opt(self.weight_kg)?;
        CURB_WEIGHT.check_opt(self.curb_weight_kg)?;
        DRAG_AREA.check_opt(self.drag_area_m2)?;
        DRAG_COEF.check_opt(self.drag_coef)?;
        FRONTAL_AREA.check_opt(self.frontal_area_m2)?;
        WIDTH.check_opt(self.width_m)?;
        HEIGHT.check_opt(self.height_m)?;
        WHEEL_RR_COEF.check_opt(self.wheel_rr_coef)?;
        DRIVETRAIN_EFF.check_opt(self.drivetrain_eff)?;
        IDLE_POWER.check_opt(self.idle_power_kw)?;
        Ok(())
    }

    /// Total vehicle mass, kg, from either `weight_kg` or `curb_weight_kg`
    pub fn resolve_mass_kg(&self) -> Result<f64, InputError> {
        match (self.weight_kg, self.curb_weight_kg) {
            (Some(weight_kg), None) => Ok(weight_kg),
            (None, Some(curb_weight_kg)) => Ok(curb_weight_kg + DEFAULT_LOAD_KG),
            (None, None) => Err(InputError::Missing(
                "Need either --weight or --curb-weight.",
            )),
            (Some(_), Some(_)) => Err(InputError::Conflicting(
                "Cannot have both --weight and --curb-weight.",
            )),
        }
    }

    /// Drag area, m^2, in priority order: explicit drag area, drag coefficient times
    /// frontal area, drag coefficient times frontal area approximated from width and height.
    pub fn resolve_drag_area_m2(&self) -> Result<f64, InputError> {
        let has_dims = self.width_m.is_some() || self.height_m.is_some();
        if self.drag_area_m2.is_some()
            && (self.drag_coef.is_some() || self.frontal_area_m2.is_some() || has_dims)
        {
            return Err(InputError::Conflicting(
                "If --drag-area is given, cannot use --drag-coefficient, --frontal-area, --width, or --height.",
            ));
        }
        if self.frontal_area_m2.is_some() && has_dims {
            return Err(InputError::Conflicting(
                "If --frontal-area is given, cannot use --width or --height.",
            ));
        }

        let drag_coef = self.drag_coef.unwrap_or(DEFAULT_DRAG_COEF);
        match (
            self.drag_area_m2,
            self.frontal_area_m2,
            self.width_m,
            self.height_m,
        ) {
            (Some(drag_area_m2), _, _, _) => Ok(drag_area_m2),
            (None, Some(frontal_area_m2), _, _) => Ok(drag_coef * frontal_area_m2),
            (None, None, Some(width_m), Some(height_m)) => {
                let frontal_area_m2 = FRONTAL_AREA_FACTOR * width_m * height_m;
                Ok(drag_coef * frontal_area_m2)
            }
            (None, None, Some(_), None) | (None, None, None, Some(_)) => Err(
                InputError::PartialPair("Both --width and --height must be given together."),
            ),
            (None, None, None, None) => Err(InputError::Missing(
                "Must specify --drag-area or --frontal-area or --width and --height.",
            )),
        }
    }

    /// Resolves the inputs into a [Vehicle], filling in defaults for
    /// rolling resistance, drivetrain efficiency and idle power.
    pub fn resolve(&self) -> anyhow::Result<Vehicle> {
        self.check_ranges()?;
        let mass_kg = self.resolve_mass_kg()?;
        let drag_area_m2 = self.resolve_drag_area_m2()?;
        let veh = Vehicle::new(
            mass_kg,
            drag_area_m2,
            self.drivetrain_eff.unwrap_or(DEFAULT_DRIVETRAIN_EFF),
            self.wheel_rr_coef.unwrap_or(DEFAULT_WHEEL_RR_COEF),
            self.idle_power_kw.unwrap_or(DEFAULT_IDLE_POWER_KW) * W_PER_KW,
        )?;
        log::debug!("resolved vehicle: {veh:?}");
        Ok(veh)
    }
}

/// Raw inputs for a complete curve calculation
#[derive(Default, Clone, Debug, PartialEq)]
pub struct RunInputs {
    pub vehicle: VehicleInputs,
    /// Ambient temperature, °C
    pub temperature_deg_c: Option<f64>,
    /// Consumption at 110 km/h and 23 °C, Wh/km
    pub highway_consumption_wh_per_km: Option<f64>,
    pub max_speed_kmh: Option<f64>,
}

impl RunInputs {
    pub fn check_ranges(&self) -> Result<(), InputError> {
        TEMPERATURE.check_opt(self.temperature_deg_c)?;
        HIGHWAY_CONSUMPTION.check_opt(self.highway_consumption_wh_per_km)?;
        MAX_SPEED.check_opt(self.max_speed_kmh)?;
        self.vehicle.check_ranges()
    }

    pub fn resolve(&self) -> anyhow::Result<RunParams> {
        self.check_ranges()?;
        let vehicle = self.vehicle.resolve()?;
        Ok(self.with_vehicle(vehicle))
    }

    /// Like [RunInputs::resolve] but with an already resolved vehicle, e.g. one read
    /// from a file.  Fails if any vehicle input was given as well.
    pub fn resolve_with_vehicle(&self, vehicle: Vehicle) -> anyhow::Result<RunParams> {
        self.check_ranges()?;
        if !self.vehicle.is_empty() {
            bail!(InputError::Conflicting(
                "A vehicle file cannot be combined with vehicle parameters."
            ));
        }
        Ok(self.with_vehicle(vehicle))
    }

    fn with_vehicle(&self, vehicle: Vehicle) -> RunParams {
        let highway_consumption_kwh_per_100km = self
            .highway_consumption_wh_per_km
            .map(|wh_per_km| wh_per_km / WH_PER_KWH * 100.);
        RunParams {
            vehicle,
            temperature_deg_c: self.temperature_deg_c.unwrap_or(DEFAULT_TEMPERATURE_DEG_C),
            highway_consumption_kwh_per_100km,
            max_speed_kmh: self.max_speed_kmh.unwrap_or(DEFAULT_MAX_SPEED_KMH) as u32,
        }
    }
}
