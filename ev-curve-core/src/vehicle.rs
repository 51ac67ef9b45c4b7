//! Module containing the vehicle struct and the force-balance consumption model.

use validator::Validate;

use crate::air_properties::get_rho_air;
use crate::imports::*;
use crate::params::*;

/// Physical parameters of an electric vehicle, in MKS units.
///
/// Constructed once from validated input and never mutated afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
pub struct Vehicle {
    /// Total mass including passengers and load, $kg$
    #[validate(range(min = 0))]
    pub mass_kg: f64,
    /// Drag area (drag coefficient times frontal area), $m^2$
    #[validate(range(min = 0))]
    pub drag_area_m2: f64,
    /// Fraction of battery energy that reaches the wheels for propulsion
    #[validate(range(min = 0, max = 1))]
    pub drivetrain_eff: f64,
    /// Rolling resistance coefficient
    #[validate(range(min = 0))]
    pub wheel_rr_coef: f64,
    /// Power drawn independent of propulsion (accessories, electronics), $W$
    #[validate(range(min = 0))]
    pub idle_power_w: f64,
}

impl Vehicle {
    pub fn new(
        mass_kg: f64,
        drag_area_m2: f64,
        drivetrain_eff: f64,
        wheel_rr_coef: f64,
        idle_power_w: f64,
    ) -> anyhow::Result<Self> {
        let mut veh = Self {
            mass_kg,
            drag_area_m2,
            drivetrain_eff,
            wheel_rr_coef,
            idle_power_w,
        };
        veh.init()?;
        Ok(veh)
    }

    /// Rolling resistance force, $N$; independent of speed and temperature
    pub fn rolling_resistance_force_n(&self) -> f64 {
        let normal_force_n = self.mass_kg * A_GRAV_MPS2;
        self.wheel_rr_coef * normal_force_n
    }

    /// Aerodynamic drag force, $N$
    ///
    /// # Arguments
    /// * `speed_mps` - vehicle speed, m/s
    /// * `te_air_deg_c` - ambient temperature, °C
    pub fn air_drag_force_n(&self, speed_mps: f64, te_air_deg_c: f64) -> f64 {
        0.5 * get_rho_air(te_air_deg_c) * self.drag_area_m2 * speed_mps.powi(2)
    }

    /// Constant idle power expressed as an equivalent force at `speed_mps`
    /// (1 W = 1 N m / s).  `speed_mps` must be positive.
    pub fn idle_power_force_n(&self, speed_mps: f64) -> f64 {
        debug_assert!(speed_mps > 0.0, "{}", format_dbg!(speed_mps));
        self.idle_power_w / speed_mps
    }

    /// Force drawn from the battery, $N$.  Propulsive losses go through the
    /// drivetrain, idle draw does not.
    pub fn total_force_n(&self, speed_mps: f64, te_air_deg_c: f64) -> f64 {
        (self.rolling_resistance_force_n() + self.air_drag_force_n(speed_mps, te_air_deg_c))
            / self.drivetrain_eff
            + self.idle_power_force_n(speed_mps)
    }

    /// Energy consumption in kWh/100km at constant `speed_kmh` on a flat road
    /// at ambient temperature `te_air_deg_c` (°C).
    pub fn consumption_kwh_per_100km(&self, speed_kmh: f64, te_air_deg_c: f64) -> f64 {
        let speed_mps = speed_kmh * MPS_PER_KMH;
        self.total_force_n(speed_mps, te_air_deg_c) * KWH_PER_100KM_PER_N
    }
}

impl SerdeAPI for Vehicle {
    fn init(&mut self) -> anyhow::Result<()> {
        self.validate()?;
        ensure!(self.mass_kg > 0.0, format_dbg!(self.mass_kg));
        ensure!(self.drag_area_m2 > 0.0, format_dbg!(self.drag_area_m2));
        ensure!(self.drivetrain_eff > 0.0, format_dbg!(self.drivetrain_eff));
        ensure!(self.wheel_rr_coef > 0.0, format_dbg!(self.wheel_rr_coef));
        Ok(())
    }
}
