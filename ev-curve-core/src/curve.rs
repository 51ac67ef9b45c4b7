//! Module containing the speed sweep, the optional calibration against a measured highway
//! consumption, and the routing-engine representation of the resulting curve.

use std::fmt;

use crate::imports::*;
use crate::params::*;
use crate::vehicle::Vehicle;

/// Fully resolved parameters of one curve calculation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RunParams {
    pub vehicle: Vehicle,
    /// Ambient temperature, °C
    pub temperature_deg_c: f64,
    /// Measured consumption at [HIGHWAY_SPEED_KMH] and [HIGHWAY_TEMPERATURE_DEG_C], kWh/100km
    pub highway_consumption_kwh_per_100km: Option<f64>,
    pub max_speed_kmh: u32,
}

impl SerdeAPI for RunParams {
    fn init(&mut self) -> anyhow::Result<()> {
        self.vehicle.init()
    }
}

impl RunParams {
    /// Factor by which every point of the modelled curve is multiplied so that the
    /// curve passes through the measured highway consumption.  1.0 without a measurement.
    pub fn scale_factor(&self) -> f64 {
        match self.highway_consumption_kwh_per_100km {
            Some(target) => {
                target
                    / self
                        .vehicle
                        .consumption_kwh_per_100km(HIGHWAY_SPEED_KMH, HIGHWAY_TEMPERATURE_DEG_C)
            }
            None => 1.0,
        }
    }

    /// Consumption at every [SPEED_STEP_KMH] from [MIN_SPEED_KMH] up to and including
    /// `max_speed_kmh`.  Empty if `max_speed_kmh` is below [MIN_SPEED_KMH].
    pub fn consumption_curve(&self) -> ConsumptionCurve {
        let scale = self.scale_factor();
        if self.highway_consumption_kwh_per_100km.is_some() {
            log::info!("scaling modelled consumption by {scale:.4} to match highway consumption");
        }
        let points: Vec<CurvePoint> = (MIN_SPEED_KMH..=self.max_speed_kmh)
            .step_by(SPEED_STEP_KMH as usize)
            .map(|speed_kmh| CurvePoint {
                speed_kmh,
                consumption_kwh_per_100km: scale
                    * self
                        .vehicle
                        .consumption_kwh_per_100km(speed_kmh as f64, self.temperature_deg_c),
            })
            .collect();
        let curve = ConsumptionCurve { points };
        match curve.min_consumption_point() {
            Some(point) => log::info!(
                "lowest consumption {:.2} kWh/100km at {} km/h",
                point.consumption_kwh_per_100km,
                point.speed_kmh
            ),
            None => log::warn!(
                "max speed of {} km/h is below {MIN_SPEED_KMH} km/h, curve is empty",
                self.max_speed_kmh
            ),
        }
        curve
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub speed_kmh: u32,
    pub consumption_kwh_per_100km: f64,
}

/// Constant-speed consumption curve, ordered by speed
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConsumptionCurve {
    pub points: Vec<CurvePoint>,
}

impl SerdeAPI for ConsumptionCurve {
    fn init(&mut self) -> anyhow::Result<()> {
        ensure!(
            self.points
                .windows(2)
                .all(|w| w[0].speed_kmh < w[1].speed_kmh),
            "Deserialized curve is not sorted by speed"
        );
        Ok(())
    }
}

impl ConsumptionCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point with the lowest consumption, if any
    pub fn min_consumption_point(&self) -> Option<&CurvePoint> {
        self.points.iter().min_by(|a, b| {
            a.consumption_kwh_per_100km
                .total_cmp(&b.consumption_kwh_per_100km)
        })
    }

    /// Representation as expected by routing engines, e.g. the
    /// `constantSpeedConsumptionInkWhPerHundredkm` parameter:
    /// `speed1,consumption1:speed2,consumption2:...` with speed in km/h and consumption
    /// in kWh/100km rounded to two decimals.
    pub fn to_routing_str(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConsumptionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(
                f,
                "{},{:.2}",
                point.speed_kmh, point.consumption_kwh_per_100km
            )?;
        }
        Ok(())
    }
}
