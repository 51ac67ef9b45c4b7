//! Crate containing a closed-form force-balance model for the energy consumption of an
//! electric vehicle driving at constant speed on a flat road, and the tooling for turning
//! partial vehicle data into a consumption curve for a routing engine.
//!
//! The typical flow is [inputs::RunInputs] → [curve::RunParams] → [curve::ConsumptionCurve]:
//! ```
//! use ev_curve_core::prelude::*;
//!
//! let inputs = RunInputs {
//!     vehicle: VehicleInputs {
//!         curb_weight_kg: Some(1812.0),
//!         width_m: Some(1.805),
//!         height_m: Some(1.570),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let curve = inputs.resolve().unwrap().consumption_curve();
//! assert_eq!(curve.points.len(), 20);
//! ```

#[macro_use]
pub mod macros;

pub mod air_properties;
pub mod curve;
pub mod error;
pub mod imports;
pub mod inputs;
pub mod params;
pub mod prelude;
pub mod traits;
pub mod utils;
pub mod vehicle;
