pub use crate::curve::{ConsumptionCurve, CurvePoint, RunParams};
pub use crate::error::InputError;
pub use crate::inputs::{RunInputs, VehicleInputs};
pub use crate::traits::SerdeAPI;
pub use crate::vehicle::Vehicle;
