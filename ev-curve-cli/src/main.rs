use std::io;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

extern crate ev_curve_core;
use ev_curve_core::{
    curve::RunParams,
    inputs::{RunInputs, VehicleInputs},
    params::*,
    traits::SerdeAPI,
    vehicle::Vehicle,
};

/// Calculate consumption curve from physical parameters of an electric car.
///
/// The consumption curve is used in the TomTom routing API (constantSpeedConsumptionInkWhPerHundredkm), see
/// https://developer.tomtom.com/routing-api/documentation/routing/common-routing-parameters .
/// The consumption curve indicates the consumption of the car at a given constant speed on a flat surface.
/// It is represented as "speed1,consumption1:speed2,consumption2:...", with speed in km/h and consumption in kWh/100km.
///
/// Recommended usage:
/// * Specify the curb weight.
/// * Specify the drag area.
///   * If the drag area is not available, specify drag coefficient and frontal area.
///     * If frontal area is not available, specify width and height.
/// * Consider specifying rolling resistance coefficient, drivetrain efficiency, and idle power, if information on them is available.
/// * Consider using different consumption curves for different temperatures.
///
/// Example:
///     ev-curve --curb-weight=1812 --width=1.805 --height=1.570
#[derive(Parser, Debug)]
#[clap(author, version, verbatim_doc_comment)]
struct EvCurveApi {
    /// Total vehicle weight (kg), including passengers and load, typically 1400–2300.
    #[clap(long, value_parser = WEIGHT.parser())]
    weight: Option<f64>,
    /// Vehicle curb weight (kg), typically 1300–2200. Calculation assumes an extra load weight of 90kg.
    #[clap(long, value_parser = CURB_WEIGHT.parser())]
    curb_weight: Option<f64>,
    /// Drag area (CdA, m²), typically 0.4–1.0.
    #[clap(long, value_parser = DRAG_AREA.parser())]
    drag_area: Option<f64>,
    /// Drag coefficient (Cd, dimensionless), typically 0.2–0.4. Default: 0.27.
    #[clap(long, value_parser = DRAG_COEF.parser())]
    drag_coefficient: Option<f64>,
    /// Frontal area (m²), typically 2.0–2.7.
    #[clap(long, value_parser = FRONTAL_AREA.parser())]
    frontal_area: Option<f64>,
    /// Width (m), typically 1.7–2.0.
    #[clap(long, value_parser = WIDTH.parser())]
    width: Option<f64>,
    /// Height (m), typically 1.4–1.8.
    #[clap(long, value_parser = HEIGHT.parser())]
    height: Option<f64>,
    /// Rolling resistance coefficient (dimensionless), typically 0.007–0.013. Default: 0.01.
    #[clap(long, value_parser = WHEEL_RR_COEF.parser())]
    rolling_resistance_coefficient: Option<f64>,
    /// Drivetrain efficiency coefficient (dimensionless), typically 0.8–0.95. Default: 0.9.
    #[clap(long, value_parser = DRIVETRAIN_EFF.parser())]
    drivetrain_efficiency: Option<f64>,
    /// Idle power (kW), typically 0.5–1.5. Default: 0.5.
    #[clap(long, value_parser = IDLE_POWER.parser())]
    idle_power: Option<f64>,
    /// Consumption at 110km/h at 23°C, without auxiliary consumption like A/C, in Wh/km.
    /// If given, this will be used to scale the calculated curve such that the point at 110 km/h
    /// matches the given value. Typically 150–300.
    #[clap(long, value_parser = HIGHWAY_CONSUMPTION.parser())]
    highway_consumption: Option<f64>,
    /// Temperature (°C), typically −15–35. Default: 20.
    #[clap(long, value_parser = TEMPERATURE.parser(), allow_hyphen_values = true)]
    temperature: Option<f64>,
    /// Maximum speed (km/h). Default: 200.
    #[clap(long, value_parser = MAX_SPEED.parser())]
    max_speed: Option<f64>,
    /// Path to a vehicle file (yaml or json) with already resolved vehicle parameters,
    /// used instead of the vehicle options above
    #[clap(long, value_parser)]
    veh_file: Option<PathBuf>,
    /// How to return results: `curve` (default), `json`, or `yaml`
    #[clap(long, value_parser)]
    res_fmt: Option<String>,
    /// Log progress to stderr; repeat for more detail
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl EvCurveApi {
    fn run_inputs(&self) -> RunInputs {
        RunInputs {
            vehicle: VehicleInputs {
                weight_kg: self.weight,
                curb_weight_kg: self.curb_weight,
                drag_area_m2: self.drag_area,
                drag_coef: self.drag_coefficient,
                frontal_area_m2: self.frontal_area,
                width_m: self.width,
                height_m: self.height,
                wheel_rr_coef: self.rolling_resistance_coefficient,
                drivetrain_eff: self.drivetrain_efficiency,
                idle_power_kw: self.idle_power,
            },
            temperature_deg_c: self.temperature,
            highway_consumption_wh_per_km: self.highway_consumption,
            max_speed_kmh: self.max_speed,
        }
    }

    fn run_params(&self) -> anyhow::Result<RunParams> {
        let inputs = self.run_inputs();
        match &self.veh_file {
            Some(veh_file) => inputs.resolve_with_vehicle(Vehicle::from_file(veh_file)?),
            None => inputs.resolve(),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    // also installs a `log` bridge so records from the core are emitted
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .try_init();
}

pub fn main() -> anyhow::Result<()> {
    let ev_curve_api = EvCurveApi::parse();
    init_logging(ev_curve_api.verbose);

    let params = ev_curve_api.run_params()?;
    log::debug!("run parameters: {params:?}");
    let curve = params.consumption_curve();

    let res_fmt = ev_curve_api.res_fmt.as_deref().unwrap_or("curve");
    match res_fmt {
        "curve" => println!("{curve}"),
        "json" | "yaml" | "yml" => println!("{}", curve.to_str(res_fmt)?.trim_end()),
        _ => bail!("Invalid option `{res_fmt}` for `--res-fmt`, must be one of `curve`, `json`, `yaml`"),
    }
    Ok(())
}
