// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Takeoff performance.
//!
//! The calculation is a pure function of the request and the aircraft
//! dataset: validate, resolve the environment, solve the four limit
//! families at the four temperature anchors, derive MTOW and flex, then
//! solve and reconcile the V-speeds. Every intermediate is kept on the
//! returned analysis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod contaminated;
mod corrections;
mod flex;
mod limits;
mod speeds;

pub use limits::{AnchorLimit, GoverningFactors, LimitWeights, TempAnchor};
pub use speeds::VSpeeds;

use crate::data::AircraftData;
use crate::envelope;
use crate::environment::Environment;
use crate::error::CalcError;
use crate::types::{AntiIce, LimitingFactor, LineupAngle, RunwayCondition, TakeoffConfig};

/// One takeoff performance request.
///
/// Units: weights kg, distances m, slope signed % (negative downhill),
/// wind signed kt along the runway (positive headwind), elevation ft,
/// QNH hPa, temperatures °C, CG %MAC.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TakeoffInputs {
    pub tow: f64,
    pub forward_cg: bool,
    pub conf: TakeoffConfig,
    pub tora: f64,
    pub slope: f64,
    pub lineup: LineupAngle,
    pub wind: f64,
    pub elevation: f64,
    pub qnh: f64,
    pub oat: f64,
    pub anti_ice: AntiIce,
    pub packs: bool,
    pub force_toga: bool,
    pub condition: RunwayCondition,
    pub cg: Option<f64>,
}

impl TakeoffInputs {
    /// A benign sea-level request; useful as a starting point to override
    /// single fields from.
    pub fn new(tow: f64, conf: TakeoffConfig, tora: f64) -> Self {
        Self {
            tow,
            forward_cg: false,
            conf,
            tora,
            slope: 0.0,
            lineup: LineupAngle::Straight,
            wind: 0.0,
            elevation: 0.0,
            qnh: 1013.25,
            oat: 15.0,
            anti_ice: AntiIce::Off,
            packs: false,
            force_toga: false,
            condition: RunwayCondition::Dry,
            cg: None,
        }
    }
}

/// The full outcome of a takeoff calculation.
///
/// A set `error` means the figures are not usable for dispatch; the
/// fields that were computed before the error are still populated.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TakeoffAnalysis {
    pub inputs: TakeoffInputs,
    pub environment: Environment,
    /// The per-family correction chains, indexed by [`LimitingFactor`].
    pub limits: Option<[LimitWeights; 4]>,
    pub limiting_factors: Option<GoverningFactors>,
    /// The performance-limited MTOW in kg, capped at the structural MTOW.
    pub mtow: Option<f64>,
    /// The flexible temperature in whole °C, when one is available.
    pub flex: Option<i32>,
    pub flex_limiting_factor: Option<LimitingFactor>,
    /// The reconciled V1/Vr/V2.
    pub speeds: Option<VSpeeds>,
    /// The unreconciled kernel output before wet or contaminated deltas.
    pub dry_speeds: Option<(f64, f64, f64)>,
    /// Stabilizer trim for the supplied CG.
    pub stab_trim: Option<f64>,
    pub error: Option<CalcError>,
}

impl TakeoffAnalysis {
    fn rejected(inputs: TakeoffInputs, environment: Environment, error: CalcError) -> Self {
        Self {
            inputs,
            environment,
            limits: None,
            limiting_factors: None,
            mtow: None,
            flex: None,
            flex_limiting_factor: None,
            speeds: None,
            dry_speeds: None,
            stab_trim: None,
            error: Some(error),
        }
    }
}

/// Runs one takeoff calculation against the dataset.
pub(crate) fn calculate(data: &AircraftData, inputs: &TakeoffInputs) -> TakeoffAnalysis {
    let environment = Environment::resolve(
        data,
        inputs.elevation,
        inputs.qnh,
        inputs.wind,
        inputs.lineup,
        inputs.tora,
    );

    if let Some(error) = validate(data, inputs, &environment) {
        return TakeoffAnalysis::rejected(inputs.clone(), environment, error);
    }

    if inputs.force_toga {
        // full thrust is authorized by assuming the worst credited wind;
        // one shallow re-entry of the shared body with flex disabled
        let mut derated = inputs.clone();
        derated.wind = -data.operational.max_tailwind;
        derated.force_toga = false;
        let mut analysis = body(data, &derated, true);
        analysis.inputs = inputs.clone();
        return analysis;
    }

    body(data, inputs, false)
}

fn validate(data: &AircraftData, inputs: &TakeoffInputs, env: &Environment) -> Option<CalcError> {
    let finite = inputs.tow.is_finite()
        && inputs.tora.is_finite()
        && inputs.slope.is_finite()
        && inputs.wind.is_finite()
        && inputs.elevation.is_finite()
        && inputs.qnh.is_finite()
        && inputs.oat.is_finite()
        && inputs.cg.map_or(true, f64::is_finite);
    if !finite || inputs.tow <= 0.0 || inputs.tora <= 0.0 || inputs.qnh <= 0.0 {
        return Some(CalcError::InvalidData);
    }
    if inputs.tow > data.structural.mtow {
        return Some(CalcError::StructuralMtow);
    }
    if env.pressure_alt > data.operational.max_pressure_alt {
        return Some(CalcError::MaxPressureAlt);
    }
    if inputs.oat > env.t_max {
        return Some(CalcError::MaxTemperature);
    }
    if inputs.tow < data.structural.oew {
        return Some(CalcError::Oew);
    }
    if let Some(cg) = inputs.cg {
        if !envelope::cg_within_limits(data, cg, inputs.tow) {
            return Some(CalcError::CgOutOfLimits);
        }
    }
    if inputs.wind < -data.operational.max_tailwind {
        return Some(CalcError::MaxTailwind);
    }
    if inputs.slope.abs() > data.operational.max_slope {
        return Some(CalcError::MaxSlope);
    }
    None
}

fn body(data: &AircraftData, inputs: &TakeoffInputs, suppress_flex: bool) -> TakeoffAnalysis {
    let conf_index = inputs.conf.index();
    let env = Environment::resolve(
        data,
        inputs.elevation,
        inputs.qnh,
        inputs.wind,
        inputs.lineup,
        inputs.tora,
    );

    let bleed_delta = corrections::bleed_correction(&data.bleed, inputs.anti_ice, inputs.packs);
    let anchor_temps = limits::anchor_temperatures(&env, inputs.oat);
    let limit_weights = limits::solve_all(
        data,
        conf_index,
        &env,
        inputs.slope,
        &anchor_temps,
        bleed_delta,
    );
    let governing = limits::governing_all(&limit_weights);

    let mut mtow = limit_weights[governing.oat.index()]
        .anchor(TempAnchor::Oat)
        .limit;

    let above_tvmcg = inputs.oat > contaminated::tvmcg(&data.takeoff, conf_index, &env);

    if inputs.condition == RunwayCondition::Wet {
        mtow += contaminated::wet_tow_delta(&data.takeoff.wet, conf_index, &env, above_tvmcg);
    }
    if inputs.forward_cg && !governing.oat.is_airborne() {
        mtow += data.takeoff.forward_cg.mtow_gain[conf_index].at(mtow).max(0.0);
    }
    mtow = mtow.min(data.structural.mtow);

    let stab_trim = inputs.cg.map(|cg| data.envelopes.stab_trim.at(cg));

    if let Some(index) = inputs.condition.contaminant_index() {
        let contaminant = &data.takeoff.contaminants[index];
        match contaminated::contaminated_mtow(contaminant, conf_index, &env, mtow) {
            Ok(value) => mtow = value.min(data.structural.mtow),
            Err(error) => {
                return TakeoffAnalysis {
                    inputs: inputs.clone(),
                    environment: env,
                    limits: Some(limit_weights),
                    limiting_factors: Some(governing),
                    mtow: Some(mtow),
                    flex: None,
                    flex_limiting_factor: None,
                    speeds: None,
                    dry_speeds: None,
                    stab_trim,
                    error: Some(error),
                };
            }
        }
    }

    let mut error = (mtow < inputs.tow).then_some(CalcError::TooHeavy);

    let flex_result = if error.is_none() && !inputs.condition.is_contaminated() && !suppress_flex {
        flex::search(
            data,
            conf_index,
            &env,
            &limit_weights,
            &governing,
            inputs.tow,
            inputs.oat,
            inputs.anti_ice,
            inputs.packs,
            (inputs.condition == RunwayCondition::Wet).then_some(above_tvmcg),
        )
    } else {
        None
    };

    let dry = speeds::dry_speeds(
        &data.takeoff.speeds,
        conf_index,
        &env,
        inputs.slope,
        inputs.tow,
        governing.oat.is_airborne(),
    );

    let (mut v1, mut vr, mut v2) = dry;
    if let Some(index) = inputs.condition.contaminant_index() {
        let read = contaminated::contaminated_speeds(
            &data.takeoff.contaminants[index],
            conf_index,
            inputs.tow,
        );
        v1 = read[0];
        vr = read[1];
        v2 = read[2];
    } else if inputs.condition == RunwayCondition::Wet {
        let delta = contaminated::wet_speed_delta(&data.takeoff.wet, conf_index, &env, above_tvmcg);
        v1 += delta[0];
        vr += delta[1];
        v2 += delta[2];
    }
    if inputs.forward_cg && mtow <= data.takeoff.forward_cg.speed_threshold {
        let increment = &data.takeoff.forward_cg.speed_increment[conf_index];
        v1 += increment[0];
        vr += increment[1];
        v2 += increment[2];
    }

    let floors = speeds::floors(&data.takeoff.speeds, conf_index, &env, inputs.tow);
    let (reconciled, reconcile_error) =
        speeds::reconcile((v1, vr, v2), &floors, data.operational.tire_speed);
    if error.is_none() {
        error = reconcile_error;
    }

    TakeoffAnalysis {
        inputs: inputs.clone(),
        environment: env,
        limits: Some(limit_weights),
        limiting_factors: Some(governing),
        mtow: Some(mtow),
        flex: flex_result.map(|f| f.temperature),
        flex_limiting_factor: flex_result.map(|f| f.limiting_factor),
        speeds: Some(reconciled),
        dry_speeds: Some(dry),
        stab_trim,
        error,
    }
}

/// Sweeps the three configurations and keeps the most flexible result.
///
/// The `conf` field of the request is overridden for each attempt.
/// Successful attempts are ranked by flex temperature, ties broken by the
/// lower V1. When every configuration fails the last attempt is returned.
pub(crate) fn calculate_optimal_config(
    data: &AircraftData,
    inputs: &TakeoffInputs,
) -> TakeoffAnalysis {
    let mut best: Option<TakeoffAnalysis> = None;
    let mut last: Option<TakeoffAnalysis> = None;

    for conf in TakeoffConfig::ALL {
        let mut attempt_inputs = inputs.clone();
        attempt_inputs.conf = conf;
        let attempt = calculate(data, &attempt_inputs);

        if attempt.error.is_none() {
            let better = match &best {
                None => true,
                Some(current) => {
                    let attempt_flex = attempt.flex.unwrap_or(i32::MIN);
                    let current_flex = current.flex.unwrap_or(i32::MIN);
                    attempt_flex > current_flex
                        || (attempt_flex == current_flex
                            && speed_v1(&attempt) < speed_v1(current))
                }
            };
            if better {
                best = Some(attempt.clone());
            }
        }
        last = Some(attempt);
    }

    best
        .or(last)
        .expect("the sweep always runs at least one attempt")
}

fn speed_v1(analysis: &TakeoffAnalysis) -> i32 {
    analysis.speeds.map_or(i32::MAX, |v| v.v1)
}
