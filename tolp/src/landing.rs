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

//! Landing performance.
//!
//! Landing distance is the tabulated reference distance of the runway
//! condition, autobrake mode and flap setting plus a sum of correction
//! terms, multiplied by the mandated safety margin. Only the tailwind
//! component and downhill slopes penalize.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::{AircraftData, LandingRow};
use crate::types::{AutobrakeMode, FlapsConfig, RunwayCondition};

/// One landing distance request.
///
/// Units: weight kg, wind kt with direction and runway heading in °,
/// elevation ft, QNH hPa, OAT °C, slope signed % (negative downhill),
/// approach speed kt.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandingInputs {
    pub weight: f64,
    pub flaps: FlapsConfig,
    pub condition: RunwayCondition,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub runway_heading: f64,
    pub elevation: f64,
    pub qnh: f64,
    pub oat: f64,
    pub slope: f64,
    pub reverse_thrust: bool,
    pub overweight_procedure: bool,
    pub autoland: bool,
    pub approach_speed: f64,
}

/// Landing distance required per autobrake mode, in m.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandingDistances {
    pub max_autobrake: f64,
    pub medium_autobrake: f64,
    pub low_autobrake: f64,
}

/// The target approach speed Vls for a flap setting and weight.
///
/// Below the table's lowest weight the speed follows the square root of
/// the weight ratio, floored so pathologically light weights do not
/// produce unflyable speeds.
pub(crate) fn approach_speed(data: &AircraftData, flaps: FlapsConfig, weight: f64) -> f64 {
    let table = match flaps {
        FlapsConfig::Full => &data.landing.vls_full,
        FlapsConfig::Conf3 => &data.landing.vls_conf3,
    };
    if weight < table.min_key() {
        let ratio = (weight / table.min_key()).max(data.landing.vls_floor_ratio);
        return table.first_value() * ratio.sqrt();
    }
    table.lookup(weight)
}

/// Computes the landing distance for every autobrake mode.
pub(crate) fn calculate_distances(data: &AircraftData, inputs: &LandingInputs) -> LandingDistances {
    let rows = &data.landing.conditions[inputs.condition.landing_index()];
    let per_flap = match inputs.flaps {
        FlapsConfig::Full => &rows.full,
        FlapsConfig::Conf3 => &rows.conf3,
    };

    LandingDistances {
        max_autobrake: distance(data, inputs, &per_flap[AutobrakeMode::Max.index()]),
        medium_autobrake: distance(data, inputs, &per_flap[AutobrakeMode::Medium.index()]),
        low_autobrake: distance(data, inputs, &per_flap[AutobrakeMode::Low.index()]),
    }
}

fn distance(data: &AircraftData, inputs: &LandingInputs, row: &LandingRow) -> f64 {
    let pressure_alt =
        inputs.elevation + 145442.15 * (1.0 - (inputs.qnh / 1013.25).powf(0.190263));
    let isa_temp = 15.0 - 0.0019812 * pressure_alt;

    let delta_heading = ((inputs.wind_direction - inputs.runway_heading).abs() % 360.0).to_radians();
    let tailwind = ((PI - delta_heading).cos() * inputs.wind_speed.abs()).max(0.0);

    let weight_delta = inputs.weight / 1000.0 - row.ref_weight_t;
    let d_weight = if weight_delta >= 0.0 {
        row.weight_above * weight_delta
    } else {
        row.weight_below * weight_delta.abs()
    };

    let target = approach_speed(data, inputs.flaps, inputs.weight);
    let d_speed = (inputs.approach_speed - target).max(0.0) / 5.0 * row.speed;
    let d_wind = tailwind / 5.0 * row.wind;
    let d_reverse = if inputs.reverse_thrust {
        row.reverser * 2.0
    } else {
        0.0
    };
    let d_altitude = (pressure_alt / 1000.0).max(0.0) * row.altitude;
    let d_slope = (-inputs.slope).max(0.0) * row.slope;
    let d_temperature = (inputs.oat - isa_temp).max(0.0) / 10.0 * row.temperature;
    let d_overweight = if inputs.overweight_procedure {
        row.overweight
    } else {
        0.0
    };
    let d_autoland = if inputs.autoland {
        match inputs.flaps {
            FlapsConfig::Full => data.landing.autoland_full,
            FlapsConfig::Conf3 => data.landing.autoland_conf3,
        }
    } else {
        0.0
    };

    (row.ref_distance
        + d_weight
        + d_speed
        + d_wind
        + d_reverse
        + d_altitude
        + d_slope
        + d_temperature
        + d_overweight
        + d_autoland)
        * data.landing.margin
}
