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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::AircraftData;
use crate::types::LineupAngle;

/// The operating environment derived once from the raw request.
///
/// Every correction kernel reads from this struct; nothing downstream goes
/// back to the raw inputs.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Environment {
    /// ISA temperature at field elevation in °C.
    pub isa_temp: f64,
    /// Pressure altitude in ft.
    pub pressure_alt: f64,
    /// Flat-rating reference temperature in °C.
    pub t_ref: f64,
    /// Maximum permissible outside air temperature in °C.
    pub t_max: f64,
    /// Ceiling for the assumed flexible temperature in °C.
    pub t_flex_max: f64,
    /// Takeoff run available after the lineup correction in m.
    pub adjusted_tora: f64,
    /// Wind component along the runway in kt, headwind capped at the
    /// maximum credited value; tailwinds stay negative.
    pub headwind: f64,
}

impl Environment {
    /// Resolves the environment from the raw request.
    pub fn resolve(
        data: &AircraftData,
        elevation: f64,
        qnh: f64,
        wind: f64,
        lineup: LineupAngle,
        tora: f64,
    ) -> Self {
        let isa_temp = 15.0 - 0.0019812 * elevation;
        let pressure_alt = elevation + 145442.15 * (1.0 - (qnh / 1013.25).powf(0.190263));

        Self {
            isa_temp,
            pressure_alt,
            t_ref: data.t_ref.lookup(elevation),
            t_max: data.t_max.lookup(pressure_alt),
            t_flex_max: isa_temp + 59.0,
            adjusted_tora: tora - data.lineup_distance[lineup.index()],
            headwind: wind.min(data.operational.max_headwind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standard_pressure_keeps_elevation() {
        let data = AircraftData::widebody();
        let env = Environment::resolve(&data, 1234.0, 1013.25, 0.0, LineupAngle::Straight, 3000.0);
        assert_relative_eq!(env.pressure_alt, 1234.0, epsilon = 1e-6);
        assert_relative_eq!(env.isa_temp, 15.0 - 0.0019812 * 1234.0);
    }

    #[test]
    fn low_pressure_raises_pressure_altitude() {
        let data = AircraftData::widebody();
        let env = Environment::resolve(&data, 0.0, 990.0, 0.0, LineupAngle::Straight, 3000.0);
        assert!(env.pressure_alt > 600.0 && env.pressure_alt < 700.0);
    }

    #[test]
    fn lineup_turn_shortens_the_run() {
        let data = AircraftData::widebody();
        let straight =
            Environment::resolve(&data, 0.0, 1013.25, 0.0, LineupAngle::Straight, 3000.0);
        let back = Environment::resolve(&data, 0.0, 1013.25, 0.0, LineupAngle::Turn180, 3000.0);
        assert!(back.adjusted_tora < straight.adjusted_tora);
        assert_eq!(straight.adjusted_tora, 3000.0);
    }

    #[test]
    fn headwind_is_capped_tailwind_is_not() {
        let data = AircraftData::widebody();
        let head = Environment::resolve(&data, 0.0, 1013.25, 80.0, LineupAngle::Straight, 3000.0);
        assert_eq!(head.headwind, data.operational.max_headwind);
        let tail = Environment::resolve(&data, 0.0, 1013.25, -12.0, LineupAngle::Straight, 3000.0);
        assert_eq!(tail.headwind, -12.0);
    }

    #[test]
    fn flex_ceiling_follows_isa() {
        let data = AircraftData::widebody();
        let env = Environment::resolve(&data, 0.0, 1013.25, 0.0, LineupAngle::Straight, 3000.0);
        assert_relative_eq!(env.t_flex_max, 74.0);
    }
}
