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

use crate::data::AircraftData;
use crate::envelope::{self, EnvelopeCheck, WeightCheck};
use crate::landing::{self, LandingDistances, LandingInputs};
use crate::takeoff::{self, TakeoffAnalysis, TakeoffInputs};
use crate::types::{FlapsConfig, RunwayCondition};

/// The takeoff and landing performance calculator.
///
/// The calculator owns one immutable [`AircraftData`] set; every
/// calculation is a pure function of its request and that data, so a
/// calculator can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use tolp::prelude::*;
///
/// let calculator = PerformanceCalculator::default();
/// let analysis = calculator.calculate(&TakeoffInputs::new(
///     380_000.0,
///     TakeoffConfig::Conf2,
///     3500.0,
/// ));
///
/// assert!(analysis.error.is_none());
/// let v = analysis.speeds.expect("speeds are solved");
/// assert!(v.v1 <= v.vr && v.vr <= v.v2);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PerformanceCalculator {
    data: AircraftData,
}

impl PerformanceCalculator {
    /// Creates a calculator over a dataset.
    pub fn new(data: AircraftData) -> Self {
        Self { data }
    }

    /// The dataset the calculator works from.
    pub fn data(&self) -> &AircraftData {
        &self.data
    }

    /// Runs one takeoff calculation.
    pub fn calculate(&self, inputs: &TakeoffInputs) -> TakeoffAnalysis {
        takeoff::calculate(&self.data, inputs)
    }

    /// Sweeps all takeoff configurations and returns the one with the
    /// highest flex temperature, ties broken by the lower V1. The request's
    /// `conf` field is ignored. When no configuration succeeds the last
    /// attempt is returned.
    pub fn calculate_optimal_config(&self, inputs: &TakeoffInputs) -> TakeoffAnalysis {
        takeoff::calculate_optimal_config(&self.data, inputs)
    }

    /// Whether the CG lies inside the weight-indexed limits.
    pub fn is_cg_within_limits(&self, cg_percent_mac: f64, tow: f64) -> bool {
        envelope::cg_within_limits(&self.data, cg_percent_mac, tow)
    }

    /// The maximum demonstrated crosswind in kt for a runway condition.
    pub fn crosswind_limit(&self, condition: RunwayCondition, oat: f64) -> f64 {
        use RunwayCondition::*;
        match condition {
            Dry | Wet => 35.0,
            // cold compacted snow grips better than snow near the melting
            // point
            CompactedSnow if oat <= -15.0 => 29.0,
            CompactedSnow | DrySnow10mm | DrySnow100mm | WetSnow5mm | WetSnow15mm
            | WetSnow30mm => 25.0,
            Water6mm | Water13mm | Slush6mm | Slush13mm => 20.0,
        }
    }

    /// Computes the landing distance required per autobrake mode.
    pub fn calculate_landing_distances(&self, inputs: &LandingInputs) -> LandingDistances {
        landing::calculate_distances(&self.data, inputs)
    }

    /// The target approach speed Vls for a flap setting and weight.
    pub fn approach_speed(&self, flaps: FlapsConfig, weight: f64) -> f64 {
        landing::approach_speed(&self.data, flaps, weight)
    }

    /// Checks a loading point against the MTOW, MZFW and MLW envelopes.
    pub fn check_performance_envelope(&self, cg_percent_mac: f64, weight: f64) -> EnvelopeCheck {
        envelope::check_performance_envelope(&self.data, cg_percent_mac, weight)
    }

    /// Checks the gross-weight relations.
    pub fn check_weights(&self, gross_weight: f64, zero_fuel_weight: f64, fuel: f64) -> WeightCheck {
        envelope::check_weights(&self.data, gross_weight, zero_fuel_weight, fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crosswind_limits_follow_the_condition_table() {
        let calculator = PerformanceCalculator::default();
        assert_eq!(calculator.crosswind_limit(RunwayCondition::Dry, 30.0), 35.0);
        assert_eq!(calculator.crosswind_limit(RunwayCondition::Wet, -30.0), 35.0);
        assert_eq!(
            calculator.crosswind_limit(RunwayCondition::CompactedSnow, -20.0),
            29.0
        );
        assert_eq!(
            calculator.crosswind_limit(RunwayCondition::CompactedSnow, 0.0),
            25.0
        );
        assert_eq!(
            calculator.crosswind_limit(RunwayCondition::WetSnow30mm, 0.0),
            25.0
        );
        assert_eq!(
            calculator.crosswind_limit(RunwayCondition::Water13mm, -25.0),
            20.0
        );
        assert_eq!(
            calculator.crosswind_limit(RunwayCondition::Slush6mm, 10.0),
            20.0
        );
    }
}
