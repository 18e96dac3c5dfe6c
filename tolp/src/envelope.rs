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

//! Weight-and-balance envelope validation.
//!
//! The published MTOW, MZFW and MLW envelopes are closed polygons over
//! (CG %MAC, weight); a loading is acceptable when its point lies inside
//! all of them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithm::{self, Point};
use crate::data::AircraftData;

/// One of the published weight envelopes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnvelopeKind {
    Mtow,
    Mzfw,
    Mlw,
}

/// The result of a CG/weight envelope check.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvelopeCheck {
    pub ok: bool,
    /// The envelopes the point falls outside of.
    pub failing: Vec<EnvelopeKind>,
}

/// A violated gross-weight relation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightViolation {
    ExceedsStructuralMtow,
    ExceedsMzfw,
    BelowOew,
    /// Gross weight does not equal zero-fuel weight plus fuel.
    GrossWeightMismatch,
}

/// The result of a gross-weight consistency check.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightCheck {
    pub ok: bool,
    pub violations: Vec<WeightViolation>,
}

fn contains(polygon: &[(f64, f64)], cg_percent_mac: f64, weight: f64) -> bool {
    let vertices: Vec<Point> = polygon.iter().map(|&(x, y)| Point { x, y }).collect();
    algorithm::point_in_polygon(
        &Point {
            x: cg_percent_mac,
            y: weight,
        },
        &vertices,
    )
}

/// Checks a loading point against all published envelopes.
pub(crate) fn check_performance_envelope(
    data: &AircraftData,
    cg_percent_mac: f64,
    weight: f64,
) -> EnvelopeCheck {
    let mut failing = Vec::new();
    for (kind, polygon) in [
        (EnvelopeKind::Mtow, &data.envelopes.mtow),
        (EnvelopeKind::Mzfw, &data.envelopes.mzfw),
        (EnvelopeKind::Mlw, &data.envelopes.mlw),
    ] {
        if !contains(polygon, cg_percent_mac, weight) {
            failing.push(kind);
        }
    }
    EnvelopeCheck {
        ok: failing.is_empty(),
        failing,
    }
}

/// Checks the gross-weight relations, reporting every violation.
pub(crate) fn check_weights(
    data: &AircraftData,
    gross_weight: f64,
    zero_fuel_weight: f64,
    fuel: f64,
) -> WeightCheck {
    let mut violations = Vec::new();
    if gross_weight > data.structural.mtow {
        violations.push(WeightViolation::ExceedsStructuralMtow);
    }
    if zero_fuel_weight > data.structural.mzfw {
        violations.push(WeightViolation::ExceedsMzfw);
    }
    if gross_weight < data.structural.oew {
        violations.push(WeightViolation::BelowOew);
    }
    if (gross_weight - (zero_fuel_weight + fuel)).abs() > 1.0 {
        violations.push(WeightViolation::GrossWeightMismatch);
    }
    WeightCheck {
        ok: violations.is_empty(),
        violations,
    }
}

/// Whether the CG lies between the weight-indexed forward and aft limits.
pub(crate) fn cg_within_limits(data: &AircraftData, cg_percent_mac: f64, tow: f64) -> bool {
    let [forward, aft] = data.envelopes.cg_limits.lookup(tow);
    (forward..=aft).contains(&cg_percent_mac)
}

/// Converts a longitudinal CG position to percent of the mean aerodynamic
/// chord.
pub fn compute_cg_percent_mac(position_m: f64, mac_start_m: f64, mac_length_m: f64) -> f64 {
    100.0 * (position_m - mac_start_m) / mac_length_m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mid_envelope_point_passes_all_checks() {
        let data = AircraftData::widebody();
        let check = check_performance_envelope(&data, 31.0, 370_000.0);
        assert!(check.ok, "failing: {:?}", check.failing);
    }

    #[test]
    fn far_aft_point_fails_all_checks() {
        let data = AircraftData::widebody();
        let check = check_performance_envelope(&data, 45.0, 370_000.0);
        assert!(!check.ok);
        assert_eq!(
            check.failing,
            vec![EnvelopeKind::Mtow, EnvelopeKind::Mzfw, EnvelopeKind::Mlw]
        );
    }

    #[test]
    fn weight_checks_collect_every_violation() {
        let data = AircraftData::widebody();
        let ok = check_weights(&data, 380_000.0, 350_000.0, 30_000.0);
        assert!(ok.ok);

        let bad = check_weights(&data, 520_000.0, 380_000.0, 100_000.0);
        assert!(!bad.ok);
        assert_eq!(
            bad.violations,
            vec![
                WeightViolation::ExceedsStructuralMtow,
                WeightViolation::ExceedsMzfw,
                WeightViolation::GrossWeightMismatch,
            ]
        );
    }

    #[test]
    fn cg_limits_narrow_with_weight() {
        let data = AircraftData::widebody();
        assert!(cg_within_limits(&data, 32.0, 380_000.0));
        assert!(!cg_within_limits(&data, 29.1, 500_000.0));
        assert!(cg_within_limits(&data, 29.1, 260_000.0));
    }

    #[test]
    fn percent_mac_round_trips() {
        let mac_start = 30.5;
        let mac_length = 12.2;
        for x in [-0.5, 0.0, 0.25, 0.62, 1.0, 1.8] {
            assert_relative_eq!(
                compute_cg_percent_mac(mac_start + x * mac_length, mac_start, mac_length),
                100.0 * x,
                epsilon = 1e-9
            );
        }
    }
}
