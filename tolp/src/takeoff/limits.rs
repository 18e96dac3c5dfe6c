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

//! The limit-weight solver.
//!
//! For each limit family the solver walks the correction chain
//! base → slope → altitude → temperature + wind → bleed and stores every
//! intermediate, evaluated at four temperature anchors. The governing
//! factor at an anchor is the family with the smallest limit there.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::{AircraftData, FamilyTables};
use crate::environment::Environment;
use crate::types::LimitingFactor;

use super::corrections;

/// The temperature anchors at which every limit is evaluated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TempAnchor {
    Oat,
    TRef,
    TMax,
    TFlexMax,
}

impl TempAnchor {
    pub const ALL: [Self; 4] = [Self::Oat, Self::TRef, Self::TMax, Self::TFlexMax];

    pub fn index(&self) -> usize {
        match self {
            Self::Oat => 0,
            Self::TRef => 1,
            Self::TMax => 2,
            Self::TFlexMax => 3,
        }
    }
}

/// A family's limit at one temperature anchor.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorLimit {
    /// Limit weight in kg with the bleed penalty applied.
    pub limit: f64,
    /// Limit weight in kg before the bleed penalty.
    pub limit_no_bleed: f64,
    /// The temperature correction that went into this anchor.
    pub temp_delta: f64,
    /// The wind correction that went into this anchor.
    pub wind_delta: f64,
}

/// The full correction chain of one limit family.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimitWeights {
    /// Uncorrected base limit in kg.
    pub base: f64,
    /// After the slope correction.
    pub slope_limit: f64,
    /// After the altitude correction.
    pub alt_limit: f64,
    /// Indexed by [`TempAnchor`].
    pub anchors: [AnchorLimit; 4],
}

impl LimitWeights {
    pub fn anchor(&self, anchor: TempAnchor) -> &AnchorLimit {
        &self.anchors[anchor.index()]
    }
}

/// The governing factor at each temperature anchor.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GoverningFactors {
    pub oat: LimitingFactor,
    pub t_ref: LimitingFactor,
    pub t_max: LimitingFactor,
    pub t_flex_max: LimitingFactor,
}

impl GoverningFactors {
    pub fn at(&self, anchor: TempAnchor) -> LimitingFactor {
        match anchor {
            TempAnchor::Oat => self.oat,
            TempAnchor::TRef => self.t_ref,
            TempAnchor::TMax => self.t_max,
            TempAnchor::TFlexMax => self.t_flex_max,
        }
    }
}

/// The anchor temperatures in [`TempAnchor`] order, clamped to the flex
/// ceiling so the temperature polynomial stays defined.
pub(crate) fn anchor_temperatures(env: &Environment, oat: f64) -> [f64; 4] {
    [
        oat.min(env.t_flex_max),
        env.t_ref.min(env.t_flex_max),
        env.t_max.min(env.t_flex_max),
        env.t_flex_max,
    ]
}

/// Solves the correction chain of one family at all four anchors.
pub(crate) fn solve_family(
    family: &FamilyTables,
    conf_index: usize,
    env: &Environment,
    slope: f64,
    anchor_temps: &[f64; 4],
    bleed_delta: f64,
) -> LimitWeights {
    let conf = &family.confs[conf_index];
    let l = corrections::characteristic_length(family, env);

    let base = conf.base.at(env.adjusted_tora);
    let slope_limit = base - corrections::slope_correction(conf, env, slope);
    let alt_limit = slope_limit - corrections::altitude_correction(conf, env);

    let mut anchors = [AnchorLimit::default(); 4];
    for (slot, &t) in anchors.iter_mut().zip(anchor_temps.iter()) {
        let temp_delta = corrections::temperature_correction(conf, env, l, t)
            .expect("anchors are clamped to the flex ceiling");
        let wind_delta = corrections::wind_correction(conf, env, l, t);
        let limit_no_bleed = alt_limit - temp_delta - wind_delta;
        *slot = AnchorLimit {
            limit: limit_no_bleed - bleed_delta,
            limit_no_bleed,
            temp_delta,
            wind_delta,
        };
    }

    LimitWeights {
        base,
        slope_limit,
        alt_limit,
        anchors,
    }
}

/// Solves all four families.
pub(crate) fn solve_all(
    data: &AircraftData,
    conf_index: usize,
    env: &Environment,
    slope: f64,
    anchor_temps: &[f64; 4],
    bleed_delta: f64,
) -> [LimitWeights; 4] {
    let mut out = [LimitWeights::default(); 4];
    for factor in LimitingFactor::ALL {
        out[factor.index()] = solve_family(
            &data.takeoff.families[factor.index()],
            conf_index,
            env,
            slope,
            anchor_temps,
            bleed_delta,
        );
    }
    out
}

/// The factor with the smallest limit at the anchor; ties go to the
/// lower-ordered factor.
pub(crate) fn governing(limits: &[LimitWeights; 4], anchor: TempAnchor) -> LimitingFactor {
    let mut best = LimitingFactor::Runway;
    let mut best_limit = limits[best.index()].anchor(anchor).limit;
    for factor in LimitingFactor::ALL {
        let limit = limits[factor.index()].anchor(anchor).limit;
        if limit < best_limit {
            best = factor;
            best_limit = limit;
        }
    }
    best
}

pub(crate) fn governing_all(limits: &[LimitWeights; 4]) -> GoverningFactors {
    GoverningFactors {
        oat: governing(limits, TempAnchor::Oat),
        t_ref: governing(limits, TempAnchor::TRef),
        t_max: governing(limits, TempAnchor::TMax),
        t_flex_max: governing(limits, TempAnchor::TFlexMax),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineupAngle;

    #[test]
    fn chain_orders_the_intermediates() {
        let data = AircraftData::widebody();
        let env = Environment::resolve(&data, 2000.0, 1013.25, 0.0, LineupAngle::Straight, 3000.0);
        let temps = anchor_temperatures(&env, 30.0);
        let limits = solve_family(
            &data.takeoff.families[0],
            1,
            &env,
            0.0,
            &temps,
            data.bleed.packs,
        );

        // no slope, so the slope limit equals the base; altitude costs
        assert_eq!(limits.base, limits.slope_limit);
        assert!(limits.alt_limit < limits.slope_limit);
        // hotter anchors cost more
        assert!(limits.anchor(TempAnchor::TRef).limit < limits.anchor(TempAnchor::Oat).limit);
        assert!(limits.anchor(TempAnchor::TMax).limit < limits.anchor(TempAnchor::TRef).limit);
        // bleed penalty applies
        for anchor in TempAnchor::ALL {
            let a = limits.anchor(anchor);
            assert_eq!(a.limit_no_bleed - data.bleed.packs, a.limit);
        }
    }

    #[test]
    fn governing_prefers_the_lower_ordered_factor_on_ties() {
        let mut limits = [LimitWeights::default(); 4];
        for l in &mut limits {
            l.anchors = [AnchorLimit {
                limit: 400_000.0,
                limit_no_bleed: 400_000.0,
                temp_delta: 0.0,
                wind_delta: 0.0,
            }; 4];
        }
        assert_eq!(governing(&limits, TempAnchor::Oat), LimitingFactor::Runway);

        limits[LimitingFactor::Vmcg.index()].anchors[TempAnchor::Oat.index()].limit = 399_000.0;
        assert_eq!(governing(&limits, TempAnchor::Oat), LimitingFactor::Vmcg);
    }
}
