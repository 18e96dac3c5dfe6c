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

//! The flex-temperature search.
//!
//! Flex is the highest assumed temperature at which the takeoff weight
//! still clears every limit; commanding thrust for that temperature
//! derates the takeoff. The search picks one of three brackets from the
//! limit bracket that contains the TOW and scans it in whole degrees. The
//! scan is bounded by the bracket widths, at most a few dozen iterations.

use crate::data::AircraftData;
use crate::environment::Environment;
use crate::types::{AntiIce, LimitingFactor};

use super::corrections;
use super::limits::{GoverningFactors, LimitWeights, TempAnchor};

/// The retained flex temperature and the side of the bracket that bound
/// it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct FlexResult {
    pub temperature: i32,
    pub limiting_factor: LimitingFactor,
}

/// Searches the highest admissible flex temperature.
///
/// `wet_above_tvmcg` is `None` on a dry runway and carries the Tvmcg
/// branch on a wet one. Returns `None` when flex is not available: the TOW
/// sits above the Tref limit, or the adjusted result would not exceed the
/// actual outside air temperature.
#[allow(clippy::too_many_arguments)]
pub(crate) fn search(
    data: &AircraftData,
    conf_index: usize,
    env: &Environment,
    limits: &[LimitWeights; 4],
    governing: &GoverningFactors,
    tow: f64,
    oat: f64,
    anti_ice: AntiIce,
    packs: bool,
    wet_above_tvmcg: Option<bool>,
) -> Option<FlexResult> {
    if tow >= limits[governing.t_ref.index()].anchor(TempAnchor::TRef).limit {
        return None;
    }

    let g_tmax = governing.t_max;
    let g_tflex = governing.t_flex_max;
    let (lo, hi, from, to) = if tow
        > limits[g_tmax.index()].anchor(TempAnchor::TMax).limit_no_bleed
    {
        (env.t_ref, env.t_max, governing.t_ref, g_tmax)
    } else if tow
        > limits[g_tflex.index()]
            .anchor(TempAnchor::TFlexMax)
            .limit_no_bleed
    {
        (env.t_max, env.t_flex_max, g_tmax, g_tflex)
    } else {
        (env.t_flex_max, env.t_flex_max + 8.0, g_tflex, g_tflex)
    };

    let mut best: Option<(i32, LimitingFactor)> = None;
    for t in (lo.ceil() as i32)..=(hi.floor() as i32) {
        // above the ceiling the kernels are undefined; the headroom the
        // scan finds there survives until the bleed decrements below
        let anchor = (t as f64).min(env.t_flex_max);

        let mut tightest = f64::INFINITY;
        let mut tightest_factor = from;
        for factor in bracket_factors(from, to) {
            let family = &data.takeoff.families[factor.index()];
            let conf = &family.confs[conf_index];
            let l = corrections::characteristic_length(family, env);
            let temp_delta = corrections::temperature_correction(conf, env, l, anchor)
                .expect("scan anchor is clamped to the flex ceiling");
            let wind_delta = corrections::wind_correction(conf, env, l, anchor);
            let candidate = limits[factor.index()].alt_limit - temp_delta - wind_delta;
            if candidate < tightest {
                tightest = candidate;
                tightest_factor = factor;
            }
        }

        if tow <= tightest {
            best = Some((t, tightest_factor));
        }
    }

    let (retained, limiting_factor) = best?;

    let decrement = &data.takeoff.flex_decrement;
    let mut flex = retained;
    match anti_ice {
        AntiIce::Off => {}
        AntiIce::Engine => flex -= decrement.engine_anti_ice as i32,
        AntiIce::EngineWing => flex -= decrement.engine_wing_anti_ice as i32,
    }
    if packs {
        flex -= decrement.packs as i32;
    }
    flex = flex.min(env.t_flex_max as i32);

    if let Some(above) = wet_above_tvmcg {
        let wet = &data.takeoff.wet;
        let table = if above {
            &wet.flex_above[conf_index]
        } else {
            &wet.flex_below[conf_index]
        };
        let [gain, offset] = table.lookup(env.headwind);
        let l = env.adjusted_tora - env.pressure_alt / 20.0;
        let delta = (gain * l + offset).min(0.0);
        flex = (flex as f64 + delta) as i32;
    }

    if (flex as f64) > oat {
        Some(FlexResult {
            temperature: flex,
            limiting_factor,
        })
    } else {
        None
    }
}

/// The factors of the bracket in tie-break order.
fn bracket_factors(from: LimitingFactor, to: LimitingFactor) -> impl Iterator<Item = LimitingFactor> {
    let second = if from == to { None } else { Some(to.max(from)) };
    std::iter::once(to.min(from)).chain(second)
}
