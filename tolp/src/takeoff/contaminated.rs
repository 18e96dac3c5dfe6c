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

//! Wet- and contaminated-runway adjustments.
//!
//! A wet runway keeps the dry solver and applies tabulated reductions to
//! TOW, flex and the V-speeds; the reductions branch on whether the
//! outside air temperature is above Tvmcg, the threshold above which a wet
//! takeoff becomes control-speed limited. Contaminated runways replace the
//! dry MTOW and V-speeds with their own tables.

use crate::data::{Contaminant, TakeoffData, WetData};
use crate::environment::Environment;
use crate::error::CalcError;

/// The temperature above which a wet takeoff is Vmcg-limited.
pub(crate) fn tvmcg(takeoff: &TakeoffData, conf_index: usize, env: &Environment) -> f64 {
    let [gain, offset] = takeoff.tvmcg[conf_index].lookup(env.headwind);
    gain * (env.adjusted_tora - env.pressure_alt / 10.0) + offset
}

fn wet_l(env: &Environment) -> f64 {
    env.adjusted_tora - env.pressure_alt / 20.0
}

/// The wet-runway TOW reduction in kg, never positive.
///
/// Two affine forms cover the short- and long-field regimes; the larger
/// reduction wins.
pub(crate) fn wet_tow_delta(
    wet: &WetData,
    conf_index: usize,
    env: &Environment,
    above_tvmcg: bool,
) -> f64 {
    let table = if above_tvmcg {
        &wet.tow_above[conf_index]
    } else {
        &wet.tow_below[conf_index]
    };
    let [m1, b1, m2, b2] = table.lookup(env.headwind);
    let l = wet_l(env);
    (m1 * l + b1).min(m2 * l + b2).min(0.0)
}

/// The wet-runway V-speed deltas `[ΔV1, ΔVr, ΔV2]` in kt.
pub(crate) fn wet_speed_delta(
    wet: &WetData,
    conf_index: usize,
    env: &Environment,
    above_tvmcg: bool,
) -> [f64; 3] {
    let table = if above_tvmcg {
        &wet.speeds_above[conf_index]
    } else {
        &wet.speeds_below[conf_index]
    };
    table.lookup(env.headwind)
}

/// Maps the dry MTOW onto the contaminated runway.
///
/// The per-condition weight correction moves the dry MTOW to the
/// *corrected* weight; the contaminated tables then map that onto the
/// contaminated MTOW. Below the table minimum the condition admits no
/// takeoff at this weight class.
pub(crate) fn contaminated_mtow(
    contaminant: &Contaminant,
    conf_index: usize,
    env: &Environment,
    dry_mtow: f64,
) -> Result<f64, CalcError> {
    let corrected = dry_mtow - contaminant.weight_correction[conf_index].lookup(env.adjusted_tora);
    if corrected < contaminant.min_corrected {
        return Err(CalcError::TooLight);
    }
    Ok(contaminant.mtow[conf_index].lookup(corrected))
}

/// The contaminated V-speeds `[v1, vr, v2]` read straight from the
/// condition's weight-indexed vectors.
pub(crate) fn contaminated_speeds(
    contaminant: &Contaminant,
    conf_index: usize,
    tow: f64,
) -> [f64; 3] {
    contaminant.v_speeds[conf_index].lookup(tow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AircraftData;
    use crate::types::{LineupAngle, RunwayCondition};

    fn setup() -> (AircraftData, Environment) {
        let data = AircraftData::widebody();
        let env = Environment::resolve(&data, 0.0, 1013.25, 0.0, LineupAngle::Straight, 3500.0);
        (data, env)
    }

    #[test]
    fn tvmcg_grows_with_runway_length() {
        let data = AircraftData::widebody();
        let short = Environment::resolve(&data, 0.0, 1013.25, 0.0, LineupAngle::Straight, 2000.0);
        let long = Environment::resolve(&data, 0.0, 1013.25, 0.0, LineupAngle::Straight, 4000.0);
        assert!(tvmcg(&data.takeoff, 1, &short) < tvmcg(&data.takeoff, 1, &long));
    }

    #[test]
    fn wet_reduction_is_never_a_bonus() {
        let (data, env) = setup();
        for conf in 0..3 {
            for above in [true, false] {
                assert!(wet_tow_delta(&data.takeoff.wet, conf, &env, above) <= 0.0);
            }
        }
    }

    #[test]
    fn vmcg_limited_branch_cuts_deeper() {
        let (data, env) = setup();
        let above = wet_tow_delta(&data.takeoff.wet, 1, &env, true);
        let below = wet_tow_delta(&data.takeoff.wet, 1, &env, false);
        assert!(above < below);
    }

    #[test]
    fn deep_slush_rejects_the_low_corrected_weight() {
        let (data, env) = setup();
        let index = RunwayCondition::Slush13mm
            .contaminant_index()
            .expect("contaminated");
        let contaminant = &data.takeoff.contaminants[index];
        // a dry MTOW barely above the correction lands below the minimum
        let low = contaminant.min_corrected
            + contaminant.weight_correction[2].lookup(env.adjusted_tora)
            - 1000.0;
        assert_eq!(
            contaminated_mtow(contaminant, 2, &env, low),
            Err(CalcError::TooLight)
        );
        let high = low + 2000.0;
        assert!(contaminated_mtow(contaminant, 2, &env, high).is_ok());
    }

    #[test]
    fn contaminated_mtow_stays_below_the_corrected_weight() {
        let (data, env) = setup();
        for contaminant in &data.takeoff.contaminants {
            let mapped = contaminated_mtow(contaminant, 1, &env, 460_000.0);
            if let Ok(mtow) = mapped {
                assert!(mtow < 460_000.0);
            }
        }
    }
}
