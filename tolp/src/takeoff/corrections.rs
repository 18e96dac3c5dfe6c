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

//! Correction kernels of the limit-weight solver.
//!
//! Every kernel returns a weight in kg that is *subtracted* from the
//! family's limit chain. The temperature kernel is a continuous
//! piecewise-linear polynomial with breakpoints at Tref and Tmax; above
//! Tflexmax it is undefined and callers must clamp or guard the anchor.

use crate::data::{BleedPenalties, FamilyCoefficients, FamilyTables};
use crate::environment::Environment;
use crate::types::AntiIce;

/// The characteristic length `L = tora − pa/k` of a limit family, or zero
/// for families insensitive to it.
pub(crate) fn characteristic_length(family: &FamilyTables, env: &Environment) -> f64 {
    match family.l_divisor {
        Some(k) => env.adjusted_tora - env.pressure_alt / k,
        None => 0.0,
    }
}

/// Slope correction; downhill slopes (negative) reduce the limit weight.
pub(crate) fn slope_correction(conf: &FamilyCoefficients, env: &Environment, slope: f64) -> f64 {
    1000.0 * conf.slope * env.adjusted_tora * slope
}

/// Pressure-altitude correction.
pub(crate) fn altitude_correction(conf: &FamilyCoefficients, env: &Environment) -> f64 {
    1000.0 * env.pressure_alt * conf.altitude.at(env.pressure_alt)
}

/// Temperature correction at the anchor temperature `t`.
///
/// Returns `None` above the flex ceiling where the polynomial is not
/// defined; inside the ceiling the three segments accumulate.
pub(crate) fn temperature_correction(
    conf: &FamilyCoefficients,
    env: &Environment,
    l: f64,
    t: f64,
) -> Option<f64> {
    if t > env.t_flex_max {
        return None;
    }

    let poly = &conf.temperature;
    let mut delta = 1000.0 * poly.below_ref.at(l) * (t.min(env.t_ref) - env.isa_temp);
    if t > env.t_ref {
        delta += 1000.0 * poly.ref_to_max.at(l) * (t.min(env.t_max) - env.t_ref);
    }
    if t > env.t_max {
        delta += 1000.0 * poly.above_max.at(l) * (t - env.t_max);
    }

    Some(delta)
}

/// Wind correction at the anchor temperature `t`.
///
/// Picks the head- or tailwind branch by the sign of the wind component.
/// A correction whose sign matches the wind's would mean a headwind
/// penalizing or a tailwind helping; that only happens when the polynomial
/// is extrapolated past its fitted range, so it is zeroed.
pub(crate) fn wind_correction(
    conf: &FamilyCoefficients,
    env: &Environment,
    l: f64,
    t: f64,
) -> f64 {
    let wind = env.headwind;
    if wind == 0.0 {
        return 0.0;
    }

    let branch = if wind > 0.0 {
        &conf.wind.head
    } else {
        &conf.wind.tail
    };

    let mut delta = 1000.0 * branch.primary.at(l) * wind;
    delta += 1000.0 * branch.below_ref.at(l) * wind * (t.min(env.t_ref) - env.isa_temp);
    if t > env.t_ref {
        delta += 1000.0 * branch.above_ref.at(l) * wind * (t.min(env.t_max) - env.t_ref);
    }
    if t > env.t_max {
        delta += 1000.0 * branch.above_max.at(l) * wind * (t - env.t_max);
    }

    if (delta > 0.0) == (wind > 0.0) {
        return 0.0;
    }
    delta
}

/// Weight penalty of the bleed consumers.
pub(crate) fn bleed_correction(bleed: &BleedPenalties, anti_ice: AntiIce, packs: bool) -> f64 {
    let mut delta = 0.0;
    if anti_ice == AntiIce::EngineWing {
        delta += bleed.engine_wing_anti_ice;
    }
    if packs {
        delta += bleed.packs;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AircraftData;
    use crate::types::{LimitingFactor, LineupAngle};
    use approx::assert_relative_eq;

    fn env() -> (AircraftData, Environment) {
        let data = AircraftData::widebody();
        let env = Environment::resolve(&data, 0.0, 1013.25, 10.0, LineupAngle::Straight, 3000.0);
        (data, env)
    }

    #[test]
    fn temperature_kernel_is_zero_at_isa() {
        let (data, env) = env();
        let family = &data.takeoff.families[LimitingFactor::Runway.index()];
        let l = characteristic_length(family, &env);
        let delta = temperature_correction(&family.confs[1], &env, l, env.isa_temp);
        assert_relative_eq!(delta.expect("below the ceiling"), 0.0);
    }

    #[test]
    fn temperature_kernel_is_undefined_above_the_ceiling() {
        let (data, env) = env();
        let family = &data.takeoff.families[LimitingFactor::Runway.index()];
        let l = characteristic_length(family, &env);
        assert!(temperature_correction(&family.confs[1], &env, l, env.t_flex_max + 1.0).is_none());
    }

    #[test]
    fn temperature_kernel_is_continuous_at_the_breakpoints() {
        let (data, env) = env();
        let family = &data.takeoff.families[LimitingFactor::SecondSegment.index()];
        let conf = &family.confs[1];
        let l = characteristic_length(family, &env);
        for t in [env.t_ref, env.t_max] {
            let below = temperature_correction(conf, &env, l, t - 1e-9).expect("valid");
            let above = temperature_correction(conf, &env, l, t + 1e-9).expect("valid");
            assert_relative_eq!(below, above, epsilon = 1e-3);
        }
    }

    #[test]
    fn headwind_credits_and_tailwind_penalizes() {
        let (data, mut env) = env();
        let family = &data.takeoff.families[LimitingFactor::Runway.index()];
        let conf = &family.confs[1];
        let l = characteristic_length(family, &env);

        env.headwind = 15.0;
        assert!(wind_correction(conf, &env, l, 15.0) < 0.0);
        env.headwind = -10.0;
        assert!(wind_correction(conf, &env, l, 15.0) > 0.0);
        env.headwind = 0.0;
        assert_eq!(wind_correction(conf, &env, l, 15.0), 0.0);
    }

    #[test]
    fn vmcg_tailwind_has_no_segment_below_t_ref() {
        let data = AircraftData::widebody();
        let mut env =
            Environment::resolve(&data, 0.0, 1013.25, -10.0, LineupAngle::Straight, 3500.0);
        let family = &data.takeoff.families[LimitingFactor::Vmcg.index()];
        let conf = &family.confs[1];
        let l = characteristic_length(family, &env);

        // the tail branch is flat from ISA up to Tref
        let at_isa = wind_correction(conf, &env, l, env.isa_temp);
        let near_ref = wind_correction(conf, &env, l, env.t_ref - 1e-6);
        assert_relative_eq!(at_isa, near_ref);
        assert!(at_isa > 0.0);
        // and picks up its remaining segments above Tref and Tmax
        assert!(wind_correction(conf, &env, l, env.t_ref + 4.0) > near_ref);
        assert!(
            wind_correction(conf, &env, l, env.t_max + 4.0)
                > wind_correction(conf, &env, l, env.t_max)
        );

        // the head branch carries the extra ISA-to-Tref segment
        env.headwind = 10.0;
        let head_at_isa = wind_correction(conf, &env, l, env.isa_temp);
        let head_near_ref = wind_correction(conf, &env, l, env.t_ref - 1e-6);
        assert!((head_at_isa - head_near_ref).abs() > 1.0);
    }

    #[test]
    fn bleed_penalties_accumulate() {
        let (data, _) = env();
        let b = &data.bleed;
        assert_eq!(bleed_correction(b, AntiIce::Off, false), 0.0);
        assert_eq!(bleed_correction(b, AntiIce::Engine, false), 0.0);
        assert_eq!(bleed_correction(b, AntiIce::EngineWing, false), b.engine_wing_anti_ice);
        assert_eq!(
            bleed_correction(b, AntiIce::EngineWing, true),
            b.engine_wing_anti_ice + b.packs
        );
    }
}
