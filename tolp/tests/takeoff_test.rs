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

use approx::assert_relative_eq;
use tolp::prelude::*;

fn calculator() -> PerformanceCalculator {
    PerformanceCalculator::default()
}

/// A 380 t takeoff from a 3500 m sea-level runway on a benign day.
fn benign_inputs() -> TakeoffInputs {
    let mut inputs = TakeoffInputs::new(380_000.0, TakeoffConfig::Conf2, 3500.0);
    inputs.lineup = LineupAngle::Turn90;
    inputs.wind = 10.0;
    inputs.packs = true;
    inputs.cg = Some(32.0);
    inputs
}

#[test]
fn dry_benign_day_flexes() {
    let analysis = calculator().calculate(&benign_inputs());

    assert_eq!(analysis.error, None);
    assert_relative_eq!(analysis.mtow.expect("solved"), 459_792.0, epsilon = 1e-6);

    // on a 15 °C day the whole assumed-temperature band is usable
    let flex = analysis.flex.expect("flex is available");
    assert!(flex > 15);
    assert_eq!(flex, 74);

    let v = analysis.speeds.expect("speeds are solved");
    assert!(v.v2 >= 150);
    assert_eq!((v.v1, v.vr, v.v2), (143, 149, 155));
    assert!(v.v1 <= v.vr && v.vr <= v.v2);

    // the CG was supplied, so the trim hint is populated
    assert_relative_eq!(analysis.stab_trim.expect("cg supplied"), 3.5);
}

#[test]
fn structural_weight_on_a_stub_runway_is_too_heavy() {
    let mut inputs = benign_inputs();
    inputs.tow = 512_000.0;
    inputs.tora = 1200.0;
    let analysis = calculator().calculate(&inputs);

    assert_eq!(analysis.error, Some(CalcError::TooHeavy));
    assert!(analysis.mtow.expect("limits are solved") < inputs.tow);
}

#[test]
fn cold_short_field_is_control_speed_limited() {
    let mut inputs = TakeoffInputs::new(320_000.0, TakeoffConfig::Conf1, 1800.0);
    inputs.elevation = 4000.0;
    inputs.qnh = 1013.0;
    inputs.oat = -20.0;
    let analysis = calculator().calculate(&inputs);

    assert_eq!(analysis.error, None);
    let factors = analysis.limiting_factors.expect("limits are solved");
    assert!(matches!(
        factors.oat,
        LimitingFactor::Vmcg | LimitingFactor::Runway
    ));
    // the Tref limit already sits below the TOW, so no flex is offered
    assert_eq!(analysis.flex, None);

    let v = analysis.speeds.expect("speeds are solved");
    assert_eq!((v.v1, v.vr, v.v2), (135, 142, 149));
}

#[test]
fn deep_slush_rejects_a_light_takeoff() {
    let mut inputs = TakeoffInputs::new(305_000.0, TakeoffConfig::Conf3, 3500.0);
    inputs.qnh = 1013.0;
    inputs.oat = 10.0;
    inputs.condition = RunwayCondition::Slush13mm;
    let analysis = calculator().calculate(&inputs);

    assert_eq!(analysis.error, Some(CalcError::TooLight));
    assert_eq!(analysis.speeds, None);
}

#[test]
fn force_toga_assumes_the_worst_credited_wind() {
    let mut toga = TakeoffInputs::new(400_000.0, TakeoffConfig::Conf2, 3000.0);
    toga.wind = 20.0;
    toga.packs = true;
    toga.force_toga = true;

    let mut manual = toga.clone();
    manual.wind = -15.0;
    manual.force_toga = false;

    let calculator = calculator();
    let toga_analysis = calculator.calculate(&toga);
    let manual_analysis = calculator.calculate(&manual);

    assert_eq!(toga_analysis.error, None);
    assert_eq!(toga_analysis.speeds, manual_analysis.speeds);
    assert_eq!(toga_analysis.mtow, manual_analysis.mtow);
    assert_eq!(toga_analysis.flex, None);
    // the request is echoed unmodified
    assert_eq!(toga_analysis.inputs.wind, 20.0);
    assert!(toga_analysis.inputs.force_toga);
}

#[test]
fn optimal_config_maximizes_flex() {
    let mut inputs = TakeoffInputs::new(420_000.0, TakeoffConfig::Conf1, 3000.0);
    inputs.oat = 25.0;
    inputs.packs = true;

    let calculator = calculator();
    let best = calculator.calculate_optimal_config(&inputs);
    assert_eq!(best.error, None);

    for conf in TakeoffConfig::ALL {
        let mut attempt = inputs.clone();
        attempt.conf = conf;
        let analysis = calculator.calculate(&attempt);
        if analysis.error.is_none() {
            let attempt_flex = analysis.flex.unwrap_or(i32::MIN);
            let best_flex = best.flex.unwrap_or(i32::MIN);
            assert!(best_flex >= attempt_flex);
            if best_flex == attempt_flex {
                assert!(
                    best.speeds.expect("solved").v1 <= analysis.speeds.expect("solved").v1
                );
            }
        }
    }

    // at this weight the lightest flap setting cannot lift off the field
    let mut conf1 = inputs.clone();
    conf1.conf = TakeoffConfig::Conf1;
    assert_eq!(
        calculator.calculate(&conf1).error,
        Some(CalcError::TooHeavy)
    );
    assert_eq!(best.inputs.conf, TakeoffConfig::Conf3);
}

#[test]
fn hot_short_field_flexes_inside_the_flat_rating() {
    // TOW between the Tmax and Tref limits scans the first bracket
    let mut inputs = TakeoffInputs::new(280_000.0, TakeoffConfig::Conf2, 1500.0);
    inputs.oat = 30.0;
    let analysis = calculator().calculate(&inputs);

    assert_eq!(analysis.error, None);
    assert_eq!(
        analysis.limiting_factors.expect("solved").oat,
        LimitingFactor::Runway
    );
    assert_eq!(analysis.flex, Some(51));
    assert_eq!(analysis.flex_limiting_factor, Some(LimitingFactor::Runway));
}

#[test]
fn tailwind_vmcg_limit_matches_the_hand_computed_chain() {
    // Conf 2, 3500 m, sea level, 10 kt tailwind, OAT 25 °C (below the
    // 46 °C Tref). The Vmcg chain is:
    //   base        60 kg/m · 3500 m + 252 000 kg            = 462 000 kg
    //   temperature 1000 · 0.05 · (25 − 15)                  =     500 kg
    //   wind        1000 · (3500 · −4e-5 − 1.6) · −10        =  17 400 kg
    // with no ISA-to-Tref wind segment on the tail branch, so the limit
    // is 462 000 − 500 − 17 400 = 444 100 kg and governs the MTOW.
    let mut inputs = TakeoffInputs::new(380_000.0, TakeoffConfig::Conf2, 3500.0);
    inputs.wind = -10.0;
    inputs.oat = 25.0;
    let analysis = calculator().calculate(&inputs);

    assert_eq!(analysis.error, None);
    assert_eq!(
        analysis.limiting_factors.expect("solved").oat,
        LimitingFactor::Vmcg
    );
    assert_relative_eq!(analysis.mtow.expect("solved"), 444_100.0, epsilon = 1e-6);
}

#[test]
fn wet_runway_cuts_weight_flex_and_decision_speed() {
    let calculator = calculator();
    let dry = calculator.calculate(&benign_inputs());

    let mut wet_inputs = benign_inputs();
    wet_inputs.condition = RunwayCondition::Wet;
    let wet = calculator.calculate(&wet_inputs);

    assert_eq!(wet.error, None);
    assert_relative_eq!(wet.mtow.expect("solved"), 455_870.0, epsilon = 1e-6);
    assert!(wet.mtow < dry.mtow);
    assert_eq!(wet.flex, Some(73));
    assert!(wet.flex <= dry.flex);
    assert!(wet.speeds.expect("solved").v1 < dry.speeds.expect("solved").v1);
}

#[test]
fn validation_raises_the_exact_error_code() {
    let calculator = calculator();
    let cases: Vec<(Box<dyn Fn(&mut TakeoffInputs)>, CalcError)> = vec![
        (Box::new(|i| i.tora = -100.0), CalcError::InvalidData),
        (Box::new(|i| i.qnh = f64::NAN), CalcError::InvalidData),
        (Box::new(|i| i.tow = 513_000.0), CalcError::StructuralMtow),
        (Box::new(|i| i.elevation = 14_000.0), CalcError::MaxPressureAlt),
        (Box::new(|i| i.oat = 60.0), CalcError::MaxTemperature),
        (Box::new(|i| i.tow = 250_000.0), CalcError::Oew),
        (Box::new(|i| i.cg = Some(50.0)), CalcError::CgOutOfLimits),
        (Box::new(|i| i.wind = -20.0), CalcError::MaxTailwind),
        (Box::new(|i| i.slope = 2.5), CalcError::MaxSlope),
    ];

    for (mutate, expected) in cases {
        let mut inputs = TakeoffInputs::new(380_000.0, TakeoffConfig::Conf2, 3500.0);
        mutate(&mut inputs);
        let analysis = calculator.calculate(&inputs);
        assert_eq!(analysis.error, Some(expected));
        // validation failures never produce limit weights
        assert_eq!(analysis.limits, None);
        assert_eq!(analysis.speeds, None);
    }
}

#[test]
fn longer_runways_never_cost_weight() {
    let calculator = calculator();
    let mut previous = None;
    for tora in [1500.0, 2000.0, 2500.0, 3000.0, 3500.0, 4000.0, 4500.0, 5000.0] {
        let mut inputs = TakeoffInputs::new(300_000.0, TakeoffConfig::Conf2, tora);
        inputs.oat = 20.0;
        inputs.packs = true;
        let mtow = calculator.calculate(&inputs).mtow.expect("solved");
        if let Some(previous) = previous {
            assert!(mtow >= previous, "mtow regressed at tora {tora}");
        }
        previous = Some(mtow);
    }
}

#[test]
fn warmer_days_never_gain_weight() {
    let calculator = calculator();
    let mut previous: Option<f64> = None;
    for oat in (-40..=55).step_by(5) {
        let mut inputs = TakeoffInputs::new(300_000.0, TakeoffConfig::Conf2, 3500.0);
        inputs.oat = oat as f64;
        inputs.packs = true;
        let mtow = calculator.calculate(&inputs).mtow.expect("solved");
        if let Some(previous) = previous {
            assert!(mtow <= previous, "mtow grew at oat {oat}");
        }
        previous = Some(mtow);
    }
}

#[test]
fn headwind_helps_tailwind_hurts() {
    let calculator = calculator();
    let mut previous: Option<f64> = None;
    for wind in [-15.0, -10.0, -5.0, 0.0, 10.0, 20.0, 30.0, 45.0] {
        let mut inputs = TakeoffInputs::new(300_000.0, TakeoffConfig::Conf2, 2500.0);
        inputs.wind = wind;
        let mtow = calculator.calculate(&inputs).mtow.expect("solved");
        if let Some(previous) = previous {
            assert!(mtow >= previous, "mtow regressed at wind {wind}");
        }
        previous = Some(mtow);
    }
}

#[test]
fn downhill_slope_reduces_mtow() {
    let calculator = calculator();
    let mut inputs = TakeoffInputs::new(300_000.0, TakeoffConfig::Conf2, 3000.0);
    let flat = calculator.calculate(&inputs).mtow.expect("solved");
    inputs.slope = -1.5;
    let downhill = calculator.calculate(&inputs).mtow.expect("solved");
    inputs.slope = 1.5;
    let uphill = calculator.calculate(&inputs).mtow.expect("solved");

    assert!(downhill < flat);
    assert!(uphill > flat);
}

#[test]
fn solved_speeds_are_always_ordered() {
    let calculator = calculator();
    for tow in [280_000.0, 340_000.0, 400_000.0, 460_000.0, 510_000.0] {
        for conf in TakeoffConfig::ALL {
            for tora in [1800.0, 2800.0, 4200.0] {
                for oat in [-10.0, 15.0, 35.0] {
                    let mut inputs = TakeoffInputs::new(tow, conf, tora);
                    inputs.oat = oat;
                    inputs.packs = true;
                    let analysis = calculator.calculate(&inputs);
                    if analysis.error.is_none() {
                        let v = analysis.speeds.expect("solved");
                        assert!(
                            v.v1 <= v.vr && v.vr <= v.v2,
                            "unordered speeds {v:?} at tow {tow} conf {conf:?} \
                             tora {tora} oat {oat}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn mtow_respects_the_structural_bounds() {
    let calculator = calculator();
    for tora in [1500.0, 3000.0, 5000.0] {
        let mut inputs = TakeoffInputs::new(300_000.0, TakeoffConfig::Conf3, tora);
        inputs.wind = 20.0;
        let analysis = calculator.calculate(&inputs);
        let mtow = analysis.mtow.expect("solved");
        assert!(mtow <= 512_000.0);
        assert!(mtow >= 277_000.0);
    }
}

#[test]
fn standard_pressure_keeps_the_field_elevation() {
    let mut inputs = TakeoffInputs::new(380_000.0, TakeoffConfig::Conf2, 3500.0);
    inputs.elevation = 2000.0;
    let analysis = calculator().calculate(&inputs);
    assert_relative_eq!(analysis.environment.pressure_alt, 2000.0, epsilon = 1e-6);
}
