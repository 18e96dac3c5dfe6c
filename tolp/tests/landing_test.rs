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

/// Landing at the reference weight on a standard day with every
/// correction term at zero.
fn reference_inputs() -> LandingInputs {
    let calculator = calculator();
    LandingInputs {
        weight: 350_000.0,
        flaps: FlapsConfig::Full,
        condition: RunwayCondition::Dry,
        wind_speed: 0.0,
        wind_direction: 0.0,
        runway_heading: 0.0,
        elevation: 0.0,
        qnh: 1013.25,
        oat: 15.0,
        slope: 0.0,
        reverse_thrust: false,
        overweight_procedure: false,
        autoland: false,
        approach_speed: calculator.approach_speed(FlapsConfig::Full, 350_000.0),
    }
}

#[test]
fn reference_landing_is_the_margined_table_distance() {
    let distances = calculator().calculate_landing_distances(&reference_inputs());
    // dry, autobrake max, full flap reference distance is 1450 m
    assert_relative_eq!(distances.max_autobrake, 1450.0 * 1.15);
    assert_relative_eq!(distances.medium_autobrake, 1850.0 * 1.15);
    assert_relative_eq!(distances.low_autobrake, 2350.0 * 1.15);
}

#[test]
fn slippery_conditions_need_more_runway() {
    let calculator = calculator();
    let mut inputs = reference_inputs();

    let mut previous = 0.0;
    for condition in [
        RunwayCondition::Dry,
        RunwayCondition::Wet,
        RunwayCondition::CompactedSnow,
        RunwayCondition::Water13mm,
        RunwayCondition::Slush13mm,
    ] {
        inputs.condition = condition;
        let distance = calculator.calculate_landing_distances(&inputs).max_autobrake;
        assert!(
            distance > previous,
            "{condition:?} should out-roll the previous condition"
        );
        previous = distance;
    }
}

#[test]
fn smaller_flaps_land_longer() {
    let calculator = calculator();
    let mut inputs = reference_inputs();
    let full = calculator.calculate_landing_distances(&inputs).max_autobrake;

    inputs.flaps = FlapsConfig::Conf3;
    inputs.approach_speed = calculator.approach_speed(FlapsConfig::Conf3, inputs.weight);
    let conf3 = calculator.calculate_landing_distances(&inputs).max_autobrake;
    assert!(conf3 > full);
}

#[test]
fn heavy_landings_roll_longer_light_ones_shorter() {
    let calculator = calculator();
    let reference = calculator
        .calculate_landing_distances(&reference_inputs())
        .max_autobrake;

    let mut heavy = reference_inputs();
    heavy.weight = 380_000.0;
    heavy.approach_speed = calculator.approach_speed(FlapsConfig::Full, heavy.weight);
    assert!(calculator.calculate_landing_distances(&heavy).max_autobrake > reference);

    let mut light = reference_inputs();
    light.weight = 320_000.0;
    light.approach_speed = calculator.approach_speed(FlapsConfig::Full, light.weight);
    assert!(calculator.calculate_landing_distances(&light).max_autobrake < reference);
}

#[test]
fn altitude_heat_and_autoland_all_add_distance() {
    let calculator = calculator();
    let reference = calculator
        .calculate_landing_distances(&reference_inputs())
        .max_autobrake;

    let mut high = reference_inputs();
    high.elevation = 3000.0;
    // keep the temperature delta out of the picture at altitude
    high.oat = 15.0 - 0.0019812 * 3000.0;
    assert!(calculator.calculate_landing_distances(&high).max_autobrake > reference);

    let mut hot = reference_inputs();
    hot.oat = 35.0;
    assert!(calculator.calculate_landing_distances(&hot).max_autobrake > reference);

    let mut autoland = reference_inputs();
    autoland.autoland = true;
    assert_relative_eq!(
        calculator.calculate_landing_distances(&autoland).max_autobrake,
        reference + 280.0 * 1.15
    );

    let mut overweight = reference_inputs();
    overweight.overweight_procedure = true;
    assert!(calculator.calculate_landing_distances(&overweight).max_autobrake > reference);
}

#[test]
fn quartering_tailwind_costs_less_than_direct_tailwind() {
    let calculator = calculator();
    let mut inputs = reference_inputs();
    inputs.wind_speed = 10.0;

    inputs.wind_direction = 180.0;
    let direct = calculator.calculate_landing_distances(&inputs).max_autobrake;

    inputs.wind_direction = 135.0;
    let quartering = calculator.calculate_landing_distances(&inputs).max_autobrake;

    let calm = calculator
        .calculate_landing_distances(&reference_inputs())
        .max_autobrake;
    assert!(direct > quartering);
    assert!(quartering > calm);
}

#[test]
fn approach_speed_tracks_the_vls_table() {
    let calculator = calculator();
    assert_relative_eq!(
        calculator.approach_speed(FlapsConfig::Full, 350_000.0),
        136.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        calculator.approach_speed(FlapsConfig::Full, 512_000.0),
        163.0,
        epsilon = 1e-9
    );
    // heavier never slows the approach
    let mut previous = 0.0;
    for weight in (270..=512).step_by(20) {
        let vls = calculator.approach_speed(FlapsConfig::Full, weight as f64 * 1000.0);
        assert!(vls >= previous);
        previous = vls;
    }
}
