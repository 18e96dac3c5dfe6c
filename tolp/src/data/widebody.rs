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

//! The built-in estimated dataset for a 512 t class wide-body transport.
//!
//! The figures are placeholder-grade estimates assembled for simulation
//! use; they are not derived from certified documents and must not be used
//! for real-world operations. Operators with verified figures can swap the
//! whole dataset through the `serde` feature instead of editing this file.

use crate::lookup::Table2D;
use super::{
    AircraftData, BaseLimit, BleedPenalties, Contaminant, Envelopes, FamilyCoefficients,
    FamilyTables, FlexDecrements, ForwardCg, LandingConditionRows, LandingData, LandingRow,
    LinCoef, OperationalLimits, SpeedData, SpeedKernel, SpeedKernelSet, StabTrim,
    StructuralLimits, TakeoffData, TempPolynomial, WetData, WindBranch, WindPolynomial,
};

fn lin(gain: f64, offset: f64) -> LinCoef {
    LinCoef { gain, offset }
}

impl AircraftData {
    /// The built-in wide-body dataset.
    pub fn widebody() -> Self {
        Self {
            structural: StructuralLimits {
                oew: 277_000.0,
                mtow: 512_000.0,
                mzfw: 373_000.0,
                mlw: 395_000.0,
            },
            operational: OperationalLimits {
                max_pressure_alt: 12_500.0,
                max_tailwind: 15.0,
                max_headwind: 45.0,
                max_slope: 2.0,
                tire_speed: 195.0,
            },
            lineup_distance: [0.0, 40.0, 80.0],
            bleed: BleedPenalties {
                packs: 4500.0,
                engine_wing_anti_ice: 2800.0,
            },
            t_ref: table1d![
                (0.0, 46.0),
                (2000.0, 42.0),
                (4000.0, 38.0),
                (6000.0, 34.0),
                (8000.0, 30.0),
                (10_000.0, 26.0),
                (12_000.0, 22.0),
                (14_000.0, 20.0),
            ],
            t_max: table1d![
                (0.0, 55.0),
                (2000.0, 52.0),
                (4000.0, 49.0),
                (6000.0, 46.0),
                (8000.0, 43.0),
                (10_000.0, 40.0),
                (12_000.0, 37.0),
                (14_000.0, 35.0),
            ],
            takeoff: takeoff(),
            landing: landing(),
            envelopes: envelopes(),
        }
    }
}

fn takeoff() -> TakeoffData {
    TakeoffData {
        families: [
            runway_family(),
            second_segment_family(),
            brake_energy_family(),
            vmcg_family(),
        ],
        tvmcg: [
            vec_table![(-15.0, [0.0042, 21.0]), (0.0, [0.0036, 23.0]), (10.0, [0.0031, 25.0])],
            vec_table![(-15.0, [0.004, 22.0]), (0.0, [0.0035, 24.0]), (10.0, [0.003, 26.0])],
            vec_table![(-15.0, [0.0038, 23.0]), (0.0, [0.0034, 25.0]), (10.0, [0.0029, 27.0])],
        ],
        wet: wet(),
        contaminants: contaminants(),
        speeds: speeds(),
        forward_cg: ForwardCg {
            mtow_gain: [lin(-0.010, 5800.0), lin(-0.011, 6000.0), lin(-0.012, 6200.0)],
            speed_threshold: 473_040.0,
            speed_increment: [[1.0, 1.0, 1.0], [1.0, 1.0, 2.0], [2.0, 1.0, 2.0]],
        },
        flex_decrement: FlexDecrements {
            engine_anti_ice: 2.0,
            engine_wing_anti_ice: 6.0,
            packs: 2.0,
        },
    }
}

/// Field-length limits, tabulated over the adjusted takeoff run.
fn runway_family() -> FamilyTables {
    FamilyTables {
        l_divisor: Some(12.0),
        confs: [
            FamilyCoefficients {
                base: BaseLimit::Table(table1d![
                    (1200.0, 245000.0),
                    (1500.0, 290000.0),
                    (2000.0, 355000.0),
                    (2500.0, 412000.0),
                    (3000.0, 462000.0),
                    (3500.0, 505000.0),
                    (4000.0, 542000.0),
                    (4500.0, 574000.0),
                    (5000.0, 600000.0),
                ]),
                slope: -0.0016,
                altitude: lin(2.1e-07, 0.0031),
                temperature: TempPolynomial {
                    below_ref: lin(2e-05, 0.55),
                    ref_to_max: lin(4e-05, 1.1),
                    above_max: lin(6e-05, 1.6),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(-0.0001, -0.7),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, 0.012),
                        above_max: lin(0.0, 0.02),
                    },
                    tail: WindBranch {
                        primary: lin(-0.0002, -2.4),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, -0.03),
                        above_max: lin(0.0, -0.05),
                    },
                },
            },
            FamilyCoefficients {
                base: BaseLimit::Table(table1d![
                    (1200.0, 258000.0),
                    (1500.0, 305000.0),
                    (2000.0, 370000.0),
                    (2500.0, 427000.0),
                    (3000.0, 476000.0),
                    (3500.0, 518000.0),
                    (4000.0, 554000.0),
                    (4500.0, 585000.0),
                    (5000.0, 610000.0),
                ]),
                slope: -0.0018,
                altitude: lin(2e-07, 0.003),
                temperature: TempPolynomial {
                    below_ref: lin(2e-05, 0.57),
                    ref_to_max: lin(4e-05, 1.14),
                    above_max: lin(6e-05, 1.66),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(-0.0001, -0.72),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, 0.012),
                        above_max: lin(0.0, 0.02),
                    },
                    tail: WindBranch {
                        primary: lin(-0.0002, -2.5),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, -0.03),
                        above_max: lin(0.0, -0.05),
                    },
                },
            },
            FamilyCoefficients {
                base: BaseLimit::Table(table1d![
                    (1200.0, 268000.0),
                    (1500.0, 316000.0),
                    (2000.0, 382000.0),
                    (2500.0, 439000.0),
                    (3000.0, 487000.0),
                    (3500.0, 528000.0),
                    (4000.0, 562000.0),
                    (4500.0, 591000.0),
                    (5000.0, 614000.0),
                ]),
                slope: -0.002,
                altitude: lin(1.9e-07, 0.0029),
                temperature: TempPolynomial {
                    below_ref: lin(2e-05, 0.59),
                    ref_to_max: lin(4e-05, 1.18),
                    above_max: lin(6e-05, 1.72),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(-0.0001, -0.74),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, 0.012),
                        above_max: lin(0.0, 0.02),
                    },
                    tail: WindBranch {
                        primary: lin(-0.0002, -2.6),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, -0.03),
                        above_max: lin(0.0, -0.05),
                    },
                },
            },
        ],
    }
}

/// Climb gradient limits after the first segment.
fn second_segment_family() -> FamilyTables {
    FamilyTables {
        l_divisor: Some(5.0),
        confs: [
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 1.5,
                    offset: 557500.0,
                },
                slope: -0.0002,
                altitude: lin(2.6e-07, 0.0034),
                temperature: TempPolynomial {
                    below_ref: lin(1e-05, 0.85),
                    ref_to_max: lin(2e-05, 1.7),
                    above_max: lin(3e-05, 2.4),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(0.0, -0.25),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, 0.004),
                        above_max: lin(0.0, 0.008),
                    },
                    tail: WindBranch {
                        primary: lin(0.0, -0.9),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, -0.01),
                        above_max: lin(0.0, -0.02),
                    },
                },
            },
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 1.5,
                    offset: 541500.0,
                },
                slope: -0.0002,
                altitude: lin(2.6e-07, 0.0034),
                temperature: TempPolynomial {
                    below_ref: lin(1e-05, 0.88),
                    ref_to_max: lin(2e-05, 1.76),
                    above_max: lin(3e-05, 2.48),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(0.0, -0.25),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, 0.004),
                        above_max: lin(0.0, 0.008),
                    },
                    tail: WindBranch {
                        primary: lin(0.0, -0.9),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, -0.01),
                        above_max: lin(0.0, -0.02),
                    },
                },
            },
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 1.5,
                    offset: 524500.0,
                },
                slope: -0.0002,
                altitude: lin(2.6e-07, 0.0034),
                temperature: TempPolynomial {
                    below_ref: lin(1e-05, 0.91),
                    ref_to_max: lin(2e-05, 1.82),
                    above_max: lin(3e-05, 2.56),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(0.0, -0.25),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, 0.004),
                        above_max: lin(0.0, 0.008),
                    },
                    tail: WindBranch {
                        primary: lin(0.0, -0.9),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(0.0, -0.01),
                        above_max: lin(0.0, -0.02),
                    },
                },
            },
        ],
    }
}

/// Rejected-takeoff brake energy limits; insensitive to the
/// characteristic length.
fn brake_energy_family() -> FamilyTables {
    FamilyTables {
        l_divisor: None,
        confs: [
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 0.0,
                    offset: 590000.0,
                },
                slope: -0.003,
                altitude: lin(3e-07, 0.004),
                temperature: TempPolynomial {
                    below_ref: lin(0.0, 0.35),
                    ref_to_max: lin(0.0, 0.7),
                    above_max: lin(0.0, 0.0),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(0.0, -0.5),
                        below_ref: LinCoef::ZERO,
                        above_ref: LinCoef::ZERO,
                        above_max: LinCoef::ZERO,
                    },
                    tail: WindBranch {
                        primary: lin(0.0, -3.0),
                        below_ref: LinCoef::ZERO,
                        above_ref: LinCoef::ZERO,
                        above_max: LinCoef::ZERO,
                    },
                },
            },
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 0.0,
                    offset: 585000.0,
                },
                slope: -0.003,
                altitude: lin(3e-07, 0.004),
                temperature: TempPolynomial {
                    below_ref: lin(0.0, 0.36),
                    ref_to_max: lin(0.0, 0.72),
                    above_max: lin(0.0, 0.0),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(0.0, -0.5),
                        below_ref: LinCoef::ZERO,
                        above_ref: LinCoef::ZERO,
                        above_max: LinCoef::ZERO,
                    },
                    tail: WindBranch {
                        primary: lin(0.0, -3.0),
                        below_ref: LinCoef::ZERO,
                        above_ref: LinCoef::ZERO,
                        above_max: LinCoef::ZERO,
                    },
                },
            },
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 0.0,
                    offset: 580000.0,
                },
                slope: -0.003,
                altitude: lin(3e-07, 0.004),
                temperature: TempPolynomial {
                    below_ref: lin(0.0, 0.37),
                    ref_to_max: lin(0.0, 0.74),
                    above_max: lin(0.0, 0.0),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(0.0, -0.5),
                        below_ref: LinCoef::ZERO,
                        above_ref: LinCoef::ZERO,
                        above_max: LinCoef::ZERO,
                    },
                    tail: WindBranch {
                        primary: lin(0.0, -3.0),
                        below_ref: LinCoef::ZERO,
                        above_ref: LinCoef::ZERO,
                        above_max: LinCoef::ZERO,
                    },
                },
            },
        ],
    }
}

/// Minimum-control-speed limits on the ground run.
fn vmcg_family() -> FamilyTables {
    FamilyTables {
        l_divisor: Some(1.0),
        confs: [
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 58.0,
                    offset: 240000.0,
                },
                slope: -0.0008,
                altitude: lin(1e-07, 0.0042),
                temperature: TempPolynomial {
                    below_ref: lin(0.0, 0.05),
                    ref_to_max: lin(0.0, 0.12),
                    above_max: lin(0.0, 0.25),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(-2e-05, -0.4),
                        below_ref: lin(1e-06, 0.004),
                        above_ref: lin(5e-07, 0.003),
                        above_max: lin(0.0, 0.004),
                    },
                    tail: WindBranch {
                        primary: lin(-4e-05, -1.6),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(-5e-07, -0.006),
                        above_max: lin(-5e-07, -0.008),
                    },
                },
            },
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 60.0,
                    offset: 252000.0,
                },
                slope: -0.0008,
                altitude: lin(1e-07, 0.0042),
                temperature: TempPolynomial {
                    below_ref: lin(0.0, 0.05),
                    ref_to_max: lin(0.0, 0.12),
                    above_max: lin(0.0, 0.25),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(-2e-05, -0.4),
                        below_ref: lin(1e-06, 0.004),
                        above_ref: lin(5e-07, 0.003),
                        above_max: lin(0.0, 0.004),
                    },
                    tail: WindBranch {
                        primary: lin(-4e-05, -1.6),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(-5e-07, -0.006),
                        above_max: lin(-5e-07, -0.008),
                    },
                },
            },
            FamilyCoefficients {
                base: BaseLimit::Affine {
                    per_metre: 62.0,
                    offset: 262000.0,
                },
                slope: -0.0008,
                altitude: lin(1e-07, 0.0042),
                temperature: TempPolynomial {
                    below_ref: lin(0.0, 0.05),
                    ref_to_max: lin(0.0, 0.12),
                    above_max: lin(0.0, 0.25),
                },
                wind: WindPolynomial {
                    head: WindBranch {
                        primary: lin(-2e-05, -0.4),
                        below_ref: lin(1e-06, 0.004),
                        above_ref: lin(5e-07, 0.003),
                        above_max: lin(0.0, 0.004),
                    },
                    tail: WindBranch {
                        primary: lin(-4e-05, -1.6),
                        below_ref: LinCoef::ZERO,
                        above_ref: lin(-5e-07, -0.006),
                        above_max: lin(-5e-07, -0.008),
                    },
                },
            },
        ],
    }
}

fn wet() -> WetData {
    WetData {
        tow_above: [
            vec_table![
                (-15.0, [-3.2, -9500.0, -2.6, -6500.0]),
                (0.0, [-2.2, -5500.0, -1.2, -2500.0]),
                (10.0, [-1.6, -3200.0, -0.9, -1700.0]),
            ],
            vec_table![
                (-15.0, [-3.0, -9000.0, -2.5, -6000.0]),
                (0.0, [-2.0, -5000.0, -1.0, -2000.0]),
                (10.0, [-1.5, -3000.0, -0.8, -1500.0]),
            ],
            vec_table![
                (-15.0, [-2.8, -8500.0, -2.4, -5600.0]),
                (0.0, [-1.9, -4700.0, -0.9, -1900.0]),
                (10.0, [-1.4, -2800.0, -0.7, -1400.0]),
            ],
        ],
        tow_below: [
            vec_table![
                (-15.0, [-1.6, -4800.0, -1.3, -3200.0]),
                (0.0, [-1.1, -2800.0, -0.6, -1300.0]),
                (10.0, [-0.8, -1600.0, -0.5, -900.0]),
            ],
            vec_table![
                (-15.0, [-1.5, -4500.0, -1.2, -3000.0]),
                (0.0, [-1.0, -2500.0, -0.5, -1100.0]),
                (10.0, [-0.7, -1500.0, -0.4, -800.0]),
            ],
            vec_table![
                (-15.0, [-1.4, -4200.0, -1.1, -2800.0]),
                (0.0, [-0.9, -2300.0, -0.5, -1000.0]),
                (10.0, [-0.7, -1400.0, -0.4, -700.0]),
            ],
        ],
        flex_above: [
            vec_table![
                (-15.0, [-0.0007, -1.6]),
                (0.0, [-0.0005, -1.0]),
                (10.0, [-0.0004, -0.7]),
            ],
            vec_table![
                (-15.0, [-0.0007, -1.5]),
                (0.0, [-0.0005, -0.9]),
                (10.0, [-0.0004, -0.6]),
            ],
            vec_table![
                (-15.0, [-0.0006, -1.4]),
                (0.0, [-0.0005, -0.8]),
                (10.0, [-0.0003, -0.6]),
            ],
        ],
        flex_below: [
            vec_table![
                (-15.0, [-0.0004, -0.9]),
                (0.0, [-0.0003, -0.5]),
                (10.0, [-0.0002, -0.4]),
            ],
            vec_table![
                (-15.0, [-0.0004, -0.8]),
                (0.0, [-0.0003, -0.5]),
                (10.0, [-0.0002, -0.3]),
            ],
            vec_table![
                (-15.0, [-0.0004, -0.8]),
                (0.0, [-0.0003, -0.4]),
                (10.0, [-0.0002, -0.3]),
            ],
        ],
        speeds_above: [
            vec_table![
                (-15.0, [-9.0, -3.0, -1.0]),
                (0.0, [-6.0, -2.0, 0.0]),
                (10.0, [-4.0, -1.0, 0.0]),
            ],
            vec_table![
                (-15.0, [-8.0, -3.0, -1.0]),
                (0.0, [-5.0, -2.0, 0.0]),
                (10.0, [-4.0, -1.0, 0.0]),
            ],
            vec_table![
                (-15.0, [-8.0, -2.0, -1.0]),
                (0.0, [-5.0, -1.0, 0.0]),
                (10.0, [-3.0, -1.0, 0.0]),
            ],
        ],
        speeds_below: [
            vec_table![
                (-15.0, [-5.0, -2.0, 0.0]),
                (0.0, [-3.0, -1.0, 0.0]),
                (10.0, [-2.0, 0.0, 0.0]),
            ],
            vec_table![
                (-15.0, [-4.0, -1.0, 0.0]),
                (0.0, [-3.0, -1.0, 0.0]),
                (10.0, [-2.0, 0.0, 0.0]),
            ],
            vec_table![
                (-15.0, [-4.0, -1.0, 0.0]),
                (0.0, [-2.0, -1.0, 0.0]),
                (10.0, [-1.0, 0.0, 0.0]),
            ],
        ],
    }
}

fn contaminants() -> [Contaminant; 10] {
    [
        // CompactedSnow
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 32000.0),
                    (2500.0, 43000.0),
                    (3500.0, 54000.0),
                    (5000.0, 62000.0),
                ],
                table1d![
                    (1500.0, 36000.0),
                    (2500.0, 48000.0),
                    (3500.0, 60000.0),
                    (5000.0, 69000.0),
                ],
                table1d![
                    (1500.0, 40000.0),
                    (2500.0, 53000.0),
                    (3500.0, 66000.0),
                    (5000.0, 76000.0),
                ],
            ],
            mtow: [
                table1d![
                    (280000.0, 263800.0),
                    (340000.0, 322600.0),
                    (400000.0, 381400.0),
                    (460000.0, 440200.0),
                ],
                table1d![
                    (280000.0, 262000.0),
                    (340000.0, 320800.0),
                    (400000.0, 379600.0),
                    (460000.0, 438400.0),
                ],
                table1d![
                    (280000.0, 260200.0),
                    (340000.0, 319000.0),
                    (400000.0, 377800.0),
                    (460000.0, 436600.0),
                ],
            ],
            min_corrected: 280000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [115.0, 126.0, 135.0]),
                    (300000.0, [124.0, 135.0, 144.0]),
                    (350000.0, [134.0, 145.0, 153.0]),
                    (400000.0, [142.0, 153.0, 161.0]),
                    (450000.0, [150.0, 161.0, 168.0]),
                    (500000.0, [157.0, 168.0, 175.0]),
                ],
                vec_table![
                    (250000.0, [111.0, 122.0, 131.0]),
                    (300000.0, [120.0, 131.0, 140.0]),
                    (350000.0, [130.0, 141.0, 149.0]),
                    (400000.0, [138.0, 149.0, 157.0]),
                    (450000.0, [146.0, 157.0, 164.0]),
                    (500000.0, [153.0, 164.0, 171.0]),
                ],
                vec_table![
                    (250000.0, [108.0, 119.0, 128.0]),
                    (300000.0, [117.0, 128.0, 137.0]),
                    (350000.0, [127.0, 138.0, 146.0]),
                    (400000.0, [135.0, 146.0, 154.0]),
                    (450000.0, [143.0, 154.0, 161.0]),
                    (500000.0, [150.0, 161.0, 168.0]),
                ],
            ],
        },
        // DrySnow10mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 27000.0),
                    (2500.0, 36000.0),
                    (3500.0, 45000.0),
                    (5000.0, 52000.0),
                ],
                table1d![
                    (1500.0, 30000.0),
                    (2500.0, 40000.0),
                    (3500.0, 50000.0),
                    (5000.0, 57000.0),
                ],
                table1d![
                    (1500.0, 33000.0),
                    (2500.0, 44000.0),
                    (3500.0, 55000.0),
                    (5000.0, 63000.0),
                ],
            ],
            mtow: [
                table1d![
                    (285000.0, 271500.0),
                    (345000.0, 330300.0),
                    (405000.0, 389100.0),
                    (465000.0, 447900.0),
                ],
                table1d![
                    (285000.0, 270000.0),
                    (345000.0, 328800.0),
                    (405000.0, 387600.0),
                    (465000.0, 446400.0),
                ],
                table1d![
                    (285000.0, 268500.0),
                    (345000.0, 327300.0),
                    (405000.0, 386100.0),
                    (465000.0, 444900.0),
                ],
            ],
            min_corrected: 285000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [116.0, 127.0, 135.0]),
                    (300000.0, [125.0, 136.0, 144.0]),
                    (350000.0, [135.0, 146.0, 153.0]),
                    (400000.0, [143.0, 154.0, 161.0]),
                    (450000.0, [151.0, 162.0, 168.0]),
                    (500000.0, [158.0, 169.0, 175.0]),
                ],
                vec_table![
                    (250000.0, [112.0, 123.0, 131.0]),
                    (300000.0, [121.0, 132.0, 140.0]),
                    (350000.0, [131.0, 142.0, 149.0]),
                    (400000.0, [139.0, 150.0, 157.0]),
                    (450000.0, [147.0, 158.0, 164.0]),
                    (500000.0, [154.0, 165.0, 171.0]),
                ],
                vec_table![
                    (250000.0, [109.0, 120.0, 128.0]),
                    (300000.0, [118.0, 129.0, 137.0]),
                    (350000.0, [128.0, 139.0, 146.0]),
                    (400000.0, [136.0, 147.0, 154.0]),
                    (450000.0, [144.0, 155.0, 161.0]),
                    (500000.0, [151.0, 162.0, 168.0]),
                ],
            ],
        },
        // DrySnow100mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 51000.0),
                    (2500.0, 68000.0),
                    (3500.0, 86000.0),
                    (5000.0, 98000.0),
                ],
                table1d![
                    (1500.0, 57000.0),
                    (2500.0, 76000.0),
                    (3500.0, 95000.0),
                    (5000.0, 109000.0),
                ],
                table1d![
                    (1500.0, 63000.0),
                    (2500.0, 84000.0),
                    (3500.0, 105000.0),
                    (5000.0, 120000.0),
                ],
            ],
            mtow: [
                table1d![
                    (315000.0, 289350.0),
                    (375000.0, 348150.0),
                    (435000.0, 406950.0),
                    (495000.0, 465750.0),
                ],
                table1d![
                    (315000.0, 286500.0),
                    (375000.0, 345300.0),
                    (435000.0, 404100.0),
                    (495000.0, 462900.0),
                ],
                table1d![
                    (315000.0, 283650.0),
                    (375000.0, 342450.0),
                    (435000.0, 401250.0),
                    (495000.0, 460050.0),
                ],
            ],
            min_corrected: 315000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [111.0, 125.0, 134.0]),
                    (300000.0, [120.0, 134.0, 143.0]),
                    (350000.0, [130.0, 144.0, 152.0]),
                    (400000.0, [138.0, 152.0, 160.0]),
                    (450000.0, [146.0, 160.0, 167.0]),
                    (500000.0, [153.0, 167.0, 174.0]),
                ],
                vec_table![
                    (250000.0, [107.0, 121.0, 130.0]),
                    (300000.0, [116.0, 130.0, 139.0]),
                    (350000.0, [126.0, 140.0, 148.0]),
                    (400000.0, [134.0, 148.0, 156.0]),
                    (450000.0, [142.0, 156.0, 163.0]),
                    (500000.0, [149.0, 163.0, 170.0]),
                ],
                vec_table![
                    (250000.0, [104.0, 118.0, 127.0]),
                    (300000.0, [113.0, 127.0, 136.0]),
                    (350000.0, [123.0, 137.0, 145.0]),
                    (400000.0, [131.0, 145.0, 153.0]),
                    (450000.0, [139.0, 153.0, 160.0]),
                    (500000.0, [146.0, 160.0, 167.0]),
                ],
            ],
        },
        // WetSnow5mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 30000.0),
                    (2500.0, 40000.0),
                    (3500.0, 50000.0),
                    (5000.0, 57000.0),
                ],
                table1d![
                    (1500.0, 33000.0),
                    (2500.0, 44000.0),
                    (3500.0, 55000.0),
                    (5000.0, 63000.0),
                ],
                table1d![
                    (1500.0, 36000.0),
                    (2500.0, 48000.0),
                    (3500.0, 61000.0),
                    (5000.0, 70000.0),
                ],
            ],
            mtow: [
                table1d![
                    (290000.0, 275150.0),
                    (350000.0, 333950.0),
                    (410000.0, 392750.0),
                    (470000.0, 451550.0),
                ],
                table1d![
                    (290000.0, 273500.0),
                    (350000.0, 332300.0),
                    (410000.0, 391100.0),
                    (470000.0, 449900.0),
                ],
                table1d![
                    (290000.0, 271850.0),
                    (350000.0, 330650.0),
                    (410000.0, 389450.0),
                    (470000.0, 448250.0),
                ],
            ],
            min_corrected: 290000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [115.0, 126.0, 135.0]),
                    (300000.0, [124.0, 135.0, 144.0]),
                    (350000.0, [134.0, 145.0, 153.0]),
                    (400000.0, [142.0, 153.0, 161.0]),
                    (450000.0, [150.0, 161.0, 168.0]),
                    (500000.0, [157.0, 168.0, 175.0]),
                ],
                vec_table![
                    (250000.0, [111.0, 122.0, 131.0]),
                    (300000.0, [120.0, 131.0, 140.0]),
                    (350000.0, [130.0, 141.0, 149.0]),
                    (400000.0, [138.0, 149.0, 157.0]),
                    (450000.0, [146.0, 157.0, 164.0]),
                    (500000.0, [153.0, 164.0, 171.0]),
                ],
                vec_table![
                    (250000.0, [108.0, 119.0, 128.0]),
                    (300000.0, [117.0, 128.0, 137.0]),
                    (350000.0, [127.0, 138.0, 146.0]),
                    (400000.0, [135.0, 146.0, 154.0]),
                    (450000.0, [143.0, 154.0, 161.0]),
                    (500000.0, [150.0, 161.0, 168.0]),
                ],
            ],
        },
        // WetSnow15mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 40000.0),
                    (2500.0, 54000.0),
                    (3500.0, 68000.0),
                    (5000.0, 78000.0),
                ],
                table1d![
                    (1500.0, 45000.0),
                    (2500.0, 60000.0),
                    (3500.0, 75000.0),
                    (5000.0, 86000.0),
                ],
                table1d![
                    (1500.0, 50000.0),
                    (2500.0, 66000.0),
                    (3500.0, 82000.0),
                    (5000.0, 95000.0),
                ],
            ],
            mtow: [
                table1d![
                    (300000.0, 279750.0),
                    (360000.0, 338550.0),
                    (420000.0, 397350.0),
                    (480000.0, 456150.0),
                ],
                table1d![
                    (300000.0, 277500.0),
                    (360000.0, 336300.0),
                    (420000.0, 395100.0),
                    (480000.0, 453900.0),
                ],
                table1d![
                    (300000.0, 275250.0),
                    (360000.0, 334050.0),
                    (420000.0, 392850.0),
                    (480000.0, 451650.0),
                ],
            ],
            min_corrected: 300000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [113.0, 126.0, 135.0]),
                    (300000.0, [122.0, 135.0, 144.0]),
                    (350000.0, [132.0, 145.0, 153.0]),
                    (400000.0, [140.0, 153.0, 161.0]),
                    (450000.0, [148.0, 161.0, 168.0]),
                    (500000.0, [155.0, 168.0, 175.0]),
                ],
                vec_table![
                    (250000.0, [109.0, 122.0, 131.0]),
                    (300000.0, [118.0, 131.0, 140.0]),
                    (350000.0, [128.0, 141.0, 149.0]),
                    (400000.0, [136.0, 149.0, 157.0]),
                    (450000.0, [144.0, 157.0, 164.0]),
                    (500000.0, [151.0, 164.0, 171.0]),
                ],
                vec_table![
                    (250000.0, [106.0, 119.0, 128.0]),
                    (300000.0, [115.0, 128.0, 137.0]),
                    (350000.0, [125.0, 138.0, 146.0]),
                    (400000.0, [133.0, 146.0, 154.0]),
                    (450000.0, [141.0, 154.0, 161.0]),
                    (500000.0, [148.0, 161.0, 168.0]),
                ],
            ],
        },
        // WetSnow30mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 57000.0),
                    (2500.0, 76000.0),
                    (3500.0, 94000.0),
                    (5000.0, 109000.0),
                ],
                table1d![
                    (1500.0, 63000.0),
                    (2500.0, 84000.0),
                    (3500.0, 105000.0),
                    (5000.0, 121000.0),
                ],
                table1d![
                    (1500.0, 69000.0),
                    (2500.0, 92000.0),
                    (3500.0, 116000.0),
                    (5000.0, 133000.0),
                ],
            ],
            mtow: [
                table1d![
                    (320000.0, 291650.0),
                    (380000.0, 350450.0),
                    (440000.0, 409250.0),
                    (500000.0, 468050.0),
                ],
                table1d![
                    (320000.0, 288500.0),
                    (380000.0, 347300.0),
                    (440000.0, 406100.0),
                    (500000.0, 464900.0),
                ],
                table1d![
                    (320000.0, 285350.0),
                    (380000.0, 344150.0),
                    (440000.0, 402950.0),
                    (500000.0, 461750.0),
                ],
            ],
            min_corrected: 320000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [110.0, 125.0, 134.0]),
                    (300000.0, [119.0, 134.0, 143.0]),
                    (350000.0, [129.0, 144.0, 152.0]),
                    (400000.0, [137.0, 152.0, 160.0]),
                    (450000.0, [145.0, 160.0, 167.0]),
                    (500000.0, [152.0, 167.0, 174.0]),
                ],
                vec_table![
                    (250000.0, [106.0, 121.0, 130.0]),
                    (300000.0, [115.0, 130.0, 139.0]),
                    (350000.0, [125.0, 140.0, 148.0]),
                    (400000.0, [133.0, 148.0, 156.0]),
                    (450000.0, [141.0, 156.0, 163.0]),
                    (500000.0, [148.0, 163.0, 170.0]),
                ],
                vec_table![
                    (250000.0, [103.0, 118.0, 127.0]),
                    (300000.0, [112.0, 127.0, 136.0]),
                    (350000.0, [122.0, 137.0, 145.0]),
                    (400000.0, [130.0, 145.0, 153.0]),
                    (450000.0, [138.0, 153.0, 160.0]),
                    (500000.0, [145.0, 160.0, 167.0]),
                ],
            ],
        },
        // Water6mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 43000.0),
                    (2500.0, 58000.0),
                    (3500.0, 72000.0),
                    (5000.0, 83000.0),
                ],
                table1d![
                    (1500.0, 48000.0),
                    (2500.0, 64000.0),
                    (3500.0, 80000.0),
                    (5000.0, 92000.0),
                ],
                table1d![
                    (1500.0, 53000.0),
                    (2500.0, 70000.0),
                    (3500.0, 88000.0),
                    (5000.0, 101000.0),
                ],
            ],
            mtow: [
                table1d![
                    (305000.0, 283400.0),
                    (365000.0, 342200.0),
                    (425000.0, 401000.0),
                    (485000.0, 459800.0),
                ],
                table1d![
                    (305000.0, 281000.0),
                    (365000.0, 339800.0),
                    (425000.0, 398600.0),
                    (485000.0, 457400.0),
                ],
                table1d![
                    (305000.0, 278600.0),
                    (365000.0, 337400.0),
                    (425000.0, 396200.0),
                    (485000.0, 455000.0),
                ],
            ],
            min_corrected: 305000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [112.0, 125.0, 134.0]),
                    (300000.0, [121.0, 134.0, 143.0]),
                    (350000.0, [131.0, 144.0, 152.0]),
                    (400000.0, [139.0, 152.0, 160.0]),
                    (450000.0, [147.0, 160.0, 167.0]),
                    (500000.0, [154.0, 167.0, 174.0]),
                ],
                vec_table![
                    (250000.0, [108.0, 121.0, 130.0]),
                    (300000.0, [117.0, 130.0, 139.0]),
                    (350000.0, [127.0, 140.0, 148.0]),
                    (400000.0, [135.0, 148.0, 156.0]),
                    (450000.0, [143.0, 156.0, 163.0]),
                    (500000.0, [150.0, 163.0, 170.0]),
                ],
                vec_table![
                    (250000.0, [105.0, 118.0, 127.0]),
                    (300000.0, [114.0, 127.0, 136.0]),
                    (350000.0, [124.0, 137.0, 145.0]),
                    (400000.0, [132.0, 145.0, 153.0]),
                    (450000.0, [140.0, 153.0, 160.0]),
                    (500000.0, [147.0, 160.0, 167.0]),
                ],
            ],
        },
        // Water13mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 65000.0),
                    (2500.0, 86000.0),
                    (3500.0, 108000.0),
                    (5000.0, 124000.0),
                ],
                table1d![
                    (1500.0, 72000.0),
                    (2500.0, 96000.0),
                    (3500.0, 120000.0),
                    (5000.0, 138000.0),
                ],
                table1d![
                    (1500.0, 79000.0),
                    (2500.0, 106000.0),
                    (3500.0, 132000.0),
                    (5000.0, 152000.0),
                ],
            ],
            mtow: [
                table1d![
                    (330000.0, 297600.0),
                    (390000.0, 356400.0),
                    (450000.0, 415200.0),
                    (510000.0, 474000.0),
                ],
                table1d![
                    (330000.0, 294000.0),
                    (390000.0, 352800.0),
                    (450000.0, 411600.0),
                    (510000.0, 470400.0),
                ],
                table1d![
                    (330000.0, 290400.0),
                    (390000.0, 349200.0),
                    (450000.0, 408000.0),
                    (510000.0, 466800.0),
                ],
            ],
            min_corrected: 330000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [109.0, 124.0, 134.0]),
                    (300000.0, [118.0, 133.0, 143.0]),
                    (350000.0, [128.0, 143.0, 152.0]),
                    (400000.0, [136.0, 151.0, 160.0]),
                    (450000.0, [144.0, 159.0, 167.0]),
                    (500000.0, [151.0, 166.0, 174.0]),
                ],
                vec_table![
                    (250000.0, [105.0, 120.0, 130.0]),
                    (300000.0, [114.0, 129.0, 139.0]),
                    (350000.0, [124.0, 139.0, 148.0]),
                    (400000.0, [132.0, 147.0, 156.0]),
                    (450000.0, [140.0, 155.0, 163.0]),
                    (500000.0, [147.0, 162.0, 170.0]),
                ],
                vec_table![
                    (250000.0, [102.0, 117.0, 127.0]),
                    (300000.0, [111.0, 126.0, 136.0]),
                    (350000.0, [121.0, 136.0, 145.0]),
                    (400000.0, [129.0, 144.0, 153.0]),
                    (450000.0, [137.0, 152.0, 160.0]),
                    (500000.0, [144.0, 159.0, 167.0]),
                ],
            ],
        },
        // Slush6mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 46000.0),
                    (2500.0, 61000.0),
                    (3500.0, 76000.0),
                    (5000.0, 88000.0),
                ],
                table1d![
                    (1500.0, 51000.0),
                    (2500.0, 68000.0),
                    (3500.0, 85000.0),
                    (5000.0, 98000.0),
                ],
                table1d![
                    (1500.0, 56000.0),
                    (2500.0, 75000.0),
                    (3500.0, 94000.0),
                    (5000.0, 108000.0),
                ],
            ],
            mtow: [
                table1d![
                    (310000.0, 287050.0),
                    (370000.0, 345850.0),
                    (430000.0, 404650.0),
                    (490000.0, 463450.0),
                ],
                table1d![
                    (310000.0, 284500.0),
                    (370000.0, 343300.0),
                    (430000.0, 402100.0),
                    (490000.0, 460900.0),
                ],
                table1d![
                    (310000.0, 281950.0),
                    (370000.0, 340750.0),
                    (430000.0, 399550.0),
                    (490000.0, 458350.0),
                ],
            ],
            min_corrected: 310000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [112.0, 125.0, 134.0]),
                    (300000.0, [121.0, 134.0, 143.0]),
                    (350000.0, [131.0, 144.0, 152.0]),
                    (400000.0, [139.0, 152.0, 160.0]),
                    (450000.0, [147.0, 160.0, 167.0]),
                    (500000.0, [154.0, 167.0, 174.0]),
                ],
                vec_table![
                    (250000.0, [108.0, 121.0, 130.0]),
                    (300000.0, [117.0, 130.0, 139.0]),
                    (350000.0, [127.0, 140.0, 148.0]),
                    (400000.0, [135.0, 148.0, 156.0]),
                    (450000.0, [143.0, 156.0, 163.0]),
                    (500000.0, [150.0, 163.0, 170.0]),
                ],
                vec_table![
                    (250000.0, [105.0, 118.0, 127.0]),
                    (300000.0, [114.0, 127.0, 136.0]),
                    (350000.0, [124.0, 137.0, 145.0]),
                    (400000.0, [132.0, 145.0, 153.0]),
                    (450000.0, [140.0, 153.0, 160.0]),
                    (500000.0, [147.0, 160.0, 167.0]),
                ],
            ],
        },
        // Slush13mm
        Contaminant {
            weight_correction: [
                table1d![
                    (1500.0, 73000.0),
                    (2500.0, 97000.0),
                    (3500.0, 122000.0),
                    (5000.0, 140000.0),
                ],
                table1d![
                    (1500.0, 81000.0),
                    (2500.0, 108000.0),
                    (3500.0, 135000.0),
                    (5000.0, 155000.0),
                ],
                table1d![
                    (1500.0, 89000.0),
                    (2500.0, 119000.0),
                    (3500.0, 148000.0),
                    (5000.0, 171000.0),
                ],
            ],
            mtow: [
                table1d![
                    (340000.0, 303550.0),
                    (400000.0, 362350.0),
                    (460000.0, 421150.0),
                    (520000.0, 479950.0),
                ],
                table1d![
                    (340000.0, 299500.0),
                    (400000.0, 358300.0),
                    (460000.0, 417100.0),
                    (520000.0, 475900.0),
                ],
                table1d![
                    (340000.0, 295450.0),
                    (400000.0, 354250.0),
                    (460000.0, 413050.0),
                    (520000.0, 471850.0),
                ],
            ],
            min_corrected: 340000.0,
            v_speeds: [
                vec_table![
                    (250000.0, [108.0, 124.0, 134.0]),
                    (300000.0, [117.0, 133.0, 143.0]),
                    (350000.0, [127.0, 143.0, 152.0]),
                    (400000.0, [135.0, 151.0, 160.0]),
                    (450000.0, [143.0, 159.0, 167.0]),
                    (500000.0, [150.0, 166.0, 174.0]),
                ],
                vec_table![
                    (250000.0, [104.0, 120.0, 130.0]),
                    (300000.0, [113.0, 129.0, 139.0]),
                    (350000.0, [123.0, 139.0, 148.0]),
                    (400000.0, [131.0, 147.0, 156.0]),
                    (450000.0, [139.0, 155.0, 163.0]),
                    (500000.0, [146.0, 162.0, 170.0]),
                ],
                vec_table![
                    (250000.0, [101.0, 117.0, 127.0]),
                    (300000.0, [110.0, 126.0, 136.0]),
                    (350000.0, [120.0, 136.0, 145.0]),
                    (400000.0, [128.0, 144.0, 153.0]),
                    (450000.0, [136.0, 152.0, 160.0]),
                    (500000.0, [143.0, 159.0, 167.0]),
                ],
            ],
        },
    ]
}

fn speeds() -> SpeedData {
    SpeedData {
        v1_base: table1d![
            (250000.0, 119.0),
            (300000.0, 128.0),
            (350000.0, 138.0),
            (400000.0, 146.0),
            (450000.0, 154.0),
            (500000.0, 161.0),
        ],
        vr_base: table1d![
            (250000.0, 125.0),
            (300000.0, 134.0),
            (350000.0, 144.0),
            (400000.0, 152.0),
            (450000.0, 160.0),
            (500000.0, 167.0),
        ],
        v2_base: table1d![
            (250000.0, 132.0),
            (300000.0, 141.0),
            (350000.0, 150.0),
            (400000.0, 158.0),
            (450000.0, 165.0),
            (500000.0, 172.0),
        ],
        conf_offset: [4.0, 0.0, -3.0],
        ground: SpeedKernelSet {
            v1: SpeedKernel { runway: 2.0, altitude: 0.25, slope: -0.8, wind: -0.1 },
            vr: SpeedKernel { runway: 1.0, altitude: 0.28, slope: -0.4, wind: -0.05 },
            v2: SpeedKernel { runway: 0.5, altitude: 0.3, slope: -0.2, wind: -0.05 },
        },
        airborne: SpeedKernelSet {
            v1: SpeedKernel { runway: 0.8, altitude: 0.3, slope: -0.3, wind: -0.06 },
            vr: SpeedKernel { runway: 0.4, altitude: 0.32, slope: -0.2, wind: -0.04 },
            v2: SpeedKernel { runway: 0.2, altitude: 0.34, slope: -0.1, wind: -0.03 },
        },
        min_v1_vmc: table1d![(0.0, 116.0), (4000.0, 114.0), (8000.0, 111.0), (12500.0, 107.0)],
        min_vr_vmc: table1d![(0.0, 120.0), (4000.0, 118.0), (8000.0, 115.0), (12500.0, 111.0)],
        min_v2_vmc: [
            table1d![(0.0, 130.0), (12500.0, 121.0)],
            table1d![(0.0, 127.0), (12500.0, 118.0)],
            table1d![(0.0, 125.0), (12500.0, 116.0)],
        ],
        min_v2_vmu: [
            Table2D::new(vec![
                (0.0, table1d![
                    (270000.0, 122.0),
                    (320000.0, 130.0),
                    (380000.0, 139.0),
                    (440000.0, 149.0),
                    (512000.0, 159.0),
                ]),
                (8000.0, table1d![
                    (270000.0, 123.0),
                    (320000.0, 131.0),
                    (380000.0, 140.0),
                    (440000.0, 150.0),
                    (512000.0, 160.0),
                ]),
                (12500.0, table1d![
                    (270000.0, 124.0),
                    (320000.0, 132.0),
                    (380000.0, 141.0),
                    (440000.0, 151.0),
                    (512000.0, 161.0),
                ]),
            ]),
            Table2D::new(vec![
                (0.0, table1d![
                    (270000.0, 119.0),
                    (320000.0, 127.0),
                    (380000.0, 136.0),
                    (440000.0, 146.0),
                    (512000.0, 156.0),
                ]),
                (8000.0, table1d![
                    (270000.0, 120.0),
                    (320000.0, 128.0),
                    (380000.0, 137.0),
                    (440000.0, 147.0),
                    (512000.0, 157.0),
                ]),
                (12500.0, table1d![
                    (270000.0, 121.0),
                    (320000.0, 129.0),
                    (380000.0, 138.0),
                    (440000.0, 148.0),
                    (512000.0, 158.0),
                ]),
            ]),
            Table2D::new(vec![
                (0.0, table1d![
                    (270000.0, 117.0),
                    (320000.0, 125.0),
                    (380000.0, 134.0),
                    (440000.0, 144.0),
                    (512000.0, 154.0),
                ]),
                (8000.0, table1d![
                    (270000.0, 118.0),
                    (320000.0, 126.0),
                    (380000.0, 135.0),
                    (440000.0, 145.0),
                    (512000.0, 155.0),
                ]),
                (12500.0, table1d![
                    (270000.0, 119.0),
                    (320000.0, 127.0),
                    (380000.0, 136.0),
                    (440000.0, 146.0),
                    (512000.0, 156.0),
                ]),
            ]),
        ],
    }
}

fn landing() -> LandingData {
    LandingData {
        vls_full: table1d![
            (270000.0, 121.0),
            (300000.0, 127.0),
            (330000.0, 132.0),
            (360000.0, 138.0),
            (390000.0, 143.0),
            (420000.0, 148.0),
            (450000.0, 153.0),
            (480000.0, 158.0),
            (512000.0, 163.0),
        ],
        vls_conf3: table1d![
            (270000.0, 126.0),
            (300000.0, 132.0),
            (330000.0, 137.0),
            (360000.0, 143.0),
            (390000.0, 148.0),
            (420000.0, 153.0),
            (450000.0, 158.0),
            (480000.0, 163.0),
            (512000.0, 168.0),
        ],
        vls_floor_ratio: 0.6,
        autoland_full: 280.0,
        autoland_conf3: 250.0,
        margin: 1.15,
        conditions: [
            // Dry
            LandingConditionRows {
                full: [
                    row(1450.0, 28.0, -11.0, 70.0, 130.0, -110.0, 45.0, 59.0, 40.0, 914.0),
                    row(1850.0, 35.0, -14.0, 89.0, 166.0, -141.0, 57.0, 76.0, 51.0, 1166.0),
                    row(2350.0, 45.0, -18.0, 113.0, 212.0, -179.0, 73.0, 96.0, 65.0, 1480.0),
                ],
                conf3: [
                    row(1566.0, 30.0, -12.0, 75.0, 141.0, -119.0, 49.0, 64.0, 43.0, 987.0),
                    row(1998.0, 38.0, -15.0, 96.0, 180.0, -152.0, 62.0, 82.0, 55.0, 1259.0),
                    row(2538.0, 48.0, -19.0, 122.0, 228.0, -193.0, 79.0, 104.0, 70.0, 1599.0),
                ],
            },
            // Wet
            LandingConditionRows {
                full: [
                    row(1700.0, 32.0, -13.0, 82.0, 153.0, -129.0, 53.0, 70.0, 47.0, 1071.0),
                    row(2150.0, 41.0, -16.0, 103.0, 194.0, -163.0, 67.0, 88.0, 59.0, 1354.0),
                    row(2700.0, 51.0, -21.0, 130.0, 243.0, -205.0, 84.0, 111.0, 75.0, 1701.0),
                ],
                conf3: [
                    row(1836.0, 35.0, -14.0, 88.0, 165.0, -140.0, 57.0, 75.0, 51.0, 1157.0),
                    row(2322.0, 44.0, -18.0, 111.0, 209.0, -176.0, 72.0, 95.0, 64.0, 1463.0),
                    row(2916.0, 55.0, -22.0, 140.0, 262.0, -222.0, 90.0, 120.0, 80.0, 1837.0),
                ],
            },
            // CompactedSnow
            LandingConditionRows {
                full: [
                    row(2100.0, 40.0, -16.0, 101.0, 189.0, -160.0, 65.0, 86.0, 58.0, 1323.0),
                    row(2600.0, 49.0, -20.0, 125.0, 234.0, -198.0, 81.0, 107.0, 72.0, 1638.0),
                    row(3200.0, 61.0, -24.0, 154.0, 288.0, -243.0, 99.0, 131.0, 88.0, 2016.0),
                ],
                conf3: [
                    row(2268.0, 43.0, -17.0, 109.0, 204.0, -172.0, 70.0, 93.0, 63.0, 1429.0),
                    row(2808.0, 53.0, -21.0, 135.0, 253.0, -213.0, 87.0, 115.0, 78.0, 1769.0),
                    row(3456.0, 66.0, -26.0, 166.0, 311.0, -263.0, 107.0, 142.0, 95.0, 2177.0),
                ],
            },
            // DrySnow10mm
            LandingConditionRows {
                full: [
                    row(1950.0, 37.0, -15.0, 94.0, 176.0, -148.0, 60.0, 80.0, 54.0, 1228.0),
                    row(2450.0, 47.0, -19.0, 118.0, 220.0, -186.0, 76.0, 100.0, 68.0, 1544.0),
                    row(3050.0, 58.0, -23.0, 146.0, 274.0, -232.0, 95.0, 125.0, 84.0, 1922.0),
                ],
                conf3: [
                    row(2106.0, 40.0, -16.0, 101.0, 190.0, -160.0, 65.0, 86.0, 58.0, 1327.0),
                    row(2646.0, 50.0, -20.0, 127.0, 238.0, -201.0, 82.0, 108.0, 73.0, 1667.0),
                    row(3294.0, 63.0, -25.0, 158.0, 296.0, -250.0, 102.0, 135.0, 91.0, 2075.0),
                ],
            },
            // DrySnow100mm
            LandingConditionRows {
                full: [
                    row(2250.0, 43.0, -17.0, 108.0, 202.0, -171.0, 70.0, 92.0, 62.0, 1418.0),
                    row(2800.0, 53.0, -21.0, 134.0, 252.0, -213.0, 87.0, 115.0, 77.0, 1764.0),
                    row(3450.0, 66.0, -26.0, 166.0, 310.0, -262.0, 107.0, 141.0, 95.0, 2174.0),
                ],
                conf3: [
                    row(2430.0, 46.0, -18.0, 117.0, 219.0, -185.0, 75.0, 100.0, 67.0, 1531.0),
                    row(3024.0, 57.0, -23.0, 145.0, 272.0, -230.0, 94.0, 124.0, 83.0, 1905.0),
                    row(3726.0, 71.0, -28.0, 179.0, 335.0, -283.0, 116.0, 153.0, 103.0, 2347.0),
                ],
            },
            // WetSnow5mm
            LandingConditionRows {
                full: [
                    row(2050.0, 39.0, -16.0, 98.0, 184.0, -156.0, 64.0, 84.0, 57.0, 1292.0),
                    row(2550.0, 48.0, -19.0, 122.0, 230.0, -194.0, 79.0, 105.0, 70.0, 1606.0),
                    row(3150.0, 60.0, -24.0, 151.0, 284.0, -239.0, 98.0, 129.0, 87.0, 1984.0),
                ],
                conf3: [
                    row(2214.0, 42.0, -17.0, 106.0, 199.0, -168.0, 69.0, 91.0, 61.0, 1395.0),
                    row(2754.0, 52.0, -21.0, 132.0, 248.0, -209.0, 85.0, 113.0, 76.0, 1735.0),
                    row(3402.0, 65.0, -26.0, 163.0, 306.0, -259.0, 105.0, 139.0, 94.0, 2143.0),
                ],
            },
            // WetSnow15mm
            LandingConditionRows {
                full: [
                    row(2200.0, 42.0, -17.0, 106.0, 198.0, -167.0, 68.0, 90.0, 61.0, 1386.0),
                    row(2750.0, 52.0, -21.0, 132.0, 248.0, -209.0, 85.0, 113.0, 76.0, 1732.0),
                    row(3400.0, 65.0, -26.0, 163.0, 306.0, -258.0, 105.0, 139.0, 94.0, 2142.0),
                ],
                conf3: [
                    row(2376.0, 45.0, -18.0, 114.0, 214.0, -181.0, 74.0, 97.0, 66.0, 1497.0),
                    row(2970.0, 56.0, -23.0, 143.0, 267.0, -226.0, 92.0, 122.0, 82.0, 1871.0),
                    row(3672.0, 70.0, -28.0, 176.0, 330.0, -279.0, 114.0, 151.0, 101.0, 2313.0),
                ],
            },
            // WetSnow30mm
            LandingConditionRows {
                full: [
                    row(2400.0, 46.0, -18.0, 115.0, 216.0, -182.0, 74.0, 98.0, 66.0, 1512.0),
                    row(2950.0, 56.0, -22.0, 142.0, 266.0, -224.0, 91.0, 121.0, 81.0, 1858.0),
                    row(3600.0, 68.0, -27.0, 173.0, 324.0, -274.0, 112.0, 148.0, 99.0, 2268.0),
                ],
                conf3: [
                    row(2592.0, 49.0, -20.0, 124.0, 233.0, -197.0, 80.0, 106.0, 72.0, 1633.0),
                    row(3186.0, 61.0, -24.0, 153.0, 287.0, -242.0, 99.0, 131.0, 88.0, 2007.0),
                    row(3888.0, 74.0, -30.0, 187.0, 350.0, -295.0, 121.0, 159.0, 107.0, 2449.0),
                ],
            },
            // Water6mm
            LandingConditionRows {
                full: [
                    row(2300.0, 44.0, -17.0, 110.0, 207.0, -175.0, 71.0, 94.0, 63.0, 1449.0),
                    row(2850.0, 54.0, -22.0, 137.0, 256.0, -217.0, 88.0, 117.0, 79.0, 1796.0),
                    row(3500.0, 66.0, -27.0, 168.0, 315.0, -266.0, 108.0, 144.0, 97.0, 2205.0),
                ],
                conf3: [
                    row(2484.0, 47.0, -19.0, 119.0, 224.0, -189.0, 77.0, 102.0, 69.0, 1565.0),
                    row(3078.0, 58.0, -23.0, 148.0, 277.0, -234.0, 95.0, 126.0, 85.0, 1939.0),
                    row(3780.0, 72.0, -29.0, 181.0, 340.0, -287.0, 117.0, 155.0, 104.0, 2381.0),
                ],
            },
            // Water13mm
            LandingConditionRows {
                full: [
                    row(2550.0, 48.0, -19.0, 122.0, 230.0, -194.0, 79.0, 105.0, 70.0, 1606.0),
                    row(3100.0, 59.0, -24.0, 149.0, 279.0, -236.0, 96.0, 127.0, 86.0, 1953.0),
                    row(3800.0, 72.0, -29.0, 182.0, 342.0, -289.0, 118.0, 156.0, 105.0, 2394.0),
                ],
                conf3: [
                    row(2754.0, 52.0, -21.0, 132.0, 248.0, -209.0, 85.0, 113.0, 76.0, 1735.0),
                    row(3348.0, 64.0, -25.0, 161.0, 301.0, -254.0, 104.0, 137.0, 92.0, 2109.0),
                    row(4104.0, 78.0, -31.0, 197.0, 369.0, -312.0, 127.0, 168.0, 113.0, 2586.0),
                ],
            },
            // Slush6mm
            LandingConditionRows {
                full: [
                    row(2350.0, 45.0, -18.0, 113.0, 212.0, -179.0, 73.0, 96.0, 65.0, 1480.0),
                    row(2900.0, 55.0, -22.0, 139.0, 261.0, -220.0, 90.0, 119.0, 80.0, 1827.0),
                    row(3550.0, 67.0, -27.0, 170.0, 320.0, -270.0, 110.0, 146.0, 98.0, 2236.0),
                ],
                conf3: [
                    row(2538.0, 48.0, -19.0, 122.0, 228.0, -193.0, 79.0, 104.0, 70.0, 1599.0),
                    row(3132.0, 60.0, -24.0, 150.0, 282.0, -238.0, 97.0, 128.0, 86.0, 1973.0),
                    row(3834.0, 73.0, -29.0, 184.0, 345.0, -291.0, 119.0, 157.0, 106.0, 2415.0),
                ],
            },
            // Slush13mm
            LandingConditionRows {
                full: [
                    row(2600.0, 49.0, -20.0, 125.0, 234.0, -198.0, 81.0, 107.0, 72.0, 1638.0),
                    row(3150.0, 60.0, -24.0, 151.0, 284.0, -239.0, 98.0, 129.0, 87.0, 1984.0),
                    row(3850.0, 73.0, -29.0, 185.0, 346.0, -293.0, 119.0, 158.0, 106.0, 2426.0),
                ],
                conf3: [
                    row(2808.0, 53.0, -21.0, 135.0, 253.0, -213.0, 87.0, 115.0, 78.0, 1769.0),
                    row(3402.0, 65.0, -26.0, 163.0, 306.0, -259.0, 105.0, 139.0, 94.0, 2143.0),
                    row(4158.0, 79.0, -32.0, 200.0, 374.0, -316.0, 129.0, 170.0, 115.0, 2620.0),
                ],
            },
        ],
    }
}

/// One landing row at the 350 t reference weight.
#[allow(clippy::too_many_arguments)]
fn row(
    ref_distance: f64,
    weight_above: f64,
    weight_below: f64,
    speed: f64,
    wind: f64,
    reverser: f64,
    altitude: f64,
    slope: f64,
    temperature: f64,
    overweight: f64,
) -> LandingRow {
    LandingRow {
        ref_distance,
        ref_weight_t: 350.0,
        weight_above,
        weight_below,
        speed,
        wind,
        reverser,
        altitude,
        slope,
        temperature,
        overweight,
    }
}

fn envelopes() -> Envelopes {
    Envelopes {
        mtow: vec![
            (29.0, 180_000.0),
            (29.0, 360_000.0),
            (32.0, 512_000.0),
            (41.0, 512_000.0),
            (43.0, 360_000.0),
            (43.0, 180_000.0),
        ],
        mzfw: vec![
            (30.0, 180_000.0),
            (30.0, 340_000.0),
            (30.8, 373_000.0),
            (41.5, 373_000.0),
            (42.5, 340_000.0),
            (42.5, 180_000.0),
        ],
        mlw: vec![
            (29.5, 180_000.0),
            (29.5, 350_000.0),
            (31.0, 395_000.0),
            (41.8, 395_000.0),
            (43.0, 350_000.0),
            (43.0, 180_000.0),
        ],
        cg_limits: vec_table![
            (250_000.0, [29.0, 43.2]),
            (350_000.0, [29.3, 43.0]),
            (450_000.0, [30.5, 42.0]),
            (512_000.0, [32.0, 41.0]),
        ],
        stab_trim: StabTrim {
            gain: -0.25,
            offset: 11.5,
            min: -2.0,
            max: 6.0,
        },
    }
}
