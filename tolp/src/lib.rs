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

//! # Takeoff and Landing Performance (TOLP)
//!
//! A deterministic performance engine for a heavy wide-body transport.
//! From an aircraft state and an operating environment it computes the
//! maximum allowable takeoff weight under every governing limit, the
//! optimal flexible (reduced thrust) temperature, the reconciled
//! V1/Vr/V2, landing distances per autobrake mode and weight-and-balance
//! envelope checks.
//!
//! ## Overview
//!
//! Everything goes through the [`PerformanceCalculator`], which owns one
//! immutable [`AircraftData`] set and is otherwise stateless:
//!
//! ```
//! use tolp::prelude::*;
//!
//! let calculator = PerformanceCalculator::default();
//!
//! // A 380 t takeoff from a 3500 m sea-level runway with 10 kt headwind.
//! let mut inputs = TakeoffInputs::new(380_000.0, TakeoffConfig::Conf2, 3500.0);
//! inputs.wind = 10.0;
//! inputs.packs = true;
//!
//! let analysis = calculator.calculate(&inputs);
//! assert!(analysis.error.is_none());
//! assert!(analysis.mtow.expect("limits are solved") >= inputs.tow);
//! ```
//!
//! The engine does no I/O and reads no clock; the tables are estimates
//! parameterized as data so they can be replaced wholesale (see
//! [`data`]).
//!
//! [`PerformanceCalculator`]: calculator::PerformanceCalculator
//! [`AircraftData`]: data::AircraftData
//!
//! # Acronyms & Abbreviations
//!
//! ## F
//!
//! - **Flex** Flexible temperature: a falsely-assumed higher outside air
//!   temperature commanding reduced takeoff thrust
//!
//! ## M
//!
//! - **MAC** Mean Aerodynamic Chord
//! - **MTOW / MZFW / MLW** Maximum Takeoff / Zero-Fuel / Landing Weight
//!
//! ## O
//!
//! - **OAT** Outside Air Temperature
//! - **OEW** Operating Empty Weight
//!
//! ## Q
//!
//! - **QNH** Pressure measured at a location and reduced down to MSL
//!
//! ## T
//!
//! - **TORA** Takeoff Run Available
//! - **Tref / Tmax / Tflexmax** Reference, maximum and maximum-flexible
//!   temperatures of the thrust rating
//!
//! ## V
//!
//! - **V1 / Vr / V2** Decision, rotation and takeoff-safety speeds (KCAS)
//! - **Vls** Lowest selectable speed on approach
//! - **Vmcg / Vmca / Vmu** Minimum control speed on ground / in air /
//!   minimum-unstick speed

#[macro_use]
pub mod macros;

mod types;
pub use types::*;

pub mod algorithm;
pub mod calculator;
pub mod data;
pub mod envelope;
pub mod environment;
pub mod error;
pub mod landing;
pub mod lookup;
pub mod takeoff;

pub mod prelude {
    pub use crate::calculator::PerformanceCalculator;
    pub use crate::data::AircraftData;
    pub use crate::envelope::{
        compute_cg_percent_mac, EnvelopeCheck, EnvelopeKind, WeightCheck, WeightViolation,
    };
    pub use crate::environment::Environment;
    pub use crate::error::{CalcError, DataError};
    pub use crate::landing::{LandingDistances, LandingInputs};
    pub use crate::takeoff::{
        GoverningFactors, LimitWeights, TakeoffAnalysis, TakeoffInputs, TempAnchor, VSpeeds,
    };
    pub use crate::types::*;
}
