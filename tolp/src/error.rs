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

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reason why a performance calculation produced no usable figures.
///
/// The calculators never panic on operational input; they return an analysis
/// with one of these codes set. The input-validation codes short-circuit
/// before any limit weight is computed, the remaining codes are raised from
/// within the calculation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    // Errors raised by input validation:
    //
    /// An input is non-finite or outside any physically sensible range.
    InvalidData,
    /// The requested takeoff weight exceeds the structural MTOW.
    StructuralMtow,
    /// The pressure altitude is above the certified maximum.
    MaxPressureAlt,
    /// The outside air temperature is above Tmax for this pressure altitude.
    MaxTemperature,
    /// The requested takeoff weight is below the operating empty weight.
    Oew,
    /// The supplied centre of gravity is outside the weight-indexed limits.
    CgOutOfLimits,
    /// The tailwind component exceeds the demonstrated maximum.
    MaxTailwind,
    /// The runway slope exceeds the certified maximum.
    MaxSlope,

    // Errors raised while solving the limits:
    //
    /// The performance-limited MTOW is below the requested takeoff weight.
    TooHeavy,
    /// On a contaminated runway the corrected weight fell below the
    /// per-condition minimum of the contaminated tables.
    TooLight,

    // Errors raised by the V-speed reconciler:
    //
    /// The minimum-control-speed floors force V1 > Vr or Vr > V2.
    VmcgVmcaLimits,
    /// V2 and Vr both exceed the maximum tire speed.
    MaxTireSpeed,
}

/// An error found while validating a swapped-in aircraft dataset.
///
/// The built-in dataset upholds these invariants by construction; data
/// deserialized from a document should be passed through
/// [`AircraftData::validate`] before use.
///
/// [`AircraftData::validate`]: crate::data::AircraftData::validate
#[derive(Error, Debug)]
pub enum DataError {
    #[error("lookup table needs at least two breakpoints, got {0}")]
    TableTooShort(usize),
    #[error("lookup table keys must be strictly increasing at index {0}")]
    NonMonotonicKeys(usize),
    #[error("envelope polygon needs at least three vertices, got {0}")]
    DegeneratePolygon(usize),
}
