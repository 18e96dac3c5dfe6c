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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The takeoff flap setting family.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TakeoffConfig {
    Conf1,
    Conf2,
    Conf3,
}

impl TakeoffConfig {
    pub const ALL: [Self; 3] = [Self::Conf1, Self::Conf2, Self::Conf3];

    /// Index into per-configuration dataset arrays.
    pub fn index(&self) -> usize {
        match self {
            Self::Conf1 => 0,
            Self::Conf2 => 1,
            Self::Conf3 => 2,
        }
    }
}

/// The landing flap setting family.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlapsConfig {
    Conf3,
    Full,
}

/// A family of limits that can govern the maximum takeoff weight.
///
/// When limits tie, the lower-ordered factor governs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LimitingFactor {
    Runway,
    SecondSegment,
    BrakeEnergy,
    Vmcg,
}

impl LimitingFactor {
    pub const ALL: [Self; 4] = [
        Self::Runway,
        Self::SecondSegment,
        Self::BrakeEnergy,
        Self::Vmcg,
    ];

    /// Index into per-family dataset arrays.
    pub fn index(&self) -> usize {
        match self {
            Self::Runway => 0,
            Self::SecondSegment => 1,
            Self::BrakeEnergy => 2,
            Self::Vmcg => 3,
        }
    }

    /// Whether this limit binds the airborne flight path rather than the
    /// ground run.
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::SecondSegment | Self::BrakeEnergy)
    }
}

/// The reported surface state of the runway.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunwayCondition {
    Dry,
    Wet,
    CompactedSnow,
    DrySnow10mm,
    DrySnow100mm,
    WetSnow5mm,
    WetSnow15mm,
    WetSnow30mm,
    Water6mm,
    Water13mm,
    Slush6mm,
    Slush13mm,
}

impl RunwayCondition {
    /// Index into the contaminated-runway dataset, `None` for dry and wet
    /// runways which use the uncontaminated tables.
    pub fn contaminant_index(&self) -> Option<usize> {
        match self {
            Self::Dry | Self::Wet => None,
            Self::CompactedSnow => Some(0),
            Self::DrySnow10mm => Some(1),
            Self::DrySnow100mm => Some(2),
            Self::WetSnow5mm => Some(3),
            Self::WetSnow15mm => Some(4),
            Self::WetSnow30mm => Some(5),
            Self::Water6mm => Some(6),
            Self::Water13mm => Some(7),
            Self::Slush6mm => Some(8),
            Self::Slush13mm => Some(9),
        }
    }

    pub fn is_contaminated(&self) -> bool {
        self.contaminant_index().is_some()
    }

    /// Index into the landing tables which cover all conditions.
    pub fn landing_index(&self) -> usize {
        match self {
            Self::Dry => 0,
            Self::Wet => 1,
            Self::CompactedSnow => 2,
            Self::DrySnow10mm => 3,
            Self::DrySnow100mm => 4,
            Self::WetSnow5mm => 5,
            Self::WetSnow15mm => 6,
            Self::WetSnow30mm => 7,
            Self::Water6mm => 8,
            Self::Water13mm => 9,
            Self::Slush6mm => 10,
            Self::Slush13mm => 11,
        }
    }
}

/// One of the preselected autobrake deceleration profiles.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AutobrakeMode {
    Low,
    Medium,
    Max,
}

impl AutobrakeMode {
    /// Index into the landing tables, ordered by decreasing brake force.
    pub fn index(&self) -> usize {
        match self {
            Self::Max => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// How the aircraft is aligned onto the runway before brake release.
///
/// The turn consumes runway length ahead of the main gear; the takeoff run
/// available is reduced accordingly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineupAngle {
    /// Entering from a taxiway aligned with the runway.
    Straight,
    /// A 90° turn onto the runway.
    Turn90,
    /// Backtracking with a 180° turn.
    Turn180,
}

impl LineupAngle {
    pub fn index(&self) -> usize {
        match self {
            Self::Straight => 0,
            Self::Turn90 => 1,
            Self::Turn180 => 2,
        }
    }
}

/// The anti-ice bleed configuration for the takeoff.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AntiIce {
    Off,
    Engine,
    EngineWing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_order_breaks_ties() {
        assert!(LimitingFactor::Runway < LimitingFactor::SecondSegment);
        assert!(LimitingFactor::BrakeEnergy < LimitingFactor::Vmcg);
    }

    #[test]
    fn contaminant_index_only_for_contaminated() {
        assert_eq!(RunwayCondition::Dry.contaminant_index(), None);
        assert_eq!(RunwayCondition::Wet.contaminant_index(), None);
        assert_eq!(RunwayCondition::Slush13mm.contaminant_index(), Some(9));
        assert!(RunwayCondition::Water6mm.is_contaminated());
    }
}
