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

//! The tabulated aircraft performance data.
//!
//! All constants the engine works from are collected in one immutable
//! [`AircraftData`] value, so the whole engine is parameterized by data: the
//! built-in estimated dataset ([`AircraftData::widebody`]) can be replaced
//! by a document deserialized with the `serde` feature without touching any
//! code. A swapped-in dataset should be run through
//! [`AircraftData::validate`] once after loading.
//!
//! Units follow the engine conventions: weights in kg, speeds in kt,
//! temperatures in °C, altitudes in ft, distances in m.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::lookup::{Table1D, Table2D, VectorTable};

mod widebody;

/// An affine coefficient pair evaluated as `gain · l + offset`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinCoef {
    pub gain: f64,
    pub offset: f64,
}

impl LinCoef {
    pub const ZERO: Self = Self {
        gain: 0.0,
        offset: 0.0,
    };

    pub fn at(&self, l: f64) -> f64 {
        self.gain * l + self.offset
    }
}

/// The uncorrected limit weight of a family, either tabulated over the
/// adjusted takeoff run or affine in it.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BaseLimit {
    /// Tabulated base, kg over adjusted TORA in m.
    Table(Table1D),
    /// `per_metre · tora + offset` with `per_metre` in kg/m and `offset` in
    /// kg.
    Affine { per_metre: f64, offset: f64 },
}

impl BaseLimit {
    pub fn at(&self, adjusted_tora: f64) -> f64 {
        match self {
            Self::Table(table) => table.lookup(adjusted_tora),
            Self::Affine { per_metre, offset } => per_metre * adjusted_tora + offset,
        }
    }
}

/// The three-segment temperature polynomial of a limit family.
///
/// Each segment is affine in the family's characteristic length `L`; the
/// segments break at Tref and Tmax and the polynomial is undefined above
/// Tflexmax.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TempPolynomial {
    pub below_ref: LinCoef,
    pub ref_to_max: LinCoef,
    pub above_max: LinCoef,
}

/// One wind branch (head or tail) of a limit family.
///
/// `primary` multiplies the wind alone; the remaining coefficients couple
/// the wind with the temperature segments. Only the Vmcg head branch
/// carries the ISA-to-Tref segment (`below_ref`); the Vmcg tail branch is
/// the shorter tuple of primary, above-Tref and above-Tmax terms.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindBranch {
    pub primary: LinCoef,
    pub below_ref: LinCoef,
    pub above_ref: LinCoef,
    pub above_max: LinCoef,
}

/// Head- and tailwind branches of a limit family.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindPolynomial {
    pub head: WindBranch,
    pub tail: WindBranch,
}

/// The correction coefficients of one limit family for one configuration.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FamilyCoefficients {
    pub base: BaseLimit,
    /// Slope correction coefficient, applied per m of run and % of slope.
    pub slope: f64,
    /// Altitude correction pair `(a1, a2)` in `1000 · pa · (pa·a1 + a2)`.
    pub altitude: LinCoef,
    pub temperature: TempPolynomial,
    pub wind: WindPolynomial,
}

/// One limit family across the three takeoff configurations.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FamilyTables {
    /// Divisor of the pressure altitude in the characteristic length
    /// `L = tora − pa/k`; `None` for families insensitive to it.
    pub l_divisor: Option<f64>,
    pub confs: [FamilyCoefficients; 3],
}

/// Per-configuration data for wet runways, split by whether the outside air
/// temperature is above the computed Tvmcg. Every table is indexed by the
/// headwind component.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WetData {
    /// Two affine forms `[m1, b1, m2, b2]` over `L = tora − pa/20`; the
    /// more negative form gives the TOW reduction, clipped non-positive.
    pub tow_above: [VectorTable<4>; 3],
    pub tow_below: [VectorTable<4>; 3],
    /// One affine form `[m, b]` giving the flex temperature reduction in
    /// °C, clipped non-positive.
    pub flex_above: [VectorTable<2>; 3],
    pub flex_below: [VectorTable<2>; 3],
    /// `[ΔV1, ΔVr, ΔV2]` in kt.
    pub speeds_above: [VectorTable<3>; 3],
    pub speeds_below: [VectorTable<3>; 3],
}

/// The tables for one contaminated runway condition.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contaminant {
    /// Weight subtracted from the dry MTOW, kg over adjusted TORA.
    pub weight_correction: [Table1D; 3],
    /// Maps the corrected weight to the contaminated MTOW, kg over kg.
    pub mtow: [Table1D; 3],
    /// Below this corrected weight the contaminated tables do not apply.
    pub min_corrected: f64,
    /// `[V1, Vr, V2]` in kt over TOW in kg.
    pub v_speeds: [VectorTable<3>; 3],
}

/// Coefficients of one V-speed kernel: corrections added to the tabulated
/// base speed.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedKernel {
    /// kt per km of adjusted TORA beyond the 3000 m reference.
    pub runway: f64,
    /// kt per 1000 ft of pressure altitude.
    pub altitude: f64,
    /// kt per % of slope.
    pub slope: f64,
    /// kt per kt of wind component.
    pub wind: f64,
}

/// The kernels of the three V-speeds for one limit branch.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedKernelSet {
    pub v1: SpeedKernel,
    pub vr: SpeedKernel,
    pub v2: SpeedKernel,
}

/// V-speed base tables, kernel instances and reconciliation floors.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedData {
    /// Base speeds in kt over TOW in kg, for the reference configuration.
    pub v1_base: Table1D,
    pub vr_base: Table1D,
    pub v2_base: Table1D,
    /// Additive offset per configuration on all three base speeds.
    pub conf_offset: [f64; 3],
    /// Kernel used when the governing factor limits the ground run.
    pub ground: SpeedKernelSet,
    /// Kernel used when the governing factor limits the airborne path.
    pub airborne: SpeedKernelSet,
    /// Vmcg-derived V1 floor in kt over pressure altitude.
    pub min_v1_vmc: Table1D,
    /// Vmca-derived Vr floor in kt over pressure altitude.
    pub min_vr_vmc: Table1D,
    /// Vmca-derived V2 floor per configuration.
    pub min_v2_vmc: [Table1D; 3],
    /// Vmu-derived V2 floor per configuration over (pressure altitude,
    /// TOW).
    pub min_v2_vmu: [Table2D; 3],
}

/// The MTOW bonus and speed increments granted for a forward CG.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForwardCg {
    /// Per configuration: bonus kg as `gain · mtow + offset`, clipped
    /// non-negative.
    pub mtow_gain: [LinCoef; 3],
    /// The speed increments only apply at or below this MTOW in kg.
    pub speed_threshold: f64,
    /// `[ΔV1, ΔVr, ΔV2]` per configuration in kt.
    pub speed_increment: [[f64; 3]; 3],
}

/// Flex temperature decrements for bleed consumers in °C.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlexDecrements {
    pub engine_anti_ice: f64,
    pub engine_wing_anti_ice: f64,
    pub packs: f64,
}

/// Everything the takeoff calculator reads.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TakeoffData {
    /// Indexed by [`LimitingFactor`].
    ///
    /// [`LimitingFactor`]: crate::types::LimitingFactor
    pub families: [FamilyTables; 4],
    /// Per configuration `[a, b]` over headwind for
    /// `Tvmcg = a·(tora − pa/10) + b`.
    pub tvmcg: [VectorTable<2>; 3],
    pub wet: WetData,
    /// Indexed by [`RunwayCondition::contaminant_index`].
    ///
    /// [`RunwayCondition::contaminant_index`]: crate::types::RunwayCondition::contaminant_index
    pub contaminants: [Contaminant; 10],
    pub speeds: SpeedData,
    pub forward_cg: ForwardCg,
    pub flex_decrement: FlexDecrements,
}

/// One row of the landing distance tables.
///
/// `ref_distance` is the unmargined distance at the reference weight; the
/// remaining fields are the correction summands of the landing equation.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandingRow {
    pub ref_distance: f64,
    /// Reference landing weight in tonnes.
    pub ref_weight_t: f64,
    /// m per tonne above the reference weight.
    pub weight_above: f64,
    /// m per tonne below the reference weight (negative).
    pub weight_below: f64,
    /// m per 5 kt of approach speed above target.
    pub speed: f64,
    /// m per 5 kt of tailwind component.
    pub wind: f64,
    /// m per reverser pair (negative).
    pub reverser: f64,
    /// m per 1000 ft of pressure altitude.
    pub altitude: f64,
    /// m per % of downhill slope.
    pub slope: f64,
    /// m per 10 °C above ISA.
    pub temperature: f64,
    /// m added by the overweight procedure.
    pub overweight: f64,
}

/// Landing rows of one runway condition, per flap setting, indexed by
/// [`AutobrakeMode`].
///
/// [`AutobrakeMode`]: crate::types::AutobrakeMode
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandingConditionRows {
    pub full: [LandingRow; 3],
    pub conf3: [LandingRow; 3],
}

/// Everything the landing calculator reads.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandingData {
    /// Lowest selectable speed in kt over landing weight in kg.
    pub vls_full: Table1D,
    pub vls_conf3: Table1D,
    /// Floor on the weight ratio inside the square root used below the
    /// table range; prevents pathologically low speeds at light weights.
    pub vls_floor_ratio: f64,
    pub autoland_full: f64,
    pub autoland_conf3: f64,
    /// Safety margin multiplied onto the summed distance.
    pub margin: f64,
    /// Indexed by [`RunwayCondition::landing_index`].
    ///
    /// [`RunwayCondition::landing_index`]: crate::types::RunwayCondition::landing_index
    pub conditions: [LandingConditionRows; 12],
}

/// Weight-and-balance envelopes and CG-derived outputs.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Envelopes {
    /// Closed polygons of `(CG %MAC, weight kg)` vertices.
    pub mtow: Vec<(f64, f64)>,
    pub mzfw: Vec<(f64, f64)>,
    pub mlw: Vec<(f64, f64)>,
    /// `[forward, aft]` CG limits in %MAC over TOW in kg.
    pub cg_limits: VectorTable<2>,
    /// Linear CG to stabilizer trim map.
    pub stab_trim: StabTrim,
}

/// Maps the CG in %MAC to a takeoff stabilizer trim setting in degrees.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StabTrim {
    pub gain: f64,
    pub offset: f64,
    pub min: f64,
    pub max: f64,
}

impl StabTrim {
    pub fn at(&self, cg_percent_mac: f64) -> f64 {
        (self.gain * cg_percent_mac + self.offset).clamp(self.min, self.max)
    }
}

/// Certified structural weights in kg.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructuralLimits {
    pub oew: f64,
    pub mtow: f64,
    pub mzfw: f64,
    pub mlw: f64,
}

/// Certified operational limits.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationalLimits {
    /// ft.
    pub max_pressure_alt: f64,
    /// kt, stored positive.
    pub max_tailwind: f64,
    /// kt of headwind credited at most.
    pub max_headwind: f64,
    /// %.
    pub max_slope: f64,
    /// kt, cap on V2/Vr from the tire speed rating.
    pub tire_speed: f64,
}

/// Weight penalties for bleed consumers in kg.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BleedPenalties {
    pub packs: f64,
    pub engine_wing_anti_ice: f64,
}

/// The complete dataset of one aircraft.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AircraftData {
    pub structural: StructuralLimits,
    pub operational: OperationalLimits,
    /// Lineup distance in m indexed by [`LineupAngle`].
    ///
    /// [`LineupAngle`]: crate::types::LineupAngle
    pub lineup_distance: [f64; 3],
    pub bleed: BleedPenalties,
    /// Tref in °C over field elevation in ft.
    pub t_ref: Table1D,
    /// Tmax in °C over pressure altitude in ft.
    pub t_max: Table1D,
    pub takeoff: TakeoffData,
    pub landing: LandingData,
    pub envelopes: Envelopes,
}

impl Default for AircraftData {
    fn default() -> Self {
        Self::widebody()
    }
}

impl AircraftData {
    /// Checks every lookup table and polygon of the dataset.
    ///
    /// The built-in dataset is valid by construction; call this once on
    /// data deserialized from a document.
    pub fn validate(&self) -> Result<(), DataError> {
        self.t_ref.check()?;
        self.t_max.check()?;

        for family in &self.takeoff.families {
            for conf in &family.confs {
                if let BaseLimit::Table(table) = &conf.base {
                    table.check()?;
                }
            }
        }
        for table in &self.takeoff.tvmcg {
            table.check()?;
        }
        let wet = &self.takeoff.wet;
        for i in 0..3 {
            wet.tow_above[i].check()?;
            wet.tow_below[i].check()?;
            wet.flex_above[i].check()?;
            wet.flex_below[i].check()?;
            wet.speeds_above[i].check()?;
            wet.speeds_below[i].check()?;
        }
        for contaminant in &self.takeoff.contaminants {
            for i in 0..3 {
                contaminant.weight_correction[i].check()?;
                contaminant.mtow[i].check()?;
                contaminant.v_speeds[i].check()?;
            }
        }
        let speeds = &self.takeoff.speeds;
        speeds.v1_base.check()?;
        speeds.vr_base.check()?;
        speeds.v2_base.check()?;
        speeds.min_v1_vmc.check()?;
        speeds.min_vr_vmc.check()?;
        for i in 0..3 {
            speeds.min_v2_vmc[i].check()?;
            speeds.min_v2_vmu[i].check()?;
        }

        self.landing.vls_full.check()?;
        self.landing.vls_conf3.check()?;

        for polygon in [&self.envelopes.mtow, &self.envelopes.mzfw, &self.envelopes.mlw] {
            if polygon.len() < 3 {
                return Err(DataError::DegeneratePolygon(polygon.len()));
            }
        }
        self.envelopes.cg_limits.check()?;

        Ok(())
    }
}
