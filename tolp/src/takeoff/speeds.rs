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

//! V-speed kernels and the ordered reconciler.
//!
//! The kernels produce raw speeds from the weight-indexed base tables plus
//! runway, altitude, slope and wind corrections; one kernel instance is
//! fitted for ground-run-limited takeoffs and one for airborne-limited
//! ones. The reconciler then rounds and enforces the control-speed floors,
//! the V1 ≤ Vr ≤ V2 order and the tire-speed ceiling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::{SpeedData, SpeedKernel};
use crate::environment::Environment;
use crate::error::CalcError;

/// The reconciled takeoff speeds in kt.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VSpeeds {
    pub v1: i32,
    pub vr: i32,
    pub v2: i32,
}

/// The minimum speeds the reconciler enforces, in kt.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct SpeedFloors {
    pub min_v1: i32,
    pub min_vr: i32,
    pub min_v2: i32,
}

fn kernel(coefs: &SpeedKernel, base: f64, env: &Environment, slope: f64) -> f64 {
    base + coefs.runway * (env.adjusted_tora - 3000.0) / 1000.0
        + coefs.altitude * env.pressure_alt / 1000.0
        + coefs.slope * slope
        + coefs.wind * env.headwind
}

/// The unreconciled dry V-speeds `(v1, vr, v2)`.
pub(crate) fn dry_speeds(
    speeds: &SpeedData,
    conf_index: usize,
    env: &Environment,
    slope: f64,
    tow: f64,
    airborne_limited: bool,
) -> (f64, f64, f64) {
    let set = if airborne_limited {
        &speeds.airborne
    } else {
        &speeds.ground
    };
    let offset = speeds.conf_offset[conf_index];

    (
        kernel(&set.v1, speeds.v1_base.lookup(tow) + offset, env, slope),
        kernel(&set.vr, speeds.vr_base.lookup(tow) + offset, env, slope),
        kernel(&set.v2, speeds.v2_base.lookup(tow) + offset, env, slope),
    )
}

/// The reconciliation floors from the Vmcg/Vmca/Vmu tables.
pub(crate) fn floors(
    speeds: &SpeedData,
    conf_index: usize,
    env: &Environment,
    tow: f64,
) -> SpeedFloors {
    let pa = env.pressure_alt;
    let min_v2_vmc = speeds.min_v2_vmc[conf_index].lookup(pa);
    let min_v2_vmu = speeds.min_v2_vmu[conf_index].lookup(pa, tow);

    SpeedFloors {
        min_v1: speeds.min_v1_vmc.lookup(pa).ceil() as i32,
        min_vr: speeds.min_vr_vmc.lookup(pa).ceil() as i32,
        min_v2: min_v2_vmc.max(min_v2_vmu).ceil() as i32,
    }
}

/// Rounds the raw speeds and enforces floors, ordering and the tire-speed
/// ceiling.
///
/// Already-consistent triples pass through unchanged, so reconciliation is
/// idempotent.
pub(crate) fn reconcile(
    raw: (f64, f64, f64),
    floors: &SpeedFloors,
    tire_speed: f64,
) -> (VSpeeds, Option<CalcError>) {
    let mut error = None;
    let mut v1 = (raw.0.round() as i32).max(floors.min_v1);
    let mut vr = (raw.1.round() as i32).max(floors.min_vr);
    let v2 = (raw.2.round() as i32).max(floors.min_v2);

    if vr > v2 {
        vr = v2;
        if vr < floors.min_vr {
            error = Some(CalcError::VmcgVmcaLimits);
        }
    }

    let tire = tire_speed as i32;
    if v2 > tire {
        if vr > tire {
            error = error.or(Some(CalcError::MaxTireSpeed));
        } else {
            // trade rotation margin for the overspeed on the way to V2
            vr = vr.min(tire - (v2 - tire));
        }
    }

    if v1 > vr {
        v1 = vr;
        if v1 < floors.min_v1 {
            error = error.or(Some(CalcError::VmcgVmcaLimits));
        }
    }

    (VSpeeds { v1, vr, v2 }, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AircraftData;
    use crate::types::LineupAngle;

    fn floors_at_sea_level() -> SpeedFloors {
        SpeedFloors {
            min_v1: 116,
            min_vr: 120,
            min_v2: 127,
        }
    }

    #[test]
    fn valid_triples_pass_through() {
        let (v, err) = reconcile((140.0, 147.0, 153.0), &floors_at_sea_level(), 195.0);
        assert_eq!(
            v,
            VSpeeds {
                v1: 140,
                vr: 147,
                v2: 153
            }
        );
        assert!(err.is_none());
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let floors = floors_at_sea_level();
        let (first, _) = reconcile((109.0, 131.0, 128.0), &floors, 195.0);
        let (second, _) = reconcile(
            (first.v1 as f64, first.vr as f64, first.v2 as f64),
            &floors,
            195.0,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn floors_raise_low_speeds() {
        let (v, err) = reconcile((100.0, 104.0, 110.0), &floors_at_sea_level(), 195.0);
        assert!(err.is_none());
        assert_eq!((v.v1, v.vr, v.v2), (116, 120, 127));
    }

    #[test]
    fn rotation_never_exceeds_takeoff_safety_speed() {
        let (v, err) = reconcile((140.0, 160.0, 150.0), &floors_at_sea_level(), 195.0);
        assert!(err.is_none());
        assert!(v.v1 <= v.vr && v.vr <= v.v2);
        assert_eq!(v.vr, 150);
    }

    #[test]
    fn collapsing_below_the_rotation_floor_is_an_error() {
        let floors = SpeedFloors {
            min_v1: 116,
            min_vr: 130,
            min_v2: 127,
        };
        let (_, err) = reconcile((120.0, 132.0, 127.0), &floors, 195.0);
        assert_eq!(err, Some(CalcError::VmcgVmcaLimits));
    }

    #[test]
    fn tire_speed_trades_rotation_margin_first() {
        let floors = floors_at_sea_level();
        let (v, err) = reconcile((180.0, 192.0, 198.0), &floors, 195.0);
        assert!(err.is_none());
        // 195 − (198 − 195)
        assert_eq!(v.vr, 192);
        let (v, err) = reconcile((180.0, 194.0, 198.0), &floors, 195.0);
        assert!(err.is_none());
        assert_eq!(v.vr, 192);
        assert!(v.v1 <= v.vr);
    }

    #[test]
    fn tire_speed_on_both_speeds_is_an_error() {
        let (_, err) = reconcile((190.0, 197.0, 199.0), &floors_at_sea_level(), 195.0);
        assert_eq!(err, Some(CalcError::MaxTireSpeed));
    }

    #[test]
    fn heavier_aircraft_fly_faster() {
        let data = AircraftData::widebody();
        let env = Environment::resolve(&data, 0.0, 1013.25, 0.0, LineupAngle::Straight, 3000.0);
        let light = dry_speeds(&data.takeoff.speeds, 1, &env, 0.0, 300_000.0, false);
        let heavy = dry_speeds(&data.takeoff.speeds, 1, &env, 0.0, 450_000.0, false);
        assert!(light.0 < heavy.0 && light.1 < heavy.1 && light.2 < heavy.2);
    }
}
