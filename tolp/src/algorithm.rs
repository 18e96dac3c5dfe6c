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

//! Algorithms.

/// A point within a cartesian coordinate system.
#[derive(Copy, Clone, Debug)]
pub struct Point {
    /// The x coordinate.
    pub x: f64,

    /// The y coordinate.
    pub y: f64,
}

/// Returns `true` if the point `p` is inside the closed polygon `v`.
///
/// The test casts a ray in the positive x direction and counts edge
/// crossings (even-odd rule). The crossing abscissa divides by the edge's
/// vertical extent; a tiny offset keeps horizontal edges from dividing by
/// zero. The result is invariant under cyclic rotation of the vertex order.
pub fn point_in_polygon(p: &Point, v: &[Point]) -> bool {
    let mut inside = false;

    for i in 0..v.len() {
        let a = v[i];
        let b = v[(i + 1) % v.len()];

        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / ((b.y - a.y) + 1e-9);
            if p.x < x {
                inside = !inside;
            }
        }
    }

    inside
}
