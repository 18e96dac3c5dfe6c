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

//! Piecewise-linear lookup tables.
//!
//! All performance data is tabulated over sorted breakpoints. Queries inside
//! the breakpoint range interpolate linearly between the two surrounding
//! points; queries outside the range clamp to the nearest endpoint, which
//! keeps every downstream correction finite on sparse or irregular data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// A scalar table over one key.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table1D {
    points: Vec<(f64, f64)>,
}

impl Table1D {
    /// Creates a table from `(key, value)` breakpoints.
    ///
    /// # Panics
    ///
    /// Panics if there are fewer than two points or the keys are not
    /// strictly increasing. Tables are built once from constant data, so a
    /// malformed table is a programming error.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        let table = Self { points };
        table.check().expect("table breakpoints should be valid");
        table
    }

    pub(crate) fn check(&self) -> Result<(), DataError> {
        check_keys(self.points.iter().map(|p| p.0), self.points.len())
    }

    /// The interpolated value at `key`, clamped at the table ends.
    pub fn lookup(&self, key: f64) -> f64 {
        let (first_key, first_value) = self.points[0];
        if key <= first_key {
            return first_value;
        }
        let (last_key, last_value) = self.points[self.points.len() - 1];
        if key >= last_key {
            return last_value;
        }
        for pair in self.points.windows(2) {
            let (lo_key, lo_value) = pair[0];
            let (hi_key, hi_value) = pair[1];
            if key <= hi_key {
                return lo_value + (hi_value - lo_value) * (key - lo_key) / (hi_key - lo_key);
            }
        }
        unreachable!("breakpoints are strictly increasing");
    }

    /// The lowest key covered by the table.
    pub fn min_key(&self) -> f64 {
        self.points[0].0
    }

    /// The value at the lowest breakpoint.
    pub fn first_value(&self) -> f64 {
        self.points[0].1
    }
}

/// A scalar table over two keys.
///
/// Rows are tables over the second key, stacked along the first. The grid
/// may be irregular; a query clamps in the row dimension when the first key
/// lies outside the covered range, so tables with missing combinations stay
/// well defined.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table2D {
    rows: Vec<(f64, Table1D)>,
}

impl Table2D {
    /// Creates a table from `(key, row)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if there are fewer than two rows or the row keys are not
    /// strictly increasing.
    pub fn new(rows: Vec<(f64, Table1D)>) -> Self {
        let table = Self { rows };
        table.check().expect("table breakpoints should be valid");
        table
    }

    pub(crate) fn check(&self) -> Result<(), DataError> {
        check_keys(self.rows.iter().map(|r| r.0), self.rows.len())?;
        for (_, row) in &self.rows {
            row.check()?;
        }
        Ok(())
    }

    /// The bilinearly interpolated value at `(k1, k2)`, clamped at the ends
    /// of both dimensions.
    pub fn lookup(&self, k1: f64, k2: f64) -> f64 {
        let (first_key, first_row) = &self.rows[0];
        if k1 <= *first_key {
            return first_row.lookup(k2);
        }
        let (last_key, last_row) = &self.rows[self.rows.len() - 1];
        if k1 >= *last_key {
            return last_row.lookup(k2);
        }
        for pair in self.rows.windows(2) {
            let (lo_key, lo_row) = &pair[0];
            let (hi_key, hi_row) = &pair[1];
            if k1 <= *hi_key {
                let lo = lo_row.lookup(k2);
                let hi = hi_row.lookup(k2);
                return lo + (hi - lo) * (k1 - lo_key) / (hi_key - lo_key);
            }
        }
        unreachable!("breakpoints are strictly increasing");
    }
}

/// A table of fixed-size vectors over one key, interpolated component-wise.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(
        serialize = "[f64; N]: serde::Serialize",
        deserialize = "[f64; N]: serde::Deserialize<'de>"
    ))
)]
pub struct VectorTable<const N: usize> {
    points: Vec<(f64, [f64; N])>,
}

impl<const N: usize> VectorTable<N> {
    /// Creates a table from `(key, vector)` breakpoints.
    ///
    /// # Panics
    ///
    /// Panics if there are fewer than two points or the keys are not
    /// strictly increasing.
    pub fn new(points: Vec<(f64, [f64; N])>) -> Self {
        let table = Self { points };
        table.check().expect("table breakpoints should be valid");
        table
    }

    pub(crate) fn check(&self) -> Result<(), DataError> {
        check_keys(self.points.iter().map(|p| p.0), self.points.len())
    }

    /// The component-wise interpolated vector at `key`, clamped at the
    /// table ends. The result is returned by value so concurrent callers
    /// never share scratch storage.
    pub fn lookup(&self, key: f64) -> [f64; N] {
        let (first_key, first_vec) = &self.points[0];
        if key <= *first_key {
            return *first_vec;
        }
        let (last_key, last_vec) = &self.points[self.points.len() - 1];
        if key >= *last_key {
            return *last_vec;
        }
        for pair in self.points.windows(2) {
            let (lo_key, lo_vec) = &pair[0];
            let (hi_key, hi_vec) = &pair[1];
            if key <= *hi_key {
                let t = (key - lo_key) / (hi_key - lo_key);
                let mut out = [0.0; N];
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = lo_vec[i] + (hi_vec[i] - lo_vec[i]) * t;
                }
                return out;
            }
        }
        unreachable!("breakpoints are strictly increasing");
    }
}

fn check_keys(keys: impl Iterator<Item = f64>, len: usize) -> Result<(), DataError> {
    if len < 2 {
        return Err(DataError::TableTooShort(len));
    }
    let mut previous = f64::NEG_INFINITY;
    for (i, key) in keys.enumerate() {
        if key <= previous {
            return Err(DataError::NonMonotonicKeys(i));
        }
        previous = key;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_breakpoints() {
        let t = table1d![(0.0, 10.0), (10.0, 30.0)];
        assert_eq!(t.lookup(5.0), 20.0);
        assert_eq!(t.lookup(2.5), 15.0);
    }

    #[test]
    fn clamps_at_the_ends() {
        let t = table1d![(0.0, 10.0), (10.0, 30.0)];
        assert_eq!(t.lookup(-5.0), 10.0);
        assert_eq!(t.lookup(15.0), 30.0);
    }

    #[test]
    #[should_panic]
    fn rejects_unsorted_keys() {
        let _ = table1d![(0.0, 1.0), (0.0, 2.0)];
    }

    #[test]
    fn bilinear_between_rows() {
        let t = Table2D::new(vec![
            (0.0, table1d![(0.0, 0.0), (10.0, 10.0)]),
            (10.0, table1d![(0.0, 10.0), (10.0, 20.0)]),
        ]);
        assert_eq!(t.lookup(5.0, 5.0), 10.0);
        // clamped in the row dimension
        assert_eq!(t.lookup(20.0, 0.0), 10.0);
    }

    #[test]
    fn vector_lookup_is_component_wise() {
        let t = vec_table![(0.0, [0.0, 100.0]), (10.0, [10.0, 200.0])];
        assert_eq!(t.lookup(5.0), [5.0, 150.0]);
        assert_eq!(t.lookup(-1.0), [0.0, 100.0]);
    }
}
