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

/// Creates a [`Table1D`] from `(key, value)` pairs.
///
/// ```
/// use tolp::table1d;
///
/// let t = table1d![(0.0, 1.0), (10.0, 2.0)];
/// assert_eq!(t.lookup(5.0), 1.5);
/// ```
///
/// [`Table1D`]: crate::lookup::Table1D
#[macro_export]
macro_rules! table1d {
    ( $( ($k:expr, $v:expr) ),* $(,)? ) => {
        $crate::lookup::Table1D::new(vec![ $( ($k, $v) ),* ])
    };
}

/// Creates a [`VectorTable`] from `(key, [components…])` pairs.
///
/// ```
/// use tolp::vec_table;
///
/// let t = vec_table![(0.0, [1.0, 10.0]), (10.0, [2.0, 20.0])];
/// assert_eq!(t.lookup(5.0), [1.5, 15.0]);
/// ```
///
/// [`VectorTable`]: crate::lookup::VectorTable
#[macro_export]
macro_rules! vec_table {
    ( $( ($k:expr, $v:expr) ),* $(,)? ) => {
        $crate::lookup::VectorTable::new(vec![ $( ($k, $v) ),* ])
    };
}
