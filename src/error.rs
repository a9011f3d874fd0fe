// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Error types for amount verbalization.

use thiserror::Error;

/// Verbalization errors.
///
/// Every operation either yields a complete phrase or one of these; a
/// truncated phrase is never returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerbalizeError {
    /// Amount is negative, NaN or infinite
    #[error("invalid amount (must be a finite, non-negative number)")]
    InvalidAmount,

    /// Textual amount could not be parsed as a decimal number
    #[error("malformed amount: {0:?}")]
    MalformedAmount(String),

    /// Integer part exceeds 999,999,999
    #[error("unsupported magnitude: {0} (maximum is 999999999)")]
    UnsupportedMagnitude(u64),

    /// A digit group outside [0, 999] reached the hundred-group converter
    #[error("digit group out of range: {0} (must be within 0..=999)")]
    OutOfRangeGroup(u64),
}
