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

//! Scale decomposition.
//!
//! Splits an integer into millions, thousands and units groups, attaches
//! scale words and joins the groups in descending order.
//!
//! # Conjunctions between groups
//!
//! An "e" precedes the units group only when a higher group was emitted
//! and the units group is below 100: "mil e cinco", "um milhão e trinta",
//! but "mil cento e cinco" and "mil cem". No "e" is placed between the
//! millions and thousands groups.

use crate::base::DigitGroup;
use crate::error::VerbalizeError;
use crate::group::spell_group;
use crate::phrase::WordPhrase;
use crate::tables::{CONJUNCTION, MIL, MILHAO, MILHOES, UNIDADES, ZERO};

/// Largest integer [`convert_integer`] accepts.
pub const MAX_INTEGER: u64 = 999_999_999;

/// A power-of-one-thousand position within an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleLevel {
    Units,
    Thousands,
    Millions,
}

impl ScaleLevel {
    /// Levels from most to least significant.
    pub const DESCENDING: [ScaleLevel; 3] =
        [ScaleLevel::Millions, ScaleLevel::Thousands, ScaleLevel::Units];

    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Units => 1,
            Self::Thousands => 1_000,
            Self::Millions => 1_000_000,
        }
    }

    /// Extracts this level's digit group from `n`.
    ///
    /// Millions is the top level and is not reduced modulo 1000, so an
    /// integer above [`MAX_INTEGER`] surfaces as
    /// [`VerbalizeError::OutOfRangeGroup`] instead of wrapping.
    pub fn group_of(self, n: u64) -> Result<DigitGroup, VerbalizeError> {
        let shifted = n / self.multiplier();
        match self {
            Self::Millions => DigitGroup::new(shifted),
            Self::Units | Self::Thousands => DigitGroup::new(shifted % 1_000),
        }
    }

    /// Spells `group` followed by this level's scale word.
    ///
    /// One thousand is "mil" (never "um mil"); one million is "um milhão".
    pub fn spell(self, group: DigitGroup) -> WordPhrase<'static> {
        if group.is_zero() {
            return WordPhrase::new();
        }
        match self {
            Self::Units => spell_group(group),
            Self::Thousands if group.value() == 1 => [MIL].into_iter().collect(),
            Self::Thousands => {
                let mut phrase = spell_group(group);
                phrase.push(MIL);
                phrase
            }
            Self::Millions if group.value() == 1 => [UNIDADES[1], MILHAO].into_iter().collect(),
            Self::Millions => {
                let mut phrase = spell_group(group);
                phrase.push(MILHOES);
                phrase
            }
        }
    }
}

/// Spells a non-negative integer up to [`MAX_INTEGER`].
///
/// # Errors
///
/// Returns [`VerbalizeError::UnsupportedMagnitude`] if `n > 999_999_999`.
pub fn convert_integer(n: u64) -> Result<WordPhrase<'static>, VerbalizeError> {
    if n > MAX_INTEGER {
        return Err(VerbalizeError::UnsupportedMagnitude(n));
    }
    if n == 0 {
        return Ok([ZERO].into_iter().collect());
    }

    let mut phrase = WordPhrase::new();
    for level in ScaleLevel::DESCENDING {
        let group = level.group_of(n)?;
        if group.is_zero() {
            continue;
        }
        if level == ScaleLevel::Units && !phrase.is_empty() && group.value() < 100 {
            phrase.push(CONJUNCTION);
        }
        phrase.extend(level.spell(group));
    }

    Ok(phrase)
}
