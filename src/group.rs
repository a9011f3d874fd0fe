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

//! Hundred-group conversion.
//!
//! Spells any integer in `[0, 999]`. Two irregularities drive the shape of
//! [`spell_group`]:
//!
//! - 100 alone is "cem", while 101–199 start with "cento".
//! - 10–19 are single words ("dezesseis", never "dez e seis") and bypass
//!   the tens/units split.

use crate::base::DigitGroup;
use crate::error::VerbalizeError;
use crate::phrase::WordPhrase;
use crate::tables::{CEM, CENTENAS, CONJUNCTION, DEZ_A_DEZENOVE, DEZENAS, UNIDADES};

/// Spells a raw integer as a hundred group.
///
/// Zero yields an empty phrase; callers omit empty groups.
///
/// # Errors
///
/// Returns [`VerbalizeError::OutOfRangeGroup`] if `n > 999`.
pub fn convert_group(n: u64) -> Result<WordPhrase<'static>, VerbalizeError> {
    DigitGroup::new(n).map(spell_group)
}

/// Spells a validated digit group.
pub fn spell_group(group: DigitGroup) -> WordPhrase<'static> {
    let n = group.value();
    let mut phrase = WordPhrase::new();

    if n == 0 {
        return phrase;
    }
    if n == 100 {
        phrase.push(CEM);
        return phrase;
    }

    let hundreds = usize::from(n / 100);
    if hundreds > 0 {
        phrase.push(CENTENAS[hundreds]);
    }

    let rest = n % 100;
    if rest == 0 {
        return phrase;
    }
    if !phrase.is_empty() {
        phrase.push(CONJUNCTION);
    }

    if (10..20).contains(&rest) {
        phrase.push(DEZ_A_DEZENOVE[usize::from(rest - 10)]);
        return phrase;
    }

    let tens = usize::from(rest / 10);
    let unit = usize::from(rest % 10);
    if tens > 0 {
        phrase.push(DEZENAS[tens]);
    }
    if unit > 0 {
        if tens > 0 {
            phrase.push(CONJUNCTION);
        }
        phrase.push(UNIDADES[unit]);
    }

    phrase
}
