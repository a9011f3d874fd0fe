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

//! Currency verbalization.
//!
//! The [`CurrencyVerbalizer`] is the entry point used by document
//! rendering: it normalizes an amount to units and sub-units, spells each
//! part, attaches singular or plural unit words and capitalizes the
//! result.
//!
//! # Example
//!
//! ```
//! use extenso_rs::CurrencyVerbalizer;
//! use rust_decimal_macros::dec;
//!
//! let verbalizer = CurrencyVerbalizer::default();
//! assert_eq!(
//!     verbalizer.verbalize(dec!(430.50)).unwrap(),
//!     "Quatrocentos e trinta reais e cinquenta centavos"
//! );
//! ```
//!
//! # Thread Safety
//!
//! A verbalizer holds only its immutable unit configuration; it is `Send +
//! Sync` and can be shared across threads without synchronization.

use crate::base::Amount;
use crate::error::VerbalizeError;
use crate::phrase::{WordPhrase, capitalize_first};
use crate::scale::convert_integer;
use crate::tables::CONJUNCTION;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Singular/plural words for a currency and its sub-unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyUnit {
    pub singular: String,
    pub plural: String,
    pub subunit_singular: String,
    pub subunit_plural: String,
}

impl CurrencyUnit {
    pub fn new(
        singular: impl Into<String>,
        plural: impl Into<String>,
        subunit_singular: impl Into<String>,
        subunit_plural: impl Into<String>,
    ) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
            subunit_singular: subunit_singular.into(),
            subunit_plural: subunit_plural.into(),
        }
    }

    /// Brazilian real: real/reais, centavo/centavos.
    pub fn real() -> Self {
        Self::new("real", "reais", "centavo", "centavos")
    }

    fn unit_word(&self, units: u64) -> &str {
        if units == 1 {
            self.singular.as_str()
        } else {
            self.plural.as_str()
        }
    }

    fn subunit_word(&self, subunits: u8) -> &str {
        if subunits == 1 {
            self.subunit_singular.as_str()
        } else {
            self.subunit_plural.as_str()
        }
    }
}

impl Default for CurrencyUnit {
    fn default() -> Self {
        Self::real()
    }
}

/// Converts monetary amounts into written-out Portuguese.
#[derive(Debug, Clone, Default)]
pub struct CurrencyVerbalizer {
    unit: CurrencyUnit,
}

impl CurrencyVerbalizer {
    pub fn new(unit: CurrencyUnit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> &CurrencyUnit {
        &self.unit
    }

    /// Verbalizes a decimal amount, rounded to two fractional digits.
    ///
    /// # Errors
    ///
    /// - [`VerbalizeError::InvalidAmount`] - `amount` is negative.
    /// - [`VerbalizeError::UnsupportedMagnitude`] - integer part exceeds 999,999,999.
    pub fn verbalize(&self, amount: Decimal) -> Result<String, VerbalizeError> {
        self.verbalize_amount(Amount::from_decimal(amount)?)
    }

    /// Verbalizes a floating-point amount.
    ///
    /// # Errors
    ///
    /// - [`VerbalizeError::InvalidAmount`] - `amount` is negative, NaN or infinite.
    /// - [`VerbalizeError::UnsupportedMagnitude`] - integer part exceeds 999,999,999.
    pub fn verbalize_f64(&self, amount: f64) -> Result<String, VerbalizeError> {
        self.verbalize_amount(Amount::from_f64(amount)?)
    }

    /// Verbalizes a normalized amount.
    ///
    /// # Format
    ///
    /// | Sub-units | Output |
    /// |-----------|--------|
    /// | zero | `<units> <unit-word>` |
    /// | non-zero | `<units> <unit-word> e <sub-units> <sub-unit-word>` |
    ///
    /// # Errors
    ///
    /// Returns [`VerbalizeError::UnsupportedMagnitude`] if the integer part
    /// exceeds 999,999,999.
    pub fn verbalize_amount(&self, amount: Amount) -> Result<String, VerbalizeError> {
        trace!(units = amount.units(), subunits = amount.subunits(), "verbalizing amount");

        let mut phrase: WordPhrase<'_> = convert_integer(amount.units())?;
        phrase.push(self.unit.unit_word(amount.units()));

        let subunits = amount.subunits();
        if subunits > 0 {
            phrase.push(CONJUNCTION);
            phrase.extend(convert_integer(u64::from(subunits))?);
            phrase.push(self.unit.subunit_word(subunits));
        }

        Ok(capitalize_first(&phrase.join()))
    }

    /// Renders the numeric and written forms side by side, as printed on
    /// receipts: `R$ 430,50 (Quatrocentos e trinta reais e cinquenta centavos)`.
    ///
    /// # Errors
    ///
    /// Same as [`CurrencyVerbalizer::verbalize_amount`].
    pub fn receipt_clause(&self, amount: Amount) -> Result<String, VerbalizeError> {
        Ok(format!("{} ({})", amount.to_brl(), self.verbalize_amount(amount)?))
    }
}

/// Verbalizes `amount` in reais with the default unit words.
///
/// # Errors
///
/// See [`CurrencyVerbalizer::verbalize`].
pub fn verbalize(amount: Decimal) -> Result<String, VerbalizeError> {
    CurrencyVerbalizer::default().verbalize(amount)
}

/// Verbalizes a floating-point `amount` in reais.
///
/// # Errors
///
/// See [`CurrencyVerbalizer::verbalize_f64`].
pub fn verbalize_f64(amount: f64) -> Result<String, VerbalizeError> {
    CurrencyVerbalizer::default().verbalize_f64(amount)
}
