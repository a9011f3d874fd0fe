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

//! Core value types: monetary amounts and three-digit groups.

use crate::error::VerbalizeError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Number of sub-units (cents) in one currency unit.
pub const SUBUNITS_PER_UNIT: u8 = 100;

/// A non-negative monetary amount with exactly two fractional digits.
///
/// Stored as whole units plus sub-units so no binary floating-point value
/// ever reaches the verbalizer. Serializes as a decimal string
/// (`"430.50"`).
///
/// # Invariants
///
/// - `subunits < 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount {
    units: u64,
    subunits: u8,
}

impl Amount {
    pub const ZERO: Amount = Amount {
        units: 0,
        subunits: 0,
    };

    /// Builds an amount from whole units and sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`VerbalizeError::InvalidAmount`] if `subunits >= 100`.
    pub fn new(units: u64, subunits: u8) -> Result<Self, VerbalizeError> {
        if subunits >= SUBUNITS_PER_UNIT {
            return Err(VerbalizeError::InvalidAmount);
        }
        Ok(Self { units, subunits })
    }

    pub fn units(&self) -> u64 {
        self.units
    }

    pub fn subunits(&self) -> u8 {
        self.subunits
    }

    /// Normalizes a decimal to two fractional digits, rounding half away
    /// from zero.
    ///
    /// # Errors
    ///
    /// - [`VerbalizeError::InvalidAmount`] - `value` is negative.
    /// - [`VerbalizeError::UnsupportedMagnitude`] - `value` does not fit in `u64` units.
    pub fn from_decimal(value: Decimal) -> Result<Self, VerbalizeError> {
        if value.is_sign_negative() && !value.is_zero() {
            debug!(%value, "rejecting negative amount");
            return Err(VerbalizeError::InvalidAmount);
        }

        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);

        // Mantissa is the amount in sub-units once the scale is exactly 2.
        let total = rounded.mantissa().unsigned_abs();
        let units = u64::try_from(total / u128::from(SUBUNITS_PER_UNIT))
            .map_err(|_| VerbalizeError::UnsupportedMagnitude(u64::MAX))?;
        let subunits = (total % u128::from(SUBUNITS_PER_UNIT)) as u8;

        Ok(Self { units, subunits })
    }

    /// Normalizes a floating-point value.
    ///
    /// # Errors
    ///
    /// - [`VerbalizeError::InvalidAmount`] - `value` is negative, NaN or infinite.
    /// - [`VerbalizeError::UnsupportedMagnitude`] - `value` exceeds the decimal range.
    pub fn from_f64(value: f64) -> Result<Self, VerbalizeError> {
        if !value.is_finite() || value < 0.0 {
            debug!(value, "rejecting non-finite or negative amount");
            return Err(VerbalizeError::InvalidAmount);
        }
        let decimal = Decimal::from_f64(value)
            .ok_or(VerbalizeError::UnsupportedMagnitude(value as u64))?;
        Self::from_decimal(decimal)
    }

    /// Parses Brazilian-formatted text such as `"R$ 1.234,56"`.
    ///
    /// `.` is read as a thousands separator and `,` as the decimal
    /// separator. An optional `R$` prefix and surrounding whitespace are
    /// ignored; blank input is zero.
    ///
    /// # Errors
    ///
    /// - [`VerbalizeError::MalformedAmount`] - text is not a number.
    /// - [`VerbalizeError::InvalidAmount`] - number is negative.
    pub fn parse_localized(text: &str) -> Result<Self, VerbalizeError> {
        let trimmed = text.trim();
        let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed).trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '.')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        let value = Decimal::from_str(&normalized)
            .map_err(|_| VerbalizeError::MalformedAmount(text.to_string()))?;
        Self::from_decimal(value)
    }

    /// Returns the amount as a decimal with scale 2.
    pub fn to_decimal(&self) -> Decimal {
        let total =
            i128::from(self.units) * i128::from(SUBUNITS_PER_UNIT) + i128::from(self.subunits);
        Decimal::from_i128_with_scale(total, 2)
    }

    /// Formats the amount the way receipts print it: `R$ 430,50`.
    pub fn to_brl(&self) -> String {
        format!("R$ {},{:02}", self.units, self.subunits)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.units, self.subunits)
    }
}

/// Parses a plain decimal (`"430.50"`).
impl FromStr for Amount {
    type Err = VerbalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| VerbalizeError::MalformedAmount(s.to_string()))?;
        Self::from_decimal(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = VerbalizeError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = VerbalizeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.to_decimal()
    }
}

/// An integer in `[0, 999]`, the unit of hundred-group conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitGroup(u16);

impl DigitGroup {
    pub const MAX: u16 = 999;

    /// # Errors
    ///
    /// Returns [`VerbalizeError::OutOfRangeGroup`] if `value > 999`.
    pub fn new(value: u64) -> Result<Self, VerbalizeError> {
        match u16::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(VerbalizeError::OutOfRangeGroup(value)),
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u64> for DigitGroup {
    type Error = VerbalizeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
