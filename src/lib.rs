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

//! # Extenso
//!
//! This library spells out monetary amounts in Brazilian Portuguese for
//! embedding in receipts, contracts and other financial documents
//! (`430.50` → "Quatrocentos e trinta reais e cinquenta centavos").
//!
//! ## Core Components
//!
//! - [`CurrencyVerbalizer`]: Entry point; normalizes an amount and assembles the phrase
//! - [`convert_integer`]: Spells integers up to 999,999,999 with scale words
//! - [`convert_group`]: Spells a single hundred group in `[0, 999]`
//! - [`Amount`]: Non-negative amount held as whole units plus cents
//! - [`VerbalizeError`]: Error types for rejected amounts
//!
//! ## Example
//!
//! ```
//! use extenso_rs::{Amount, CurrencyVerbalizer, verbalize};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(verbalize(dec!(1001)).unwrap(), "Mil e um reais");
//! assert_eq!(verbalize(dec!(1.01)).unwrap(), "Um real e um centavo");
//!
//! let amount = Amount::parse_localized("R$ 1.234,56").unwrap();
//! let clause = CurrencyVerbalizer::default().receipt_clause(amount).unwrap();
//! assert_eq!(
//!     clause,
//!     "R$ 1234,56 (Mil duzentos e trinta e quatro reais e cinquenta e seis centavos)"
//! );
//! ```
//!
//! ## Thread Safety
//!
//! Every function is pure. Lookup tables are immutable constants and all
//! intermediate state is local to the call.

mod base;
pub mod error;
mod group;
mod phrase;
mod scale;
mod tables;
mod verbalizer;

pub use base::{Amount, DigitGroup, SUBUNITS_PER_UNIT};
pub use error::VerbalizeError;
pub use group::{convert_group, spell_group};
pub use phrase::WordPhrase;
pub use scale::{MAX_INTEGER, ScaleLevel, convert_integer};
pub use verbalizer::{CurrencyUnit, CurrencyVerbalizer, verbalize, verbalize_f64};
