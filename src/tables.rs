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

//! Static numeral tables.
//!
//! Index positions match the numeric value of the digit they spell, so
//! `UNIDADES[3]` is "três" and `CENTENAS[3]` is "trezentos". Slot zero of
//! every positional table is empty and never emitted.

/// Units 1–9.
pub(crate) const UNIDADES: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

/// Lexically atomic 10–19, indexed by `n - 10`.
pub(crate) const DEZ_A_DEZENOVE: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

/// Tens 20–90, indexed by the tens digit. Slot 1 is covered by
/// [`DEZ_A_DEZENOVE`].
pub(crate) const DEZENAS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta", "noventa",
];

/// Hundreds 100–900, indexed by the hundreds digit. 100 on its own is
/// [`CEM`].
pub(crate) const CENTENAS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

pub(crate) const CEM: &str = "cem";
pub(crate) const ZERO: &str = "zero";
pub(crate) const CONJUNCTION: &str = "e";

pub(crate) const MIL: &str = "mil";
pub(crate) const MILHAO: &str = "milhão";
pub(crate) const MILHOES: &str = "milhões";
