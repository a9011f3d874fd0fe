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

//! Word-token phrases.
//!
//! Numerals are assembled as an ordered list of tokens and joined with
//! single spaces once, at the end. Conjunctions are ordinary tokens.

use std::fmt;

/// An ordered sequence of word tokens.
///
/// Numeral converters produce `WordPhrase<'static>` (every token comes
/// from the static tables); the verbalizer appends borrowed unit words
/// to the same list before joining.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPhrase<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> WordPhrase<'a> {
    /// Creates an empty phrase.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends one token.
    pub fn push(&mut self, token: &'a str) {
        self.tokens.push(token);
    }

    /// Appends every token of `other`, preserving order.
    pub fn extend(&mut self, other: WordPhrase<'a>) {
        self.tokens.extend(other.tokens);
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Joins the tokens with single spaces.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }
}

impl<'a> FromIterator<&'a str> for WordPhrase<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for WordPhrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Upper-cases the first character and leaves the rest untouched.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
