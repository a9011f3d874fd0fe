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

//! Property-based tests for the verbalizer.
//!
//! These tests verify invariants that should hold for every supported
//! amount.

use extenso_rs::{
    Amount, CurrencyVerbalizer, MAX_INTEGER, VerbalizeError, convert_group, convert_integer,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const TEENS: [&str; 10] = [
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

// =============================================================================
// Arbitrary Strategies
// =============================================================================

/// Generate a supported amount in cents (0 to 999,999,999.99).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=99_999_999_999i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_integer() -> impl Strategy<Value = u64> {
    0u64..=MAX_INTEGER
}

// =============================================================================
// Hundred Group Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// "cento" never appears alone; 100 is always "cem".
    #[test]
    fn cento_always_followed_by_conjunction(n in 0u64..=999) {
        let phrase = convert_group(n).unwrap();
        let tokens = phrase.tokens();
        if n == 100 {
            prop_assert_eq!(tokens, &["cem"]);
        }
        if let Some(pos) = tokens.iter().position(|t| *t == "cento") {
            prop_assert_eq!(tokens.get(pos + 1), Some(&"e"));
        }
    }

    /// 10..=19 remainders are spelled with a single teen token.
    #[test]
    fn teens_are_atomic(hundreds in 0u64..=9, teen in 10u64..=19) {
        let n = hundreds * 100 + teen;
        let phrase = convert_group(n).unwrap();
        let last = *phrase.tokens().last().unwrap();
        prop_assert_eq!(last, TEENS[(teen - 10) as usize]);
        prop_assert!(!phrase.tokens().contains(&"dez") || teen == 10);
    }

    /// Groups above 999 are rejected.
    #[test]
    fn group_out_of_range(n in 1000u64..) {
        prop_assert_eq!(convert_group(n), Err(VerbalizeError::OutOfRangeGroup(n)));
    }
}

// =============================================================================
// Scale Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// "milhão" appears iff the millions group is exactly one.
    #[test]
    fn milhao_iff_one_million_group(n in arb_integer()) {
        let phrase = convert_integer(n).unwrap();
        let millions = n / 1_000_000;
        prop_assert_eq!(phrase.tokens().contains(&"milhão"), millions == 1);
        prop_assert_eq!(phrase.tokens().contains(&"milhões"), millions >= 2);
    }

    /// "mil" appears iff the thousands group is non-zero.
    #[test]
    fn mil_iff_thousands_group(n in arb_integer()) {
        let phrase = convert_integer(n).unwrap();
        let thousands = (n % 1_000_000) / 1_000;
        let tokens = phrase.tokens();
        prop_assert_eq!(tokens.contains(&"mil"), thousands > 0);

        // One thousand is bare "mil", never "um mil".
        if thousands == 1 {
            let pos = tokens.iter().position(|t| *t == "mil").unwrap();
            prop_assert!(pos == 0 || tokens[pos - 1] == "milhão" || tokens[pos - 1] == "milhões");
        }
    }

    /// Phrases never start or end with a conjunction, and never repeat one.
    #[test]
    fn conjunctions_are_interior(n in arb_integer()) {
        let phrase = convert_integer(n).unwrap();
        let tokens = phrase.tokens();
        prop_assert_ne!(tokens.first(), Some(&"e"));
        prop_assert_ne!(tokens.last(), Some(&"e"));
        for pair in tokens.windows(2) {
            prop_assert!(!(pair[0] == "e" && pair[1] == "e"));
        }
    }

    /// Integers above the supported range are rejected.
    #[test]
    fn integer_out_of_range(n in (MAX_INTEGER + 1)..) {
        prop_assert_eq!(convert_integer(n), Err(VerbalizeError::UnsupportedMagnitude(n)));
    }
}

// =============================================================================
// Verbalizer Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Same input, byte-identical output.
    #[test]
    fn verbalize_is_idempotent(amount in arb_amount()) {
        let verbalizer = CurrencyVerbalizer::default();
        let first = verbalizer.verbalize(amount).unwrap();
        let second = verbalizer.verbalize(amount).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Only the first character is upper-case.
    #[test]
    fn only_first_character_capitalized(amount in arb_amount()) {
        let text = extenso_rs::verbalize(amount).unwrap();
        let mut chars = text.chars();
        prop_assert!(chars.next().unwrap().is_uppercase());
        prop_assert!(chars.all(|c| !c.is_uppercase()));
        prop_assert!(!text.contains("  "));
        prop_assert!(!text.ends_with(' '));
    }

    /// Unit words agree with the amount.
    #[test]
    fn unit_words_agree(amount in arb_amount()) {
        let normalized = Amount::from_decimal(amount).unwrap();
        let text = extenso_rs::verbalize(amount).unwrap();

        let has_singular = text.contains(" real") && !text.contains(" reais");
        prop_assert_eq!(has_singular, normalized.units() == 1);

        if normalized.subunits() == 0 {
            prop_assert!(!text.contains("centavo"));
        } else if normalized.subunits() == 1 {
            prop_assert!(text.ends_with(" e um centavo"));
        } else {
            prop_assert!(text.ends_with(" centavos"));
        }
    }

    /// Negative amounts fail and are never coerced to zero.
    #[test]
    fn negative_amounts_fail(cents in 1i64..=99_999_999_999i64) {
        let amount = Decimal::new(-cents, 2);
        prop_assert_eq!(extenso_rs::verbalize(amount), Err(VerbalizeError::InvalidAmount));
    }

    /// Normalization keeps the value for amounts that already have two decimals.
    #[test]
    fn normalization_preserves_cents(amount in arb_amount()) {
        let normalized = Amount::from_decimal(amount).unwrap();
        prop_assert_eq!(normalized.to_decimal(), amount);
        prop_assert!(normalized.subunits() < 100);
    }
}
