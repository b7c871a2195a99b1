//! Choosing between singular and plural forms by count

use crate::core::compose::Composer;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Placeholder replaced by the quantity in a plural form
pub const QUANTITY_PLACEHOLDER: &str = "%d";

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Something that has a quantity: a number, or a collection whose size is used
pub trait Countable {
    fn quantity(&self) -> i64;
}

macro_rules! impl_countable_for_int {
    ($($t:ty),*) => {
        $(
            impl Countable for $t {
                fn quantity(&self) -> i64 {
                    i64::try_from(*self).unwrap_or(i64::MAX)
                }
            }
        )*
    };
}

impl_countable_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_countable_for_collection {
    ($($t:ident < $($g:ident),+ >),*) => {
        $(
            impl<$($g),+> Countable for $t<$($g),+> {
                fn quantity(&self) -> i64 {
                    self.len().quantity()
                }
            }
        )*
    };
}

impl_countable_for_collection!(
    Vec<T>,
    VecDeque<T>,
    HashSet<T>,
    BTreeSet<T>,
    HashMap<K, V>,
    BTreeMap<K, V>
);

impl<T> Countable for [T] {
    fn quantity(&self) -> i64 {
        self.len().quantity()
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn quantity(&self) -> i64 {
        N.quantity()
    }
}

impl<C: Countable + ?Sized> Countable for &C {
    fn quantity(&self) -> i64 {
        (**self).quantity()
    }
}

/// Pick `singular` for a quantity of one, otherwise `plural` with the quantity filled in
///
/// When `use_words` is set, quantities from zero to nine are spelled out,
/// each word passing through `composer` so it can be translated.
pub fn phrase(
    composer: &dyn Composer,
    quantity: i64,
    singular: &str,
    plural: &str,
    use_words: bool,
) -> String {
    if quantity == 1 {
        return singular.to_string();
    }

    if !plural.contains(QUANTITY_PLACEHOLDER) {
        return plural.to_string();
    }

    let number = match usize::try_from(quantity) {
        Ok(digit) if use_words && digit < DIGIT_WORDS.len() => {
            composer.compose(DIGIT_WORDS[digit], &[])
        }
        _ => quantity.to_string(),
    };

    plural.replace(QUANTITY_PLACEHOLDER, &number)
}
