//! Column letters and A1-style cell references

/// Convert a 1-based column index to letters (1 -> A, 26 -> Z, 27 -> AA)
///
/// The alphabet is bijective base-26: there is no zero digit, so the index is
/// decremented before every modulus.
pub fn column_letters(index: u32) -> String {
    let mut tmp = [0u8; 8];
    let mut len = 0;
    let mut n = index;
    while n > 0 {
        let rem = (n - 1) % 26;
        tmp[len] = b'A' + rem as u8;
        len += 1;
        n = (n - 1) / 26;
    }
    tmp[..len].iter().rev().map(|&b| b as char).collect()
}

/// Build a cell reference such as `C12`
pub fn cell_ref(col: u32, row: u32) -> String {
    let mut reference = column_letters(col);
    reference.push_str(itoa::Buffer::new().format(row));
    reference
}

/// Inverse of [`column_letters`]. Case-insensitive.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    letters.bytes().try_fold(0u32, |acc, b| {
        let b = b.to_ascii_uppercase();
        if !b.is_ascii_uppercase() {
            return None;
        }
        acc.checked_mul(26)?.checked_add(u32::from(b - b'A') + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(7), "G");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(52), "AZ");
        assert_eq!(column_letters(53), "BA");
        assert_eq!(column_letters(702), "ZZ");
        assert_eq!(column_letters(703), "AAA");
        assert_eq!(column_letters(18278), "ZZZ");
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(1, 1), "A1");
        assert_eq!(cell_ref(3, 12), "C12");
        assert_eq!(cell_ref(27, 100), "AA100");
    }

    #[test]
    fn test_column_index_rejects_garbage() {
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("A1"), None);
        assert_eq!(column_index("zz"), Some(702));
    }

    #[test]
    fn test_round_trip_all_three_letter_columns() {
        for n in 1..=18278 {
            assert_eq!(column_index(&column_letters(n)), Some(n), "column {n}");
        }
    }

    proptest! {
        #[test]
        fn prop_letters_are_uppercase(n in 1u32..=1_000_000) {
            let letters = column_letters(n);
            prop_assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
            prop_assert_eq!(column_index(&letters), Some(n));
        }
    }
}
