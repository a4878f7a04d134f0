//! Deterministic text shortening for combined header names.

/// Abbreviate one header fragment.
///
/// Splits on whitespace and shortens each word independently:
///
/// - all digits: kept verbatim (`"2024"` → `"2024"`)
/// - letters mixed with digits: first alphabetic character followed by the
///   word's digit runs (`"a1b2c3"` → `"a123"`)
/// - all letters: first character only (`"quý"` → `"q"`)
///
/// Word results concatenate with no separator, so `"Năm 2024"` → `"N2024"`
/// and `"Học kì 1"` → `"hk1"` when lowercase. Case is preserved, never
/// normalized: `"quý 1"` yields `"q1"`, not `"Q1"`. Empty input yields an
/// empty string.
pub fn abbreviate(text: &str) -> String {
    text.split_whitespace().map(abbreviate_word).collect()
}

fn abbreviate_word(word: &str) -> String {
    let has_alpha = word.chars().any(char::is_alphabetic);
    let has_digit = word.chars().any(|c| c.is_ascii_digit());

    if has_digit && !has_alpha {
        return word.to_string();
    }
    if has_alpha && has_digit {
        let mut out = String::new();
        if let Some(first) = word.chars().find(|c| c.is_alphabetic()) {
            out.push(first);
        }
        out.extend(word.chars().filter(char::is_ascii_digit));
        return out;
    }
    // Letters (or letter-like symbols) only.
    word.chars()
        .find(|c| c.is_alphabetic())
        .map(String::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::abbreviate;

    #[test]
    fn case_is_preserved() {
        assert_eq!(abbreviate("quý 1"), "q1");
        assert_eq!(abbreviate("Quý 2"), "Q2");
        assert_eq!(abbreviate("chi phí"), "cp");
        assert_eq!(abbreviate("Chi Phí"), "CP");
    }

    #[test]
    fn digits_survive_verbatim() {
        assert_eq!(abbreviate("Năm 2024"), "N2024");
        assert_eq!(abbreviate("123"), "123");
        assert_eq!(abbreviate("tháng 12"), "t12");
    }

    #[test]
    fn mixed_words_keep_first_letter_and_digit_runs() {
        assert_eq!(abbreviate("a1b2c3"), "a123");
        assert_eq!(abbreviate("Cấp 1"), "C1");
    }

    #[test]
    fn multi_word_phrases_concatenate() {
        assert_eq!(abbreviate("doanh thu năm 2023"), "dtn2023");
        assert_eq!(abbreviate("Học Kì 1"), "HK1");
        assert_eq!(abbreviate("test case"), "tc");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(abbreviate(""), "");
        assert_eq!(abbreviate("   "), "");
        assert_eq!(abbreviate("Header"), "H");
    }
}
