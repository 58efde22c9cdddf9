/// Canonical comparison key for guesses: lower-cased with every character
/// outside `[a-z0-9]` stripped. Total and idempotent; empty input maps to
/// the empty string.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// A guess matches its target iff the normalized forms are equal and
/// non-empty. Empty never matches, so a blank submission cannot score.
pub fn guess_matches(guess: &str, target: &str) -> bool {
    let guess = normalize(guess);
    !guess.is_empty() && guess == normalize(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_punctuation_and_spacing() {
        assert_eq!(normalize("Lover!!"), "lover");
        assert_eq!(normalize("  The 1  "), "the1");
        assert_eq!(normalize("I Knew You Were Trouble."), "iknewyouweretrouble");
    }

    #[test]
    fn empty_and_symbol_only_input_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!... "), "");
    }

    #[test]
    fn is_idempotent() {
        for s in ["Lover!!", " folklore ", "22", "Shake It Off", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn matching_ignores_case_and_symbols() {
        assert!(guess_matches("CARDIGAN!", "cardigan"));
        assert!(guess_matches("folklore ", "Folklore"));
        assert!(!guess_matches("evermore", "Folklore"));
    }

    #[test]
    fn blank_guesses_never_match() {
        assert!(!guess_matches("", ""));
        assert!(!guess_matches("   ", "!!!"));
        assert!(!guess_matches("", "Cardigan"));
    }
}
