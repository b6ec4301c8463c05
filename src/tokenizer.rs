//! Case folding and whitespace tokenization.
//!
//! Tokens are maximal runs of non-separator characters, lowercased.
//! Separators are Unicode whitespace plus the ASCII information separators
//! U+001C..U+001F. Punctuation stays attached: `"apple,"` is a different
//! token from `"apple"`.

/// Whitespace, or one of the ASCII file/group/record/unit separators.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Fold a single word-list entry: trim surrounding separators and lowercase.
pub fn normalize(word: &str) -> String {
    word.trim_matches(is_separator).to_lowercase()
}

/// Split one line of text into lowercase tokens.
///
/// An empty or separator-only line yields nothing.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        tokenize(line).collect()
    }

    #[test]
    fn lowercases_and_splits_on_whitespace_runs() {
        assert_eq!(tokens("  Apple \t apple\u{a0}BANANA  cherry\n"),
                   vec!["apple", "apple", "banana", "cherry"]);
    }

    #[test]
    fn splits_on_ascii_information_separators() {
        assert_eq!(tokens("cat\u{1f}cat\u{1c}\u{1d}Dog\u{1e}"), vec!["cat", "cat", "dog"]);
        assert_eq!(normalize("\u{1f} Cat\u{1c}"), "cat");
    }

    #[test]
    fn other_control_characters_stay_in_tokens() {
        assert_eq!(tokens("a\u{7}b"), vec!["a\u{7}b"]);
    }

    #[test]
    fn empty_lines_yield_nothing() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \t \r\n").is_empty());
        assert!(tokens("\u{1f}\u{1e}").is_empty());
    }

    #[test]
    fn keeps_punctuation_attached() {
        assert_eq!(tokens("Hello, world! (cat)"), vec!["hello,", "world!", "(cat)"]);
    }

    #[test]
    fn normalize_trims_and_folds() {
        assert_eq!(normalize("  Banana\r\n"), "banana");
        assert_eq!(normalize("ÉCOLE"), "école");
        assert_eq!(normalize("   "), "");
    }
}
