//! Character classification for sentence chunking

/// Sentence-ending punctuation
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Sentence-ending punctuation
    Terminator,
    /// Whitespace character
    Space,
    /// Alphabetic character
    Alpha,
    /// Numeric character
    Digit,
    /// Anything else
    Other,
}

impl CharClass {
    /// Classify a character
    pub fn of(ch: char) -> Self {
        if is_terminator(ch) {
            CharClass::Terminator
        } else if is_space(ch) {
            CharClass::Space
        } else if is_alpha(ch) {
            CharClass::Alpha
        } else if ch.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }

    /// Letters and digits make up words
    pub fn is_word(self) -> bool {
        matches!(self, CharClass::Alpha | CharClass::Digit)
    }
}

/// Check if character is a letter
#[inline]
pub fn is_alpha(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Check if character is whitespace
#[inline]
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if character ends a sentence
#[inline]
pub fn is_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_of() {
        assert_eq!(CharClass::of('a'), CharClass::Alpha);
        assert_eq!(CharClass::of('Z'), CharClass::Alpha);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('.'), CharClass::Terminator);
        assert_eq!(CharClass::of('!'), CharClass::Terminator);
        assert_eq!(CharClass::of('?'), CharClass::Terminator);
        assert_eq!(CharClass::of(' '), CharClass::Space);
        assert_eq!(CharClass::of('\t'), CharClass::Space);
        assert_eq!(CharClass::of(','), CharClass::Other);
        assert_eq!(CharClass::of('"'), CharClass::Other);
    }

    #[test]
    fn test_predicates() {
        assert!(is_alpha('é'));
        assert!(!is_alpha('1'));
        assert!(CharClass::of('1').is_word());
        assert!(CharClass::of('q').is_word());
        assert!(!CharClass::of('\'').is_word());
        assert!(!CharClass::of('.').is_word());
        assert!(is_space('\u{00A0}'));
        assert!(!is_terminator(','));
        assert!(!is_terminator('…'));
    }
}
