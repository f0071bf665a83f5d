//! Feedback pattern calculation and representation
//!
//! A pattern encodes the per-position feedback for a guess using base-3 digits:
//! - 0 = Absent (letter not available at that position)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single `u32` code where position `i` contributes
//! `digit × 3^i`, plus the word length. The largest code, 3^15 - 1, fits easily.

use super::Word;
use super::word::MAX_WORD_LEN;
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter does not occur in the target, or all its occurrences are used up
    Absent = 0,
    /// Letter occurs in the target at another position
    Present = 1,
    /// Letter is in the right position
    Correct = 2,
}

impl Mark {
    /// Parse a single feedback symbol
    ///
    /// Accepts `g`/`y`/`b` in either case, `-`/`_` for absent, and the square emoji.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'b' | 'B' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical single-letter symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    /// Emoji square used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Error type for feedback strings that cannot be turned into a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    WrongLength { expected: usize, found: usize },
    UnsupportedLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, found } => {
                write!(f, "Feedback must be {expected} symbols long, got {found}")
            }
            Self::UnsupportedLength(len) => {
                write!(f, "Feedback length {len} is not a supported word length")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (use g, y or b)")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Feedback pattern for a guess
///
/// Equality and hashing cover both the code and the length, so patterns of
/// different word lengths never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// The all-Correct pattern for a word length
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        // 2 + 2×3 + ... + 2×3^(len-1) = 3^len - 1
        Self {
            code: 3u32.pow(len as u32) - 1,
            len: len as u8,
        }
    }

    /// Build a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(marks.len() <= MAX_WORD_LEN, "too many marks");

        let mut code = 0u32;
        let mut multiplier = 1u32;
        for &mark in marks {
            code += mark as u32 * multiplier;
            multiplier *= 3;
        }

        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// Get the raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.code
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if this is a perfect match (all Correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.len > 0 && self.code == Self::perfect(self.len as usize).code
    }

    /// Mark at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn mark_at(self, position: usize) -> Mark {
        assert!(position < self.len(), "position {position} out of range");
        Mark::from_digit(self.code / 3u32.pow(position as u32) % 3)
    }

    /// Iterate over the marks in position order
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        let mut val = self.code;
        (0..self.len()).map(move |_| {
            let mark = Mark::from_digit(val % 3);
            val /= 3;
            mark
        })
    }

    /// Calculate the pattern when `guess` is played and `target` is the hidden word
    ///
    /// Implements the duplicate-aware feedback rules:
    /// 1. First pass: every exact position match is Correct and consumes that target letter
    /// 2. Second pass, in guess order: each remaining position takes the leftmost unused
    ///    equal letter of the target (Present), or is Absent if none is left
    ///
    /// Allocation-free: scratch space is a fixed array sized for the longest word.
    ///
    /// # Panics
    /// Debug builds panic if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::core::{Mark, Pattern, Word};
    ///
    /// let guess = Word::new("arise").unwrap();
    /// let target = Word::new("raise").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// let marks: Vec<Mark> = pattern.marks().collect();
    /// assert_eq!(
    ///     marks,
    ///     [Mark::Present, Mark::Present, Mark::Correct, Mark::Correct, Mark::Correct]
    /// );
    /// assert_eq!(pattern.to_string(), "yyggg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target differ in length");

        let guess = guess.chars();
        let target = target.chars();
        let len = guess.len().min(target.len());

        let mut marks = [Mark::Absent; MAX_WORD_LEN];
        let mut used = [false; MAX_WORD_LEN];

        // First pass: exact matches
        // Allow: index needed to set marks[i] and used[i] together
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess[i] == target[i] {
                marks[i] = Mark::Correct;
                used[i] = true;
            }
        }

        // Second pass: leftmost unused occurrence elsewhere
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(j) = (0..len).find(|&j| !used[j] && target[j] == guess[i]) {
                marks[i] = Mark::Present;
                used[j] = true;
            }
        }

        Self::from_marks(&marks[..len])
    }

    /// Count the Correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.marks().filter(|&m| m == Mark::Correct).count()
    }

    /// Count the Present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().filter(|&m| m == Mark::Present).count()
    }

    /// Parse a feedback string that must describe a word of `expected_len` letters
    ///
    /// # Errors
    /// Returns `PatternError::WrongLength` when the symbol count differs from
    /// `expected_len`, and `PatternError::InvalidSymbol` for anything but a
    /// feedback symbol.
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::core::{Pattern, PatternError};
    ///
    /// let p1 = Pattern::parse("gybgb", 5).unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩⬜", 5).unwrap();
    /// assert_eq!(p1, p2);
    ///
    /// assert!(matches!(Pattern::parse("gyb", 5), Err(PatternError::WrongLength { .. })));
    /// ```
    pub fn parse(s: &str, expected_len: usize) -> Result<Self, PatternError> {
        let found = s.chars().count();
        if found != expected_len {
            return Err(PatternError::WrongLength {
                expected: expected_len,
                found,
            });
        }
        if found > MAX_WORD_LEN {
            return Err(PatternError::UnsupportedLength(found));
        }

        let marks = s
            .chars()
            .map(|ch| Mark::from_symbol(ch).ok_or(PatternError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_marks(&marks))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::core::Pattern;
    ///
    /// let p = Pattern::parse("gybgy", 5).unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().map(Mark::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if !(super::word::MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
            return Err(PatternError::UnsupportedLength(len));
        }
        Self::parse(s, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, target: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::perfect(5).value(), 242);
        assert!(Pattern::perfect(5).is_perfect());
        assert_eq!(Pattern::perfect(5).count_correct(), 5);
        assert_eq!(Pattern::perfect(15).value(), 3u32.pow(15) - 1);
    }

    #[test]
    fn pattern_all_absent() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.value(), 0);
        assert_eq!(p.count_correct(), 0);
        assert_eq!(p.count_present(), 0);
        assert!(!p.is_perfect());
    }

    #[test]
    fn pattern_all_correct() {
        let p = pattern("apple", "apple");
        assert_eq!(p, Pattern::perfect(5));
        assert_eq!(p.to_string(), "ggggg");
    }

    #[test]
    fn pattern_swapped_letters() {
        // a and r trade places; the rest line up
        assert_eq!(pattern("arise", "raise").to_string(), "yyggg");
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: both E's of the guess find an E in the target
        assert_eq!(pattern("speed", "erase").to_string(), "ybyyb");

        // ROBOT vs FLOOR: second O is exact, first O takes the other one
        assert_eq!(pattern("robot", "floor").to_string(), "yybgb");
    }

    #[test]
    fn pattern_duplicate_guess_letter_single_target_letter() {
        // Only one L in the target: the exact match consumes it
        assert_eq!(pattern("llama", "lucky").to_string(), "gbbbb");
        assert_eq!(pattern("lolly", "world").to_string(), "bgbgb");
        // Two L's in the target: both guessed L's are Present
        assert_eq!(pattern("llama", "hello").to_string(), "yybbb");
        assert_eq!(pattern("hollo", "hello").to_string(), "gbggg");
    }

    #[test]
    fn pattern_leftmost_unused_occurrence() {
        // "eerie" vs "there": exact E at the end, then E's scan left to right
        let p = pattern("eerie", "there");
        assert_eq!(p.to_string(), "ybybg");
        assert_eq!(p.count_correct(), 1);
        assert_eq!(p.count_present(), 2);
    }

    #[test]
    fn pattern_never_overcounts_letters() {
        let words = ["speed", "erase", "eerie", "there", "llama", "hello", "apple", "paper"];
        for g in words {
            for t in words {
                let guess = Word::new(g).unwrap();
                let target = Word::new(t).unwrap();
                let p = Pattern::calculate(&guess, &target);
                assert_eq!(p.len(), guess.len());

                for letter in b'a'..=b'z' {
                    let marked = guess
                        .chars()
                        .iter()
                        .zip(p.marks())
                        .filter(|&(&c, m)| c == letter && m != Mark::Absent)
                        .count();
                    assert!(marked <= target.count_of(letter), "{g} vs {t}");
                }
            }
        }
    }

    #[test]
    fn pattern_other_lengths() {
        assert_eq!(pattern("cat", "act").to_string(), "yyg");
        let long = pattern("weatherproofing", "weatherproofing");
        assert!(long.is_perfect());
        assert_eq!(long.len(), 15);
    }

    #[test]
    fn pattern_lengths_are_distinct() {
        // "bbb" and "bbbbb" share code 0 but are different patterns
        assert_ne!(Pattern::parse("bbb", 3).unwrap(), Pattern::parse("bbbbb", 5).unwrap());
    }

    #[test]
    fn pattern_mark_at() {
        let p = pattern("arise", "raise");
        assert_eq!(p.mark_at(0), Mark::Present);
        assert_eq!(p.mark_at(2), Mark::Correct);
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYG--", 5).unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜", 5).unwrap();
        let p3 = Pattern::parse("gygbb", 5).unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);

        // 2 + 1×3 + 2×9 + 0×27 + 0×81 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert_eq!(
            Pattern::parse("gygbbg", 5),
            Err(PatternError::WrongLength {
                expected: 5,
                found: 6
            })
        );
        assert!(Pattern::parse("gyg", 5).is_err());
        assert_eq!(
            Pattern::parse("gxgby", 5),
            Err(PatternError::InvalidSymbol('x'))
        );
        assert!(Pattern::parse("", 5).is_err());
    }

    #[test]
    fn pattern_from_str_uses_own_length() {
        let p: Pattern = "gyb".parse().unwrap();
        assert_eq!(p.len(), 3);
        assert!("gy".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "ace", "telephone"] {
            let w = Word::new(word).unwrap();
            assert!(Pattern::calculate(&w, &w).is_perfect());
        }
    }
}
