//! Set of guessable letters
//!
//! Letters are stored as a 26-bit mask over `A..=Z`. Lowercase input is
//! folded to uppercase; anything outside the alphabet is never a member.

use std::fmt;

/// The guessable alphabet in order
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Vowels, guessed first by the default solver strategy
pub const VOWELS: &[u8; 5] = b"AEIOU";

/// A set of uppercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `A..=Z`
    pub const ALL: Self = Self((1 << 26) - 1);

    #[inline]
    fn bit(letter: u8) -> Option<u32> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| 1 << u32::from(upper - b'A'))
    }

    /// Insert a letter; returns `false` if it was already present or is not a letter
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        ALPHABET.iter().copied().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_folds_case_and_rejects_duplicates() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'a'));
        assert!(!set.insert(b'A'));
        assert!(set.contains(b'A'));
        assert!(set.contains(b'a'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn non_letters_are_never_members() {
        let mut set = LetterSet::ALL;
        assert!(!set.insert(b'3'));
        assert!(!set.contains(b'-'));
        assert_eq!(set.len(), 26);
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"ZEBRA".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"ABERZ");
        assert_eq!(set.to_string(), "ABERZ");
    }

    #[test]
    fn difference_removes_members() {
        let vowels: LetterSet = VOWELS.iter().copied().collect();
        let used: LetterSet = b"AEX".iter().copied().collect();
        let unused = vowels.difference(used);
        assert_eq!(unused.to_string(), "IOU");
        assert_eq!(LetterSet::ALL.difference(LetterSet::ALL), LetterSet::EMPTY);
    }
}
