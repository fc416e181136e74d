//! Single-character flag letters packed into a 64-bit set.
//!
//! Every ASCII letter and digit owns one bit: `a`-`z` are bits 0-25, `A`-`Z`
//! are bits 26-51 and `0`-`9` are bits 52-61. Any other character has no bit.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u64);

fn bit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 26),
        '0'..='9' => Some(c as u32 - '0' as u32 + 52),
        _ => None,
    }
}

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);

    /// The set holding just `c`, or the empty set if `c` is not alphanumeric.
    pub fn of(c: char) -> Self {
        LetterSet(bit(c).map_or(0, |b| 1u64 << b))
    }

    /// Union of the bits of every character in `s`.
    pub fn from_letters(s: &str) -> Self {
        s.chars().collect()
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, c: char) -> bool {
        !(self & LetterSet::of(c)).is_empty()
    }

    pub fn insert(&mut self, c: char) {
        *self |= LetterSet::of(c);
    }

    /// The letters of the set in `a`-`z`, `A`-`Z`, `0`-`9` order.
    pub fn letters(self) -> String {
        ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .filter(|&c| self.contains(c))
            .collect()
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = LetterSet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl BitOr for LetterSet {
    type Output = LetterSet;

    fn bitor(self, rhs: LetterSet) -> LetterSet {
        LetterSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for LetterSet {
    fn bitor_assign(&mut self, rhs: LetterSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LetterSet {
    type Output = LetterSet;

    fn bitand(self, rhs: LetterSet) -> LetterSet {
        LetterSet(self.0 & rhs.0)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}
