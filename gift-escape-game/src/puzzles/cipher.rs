//! Chapter two: read the grain. A Caesar-shifted message the solver must
//! shift back and type in.
use serde::{Deserialize, Serialize};

const ALPHABET_LEN: i32 = 26;

pub const PLAINTEXT: &str = "HELLO WORLD";
pub const SHIFT: i32 = 10;

fn rotate(c: char, shift: i32) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    let offset = i32::from(c as u8 - base);
    let rotated = (offset + shift).rem_euclid(ALPHABET_LEN);
    // rem_euclid keeps the value in 0..26
    char::from(base + rotated as u8)
}

/// Rotate every ASCII letter forward by `shift`, preserving case. Everything
/// else (spaces, punctuation, non-ASCII) passes through. Negative shifts
/// rotate backward.
#[must_use]
pub fn caesar_shift(text: &str, shift: i32) -> String {
    text.chars().map(|c| rotate(c, shift)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherPuzzle {
    plaintext: String,
    shift: i32,
}

impl Default for CipherPuzzle {
    fn default() -> Self {
        Self::new(PLAINTEXT, SHIFT)
    }
}

impl CipherPuzzle {
    /// `plaintext` is stored uppercased, since answers are compared uppercased.
    #[must_use]
    pub fn new(plaintext: &str, shift: i32) -> Self {
        Self {
            plaintext: plaintext.to_uppercase(),
            shift,
        }
    }

    #[must_use]
    pub const fn shift(&self) -> i32 {
        self.shift
    }

    #[must_use]
    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    /// The message shown to the solver.
    #[must_use]
    pub fn ciphertext(&self) -> String {
        caesar_shift(&self.plaintext, self.shift)
    }

    /// Compares only. The answer is trimmed and uppercased, never decrypted.
    #[must_use]
    pub fn is_solved(&self, answer: &str) -> bool {
        answer.trim().to_uppercase() == self.plaintext
    }
}
