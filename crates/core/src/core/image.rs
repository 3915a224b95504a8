//! Program image storage and instruction fetch.
//!
//! This module implements the fixed program image the machine executes
//! from. It performs the following:
//! 1. **Storage:** Owns a contiguous, word-aligned buffer of instruction
//!    encodings, fixed at construction and never mutated.
//! 2. **Fetch:** Bounds-checked word lookup by slot index.
//! 3. **Loading:** Construction from raw little-endian byte buffers, the
//!    form program files arrive in.

use crate::common::ImageError;

/// Bytes per instruction word.
const WORD_BYTES: usize = 4;

/// An immutable sequence of 32-bit instruction words.
///
/// The image is the machine's only memory: the program counter indexes it
/// by slot (word index), and running past its end is the normal way a
/// program terminates.
#[derive(Debug, Clone)]
pub struct ProgramImage {
    words: Box<[u32]>,
}

impl ProgramImage {
    /// Creates an image from a sequence of instruction words.
    ///
    /// Accepts anything convertible into an owned word buffer (a `Vec`, an
    /// array, or a slice).
    pub fn new(words: impl Into<Box<[u32]>>) -> Self {
        Self {
            words: words.into(),
        }
    }

    /// Creates an image from a little-endian byte buffer.
    ///
    /// Each group of four bytes becomes one instruction word.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::TruncatedWord`] when the buffer length is not
    /// a multiple of four, since a trailing partial word cannot encode an
    /// instruction.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() % WORD_BYTES != 0 {
            return Err(ImageError::TruncatedWord { len: bytes.len() });
        }
        let words = bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Ok(Self { words })
    }

    /// Returns the image length in words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the image contains no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Fetches the instruction word at `slot`, or `None` when the slot is
    /// outside the image.
    #[inline]
    #[must_use]
    pub fn fetch(&self, slot: u32) -> Option<u32> {
        self.words.get(slot as usize).copied()
    }
}
