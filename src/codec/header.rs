//! Chunk header byte.
//!
//! Bit 7 selects the chunk kind, bits 0-6 carry the count:
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//! +-+-------------+
//! |R|    count    |   R=1: run of `count` copies of the next byte
//! +-+-------------+   R=0: `count` literal bytes follow
//! ```

/// High bit of the header; set for run chunks.
pub const RUN_FLAG: u8 = 0x80;

/// Low seven bits of the header.
pub const COUNT_MASK: u8 = 0x7F;

/// Largest count a header can carry, for runs and literals alike.
pub const MAX_COUNT: usize = COUNT_MASK as usize;

/// Shortest run the encoder emits as a run chunk.
pub const MIN_RUN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Run(u8),
    Literal(u8),
}

impl Header {
    pub fn from_byte(byte: u8) -> Self {
        let count = byte & COUNT_MASK;
        if byte & RUN_FLAG != 0 {
            Header::Run(count)
        } else {
            Header::Literal(count)
        }
    }

    /// Panics in debug builds if `count` does not fit the 7-bit field.
    pub fn to_byte(self) -> u8 {
        match self {
            Header::Run(count) => {
                debug_assert!(count as usize <= MAX_COUNT);
                RUN_FLAG | count
            }
            Header::Literal(count) => {
                debug_assert!(count as usize <= MAX_COUNT);
                count
            }
        }
    }

    /// Number of decoded bytes this chunk expands to.
    pub fn count(self) -> usize {
        match self {
            Header::Run(count) | Header::Literal(count) => count as usize,
        }
    }

    /// Number of payload bytes following the header in the stream.
    pub fn payload_len(self) -> usize {
        match self {
            Header::Run(_) => 1,
            Header::Literal(count) => count as usize,
        }
    }
}
