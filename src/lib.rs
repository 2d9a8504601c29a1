//! # rle-codec
//!
//! A byte-oriented run-length codec with a one-byte chunk header.
//!
//! ## Format
//!
//! The encoded stream is a sequence of chunks. Each chunk starts with a
//! header byte whose high bit selects the kind and whose low seven bits hold
//! a count between 1 and 127:
//!
//! - **Run** (`0x80 | count`, then one value byte): `count` copies of value.
//! - **Literal** (`count`, then `count` bytes): the bytes verbatim.
//!
//! Runs of two or more identical bytes are always framed as runs. Longer runs
//! and literal spans are split at 127 bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use rle_codec::{decode, encode};
//!
//! let original = b"aaaaaaaabcd";
//! let encoded = encode(original);
//! assert_eq!(encoded, vec![0x88, b'a', 0x03, b'b', b'c', b'd']);
//!
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded, original.to_vec());
//! ```
//!
//! ### Malformed input
//!
//! ```rust
//! use rle_codec::{decode, RleError};
//!
//! // A literal header promising five bytes, followed by two.
//! let err = decode(&[0x05, 1, 2]).unwrap_err();
//! assert!(matches!(err, RleError::MalformedStream { offset: 0, needed: 5, available: 2 }));
//! ```
//!
//! ### Streaming
//!
//! ```rust
//! use rle_codec::{encode, Encoder};
//! use std::io::Write;
//!
//! # fn example() -> std::io::Result<()> {
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.write_all(b"xxxx")?;
//! encoder.write_all(b"xxyz")?;
//! let encoded = encoder.finish()?;
//! assert_eq!(encoded, encode(b"xxxxxxyz"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod job;
pub mod paths;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use codec::{decode, decode_into, encode, encode_into, inspect, Chunk, Decoder, Encoder, StreamInfo};
pub use config::{Mode, RleConfig};
pub use error::{Result, RleError};
pub use job::{Integrity, JobReport};
pub use pipeline::{compress, decompress, CodecStats};
