//! Chunk parsing and expansion.

use super::header::Header;
use crate::error::{Result, RleError};
use std::io::{self, Write};
use std::iter::FusedIterator;

/// A parsed chunk, borrowing its payload from the encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    Run { value: u8, count: usize },
    Literal(&'a [u8]),
}

impl Chunk<'_> {
    /// Bytes this chunk expands to.
    pub fn decoded_len(&self) -> usize {
        match self {
            Chunk::Run { count, .. } => *count,
            Chunk::Literal(bytes) => bytes.len(),
        }
    }

    /// Bytes this chunk occupies in the stream, header included.
    pub fn encoded_len(&self) -> usize {
        match self {
            Chunk::Run { .. } => 2,
            Chunk::Literal(bytes) => 1 + bytes.len(),
        }
    }

    pub fn expand_into(&self, out: &mut Vec<u8>) {
        match *self {
            Chunk::Run { value, count } => out.resize(out.len() + count, value),
            Chunk::Literal(bytes) => out.extend_from_slice(bytes),
        }
    }
}

/// Iterator over the chunks of an encoded stream.
///
/// Yields `Err(RleError::MalformedStream)` once if a header claims more
/// payload than the stream holds, then stops.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    data: &'a [u8],
    pos: usize,
    failed: bool,
}

pub fn chunks(data: &[u8]) -> Chunks<'_> {
    Chunks { data, pos: 0, failed: false }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Result<Chunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let offset = self.pos;
        let header = Header::from_byte(*self.data.get(offset)?);
        let payload = &self.data[offset + 1..];
        let needed = header.payload_len();
        if payload.len() < needed {
            self.failed = true;
            return Some(Err(RleError::MalformedStream {
                offset,
                needed,
                available: payload.len(),
            }));
        }
        self.pos = offset + 1 + needed;
        Some(Ok(match header {
            Header::Run(count) => Chunk::Run { value: payload[0], count: count as usize },
            Header::Literal(_) => Chunk::Literal(&payload[..needed]),
        }))
    }
}

impl FusedIterator for Chunks<'_> {}

/// Decode an encoded stream into a fresh buffer.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() * 2);
    decode_into(data, &mut out)?;
    Ok(out)
}

/// Decode `data`, appending to `out`. On error `out` is restored to its
/// original length.
pub fn decode_into(data: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let start = out.len();
    for chunk in chunks(data) {
        match chunk {
            Ok(chunk) => chunk.expand_into(out),
            Err(e) => {
                out.truncate(start);
                return Err(e);
            }
        }
    }
    Ok(())
}

/// Summary of an encoded stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamInfo {
    pub run_chunks: usize,
    pub literal_chunks: usize,
    pub encoded_len: usize,
    pub decoded_len: usize,
}

impl StreamInfo {
    pub fn chunk_count(&self) -> usize {
        self.run_chunks + self.literal_chunks
    }
}

/// Validate the framing of `data` and summarise it without decoding.
pub fn inspect(data: &[u8]) -> Result<StreamInfo> {
    let mut info = StreamInfo { encoded_len: data.len(), ..Default::default() };
    for chunk in chunks(data) {
        let chunk = chunk?;
        match chunk {
            Chunk::Run { .. } => info.run_chunks += 1,
            Chunk::Literal(_) => info.literal_chunks += 1,
        }
        info.decoded_len += chunk.decoded_len();
    }
    Ok(info)
}

/// Streaming decoder.
///
/// Complete chunks are expanded into the inner writer as they arrive; a
/// chunk split across `write` calls is held until its payload is complete.
/// [`Decoder::finish`] reports a chunk left incomplete at end of input.
pub struct Decoder<W: Write> {
    writer: W,
    pending: Vec<u8>,
    consumed: usize,
    scratch: Vec<u8>,
}

impl<W: Write> Decoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending: Vec::new(),
            consumed: 0,
            scratch: Vec::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn finish(mut self) -> Result<W> {
        if let Some(&byte) = self.pending.first() {
            return Err(RleError::MalformedStream {
                offset: self.consumed,
                needed: Header::from_byte(byte).payload_len(),
                available: self.pending.len() - 1,
            });
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Write for Decoder<W> {
    /// On error nothing of `buf` is kept, so the same `buf` may be retried.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let before = self.pending.len();
        self.pending.extend_from_slice(buf);
        self.scratch.clear();
        let mut pos = 0;
        // An incomplete trailing chunk is not an error until `finish`.
        for chunk in chunks(&self.pending).map_while(|chunk| chunk.ok()) {
            chunk.expand_into(&mut self.scratch);
            pos += chunk.encoded_len();
        }
        if let Err(e) = self.writer.write_all(&self.scratch) {
            self.pending.truncate(before);
            return Err(e);
        }
        self.pending.drain(..pos);
        self.consumed += pos;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode::tests::FailOnce;

    #[test]
    fn test_decode_vectors() {
        assert_eq!(decode(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(decode(&[0x01, 9]).unwrap(), vec![9]);
        assert_eq!(decode(&[0x82, 5]).unwrap(), vec![5, 5]);
        assert_eq!(decode(&[0x01, 1, 0x83, 2, 0x01, 3]).unwrap(), vec![1, 2, 2, 2, 3]);
        assert_eq!(decode(&[0xFF, 0]).unwrap(), vec![0; 127]);
    }

    #[test]
    fn test_non_canonical_headers() {
        // Zero-length literal and runs of 0 or 1 decode to what they say.
        assert_eq!(decode(&[0x00, 0x80, 7, 0x81, 8]).unwrap(), vec![8]);
    }

    #[test]
    fn test_truncated_run() {
        let err = decode(&[0x01, 4, 0x83]).unwrap_err();
        match err {
            RleError::MalformedStream { offset, needed, available } => {
                assert_eq!(offset, 2);
                assert_eq!(needed, 1);
                assert_eq!(available, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_truncated_literal() {
        let err = decode(&[0x05, 1, 2]).unwrap_err();
        assert!(matches!(
            err,
            RleError::MalformedStream { offset: 0, needed: 5, available: 2 }
        ));
    }

    #[test]
    fn test_decode_into_restores_on_error() {
        let mut out = vec![1, 2, 3];
        assert!(decode_into(&[0x82, 9, 0x03, 1], &mut out).is_err());
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_chunks_stop_after_error() {
        let mut iter = chunks(&[0x82, 9, 0x7F]);
        assert_eq!(iter.next().unwrap().unwrap(), Chunk::Run { value: 9, count: 2 });
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_inspect() {
        let info = inspect(&[0x01, 1, 0x83, 2, 0x01, 3]).unwrap();
        assert_eq!(info.run_chunks, 1);
        assert_eq!(info.literal_chunks, 2);
        assert_eq!(info.chunk_count(), 3);
        assert_eq!(info.encoded_len, 6);
        assert_eq!(info.decoded_len, 5);

        assert!(inspect(&[0x90]).is_err());
    }

    #[test]
    fn test_streaming_decoder_split_chunk() {
        let mut decoder = Decoder::new(Vec::new());
        decoder.write_all(&[0x03, 1]).unwrap();
        assert!(decoder.get_ref().is_empty());
        decoder.write_all(&[2, 3, 0x84]).unwrap();
        assert_eq!(decoder.get_ref(), &vec![1, 2, 3]);
        decoder.write_all(&[6]).unwrap();
        assert_eq!(decoder.finish().unwrap(), vec![1, 2, 3, 6, 6, 6, 6]);
    }

    #[test]
    fn test_streaming_decoder_dangling_chunk() {
        let mut decoder = Decoder::new(Vec::new());
        decoder.write_all(&[0x82, 1, 0x04, 1, 2]).unwrap();
        let err = decoder.finish().unwrap_err();
        assert!(matches!(
            err,
            RleError::MalformedStream { offset: 2, needed: 4, available: 2 }
        ));
    }

    #[test]
    fn test_streaming_decoder_retry_after_writer_error() {
        let mut decoder = Decoder::new(FailOnce::new());
        // Header and part of a literal; nothing is written yet.
        decoder.write_all(&[0x03, 1]).unwrap();

        let rest = [2, 3, 0x82, 9];
        let err = decoder.write(&rest).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WouldBlock);
        assert!(decoder.get_ref().out.is_empty());

        decoder.write_all(&rest).unwrap();
        assert_eq!(decoder.finish().unwrap().out, vec![1, 2, 3, 9, 9]);
    }
}
