//! Greedy run/literal segmentation and chunk emission.

use super::header::{Header, MAX_COUNT, MIN_RUN};
use std::io::{self, Write};

/// One encoder decision: the span at the front of the input and how it is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    Run { value: u8, len: usize },
    Literal { len: usize },
}

impl Segment {
    pub(crate) fn len(self) -> usize {
        match self {
            Segment::Run { len, .. } | Segment::Literal { len } => len,
        }
    }
}

/// Decide how the front of `data` is framed.
///
/// Returns `None` when `data` is empty, or when `at_end` is false and the
/// decision depends on bytes past the end of `data`. With `at_end` set the
/// end of `data` is the end of the input and a segment is always produced
/// for non-empty input.
pub(crate) fn next_segment(data: &[u8], at_end: bool) -> Option<Segment> {
    let value = *data.first()?;

    let mut run_len = 1;
    while run_len < data.len() && run_len < MAX_COUNT && data[run_len] == value {
        run_len += 1;
    }
    if run_len == data.len() && run_len < MAX_COUNT && !at_end {
        return None;
    }
    if run_len >= MIN_RUN {
        return Some(Segment::Run { value, len: run_len });
    }

    // Extend the literal while the next position does not start a run.
    let mut len = 1;
    while len < MAX_COUNT {
        let Some(&current) = data.get(len) else {
            if at_end {
                break;
            }
            return None;
        };
        match data.get(len + 1) {
            Some(&next) if next == current => break,
            Some(_) => {}
            None if !at_end => return None,
            None => {}
        }
        len += 1;
    }
    Some(Segment::Literal { len })
}

/// Append the chunk for `segment`, which sits at the front of `data`.
fn emit(segment: Segment, data: &[u8], out: &mut Vec<u8>) {
    match segment {
        Segment::Run { value, len } => {
            out.push(Header::Run(len as u8).to_byte());
            out.push(value);
        }
        Segment::Literal { len } => {
            out.push(Header::Literal(len as u8).to_byte());
            out.extend_from_slice(&data[..len]);
        }
    }
}

/// Encode `data` into a fresh buffer. Empty input gives empty output.
pub fn encode(data: &[u8]) -> Vec<u8> {
    // Worst case is all literals: one header per 127 bytes.
    let mut out = Vec::with_capacity(data.len() + data.len() / MAX_COUNT + 1);
    encode_into(data, &mut out);
    out
}

/// Encode `data`, appending the chunks to `out`.
pub fn encode_into(data: &[u8], out: &mut Vec<u8>) {
    let mut pos = 0;
    while let Some(segment) = next_segment(&data[pos..], true) {
        emit(segment, &data[pos..], out);
        pos += segment.len();
    }
}

/// Streaming encoder.
///
/// Chunks are written to the inner writer as soon as they are decided, and
/// only the undecided tail of the input is buffered. The output is the same
/// as [`encode`] over the concatenation of everything written, however the
/// input is split across `write` calls. [`Encoder::finish`] must be called to
/// flush the tail.
pub struct Encoder<W: Write> {
    writer: W,
    pending: Vec<u8>,
    scratch: Vec<u8>,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending: Vec::with_capacity(2 * MAX_COUNT),
            scratch: Vec::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Encode the buffered tail as end of input and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.drain(true)?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Settled input leaves `pending` only once its chunks reached the writer.
    fn drain(&mut self, at_end: bool) -> io::Result<()> {
        self.scratch.clear();
        let mut pos = 0;
        while let Some(segment) = next_segment(&self.pending[pos..], at_end) {
            emit(segment, &self.pending[pos..], &mut self.scratch);
            pos += segment.len();
        }
        self.writer.write_all(&self.scratch)?;
        self.pending.drain(..pos);
        log::trace!("encoder: emitted {} bytes, {} pending", self.scratch.len(), self.pending.len());
        Ok(())
    }
}

impl<W: Write> Write for Encoder<W> {
    /// On error nothing of `buf` is kept, so the same `buf` may be retried.
    /// A writer that fails after taking part of a chunk still leaves that
    /// part in its output.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let before = self.pending.len();
        self.pending.extend_from_slice(buf);
        if let Err(e) = self.drain(false) {
            self.pending.truncate(before);
            return Err(e);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
