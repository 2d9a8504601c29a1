use crate::codec;
use crate::config::Mode;
use crate::error::Result;
use std::io::{Read, Write};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct CodecStats {
	pub input_size: u64,
	pub output_size: u64,
	/// Wall-clock time spent in the codec call alone.
	pub elapsed: Duration,
}

impl CodecStats {
	/// Input size over output size; 0.0 for empty output.
	pub fn ratio(&self) -> f64 {
		if self.output_size > 0 { self.input_size as f64 / self.output_size as f64 } else { 0.0 }
	}
}

#[derive(Debug)]
pub struct Transformed {
	pub data: Vec<u8>,
	pub stats: CodecStats,
}

/// Run the codec over an in-memory buffer and time it.
pub fn transform(mode: Mode, input: &[u8]) -> Result<Transformed> {
	let start = Instant::now();
	let data = match mode {
		Mode::Compress => codec::encode(input),
		Mode::Decompress => codec::decode(input)?,
	};
	let elapsed = start.elapsed();

	let stats = CodecStats {
		input_size: input.len() as u64,
		output_size: data.len() as u64,
		elapsed,
	};
	log::debug!("{}: {} -> {} bytes in {:.2?}", mode, stats.input_size, stats.output_size, elapsed);
	Ok(Transformed { data, stats })
}

fn run<R: Read, W: Write>(mode: Mode, reader: &mut R, writer: &mut W) -> Result<CodecStats> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;
	let out = transform(mode, &buffer)?;
	writer.write_all(&out.data)?;
	writer.flush()?;
	Ok(out.stats)
}

/// Read all of `reader`, encode it, and write the chunks to `writer`.
pub fn compress<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<CodecStats> {
	run(Mode::Compress, reader, writer)
}

/// Read all of `reader`, decode it, and write the result to `writer`.
/// Nothing is written if the stream is malformed.
pub fn decompress<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<CodecStats> {
	run(Mode::Decompress, reader, writer)
}
