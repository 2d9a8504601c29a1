use rle_codec::{inspect, pipeline};

fn main() {
	let data = b"hello hello hello hello\0\0\0\0\0\0\0\0".to_vec();
	let mut input = std::io::Cursor::new(data);
	let mut compressed = Vec::new();
	let stats = pipeline::compress(&mut input, &mut compressed).unwrap();
	println!("compressed {} -> {}", stats.input_size, stats.output_size);

	let info = inspect(&compressed).unwrap();
	println!("{} run chunk(s), {} literal chunk(s)", info.run_chunks, info.literal_chunks);

	let mut comp_cur = std::io::Cursor::new(compressed);
	let mut restored = Vec::new();
	pipeline::decompress(&mut comp_cur, &mut restored).unwrap();
	println!("restored {} bytes", restored.len());
}
