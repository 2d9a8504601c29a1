//! Run-length codec with single-byte chunk headers.
//!
//! A run of 2 to 127 identical bytes becomes `[0x80 | len, value]`; anything
//! else is carried in literal chunks of up to 127 bytes, `[len, bytes..]`.
//! Runs of two are always framed as runs since that is never longer than the
//! literal form.

pub mod decode;
pub mod encode;
pub mod header;

pub use decode::{chunks, decode, decode_into, inspect, Chunk, Chunks, Decoder, StreamInfo};
pub use encode::{encode, encode_into, Encoder};
pub use header::{Header, COUNT_MASK, MAX_COUNT, MIN_RUN, RUN_FLAG};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::io::Write;

    /// Random bytes drawn from a small alphabet with runs of varying length.
    fn runny_data(rng: &mut StdRng, len: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(len);
        while data.len() < len {
            let value = rng.gen_range(0..4u8);
            let run = if rng.gen_bool(0.3) { rng.gen_range(1..300) } else { 1 };
            data.extend(std::iter::repeat(value).take(run.min(len - data.len())));
        }
        data
    }

    #[test]
    fn test_round_trip_edge_inputs() {
        let non_repeating: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
        let inputs: Vec<Vec<u8>> = vec![
            vec![],
            vec![0],
            vec![255],
            vec![0; 1],
            vec![0xAB; 2],
            vec![0xAB; 127],
            vec![0xAB; 128],
            vec![0xAB; 10_000],
            non_repeating,
        ];
        for data in inputs {
            let encoded = encode(&data);
            assert_eq!(decode(&encoded).unwrap(), data, "len {}", data.len());
        }
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let len = rng.gen_range(0..2048);
            let data = if rng.gen_bool(0.5) {
                runny_data(&mut rng, len)
            } else {
                (0..len).map(|_| rng.gen()).collect()
            };
            let encoded = encode(&data);
            assert_eq!(decode(&encoded).unwrap(), data);

            let info = inspect(&encoded).unwrap();
            assert_eq!(info.decoded_len, data.len());
        }
    }

    #[test]
    fn test_encoder_never_emits_non_canonical_chunks() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = runny_data(&mut rng, 50_000);
        for chunk in chunks(&encode(&data)) {
            match chunk.unwrap() {
                Chunk::Run { count, .. } => assert!((MIN_RUN..=MAX_COUNT).contains(&count)),
                Chunk::Literal(bytes) => assert!((1..=MAX_COUNT).contains(&bytes.len())),
            }
        }
    }

    #[test]
    fn test_streaming_matches_batch() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let len = rng.gen_range(0..4096);
            let data = runny_data(&mut rng, len);
            let expected = encode(&data);

            let mut encoder = Encoder::new(Vec::new());
            let mut rest = &data[..];
            while !rest.is_empty() {
                let take = rng.gen_range(1..=rest.len().min(200));
                encoder.write_all(&rest[..take]).unwrap();
                rest = &rest[take..];
            }
            let streamed = encoder.finish().unwrap();
            assert_eq!(streamed, expected);

            let mut decoder = Decoder::new(Vec::new());
            for piece in streamed.chunks(rng.gen_range(1..64)) {
                decoder.write_all(piece).unwrap();
            }
            assert_eq!(decoder.finish().unwrap(), data);
        }
    }
}
