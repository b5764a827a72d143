use std::io::Read;

use crate::prop::{PropError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic marking a compressed property blob.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw)?;
		return Ok((Compression::Zstd, out));
	}

	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(PropError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_bytes};

	#[test]
	fn raw_bytes_pass_through() {
		let (mode, bytes) = decode_bytes(vec![5, 0, 0, 0]).expect("raw input decodes");
		assert_eq!(mode, Compression::None);
		assert_eq!(bytes, vec![5, 0, 0, 0]);
	}

	#[test]
	fn zstd_frames_are_expanded() {
		let payload = b"mItems\0ArrayProperty".repeat(8);
		let packed = zstd::encode_all(payload.as_slice(), 3).expect("payload compresses");
		let (mode, bytes) = decode_bytes(packed).expect("zstd input decodes");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(bytes, payload);
	}
}
