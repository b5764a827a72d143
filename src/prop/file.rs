use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::prop::bytes::Cursor;
use crate::prop::compression::decode_bytes;
use crate::prop::{Compression, DecodeCtx, DecodeOptions, Property, Result, StructRegistry, read_property_list};

/// Property-list blob loaded from disk.
pub struct PropertyFile {
	/// Compression the file was stored with.
	pub compression: Compression,
	bytes: Vec<u8>,
}

/// Result of decoding a whole blob.
#[derive(Debug)]
pub struct DecodedList {
	/// Top-level properties in file order.
	pub properties: Vec<Property>,
	/// Bytes left after the `None` terminator.
	pub trailing: usize,
}

/// Counts of decoded records by type tag.
#[derive(Debug, Default)]
pub struct PropertyStats {
	/// Number of top-level records.
	pub property_count: u32,
	/// Number of array records.
	pub array_count: u32,
	/// Total elements across all arrays.
	pub array_elements: u64,
	/// Records per type tag.
	pub tags: HashMap<&'static str, u32>,
}

impl PropertyFile {
	/// Read and, if needed, decompress a file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_raw(raw)
	}

	/// Wrap in-memory bytes, decompressing zstd frames.
	pub fn from_raw(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		Ok(Self { compression, bytes })
	}

	/// Decompressed bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode the top-level property list.
	pub fn decode(&self, registry: &StructRegistry, options: &DecodeOptions) -> Result<DecodedList> {
		let ctx = DecodeCtx::new(registry, options);
		let mut cursor = Cursor::new(&self.bytes);
		let properties = read_property_list(&mut cursor, &ctx)?;
		let trailing = cursor.remaining();
		if trailing > 0 {
			log::warn!("{trailing} bytes after property list terminator");
		}
		Ok(DecodedList { properties, trailing })
	}
}

impl DecodedList {
	/// Tally record kinds.
	pub fn stats(&self) -> PropertyStats {
		let mut stats = PropertyStats::default();
		for property in &self.properties {
			stats.property_count += 1;
			*stats.tags.entry(property.type_tag()).or_insert(0) += 1;
			if let Property::Array(item) = property {
				stats.array_count += 1;
				stats.array_elements += item.elements.len() as u64;
			}
		}
		stats
	}
}
