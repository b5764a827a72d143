use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PropError>;

/// Errors produced while reading, decoding, encoding, and binding property records.
#[derive(Debug, Error)]
pub enum PropError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A mandatory null sentinel byte was nonzero.
	#[error("expected null byte at offset {at}, got 0x{got:02x}")]
	ExpectedNullByte {
		/// Offset of the sentinel byte.
		at: usize,
		/// Byte actually found.
		got: u8,
	},
	/// A length-prefixed string did not end with its terminator.
	#[error("string at offset {at} is missing its null terminator")]
	UnterminatedString {
		/// Offset of the string's length prefix.
		at: usize,
	},
	/// A UTF-16 string payload was not valid UTF-16.
	#[error("string at offset {at} is not valid utf-16")]
	InvalidUtf16 {
		/// Offset of the string's length prefix.
		at: usize,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Record type tag is not a known property kind.
	#[error("unsupported property type {type_tag:?} for {name:?}")]
	UnsupportedPropertyType {
		/// Property name.
		name: String,
		/// Unrecognized record tag.
		type_tag: String,
	},
	/// Array element type tag is not a known element kind.
	#[error("unsupported array element type {element_type:?}")]
	UnsupportedArrayElementType {
		/// Unrecognized element tag.
		element_type: String,
	},
	/// Array element count was negative.
	#[error("negative array count {count} at offset {at}")]
	NegativeArrayCount {
		/// Parsed signed count.
		count: i32,
		/// Offset of the count field.
		at: usize,
	},
	/// Requested decode array length exceeded configured limit.
	#[error("decode array too large: count={count}, max={max}")]
	DecodeArrayTooLarge {
		/// Requested array length.
		count: usize,
		/// Maximum permitted array length.
		max: usize,
	},
	/// Struct array header carried the wrong embedded property type.
	#[error("struct array header type mismatch: expected {expected:?}, got {got:?}")]
	StructArrayTagMismatch {
		/// Required tag.
		expected: &'static str,
		/// Tag found in the header.
		got: String,
	},
	/// Struct type name has no registered decoder.
	#[error("unknown struct type {type_name:?}")]
	UnknownStructType {
		/// Requested struct type name.
		type_name: String,
	},
	/// Strict layout mode found struct payload bytes disagreeing with the declared size.
	#[error("struct array {type_name} size mismatch: declared={declared}, consumed={consumed}")]
	StructSizeMismatch {
		/// Struct type name being decoded.
		type_name: String,
		/// Size declared in the header.
		declared: i64,
		/// Bytes actually consumed.
		consumed: usize,
	},
	/// Strict layout mode found a record payload disagreeing with its declared size.
	#[error("property {name:?} ({type_tag}) size mismatch: declared={declared}, consumed={consumed}")]
	PropertySizeMismatch {
		/// Property name.
		name: String,
		/// Record type tag.
		type_tag: String,
		/// Payload size from the record header.
		declared: i32,
		/// Payload bytes actually consumed.
		consumed: usize,
	},
	/// Text entry uses a history kind this reader cannot decode.
	#[error("unsupported text history type {history_type}")]
	UnsupportedTextHistory {
		/// Raw history discriminator.
		history_type: i8,
	},
	/// Nested property/struct decoding exceeded configured depth.
	#[error("decode depth exceeded (max={max_depth})")]
	DecodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Array properties cannot be written back yet.
	#[error("array encoding is not supported (element type {element_type:?})")]
	ArrayEncodeUnsupported {
		/// Element tag of the array that was being written.
		element_type: String,
	},
	/// Enum arrays cannot be bound into host fields yet.
	#[error("binding enum array {name:?} is not supported")]
	EnumBindingUnsupported {
		/// Property name.
		name: String,
	},
	/// Encoded payload does not fit the 32-bit size/length fields.
	#[error("encoded {what} too large: {len} bytes")]
	EncodeTooLarge {
		/// What was being encoded.
		what: &'static str,
		/// Offending length.
		len: usize,
	},
}
