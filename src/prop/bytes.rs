use crate::prop::{PropError, Result};

/// Simple bounded cursor over an immutable byte slice.
///
/// All multi-byte reads are little-endian.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(PropError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a fixed-size byte array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one raw byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read one signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `f32`.
	pub fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Consume one byte and fail unless it is zero.
	pub fn expect_null_byte(&mut self) -> Result<()> {
		let at = self.pos;
		let got = self.read_u8()?;
		if got != 0 {
			return Err(PropError::ExpectedNullByte { at, got });
		}
		Ok(())
	}

	/// Read a length-prefixed, null-terminated string.
	///
	/// Positive lengths count 8-bit (Latin-1) characters, negative lengths count UTF-16 units.
	/// Both include the terminator. A lone terminator (`len == 1`) reads as `""` and is written
	/// back in the shorter `len == 0` form.
	pub fn read_fstring(&mut self) -> Result<String> {
		let at = self.pos;
		let len = self.read_i32()?;
		if len == 0 {
			return Ok(String::new());
		}

		if len > 0 {
			let raw = self.read_exact(len as usize)?;
			let Some((&0, body)) = raw.split_last() else {
				return Err(PropError::UnterminatedString { at });
			};
			return Ok(body.iter().map(|byte| char::from(*byte)).collect());
		}

		let units = len.unsigned_abs() as usize;
		let raw = self.read_exact(units.saturating_mul(2))?;
		let mut words: Vec<u16> = raw.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]])).collect();
		if words.pop() != Some(0) {
			return Err(PropError::UnterminatedString { at });
		}
		String::from_utf16(&words).map_err(|_| PropError::InvalidUtf16 { at })
	}
}

/// Growable little-endian output buffer, the inverse of [`Cursor`].
#[derive(Debug, Default)]
pub struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of bytes written so far.
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Whether nothing has been written yet.
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Borrow written bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.buf
	}

	/// Consume the writer and return its bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	/// Append raw bytes.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	/// Append one raw byte.
	pub fn write_u8(&mut self, value: u8) {
		self.buf.push(value);
	}

	/// Append one signed byte.
	pub fn write_i8(&mut self, value: i8) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a literal zero sentinel byte.
	pub fn write_null_byte(&mut self) {
		self.buf.push(0);
	}

	/// Append a little-endian `i32`.
	pub fn write_i32(&mut self, value: i32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `i64`.
	pub fn write_i64(&mut self, value: i64) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `f32`.
	pub fn write_f32(&mut self, value: f32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a length-prefixed, null-terminated string.
	///
	/// Text made only of Latin-1 characters uses the 8-bit form, anything else is written as UTF-16.
	pub fn write_fstring(&mut self, value: &str) -> Result<()> {
		if value.is_empty() {
			self.write_i32(0);
			return Ok(());
		}

		if is_latin1(value) {
			self.write_i32(encoded_len("string", value.chars().count() + 1)?);
			self.buf.extend(value.chars().map(|ch| ch as u8));
			self.write_null_byte();
			return Ok(());
		}

		let units: Vec<u16> = value.encode_utf16().collect();
		self.write_i32(-encoded_len("string", units.len() + 1)?);
		for unit in units.into_iter().chain(std::iter::once(0)) {
			self.write_bytes(&unit.to_le_bytes());
		}
		Ok(())
	}
}

/// Number of bytes [`Writer::write_fstring`] emits for `value`.
pub fn fstring_len(value: &str) -> usize {
	if value.is_empty() {
		4
	} else if is_latin1(value) {
		4 + value.chars().count() + 1
	} else {
		4 + (value.encode_utf16().count() + 1) * 2
	}
}

fn is_latin1(value: &str) -> bool {
	value.chars().all(|ch| ch <= '\u{FF}')
}

/// Convert a byte/unit count to the signed 32-bit form used on the wire.
pub(crate) fn encoded_len(what: &'static str, len: usize) -> Result<i32> {
	i32::try_from(len).map_err(|_| PropError::EncodeTooLarge { what, len })
}

#[cfg(test)]
mod tests {
	use super::{Cursor, Writer, fstring_len};
	use crate::prop::PropError;

	#[test]
	fn reads_ascii_fstring_with_terminator() {
		let bytes = [4, 0, 0, 0, b'I', b'n', b't', 0, 0xAA];
		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_fstring().expect("string reads"), "Int");
		assert_eq!(cursor.pos(), 8);
		assert_eq!(cursor.remaining(), 1);
	}

	#[test]
	fn reads_empty_fstring_as_bare_prefix() {
		let mut cursor = Cursor::new(&[0, 0, 0, 0]);
		assert_eq!(cursor.read_fstring().expect("string reads"), "");
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn rejects_fstring_without_terminator() {
		let bytes = [3, 0, 0, 0, b'a', b'b', b'c'];
		let err = Cursor::new(&bytes).read_fstring().expect_err("missing terminator must fail");
		assert!(matches!(err, PropError::UnterminatedString { at: 0 }));
	}

	#[test]
	fn utf16_fstring_matches_writer_output() {
		let mut writer = Writer::new();
		writer.write_fstring("Grüße €").expect("string writes");
		assert_eq!(writer.len(), fstring_len("Grüße €"));
		assert_eq!(&writer.as_bytes()[..4], &(-8_i32).to_le_bytes());

		let bytes = writer.into_bytes();
		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_fstring().expect("string reads"), "Grüße €");
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn latin1_fstring_is_rewritten_byte_exact() {
		let original = [5, 0, 0, 0, b'c', b'a', b'f', 0xE9, 0];
		let text = Cursor::new(&original).read_fstring().expect("string reads");
		assert_eq!(text, "café");

		let mut writer = Writer::new();
		writer.write_fstring(&text).expect("string writes");
		assert_eq!(writer.as_bytes(), &original);
		assert_eq!(fstring_len(&text), original.len());
	}

	#[test]
	fn lone_terminator_reads_empty_and_rewrites_short() {
		let mut cursor = Cursor::new(&[1, 0, 0, 0, 0]);
		assert_eq!(cursor.read_fstring().expect("string reads"), "");
		assert_eq!(cursor.remaining(), 0);

		let mut writer = Writer::new();
		writer.write_fstring("").expect("string writes");
		assert_eq!(writer.as_bytes(), &[0, 0, 0, 0]);
	}

	#[test]
	fn null_byte_check_reports_offset_and_value() {
		let mut cursor = Cursor::new(&[0, 7]);
		cursor.expect_null_byte().expect("first byte is null");
		let err = cursor.expect_null_byte().expect_err("second byte is not null");
		assert!(matches!(err, PropError::ExpectedNullByte { at: 1, got: 7 }));
	}

	#[test]
	fn short_read_reports_eof() {
		let err = Cursor::new(&[1, 2]).read_i32().expect_err("two bytes cannot hold an i32");
		assert!(matches!(err, PropError::UnexpectedEof { at: 0, need: 4, rem: 2 }));
	}
}
