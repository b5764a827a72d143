use crate::prop::bytes::{Cursor, Writer};
use crate::prop::value::FieldValue;
use crate::prop::{PropError, Result, Value};

const HISTORY_BASE: i8 = 0;
const HISTORY_NONE: i8 = -1;

/// Localizable rich-text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
	/// Raw text flags.
	pub flags: i32,
	/// How the text was produced.
	pub history: TextHistory,
}

/// Decoded text history payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextHistory {
	/// Localized text keyed by namespace and key.
	Base {
		/// Localization namespace.
		namespace: String,
		/// Localization key.
		key: String,
		/// Source string.
		source: String,
	},
	/// Plain text without history, optionally carrying a culture-invariant string.
	None {
		/// Culture-invariant string, when present.
		culture_invariant: Option<String>,
	},
}

impl TextEntry {
	/// Decode one text entry.
	pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let flags = cursor.read_i32()?;
		let history_type = cursor.read_i8()?;
		let history = match history_type {
			HISTORY_BASE => TextHistory::Base {
				namespace: cursor.read_fstring()?,
				key: cursor.read_fstring()?,
				source: cursor.read_fstring()?,
			},
			HISTORY_NONE => {
				let culture_invariant = if cursor.read_i32()? != 0 { Some(cursor.read_fstring()?) } else { None };
				TextHistory::None { culture_invariant }
			}
			_ => return Err(PropError::UnsupportedTextHistory { history_type }),
		};
		Ok(Self { flags, history })
	}

	/// Encode one text entry.
	pub fn write(&self, writer: &mut Writer) -> Result<()> {
		writer.write_i32(self.flags);
		match &self.history {
			TextHistory::Base { namespace, key, source } => {
				writer.write_i8(HISTORY_BASE);
				writer.write_fstring(namespace)?;
				writer.write_fstring(key)?;
				writer.write_fstring(source)?;
			}
			TextHistory::None { culture_invariant } => {
				writer.write_i8(HISTORY_NONE);
				match culture_invariant {
					Some(text) => {
						writer.write_i32(1);
						writer.write_fstring(text)?;
					}
					None => writer.write_i32(0),
				}
			}
		}
		Ok(())
	}

	/// Display string of this entry, if any.
	pub fn display(&self) -> Option<&str> {
		match &self.history {
			TextHistory::Base { source, .. } => Some(source),
			TextHistory::None { culture_invariant } => culture_invariant.as_deref(),
		}
	}

	pub(crate) fn to_value(&self) -> Value {
		let mut fields = vec![FieldValue::new("flags", Value::I64(i64::from(self.flags)))];
		match &self.history {
			TextHistory::Base { namespace, key, source } => {
				fields.push(FieldValue::new("namespace", Value::string(namespace)));
				fields.push(FieldValue::new("key", Value::string(key)));
				fields.push(FieldValue::new("source", Value::string(source)));
			}
			TextHistory::None { culture_invariant } => {
				let value = culture_invariant.as_deref().map_or(Value::Null, Value::string);
				fields.push(FieldValue::new("culture_invariant", value));
			}
		}
		Value::structure("Text", fields)
	}
}

#[cfg(test)]
mod tests {
	use super::{TextEntry, TextHistory};
	use crate::prop::PropError;
	use crate::prop::bytes::{Cursor, Writer};

	#[test]
	fn base_history_reads_three_strings() {
		let entry = TextEntry {
			flags: 2,
			history: TextHistory::Base {
				namespace: String::new(),
				key: "A1B2".to_owned(),
				source: "Iron Plate".to_owned(),
			},
		};
		let mut writer = Writer::new();
		entry.write(&mut writer).expect("entry writes");
		assert_eq!(writer.as_bytes()[4], 0, "history byte follows flags");

		let bytes = writer.into_bytes();
		let mut cursor = Cursor::new(&bytes);
		let decoded = TextEntry::read(&mut cursor).expect("entry reads");
		assert_eq!(decoded, entry);
		assert_eq!(decoded.display(), Some("Iron Plate"));
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn none_history_without_invariant_string() {
		let bytes = [0, 0, 0, 0, 0xFF, 0, 0, 0, 0];
		let entry = TextEntry::read(&mut Cursor::new(&bytes)).expect("entry reads");
		assert_eq!(entry.history, TextHistory::None { culture_invariant: None });
		assert_eq!(entry.display(), None);
	}

	#[test]
	fn unknown_history_is_fatal() {
		let bytes = [0, 0, 0, 0, 3];
		let err = TextEntry::read(&mut Cursor::new(&bytes)).expect_err("history 3 is not decodable");
		assert!(matches!(err, PropError::UnsupportedTextHistory { history_type: 3 }));
	}
}
