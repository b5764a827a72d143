use crate::prop::bytes::{Cursor, Writer};
use crate::prop::value::FieldValue;
use crate::prop::{ObjectReference, PropError, Result, TextEntry, Value};

/// Enum type marking a plain numeric byte property.
const BYTE_ENUM_NONE: &str = "None";

/// Boolean property; the value lives in the two overhead bytes and the payload is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolProperty {
	/// Property name.
	pub name: String,
	/// Disambiguates repeated names.
	pub index: i32,
	/// Decoded value.
	pub value: bool,
}

impl BoolProperty {
	/// Bytes taken by the value byte and its sentinel.
	pub const OVERHEAD: usize = 2;

	/// Build a boolean property.
	pub fn new(name: impl Into<String>, index: i32, value: bool) -> Self {
		Self {
			name: name.into(),
			index,
			value,
		}
	}

	/// Read the value byte (nonzero is true) and the null sentinel.
	pub fn decode(cursor: &mut Cursor<'_>, name: &str, index: i32) -> Result<(Self, usize)> {
		let value = cursor.read_u8()? != 0;
		cursor.expect_null_byte()?;
		Ok((Self::new(name, index, value), Self::OVERHEAD))
	}

	/// Write the value byte then a literal zero.
	pub fn encode(&self, writer: &mut Writer) -> Result<usize> {
		writer.write_u8(u8::from(self.value));
		writer.write_null_byte();
		Ok(Self::OVERHEAD)
	}
}

/// Payload of a fixed-layout scalar property.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
	/// `ByteProperty`: raw byte, or an enum name when `enum_type` is not `None`.
	Byte {
		/// Enum type, `"None"` for plain bytes.
		enum_type: String,
		/// Byte payload.
		value: ByteValue,
	},
	/// `EnumProperty`.
	Enum {
		/// Enum type name.
		enum_type: String,
		/// Enum value name.
		value: String,
	},
	/// `FloatProperty`.
	Float(f32),
	/// `IntProperty`.
	Int(i32),
	/// `Int64Property`.
	Int64(i64),
	/// `NameProperty`.
	Name(String),
	/// `StrProperty`.
	Str(String),
	/// `ObjectProperty`.
	Object(ObjectReference),
	/// `InterfaceProperty`.
	Interface(ObjectReference),
	/// `TextProperty`.
	Text(TextEntry),
}

/// Payload of a byte property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteValue {
	/// Plain numeric byte.
	Raw(u8),
	/// Enum value name.
	Named(String),
}

/// Named property holding one [`ScalarValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarProperty {
	/// Property name.
	pub name: String,
	/// Disambiguates repeated names.
	pub index: i32,
	/// Decoded value.
	pub value: ScalarValue,
}

impl ScalarValue {
	/// Record type tag of this value.
	pub fn type_tag(&self) -> &'static str {
		match self {
			Self::Byte { .. } => "ByteProperty",
			Self::Enum { .. } => "EnumProperty",
			Self::Float(_) => "FloatProperty",
			Self::Int(_) => "IntProperty",
			Self::Int64(_) => "Int64Property",
			Self::Name(_) => "NameProperty",
			Self::Str(_) => "StrProperty",
			Self::Object(_) => "ObjectProperty",
			Self::Interface(_) => "InterfaceProperty",
			Self::Text(_) => "TextProperty",
		}
	}

	/// Render as a neutral value.
	pub fn to_value(&self) -> Value {
		match self {
			Self::Byte { value: ByteValue::Raw(value), .. } => Value::Byte(*value),
			Self::Byte {
				enum_type,
				value: ByteValue::Named(value),
			}
			| Self::Enum { enum_type, value } => Value::structure(
				"Enum",
				vec![FieldValue::new("type", Value::string(enum_type)), FieldValue::new("value", Value::string(value))],
			),
			Self::Float(value) => Value::F32(*value),
			Self::Int(value) => Value::I64(i64::from(*value)),
			Self::Int64(value) => Value::I64(*value),
			Self::Name(value) | Self::Str(value) => Value::string(value),
			Self::Object(value) | Self::Interface(value) => value.to_value(),
			Self::Text(value) => value.to_value(),
		}
	}
}

impl ScalarProperty {
	/// Build a scalar property.
	pub fn new(name: impl Into<String>, index: i32, value: ScalarValue) -> Self {
		Self {
			name: name.into(),
			index,
			value,
		}
	}

	/// Whether `type_tag` names a scalar kind.
	pub fn handles(type_tag: &str) -> bool {
		matches!(
			type_tag,
			"ByteProperty"
				| "EnumProperty" | "FloatProperty"
				| "IntProperty" | "Int64Property"
				| "NameProperty" | "StrProperty"
				| "ObjectProperty"
				| "InterfaceProperty"
				| "TextProperty"
		)
	}

	/// Decode the overhead and payload of a scalar record, returning the overhead byte count.
	pub fn decode(cursor: &mut Cursor<'_>, type_tag: &str, name: &str, index: i32) -> Result<(Self, usize)> {
		let start = cursor.pos();
		let value = match type_tag {
			"ByteProperty" => {
				let enum_type = cursor.read_fstring()?;
				cursor.expect_null_byte()?;
				let overhead = cursor.pos() - start;
				let value = if enum_type == BYTE_ENUM_NONE {
					ByteValue::Raw(cursor.read_u8()?)
				} else {
					ByteValue::Named(cursor.read_fstring()?)
				};
				return Ok((Self::new(name, index, ScalarValue::Byte { enum_type, value }), overhead));
			}
			"EnumProperty" => {
				let enum_type = cursor.read_fstring()?;
				cursor.expect_null_byte()?;
				let overhead = cursor.pos() - start;
				let value = cursor.read_fstring()?;
				return Ok((Self::new(name, index, ScalarValue::Enum { enum_type, value }), overhead));
			}
			_ => {
				if !Self::handles(type_tag) {
					return Err(PropError::UnsupportedPropertyType {
						name: name.to_owned(),
						type_tag: type_tag.to_owned(),
					});
				}
				cursor.expect_null_byte()?;
				match type_tag {
					"FloatProperty" => ScalarValue::Float(cursor.read_f32()?),
					"IntProperty" => ScalarValue::Int(cursor.read_i32()?),
					"Int64Property" => ScalarValue::Int64(cursor.read_i64()?),
					"NameProperty" => ScalarValue::Name(cursor.read_fstring()?),
					"StrProperty" => ScalarValue::Str(cursor.read_fstring()?),
					"ObjectProperty" => ScalarValue::Object(ObjectReference::read(cursor)?),
					"InterfaceProperty" => ScalarValue::Interface(ObjectReference::read(cursor)?),
					_ => ScalarValue::Text(TextEntry::read(cursor)?),
				}
			}
		};
		Ok((Self::new(name, index, value), 1))
	}

	/// Write overhead and payload, returning the overhead byte count.
	pub fn encode(&self, writer: &mut Writer) -> Result<usize> {
		let start = writer.len();
		match &self.value {
			ScalarValue::Byte { enum_type, value } => {
				writer.write_fstring(enum_type)?;
				writer.write_null_byte();
				let overhead = writer.len() - start;
				match value {
					ByteValue::Raw(value) => writer.write_u8(*value),
					ByteValue::Named(value) => writer.write_fstring(value)?,
				}
				return Ok(overhead);
			}
			ScalarValue::Enum { enum_type, value } => {
				writer.write_fstring(enum_type)?;
				writer.write_null_byte();
				let overhead = writer.len() - start;
				writer.write_fstring(value)?;
				return Ok(overhead);
			}
			_ => writer.write_null_byte(),
		}

		match &self.value {
			ScalarValue::Float(value) => writer.write_f32(*value),
			ScalarValue::Int(value) => writer.write_i32(*value),
			ScalarValue::Int64(value) => writer.write_i64(*value),
			ScalarValue::Name(value) | ScalarValue::Str(value) => writer.write_fstring(value)?,
			ScalarValue::Object(value) | ScalarValue::Interface(value) => value.write(writer)?,
			ScalarValue::Text(value) => value.write(writer)?,
			ScalarValue::Byte { .. } | ScalarValue::Enum { .. } => {}
		}
		Ok(1)
	}
}

#[cfg(test)]
mod tests {
	use super::{BoolProperty, ByteValue, ScalarProperty, ScalarValue};
	use crate::prop::bytes::{Cursor, Writer};
	use crate::prop::{ObjectReference, PropError};

	#[test]
	fn bool_encodes_two_bytes_with_null_sentinel() {
		for value in [true, false] {
			let property = BoolProperty::new("mIsActive", 0, value);
			let mut writer = Writer::new();
			let overhead = property.encode(&mut writer).expect("bool encodes");
			assert_eq!(overhead, 2);
			assert_eq!(writer.as_bytes(), &[u8::from(value), 0]);

			let bytes = writer.into_bytes();
			let (decoded, overhead) = BoolProperty::decode(&mut Cursor::new(&bytes), "mIsActive", 0).expect("bool decodes");
			assert_eq!(decoded, property);
			assert_eq!(overhead, 2);
		}
	}

	#[test]
	fn bool_treats_any_nonzero_byte_as_true() {
		let (decoded, _) = BoolProperty::decode(&mut Cursor::new(&[0x7F, 0]), "mFlag", 2).expect("bool decodes");
		assert!(decoded.value);
		assert_eq!(decoded.index, 2);
	}

	#[test]
	fn bool_without_sentinel_is_fatal() {
		let err = BoolProperty::decode(&mut Cursor::new(&[1, 1]), "mFlag", 0).expect_err("nonzero sentinel must fail");
		assert!(matches!(err, PropError::ExpectedNullByte { at: 1, got: 1 }));
	}

	#[test]
	fn byte_property_switches_on_enum_type() {
		let raw = ScalarProperty::new(
			"mLevel",
			0,
			ScalarValue::Byte {
				enum_type: "None".to_owned(),
				value: ByteValue::Raw(3),
			},
		);
		let named = ScalarProperty::new(
			"mPurity",
			0,
			ScalarValue::Byte {
				enum_type: "EResourcePurity".to_owned(),
				value: ByteValue::Named("RP_Pure".to_owned()),
			},
		);

		for property in [raw, named] {
			let mut writer = Writer::new();
			let overhead = property.encode(&mut writer).expect("byte property encodes");
			let bytes = writer.into_bytes();
			let mut cursor = Cursor::new(&bytes);
			let (decoded, decoded_overhead) = ScalarProperty::decode(&mut cursor, "ByteProperty", &property.name, 0).expect("byte property decodes");
			assert_eq!(decoded, property);
			assert_eq!(decoded_overhead, overhead);
			assert_eq!(cursor.remaining(), 0);
		}
	}

	#[test]
	fn simple_kinds_have_one_byte_overhead() {
		let reference = ObjectReference::new("", "/Game/FactoryGame/Recipes/Recipe_IronPlate.Recipe_IronPlate_C");
		let values = [
			ScalarValue::Int(-7),
			ScalarValue::Int64(1 << 40),
			ScalarValue::Float(0.5),
			ScalarValue::Str("hello".to_owned()),
			ScalarValue::Object(reference),
		];

		for value in values {
			let tag = value.type_tag();
			let property = ScalarProperty::new("mValue", 1, value);
			let mut writer = Writer::new();
			assert_eq!(property.encode(&mut writer).expect("scalar encodes"), 1);
			let bytes = writer.into_bytes();
			assert_eq!(bytes[0], 0, "{tag} starts with its sentinel");

			let mut cursor = Cursor::new(&bytes);
			let (decoded, overhead) = ScalarProperty::decode(&mut cursor, tag, "mValue", 1).expect("scalar decodes");
			assert_eq!(overhead, 1);
			assert_eq!(decoded, property);
			assert_eq!(cursor.remaining(), 0);
		}
	}

	#[test]
	fn unknown_scalar_tag_is_rejected() {
		let err = ScalarProperty::decode(&mut Cursor::new(&[0]), "SetProperty", "mSet", 0).expect_err("set is not scalar");
		assert!(matches!(err, PropError::UnsupportedPropertyType { ref type_tag, .. } if type_tag == "SetProperty"));
	}
}
