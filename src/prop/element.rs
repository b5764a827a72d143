use crate::prop::value::FieldValue;
use crate::prop::{ObjectReference, StructData, TextEntry, Value};

/// Uniform element kind of an array property, selected by its element type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// `ByteProperty`: one raw byte.
	Byte,
	/// `EnumProperty`: one composite `Type::Value` string.
	Enum,
	/// `FloatProperty`: 32-bit float.
	Float,
	/// `IntProperty`: 32-bit signed integer.
	Int,
	/// `InterfaceProperty`: object reference.
	Interface,
	/// `ObjectProperty`: object reference.
	Object,
	/// `StrProperty`: length-prefixed string.
	Str,
	/// `StructProperty`: registry-decoded struct behind a shared header.
	Struct,
	/// `TextProperty`: rich-text entry.
	Text,
}

impl ElementKind {
	/// Every element kind, in tag order.
	pub const ALL: [Self; 9] = [
		Self::Byte,
		Self::Enum,
		Self::Float,
		Self::Int,
		Self::Interface,
		Self::Object,
		Self::Str,
		Self::Struct,
		Self::Text,
	];

	/// Wire tag string.
	pub fn as_tag(self) -> &'static str {
		match self {
			Self::Byte => "ByteProperty",
			Self::Enum => "EnumProperty",
			Self::Float => "FloatProperty",
			Self::Int => "IntProperty",
			Self::Interface => "InterfaceProperty",
			Self::Object => "ObjectProperty",
			Self::Str => "StrProperty",
			Self::Struct => "StructProperty",
			Self::Text => "TextProperty",
		}
	}

	/// Parse a wire tag string.
	pub fn from_tag(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.as_tag() == tag)
	}
}

/// Enum element value with its type prefix split out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
	/// Text before the first `:`; empty when there is none.
	pub enum_type: String,
	/// Full composite string as stored.
	pub value: String,
}

impl EnumValue {
	/// Split a composite `Type::Value` (or `Type:Value`) string.
	pub fn parse(value: String) -> Self {
		let enum_type = value.split_once(':').map(|(head, _)| head.to_owned()).unwrap_or_default();
		Self { enum_type, value }
	}

	/// Value part after the type prefix and its separator.
	pub fn variant(&self) -> &str {
		match self.value.split_once(':') {
			Some((_, rest)) => rest.trim_start_matches(':'),
			None => &self.value,
		}
	}
}

/// One decoded array element; the variant always matches the array's [`ElementKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayElement {
	/// Raw byte.
	Byte(u8),
	/// Enum value.
	Enum(EnumValue),
	/// Float.
	Float(f32),
	/// Signed integer.
	Int(i32),
	/// Interface reference.
	Interface(ObjectReference),
	/// Object reference.
	Object(ObjectReference),
	/// String.
	Str(String),
	/// Struct value owned by this element.
	Struct(Box<dyn StructData>),
	/// Rich text.
	Text(TextEntry),
}

impl ArrayElement {
	/// Kind of this element.
	pub fn kind(&self) -> ElementKind {
		match self {
			Self::Byte(_) => ElementKind::Byte,
			Self::Enum(_) => ElementKind::Enum,
			Self::Float(_) => ElementKind::Float,
			Self::Int(_) => ElementKind::Int,
			Self::Interface(_) => ElementKind::Interface,
			Self::Object(_) => ElementKind::Object,
			Self::Str(_) => ElementKind::Str,
			Self::Struct(_) => ElementKind::Struct,
			Self::Text(_) => ElementKind::Text,
		}
	}

	/// Render as a neutral value.
	pub fn to_value(&self) -> Value {
		match self {
			Self::Byte(value) => Value::Byte(*value),
			Self::Enum(value) => Value::structure(
				"Enum",
				vec![
					FieldValue::new("type", Value::string(&value.enum_type)),
					FieldValue::new("value", Value::string(&value.value)),
				],
			),
			Self::Float(value) => Value::F32(*value),
			Self::Int(value) => Value::I64(i64::from(*value)),
			Self::Interface(value) | Self::Object(value) => value.to_value(),
			Self::Str(value) => Value::string(value),
			Self::Struct(value) => value.to_value(),
			Self::Text(value) => value.to_value(),
		}
	}
}
