/// Neutral decoded value tree used for rendering properties and structs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value.
	Null,
	/// Boolean.
	Bool(bool),
	/// Raw byte.
	Byte(u8),
	/// Signed integer widened to 64 bits.
	I64(i64),
	/// 32-bit float.
	F32(f32),
	/// Text.
	String(Box<str>),
	/// Object reference handle.
	Ref {
		/// Owning level name.
		level_name: Box<str>,
		/// Object path.
		path_name: Box<str>,
	},
	/// Opaque bytes.
	Bytes(Vec<u8>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Named fields under a type name.
	Struct(StructValue),
}

/// Struct-like value with ordered named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Type label.
	pub type_name: Box<str>,
	/// Fields in decode order.
	pub fields: Vec<FieldValue>,
}

/// One named field of a [`StructValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Field value.
	pub value: Value,
}

impl FieldValue {
	/// Build a field from a name and value.
	pub fn new(name: &str, value: Value) -> Self {
		Self {
			name: name.into(),
			value,
		}
	}
}

impl Value {
	/// Build a string value.
	pub fn string(value: &str) -> Self {
		Self::String(value.into())
	}

	/// Build a struct value.
	pub fn structure(type_name: &str, fields: Vec<FieldValue>) -> Self {
		Self::Struct(StructValue {
			type_name: type_name.into(),
			fields,
		})
	}

	/// Stable lowercase kind label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Byte(_) => "byte",
			Self::I64(_) => "int",
			Self::F32(_) => "float",
			Self::String(_) => "string",
			Self::Ref { .. } => "ref",
			Self::Bytes(_) => "bytes",
			Self::Array(_) => "array",
			Self::Struct(_) => "struct",
		}
	}

	/// Look up a field by name on a struct value.
	pub fn field(&self, name: &str) -> Option<&Value> {
		match self {
			Self::Struct(item) => item.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value),
			_ => None,
		}
	}
}
