use crate::prop::bytes::{Cursor, Writer, encoded_len};
use crate::prop::value::FieldValue;
use crate::prop::{ArrayProperty, BoolProperty, DecodeCtx, PropError, Result, ScalarProperty, StructData, Value};

/// Name of the record that terminates a property list.
pub const NONE_NAME: &str = "None";

const ARRAY_TAG: &str = "ArrayProperty";
const BOOL_TAG: &str = "BoolProperty";
const STRUCT_TAG: &str = "StructProperty";

/// One decoded property record.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
	/// `ArrayProperty`.
	Array(ArrayProperty),
	/// `BoolProperty`.
	Bool(BoolProperty),
	/// Fixed-layout scalar kinds.
	Scalar(ScalarProperty),
	/// `StructProperty`.
	Struct(StructProperty),
}

/// Single struct-valued property.
#[derive(Debug, Clone)]
pub struct StructProperty {
	/// Property name.
	pub name: String,
	/// Disambiguates repeated names.
	pub index: i32,
	/// Struct type name as stored.
	pub struct_type: String,
	/// Opaque reserved bytes after the type name.
	pub reserved: [u8; 16],
	/// Decoded struct.
	pub value: Box<dyn StructData>,
}

impl PartialEq for StructProperty {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
			&& self.index == other.index
			&& self.struct_type == other.struct_type
			&& self.reserved == other.reserved
			&& *self.value == *other.value
	}
}

impl StructProperty {
	/// Decode type name, reserved bytes, sentinel, then the struct through the registry.
	pub fn decode(cursor: &mut Cursor<'_>, name: &str, index: i32, ctx: &DecodeCtx<'_>) -> Result<(Self, usize)> {
		let start = cursor.pos();
		let struct_type = cursor.read_fstring()?;
		let reserved = cursor.read_array()?;
		cursor.expect_null_byte()?;
		let overhead = cursor.pos() - start;

		let value = ctx.registry.decode(&struct_type, cursor, ctx)?;
		let property = Self {
			name: name.to_owned(),
			index,
			struct_type,
			reserved,
			value,
		};
		Ok((property, overhead))
	}

	/// Inverse of [`StructProperty::decode`], returning the overhead byte count.
	pub fn encode(&self, writer: &mut Writer) -> Result<usize> {
		let start = writer.len();
		writer.write_fstring(&self.struct_type)?;
		writer.write_bytes(&self.reserved);
		writer.write_null_byte();
		let overhead = writer.len() - start;
		self.value.serialize(writer)?;
		Ok(overhead)
	}
}

impl Property {
	/// Property name.
	pub fn name(&self) -> &str {
		match self {
			Self::Array(item) => &item.name,
			Self::Bool(item) => &item.name,
			Self::Scalar(item) => &item.name,
			Self::Struct(item) => &item.name,
		}
	}

	/// Property index.
	pub fn index(&self) -> i32 {
		match self {
			Self::Array(item) => item.index,
			Self::Bool(item) => item.index,
			Self::Scalar(item) => item.index,
			Self::Struct(item) => item.index,
		}
	}

	/// Record type tag.
	pub fn type_tag(&self) -> &'static str {
		match self {
			Self::Array(_) => ARRAY_TAG,
			Self::Bool(_) => BOOL_TAG,
			Self::Scalar(item) => item.value.type_tag(),
			Self::Struct(_) => STRUCT_TAG,
		}
	}

	/// Render the payload as a neutral value.
	pub fn to_value(&self) -> Value {
		match self {
			Self::Array(item) => item.to_value(),
			Self::Bool(item) => Value::Bool(item.value),
			Self::Scalar(item) => item.value.to_value(),
			Self::Struct(item) => item.value.to_value(),
		}
	}

	/// Write overhead and payload, returning the overhead byte count.
	pub fn encode(&self, writer: &mut Writer) -> Result<usize> {
		match self {
			Self::Array(item) => item.encode(writer),
			Self::Bool(item) => item.encode(writer),
			Self::Scalar(item) => item.encode(writer),
			Self::Struct(item) => item.encode(writer),
		}
	}
}

/// Read one record, or `None` at the list terminator.
pub fn read_property(cursor: &mut Cursor<'_>, ctx: &DecodeCtx<'_>) -> Result<Option<Property>> {
	let name = cursor.read_fstring()?;
	if name == NONE_NAME {
		return Ok(None);
	}

	let type_tag = cursor.read_fstring()?;
	let size = cursor.read_i32()?;
	let index = cursor.read_i32()?;
	let start = cursor.pos();

	let (property, overhead) = match type_tag.as_str() {
		ARRAY_TAG => ArrayProperty::decode(cursor, &name, index, ctx).map(|(item, overhead)| (Property::Array(item), overhead))?,
		BOOL_TAG => BoolProperty::decode(cursor, &name, index).map(|(item, overhead)| (Property::Bool(item), overhead))?,
		STRUCT_TAG => StructProperty::decode(cursor, &name, index, ctx).map(|(item, overhead)| (Property::Struct(item), overhead))?,
		tag if ScalarProperty::handles(tag) => ScalarProperty::decode(cursor, tag, &name, index).map(|(item, overhead)| (Property::Scalar(item), overhead))?,
		_ => {
			return Err(PropError::UnsupportedPropertyType {
				name,
				type_tag: type_tag.clone(),
			});
		}
	};

	let consumed = (cursor.pos() - start).saturating_sub(overhead);
	if usize::try_from(size).ok() != Some(consumed) {
		if ctx.options.strict_layout {
			return Err(PropError::PropertySizeMismatch {
				name,
				type_tag,
				declared: size,
				consumed,
			});
		}
		log::warn!("property {name:?} ({type_tag}) declared {size} payload bytes, consumed {consumed}");
	}

	Ok(Some(property))
}

/// Read records until the `None` terminator.
pub fn read_property_list(cursor: &mut Cursor<'_>, ctx: &DecodeCtx<'_>) -> Result<Vec<Property>> {
	let mut out = Vec::new();
	while let Some(property) = read_property(cursor, ctx)? {
		out.push(property);
	}
	Ok(out)
}

/// Write one record with its header; the payload size is measured from the encoded body.
pub fn write_property(writer: &mut Writer, property: &Property) -> Result<()> {
	let mut body = Writer::new();
	let overhead = property.encode(&mut body)?;
	let size = encoded_len("property payload", body.len() - overhead)?;

	writer.write_fstring(property.name())?;
	writer.write_fstring(property.type_tag())?;
	writer.write_i32(size);
	writer.write_i32(property.index());
	writer.write_bytes(body.as_bytes());
	Ok(())
}

/// Write records followed by the `None` terminator.
pub fn write_property_list(writer: &mut Writer, properties: &[Property]) -> Result<()> {
	for property in properties {
		write_property(writer, property)?;
	}
	writer.write_fstring(NONE_NAME)
}

/// Render a list of properties as a neutral struct value.
pub fn properties_to_value(type_name: &str, properties: &[Property]) -> Value {
	let fields = properties
		.iter()
		.map(|property| {
			let name = if property.index() == 0 {
				property.name().to_owned()
			} else {
				format!("{}[{}]", property.name(), property.index())
			};
			FieldValue::new(&name, property.to_value())
		})
		.collect();
	Value::structure(type_name, fields)
}
