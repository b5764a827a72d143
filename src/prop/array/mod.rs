use crate::prop::bytes::{Cursor, Writer};
use crate::prop::element::EnumValue;
use crate::prop::value::FieldValue;
use crate::prop::{ArrayElement, DecodeCtx, ElementKind, ObjectReference, PropError, Result, TextEntry, Value};

/// Array-valued property: a uniform element kind and its elements in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayProperty {
	/// Property name.
	pub name: String,
	/// Disambiguates repeated names.
	pub index: i32,
	/// Element kind shared by every element.
	pub kind: ElementKind,
	/// Elements in file order.
	pub elements: Vec<ArrayElement>,
	/// Shared header of struct arrays, kept for byte-exact re-emission.
	pub struct_header: Option<StructArrayHeader>,
}

/// Header read once before the elements of a struct array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructArrayHeader {
	/// Descriptive name, usually the property name.
	pub name: String,
	/// Declared byte size of all struct elements.
	pub size: i32,
	/// Declared struct index.
	pub index: i32,
	/// Struct type name used for registry lookup.
	pub struct_type: String,
	/// Four opaque reserved integers.
	pub reserved: [i32; 4],
	/// One opaque reserved byte.
	pub reserved_byte: u8,
}

impl StructArrayHeader {
	/// Read the header, checking its embedded property type.
	pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let name = cursor.read_fstring()?;
		let property_type = cursor.read_fstring()?;
		if property_type != ElementKind::Struct.as_tag() {
			return Err(PropError::StructArrayTagMismatch {
				expected: ElementKind::Struct.as_tag(),
				got: property_type,
			});
		}
		let size = cursor.read_i32()?;
		let index = cursor.read_i32()?;
		let struct_type = cursor.read_fstring()?;
		let reserved = [cursor.read_i32()?, cursor.read_i32()?, cursor.read_i32()?, cursor.read_i32()?];
		let reserved_byte = cursor.read_u8()?;

		Ok(Self {
			name,
			size,
			index,
			struct_type,
			reserved,
			reserved_byte,
		})
	}

	/// Write the header in read order.
	pub fn write(&self, writer: &mut Writer) -> Result<()> {
		writer.write_fstring(&self.name)?;
		writer.write_fstring(ElementKind::Struct.as_tag())?;
		writer.write_i32(self.size);
		writer.write_i32(self.index);
		writer.write_fstring(&self.struct_type)?;
		for value in self.reserved {
			writer.write_i32(value);
		}
		writer.write_u8(self.reserved_byte);
		Ok(())
	}
}

impl ArrayProperty {
	/// Create an empty array of `kind`.
	pub fn new(name: impl Into<String>, index: i32, kind: ElementKind) -> Self {
		Self {
			name: name.into(),
			index,
			kind,
			elements: Vec::new(),
			struct_header: None,
		}
	}

	/// Wire tag of the element kind.
	pub fn element_type(&self) -> &'static str {
		self.kind.as_tag()
	}

	/// Decode the type-specific payload of an array record.
	///
	/// The cursor must sit right after the record header. Returns the property and the number of
	/// overhead bytes (element tag plus its null sentinel).
	pub fn decode(cursor: &mut Cursor<'_>, name: &str, index: i32, ctx: &DecodeCtx<'_>) -> Result<(Self, usize)> {
		let start = cursor.pos();
		let tag = cursor.read_fstring()?;
		cursor.expect_null_byte()?;
		let overhead = cursor.pos() - start;

		let count_at = cursor.pos();
		let raw_count = cursor.read_i32()?;
		let kind = ElementKind::from_tag(&tag).ok_or(PropError::UnsupportedArrayElementType { element_type: tag })?;
		let count = ctx.options.check_count(raw_count, count_at)?;
		log::debug!("array {name}[{index}]: {count} x {}", kind.as_tag());

		let mut struct_header = None;
		let elements = match kind {
			ElementKind::Byte => read_elements(cursor, count, |cursor| Ok(ArrayElement::Byte(cursor.read_u8()?)))?,
			ElementKind::Enum => read_elements(cursor, count, |cursor| Ok(ArrayElement::Enum(EnumValue::parse(cursor.read_fstring()?))))?,
			ElementKind::Float => read_elements(cursor, count, |cursor| Ok(ArrayElement::Float(cursor.read_f32()?)))?,
			ElementKind::Int => read_elements(cursor, count, |cursor| Ok(ArrayElement::Int(cursor.read_i32()?)))?,
			ElementKind::Interface => read_elements(cursor, count, |cursor| Ok(ArrayElement::Interface(ObjectReference::read(cursor)?)))?,
			ElementKind::Object => read_elements(cursor, count, |cursor| Ok(ArrayElement::Object(ObjectReference::read(cursor)?)))?,
			ElementKind::Str => read_elements(cursor, count, |cursor| Ok(ArrayElement::Str(cursor.read_fstring()?)))?,
			ElementKind::Text => read_elements(cursor, count, |cursor| Ok(ArrayElement::Text(TextEntry::read(cursor)?)))?,
			ElementKind::Struct => {
				let header = StructArrayHeader::read(cursor)?;
				let elements = decode_struct_elements(cursor, &header, count, ctx)?;
				struct_header = Some(header);
				elements
			}
		};

		let property = Self {
			name: name.to_owned(),
			index,
			kind,
			elements,
			struct_header,
		};
		Ok((property, overhead))
	}

	/// Array re-encoding is not implemented for any element kind; always fails.
	pub fn encode(&self, _writer: &mut Writer) -> Result<usize> {
		Err(PropError::ArrayEncodeUnsupported {
			element_type: self.element_type().to_owned(),
		})
	}

	/// Render as a neutral value.
	pub fn to_value(&self) -> Value {
		let items = Value::Array(self.elements.iter().map(ArrayElement::to_value).collect());
		let mut fields = vec![FieldValue::new("element_type", Value::string(self.element_type()))];
		if let Some(header) = &self.struct_header {
			fields.push(FieldValue::new("struct_type", Value::string(&header.struct_type)));
		}
		fields.push(FieldValue::new("elements", items));
		Value::structure("ArrayProperty", fields)
	}
}

fn read_elements<F>(cursor: &mut Cursor<'_>, count: usize, mut read: F) -> Result<Vec<ArrayElement>>
where
	F: FnMut(&mut Cursor<'_>) -> Result<ArrayElement>,
{
	let mut out = Vec::with_capacity(count.min(cursor.remaining()));
	for _ in 0..count {
		out.push(read(cursor)?);
	}
	Ok(out)
}

fn decode_struct_elements(cursor: &mut Cursor<'_>, header: &StructArrayHeader, count: usize, ctx: &DecodeCtx<'_>) -> Result<Vec<ArrayElement>> {
	let start = cursor.pos();
	let mut out = Vec::with_capacity(count.min(cursor.remaining()));
	for _ in 0..count {
		let item = ctx.registry.decode(&header.struct_type, cursor, ctx)?;
		out.push(ArrayElement::Struct(item));
	}

	let consumed = cursor.pos() - start;
	if i64::try_from(consumed).ok() != Some(i64::from(header.size)) {
		if ctx.options.strict_layout {
			return Err(PropError::StructSizeMismatch {
				type_name: header.struct_type.clone(),
				declared: i64::from(header.size),
				consumed,
			});
		}
		log::debug!("struct array {} declared {} bytes, consumed {consumed}", header.struct_type, header.size);
	}
	Ok(out)
}
