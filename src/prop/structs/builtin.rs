use crate::prop::bytes::{Cursor, Writer};
use crate::prop::value::FieldValue;
use crate::prop::{DecodeCtx, ObjectReference, Result, StructData, Value};

fn f32_field(name: &str, value: f32) -> FieldValue {
	FieldValue::new(name, Value::F32(value))
}

/// Three floats; backs `Vector` and `Rotator`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
	type_name: &'static str,
	/// X (or pitch).
	pub x: f32,
	/// Y (or yaw).
	pub y: f32,
	/// Z (or roll).
	pub z: f32,
}

impl Vector {
	/// Zero vector reported under `type_name`.
	pub fn named(type_name: &'static str) -> Self {
		Self {
			type_name,
			x: 0.0,
			y: 0.0,
			z: 0.0,
		}
	}

	fn read_xyz(cursor: &mut Cursor<'_>) -> Result<[f32; 3]> {
		Ok([cursor.read_f32()?, cursor.read_f32()?, cursor.read_f32()?])
	}
}

impl StructData for Vector {
	fn type_name(&self) -> &str {
		self.type_name
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		[self.x, self.y, self.z] = Self::read_xyz(cursor)?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		for value in [self.x, self.y, self.z] {
			writer.write_f32(value);
		}
		Ok(())
	}

	fn to_value(&self) -> Value {
		Value::structure(self.type_name, vec![f32_field("x", self.x), f32_field("y", self.y), f32_field("z", self.z)])
	}
}

/// Two floats.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2D {
	/// X.
	pub x: f32,
	/// Y.
	pub y: f32,
}

impl StructData for Vector2D {
	fn type_name(&self) -> &str {
		"Vector2D"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		self.x = cursor.read_f32()?;
		self.y = cursor.read_f32()?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		writer.write_f32(self.x);
		writer.write_f32(self.y);
		Ok(())
	}

	fn to_value(&self) -> Value {
		Value::structure("Vector2D", vec![f32_field("x", self.x), f32_field("y", self.y)])
	}
}

/// Rotation quaternion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quat {
	/// X.
	pub x: f32,
	/// Y.
	pub y: f32,
	/// Z.
	pub z: f32,
	/// W.
	pub w: f32,
}

impl StructData for Quat {
	fn type_name(&self) -> &str {
		"Quat"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		self.x = cursor.read_f32()?;
		self.y = cursor.read_f32()?;
		self.z = cursor.read_f32()?;
		self.w = cursor.read_f32()?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		for value in [self.x, self.y, self.z, self.w] {
			writer.write_f32(value);
		}
		Ok(())
	}

	fn to_value(&self) -> Value {
		Value::structure(
			"Quat",
			vec![f32_field("x", self.x), f32_field("y", self.y), f32_field("z", self.z), f32_field("w", self.w)],
		)
	}
}

/// Floating point RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearColor {
	/// Red.
	pub r: f32,
	/// Green.
	pub g: f32,
	/// Blue.
	pub b: f32,
	/// Alpha.
	pub a: f32,
}

impl StructData for LinearColor {
	fn type_name(&self) -> &str {
		"LinearColor"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		self.r = cursor.read_f32()?;
		self.g = cursor.read_f32()?;
		self.b = cursor.read_f32()?;
		self.a = cursor.read_f32()?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		for value in [self.r, self.g, self.b, self.a] {
			writer.write_f32(value);
		}
		Ok(())
	}

	fn to_value(&self) -> Value {
		Value::structure(
			"LinearColor",
			vec![f32_field("r", self.r), f32_field("g", self.g), f32_field("b", self.b), f32_field("a", self.a)],
		)
	}
}

/// 8-bit color stored in B, G, R, A order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
	/// Blue.
	pub b: u8,
	/// Green.
	pub g: u8,
	/// Red.
	pub r: u8,
	/// Alpha.
	pub a: u8,
}

impl StructData for Color {
	fn type_name(&self) -> &str {
		"Color"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		[self.b, self.g, self.r, self.a] = cursor.read_array()?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		writer.write_bytes(&[self.b, self.g, self.r, self.a]);
		Ok(())
	}

	fn to_value(&self) -> Value {
		let fields = [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)]
			.into_iter()
			.map(|(name, value)| FieldValue::new(name, Value::Byte(value)))
			.collect();
		Value::structure("Color", fields)
	}
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxStruct {
	/// Minimum corner.
	pub min: [f32; 3],
	/// Maximum corner.
	pub max: [f32; 3],
	/// Raw validity flag.
	pub is_valid: u8,
}

impl StructData for BoxStruct {
	fn type_name(&self) -> &str {
		"Box"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		self.min = Vector::read_xyz(cursor)?;
		self.max = Vector::read_xyz(cursor)?;
		self.is_valid = cursor.read_u8()?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		for value in self.min.into_iter().chain(self.max) {
			writer.write_f32(value);
		}
		writer.write_u8(self.is_valid);
		Ok(())
	}

	fn to_value(&self) -> Value {
		let corner = |[x, y, z]: [f32; 3]| Value::Array(vec![Value::F32(x), Value::F32(y), Value::F32(z)]);
		Value::structure(
			"Box",
			vec![
				FieldValue::new("min", corner(self.min)),
				FieldValue::new("max", corner(self.max)),
				FieldValue::new("is_valid", Value::Byte(self.is_valid)),
			],
		)
	}
}

/// Two signed integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntPoint {
	/// X.
	pub x: i32,
	/// Y.
	pub y: i32,
}

impl StructData for IntPoint {
	fn type_name(&self) -> &str {
		"IntPoint"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		self.x = cursor.read_i32()?;
		self.y = cursor.read_i32()?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		writer.write_i32(self.x);
		writer.write_i32(self.y);
		Ok(())
	}

	fn to_value(&self) -> Value {
		Value::structure(
			"IntPoint",
			vec![FieldValue::new("x", Value::I64(i64::from(self.x))), FieldValue::new("y", Value::I64(i64::from(self.y)))],
		)
	}
}

/// 16 raw identifier bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Guid(pub [u8; 16]);

impl StructData for Guid {
	fn type_name(&self) -> &str {
		"Guid"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		self.0 = cursor.read_array()?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		writer.write_bytes(&self.0);
		Ok(())
	}

	fn to_value(&self) -> Value {
		let hex: String = self.0.iter().map(|byte| format!("{byte:02x}")).collect();
		Value::structure("Guid", vec![FieldValue::new("value", Value::String(hex.into_boxed_str()))])
	}
}

/// Inventory slot contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryItem {
	/// Leading integer with no known meaning.
	pub unknown: i32,
	/// Item descriptor class path.
	pub item_name: String,
	/// Optional item state object.
	pub item_state: ObjectReference,
}

impl StructData for InventoryItem {
	fn type_name(&self) -> &str {
		"InventoryItem"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		self.unknown = cursor.read_i32()?;
		self.item_name = cursor.read_fstring()?;
		self.item_state = ObjectReference::read(cursor)?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		writer.write_i32(self.unknown);
		writer.write_fstring(&self.item_name)?;
		self.item_state.write(writer)
	}

	fn to_value(&self) -> Value {
		Value::structure(
			"InventoryItem",
			vec![
				FieldValue::new("unknown", Value::I64(i64::from(self.unknown))),
				FieldValue::new("item_name", Value::string(&self.item_name)),
				FieldValue::new("item_state", self.item_state.to_value()),
			],
		)
	}
}

/// Fluid content of a pipe segment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FluidBox {
	/// Stored volume.
	pub value: f32,
}

impl StructData for FluidBox {
	fn type_name(&self) -> &str {
		"FluidBox"
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, _ctx: &DecodeCtx<'_>) -> Result<()> {
		self.value = cursor.read_f32()?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		writer.write_f32(self.value);
		Ok(())
	}

	fn to_value(&self) -> Value {
		Value::structure("FluidBox", vec![f32_field("value", self.value)])
	}
}
