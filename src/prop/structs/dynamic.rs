use crate::prop::bytes::{Cursor, Writer};
use crate::prop::{DecodeCtx, Property, Result, StructData, Value, properties_to_value, read_property_list, write_property_list};

/// Struct of an unregistered type, stored as a nested property list.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicStruct {
	type_name: String,
	/// Nested properties in file order.
	pub properties: Vec<Property>,
}

impl DynamicStruct {
	/// Empty struct reported under `type_name`.
	pub fn new(type_name: &str) -> Self {
		Self {
			type_name: type_name.to_owned(),
			properties: Vec::new(),
		}
	}

	/// Look up a nested property by name and index.
	pub fn get(&self, name: &str, index: i32) -> Option<&Property> {
		self.properties.iter().find(|property| property.name() == name && property.index() == index)
	}
}

impl StructData for DynamicStruct {
	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn deserialize(&mut self, cursor: &mut Cursor<'_>, ctx: &DecodeCtx<'_>) -> Result<()> {
		self.properties = read_property_list(cursor, ctx)?;
		Ok(())
	}

	fn serialize(&self, writer: &mut Writer) -> Result<()> {
		write_property_list(writer, &self.properties)
	}

	fn to_value(&self) -> Value {
		properties_to_value(&self.type_name, &self.properties)
	}
}
