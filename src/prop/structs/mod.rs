use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::prop::bytes::{Cursor, Writer};
use crate::prop::{DecodeCtx, PropError, Result, Value};

mod builtin;
mod dynamic;

pub use builtin::{BoxStruct, Color, FluidBox, Guid, IntPoint, InventoryItem, LinearColor, Quat, Vector, Vector2D};
pub use dynamic::DynamicStruct;

/// Type-specific struct payload decoded through a [`StructRegistry`].
///
/// Each instance consumes exactly its own bytes in [`StructData::deserialize`].
pub trait StructData: fmt::Debug + Send + Sync + StructDataExt {
	/// Registered type name of this struct.
	fn type_name(&self) -> &str;

	/// Fill `self` from the cursor.
	fn deserialize(&mut self, cursor: &mut Cursor<'_>, ctx: &DecodeCtx<'_>) -> Result<()>;

	/// Write the inverse of [`StructData::deserialize`].
	fn serialize(&self, writer: &mut Writer) -> Result<()>;

	/// Render as a neutral value tree.
	fn to_value(&self) -> Value;
}

/// Object-safe clone/compare/downcast helpers, implemented for every `Clone + PartialEq` struct.
pub trait StructDataExt {
	/// Upcast for downcasting.
	fn as_any(&self) -> &dyn Any;
	/// Clone into a new box.
	fn clone_box(&self) -> Box<dyn StructData>;
	/// Compare against another struct of unknown concrete type.
	fn eq_dyn(&self, other: &dyn StructData) -> bool;
}

impl<T> StructDataExt for T
where
	T: StructData + Clone + PartialEq + 'static,
{
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn clone_box(&self) -> Box<dyn StructData> {
		Box::new(self.clone())
	}

	fn eq_dyn(&self, other: &dyn StructData) -> bool {
		other.as_any().downcast_ref::<T>() == Some(self)
	}
}

impl dyn StructData {
	/// Downcast to a concrete struct type.
	pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}
}

impl Clone for Box<dyn StructData> {
	fn clone(&self) -> Self {
		self.clone_box()
	}
}

impl PartialEq for dyn StructData {
	fn eq(&self, other: &Self) -> bool {
		self.eq_dyn(other)
	}
}

/// Constructor producing a fresh, empty struct instance.
pub type StructCtor = fn() -> Box<dyn StructData>;

/// Mapping from struct type name to constructor, populated up front and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StructRegistry {
	ctors: HashMap<String, StructCtor>,
	dynamic_fallback: bool,
}

impl StructRegistry {
	/// Empty registry without fallback.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry with every built-in layout.
	pub fn builtin() -> Self {
		let mut registry = Self::new();
		registry.register("Vector", || Box::new(Vector::named("Vector")));
		registry.register("Rotator", || Box::new(Vector::named("Rotator")));
		registry.register("Vector2D", || Box::new(Vector2D::default()));
		registry.register("Quat", || Box::new(Quat::default()));
		registry.register("LinearColor", || Box::new(LinearColor::default()));
		registry.register("Color", || Box::new(Color::default()));
		registry.register("Box", || Box::new(BoxStruct::default()));
		registry.register("IntPoint", || Box::new(IntPoint::default()));
		registry.register("Guid", || Box::new(Guid::default()));
		registry.register("InventoryItem", || Box::new(InventoryItem::default()));
		registry.register("FluidBox", || Box::new(FluidBox::default()));
		registry
	}

	/// Decode unregistered type names as nested property lists instead of failing.
	pub fn with_dynamic_fallback(mut self) -> Self {
		self.dynamic_fallback = true;
		self
	}

	/// Whether unregistered names fall back to [`DynamicStruct`].
	pub fn has_dynamic_fallback(&self) -> bool {
		self.dynamic_fallback
	}

	/// Register or replace a constructor, returning the previous one.
	pub fn register(&mut self, type_name: impl Into<String>, ctor: StructCtor) -> Option<StructCtor> {
		self.ctors.insert(type_name.into(), ctor)
	}

	/// Whether `type_name` has an explicit constructor.
	pub fn contains(&self, type_name: &str) -> bool {
		self.ctors.contains_key(type_name)
	}

	/// Registered type names in sorted order.
	pub fn type_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.ctors.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Produce a fresh instance for `type_name`.
	pub fn create(&self, type_name: &str) -> Result<Box<dyn StructData>> {
		if let Some(ctor) = self.ctors.get(type_name) {
			return Ok(ctor());
		}
		if self.dynamic_fallback {
			return Ok(Box::new(DynamicStruct::new(type_name)));
		}
		Err(PropError::UnknownStructType {
			type_name: type_name.to_owned(),
		})
	}

	/// Create a fresh instance and decode it from the cursor one nesting level down.
	pub fn decode(&self, type_name: &str, cursor: &mut Cursor<'_>, ctx: &DecodeCtx<'_>) -> Result<Box<dyn StructData>> {
		let nested = ctx.nested()?;
		let mut item = self.create(type_name)?;
		item.deserialize(cursor, &nested)?;
		Ok(item)
	}
}

#[cfg(test)]
mod tests;
