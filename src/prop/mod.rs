mod array;
mod bind;
/// Little-endian cursor, writer, and string primitives.
pub mod bytes;
mod compression;
mod decode;
mod element;
mod error;
mod file;
mod object_ref;
mod property;
mod scalar;
mod structs;
mod text;
mod value;

/// Array property decoder and struct-array header.
pub use array::{ArrayProperty, StructArrayHeader};
/// Assignment of decoded arrays into host objects.
pub use bind::{Binding, FieldKind, FieldSlot, PropertyHost, UnmappedReason};
/// Compression detection result.
pub use compression::Compression;
/// Decode limits and shared decode state.
pub use decode::{DecodeCtx, DecodeOptions};
/// Array element variants and kinds.
pub use element::{ArrayElement, ElementKind, EnumValue};
/// Error and result aliases.
pub use error::{PropError, Result};
/// File abstraction and record statistics.
pub use file::{DecodedList, PropertyFile, PropertyStats};
/// Object reference handle.
pub use object_ref::ObjectReference;
/// Property records and list framing.
pub use property::{NONE_NAME, Property, StructProperty, properties_to_value, read_property, read_property_list, write_property, write_property_list};
/// Boolean and other fixed-layout scalar properties.
pub use scalar::{BoolProperty, ByteValue, ScalarProperty, ScalarValue};
/// Struct registry, struct trait, and built-in layouts.
pub use structs::{
	BoxStruct, Color, DynamicStruct, FluidBox, Guid, IntPoint, InventoryItem, LinearColor, Quat, StructCtor, StructData, StructDataExt, StructRegistry, Vector,
	Vector2D,
};
/// Rich-text entries.
pub use text::{TextEntry, TextHistory};
/// Neutral value tree.
pub use value::{FieldValue, StructValue, Value};
