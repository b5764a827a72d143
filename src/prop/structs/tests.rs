use crate::prop::bytes::{Cursor, Writer};
use crate::prop::{BoxStruct, Color, DecodeCtx, DecodeOptions, FluidBox, InventoryItem, ObjectReference, PropError, StructData, StructRegistry, Value, Vector};

fn reencode(registry: &StructRegistry, type_name: &str, item: &dyn StructData) -> Box<dyn StructData> {
	let mut writer = Writer::new();
	item.serialize(&mut writer).expect("struct encodes");
	let bytes = writer.into_bytes();

	let options = DecodeOptions::default();
	let ctx = DecodeCtx::new(registry, &options);
	let mut cursor = Cursor::new(&bytes);
	let decoded = registry.decode(type_name, &mut cursor, &ctx).expect("struct decodes");
	assert_eq!(cursor.remaining(), 0, "{type_name} must consume exactly its bytes");
	decoded
}

#[test]
fn builtin_registry_lists_sorted_names() {
	let registry = StructRegistry::builtin();
	let names = registry.type_names();
	assert!(names.windows(2).all(|pair| pair[0] < pair[1]), "names must be sorted");
	for name in ["Vector", "Rotator", "Box", "Color", "InventoryItem", "LinearColor", "Guid"] {
		assert!(registry.contains(name), "{name} is built in");
	}
	assert!(!registry.has_dynamic_fallback());
}

#[test]
fn unknown_name_fails_without_fallback() {
	let err = StructRegistry::new().create("Vector").expect_err("empty registry knows nothing");
	assert!(matches!(err, PropError::UnknownStructType { ref type_name } if type_name == "Vector"));

	let item = StructRegistry::new().with_dynamic_fallback().create("Vector").expect("fallback creates dynamic struct");
	assert_eq!(item.type_name(), "Vector");
}

#[test]
fn rotator_shares_vector_layout_under_its_own_name() {
	let registry = StructRegistry::builtin();
	let item = registry.create("Rotator").expect("rotator is registered");
	assert_eq!(item.type_name(), "Rotator");
	assert!(item.downcast_ref::<Vector>().is_some());
}

#[test]
fn custom_registration_replaces_constructor() {
	let mut registry = StructRegistry::builtin();
	let previous = registry.register("FluidBox", || Box::new(Color::default()));
	assert!(previous.is_some());
	let item = registry.create("FluidBox").expect("replacement constructor runs");
	assert!(item.downcast_ref::<Color>().is_some());
}

#[test]
fn builtin_layouts_consume_their_own_bytes() {
	let registry = StructRegistry::builtin();

	let bounds = BoxStruct {
		min: [-1.0, -2.0, -3.0],
		max: [1.0, 2.0, 3.0],
		is_valid: 1,
	};
	let decoded = reencode(&registry, "Box", &bounds);
	assert_eq!(decoded.downcast_ref::<BoxStruct>(), Some(&bounds));

	let color = Color { b: 1, g: 2, r: 3, a: 255 };
	let decoded = reencode(&registry, "Color", &color);
	assert_eq!(decoded.to_value().field("r"), Some(&Value::Byte(3)));

	let item = InventoryItem {
		unknown: 0,
		item_name: "/Game/FactoryGame/Resource/Parts/IronPlate/Desc_IronPlate.Desc_IronPlate_C".to_owned(),
		item_state: ObjectReference::default(),
	};
	let decoded = reencode(&registry, "InventoryItem", &item);
	assert_eq!(decoded.downcast_ref::<InventoryItem>(), Some(&item));
}

#[test]
fn boxed_structs_compare_by_type_and_value() {
	let left: Box<dyn StructData> = Box::new(FluidBox { value: 2.0 });
	let same: Box<dyn StructData> = left.clone();
	let other: Box<dyn StructData> = Box::new(Vector::named("Vector"));

	assert!(*left == *same);
	assert!(*left != *other);
}
