#![allow(missing_docs)]

mod support;

use savprop::prop::{ArrayElement, Compression, DecodeOptions, ElementKind, ObjectReference, PropError, Property, PropertyFile, StructRegistry, Vector};

#[test]
fn hand_built_list_decodes_through_public_api() {
	let file = PropertyFile::from_raw(support::sample_list()).expect("raw bytes load");
	assert_eq!(file.compression, Compression::None);

	let decoded = file.decode(&StructRegistry::builtin(), &DecodeOptions::strict()).expect("list decodes");
	assert_eq!(decoded.trailing, 0);
	assert_eq!(decoded.properties.len(), 4);

	let Property::Array(counts) = &decoded.properties[1] else {
		panic!("expected array property");
	};
	assert_eq!(counts.kind, ElementKind::Int);
	assert_eq!(counts.elements, vec![ArrayElement::Int(10), ArrayElement::Int(20), ArrayElement::Int(30)]);

	let Property::Array(connections) = &decoded.properties[2] else {
		panic!("expected array property");
	};
	assert_eq!(
		connections.elements,
		vec![ArrayElement::Object(ObjectReference::new(
			"Persistent_Level",
			"Persistent_Level:PersistentLevel.Build_ConveyorBeltMk1_C_7"
		))]
	);

	let Property::Array(positions) = &decoded.properties[3] else {
		panic!("expected array property");
	};
	let header = positions.struct_header.as_ref().expect("struct arrays keep their header");
	assert_eq!(header.struct_type, "Vector");
	let ArrayElement::Struct(second) = &positions.elements[1] else {
		panic!("expected struct element");
	};
	let second = second.downcast_ref::<Vector>().expect("vector layout");
	assert_eq!((second.x, second.y, second.z), (4.0, 5.0, 6.0));
}

#[test]
fn zstd_compressed_list_decodes_the_same() {
	let raw = support::sample_list();
	let packed = zstd::encode_all(raw.as_slice(), 3).expect("zstd encodes");

	let file = PropertyFile::from_raw(packed).expect("compressed bytes load");
	assert_eq!(file.compression, Compression::Zstd);
	assert_eq!(file.bytes(), raw.as_slice());

	let stats = file
		.decode(&StructRegistry::builtin(), &DecodeOptions::default())
		.expect("list decodes")
		.stats();
	assert_eq!(stats.property_count, 4);
	assert_eq!(stats.array_count, 3);
	assert_eq!(stats.array_elements, 6);
	assert_eq!(stats.tags.get("ArrayProperty"), Some(&3));
}

#[test]
fn trailing_bytes_are_reported() {
	let mut raw = support::sample_list();
	raw.extend_from_slice(&[0xAA, 0xBB]);
	let decoded = PropertyFile::from_raw(raw)
		.expect("raw bytes load")
		.decode(&StructRegistry::builtin(), &DecodeOptions::default())
		.expect("list decodes");
	assert_eq!(decoded.trailing, 2);
}

#[test]
fn truncated_list_fails_with_eof() {
	let mut raw = support::sample_list();
	raw.truncate(raw.len() - 12);
	let err = PropertyFile::from_raw(raw)
		.expect("raw bytes load")
		.decode(&StructRegistry::builtin(), &DecodeOptions::default())
		.expect_err("truncated list must fail");
	assert!(matches!(err, PropError::UnexpectedEof { .. }), "unexpected error: {err}");
}

#[test]
fn array_limit_applies_to_every_array() {
	let options = DecodeOptions {
		max_array_elems: 2,
		..DecodeOptions::default()
	};
	let err = PropertyFile::from_raw(support::sample_list())
		.expect("raw bytes load")
		.decode(&StructRegistry::builtin(), &options)
		.expect_err("three ints exceed the limit");
	assert!(matches!(err, PropError::DecodeArrayTooLarge { count: 3, max: 2 }));
}
