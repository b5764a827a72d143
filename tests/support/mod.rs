#![allow(dead_code)]

use std::path::PathBuf;

use savprop::prop::NONE_NAME;
use savprop::prop::bytes::Writer;

/// Hand-assembled property list matching the on-disk layout.
pub fn sample_list() -> Vec<u8> {
	let mut out = Writer::new();

	record(&mut out, "mHealth", "IntProperty", 0, |body| {
		body.write_null_byte();
		body.write_i32(250);
	});

	record(&mut out, "mCounts", "ArrayProperty", 0, |body| {
		body.write_fstring("IntProperty").expect("tag writes");
		body.write_null_byte();
		body.write_i32(3);
		for value in [10, 20, 30] {
			body.write_i32(value);
		}
	});

	record(&mut out, "mConnections", "ArrayProperty", 0, |body| {
		body.write_fstring("ObjectProperty").expect("tag writes");
		body.write_null_byte();
		body.write_i32(1);
		body.write_fstring("Persistent_Level").expect("level writes");
		body.write_fstring("Persistent_Level:PersistentLevel.Build_ConveyorBeltMk1_C_7").expect("path writes");
	});

	record(&mut out, "mPositions", "ArrayProperty", 0, |body| {
		body.write_fstring("StructProperty").expect("tag writes");
		body.write_null_byte();
		body.write_i32(2);
		body.write_fstring("mPositions").expect("header name writes");
		body.write_fstring("StructProperty").expect("header tag writes");
		body.write_i32(24);
		body.write_i32(0);
		body.write_fstring("Vector").expect("struct type writes");
		body.write_bytes(&[0; 17]);
		for value in [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0] {
			body.write_f32(value);
		}
	});

	out.write_fstring(NONE_NAME).expect("terminator writes");
	out.into_bytes()
}

/// Append one record; the declared size excludes the per-type overhead at the start of the body.
fn record(out: &mut Writer, name: &str, type_tag: &str, index: i32, fill: impl FnOnce(&mut Writer)) {
	let mut body = Writer::new();
	fill(&mut body);
	let overhead = overhead_for(type_tag, body.as_bytes());

	out.write_fstring(name).expect("name writes");
	out.write_fstring(type_tag).expect("type writes");
	out.write_i32(i32::try_from(body.len() - overhead).expect("payload fits"));
	out.write_i32(index);
	out.write_bytes(body.as_bytes());
}

fn overhead_for(type_tag: &str, body: &[u8]) -> usize {
	match type_tag {
		"ArrayProperty" => {
			let tag_len = i32::from_le_bytes(body[..4].try_into().expect("length prefix")) as usize;
			4 + tag_len + 1
		}
		_ => 1,
	}
}

/// Write `bytes` to a per-test file under the system temp directory.
pub fn temp_file(label: &str, bytes: &[u8]) -> PathBuf {
	let path = std::env::temp_dir().join(format!("savprop-{}-{label}.sav", std::process::id()));
	std::fs::write(&path, bytes).expect("fixture writes");
	path
}
