use std::path::PathBuf;

use savprop::prop::{DecodeOptions, PropertyFile, Result, StructRegistry, properties_to_value};

use crate::cmd::print::{PrintOptions, emit_json, print_value, value_to_json_value};

/// Arguments for the `decode` command.
#[derive(clap::Args)]
pub struct Args {
	/// Property-list file, raw or zstd-compressed.
	pub path: PathBuf,
	/// Emit JSON instead of an indented tree.
	#[arg(long)]
	pub json: bool,
	/// Fail when a record's declared size disagrees with the bytes consumed.
	#[arg(long)]
	pub strict_layout: bool,
	/// Maximum nesting depth of structs.
	#[arg(long)]
	pub max_depth: Option<u32>,
	/// Maximum element count of a single array.
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	/// Reject struct types that are not built in instead of decoding them as nested lists.
	#[arg(long)]
	pub no_dynamic: bool,
}

impl Args {
	fn decode_options(&self) -> DecodeOptions {
		let defaults = DecodeOptions::default();
		DecodeOptions {
			max_depth: self.max_depth.unwrap_or(defaults.max_depth),
			max_array_elems: self.max_array.unwrap_or(defaults.max_array_elems),
			strict_layout: self.strict_layout,
		}
	}

	fn registry(&self) -> StructRegistry {
		let registry = StructRegistry::builtin();
		if self.no_dynamic { registry } else { registry.with_dynamic_fallback() }
	}
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	compression: &'static str,
	trailing: usize,
	properties: Vec<PropertyJson>,
}

#[derive(serde::Serialize)]
struct PropertyJson {
	name: String,
	index: i32,
	#[serde(rename = "type")]
	type_tag: &'static str,
	value: serde_json::Value,
}

/// Decode the top-level property list and print it.
pub fn run(args: Args) -> Result<()> {
	let file = PropertyFile::open(&args.path)?;
	let decoded = file.decode(&args.registry(), &args.decode_options())?;

	if args.json {
		let payload = DecodeJson {
			path: args.path.display().to_string(),
			compression: file.compression.as_str(),
			trailing: decoded.trailing,
			properties: decoded
				.properties
				.iter()
				.map(|property| PropertyJson {
					name: property.name().to_owned(),
					index: property.index(),
					type_tag: property.type_tag(),
					value: value_to_json_value(&property.to_value()),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", args.path.display());
	println!("compression: {}", file.compression.as_str());
	println!("properties: {}", decoded.properties.len());
	println!("decoded:");
	print_value(&properties_to_value("Properties", &decoded.properties), 0, 0, PrintOptions::default());
	Ok(())
}
