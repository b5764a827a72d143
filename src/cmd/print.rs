use savprop::prop::Value;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single struct.
	pub max_fields_per_struct: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/structs.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_struct: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Print one decoded value tree.
pub fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => println!("{pad}null"),
		Value::Bool(v) => println!("{pad}{v}"),
		Value::Byte(v) => println!("{pad}{v}"),
		Value::I64(v) => println!("{pad}{v}"),
		Value::F32(v) => println!("{pad}{v}"),
		Value::Bytes(v) => println!("{pad}bytes[{}]", v.len()),
		Value::String(v) => println!("{pad}\"{}\"", truncate(v, options.max_string_len)),
		Value::Ref { level_name, path_name } => println!("{pad}{}", format_ref(level_name, path_name)),
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				println!("{pad}[... {} items]", items.len());
				return;
			}
			println!("{pad}[");
			for item in items.iter().take(options.max_array_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				println!("{pad}  ... {} more", items.len() - options.max_array_items);
			}
			println!("{pad}]");
		}
		Value::Struct(item) => {
			if depth >= options.max_print_depth {
				println!("{pad}{} {{ ... }}", item.type_name);
				return;
			}
			println!("{pad}{} {{", item.type_name);
			for field in item.fields.iter().take(options.max_fields_per_struct) {
				print!("{pad}  {} = ", field.name);
				if matches!(field.value, Value::Struct(_) | Value::Array(_)) {
					println!();
					print_value(&field.value, indent + 4, depth + 1, options);
				} else {
					print_value(&field.value, 0, depth + 1, options);
				}
			}
			if item.fields.len() > options.max_fields_per_struct {
				println!("{pad}  ... {} more fields", item.fields.len() - options.max_fields_per_struct);
			}
			println!("{pad}}}");
		}
	}
}

/// Render an object reference as `level:path`, or `null` when both parts are empty.
pub(crate) fn format_ref(level_name: &str, path_name: &str) -> String {
	if level_name.is_empty() && path_name.is_empty() {
		return "null".to_owned();
	}
	format!("{level_name}:{path_name}")
}

/// Convert a value tree to JSON.
pub(crate) fn value_to_json_value(value: &Value) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::Byte(v) => serde_json::json!(v),
		Value::I64(v) => serde_json::json!(v),
		Value::F32(v) => serde_json::json!(v),
		Value::Bytes(v) => JsonValue::Array(v.iter().map(|item| serde_json::json!(item)).collect()),
		Value::String(v) => serde_json::json!(v.as_ref()),
		Value::Ref { level_name, path_name } => serde_json::json!({
			"level": level_name.as_ref(),
			"path": path_name.as_ref(),
		}),
		Value::Array(items) => JsonValue::Array(items.iter().map(value_to_json_value).collect()),
		Value::Struct(item) => {
			let fields: Map<String, JsonValue> = item
				.fields
				.iter()
				.map(|field| (field.name.to_string(), value_to_json_value(&field.value)))
				.collect();

			let mut out = Map::new();
			out.insert("type".to_owned(), serde_json::json!(item.type_name.as_ref()));
			out.insert("fields".to_owned(), JsonValue::Object(fields));
			JsonValue::Object(out)
		}
	}
}

/// Pretty-print a serializable payload on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to render json: {err}"),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
