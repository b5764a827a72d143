use savprop::prop::{Result, StructRegistry};

#[derive(serde::Serialize)]
struct StructsJson<'a> {
	dynamic_fallback: bool,
	types: Vec<&'a str>,
}

/// List built-in struct type names.
pub fn run(json: bool) -> Result<()> {
	let registry = StructRegistry::builtin();
	if json {
		crate::cmd::print::emit_json(&StructsJson {
			dynamic_fallback: registry.has_dynamic_fallback(),
			types: registry.type_names(),
		});
		return Ok(());
	}

	println!("struct_types: {}", registry.type_names().len());
	for name in registry.type_names() {
		println!("  {name}");
	}
	Ok(())
}
