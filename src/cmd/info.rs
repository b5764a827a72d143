use std::path::PathBuf;

use savprop::prop::{DecodeOptions, PropertyFile, Result, StructRegistry};

/// Print high-level file and record statistics.
pub fn run(path: PathBuf) -> Result<()> {
	let file = PropertyFile::open(&path)?;
	let registry = StructRegistry::builtin().with_dynamic_fallback();
	let decoded = file.decode(&registry, &DecodeOptions::default())?;
	let stats = decoded.stats();

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("bytes: {}", file.bytes().len());
	println!("property_count: {}", stats.property_count);
	println!("array_count: {}", stats.array_count);
	println!("array_elements: {}", stats.array_elements);
	println!("trailing: {}", decoded.trailing);

	let mut entries: Vec<_> = stats.tags.into_iter().collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(right.0)));

	println!("top_types:");
	for (tag, count) in entries.into_iter().take(12) {
		println!("  {tag}: {count}");
	}

	Ok(())
}
