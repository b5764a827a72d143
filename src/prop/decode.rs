use crate::prop::{PropError, Result, StructRegistry};

/// Runtime limits and behavior switches for property decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth of struct and property-list decoding.
	pub max_depth: u32,
	/// Maximum allowed array element count.
	pub max_array_elems: usize,
	/// Error when consumed bytes disagree with declared record or struct sizes.
	pub strict_layout: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 16,
			max_array_elems: 1 << 20,
			strict_layout: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects any size disagreement.
	pub fn strict() -> Self {
		Self {
			strict_layout: true,
			..Self::default()
		}
	}

	/// Validate a signed element count read at `at`.
	pub(crate) fn check_count(&self, count: i32, at: usize) -> Result<usize> {
		let count = usize::try_from(count).map_err(|_| PropError::NegativeArrayCount { count, at })?;
		if count > self.max_array_elems {
			return Err(PropError::DecodeArrayTooLarge {
				count,
				max: self.max_array_elems,
			});
		}
		Ok(count)
	}
}

/// Shared, read-only state threaded through one decode.
///
/// The registry is borrowed, so several records may be decoded concurrently against one registry
/// as long as each has its own cursor.
#[derive(Debug, Clone, Copy)]
pub struct DecodeCtx<'a> {
	/// Struct-type registry used for struct payloads.
	pub registry: &'a StructRegistry,
	/// Limits and switches.
	pub options: &'a DecodeOptions,
	depth: u32,
}

impl<'a> DecodeCtx<'a> {
	/// Create a top-level context.
	pub fn new(registry: &'a StructRegistry, options: &'a DecodeOptions) -> Self {
		Self { registry, options, depth: 0 }
	}

	/// Current nesting depth.
	pub fn depth(&self) -> u32 {
		self.depth
	}

	/// Context for one level deeper, failing once `max_depth` is reached.
	pub fn nested(&self) -> Result<Self> {
		let depth = self.depth + 1;
		if depth >= self.options.max_depth {
			return Err(PropError::DecodeDepthExceeded {
				max_depth: self.options.max_depth,
			});
		}
		Ok(Self { depth, ..*self })
	}
}
