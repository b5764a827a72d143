use crate::prop::bytes::{Cursor, Writer};
use crate::prop::{Result, Value};

/// Opaque handle naming a game object by level and path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectReference {
	/// Owning level name, often empty for persistent objects.
	pub level_name: String,
	/// Full object path.
	pub path_name: String,
}

impl ObjectReference {
	/// Build a reference from its two parts.
	pub fn new(level_name: impl Into<String>, path_name: impl Into<String>) -> Self {
		Self {
			level_name: level_name.into(),
			path_name: path_name.into(),
		}
	}

	/// Read level name then path name.
	pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let level_name = cursor.read_fstring()?;
		let path_name = cursor.read_fstring()?;
		Ok(Self { level_name, path_name })
	}

	/// Write level name then path name.
	pub fn write(&self, writer: &mut Writer) -> Result<()> {
		writer.write_fstring(&self.level_name)?;
		writer.write_fstring(&self.path_name)
	}

	/// Whether both parts are empty.
	pub fn is_null(&self) -> bool {
		self.level_name.is_empty() && self.path_name.is_empty()
	}

	pub(crate) fn to_value(&self) -> Value {
		Value::Ref {
			level_name: self.level_name.clone().into_boxed_str(),
			path_name: self.path_name.clone().into_boxed_str(),
		}
	}
}
