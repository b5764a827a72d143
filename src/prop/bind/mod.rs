use crate::prop::{ArrayElement, ArrayProperty, ElementKind, ObjectReference, PropError, Property, Result, StructData};

/// Mutable view of one named field on a host object.
pub enum FieldSlot<'a> {
	/// Ordered collection of raw bytes.
	Bytes(&'a mut Vec<u8>),
	/// Ordered collection of signed integers.
	Ints(&'a mut Vec<i32>),
	/// Ordered collection of object references; accepts object and interface elements.
	ObjectRefs(&'a mut Vec<ObjectReference>),
	/// Ordered collection of structs.
	Structs {
		/// Required struct type name, or `None` to accept any struct.
		type_name: Option<&'static str>,
		/// Collection to append to.
		items: &'a mut Vec<Box<dyn StructData>>,
	},
	/// Field that is not an ordered collection.
	Single {
		/// Declared field type, for diagnostics.
		declared: &'static str,
	},
}

/// Element capability of a field, independent of the borrowed storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// `Vec<u8>`.
	Bytes,
	/// `Vec<i32>`.
	Ints,
	/// `Vec<ObjectReference>`.
	ObjectRefs,
	/// `Vec<Box<dyn StructData>>`, optionally restricted to one type name.
	Structs(Option<&'static str>),
	/// Not a collection.
	Single(&'static str),
}

impl FieldKind {
	/// Whether `element` can be appended as-is.
	pub fn accepts(self, element: &ArrayElement) -> bool {
		match (self, element) {
			(Self::Bytes, ArrayElement::Byte(_)) => true,
			(Self::Ints, ArrayElement::Int(_)) => true,
			(Self::ObjectRefs, ArrayElement::Object(_) | ArrayElement::Interface(_)) => true,
			(Self::Structs(type_name), ArrayElement::Struct(item)) => type_name.is_none_or(|name| item.type_name() == name),
			_ => false,
		}
	}

	/// Human-readable element type.
	pub fn element_label(self) -> &'static str {
		match self {
			Self::Bytes => "u8",
			Self::Ints => "i32",
			Self::ObjectRefs => "ObjectReference",
			Self::Structs(Some(name)) => name,
			Self::Structs(None) => "struct",
			Self::Single(declared) => declared,
		}
	}
}

impl FieldSlot<'_> {
	/// Capability of this slot.
	pub fn kind(&self) -> FieldKind {
		match self {
			Self::Bytes(_) => FieldKind::Bytes,
			Self::Ints(_) => FieldKind::Ints,
			Self::ObjectRefs(_) => FieldKind::ObjectRefs,
			Self::Structs { type_name, .. } => FieldKind::Structs(*type_name),
			Self::Single { declared } => FieldKind::Single(*declared),
		}
	}

	fn append(self, elements: Vec<ArrayElement>) -> usize {
		let count = elements.len();
		match self {
			Self::Bytes(items) => items.extend(elements.into_iter().filter_map(|element| match element {
				ArrayElement::Byte(value) => Some(value),
				_ => None,
			})),
			Self::Ints(items) => items.extend(elements.into_iter().filter_map(|element| match element {
				ArrayElement::Int(value) => Some(value),
				_ => None,
			})),
			Self::ObjectRefs(items) => items.extend(elements.into_iter().filter_map(|element| match element {
				ArrayElement::Object(value) | ArrayElement::Interface(value) => Some(value),
				_ => None,
			})),
			Self::Structs { items, .. } => items.extend(elements.into_iter().filter_map(|element| match element {
				ArrayElement::Struct(value) => Some(value),
				_ => None,
			})),
			Self::Single { .. } => return 0,
		}
		count
	}
}

/// Host object that array properties can be bound into.
pub trait PropertyHost {
	/// Look up a field by property name.
	fn field(&mut self, name: &str) -> Option<FieldSlot<'_>>;

	/// Keep a property that could not be bound, for later re-emission.
	fn add_unmapped(&mut self, property: Property);
}

/// Outcome of binding an array property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
	/// Every element was appended to the host field.
	Bound {
		/// Number of appended elements.
		appended: usize,
	},
	/// The whole property went to the host's unmapped bucket.
	Unmapped(UnmappedReason),
}

/// Why an array property was set aside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnmappedReason {
	/// The host has no field with the property's name.
	MissingField,
	/// The field is not an ordered collection.
	NotACollection {
		/// Declared field type.
		declared: &'static str,
	},
	/// An element cannot be used as the field's element type.
	IncompatibleElement {
		/// Position of the first offending element.
		position: usize,
		/// Field element type.
		expected: &'static str,
	},
	/// The array's element kind has no binding rule.
	UnbindableKind(ElementKind),
}

impl ArrayProperty {
	/// Append every element to the host field named like this property, or hand the whole property
	/// to the host's unmapped bucket. Never applies a subset of elements.
	pub fn assign_to<H: PropertyHost + ?Sized>(self, host: &mut H) -> Result<Binding> {
		if self.kind == ElementKind::Enum {
			return Err(PropError::EnumBindingUnsupported { name: self.name });
		}

		let reason = match host.field(&self.name) {
			None => UnmappedReason::MissingField,
			Some(slot) => match check(slot.kind(), &self) {
				Ok(()) => {
					let appended = slot.append(self.elements);
					return Ok(Binding::Bound { appended });
				}
				Err(reason) => reason,
			},
		};

		match &reason {
			UnmappedReason::MissingField => log::warn!("no field for array {:?}, storing as unmapped", self.name),
			UnmappedReason::UnbindableKind(kind) => log::warn!("array {:?} of {} has no binding rule, storing as unmapped", self.name, kind.as_tag()),
			UnmappedReason::NotACollection { declared } => log::error!("field {:?} is {declared}, not a collection; storing array as unmapped", self.name),
			UnmappedReason::IncompatibleElement { position, expected } => log::error!(
				"array {:?} element {position} ({}) is not assignable to {expected}; storing as unmapped",
				self.name,
				self.kind.as_tag()
			),
		}
		host.add_unmapped(Property::Array(self));
		Ok(Binding::Unmapped(reason))
	}
}

fn check(kind: FieldKind, property: &ArrayProperty) -> std::result::Result<(), UnmappedReason> {
	if let FieldKind::Single(declared) = kind {
		return Err(UnmappedReason::NotACollection { declared });
	}
	if !matches!(
		property.kind,
		ElementKind::Byte | ElementKind::Int | ElementKind::Object | ElementKind::Interface | ElementKind::Struct
	) {
		return Err(UnmappedReason::UnbindableKind(property.kind));
	}
	match property.elements.iter().position(|element| !kind.accepts(element)) {
		Some(position) => Err(UnmappedReason::IncompatibleElement {
			position,
			expected: kind.element_label(),
		}),
		None => Ok(()),
	}
}
