//! Identifier-keyed lookup tables over closed enums.

// self
use crate::_prelude::*;

/// Enum whose variants are addressable by a stable string identifier.
pub trait Identifiable
where
	Self: 'static + Copy,
{
	/// Every variant of the enum, in declaration order.
	const ALL: &'static [Self];

	/// Stable identifier of the variant.
	fn identifier(self) -> &'static str;
}

/// Immutable table mapping identifiers to enum variants.
#[derive(Clone, Debug)]
pub struct Lookup<E>
where
	E: Identifiable,
{
	table: HashMap<&'static str, E>,
}
impl<E> Lookup<E>
where
	E: Identifiable,
{
	/// Builds the table from [`Identifiable::ALL`].
	pub fn build() -> Self {
		Self { table: E::ALL.iter().map(|variant| (variant.identifier(), *variant)).collect() }
	}

	/// Returns the variant registered for `key`, if any.
	pub fn lookup(&self, key: &str) -> Option<E> {
		self.table.get(key).copied()
	}

	/// Number of registered variants.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	/// Returns true if the enum declares no variants.
	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Clone, Copy, Debug, PartialEq, Eq)]
	enum Color {
		Red,
		Green,
	}
	impl Identifiable for Color {
		const ALL: &'static [Self] = &[Color::Red, Color::Green];

		fn identifier(self) -> &'static str {
			match self {
				Color::Red => "red",
				Color::Green => "green",
			}
		}
	}

	#[test]
	fn lookup_resolves_registered_identifiers() {
		let lookup = Lookup::<Color>::build();

		assert_eq!(lookup.len(), 2);
		assert_eq!(lookup.lookup("green"), Some(Color::Green));
		assert_eq!(lookup.lookup("blue"), None);
		assert_eq!(lookup.lookup("RED"), None, "Lookups are case-sensitive.");
	}
}
