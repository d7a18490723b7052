//! Thread-safe compute-once value holder.

// std
use std::sync::OnceLock;
// self
use crate::_prelude::*;

/// Holds a lazily supplied value that is computed at most once.
///
/// The first caller of [`get_or_supply`](Self::get_or_supply) runs the supplier while concurrent
/// callers block until the value is published; afterwards every call returns the stored value
/// without locking. Cloning a holder yields an empty one so cached state never outlives the
/// owner it was computed for.
pub struct Cached<T> {
	cell: OnceLock<T>,
}
impl<T> Cached<T> {
	/// Creates an empty holder.
	pub const fn new() -> Self {
		Self { cell: OnceLock::new() }
	}

	/// Returns the stored value, computing it with `supply` on first access.
	pub fn get_or_supply<F>(&self, supply: F) -> &T
	where
		F: FnOnce() -> T,
	{
		self.cell.get_or_init(supply)
	}

	/// Returns the stored value if it has been supplied.
	pub fn get(&self) -> Option<&T> {
		self.cell.get()
	}

	/// Returns `true` once a value has been supplied.
	pub fn is_supplied(&self) -> bool {
		self.cell.get().is_some()
	}
}
impl<T> Default for Cached<T> {
	fn default() -> Self {
		Self::new()
	}
}
impl<T> Clone for Cached<T> {
	fn clone(&self) -> Self {
		Self::new()
	}
}
impl<T> Debug for Cached<T>
where
	T: Debug,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Cached").field(&self.cell.get()).finish()
	}
}
