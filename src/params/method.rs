//! HTTP methods that appear as the first element of a signature base string.

// std
use std::sync::OnceLock;
// self
use crate::{
	_prelude::*,
	util::{Identifiable, Lookup},
};

/// HTTP request method of a signed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
	/// `PATCH`
	Patch,
	/// `HEAD`
	Head,
}
impl HttpMethod {
	/// Returns the uppercase method token used in the signature base string.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Delete => "DELETE",
			HttpMethod::Patch => "PATCH",
			HttpMethod::Head => "HEAD",
		}
	}
}
impl Identifiable for HttpMethod {
	const ALL: &'static [Self] = &[
		HttpMethod::Get,
		HttpMethod::Post,
		HttpMethod::Put,
		HttpMethod::Delete,
		HttpMethod::Patch,
		HttpMethod::Head,
	];

	fn identifier(self) -> &'static str {
		self.as_str()
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for HttpMethod {
	type Err = UnknownHttpMethod;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		static LOOKUP: OnceLock<Lookup<HttpMethod>> = OnceLock::new();

		LOOKUP
			.get_or_init(Lookup::build)
			.lookup(&s.to_ascii_uppercase())
			.ok_or_else(|| UnknownHttpMethod { method: s.to_owned() })
	}
}

/// Error returned when parsing an unsupported HTTP method name.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("HTTP method `{method}` is not supported.")]
pub struct UnknownHttpMethod {
	/// The rejected method name.
	pub method: String,
}
