use std::path::Path;

use serde::Deserialize;

use crate::RegexFlags;
use crate::ReplaceError;
use crate::ReplaceResult;

/// What a replacement returns when the pattern does not match the input at
/// all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchPolicy {
	/// Return the input unchanged.
	#[default]
	Original,
	/// Fail with [`ReplaceError::NoMatch`].
	Fail,
}

/// Options controlling how a pattern is compiled and how an unmatched input
/// is reported.
///
/// ```toml
/// flags = "im"
/// no_match = "fail"
/// size_limit = 1048576
/// ```
///
/// Every key is optional. Missing keys fall back to no flags, the
/// [`NoMatchPolicy::Original`] policy, and the engine's default size limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceOptions {
	/// Inline flag letters, see [`RegexFlags::from_letters`].
	#[serde(default)]
	pub flags: RegexFlags,
	#[serde(default)]
	pub no_match: NoMatchPolicy,
	/// Upper bound in bytes on the compiled program. `None` keeps the engine
	/// default.
	#[serde(default)]
	pub size_limit: Option<usize>,
}

impl ReplaceOptions {
	pub fn new(flags: RegexFlags, no_match: NoMatchPolicy) -> Self {
		Self {
			flags,
			no_match,
			size_limit: None,
		}
	}

	/// Parse options from a TOML document.
	pub fn from_toml_str(content: &str) -> ReplaceResult<Self> {
		toml::from_str(content).map_err(|e| ReplaceError::ConfigParse(e.to_string()))
	}

	/// Read and parse options from the TOML file at `path`.
	pub fn load(path: &Path) -> ReplaceResult<Self> {
		let content = std::fs::read_to_string(path)?;
		let options = Self::from_toml_str(&content)?;
		tracing::debug!(
			path = %path.display(),
			flags = %options.flags,
			no_match = ?options.no_match,
			"loaded replace options"
		);

		Ok(options)
	}
}
