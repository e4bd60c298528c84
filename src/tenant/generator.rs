//! Random, URL-safe tenant identifiers.
//!
//! With the default 12-character lowercase alphanumeric alphabet there are 36^12 (about
//! 4.7×10^18) possible ids, so collisions are rare enough that callers only need a short retry
//! loop against the directory.

// crates.io
use rand::Rng;
// self
use crate::{_prelude::*, error::ConfigError, tenant::TenantId};

/// Default tenant id length.
pub const DEFAULT_TENANT_ID_SIZE: usize = 12;
/// Default tenant id alphabet.
pub const DEFAULT_TENANT_ID_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Shape of generated tenant ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantIdConfig {
	/// Number of characters per id.
	pub size: usize,
	/// Characters ids are drawn from.
	pub alphabet: String,
}
impl Default for TenantIdConfig {
	fn default() -> Self {
		Self { size: DEFAULT_TENANT_ID_SIZE, alphabet: DEFAULT_TENANT_ID_ALPHABET.into() }
	}
}

/// Generates and checks tenant ids for a validated [`TenantIdConfig`].
#[derive(Clone, Debug)]
pub struct TenantIdGenerator {
	size: usize,
	alphabet: Arc<[char]>,
}
impl TenantIdGenerator {
	/// Validates the configuration and builds a generator.
	pub fn new(config: TenantIdConfig) -> Result<Self, ConfigError> {
		let TenantIdConfig { size, alphabet } = config;

		if size == 0 || size > TenantId::MAX_LEN {
			return Err(ConfigError::InvalidTenantIdSize { size, max: TenantId::MAX_LEN });
		}

		let mut chars = Vec::with_capacity(alphabet.len());

		for c in alphabet.chars() {
			if c.is_whitespace() || chars.contains(&c) {
				return Err(ConfigError::InvalidTenantIdAlphabet { alphabet });
			}

			chars.push(c);
		}

		if chars.len() < 2 {
			return Err(ConfigError::InvalidTenantIdAlphabet { alphabet });
		}

		Ok(Self { size, alphabet: chars.into() })
	}

	/// Id length in characters.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Alphabet as a string.
	pub fn alphabet(&self) -> String {
		self.alphabet.iter().collect()
	}

	/// Draws a fresh id from the thread-local CSPRNG.
	pub fn generate(&self) -> TenantId {
		let mut rng = rand::rng();
		let id = (0..self.size)
			.map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
			.collect::<String>();

		crate::obs::debug!(tenant_id = %id, "generated tenant id");

		// Size and alphabet were validated against the identifier rules in `new`.
		TenantId(id)
	}

	/// Returns `true` when the candidate has the configured length and alphabet.
	pub fn is_valid(&self, candidate: &str) -> bool {
		candidate.chars().count() == self.size
			&& candidate.chars().all(|c| self.alphabet.contains(&c))
	}
}
impl Default for TenantIdGenerator {
	fn default() -> Self {
		Self {
			size: DEFAULT_TENANT_ID_SIZE,
			alphabet: DEFAULT_TENANT_ID_ALPHABET.chars().collect::<Vec<_>>().into(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn generated_ids_match_configuration() {
		let generator = TenantIdGenerator::default();

		for _ in 0..64 {
			let id = generator.generate();

			assert_eq!(id.len(), DEFAULT_TENANT_ID_SIZE);
			assert!(generator.is_valid(&id), "`{id}` should use the configured alphabet.");
		}
	}

	#[test]
	fn custom_alphabet_is_honored() {
		let generator = TenantIdGenerator::new(TenantIdConfig { size: 21, alphabet: "ab".into() })
			.expect("Two-letter alphabet should be accepted.");
		let id = generator.generate();

		assert!(id.chars().all(|c| c == 'a' || c == 'b'));
		assert_eq!(generator.alphabet(), "ab");
	}

	#[test]
	fn is_valid_rejects_wrong_length_and_foreign_chars() {
		let generator = TenantIdGenerator::default();

		assert!(generator.is_valid("a3b9c8d2e1f4"));
		assert!(!generator.is_valid("a3b9c8d2e1f"));
		assert!(!generator.is_valid("A3B9C8D2E1F4"));
		assert!(!generator.is_valid(""));
	}

	#[test]
	fn invalid_configs_are_rejected() {
		let cases = [
			TenantIdConfig { size: 0, ..Default::default() },
			TenantIdConfig { size: 22, ..Default::default() },
			TenantIdConfig { size: 12, alphabet: String::new() },
			TenantIdConfig { size: 12, alphabet: "aa".into() },
			TenantIdConfig { size: 12, alphabet: "a b".into() },
		];

		for config in cases {
			assert!(TenantIdGenerator::new(config.clone()).is_err(), "{config:?} should fail.");
		}
	}

	#[test]
	fn config_deserializes_with_defaults() {
		let config: TenantIdConfig =
			serde_json::from_str("{\"size\":16}").expect("Partial config should deserialize.");

		assert_eq!(config.size, 16);
		assert_eq!(config.alphabet, DEFAULT_TENANT_ID_ALPHABET);
	}
}
