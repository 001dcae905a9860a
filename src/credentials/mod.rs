//! Credential handling for the admin client.

use rand::distributions::Alphanumeric;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

/// Default length for generated secret keys.
pub const DEFAULT_SECRET_KEY_LEN: usize = 40;

/// Long-term gateway credentials: an access key and a secret key.
///
/// The secret key is kept behind [`SecretString`] so it is zeroized on
/// drop and never appears in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    access_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials from an access key and secret key pair.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::new(secret_key.into()),
        }
    }

    /// The access key.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// The secret key.
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// True when both keys are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"******")
            .finish()
    }
}

/// Generate a random alphanumeric secret key of the given length.
///
/// Suitable for seeding `secret-key` parameters on user or key creation
/// when the gateway is not asked to generate one.
pub fn generate_secret_key(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
