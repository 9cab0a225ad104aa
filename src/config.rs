//! Credential configuration.

use crate::error::{Error, Result};

/// Aliyun access-key pair used to sign every request.
///
/// Constructed explicitly and handed to the client; nothing in this crate
/// reads credentials from ambient global state.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Access key id.
    pub access_key_id: String,

    /// Access key secret.
    pub access_key_secret: String,
}

impl Credentials {
    /// Creates a credential pair from raw key material.
    #[must_use]
    pub fn new(access_key_id: String, access_key_secret: String) -> Self {
        Self {
            access_key_id,
            access_key_secret,
        }
    }

    /// Loads the credential pair from environment variables.
    ///
    /// Required environment variables:
    /// - `ALIYUN_ACCESS_KEY_ID`: access key id
    /// - `ALIYUN_ACCESS_KEY_SECRET`: access key secret
    ///
    /// # Errors
    ///
    /// Returns an error if a required environment variable is missing.
    pub fn from_env() -> Result<Self> {
        // Load .env file
        dotenvy::dotenv().ok();

        let access_key_id = std::env::var("ALIYUN_ACCESS_KEY_ID")
            .map_err(|_| Error::MissingEnv("ALIYUN_ACCESS_KEY_ID"))?;

        let access_key_secret = std::env::var("ALIYUN_ACCESS_KEY_SECRET")
            .map_err(|_| Error::MissingEnv("ALIYUN_ACCESS_KEY_SECRET"))?;

        Ok(Self {
            access_key_id,
            access_key_secret,
        })
    }
}
