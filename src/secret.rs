//! Zeroizing password wrapper.
//!
//! Passwords live behind [`secrecy::SecretString`] so they are wiped from
//! memory on drop and never appear in debug output. They are supplied per
//! operation and never persisted.

use secrecy::{ExposeSecret, SecretString};

pub struct Password {
    inner: SecretString,
}

impl Password {
    pub fn new(password: &str) -> Self {
        Self { inner: SecretString::from(password.to_owned()) }
    }

    pub fn from_string(password: String) -> Self {
        Self { inner: SecretString::from(password) }
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }
}

impl From<SecretString> for Password {
    fn from(secret: SecretString) -> Self {
        Self { inner: secret }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([redacted])")
    }
}
