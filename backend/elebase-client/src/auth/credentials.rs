use common::RedactedSecret;

/// Public/private key pair for HMAC signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: String,
    private: RedactedSecret,
}

impl KeyPair {
    pub fn new(public: impl Into<String>, private: impl Into<String>) -> Self {
        Self {
            public: public.into(),
            private: RedactedSecret::new("private key", private),
        }
    }

    pub fn public(&self) -> &str {
        &self.public
    }

    pub fn private(&self) -> &RedactedSecret {
        &self.private
    }

    pub fn is_complete(&self) -> bool {
        !self.public.is_empty() && !self.private.is_empty()
    }
}

/// The single credential mode a client signs with.
///
/// A client holds exactly one of these, so "no credentials" and "both"
/// cannot be represented past configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Pre-issued API token. Basic auth on the content API, `token` field on geo.
    Token(RedactedSecret),
    /// HMAC key pair. Content API only.
    KeyPair(KeyPair),
}

impl Credentials {
    pub fn token(token: impl Into<String>) -> Self {
        Credentials::Token(RedactedSecret::new("token", token))
    }

    pub fn key_pair(public: impl Into<String>, private: impl Into<String>) -> Self {
        Credentials::KeyPair(KeyPair::new(public, private))
    }

    /// The plain token, when this is token mode.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Credentials::Token(token) => Some(token.expose()),
            Credentials::KeyPair(_) => None,
        }
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            Credentials::Token(_) => "basic",
            Credentials::KeyPair(_) => "hmac",
        }
    }
}
