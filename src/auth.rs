/// Pluggable credential check behind the login surface.
///
/// The static implementation below reproduces the default credential
/// pair for compatibility; it is a stub provider, not a security
/// boundary. A deployment that needs real authentication supplies its
/// own implementation.
pub trait CredentialProvider {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed username/password comparison.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub username: String,
    pub password: String,
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "biblioteca123".to_string(),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
