//! Administrator credential

/// Credential read once per admin login attempt and never cached.
///
/// The username is also the key of the stored document. The password is
/// kept in plaintext and compared byte for byte.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

impl AdminCredential {
    /// Exact, case-sensitive comparison against the supplied password
    pub fn matches(&self, password: &str) -> bool {
        self.password == password
    }
}

// Never print the password
impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
