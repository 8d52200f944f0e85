use std::fmt;

/// A username and plain-text password.
///
/// Only used for the login call. The [`Session`](crate::Session) that
/// comes out of it carries the obfuscated token instead, so the caller
/// can drop these right after logging in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("RobTop", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("RobTop"));
        assert!(!debug.contains("hunter2"));
    }
}
