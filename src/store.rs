//! Credential-store collaborator.

use std::io::Write;
use std::process::{Command, Stdio};

/// Persists a `(server, username, password)` triple to a platform-managed
/// secret store. The generation core only supplies the password string;
/// store-specific failures (locked keyring, duplicates) surface as
/// [`StoreError`] and are not interpreted here.
pub trait CredentialStore {
    fn save(&mut self, server: &str, username: &str, password: &str) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    /// The store backend could not be started at all.
    Unavailable(String),
    /// The backend ran and refused the entry.
    Rejected(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(e) => write!(f, "Credential store unavailable: {}", e),
            StoreError::Rejected(e) => write!(f, "Credential store rejected entry: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Secret-service store driven through the `secret-tool` CLI, with the
/// password fed over stdin so it never appears in the process list.
pub struct SecretToolStore;

impl CredentialStore for SecretToolStore {
    fn save(&mut self, server: &str, username: &str, password: &str) -> Result<(), StoreError> {
        let mut child = Command::new("secret-tool")
            .args([
                "store",
                "--label",
                &format!("{} @ {}", username, server),
                "server",
                server,
                "username",
                username,
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(password.as_bytes())
                .map_err(|e| StoreError::Rejected(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| StoreError::Rejected(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(StoreError::Rejected(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records saved triples instead of calling the platform store.
    #[derive(Default)]
    pub struct MemoryStore {
        pub saved: Vec<(String, String, String)>,
    }

    impl CredentialStore for MemoryStore {
        fn save(
            &mut self,
            server: &str,
            username: &str,
            password: &str,
        ) -> Result<(), StoreError> {
            self.saved
                .push((server.to_owned(), username.to_owned(), password.to_owned()));
            Ok(())
        }
    }
}
