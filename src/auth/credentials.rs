use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "dalu-cli";

/// Optional remember-me storage in the OS keychain.
///
/// Separate from the session file: the session is a plain-text token,
/// credentials only ever live in the keychain.
pub struct CredentialStore;

impl CredentialStore {
    /// Store a password for a username in the OS keychain
    pub fn store(username: &str, password: &str) -> Result<()> {
        let entry =
            Entry::new(SERVICE_NAME, username).context("Failed to create keyring entry")?;
        entry
            .set_password(password)
            .context("Failed to store password in keychain")?;
        Ok(())
    }

    /// Retrieve the remembered password for a username
    pub fn load(username: &str) -> Result<String> {
        let entry =
            Entry::new(SERVICE_NAME, username).context("Failed to create keyring entry")?;
        entry
            .get_password()
            .context("Failed to retrieve password from keychain")
    }

    /// Forget the remembered password for a username
    pub fn forget(username: &str) -> Result<()> {
        let entry =
            Entry::new(SERVICE_NAME, username).context("Failed to create keyring entry")?;
        entry
            .delete_credential()
            .context("Failed to delete credential from keychain")?;
        Ok(())
    }
}
