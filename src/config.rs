use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

const KEYRING_SERVICE: &str = "warbler-client";

#[derive(Serialize, Deserialize, Default)]
pub struct Settings {
    pub server_url: String,
    pub username: String,
    pub theme: String,
    /// Whether the password is kept in the OS keyring
    #[serde(default)]
    pub remember_password: bool,
    /// Log in automatically with the stored credentials at startup
    #[serde(default)]
    pub auto_login: bool,
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "warbler", "warbler-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

/// Load the stored password for a username from the system keyring.
pub fn load_password(username: &str) -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, username).ok()?;
    entry.get_password().ok()
}

/// Store a password in the system keyring.
pub fn save_password(username: &str, password: &str) -> Result<(), String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, username)
        .map_err(|e| format!("Keyring unavailable: {}", e))?;
    entry
        .set_password(password)
        .map_err(|e| format!("Failed to store password: {}", e))
}

/// Remove a stored password from the system keyring.
pub fn delete_password(username: &str) {
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, username) {
        let _ = entry.delete_password();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = Settings {
            server_url: "http://localhost:5001".into(),
            username: "demo".into(),
            theme: "dark".into(),
            remember_password: true,
            auto_login: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server_url, settings.server_url);
        assert_eq!(back.username, settings.username);
        assert!(back.remember_password);
        assert!(!back.auto_login);
    }

    #[test]
    fn test_settings_missing_fields_default() {
        // Older settings files predate remember_password/auto_login
        let back: Settings = serde_json::from_str(
            r#"{"server_url": "http://x", "username": "u", "theme": "light"}"#,
        )
        .unwrap();
        assert!(!back.remember_password);
        assert!(!back.auto_login);
    }
}
