//! Input validation for composer fields and connection settings

/// Maximum warble length, matching the server-side model
pub const MAX_WARBLE_LENGTH: usize = 140;

/// Validates warble text before submission
pub fn validate_warble_text(text: &str) -> Result<(), String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Warble text cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_WARBLE_LENGTH {
        return Err(format!(
            "Warble too long (max {} characters)",
            MAX_WARBLE_LENGTH
        ));
    }

    if trimmed.contains(|c: char| c.is_control() && c != '\n') {
        return Err("Warble contains invalid characters".to_string());
    }

    Ok(())
}

/// Validates the optional location field
pub fn validate_location(location: &str) -> Result<(), String> {
    if location.chars().count() > 80 {
        return Err("Location too long (max 80 characters)".to_string());
    }
    if location.contains(|c: char| c.is_control()) {
        return Err("Location contains invalid characters".to_string());
    }
    Ok(())
}

/// Validates a server base URL (http/https with a non-empty host)
pub fn validate_server_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Server URL cannot be empty".to_string());
    }

    let rest = if let Some(r) = url.strip_prefix("https://") {
        r
    } else if let Some(r) = url.strip_prefix("http://") {
        r
    } else {
        return Err("Server URL must start with http:// or https://".to_string());
    };

    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() {
        return Err("Server URL is missing a host".to_string());
    }

    if let Some((_, port)) = host.rsplit_once(':') {
        let port_num = port
            .parse::<u16>()
            .map_err(|_| format!("Invalid port number: {}", port))?;
        if port_num == 0 {
            return Err("Port number must be greater than 0".to_string());
        }
    }

    Ok(())
}

/// Sanitizes warble text by removing control characters and clamping length
pub fn sanitize_warble(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_control() || c == '\n')
        .take(MAX_WARBLE_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_warble_text() {
        assert!(validate_warble_text("Hello, world!").is_ok());
        assert!(validate_warble_text("with\nnewline").is_ok());
        assert!(validate_warble_text("日本語もOK").is_ok());

        assert!(validate_warble_text("").is_err());
        assert!(validate_warble_text("   ").is_err());
        assert!(validate_warble_text(&"x".repeat(141)).is_err());
        assert!(validate_warble_text("nul\0byte").is_err());
    }

    #[test]
    fn test_validate_warble_text_boundary() {
        assert!(validate_warble_text(&"x".repeat(140)).is_ok());
    }

    #[test]
    fn test_validate_location() {
        assert!(validate_location("").is_ok());
        assert!(validate_location("NYC").is_ok());
        assert!(validate_location(&"x".repeat(81)).is_err());
        assert!(validate_location("bad\tlocation").is_err());
    }

    #[test]
    fn test_validate_server_url() {
        assert!(validate_server_url("http://localhost:5001").is_ok());
        assert!(validate_server_url("https://warbler.example.com").is_ok());
        assert!(validate_server_url("https://warbler.example.com/").is_ok());

        assert!(validate_server_url("").is_err());
        assert!(validate_server_url("localhost:5001").is_err());
        assert!(validate_server_url("ftp://host").is_err());
        assert!(validate_server_url("http://").is_err());
        assert!(validate_server_url("http://host:0").is_err());
        assert!(validate_server_url("http://host:abc").is_err());
    }

    #[test]
    fn test_sanitize_warble() {
        assert_eq!(sanitize_warble("Hello, world!"), "Hello, world!");
        assert_eq!(sanitize_warble("CR\rLF"), "CRLF");
        assert_eq!(sanitize_warble("keep\nnewline"), "keep\nnewline");
        assert_eq!(sanitize_warble(&"x".repeat(200)), "x".repeat(140));
    }
}
