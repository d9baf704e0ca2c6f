//! API endpoint configuration
//!
//! In development the app talks to the try-on backend through the dev
//! server proxy, so the base address stays empty and requests are
//! same-origin relative paths. Release builds use the address baked in at
//! compile time via `TRYON_API_URL`, falling back to the deployed backend.

const DEPLOYED_API_URL: &str = "https://tryon-backend.onrender.com";

/// Base address for the remote try-on service
pub fn api_base_url() -> String {
    if cfg!(debug_assertions) {
        String::new()
    } else {
        option_env!("TRYON_API_URL")
            .unwrap_or(DEPLOYED_API_URL)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_builds_use_same_origin() {
        if cfg!(debug_assertions) {
            assert_eq!(api_base_url(), "");
        } else {
            assert!(api_base_url().starts_with("https://"));
        }
    }
}
