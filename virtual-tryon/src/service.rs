use crate::models::TryOnResponse;

/// Error type for remote try-on operations
///
/// The session controller does not distinguish the variants: every failure
/// routes to the same fallback path. The split exists for logging.
#[derive(Debug)]
pub enum TryOnError {
    NetworkError(String),
    ServerError(String),
    JsonError(String),
}

impl std::fmt::Display for TryOnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TryOnError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            TryOnError::ServerError(msg) => write!(f, "Server error: {}", msg),
            TryOnError::JsonError(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for TryOnError {}

/// Client for the remote try-on generation service
///
/// One request per user action; retry is the shopper pressing "Regenerate",
/// never automatic.
pub struct TryOnService {
    base_url: String,
}

impl TryOnService {
    /// Create a new client against the configured service base address
    ///
    /// An empty base address means same-origin (the development proxy).
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn client(&self) -> Result<reqwest::Client, TryOnError> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("VirtualTryOn/0.1.0")
            .build()
            .map_err(|e| TryOnError::NetworkError(format!("Client build failed: {}", e)))
    }

    /// Downloads the garment's canonical image as raw bytes
    pub async fn fetch_garment_image(&self, image_url: &str) -> Result<Vec<u8>, TryOnError> {
        let response = self
            .client()?
            .get(image_url)
            .send()
            .await
            .map_err(|e| TryOnError::NetworkError(format!("Garment fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(TryOnError::ServerError(format!(
                "Garment fetch returned status: {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TryOnError::NetworkError(format!("Garment read failed: {}", e)))?;
        Ok(bytes.to_vec())
    }

    /// Submits one generation request with the shopper photo and the garment
    /// photo, returning the resolved result image URL
    pub async fn request_try_on(
        &self,
        person_image: Vec<u8>,
        garment_image: Vec<u8>,
    ) -> Result<String, TryOnError> {
        let url = format!("{}/api/try-on", self.base_url.trim_end_matches('/'));

        let form = reqwest::multipart::Form::new()
            .part(
                "person_image",
                reqwest::multipart::Part::bytes(person_image).file_name("person.jpg"),
            )
            .part(
                "cloth_image",
                reqwest::multipart::Part::bytes(garment_image).file_name("product.jpg"),
            );

        let response = self
            .client()?
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TryOnError::NetworkError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(TryOnError::ServerError(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        let result = response
            .json::<TryOnResponse>()
            .await
            .map_err(|e| TryOnError::JsonError(format!("Failed to parse response: {}", e)))?;

        Ok(self.resolve_output_url(&result.output_image_url))
    }

    /// Resolves a service-relative output path against the base address;
    /// absolute URLs pass through unchanged
    pub fn resolve_output_url(&self, output: &str) -> String {
        if output.starts_with('/') {
            format!("{}{}", self.base_url.trim_end_matches('/'), output)
        } else {
            output.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_output_path() {
        let service = TryOnService::new("https://tryon.example.com".to_string());
        assert_eq!(
            service.resolve_output_url("/static/result_1.png"),
            "https://tryon.example.com/static/result_1.png"
        );
    }

    #[test]
    fn test_resolve_trims_trailing_slash() {
        let service = TryOnService::new("https://tryon.example.com/".to_string());
        assert_eq!(
            service.resolve_output_url("/static/result_1.png"),
            "https://tryon.example.com/static/result_1.png"
        );
    }

    #[test]
    fn test_resolve_absolute_url_passes_through() {
        let service = TryOnService::new("https://tryon.example.com".to_string());
        assert_eq!(
            service.resolve_output_url("https://cdn.example.com/result.png"),
            "https://cdn.example.com/result.png"
        );
    }

    #[test]
    fn test_resolve_same_origin_base() {
        // Development mode: empty base keeps paths same-origin
        let service = TryOnService::new(String::new());
        assert_eq!(
            service.resolve_output_url("/static/result_1.png"),
            "/static/result_1.png"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_network_error() {
        // Port 9 (discard) is not listening; the request must fail cleanly
        let service = TryOnService::new("http://127.0.0.1:9".to_string());
        let result = service.request_try_on(vec![1, 2, 3], vec![4, 5, 6]).await;
        assert!(matches!(result, Err(TryOnError::NetworkError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_garment_fetch_is_a_network_error() {
        let service = TryOnService::new("http://127.0.0.1:9".to_string());
        let result = service
            .fetch_garment_image("http://127.0.0.1:9/cloth.jpg")
            .await;
        assert!(matches!(result, Err(TryOnError::NetworkError(_))));
    }
}
