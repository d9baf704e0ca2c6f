use serde::{Deserialize, Serialize};

/// Coarse garment classification assigned to a product at catalog time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GarmentCategory {
    Upper,
    Lower,
    FullBody,
    Accessory,
    Innerwear,
    Footwear,
}

impl GarmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentCategory::Upper => "Upper",
            GarmentCategory::Lower => "Lower",
            GarmentCategory::FullBody => "FullBody",
            GarmentCategory::Accessory => "Accessory",
            GarmentCategory::Innerwear => "Innerwear",
            GarmentCategory::Footwear => "Footwear",
        }
    }

    pub fn all() -> &'static [GarmentCategory] {
        static ALL: [GarmentCategory; 6] = [
            GarmentCategory::Upper,
            GarmentCategory::Lower,
            GarmentCategory::FullBody,
            GarmentCategory::Accessory,
            GarmentCategory::Innerwear,
            GarmentCategory::Footwear,
        ];
        &ALL
    }
}

/// How a try-on preview is produced for an eligible garment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TryOnMode {
    /// Server-side generative compositing of the garment onto the shopper's photo
    Diffusion,
    /// Landmark/overlay preview, no generation request
    Ar,
    /// Try-on is not offered
    None,
}

impl TryOnMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TryOnMode::Diffusion => "diffusion",
            TryOnMode::Ar => "ar",
            TryOnMode::None => "none",
        }
    }
}

/// Outcome of the eligibility rules for one product
///
/// `supported == true` implies a concrete mode and a button label;
/// `supported == false` implies mode `None` and a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryOnDecision {
    pub supported: bool,
    pub mode: TryOnMode,
    /// User-facing rationale or instruction
    pub message: String,
    /// Label for the try-on affordance, present iff supported
    pub button_text: Option<String>,
    /// Machine-facing category tag for logging, present iff not supported
    pub reason: Option<String>,
}

impl TryOnDecision {
    pub(crate) fn offered(mode: TryOnMode, button_text: &str, message: &str) -> Self {
        Self {
            supported: true,
            mode,
            message: message.to_string(),
            button_text: Some(button_text.to_string()),
            reason: None,
        }
    }

    pub(crate) fn declined(message: &str, reason: Option<&str>) -> Self {
        Self {
            supported: false,
            mode: TryOnMode::None,
            message: message.to_string(),
            button_text: None,
            reason: reason.map(|r| r.to_string()),
        }
    }
}

/// Phase of one try-on attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryOnPhase {
    /// No shopper photo yet
    Idle,
    /// Photo decoded and held in memory, ready to submit
    PhotoLoaded,
    /// One request in flight
    Submitting,
    /// Remote service returned a generated image
    Succeeded,
    /// Request failed; waiting out the fallback delay
    FallbackPending,
    /// Canned fallback image substituted for the result
    FallbackDelivered,
}

/// Which image the result panel shows; independent of the session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewToggle {
    ShowGenerated,
    ShowOriginal,
}

/// Success response from the try-on generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TryOnResponse {
    /// Absolute URL, or a path rooted at the service (leading '/')
    pub output_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(TryOnMode::Diffusion.as_str(), "diffusion");
        assert_eq!(TryOnMode::Ar.as_str(), "ar");
        assert_eq!(TryOnMode::None.as_str(), "none");
    }

    #[test]
    fn test_category_all_is_exhaustive() {
        assert_eq!(GarmentCategory::all().len(), 6);
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"output_image_url": "/static/result_abc.png"}"#;
        let parsed: TryOnResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.output_image_url, "/static/result_abc.png");

        // Missing output field is a parse error, not a silent default
        assert!(serde_json::from_str::<TryOnResponse>(r#"{"status": "ok"}"#).is_err());
    }
}
