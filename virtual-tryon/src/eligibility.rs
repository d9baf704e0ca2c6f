//! Per-product try-on eligibility rules
//!
//! Decides whether try-on is offered for a product and in which mode. The
//! rules are ordered; the first match wins. Innerwear is checked before any
//! supporting rule so the restriction cannot be bypassed by a garment that
//! also matches another set through bad catalog data.

use crate::models::{GarmentCategory, TryOnDecision, TryOnMode};
use crate::taxonomy::{GarmentTaxonomy, TaxonomyError};

/// Eligibility engine over an injected taxonomy
///
/// `decide` is pure and total: no I/O, no caching, identical output for
/// identical input, safe to call on every render.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    taxonomy: GarmentTaxonomy,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        // The default vocabulary is disjoint by construction (verified in
        // taxonomy tests), so no validation round-trip is needed here.
        Self {
            taxonomy: GarmentTaxonomy::default(),
        }
    }
}

impl EligibilityEngine {
    /// Builds an engine over a custom taxonomy, rejecting ambiguous vocabularies
    pub fn new(taxonomy: GarmentTaxonomy) -> Result<Self, TaxonomyError> {
        taxonomy.validate()?;
        Ok(Self { taxonomy })
    }

    pub fn taxonomy(&self) -> &GarmentTaxonomy {
        &self.taxonomy
    }

    /// Decides the try-on affordance for a product
    ///
    /// Category checks and type-set membership are OR-ed per rule: the
    /// declared category is authoritative, the taxonomy catches products
    /// whose declared category is missing or wrong.
    pub fn decide(&self, garment_category: GarmentCategory, garment_type: &str) -> TryOnDecision {
        let taxonomy = &self.taxonomy;

        // 1. Innerwear: strictly disabled, must win over every other rule
        if garment_category == GarmentCategory::Innerwear
            || taxonomy.contains(GarmentCategory::Innerwear, garment_type)
        {
            return TryOnDecision::declined(
                "Virtual Try-On is strictly disabled for this category.",
                Some("Restricted category"),
            );
        }

        // 2. Lower garments: the generation model only composites upper bodies
        if garment_category == GarmentCategory::Lower
            || taxonomy.contains(GarmentCategory::Lower, garment_type)
        {
            return TryOnDecision::declined(
                "AI Try-On is available for upper garments only.",
                Some("Partial support"),
            );
        }

        // 3. Upper garments: AI diffusion
        if garment_category == GarmentCategory::Upper
            || taxonomy.contains(GarmentCategory::Upper, garment_type)
        {
            return TryOnDecision::offered(
                TryOnMode::Diffusion,
                "AI Try-On Preview",
                "Upload a front-facing photo for best results.",
            );
        }

        // 4. Accessories: landmark-based AR, no generation request
        if garment_category == GarmentCategory::Accessory
            || taxonomy.contains(GarmentCategory::Accessory, garment_type)
        {
            return TryOnDecision::offered(
                TryOnMode::Ar,
                "Live AR Preview",
                "Use your camera to see how this looks on you.",
            );
        }

        // 5. Full-body garments
        if garment_category == GarmentCategory::FullBody
            || taxonomy.contains(GarmentCategory::FullBody, garment_type)
        {
            return TryOnDecision::declined(
                "AI Try-On not supported for this item.",
                Some("Complexity"),
            );
        }

        // Default: anything unclassified (includes Footwear)
        TryOnDecision::declined("Virtual Try-On is not available for this item.", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> EligibilityEngine {
        EligibilityEngine::default()
    }

    #[test]
    fn test_upper_is_diffusion_supported() {
        let decision = engine().decide(GarmentCategory::Upper, "T-Shirt");
        assert!(decision.supported);
        assert_eq!(decision.mode, TryOnMode::Diffusion);
        assert_eq!(decision.button_text.as_deref(), Some("AI Try-On Preview"));
        assert_eq!(decision.reason, None);
    }

    #[test]
    fn test_accessory_is_ar_supported() {
        let decision = engine().decide(GarmentCategory::Accessory, "Sunglasses");
        assert!(decision.supported);
        assert_eq!(decision.mode, TryOnMode::Ar);
        assert_eq!(decision.button_text.as_deref(), Some("Live AR Preview"));
    }

    #[test]
    fn test_innerwear_is_restricted() {
        let decision = engine().decide(GarmentCategory::Innerwear, "Bra");
        assert!(!decision.supported);
        assert_eq!(decision.mode, TryOnMode::None);
        assert_eq!(decision.reason.as_deref(), Some("Restricted category"));
        assert!(decision.button_text.is_none());
    }

    #[test]
    fn test_lower_is_partial_support() {
        let decision = engine().decide(GarmentCategory::Lower, "Jeans");
        assert!(!decision.supported);
        assert_eq!(decision.reason.as_deref(), Some("Partial support"));
    }

    #[test]
    fn test_full_body_is_complexity() {
        let decision = engine().decide(GarmentCategory::FullBody, "Saree");
        assert!(!decision.supported);
        assert_eq!(decision.reason.as_deref(), Some("Complexity"));
    }

    #[test]
    fn test_unclassified_falls_through() {
        let decision = engine().decide(GarmentCategory::Footwear, "Sneakers");
        assert!(!decision.supported);
        assert_eq!(decision.mode, TryOnMode::None);
        assert_eq!(decision.reason, None);
        assert!(!decision.message.is_empty());
    }

    #[test]
    fn test_innerwear_by_type_beats_upper_by_category() {
        // A mis-tagged product that is innerwear by type but Upper by
        // declared category must still be restricted.
        let decision = engine().decide(GarmentCategory::Upper, "Bra");
        assert!(!decision.supported);
        assert_eq!(decision.reason.as_deref(), Some("Restricted category"));
    }

    #[test]
    fn test_type_membership_rescues_missing_category() {
        // Declared category carries no rule of its own, but the type string
        // is in the upper set.
        let decision = engine().decide(GarmentCategory::Footwear, "Hoodie");
        assert!(decision.supported);
        assert_eq!(decision.mode, TryOnMode::Diffusion);
    }

    #[test]
    fn test_decide_is_idempotent() {
        let engine = engine();
        let first = engine.decide(GarmentCategory::Upper, "T-Shirt");
        for _ in 0..10 {
            assert_eq!(engine.decide(GarmentCategory::Upper, "T-Shirt"), first);
        }
    }

    #[test]
    fn test_custom_taxonomy_injection() {
        let mut taxonomy = GarmentTaxonomy::default();
        taxonomy.innerwear.insert("Corset".to_string());
        let engine = EligibilityEngine::new(taxonomy).unwrap();

        let decision = engine.decide(GarmentCategory::Upper, "Corset");
        assert_eq!(decision.reason.as_deref(), Some("Restricted category"));
    }

    #[test]
    fn test_ambiguous_taxonomy_is_rejected() {
        let mut taxonomy = GarmentTaxonomy::default();
        taxonomy.accessories.insert("Jeans".to_string());
        assert!(EligibilityEngine::new(taxonomy).is_err());
    }
}
