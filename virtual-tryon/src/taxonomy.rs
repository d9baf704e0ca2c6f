//! Garment classification tables
//!
//! Maps a product's free-text garment type (e.g. "T-Shirt", "Saree") to a
//! coarse category. The taxonomy is built once and handed to the eligibility
//! engine as an immutable value, so tests can inject custom vocabularies.

use crate::models::GarmentCategory;
use std::collections::HashSet;

const UPPER_GARMENTS: &[&str] = &[
    // Men
    "T-Shirt",
    "Polo Shirt",
    "Casual Shirt",
    "Formal Shirt",
    "Hoodie",
    "Sweatshirt",
    "Jacket",
    "Blazer",
    "Coat",
    "Kurta",
    "Panjabi",
    "Waistcoat",
    // Women
    "Top",
    "Blouse",
    "Shirt",
    "Tunic",
    "Kurti",
    "Sweater",
    "Cardigan",
    "Shrug",
    "Crop Top",
];

const LOWER_GARMENTS: &[&str] = &[
    // Men
    "Jeans",
    "Chinos",
    "Trousers",
    "Formal Pants",
    "Shorts",
    "Joggers",
    "Pajama",
    // Women
    "Pants",
    "Leggings",
    "Palazzos",
    "Skirt",
    "Sharara Bottom",
    "Gharara Bottom",
];

const FULL_BODY_GARMENTS: &[&str] = &[
    // Women
    "Saree",
    "Lehenga",
    "Gown",
    "Maxi Dress",
    "Anarkali",
    "Abaya",
    "Burqa",
    "Salwar Kameez",
    // Men
    "Sherwani",
    "Thobe",
    "Jubba",
    "Suit",
    "Panjabi + Pajama",
];

const ACCESSORIES: &[&str] = &[
    "Glasses",
    "Sunglasses",
    "Mask",
    "Earrings",
    "Watch",
    "Bracelet",
    "Ring",
    "Bangle",
];

const INNERWEAR: &[&str] = &[
    // Men
    "Vest",
    "Briefs",
    "Boxers",
    // Women
    "Bra",
    "Panty",
    "Lingerie",
];

/// Error raised when a taxonomy violates its membership invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A garment type appears in more than one classification set
    AmbiguousType(String),
}

impl std::fmt::Display for TaxonomyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxonomyError::AmbiguousType(t) => {
                write!(f, "Garment type '{}' belongs to more than one category", t)
            }
        }
    }
}

impl std::error::Error for TaxonomyError {}

/// Immutable membership sets, one per classifiable category
///
/// Footwear has no type vocabulary; footwear products carry the category
/// explicitly and fall through to the default eligibility rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarmentTaxonomy {
    pub upper: HashSet<String>,
    pub lower: HashSet<String>,
    pub full_body: HashSet<String>,
    pub accessories: HashSet<String>,
    pub innerwear: HashSet<String>,
}

impl Default for GarmentTaxonomy {
    fn default() -> Self {
        fn to_set(types: &[&str]) -> HashSet<String> {
            types.iter().map(|t| t.to_string()).collect()
        }

        Self {
            upper: to_set(UPPER_GARMENTS),
            lower: to_set(LOWER_GARMENTS),
            full_body: to_set(FULL_BODY_GARMENTS),
            accessories: to_set(ACCESSORIES),
            innerwear: to_set(INNERWEAR),
        }
    }
}

impl GarmentTaxonomy {
    /// Looks up the category a garment type belongs to
    ///
    /// Returns `None` for unknown types; the caller falls back to the
    /// product's declared category.
    pub fn classify(&self, garment_type: &str) -> Option<GarmentCategory> {
        if self.innerwear.contains(garment_type) {
            Some(GarmentCategory::Innerwear)
        } else if self.lower.contains(garment_type) {
            Some(GarmentCategory::Lower)
        } else if self.upper.contains(garment_type) {
            Some(GarmentCategory::Upper)
        } else if self.accessories.contains(garment_type) {
            Some(GarmentCategory::Accessory)
        } else if self.full_body.contains(garment_type) {
            Some(GarmentCategory::FullBody)
        } else {
            None
        }
    }

    /// Whether the garment type is a member of the given category's set
    pub fn contains(&self, category: GarmentCategory, garment_type: &str) -> bool {
        match category {
            GarmentCategory::Upper => self.upper.contains(garment_type),
            GarmentCategory::Lower => self.lower.contains(garment_type),
            GarmentCategory::FullBody => self.full_body.contains(garment_type),
            GarmentCategory::Accessory => self.accessories.contains(garment_type),
            GarmentCategory::Innerwear => self.innerwear.contains(garment_type),
            GarmentCategory::Footwear => false,
        }
    }

    /// Checks that every garment type belongs to exactly one set
    ///
    /// Overlaps are a data-integrity defect in the vocabulary; rejecting
    /// them here keeps rule precedence out of decision-time behavior.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        let sets = [
            &self.upper,
            &self.lower,
            &self.full_body,
            &self.accessories,
            &self.innerwear,
        ];

        for (i, set) in sets.iter().enumerate() {
            for other in sets.iter().skip(i + 1) {
                if let Some(duplicate) = set.intersection(other).next() {
                    return Err(TaxonomyError::AmbiguousType(duplicate.clone()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_disjoint() {
        assert_eq!(GarmentTaxonomy::default().validate(), Ok(()));
    }

    #[test]
    fn test_classify_known_types() {
        let taxonomy = GarmentTaxonomy::default();
        assert_eq!(taxonomy.classify("T-Shirt"), Some(GarmentCategory::Upper));
        assert_eq!(taxonomy.classify("Jeans"), Some(GarmentCategory::Lower));
        assert_eq!(taxonomy.classify("Saree"), Some(GarmentCategory::FullBody));
        assert_eq!(
            taxonomy.classify("Sunglasses"),
            Some(GarmentCategory::Accessory)
        );
        assert_eq!(taxonomy.classify("Bra"), Some(GarmentCategory::Innerwear));
    }

    #[test]
    fn test_classify_unknown_type() {
        let taxonomy = GarmentTaxonomy::default();
        assert_eq!(taxonomy.classify("Sneakers"), None);
        assert_eq!(taxonomy.classify(""), None);
    }

    #[test]
    fn test_contains_footwear_has_no_set() {
        let taxonomy = GarmentTaxonomy::default();
        assert!(!taxonomy.contains(GarmentCategory::Footwear, "Sneakers"));
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let mut taxonomy = GarmentTaxonomy::default();
        taxonomy.upper.insert("Bra".to_string());
        assert_eq!(
            taxonomy.validate(),
            Err(TaxonomyError::AmbiguousType("Bra".to_string()))
        );
    }
}
