//! Demo product catalog
//!
//! A static in-memory catalog standing in for the real product backend.
//! The shop only reads these records; nothing here is persisted.

use crate::error::AppError;
use crate::models::{FitType, Gender, Product};
use virtual_tryon::{EligibilityEngine, GarmentCategory};

/// Returns the full demo catalog
pub fn all_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "Premium Cotton Oversized T-Shirt - Urban Streetwear Collection".to_string(),
            vendor: "UrbanThread".to_string(),
            price: 24.99,
            original_price: 45.00,
            rating: 4.8,
            reviews: 124,
            image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Summer Collection".to_string(),
            description: "Elevate your casual wardrobe with our Premium Cotton Oversized T-Shirt. Crafted from 100% organic cotton, this tee offers breathable comfort and a relaxed fit perfect for everyday wear.".to_string(),
            gender: Gender::Men,
            garment_category: GarmentCategory::Upper,
            garment_type: "T-Shirt".to_string(),
            fit: None,
        },
        Product {
            id: 2,
            title: "Classic Stretch Denim Jeans".to_string(),
            vendor: "DenimWorks".to_string(),
            price: 39.99,
            original_price: 59.99,
            rating: 4.5,
            reviews: 89,
            image: "https://images.unsplash.com/photo-1542272604-787c3835535d?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Everyday Basics".to_string(),
            description: "Five-pocket jeans in stretch denim with a classic straight leg.".to_string(),
            gender: Gender::Men,
            garment_category: GarmentCategory::Lower,
            garment_type: "Jeans".to_string(),
            fit: Some(FitType::Slim),
        },
        Product {
            id: 3,
            title: "Banarasi Silk Saree with Zari Border".to_string(),
            vendor: "Heritage Looms".to_string(),
            price: 89.99,
            original_price: 149.99,
            rating: 4.9,
            reviews: 57,
            image: "https://images.unsplash.com/photo-1610030469983-98e550d6193c?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Festive Collection".to_string(),
            description: "Handwoven silk saree with a traditional zari border and matching blouse piece.".to_string(),
            gender: Gender::Women,
            garment_category: GarmentCategory::FullBody,
            garment_type: "Saree".to_string(),
            fit: None,
        },
        Product {
            id: 4,
            title: "Retro Round Sunglasses".to_string(),
            vendor: "SunShade Co.".to_string(),
            price: 14.99,
            original_price: 24.99,
            rating: 4.3,
            reviews: 211,
            image: "https://images.unsplash.com/photo-1511499767150-a48a237f0083?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Accessories".to_string(),
            description: "UV400 polarized lenses in a lightweight retro frame.".to_string(),
            gender: Gender::Unisex,
            garment_category: GarmentCategory::Accessory,
            garment_type: "Sunglasses".to_string(),
            fit: None,
        },
        Product {
            id: 5,
            title: "Seamless Comfort Bra".to_string(),
            vendor: "SoftWear".to_string(),
            price: 19.99,
            original_price: 29.99,
            rating: 4.6,
            reviews: 143,
            image: "https://images.unsplash.com/photo-1571513722275-4b41940f54b8?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Essentials".to_string(),
            description: "Wire-free seamless bra in soft microfiber.".to_string(),
            gender: Gender::Women,
            garment_category: GarmentCategory::Innerwear,
            garment_type: "Bra".to_string(),
            fit: None,
        },
        Product {
            id: 6,
            title: "Fleece Pullover Hoodie".to_string(),
            vendor: "UrbanThread".to_string(),
            price: 34.99,
            original_price: 54.99,
            rating: 4.7,
            reviews: 98,
            image: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Winter Collection".to_string(),
            description: "Heavyweight fleece hoodie with kangaroo pocket and drawstring hood.".to_string(),
            gender: Gender::Men,
            garment_category: GarmentCategory::Upper,
            garment_type: "Hoodie".to_string(),
            fit: None,
        },
        Product {
            id: 7,
            title: "Embroidered Cotton Kurti".to_string(),
            vendor: "Heritage Looms".to_string(),
            price: 27.99,
            original_price: 39.99,
            rating: 4.4,
            reviews: 66,
            image: "https://images.unsplash.com/photo-1583391733956-6c78276477e2?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Festive Collection".to_string(),
            description: "Straight-cut cotton kurti with chikankari embroidery.".to_string(),
            gender: Gender::Women,
            garment_category: GarmentCategory::Upper,
            garment_type: "Kurti".to_string(),
            fit: None,
        },
        Product {
            id: 8,
            title: "Leather Strap Analog Watch".to_string(),
            vendor: "TimeCraft".to_string(),
            price: 49.99,
            original_price: 79.99,
            rating: 4.5,
            reviews: 175,
            image: "https://images.unsplash.com/photo-1524592094714-0f0654e20314?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Accessories".to_string(),
            description: "Minimalist analog watch with a genuine leather strap.".to_string(),
            gender: Gender::Unisex,
            garment_category: GarmentCategory::Accessory,
            garment_type: "Watch".to_string(),
            fit: None,
        },
        Product {
            id: 9,
            title: "Lightweight Running Sneakers".to_string(),
            vendor: "StrideLab".to_string(),
            price: 59.99,
            original_price: 89.99,
            rating: 4.6,
            reviews: 132,
            image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=800&auto=format&fit=crop".to_string(),
            category: "Sports".to_string(),
            description: "Breathable mesh runners with a cushioned midsole.".to_string(),
            gender: Gender::Unisex,
            garment_category: GarmentCategory::Footwear,
            garment_type: "Sneakers".to_string(),
            fit: None,
        },
    ]
}

/// Looks up a product by id
pub fn get_product(id: u32) -> Result<Product, AppError> {
    all_products()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Product {}", id)))
}

/// Products filtered by garment category; `None` returns everything
pub fn products_in_category(category: Option<GarmentCategory>) -> Vec<Product> {
    let products = all_products();
    match category {
        Some(category) => products
            .into_iter()
            .filter(|p| p.garment_category == category)
            .collect(),
        None => products,
    }
}

/// Logs data-integrity warnings for products whose declared category
/// disagrees with the taxonomy
///
/// Catalog data is external, so mismatches are reported rather than
/// rejected; the eligibility rules already resolve them by priority.
pub fn audit_catalog(engine: &EligibilityEngine) {
    for product in all_products() {
        match engine.taxonomy().classify(&product.garment_type) {
            Some(classified) if classified != product.garment_category => {
                log::warn!(
                    "Product {} ('{}'): declared category {} but type '{}' classifies as {}",
                    product.id,
                    product.title,
                    product.garment_category.as_str(),
                    product.garment_type,
                    classified.as_str()
                );
            }
            Some(_) => {}
            None => {
                log::debug!(
                    "Product {}: garment type '{}' is not in the taxonomy",
                    product.id,
                    product.garment_type
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_product_by_id() {
        let product = get_product(1).unwrap();
        assert_eq!(product.garment_type, "T-Shirt");
        assert!(get_product(999).is_err());
    }

    #[test]
    fn test_products_in_category() {
        let upper = products_in_category(Some(GarmentCategory::Upper));
        assert!(!upper.is_empty());
        assert!(upper
            .iter()
            .all(|p| p.garment_category == GarmentCategory::Upper));

        assert_eq!(products_in_category(None).len(), all_products().len());
    }

    #[test]
    fn test_catalog_covers_every_category() {
        for category in GarmentCategory::all() {
            assert!(
                !products_in_category(Some(*category)).is_empty(),
                "no demo product for {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_every_product_gets_a_decision() {
        let engine = EligibilityEngine::default();
        for product in all_products() {
            let decision = engine.decide(product.garment_category, &product.garment_type);
            // Total: always a message, and the invariant between fields holds
            assert!(!decision.message.is_empty());
            assert_eq!(decision.supported, decision.button_text.is_some());
        }
    }
}
