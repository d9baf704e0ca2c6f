use serde::{Deserialize, Serialize};
use virtual_tryon::GarmentCategory;

/// A catalog product; immutable, owned by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub vendor: String,
    pub price: f64,
    pub original_price: f64,
    pub rating: f32,
    pub reviews: u32,
    /// Canonical display image; also the garment input for try-on
    pub image: String,
    /// Display collection (e.g. "Summer Collection")
    pub category: String,
    pub description: String,
    pub gender: Gender,
    pub garment_category: GarmentCategory,
    /// Specific type (e.g. "T-Shirt", "Saree")
    pub garment_type: String,
    /// Only meaningful for lower garments
    pub fit: Option<FitType>,
}

impl Product {
    /// Discount against the original price, rounded to whole percent
    pub fn discount_percent(&self) -> u32 {
        if self.original_price <= 0.0 || self.price >= self.original_price {
            return 0;
        }
        (((self.original_price - self.price) / self.original_price) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Unisex => "Unisex",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FitType {
    Slim,
    Regular,
    Loose,
    Oversized,
}

impl FitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitType::Slim => "Slim",
            FitType::Regular => "Regular",
            FitType::Loose => "Loose",
            FitType::Oversized => "Oversized",
        }
    }
}
