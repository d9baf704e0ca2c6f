pub mod product;

pub use product::{FitType, Gender, Product};
