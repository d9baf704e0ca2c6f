//! # Virtual Try-On
//!
//! A reusable fitting-room library for garment shops.
//!
//! This crate provides the logic behind a "try it on" feature, including:
//! - Garment taxonomy and per-product eligibility rules (AI diffusion vs.
//!   AR preview vs. disabled)
//! - A try-on session state machine (upload, submit, result, fallback)
//! - A client for the remote image-generation service
//!
//! ## Platform Separation
//!
//! The session machine and the remote client are UI-agnostic. The Dioxus
//! fitting-room component lives behind the `components` feature so headless
//! consumers do not pull in a UI toolkit.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use virtual_tryon::{EligibilityEngine, GarmentCategory};
//!
//! let engine = EligibilityEngine::default();
//! let decision = engine.decide(GarmentCategory::Upper, "T-Shirt");
//! assert!(decision.supported);
//! ```

pub mod eligibility;
pub mod models;
pub mod service;
pub mod session;
pub mod taxonomy;

#[cfg(feature = "components")]
pub mod component;

pub use eligibility::EligibilityEngine;
pub use models::{GarmentCategory, TryOnDecision, TryOnMode, TryOnPhase, TryOnResponse, ViewToggle};
pub use service::{TryOnError, TryOnService};
pub use session::{
    FallbackPolicy, SubmitTicket, TryOnSession, UploadError, STATUS_INTERVAL, STATUS_MILESTONES,
};
pub use taxonomy::{GarmentTaxonomy, TaxonomyError};

#[cfg(feature = "components")]
pub use component::VirtualTryOn;
