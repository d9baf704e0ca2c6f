use crate::models::Product;
use crate::services::catalog_service;
use crate::Screen;
use dioxus::prelude::*;
use std::rc::Rc;
use virtual_tryon::{EligibilityEngine, GarmentCategory, TryOnMode};

/// Try-on readiness badge shown on each product card
fn readiness_badge(engine: &EligibilityEngine, product: &Product) -> (&'static str, &'static str) {
    let decision = engine.decide(product.garment_category, &product.garment_type);
    match (decision.mode, decision.reason.as_deref()) {
        (TryOnMode::Diffusion, _) => ("AI Ready", "#16a34a"),
        (TryOnMode::Ar, _) => ("AR Ready", "#2563eb"),
        (TryOnMode::None, Some("Restricted category")) => ("No Try-On", "#ef4444"),
        _ => ("Limited", "#9ca3af"),
    }
}

#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut active_category = use_signal(|| None::<GarmentCategory>);
    let engine = use_hook(|| Rc::new(EligibilityEngine::default()));

    let products = catalog_service::products_in_category(active_category());
    let heading = match active_category() {
        Some(category) => format!("{} Collection", category.as_str()),
        None => "Featured Products".to_string(),
    };

    let tab_active = "padding: 8px 16px; border: none; border-radius: 999px; font-size: 13px; cursor: pointer; background: #ea580c; color: #ffffff; font-weight: 600;";
    let tab_inactive = "padding: 8px 16px; border: none; border-radius: 999px; font-size: 13px; cursor: pointer; background: #f3f4f6; color: #4b5563;";

    rsx! {
        div { style: "max-width: 1100px; margin: 0 auto; padding: 24px;",

            // Hero
            div { style: "background: linear-gradient(to right, #f97316, #dc2626); border-radius: 16px; padding: 32px; margin-bottom: 32px; color: #ffffff;",
                h1 { style: "margin: 0 0 8px 0; font-size: 32px;", "Virtual Try-On Marketplace" }
                p { style: "margin: 0; opacity: 0.9;",
                    "Experience the new way to shop. Try on clothes from top vendors instantly using our AI technology."
                }
            }

            // Category tabs
            div { style: "display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 24px; border-bottom: 1px solid #e5e7eb; padding-bottom: 16px;",
                button {
                    style: if active_category().is_none() { tab_active } else { tab_inactive },
                    onclick: move |_| active_category.set(None),
                    "All Products"
                }
                for category in GarmentCategory::all() {
                    button {
                        key: "{category.as_str()}",
                        style: if active_category() == Some(*category) { tab_active } else { tab_inactive },
                        onclick: {
                            let category = *category;
                            move |_| active_category.set(Some(category))
                        },
                        "{category.as_str()} Garments"
                    }
                }
            }

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h2 { style: "margin: 0; font-size: 22px; color: #1f2937;", "{heading}" }
                span { style: "font-size: 13px; color: #6b7280;", "{products.len()} Items" }
            }

            // Product grid
            div { class: "product-grid",
                for product in products {
                    ProductCard {
                        product: product.clone(),
                        badge: readiness_badge(&engine, &product),
                        on_click: move |id| on_navigate.call(Screen::ProductDetail(id)),
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCard(
    product: Product,
    badge: (&'static str, &'static str),
    on_click: EventHandler<u32>,
) -> Element {
    let (badge_text, badge_color) = badge;
    let product_id = product.id;

    rsx! {
        div {
            class: "card",
            style: "cursor: pointer; overflow: hidden; display: flex; flex-direction: column;",
            onclick: move |_| on_click.call(product_id),

            div { style: "position: relative; aspect-ratio: 3/4; background: #f3f4f6; overflow: hidden;",
                img {
                    src: "{product.image}",
                    alt: "{product.title}",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                span { style: "position: absolute; top: 8px; left: 8px; background: rgba(0,0,0,0.6); color: #fff; font-size: 10px; padding: 2px 8px; border-radius: 4px;",
                    "{product.vendor}"
                }
                span { style: "position: absolute; top: 8px; right: 8px; background: rgba(255,255,255,0.9); color: #1f2937; font-size: 10px; font-weight: 700; padding: 2px 8px; border-radius: 4px; border: 1px solid #e5e7eb;",
                    "{product.garment_type}"
                }
            }

            div { style: "padding: 12px; display: flex; flex-direction: column; flex: 1;",
                div { style: "display: flex; justify-content: space-between; font-size: 11px; color: #6b7280; margin-bottom: 4px;",
                    span { "{product.category}" }
                    span { style: "font-weight: 700; color: {badge_color};", "{badge_text}" }
                }
                p { style: "margin: 0 0 8px 0; font-size: 14px; color: #1f2937;", "{product.title}" }

                div { style: "margin-top: auto;",
                    div { style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px;",
                        span { style: "font-size: 17px; font-weight: 700; color: #ea580c;",
                            "${product.price}"
                        }
                        span { style: "font-size: 12px; color: #9ca3af; text-decoration: line-through;",
                            "${product.original_price}"
                        }
                    }
                    div { style: "font-size: 11px; color: #6b7280;",
                        "⭐ {product.rating} ({product.reviews})"
                    }
                }
            }
        }
    }
}
