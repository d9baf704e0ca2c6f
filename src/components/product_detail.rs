use crate::services::catalog_service;
use crate::{config, Screen};
use dioxus::prelude::*;
use virtual_tryon::{EligibilityEngine, TryOnMode, VirtualTryOn};

#[component]
pub fn ProductDetailScreen(product_id: u32, on_navigate: EventHandler<Screen>) -> Element {
    let product = match catalog_service::get_product(product_id) {
        Ok(product) => product,
        Err(e) => {
            log::warn!("Product lookup failed: {}", e);
            return rsx! {
                div { style: "max-width: 600px; margin: 48px auto; padding: 24px; text-align: center;",
                    div { class: "card", style: "padding: 32px;",
                        p { style: "margin: 0 0 16px 0; color: #6b7280;", "{e.user_message()}" }
                        button {
                            class: "btn-primary",
                            onclick: move |_| on_navigate.call(Screen::Home),
                            "← Back to shop"
                        }
                    }
                }
            };
        }
    };

    let engine = EligibilityEngine::default();
    let decision = engine.decide(product.garment_category, &product.garment_type);
    log::debug!(
        "Try-on decision for product {}: mode={} reason={:?}",
        product.id,
        decision.mode.as_str(),
        decision.reason
    );

    let discount = product.discount_percent();
    let ar_label = decision.button_text.clone().unwrap_or_default();

    rsx! {
        div { style: "max-width: 1100px; margin: 0 auto; padding: 24px;",

            button {
                style: "border: none; background: none; color: #6b7280; cursor: pointer; font-size: 13px; padding: 0; margin-bottom: 16px;",
                onclick: move |_| on_navigate.call(Screen::Home),
                "← Home / {product.category} / {product.garment_type}"
            }

            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 32px;",

                // Product image
                div { class: "card", style: "overflow: hidden;",
                    img {
                        src: "{product.image}",
                        alt: "{product.title}",
                        style: "width: 100%; aspect-ratio: 3/4; object-fit: cover; display: block;",
                    }
                }

                // Details
                div {
                    h1 { style: "margin: 0 0 8px 0; font-size: 24px; font-weight: 500; color: #1f2937;",
                        "{product.title}"
                    }
                    p { style: "margin: 0 0 16px 0; font-size: 13px; color: #6b7280;",
                        "⭐ {product.rating} · {product.reviews} Ratings · Sold by {product.vendor} · {product.gender.as_str()}"
                    }

                    div { style: "border-top: 1px solid #f3f4f6; border-bottom: 1px solid #f3f4f6; padding: 16px 0; margin-bottom: 16px;",
                        div { style: "font-size: 30px; color: #ea580c; font-weight: 500;",
                            "${product.price}"
                        }
                        div { style: "display: flex; gap: 8px; font-size: 13px; align-items: center;",
                            span { style: "color: #9ca3af; text-decoration: line-through;",
                                "${product.original_price}"
                            }
                            if discount > 0 {
                                span { style: "color: #1f2937; font-weight: 600;", "-{discount}%" }
                            }
                        }
                    }

                    if let Some(fit) = product.fit {
                        p { style: "margin: 0 0 16px 0; font-size: 13px; color: #4b5563;",
                            "Fit: {fit.as_str()}"
                        }
                    }

                    p { style: "margin: 0 0 24px 0; font-size: 14px; color: #4b5563; line-height: 1.6;",
                        "{product.description}"
                    }

                    div { style: "display: flex; gap: 12px; margin-bottom: 24px;",
                        button { class: "btn-secondary", "Buy Now" }
                        button { class: "btn-primary", "Add to Cart" }
                    }

                    // Try-on affordance, mounted per eligibility decision
                    div { style: "border-top: 1px solid #e5e7eb; padding-top: 24px;",
                        match decision.mode {
                            TryOnMode::Diffusion => rsx! {
                                VirtualTryOn {
                                    api_base_url: config::api_base_url(),
                                    garment_image_url: product.image.clone(),
                                    button_text: decision.button_text.clone(),
                                    hint: Some(decision.message.clone()),
                                }
                            },
                            TryOnMode::Ar => rsx! {
                                div { style: "padding: 16px; background: #eff6ff; border-radius: 8px;",
                                    p { style: "margin: 0 0 8px 0; font-weight: 600; color: #1d4ed8;",
                                        "📱 {ar_label}"
                                    }
                                    p { style: "margin: 0; font-size: 13px; color: #4b5563;",
                                        "{decision.message}"
                                    }
                                }
                            },
                            TryOnMode::None => rsx! {
                                div { style: "padding: 16px; background: #f9fafb; border-radius: 8px;",
                                    p { style: "margin: 0; font-size: 13px; color: #6b7280;",
                                        "{decision.message}"
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
