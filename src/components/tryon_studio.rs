use crate::{config, Screen};
use dioxus::prelude::*;
use virtual_tryon::VirtualTryOn;

/// Demo garment shown when the studio is opened without a product
const DEMO_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=800&auto=format&fit=crop";

#[component]
pub fn TryOnStudioScreen(on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        div { style: "max-width: 900px; margin: 0 auto; padding: 24px;",

            div { style: "display: flex; align-items: center; gap: 16px; margin-bottom: 24px;",
                button {
                    style: "border: none; background: #ffffff; border-radius: 999px; width: 36px; height: 36px; cursor: pointer; box-shadow: 0 1px 3px rgba(0,0,0,0.1); color: #4b5563;",
                    onclick: move |_| on_navigate.call(Screen::Home),
                    "←"
                }
                div {
                    h1 { style: "margin: 0; font-size: 24px; color: #111827;", "Virtual Try-On Studio" }
                    p { style: "margin: 4px 0 0 0; font-size: 13px; color: #6b7280;",
                        "Upload your photo and see how it fits."
                    }
                }
            }

            div { class: "card", style: "padding: 24px;",
                VirtualTryOn {
                    api_base_url: config::api_base_url(),
                    garment_image_url: DEMO_PRODUCT_IMAGE.to_string(),
                    force_open: true,
                }
            }
        }
    }
}
