use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod models;
mod services;

use components::{HomeScreen, NavigationBar, ProductDetailScreen, TryOnStudioScreen};
use virtual_tryon::EligibilityEngine;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    // Best-effort data-integrity audit of the demo catalog
    services::catalog_service::audit_catalog(&EligibilityEngine::default());

    dioxus::launch(App);
}

/// Screen navigation for the shop
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    ProductDetail(u32),
    TryOnStudio,
}

#[component]
fn App() -> Element {
    let mut current_screen = use_signal(|| Screen::Home);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; min-height: 100vh; font-family: sans-serif; background: #ffffff; color: #1f2937;",

            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Home => rsx! {
                        HomeScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::ProductDetail(id) => rsx! {
                        ProductDetailScreen { product_id: id, on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::TryOnStudio => rsx! {
                        TryOnStudioScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                }
            }

            // Footer
            div { style: "background: #1f2937; color: #9ca3af; text-align: center; padding: 24px; font-size: 13px;",
                p { style: "margin: 0;", "© 2025 Demo Shop. All rights reserved." }
                p { style: "margin: 6px 0 0 0; font-size: 11px; color: #6b7280;",
                    "Virtual Try-On Demo Integration"
                }
            }
        }
    }
}
