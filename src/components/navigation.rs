use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let active_style = "border: none; background: none; cursor: pointer; font-size: 14px; padding: 8px 12px; border-radius: 6px; background: #fff7ed; color: #ea580c; font-weight: 600;";
    let inactive_style = "border: none; background: none; cursor: pointer; font-size: 14px; padding: 8px 12px; border-radius: 6px; color: #4b5563;";

    rsx! {
        div { style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; border-bottom: 1px solid #e5e7eb; background: #ffffff; position: sticky; top: 0; z-index: 10;",

            // Brand
            div {
                style: "font-size: 18px; font-weight: 700; color: #ea580c; cursor: pointer;",
                onclick: move |_| on_navigate.call(Screen::Home),
                "🛍️ Demo Shop"
            }

            div { style: "display: flex; gap: 8px;",
                button {
                    style: if matches!(current_screen, Screen::Home | Screen::ProductDetail(_)) { active_style } else { inactive_style },
                    onclick: move |_| on_navigate.call(Screen::Home),
                    "Shop"
                }
                button {
                    style: if matches!(current_screen, Screen::TryOnStudio) { active_style } else { inactive_style },
                    onclick: move |_| on_navigate.call(Screen::TryOnStudio),
                    "✨ Try-On Studio"
                }
            }
        }
    }
}
