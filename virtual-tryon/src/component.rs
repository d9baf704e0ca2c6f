use crate::models::{TryOnPhase, ViewToggle};
use crate::service::TryOnService;
use crate::session::{FallbackPolicy, TryOnSession, STATUS_INTERVAL};
use base64::Engine;
use dioxus::prelude::*;

/// Props for the fitting-room component
#[derive(Props, Clone, PartialEq)]
pub struct VirtualTryOnProps {
    /// Base address of the try-on service (empty for same-origin)
    pub api_base_url: String,
    /// Canonical product image, used both for display and as the garment input
    pub garment_image_url: String,
    /// Label for the open/close affordance, from the eligibility decision
    #[props(default)]
    pub button_text: Option<String>,
    /// Hint shown in the upload panel, from the eligibility decision
    #[props(default)]
    pub hint: Option<String>,
    /// Render expanded without the open/close toggle (studio mode)
    #[props(default)]
    pub force_open: bool,
}

/// Fitting-room component
///
/// Hosts one try-on session: photo upload, generation request, result or
/// demo fallback, and the result-vs-original toggle. The shopper never sees
/// a raw error; a failed request resolves into the demo fallback image.
///
/// # Example
/// ```rust,ignore
/// VirtualTryOn {
///     api_base_url: config::api_base_url(),
///     garment_image_url: product.image.clone(),
///     button_text: decision.button_text.clone(),
///     hint: Some(decision.message.clone()),
/// }
/// ```
#[component]
pub fn VirtualTryOn(props: VirtualTryOnProps) -> Element {
    let mut session = use_signal(TryOnSession::new);
    let mut is_open = use_signal(|| props.force_open);
    let mut upload_error = use_signal(|| None::<String>);

    let force_open = props.force_open;
    let garment_image_url = props.garment_image_url.clone();
    let open_label = props
        .button_text
        .clone()
        .unwrap_or_else(|| "Try It On Virtually".to_string());
    let hint = props
        .hint
        .clone()
        .unwrap_or_else(|| "Front facing".to_string());

    // Snapshot the session for this render
    let (phase, view, status_text, result_image, photo_data_url, busy, has_photo) = {
        let s = session.read();
        let photo_data_url = s.user_photo().map(|bytes| {
            format!(
                "data:{};base64,{}",
                s.user_photo_mime().unwrap_or("image/jpeg"),
                base64::engine::general_purpose::STANDARD.encode(bytes)
            )
        });
        (
            s.phase(),
            s.view_toggle(),
            s.status_text().map(|t| t.to_string()),
            s.result_image().map(|u| u.to_string()),
            photo_data_url,
            s.is_busy(),
            s.has_photo(),
        )
    };

    let on_upload = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let outcome = session.write().upload_photo(bytes.to_vec());
                    match outcome {
                        Ok(()) => upload_error.set(None),
                        Err(e) => {
                            log::warn!("Rejected uploaded photo: {}", e);
                            upload_error.set(Some(e.user_message()));
                        }
                    }
                }
                Err(e) => {
                    log::warn!("Failed to read selected file: {:?}", e);
                    upload_error.set(Some("Could not read the selected file.".to_string()));
                }
            }
        });
    };

    let api_base_url = props.api_base_url.clone();
    let garment_url_for_request = props.garment_image_url.clone();
    let on_generate = move |_| {
        let ticket = match session.write().begin_submit() {
            Some(ticket) => ticket,
            None => return,
        };
        let generation = ticket.generation;
        let service_base = api_base_url.clone();
        let garment_url = garment_url_for_request.clone();

        // Cosmetic progress line; stops once the attempt resolves
        spawn(async move {
            loop {
                tokio::time::sleep(STATUS_INTERVAL).await;
                if !session.write().advance_status(generation) {
                    break;
                }
            }
        });

        spawn(async move {
            let service = TryOnService::new(service_base);
            let outcome = match service.fetch_garment_image(&garment_url).await {
                Ok(garment) => service.request_try_on(ticket.user_photo, garment).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(image_url) => session.write().complete_success(generation, image_url),
                Err(e) => {
                    log::warn!("Try-on backend unavailable, using demo fallback: {}", e);
                    let policy = FallbackPolicy::default();
                    session.write().note_failure(generation);
                    tokio::time::sleep(policy.delay).await;
                    session.write().deliver_fallback(generation, policy.image_url);
                }
            }
        });
    };

    let generate_label = if busy {
        "Processing..."
    } else if result_image.is_some() {
        "Regenerate"
    } else {
        "Generate Preview"
    };

    rsx! {
        div {
            if !force_open {
                button {
                    style: "width: 100%; padding: 12px; border: none; border-radius: 8px; cursor: pointer; font-weight: 600; background: #4f46e5; color: #ffffff;",
                    onclick: move |_| is_open.set(!is_open()),
                    if is_open() { "Close Virtual Try-On" } else { "✨ {open_label}" }
                }
            }

            if is_open() {
                div { style: "margin-top: 12px; border: 2px solid #e0e7ff; border-radius: 12px; padding: 16px; background: #f8faff;",

                    if !force_open {
                        div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                            h3 { style: "margin: 0; font-size: 16px; color: #333;", "📷 AI Fitting Room" }
                            span { style: "font-size: 11px; background: #e0e7ff; color: #4f46e5; padding: 2px 8px; border-radius: 999px; font-weight: 600;",
                                "BETA"
                            }
                        }
                    }

                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px;",

                        // Panel 1: the garment
                        div { class: "tryon-panel",
                            span { class: "tryon-panel-label", "1. Selected Item" }
                            div { style: "aspect-ratio: 3/4; background: #f0f0f0; border-radius: 6px; overflow: hidden;",
                                img {
                                    src: "{garment_image_url}",
                                    alt: "Product",
                                    style: "width: 100%; height: 100%; object-fit: cover;",
                                }
                            }
                        }

                        // Panel 2: the shopper's photo
                        div { class: "tryon-panel",
                            span { class: "tryon-panel-label", "2. Your Photo" }
                            div { style: "position: relative; aspect-ratio: 3/4; background: #f0f0f0; border-radius: 6px; overflow: hidden; display: flex; flex-direction: column; align-items: center; justify-content: center;",
                                if let Some(photo) = photo_data_url {
                                    img {
                                        src: "{photo}",
                                        alt: "Your photo",
                                        style: "width: 100%; height: 100%; object-fit: cover;",
                                    }
                                    button {
                                        style: "position: absolute; top: 8px; right: 8px; background: rgba(0,0,0,0.5); color: #fff; border: none; border-radius: 999px; width: 24px; height: 24px; cursor: pointer;",
                                        onclick: move |_| {
                                            session.write().reset();
                                            upload_error.set(None);
                                        },
                                        "✕"
                                    }
                                } else {
                                    div { style: "text-align: center; padding: 12px;",
                                        p { style: "margin: 0 0 8px 0; font-size: 14px; color: #555;",
                                            "Upload Photo"
                                        }
                                        p { style: "margin: 0 0 8px 0; font-size: 11px; color: #999;",
                                            "{hint}"
                                        }
                                        input {
                                            r#type: "file",
                                            accept: "image/*",
                                            style: "font-size: 12px; max-width: 150px;",
                                            onchange: on_upload,
                                        }
                                    }
                                }
                            }
                            if let Some(error) = upload_error() {
                                p { style: "margin: 6px 0 0 0; font-size: 12px; color: #b91c1c;",
                                    "{error}"
                                }
                            }
                        }

                        // Panel 3: the result
                        div { class: "tryon-panel",
                            div { style: "display: flex; justify-content: space-between; align-items: center;",
                                span { class: "tryon-panel-label", "3. Result" }
                                button {
                                    style: "border: none; background: #eee; border-radius: 999px; padding: 2px 10px; font-size: 10px; font-weight: 700; cursor: pointer; color: #4f46e5;",
                                    title: if view == ViewToggle::ShowGenerated { "Showing AI preview" } else { "Showing original model" },
                                    onclick: move |_| session.write().toggle_view(),
                                    if view == ViewToggle::ShowGenerated { "AI ME" } else { "MODEL" }
                                }
                            }
                            div { style: "position: relative; aspect-ratio: 3/4; background: #111827; border-radius: 6px; overflow: hidden; display: flex; align-items: center; justify-content: center;",
                                if view == ViewToggle::ShowOriginal {
                                    img {
                                        src: "{garment_image_url}",
                                        alt: "Original model",
                                        style: "width: 100%; height: 100%; object-fit: cover;",
                                    }
                                    span { class: "tryon-result-badge", "Original Model" }
                                } else if busy {
                                    div { style: "text-align: center; color: #fff;",
                                        div { style: "font-size: 28px; animation: spin 2s linear infinite;",
                                            "⟳"
                                        }
                                        p { style: "margin: 8px 0 0 0; font-size: 13px;",
                                            if let Some(status) = status_text {
                                                "{status}..."
                                            } else {
                                                "Generating..."
                                            }
                                        }
                                    }
                                } else if let Some(result) = result_image {
                                    img {
                                        src: "{result}",
                                        alt: "Try-on result",
                                        style: "width: 100%; height: 100%; object-fit: cover;",
                                    }
                                    if phase == TryOnPhase::FallbackDelivered {
                                        span { class: "tryon-result-badge", "✨ Demo Preview" }
                                    } else {
                                        span { class: "tryon-result-badge", "✨ AI Preview" }
                                    }
                                } else {
                                    div { style: "text-align: center; color: #6b7280;",
                                        p { style: "margin: 0; font-size: 13px;", "Ready to Try" }
                                    }
                                }
                            }
                            button {
                                style: if !has_photo || busy {
                                    "margin-top: 10px; width: 100%; padding: 8px; border: none; border-radius: 6px; font-size: 13px; background: #f0f0f0; color: #999; cursor: not-allowed;"
                                } else {
                                    "margin-top: 10px; width: 100%; padding: 8px; border: none; border-radius: 6px; font-size: 13px; background: #4f46e5; color: #fff; cursor: pointer;"
                                },
                                disabled: !has_photo || busy,
                                onclick: on_generate,
                                "{generate_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
