//! Try-on session state machine
//!
//! One `TryOnSession` owns the lifecycle of a single fitting-room
//! interaction: photo upload, request submission, result or fallback, and
//! the result-view toggle. The machine itself is synchronous; the host (a
//! Dioxus component, or a test) performs the async work and feeds outcomes
//! back through the generation-guarded completion methods.
//!
//! Every async effect carries the generation tag it was issued under.
//! `reset()` and a new upload bump the generation, so a late-arriving
//! response from an abandoned attempt is ignored instead of overwriting
//! state the user has already left behind.

use crate::models::{TryOnPhase, ViewToggle};
use std::time::Duration;

/// Progress milestones shown while a request is in flight
///
/// Purely cosmetic: the sequence advances monotonically on a fixed interval
/// and freezes at the last entry if the response is slow.
pub const STATUS_MILESTONES: [&str; 4] = [
    "Initializing",
    "Processing image",
    "Applying generation",
    "Refining details",
];

/// Interval between milestone advances
pub const STATUS_INTERVAL: Duration = Duration::from_millis(900);

/// Status line shown while the fallback delay runs after a failed request
const FALLBACK_STATUS: &str = "Finalizing preview";

/// Demo image substituted when the remote service is unavailable
const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?q=80&w=600&auto=format&fit=crop";

/// Degraded-mode behavior when the remote request fails
///
/// The raw error is never surfaced; after `delay` the canned `image_url` is
/// delivered as the result, so the fitting room always terminates in a
/// "has a result" state within bounded time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    pub delay: Duration,
    pub image_url: String,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            image_url: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}

/// Error for uploads that cannot be decoded as an image
#[derive(Debug)]
pub enum UploadError {
    Decode(image::ImageError),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::Decode(e) => write!(f, "Image decode error: {}", e),
        }
    }
}

impl std::error::Error for UploadError {}

impl UploadError {
    /// User-friendly message for the UI
    pub fn user_message(&self) -> String {
        "Could not read that photo. Please upload a JPEG, PNG, or WebP image.".to_string()
    }
}

/// Permission to dispatch one outbound request
///
/// Handed out by [`TryOnSession::begin_submit`]; at most one ticket exists
/// per in-flight attempt. The completion methods take the ticket's
/// generation so stale attempts are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub user_photo: Vec<u8>,
}

/// State of one open fitting-room interaction; never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct TryOnSession {
    phase: TryOnPhase,
    user_photo: Option<Vec<u8>>,
    user_photo_mime: Option<&'static str>,
    result_image: Option<String>,
    view_toggle: ViewToggle,
    status_text: Option<String>,
    milestone: usize,
    generation: u64,
}

impl Default for TryOnSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TryOnSession {
    pub fn new() -> Self {
        Self {
            phase: TryOnPhase::Idle,
            user_photo: None,
            user_photo_mime: None,
            result_image: None,
            view_toggle: ViewToggle::ShowGenerated,
            status_text: None,
            milestone: 0,
            generation: 0,
        }
    }

    pub fn phase(&self) -> TryOnPhase {
        self.phase
    }

    pub fn view_toggle(&self) -> ViewToggle {
        self.view_toggle
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    pub fn result_image(&self) -> Option<&str> {
        self.result_image.as_deref()
    }

    pub fn user_photo(&self) -> Option<&[u8]> {
        self.user_photo.as_deref()
    }

    /// MIME type detected at upload, for data-URL display
    pub fn user_photo_mime(&self) -> Option<&'static str> {
        self.user_photo_mime
    }

    pub fn has_photo(&self) -> bool {
        self.user_photo.is_some()
    }

    /// Whether a request is in flight (including the fallback delay)
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            TryOnPhase::Submitting | TryOnPhase::FallbackPending
        )
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Loads a new shopper photo, replacing any previous attempt
    ///
    /// The bytes are validated by decoding them. On failure the session is
    /// reset to Idle and the caller shows `UploadError::user_message`.
    pub fn upload_photo(&mut self, bytes: Vec<u8>) -> Result<(), UploadError> {
        let format = match image::guess_format(&bytes) {
            Ok(format) => format,
            Err(e) => {
                self.reset();
                return Err(UploadError::Decode(e));
            }
        };
        if let Err(e) = image::load_from_memory(&bytes) {
            self.reset();
            return Err(UploadError::Decode(e));
        }

        // A new photo starts a new attempt; anything still in flight for
        // the previous one is now stale.
        self.generation += 1;
        self.phase = TryOnPhase::PhotoLoaded;
        self.user_photo_mime = Some(format.to_mime_type());
        self.user_photo = Some(bytes);
        self.result_image = None;
        self.view_toggle = ViewToggle::ShowGenerated;
        self.status_text = None;
        self.milestone = 0;

        log::debug!("Photo loaded ({} generation)", self.generation);
        Ok(())
    }

    /// Starts one submission, or returns `None` if one is already running
    /// or no photo has been uploaded
    ///
    /// Rapid re-clicks therefore coalesce into a single outbound request.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.is_busy() {
            log::debug!("Submit ignored: request already in flight");
            return None;
        }
        let user_photo = match &self.user_photo {
            Some(photo) => photo.clone(),
            None => {
                log::debug!("Submit ignored: no photo uploaded");
                return None;
            }
        };

        self.phase = TryOnPhase::Submitting;
        self.milestone = 0;
        self.status_text = Some(STATUS_MILESTONES[0].to_string());

        Some(SubmitTicket {
            generation: self.generation,
            user_photo,
        })
    }

    /// Stores the generated result for the given attempt
    pub fn complete_success(&mut self, generation: u64, image_url: String) {
        if !self.accepts(generation, TryOnPhase::Submitting) {
            return;
        }
        self.phase = TryOnPhase::Succeeded;
        self.result_image = Some(image_url);
        self.status_text = None;
        log::info!("Try-on result received");
    }

    /// Records a failed request and enters the fallback wait
    ///
    /// The error itself is absorbed: the user sees a status line, never an
    /// error screen.
    pub fn note_failure(&mut self, generation: u64) {
        if !self.accepts(generation, TryOnPhase::Submitting) {
            return;
        }
        self.phase = TryOnPhase::FallbackPending;
        self.status_text = Some(FALLBACK_STATUS.to_string());
    }

    /// Substitutes the canned fallback image after the fallback delay
    pub fn deliver_fallback(&mut self, generation: u64, image_url: String) {
        if !self.accepts(generation, TryOnPhase::FallbackPending) {
            return;
        }
        self.phase = TryOnPhase::FallbackDelivered;
        self.result_image = Some(image_url);
        self.status_text = None;
        log::info!("Fallback result delivered");
    }

    /// Advances the cosmetic progress line while submitting
    ///
    /// Returns false once the attempt is no longer submitting, so the
    /// ticker task knows to stop. Never regresses; freezes at the last
    /// milestone.
    pub fn advance_status(&mut self, generation: u64) -> bool {
        if !self.accepts(generation, TryOnPhase::Submitting) {
            return false;
        }
        if self.milestone + 1 < STATUS_MILESTONES.len() {
            self.milestone += 1;
            self.status_text = Some(STATUS_MILESTONES[self.milestone].to_string());
        }
        true
    }

    /// Flips the result panel between the generated preview and the
    /// original model shot; independent of the phase
    pub fn toggle_view(&mut self) {
        self.view_toggle = match self.view_toggle {
            ViewToggle::ShowGenerated => ViewToggle::ShowOriginal,
            ViewToggle::ShowOriginal => ViewToggle::ShowGenerated,
        };
    }

    /// Discards photo, result, and status; any in-flight work becomes stale
    pub fn reset(&mut self) {
        self.phase = TryOnPhase::Idle;
        self.user_photo = None;
        self.user_photo_mime = None;
        self.result_image = None;
        self.view_toggle = ViewToggle::ShowGenerated;
        self.status_text = None;
        self.milestone = 0;
        self.generation += 1;
    }

    fn accepts(&self, generation: u64, expected: TryOnPhase) -> bool {
        if generation != self.generation {
            log::debug!(
                "Ignoring stale completion (generation {} != {})",
                generation,
                self.generation
            );
            return false;
        }
        self.phase == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::TryOnService;

    /// A tiny valid PNG for upload tests
    fn test_photo() -> Vec<u8> {
        let mut bytes = Vec::new();
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([120, 80, 40]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    fn loaded_session() -> TryOnSession {
        let mut session = TryOnSession::new();
        session.upload_photo(test_photo()).unwrap();
        session
    }

    #[test]
    fn test_upload_valid_photo() {
        let mut session = TryOnSession::new();
        session.upload_photo(test_photo()).unwrap();
        assert_eq!(session.phase(), TryOnPhase::PhotoLoaded);
        assert!(session.has_photo());
        assert_eq!(session.user_photo_mime(), Some("image/png"));
        assert_eq!(session.view_toggle(), ViewToggle::ShowGenerated);
        assert!(session.result_image().is_none());
    }

    #[test]
    fn test_upload_garbage_leaves_idle() {
        let mut session = TryOnSession::new();
        let err = session.upload_photo(b"not an image".to_vec()).unwrap_err();
        assert!(!err.user_message().is_empty());
        assert_eq!(session.phase(), TryOnPhase::Idle);
        assert!(!session.has_photo());
    }

    #[test]
    fn test_upload_replaces_previous_result() {
        let mut session = loaded_session();
        let ticket = session.begin_submit().unwrap();
        session.complete_success(ticket.generation, "https://x/result.png".to_string());
        assert_eq!(session.phase(), TryOnPhase::Succeeded);

        session.upload_photo(test_photo()).unwrap();
        assert_eq!(session.phase(), TryOnPhase::PhotoLoaded);
        assert!(session.result_image().is_none());
    }

    #[test]
    fn test_submit_requires_photo() {
        let mut session = TryOnSession::new();
        assert!(session.begin_submit().is_none());
        assert_eq!(session.phase(), TryOnPhase::Idle);
    }

    #[test]
    fn test_double_submit_yields_one_ticket() {
        let mut session = loaded_session();
        assert!(session.begin_submit().is_some());
        assert!(session.begin_submit().is_none());
        assert_eq!(session.phase(), TryOnPhase::Submitting);
    }

    #[test]
    fn test_success_transition() {
        let mut session = loaded_session();
        let ticket = session.begin_submit().unwrap();
        assert!(session.status_text().is_some());

        session.complete_success(ticket.generation, "https://x/result.png".to_string());
        assert_eq!(session.phase(), TryOnPhase::Succeeded);
        assert_eq!(session.result_image(), Some("https://x/result.png"));
        assert!(session.status_text().is_none());
    }

    #[test]
    fn test_failure_then_fallback() {
        let mut session = loaded_session();
        let ticket = session.begin_submit().unwrap();

        session.note_failure(ticket.generation);
        assert_eq!(session.phase(), TryOnPhase::FallbackPending);
        assert!(session.status_text().is_some());
        // Still busy: no second request may start during the fallback wait
        assert!(session.begin_submit().is_none());

        let policy = FallbackPolicy::default();
        session.deliver_fallback(ticket.generation, policy.image_url.clone());
        assert_eq!(session.phase(), TryOnPhase::FallbackDelivered);
        assert_eq!(session.result_image(), Some(policy.image_url.as_str()));
        assert!(session.status_text().is_none());
    }

    #[test]
    fn test_regenerate_retains_previous_result_until_replaced() {
        let mut session = loaded_session();
        let first = session.begin_submit().unwrap();
        session.complete_success(first.generation, "https://x/first.png".to_string());

        let second = session.begin_submit().unwrap();
        assert_eq!(second.generation, first.generation);
        assert_eq!(session.phase(), TryOnPhase::Submitting);
        assert_eq!(session.result_image(), Some("https://x/first.png"));

        session.complete_success(second.generation, "https://x/second.png".to_string());
        assert_eq!(session.result_image(), Some("https://x/second.png"));
    }

    #[test]
    fn test_stale_success_is_ignored_after_reset() {
        let mut session = loaded_session();
        let ticket = session.begin_submit().unwrap();

        session.reset();
        session.complete_success(ticket.generation, "https://x/late.png".to_string());

        assert_eq!(session.phase(), TryOnPhase::Idle);
        assert!(session.result_image().is_none());
    }

    #[test]
    fn test_stale_fallback_is_ignored_after_new_upload() {
        let mut session = loaded_session();
        let ticket = session.begin_submit().unwrap();
        session.note_failure(ticket.generation);

        // New photo supersedes the failed attempt mid-fallback-wait
        session.upload_photo(test_photo()).unwrap();
        session.deliver_fallback(ticket.generation, "https://x/fallback.png".to_string());

        assert_eq!(session.phase(), TryOnPhase::PhotoLoaded);
        assert!(session.result_image().is_none());
    }

    #[test]
    fn test_reset_from_every_phase() {
        // Idle
        let mut session = TryOnSession::new();
        session.reset();
        assert_eq!(session.phase(), TryOnPhase::Idle);

        // PhotoLoaded, Submitting, Succeeded, FallbackPending, FallbackDelivered
        for stop_at in ["loaded", "submitting", "succeeded", "pending", "delivered"] {
            let mut session = loaded_session();
            if stop_at != "loaded" {
                let ticket = session.begin_submit().unwrap();
                match stop_at {
                    "succeeded" => {
                        session.complete_success(ticket.generation, "https://x/r.png".to_string())
                    }
                    "pending" => session.note_failure(ticket.generation),
                    "delivered" => {
                        session.note_failure(ticket.generation);
                        session.deliver_fallback(ticket.generation, "https://x/f.png".to_string());
                    }
                    _ => {}
                }
            }

            session.reset();
            assert_eq!(session.phase(), TryOnPhase::Idle, "from {}", stop_at);
            assert!(!session.has_photo(), "from {}", stop_at);
            assert!(session.result_image().is_none(), "from {}", stop_at);
            assert!(session.status_text().is_none(), "from {}", stop_at);
        }
    }

    #[test]
    fn test_toggle_view_is_phase_independent() {
        let mut session = loaded_session();
        let before = session.phase();
        session.toggle_view();
        assert_eq!(session.view_toggle(), ViewToggle::ShowOriginal);
        assert_eq!(session.phase(), before);
        session.toggle_view();
        assert_eq!(session.view_toggle(), ViewToggle::ShowGenerated);
    }

    #[test]
    fn test_milestones_advance_and_freeze() {
        let mut session = loaded_session();
        let ticket = session.begin_submit().unwrap();
        assert_eq!(session.status_text(), Some(STATUS_MILESTONES[0]));

        let mut seen = vec![session.status_text().unwrap().to_string()];
        for _ in 0..STATUS_MILESTONES.len() + 2 {
            assert!(session.advance_status(ticket.generation));
            seen.push(session.status_text().unwrap().to_string());
        }

        // Monotone: each shown milestone's index never decreases
        let index_of = |s: &str| STATUS_MILESTONES.iter().position(|m| *m == s).unwrap();
        let indices: Vec<usize> = seen.iter().map(|s| index_of(s)).collect();
        assert!(indices.windows(2).all(|w| w[0] <= w[1]));
        // Frozen at the last value
        assert_eq!(
            session.status_text(),
            Some(*STATUS_MILESTONES.last().unwrap())
        );

        // Ticker stops once a completion lands
        session.complete_success(ticket.generation, "https://x/r.png".to_string());
        assert!(!session.advance_status(ticket.generation));
    }

    /// Full lifecycle against an unreachable backend: the session must
    /// terminate in FallbackDelivered with a result, never an error state.
    #[tokio::test]
    async fn test_forced_failure_reaches_fallback_within_delay() {
        let service = TryOnService::new("http://127.0.0.1:9".to_string());
        let policy = FallbackPolicy {
            delay: Duration::from_millis(50),
            ..FallbackPolicy::default()
        };

        let mut session = loaded_session();
        let ticket = session.begin_submit().unwrap();

        let outcome = service
            .request_try_on(ticket.user_photo.clone(), test_photo())
            .await;
        assert!(outcome.is_err());

        session.note_failure(ticket.generation);
        tokio::time::sleep(policy.delay).await;
        session.deliver_fallback(ticket.generation, policy.image_url.clone());

        assert_eq!(session.phase(), TryOnPhase::FallbackDelivered);
        assert!(session.result_image().is_some());
    }
}
