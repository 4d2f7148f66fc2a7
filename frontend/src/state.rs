//! Page state for the upload-and-render flow.
//!
//! The whole page is driven by one [`PageState`] held in a Leptos signal.
//! Every transition replaces the regions it touches; nothing is merged
//! with what a previous submission displayed.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──response──▶ Success
//!                      │
//!                      └──error / transport──▶ Failed
//! ```

use crate::config::{
    EMPTY_REVIEW_MESSAGE, ENTROPY_LABEL, STATUS_DONE, STATUS_PROCESSING,
    TRANSPORT_FAILURE_MESSAGE,
};
use crate::services::{markdown_to_text, render_markdown};
use crate::{AnalysisResponse, AppResult, BibliometricDetails};

/// Where the current submission stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// What the result region shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultContent {
    #[default]
    Empty,
    /// Shown as text (messages and errors).
    Plain(String),
    /// A generated review: sanitized HTML and the plain text it shows.
    Markdown { html: String, text: String },
}

impl ResultContent {
    fn markdown(source: &str) -> Self {
        ResultContent::Markdown {
            html: render_markdown(source),
            text: markdown_to_text(source),
        }
    }

    /// Text the user reads, without markup. This is what gets copied.
    pub fn text(&self) -> &str {
        match self {
            ResultContent::Empty => "",
            ResultContent::Plain(text) => text,
            ResultContent::Markdown { text, .. } => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// Everything the upload-and-render flow displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub phase: Phase,
    /// Status label next to the submit trigger.
    pub status: String,
    pub content: ResultContent,
    /// `Some` while the details section is shown.
    pub details: Option<BibliometricDetails>,
    pub entropy: Option<f64>,
    pub download_url: Option<String>,
}

impl PageState {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Enter `Submitting`, clearing everything a previous submission showed.
    ///
    /// Returns `false` (and changes nothing) while a request is in flight.
    pub fn begin_submission(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }

        *self = PageState {
            phase: Phase::Submitting,
            status: STATUS_PROCESSING.to_string(),
            ..PageState::default()
        };
        true
    }

    /// Apply the result of the request issued by [`begin_submission`](Self::begin_submission).
    pub fn finish(&mut self, result: AppResult<AnalysisResponse>) {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                log::error!("Analysis request failed: {}", e);
                self.fail(TRANSPORT_FAILURE_MESSAGE.to_string());
                return;
            }
        };

        let report = match response.into_outcome() {
            Ok(report) => report,
            Err(error) => {
                log::warn!("Analysis service reported an error: {}", error);
                self.fail(format!("Error: {}", error));
                return;
            }
        };

        self.phase = Phase::Success;
        self.status = STATUS_DONE.to_string();
        self.content = match report.review {
            Some(review) => ResultContent::markdown(&review),
            None => ResultContent::Plain(EMPTY_REVIEW_MESSAGE.to_string()),
        };
        self.details = Some(report.details);
        self.entropy = report.entropy;
        self.download_url = report.download_url.filter(|url| !url.is_empty());
        log::info!("Analysis rendered (download: {})", self.download_url.is_some());
    }

    fn fail(&mut self, message: String) {
        self.phase = Phase::Failed;
        self.status.clear();
        self.content = ResultContent::Plain(message);
        self.details = None;
        self.entropy = None;
        self.download_url = None;
    }

    /// Entropy line, or an empty string when the service sent none.
    pub fn entropy_text(&self) -> String {
        self.entropy
            .map(|value| format!("{}: {:.4}", ENTROPY_LABEL, value))
            .unwrap_or_default()
    }

    pub fn download_visible(&self) -> bool {
        self.download_url.is_some()
    }

    /// Text for the copy action; `None` when there is nothing to copy.
    pub fn copy_payload(&self) -> Option<String> {
        if self.content.is_empty() {
            return None;
        }
        Some(self.content.text().to_string())
    }
}

/// Transient "copied" confirmation.
///
/// Each [`show`](Self::show) starts a new generation; a delayed
/// [`expire`](Self::expire) only hides the generation that scheduled it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyNotice {
    visible: bool,
    generation: u64,
}

impl CopyNotice {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the notice and return the generation to expire later.
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.generation
    }

    /// Show the notice after a successful copy.
    ///
    /// A failed copy is only logged; the notice stays as it was.
    pub fn on_copy_result(&mut self, result: AppResult<()>) -> Option<u64> {
        match result {
            Ok(()) => Some(self.show()),
            Err(e) => {
                log::error!("Copy failed: {}", e);
                None
            }
        }
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppError, DetailField};
    use serde_json::{json, Value};

    fn response(value: Value) -> AppResult<AnalysisResponse> {
        Ok(serde_json::from_value(value).unwrap())
    }

    fn submitted() -> PageState {
        let mut state = PageState::default();
        assert!(state.begin_submission());
        state
    }

    fn full_success() -> PageState {
        let mut state = submitted();
        state.finish(response(json!({
            "estado_del_arte": "**Antecedentes del problema**",
            "title": "A title",
            "journal": "A journal",
            "entropia_estado_del_arte": 5.5,
            "word_download_url": "https://example.org/download/estado_arte_0001.docx"
        })));
        state
    }

    #[test]
    fn test_begin_submission_resets_previous_display() {
        let mut state = full_success();
        assert!(state.details.is_some());
        assert!(state.download_visible());

        assert!(state.begin_submission());
        assert_eq!(state.phase, Phase::Submitting);
        assert_eq!(state.status, "Procesando...");
        assert_eq!(state.content, ResultContent::Empty);
        assert_eq!(state.details, None);
        assert_eq!(state.entropy_text(), "");
        assert!(!state.download_visible());
    }

    #[test]
    fn test_second_submission_ignored_while_in_flight() {
        let mut state = submitted();
        let before = state.clone();
        assert!(!state.begin_submission());
        assert_eq!(state, before);

        state.finish(response(json!({"estado_del_arte": "X"})));
        assert!(state.begin_submission());
    }

    #[test]
    fn test_success_with_review_only() {
        let mut state = submitted();
        state.finish(response(json!({"estado_del_arte": "X"})));

        assert_eq!(state.phase, Phase::Success);
        assert_eq!(state.status, "Listo");
        match &state.content {
            ResultContent::Markdown { html, text } => {
                assert_eq!(text, "X");
                assert_eq!(html.trim(), "<p>X</p>");
            }
            other => panic!("expected markdown, got {:?}", other),
        }
        let details = state.details.as_ref().unwrap();
        for field in DetailField::ALL {
            assert_eq!(details.display(field), field.fallback());
        }
        assert_eq!(state.entropy_text(), "");
        assert!(!state.download_visible());
    }

    #[test]
    fn test_application_error() {
        let mut state = submitted();
        state.finish(response(json!({
            "error": "bad pdf",
            "word_download_url": "https://example.org/download/x.docx"
        })));

        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(state.content, ResultContent::Plain("Error: bad pdf".into()));
        assert_eq!(state.status, "");
        assert_eq!(state.details, None);
        assert!(!state.download_visible());
    }

    #[test]
    fn test_application_error_is_verbatim() {
        for error in ["x", "No se pudo extraer texto del PDF.", "  padded  "] {
            let mut state = submitted();
            state.finish(response(json!({ "error": error })));
            assert_eq!(state.content.text(), format!("Error: {}", error));
            assert!(!state.download_visible());
        }
    }

    #[test]
    fn test_transport_failure() {
        let mut state = submitted();
        state.finish(Err(AppError::Network("connection refused".into())));

        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(
            state.content.text(),
            "Error al procesar la solicitud. Intenta nuevamente."
        );
        assert_eq!(state.status, "");
        assert!(!state.download_visible());
    }

    #[test]
    fn test_missing_review_shows_message() {
        let mut state = submitted();
        state.finish(response(json!({"title": "Only metadata"})));

        assert_eq!(
            state.content,
            ResultContent::Plain("No se generó ningún estado del arte.".into())
        );
        assert_eq!(
            state.details.as_ref().unwrap().display(DetailField::Title),
            "Only metadata"
        );
    }

    #[test]
    fn test_entropy_formatting() {
        let cases = [
            (0.123456, "Entropía del estado del arte: 0.1235"),
            (7.0, "Entropía del estado del arte: 7.0000"),
            (0.0, "Entropía del estado del arte: 0.0000"),
            (-1.5, "Entropía del estado del arte: -1.5000"),
        ];
        for (value, expected) in cases {
            let mut state = submitted();
            state.finish(response(json!({ "entropia_estado_del_arte": value })));
            assert_eq!(state.entropy_text(), expected);
        }
    }

    #[test]
    fn test_download_visible_iff_url_present() {
        let mut state = submitted();
        state.finish(response(json!({"word_download_url": ""})));
        assert!(!state.download_visible());

        let mut state = submitted();
        state.finish(response(json!({"word_download_url": "https://example.org/d.docx"})));
        assert!(state.download_visible());
        assert_eq!(state.download_url.as_deref(), Some("https://example.org/d.docx"));
    }

    #[test]
    fn test_copied_text_is_what_the_page_shows() {
        let mut state = submitted();
        state.finish(response(json!({
            "estado_del_arte": "**Antecedentes del problema**\n\n- uno\n- dos"
        })));

        match &state.content {
            ResultContent::Markdown { html, .. } => {
                assert!(html.contains("<strong>Antecedentes del problema</strong>"));
                assert!(html.contains("<li>uno</li>"));
            }
            other => panic!("expected markdown, got {:?}", other),
        }
        assert_eq!(
            state.copy_payload().as_deref(),
            Some("Antecedentes del problema\nuno\ndos")
        );
    }

    #[test]
    fn test_copy_payload_for_messages() {
        let mut state = submitted();
        state.finish(response(json!({ "error": "bad pdf" })));
        assert_eq!(state.copy_payload().as_deref(), Some("Error: bad pdf"));
    }

    #[test]
    fn test_nothing_to_copy() {
        assert_eq!(PageState::default().copy_payload(), None);
        assert_eq!(submitted().copy_payload(), None);
    }

    #[test]
    fn test_download_visible_for_whitespace_url() {
        let mut state = submitted();
        state.finish(response(json!({"word_download_url": " "})));
        assert!(state.download_visible());
    }

    #[test]
    fn test_blank_and_structured_errors_fail() {
        let cases = [
            (json!({"error": "  "}), "Error:   "),
            (json!({"error": {"code": 500}}), r#"Error: {"code":500}"#),
        ];
        for (body, expected) in cases {
            let mut state = submitted();
            state.finish(response(body));
            assert_eq!(state.phase, Phase::Failed);
            assert_eq!(state.content.text(), expected);
            assert_eq!(state.status, "");
            assert_eq!(state.details, None);
        }
    }

    #[test]
    fn test_copy_success_shows_notice() {
        let mut notice = CopyNotice::default();
        let generation = notice.on_copy_result(Ok(()));
        assert!(notice.is_visible());

        notice.expire(generation.unwrap());
        assert!(!notice.is_visible());
    }

    #[test]
    fn test_copy_failure_shows_no_notice() {
        let mut notice = CopyNotice::default();
        let result = notice.on_copy_result(Err(AppError::Clipboard("denied".into())));
        assert_eq!(result, None);
        assert!(!notice.is_visible());
    }

    #[test]
    fn test_copy_notice_hides_after_its_own_delay() {
        let mut notice = CopyNotice::default();
        assert!(!notice.is_visible());

        let first = notice.show();
        assert!(notice.is_visible());
        notice.expire(first);
        assert!(!notice.is_visible());
    }

    #[test]
    fn test_copy_notice_stale_expiry_ignored() {
        let mut notice = CopyNotice::default();
        let first = notice.show();
        let second = notice.show();

        notice.expire(first);
        assert!(notice.is_visible());
        notice.expire(second);
        assert!(!notice.is_visible());
    }
}
