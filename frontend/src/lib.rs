//! Estado del Arte - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that uploads a scientific article (PDF) to the
//! analysis service and renders the generated literature review with
//! its bibliometric metadata.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Intro (typed welcome + instruction)                     │
//! │  ├── UploadForm (picker, submit, status)                     │
//! │  ├── ResultPanel (review, copy, download)                    │
//! │  └── DetailsSection (metadata, entropy)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Response model and errors
//! - [`state`] - Submission state machine
//! - [`components`] - UI components
//! - [`services`] - Browser and HTTP services

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    AnalysisResponse, AnalysisReport,
    // Details
    BibliometricDetails, DetailField,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{CopyNotice, PageState, Phase, ResultContent};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // One state for the whole upload-and-render flow
    let (state, set_state) = create_signal(PageState::default());

    view! {
        <div class="container">
            <Intro/>
            <UploadForm state=state set_state=set_state/>
            <ResultPanel state=state/>
            <DetailsSection state=state/>
        </div>
    }
}
