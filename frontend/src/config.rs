//! Application configuration.
//!
//! Centralized configuration for the Estado del Arte frontend.
//! Everything is compiled in: the page has no runtime config source.

// =============================================================================
// Remote analysis API
// =============================================================================

/// Analysis endpoint.
///
/// Receives the PDF as multipart form data (part `file`) and answers with
/// an [`AnalysisResponse`](crate::AnalysisResponse) JSON body.
pub const API_URL: &str = "https://jofech20-github-io.onrender.com/upload_pdf";

/// Name of the multipart part carrying the PDF.
pub const UPLOAD_FIELD: &str = "file";

// =============================================================================
// Intro animation
// =============================================================================

/// First line typed on page load.
pub const WELCOME_MESSAGE: &str = "¿En qué puedo ayudarte?";

/// Second line, typed once the welcome line is complete.
pub const INSTRUCTION_MESSAGE: &str =
    "Adjuntar el artículo científico del cual se desea obtener el estado del arte.";

/// Delay between two characters of the welcome line (ms).
pub const WELCOME_TICK_MS: u32 = 100;

/// Delay between two characters of the instruction line (ms).
pub const INSTRUCTION_TICK_MS: u32 = 50;

// =============================================================================
// Copy notice
// =============================================================================

/// How long the "copied" confirmation stays visible (ms).
pub const COPY_NOTICE_MS: u32 = 2_000;

// =============================================================================
// User-facing strings
// =============================================================================

pub const PAGE_TITLE: &str = "Estado del Arte";
pub const NO_FILE_SELECTED: &str = "No se ha seleccionado ningún archivo";
pub const STATUS_PROCESSING: &str = "Procesando...";
pub const STATUS_DONE: &str = "Listo";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Error al procesar la solicitud. Intenta nuevamente.";
pub const EMPTY_REVIEW_MESSAGE: &str = "No se generó ningún estado del arte.";
pub const ENTROPY_LABEL: &str = "Entropía del estado del arte";
pub const COPY_NOTICE: &str = "¡Texto copiado al portapapeles!";
pub const SUBMIT_LABEL: &str = "Generar estado del arte";
pub const COPY_LABEL: &str = "Copiar texto";
pub const DOWNLOAD_LABEL: &str = "Descargar Word";
pub const DETAILS_HEADING: &str = "Detalles del artículo";
