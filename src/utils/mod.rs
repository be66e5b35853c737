// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// UTILITÁRIOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Utilitários compartilhados pelo pipeline:
// - Carregamento de arquivos e pastas
// - Segmentação de texto por orçamento de tokens
// - Processamento de texto (tokens, extração de bloco de código)
// - Spinner de terminal
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Carregamento de arquivos e pastas em registros em memória.
pub mod file_loader;
/// Segmentação do texto renderizado por orçamento de tokens.
pub mod segment;
mod spinner;
mod text;

pub use file_loader::{load_file, load_folder, FileLoaderError};
pub use segment::{segment_text, SegmentOptions};
pub use spinner::Spinner;
pub use text::{estimate_tokens, extract_code_block};
