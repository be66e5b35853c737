//! # Ai-Tests - Implementação Rust
//!
//! Este crate implementa o **ai-tests** em Rust, uma ferramenta de linha
//! de comando que gera testes unitários para arquivos fonte a partir de
//! referências de código extraídas por um serviço externo de
//! documentação e de um serviço generativo (LLM).
//!
//! ## Como funciona?
//!
//! Para cada arquivo de entrada, a ferramenta:
//! 1. Carrega o conteúdo do disco
//! 2. Pede ao extrator externo uma referência estruturada (funções,
//!    classes, parâmetros, protótipos)
//! 3. Funde os chunks de arquivos grandes de volta num documento por
//!    arquivo lógico
//! 4. Renderiza a árvore de referências como texto plano indentado
//! 5. Divide o texto em segmentos dentro do orçamento do LLM
//! 6. Pede ao LLM testes para cada segmento, em paralelo
//! 7. Remove os fences das respostas e concatena tudo
//!
//! Toda a lógica local é manipulação de strings e arrays; os dois
//! colaboradores externos ficam atrás de traits e podem ser trocados
//! por mocks nos testes.
//!
//! ## Exemplo de Uso
//!
//! ```rust,ignore
//! use ai_tests::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let generator = TestGenerator::with_defaults(extractor, llm);
//!     generator
//!         .run(&InputSource::File("a.ts".into()), &OutputSink::Stdout, None)
//!         .await
//!         .unwrap();
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Tipos fundamentais compartilhados por todo o sistema.
///
/// Este módulo define as estruturas de dados básicas como:
/// - [`types::FileRecord`]: Arquivo de entrada em memória
/// - [`types::Reference`]: Referência estruturada de um símbolo
/// - [`types::ReferenceResult`]: Entrada de resultado do extrator
/// - [`types::MergedFileReference`]: Documento consolidado por arquivo
/// - [`types::Language`]: Mapa extensão → linguagem do prompt
pub mod types;

/// Configuração do extrator, do LLM e do pipeline.
///
/// Fornece configuração dinâmica via variáveis de ambiente:
///
/// **Extrator:**
/// - `REFERENCE_API_URL`: URL base do serviço de referências
/// - `REFERENCE_API_KEY`: chave de API
/// - `EXTRACTOR_LOG`: verbosidade ("verbose", "quiet")
///
/// **LLM:**
/// - `OPENAI_API_KEY`: chave de API
/// - `LLM_MODEL`: modelo de chat (padrão: "gpt-4.1-mini")
/// - `LLM_API_BASE_URL`: URL base customizada (opcional)
/// - `LLM_TEMPERATURE`: temperatura (padrão: 0.2)
///
/// **Pipeline:**
/// - `SEGMENT_MAX_TOKENS`: orçamento por segmento (padrão: 1000)
/// - `OUTPUT_JSON`: arquivo de saída do modo pasta (padrão: "ai-tests.json")
pub mod config;

/// Cliente do serviço externo de extração de referências.
///
/// Define a trait `ReferenceExtractor` e implementações para:
/// - HTTP (serviço real)
/// - Mock para testes
pub mod extractor;

/// Cliente do serviço generativo que produz os testes.
///
/// Define a trait `GenerationClient` e implementações para:
/// - APIs compatíveis com OpenAI
/// - Mock para testes
pub mod llm;

/// Fusão de chunks de referência por caminho lógico derivado.
///
/// Reconhece a convenção de sufixo `_chunk_<N>` e dobra os fragmentos
/// num acumulador ordenado, um documento por arquivo.
pub mod merge;

/// Prompts enviados ao serviço de geração.
pub mod prompts;

/// Renderização da árvore de referências como texto indentado.
pub mod render;

/// Pipeline compartilhado pelas variantes de linha de comando.
///
/// Um único componente parametrizado por fonte de entrada (arquivo ou
/// pasta) e destino de saída (stdout ou arquivo JSON).
pub mod pipeline;

/// Utilitários diversos.
///
/// Funções auxiliares usadas em todo o sistema:
/// - Carregamento de arquivos e pastas
/// - Segmentação de texto
/// - Extração do bloco de código das respostas
/// - Spinner de terminal
pub mod utils;

// Re-exports principais
pub use config::{
    load_extractor_config, load_generator_config, load_llm_config, ExtractorConfig,
    ExtractorVerbosity, GeneratorConfig, LlmConfig,
};
pub use pipeline::{InputSource, OutputSink, PipelineError, TestGenerator};
pub use types::*;

/// Versão da biblioteca.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude com imports comuns para uso rápido.
///
/// Importar tudo de uma vez:
/// ```rust,ignore
/// use ai_tests::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ExtractorVerbosity, GeneratorConfig, LlmConfig};
    pub use crate::extractor::{HttpReferenceExtractor, MockReferenceExtractor, ReferenceExtractor};
    pub use crate::llm::{GenerationClient, MockGenerationClient, OpenAiClient};
    pub use crate::pipeline::{InputSource, OutputSink, TestGenerator};
    pub use crate::types::*;
}
