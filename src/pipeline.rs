// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PIPELINE DE GERAÇÃO DE TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// O componente único que as três variantes de linha de comando
// compartilham, parametrizado por fonte de entrada (arquivo ou pasta) e
// destino de saída (stdout ou arquivo JSON).
//
// Fluxo do modo arquivo:
//   extrair → fundir chunks → renderizar → segmentar → gerar → montar
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::extractor::{ExtractorError, ProgressFn, ReferenceExtractor};
use crate::llm::{GenerationClient, GenerationError};
use crate::merge::merge_results;
use crate::prompts::get_test_generation_prompt;
use crate::render::render_merged;
use crate::types::{FileRecord, Language};
use crate::utils::{extract_code_block, segment_text, FileLoaderError, SegmentOptions};
use crate::utils::{load_file, load_folder};

/// Erros do pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Falha no carregamento de arquivos.
    #[error(transparent)]
    Loader(#[from] FileLoaderError),

    /// Falha no extrator de referências.
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Falha no serviço de geração.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Falha de serialização do resultado.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Falha de escrita da saída.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// O extrator não devolveu referência para o arquivo pedido.
    #[error("No reference produced for {0}")]
    EmptyReference(String),
}

/// Fonte de entrada do pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Um único arquivo fonte: pipeline completo até o texto de testes
    File(PathBuf),
    /// Uma pasta inteira: extração crua, serializada como JSON
    Folder(PathBuf),
}

/// Destino de saída do pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Imprime em stdout
    Stdout,
    /// Grava no arquivo dado
    File(PathBuf),
}

/// Orquestrador do pipeline de geração de testes.
///
/// Segura os dois colaboradores externos atrás de traits, o que permite
/// rodar o pipeline inteiro contra mocks nos testes.
pub struct TestGenerator {
    extractor: Arc<dyn ReferenceExtractor>,
    llm: Arc<dyn GenerationClient>,
    config: GeneratorConfig,
}

impl TestGenerator {
    /// Cria um gerador com a configuração dada.
    pub fn new(
        extractor: Arc<dyn ReferenceExtractor>,
        llm: Arc<dyn GenerationClient>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            extractor,
            llm,
            config,
        }
    }

    /// Cria um gerador com configuração padrão.
    pub fn with_defaults(
        extractor: Arc<dyn ReferenceExtractor>,
        llm: Arc<dyn GenerationClient>,
    ) -> Self {
        Self::new(extractor, llm, GeneratorConfig::default())
    }

    /// Executa o pipeline da fonte dada até o destino dado.
    ///
    /// Modo pasta: extração de referências de todos os arquivos, saída
    /// JSON crua (pretty) do extrator. Modo arquivo: pipeline completo
    /// até o texto de testes gerado.
    pub async fn run(
        &self,
        source: &InputSource,
        sink: &OutputSink,
        progress: Option<&ProgressFn>,
    ) -> Result<(), PipelineError> {
        let output = match source {
            InputSource::Folder(path) => {
                let files = load_folder(path)?;
                let results = self
                    .extractor
                    .generate_references(&files, progress)
                    .await?;
                serde_json::to_string_pretty(&results)?
            }
            InputSource::File(path) => {
                let record = load_file(path)?;
                self.generate_for_file(&record).await?
            }
        };

        match sink {
            OutputSink::Stdout => println!("{}", output),
            OutputSink::File(path) => {
                std::fs::write(path, output)?;
                log::info!("[run] Resultado gravado em {}", path.display());
            }
        }

        Ok(())
    }

    /// Gera o texto de testes para um único arquivo.
    ///
    /// # Fluxo
    /// 1. Extrai as referências do arquivo
    /// 2. Funde chunks pelo caminho lógico derivado
    /// 3. Renderiza a árvore consolidada como texto indentado
    /// 4. Segmenta o texto pelo orçamento de tokens
    /// 5. Dispara a geração de todos os segmentos de uma vez e espera
    ///    todas terminarem; a primeira falha aborta o lote inteiro
    /// 6. Remove os fences de cada resposta e concatena na ordem
    ///    original dos segmentos
    pub async fn generate_for_file(&self, record: &FileRecord) -> Result<String, PipelineError> {
        let language = Language::from_file_name(&record.name);

        log::info!(
            "[generate_for_file] {} ({}, {} bytes)",
            record.path,
            language,
            record.content.len()
        );

        let results = self
            .extractor
            .generate_references(std::slice::from_ref(record), None)
            .await?;

        let merged = merge_results(&results);
        if merged.is_empty() {
            return Err(PipelineError::EmptyReference(record.path.clone()));
        }

        let rendered = merged
            .iter()
            .map(|(_, document)| render_merged(document))
            .collect::<Vec<_>>()
            .join("\n\n");

        let options = SegmentOptions::with_max_tokens(self.config.segment_max_tokens);
        let segments = segment_text(&rendered, &options);

        log::info!(
            "[generate_for_file] {} segmento(s) de até {} tokens",
            segments.len(),
            self.config.segment_max_tokens
        );

        let calls = segments.iter().map(|segment| {
            let prompt = get_test_generation_prompt(language, segment);
            let llm = Arc::clone(&self.llm);
            async move { llm.generate(&prompt).await }
        });

        let responses = futures::future::try_join_all(calls).await?;

        let assembled = responses
            .iter()
            .map(|response| extract_code_block(response))
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(assembled)
    }
}
