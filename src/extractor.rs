// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EXTRATOR DE REFERÊNCIAS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Trait e implementações para o serviço externo de documentação que
// transforma arquivos fonte em referências estruturadas. Arquivos
// grandes voltam divididos em chunks numerados (ver merge.rs).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::Serialize;

use crate::config::{ExtractorConfig, ExtractorVerbosity};
use crate::types::{FileRecord, ReferenceResult};

/// Erros do extrator de referências
#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("Reference API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response format: {0}")]
    ParseError(String),
}

/// Callback de progresso invocado uma vez por resultado processado.
pub type ProgressFn = dyn Fn(&ReferenceResult) + Send + Sync;

/// Trait principal para o extrator de referências
///
/// Define a interface do colaborador de documentação. Permite fácil
/// substituição entre o serviço real e o mock de testes.
#[async_trait]
pub trait ReferenceExtractor: Send + Sync {
    /// Gera referências estruturadas para cada arquivo dado.
    ///
    /// O callback de progresso, quando presente, é invocado uma vez por
    /// entrada retornada, na ordem de retorno do serviço.
    async fn generate_references(
        &self,
        files: &[FileRecord],
        progress: Option<&ProgressFn>,
    ) -> Result<Vec<ReferenceResult>, ExtractorError>;
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO MOCK PARA TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Extrator mock para testes unitários
#[derive(Debug, Default)]
pub struct MockReferenceExtractor {
    /// Resultados devolvidos a qualquer chamada
    pub mock_results: Vec<ReferenceResult>,
}

impl MockReferenceExtractor {
    /// Cria um mock vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um mock com resultados fixos
    pub fn with_results(results: Vec<ReferenceResult>) -> Self {
        Self {
            mock_results: results,
        }
    }
}

#[async_trait]
impl ReferenceExtractor for MockReferenceExtractor {
    async fn generate_references(
        &self,
        _files: &[FileRecord],
        progress: Option<&ProgressFn>,
    ) -> Result<Vec<ReferenceResult>, ExtractorError> {
        if let Some(callback) = progress {
            for result in &self.mock_results {
                callback(result);
            }
        }
        Ok(self.mock_results.clone())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO HTTP
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Corpo da requisição de extração
#[derive(Debug, Serialize)]
struct ReferenceRequest<'a> {
    files: &'a [FileRecord],
}

/// Cliente HTTP para o serviço de referências.
///
/// A verbosidade é recebida explicitamente na construção: o cliente
/// decide o nível dos próprios logs, sem tocar em nenhum estado global
/// de saída do processo.
pub struct HttpReferenceExtractor {
    api_url: String,
    api_key: String,
    verbosity: ExtractorVerbosity,
    client: reqwest::Client,
}

impl HttpReferenceExtractor {
    /// Cria um cliente com verbosidade padrão.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            verbosity: ExtractorVerbosity::default(),
            client: reqwest::Client::new(),
        }
    }

    /// Cria um cliente a partir da configuração carregada do ambiente.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            verbosity: config.verbosity,
            client: reqwest::Client::new(),
        }
    }

    /// Define a verbosidade dos logs deste cliente.
    pub fn with_verbosity(mut self, verbosity: ExtractorVerbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn log(&self, message: &str) {
        match self.verbosity {
            ExtractorVerbosity::Verbose => log::info!("{}", message),
            ExtractorVerbosity::Quiet => log::debug!("{}", message),
        }
    }
}

#[async_trait]
impl ReferenceExtractor for HttpReferenceExtractor {
    async fn generate_references(
        &self,
        files: &[FileRecord],
        progress: Option<&ProgressFn>,
    ) -> Result<Vec<ReferenceResult>, ExtractorError> {
        self.log(&format!(
            "[generate_references] Enviando {} arquivo(s) para {}",
            files.len(),
            self.api_url
        ));

        let response = self
            .client
            .post(format!("{}/reference", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&ReferenceRequest { files })
            .send()
            .await
            .map_err(|e| ExtractorError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractorError::ApiError(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let results: Vec<ReferenceResult> = response
            .json()
            .await
            .map_err(|e| ExtractorError::ParseError(e.to_string()))?;

        self.log(&format!(
            "[generate_references] {} resultado(s) recebido(s)",
            results.len()
        ));

        if let Some(callback) = progress {
            for result in &results {
                callback(result);
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileReference;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_result(path: &str) -> ReferenceResult {
        ReferenceResult {
            original_path: path.to_string(),
            chunk_total: None,
            chunk: None,
            reference_json: FileReference::default(),
        }
    }

    #[tokio::test]
    async fn test_mock_returns_results() {
        let extractor =
            MockReferenceExtractor::with_results(vec![sample_result("a.ts"), sample_result("b.ts")]);

        let results = extractor.generate_references(&[], None).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].original_path, "a.ts");
    }

    #[tokio::test]
    async fn test_mock_invokes_progress_per_result() {
        let extractor =
            MockReferenceExtractor::with_results(vec![sample_result("a.ts"), sample_result("b.ts")]);

        let seen = std::sync::Arc::new(AtomicUsize::new(0));
        let seen_cb = std::sync::Arc::clone(&seen);
        let callback = move |_: &ReferenceResult| {
            seen_cb.fetch_add(1, Ordering::SeqCst);
        };

        extractor
            .generate_references(&[], Some(&callback))
            .await
            .unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_http_extractor_builder() {
        let extractor = HttpReferenceExtractor::new("https://api.test", "key")
            .with_verbosity(ExtractorVerbosity::Quiet);
        assert_eq!(extractor.verbosity, ExtractorVerbosity::Quiet);
        assert_eq!(extractor.api_url, "https://api.test");
    }

    #[test]
    fn test_extractor_error_display() {
        let err = ExtractorError::ApiError("boom".into());
        assert!(err.to_string().contains("Reference API error"));

        let err = ExtractorError::ParseError("bad json".into());
        assert!(err.to_string().contains("Invalid response format"));
    }
}
