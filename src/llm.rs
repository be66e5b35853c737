// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CLIENTE DE GERAÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Trait e implementações para o serviço generativo que produz os testes.
// Suporta qualquer provedor compatível com a API de chat da OpenAI.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::prompts::PromptPair;

/// Erros do cliente de geração
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    ParseError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Empty response from generation service")]
    EmptyResponse,
}

/// Trait principal para clientes de geração
///
/// Define a interface do colaborador generativo: um prompt entra, o
/// texto bruto da resposta sai. A extração do bloco de código fica com
/// o chamador.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Gera texto a partir de um par de prompts
    async fn generate(&self, prompt: &PromptPair) -> Result<String, GenerationError>;
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO MOCK PARA TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Cliente mock para testes unitários
#[derive(Debug, Default)]
pub struct MockGenerationClient {
    /// Resposta fixa devolvida a qualquer prompt
    pub mock_response: Option<String>,
}

impl MockGenerationClient {
    /// Cria um mock com resposta padrão
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um mock com resposta fixa
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            mock_response: Some(response.into()),
        }
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, _prompt: &PromptPair) -> Result<String, GenerationError> {
        Ok(self
            .mock_response
            .clone()
            .unwrap_or_else(|| "```\n// mock test\n```".to_string()))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO OPENAI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Cliente para APIs de chat compatíveis com OpenAI
pub struct OpenAiClient {
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Cria um cliente com os padrões de [`LlmConfig`]
    pub fn new(api_key: String) -> Self {
        let defaults = LlmConfig::default();
        Self {
            api_key,
            model: defaults.model,
            base_url: defaults.base_url,
            temperature: defaults.temperature,
            client: reqwest::Client::new(),
        }
    }

    /// Cria um cliente a partir da configuração carregada do ambiente
    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            api_key: config.api_key.clone().unwrap_or_default(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            temperature: config.temperature,
            client: reqwest::Client::new(),
        }
    }

    /// Substitui o modelo
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl GenerationClient for OpenAiClient {
    async fn generate(&self, prompt: &PromptPair) -> Result<String, GenerationError> {
        log::debug!(
            "[generate] model={} prompt={} chars",
            self.model,
            prompt.total_chars()
        );

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}
