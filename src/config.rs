// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CONFIGURAÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Configuração do extrator, do cliente de geração e do pipeline.
// Todas as configurações podem ser definidas via .env
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::fmt;
use std::path::PathBuf;

/// Verbosidade do extrator de referências.
///
/// Substitui o antigo padrão de silenciar a saída global do processo em
/// volta da chamada ao extrator: o colaborador recebe a preferência
/// explicitamente e decide o que logar, sem estado ambiente mutável.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractorVerbosity {
    /// Loga cada arquivo processado em nível info (padrão).
    #[default]
    Verbose,

    /// Rebaixa os logs do extrator para nível debug.
    Quiet,
}

impl ExtractorVerbosity {
    /// Converte string do .env para ExtractorVerbosity.
    ///
    /// Case-insensitive: "quiet" → Quiet; qualquer outro valor → Verbose.
    pub fn from_env(value: &str) -> Self {
        match value.to_lowercase().trim() {
            "quiet" => Self::Quiet,
            _ => Self::Verbose,
        }
    }

    /// Retorna nome legível para logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Verbose => "Verbose",
            Self::Quiet => "Quiet",
        }
    }
}

impl fmt::Display for ExtractorVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configuração do cliente de geração (LLM).
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Chave de API (`OPENAI_API_KEY`). None quando ausente.
    pub api_key: Option<String>,

    /// Modelo de chat. Padrão: "gpt-4.1-mini"
    pub model: String,

    /// URL base da API. Padrão: "https://api.openai.com/v1"
    pub base_url: String,

    /// Temperatura de geração. Padrão: 0.2
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4.1-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.2,
        }
    }
}

/// Configuração do extrator de referências.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// URL base do serviço de referências. Padrão: "https://api.ai-docs.dev/v1"
    pub api_url: String,

    /// Chave de API (`REFERENCE_API_KEY`). None quando ausente.
    pub api_key: Option<String>,

    /// Verbosidade dos logs do extrator.
    pub verbosity: ExtractorVerbosity,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.ai-docs.dev/v1".to_string(),
            api_key: None,
            verbosity: ExtractorVerbosity::default(),
        }
    }
}

/// Configuração do pipeline de geração de testes.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Orçamento máximo de tokens por segmento enviado ao LLM.
    /// Padrão: 1000
    pub segment_max_tokens: usize,

    /// Arquivo de saída do modo pasta. Padrão: "ai-tests.json"
    pub output_json: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            segment_max_tokens: 1000,
            output_json: PathBuf::from("ai-tests.json"),
        }
    }
}

/// Carrega configuração do LLM a partir das variáveis de ambiente.
///
/// Variáveis suportadas:
/// - `OPENAI_API_KEY`: chave de API
/// - `LLM_MODEL`: modelo de chat (padrão: "gpt-4.1-mini")
/// - `LLM_API_BASE_URL`: URL base customizada (opcional)
/// - `LLM_TEMPERATURE`: temperatura (padrão: 0.2)
pub fn load_llm_config() -> LlmConfig {
    let mut config = LlmConfig::default();

    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            config.api_key = Some(key);
        }
    }

    if let Ok(model) = std::env::var("LLM_MODEL") {
        if !model.is_empty() {
            log::info!("📦 LLM_MODEL={}", model);
            config.model = model;
        }
    }

    if let Ok(base_url) = std::env::var("LLM_API_BASE_URL") {
        if !base_url.is_empty() {
            log::info!("📦 LLM_API_BASE_URL={}", base_url);
            config.base_url = base_url;
        }
    }

    if let Ok(temp_str) = std::env::var("LLM_TEMPERATURE") {
        if let Ok(temp) = temp_str.parse::<f32>() {
            if (0.0..=2.0).contains(&temp) {
                log::info!("📦 LLM_TEMPERATURE={}", temp);
                config.temperature = temp;
            }
        }
    }

    config
}

/// Carrega configuração do extrator a partir das variáveis de ambiente.
///
/// Variáveis suportadas:
/// - `REFERENCE_API_URL`: URL base do serviço de referências
/// - `REFERENCE_API_KEY`: chave de API
/// - `EXTRACTOR_LOG`: verbosidade ("verbose" ou "quiet")
pub fn load_extractor_config() -> ExtractorConfig {
    let mut config = ExtractorConfig::default();

    if let Ok(url) = std::env::var("REFERENCE_API_URL") {
        if !url.is_empty() {
            log::info!("📦 REFERENCE_API_URL={}", url);
            config.api_url = url;
        }
    }

    if let Ok(key) = std::env::var("REFERENCE_API_KEY") {
        if !key.is_empty() {
            config.api_key = Some(key);
        }
    }

    if let Ok(verbosity_str) = std::env::var("EXTRACTOR_LOG") {
        config.verbosity = ExtractorVerbosity::from_env(&verbosity_str);
        log::info!("📦 EXTRACTOR_LOG={}", config.verbosity);
    }

    config
}

/// Carrega configuração do pipeline a partir das variáveis de ambiente.
///
/// Variáveis suportadas:
/// - `SEGMENT_MAX_TOKENS`: orçamento por segmento (padrão: 1000)
/// - `OUTPUT_JSON`: arquivo de saída do modo pasta (padrão: "ai-tests.json")
pub fn load_generator_config() -> GeneratorConfig {
    let mut config = GeneratorConfig::default();

    if let Ok(max_str) = std::env::var("SEGMENT_MAX_TOKENS") {
        if let Ok(max) = max_str.parse::<usize>() {
            if max > 0 {
                log::info!("📦 SEGMENT_MAX_TOKENS={}", max);
                config.segment_max_tokens = max;
            }
        }
    }

    if let Ok(output) = std::env::var("OUTPUT_JSON") {
        if !output.is_empty() {
            log::info!("📦 OUTPUT_JSON={}", output);
            config.output_json = PathBuf::from(output);
        }
    }

    config
}
