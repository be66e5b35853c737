//! # Prompts de Geração
//!
//! Este módulo contém o prompt enviado ao serviço de geração para cada
//! segmento de referência renderizada.

use std::fmt;

use crate::types::Language;

/// Par de prompts (sistema + usuário) para enviar ao LLM
#[derive(Debug, Clone)]
pub struct PromptPair {
    /// Prompt de sistema que define o comportamento do LLM
    pub system: String,
    /// Prompt do usuário com o segmento de referência
    pub user: String,
}

impl PromptPair {
    /// Cria um novo par de prompts
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// Retorna o total de caracteres nos prompts
    pub fn total_chars(&self) -> usize {
        self.system.len() + self.user.len()
    }
}

impl fmt::Display for PromptPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[System: {} chars, User: {} chars]",
            self.system.len(),
            self.user.len()
        )
    }
}

/// Gera o prompt de geração de testes para um segmento de referência.
///
/// A resposta deve ser exatamente um bloco de código cercado na
/// linguagem alvo; qualquer comentário em volta é removido depois por
/// `utils::extract_code_block`.
///
/// # Arguments
/// * `language` - Linguagem alvo inferida da extensão do arquivo
/// * `segment` - Segmento de referência renderizada
pub fn get_test_generation_prompt(language: Language, segment: &str) -> PromptPair {
    let system = format!(
        "You write unit tests from code reference documentation.\n\
         The tests must be complete and directly launchable, never boilerplate or placeholders.\n\
         Answer with exactly one fenced code block in {language}, and nothing else.",
        language = language.display_name()
    );

    let user = format!(
        "Generate test in `{language}` for this: ```{segment}```",
        language = language.display_name(),
        segment = segment
    );

    PromptPair::new(system, user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_segment_and_language() {
        let pair = get_test_generation_prompt(Language::TypeScript, "f (function)");

        assert!(pair.user.contains("Generate test in `TypeScript` for this:"));
        assert!(pair.user.contains("```f (function)```"));
        assert!(pair.system.contains("TypeScript"));
        assert!(pair.system.contains("exactly one fenced code block"));
    }

    #[test]
    fn test_prompt_total_chars() {
        let pair = PromptPair::new("ab", "cde");
        assert_eq!(pair.total_chars(), 5);
    }
}
