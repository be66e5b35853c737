// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TEXT UTILITIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Utilitários para processamento de texto:
// - Estimativa de tokens
// - Extração do bloco de código da resposta do LLM
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use once_cell::sync::Lazy;
use regex::Regex;

/// Estimativa de tokens por caractere (GPT-4)
const CHARS_PER_TOKEN: f32 = 4.0;

/// Estima número de tokens em um texto
pub fn estimate_tokens(text: &str) -> usize {
    (text.len() as f32 / CHARS_PER_TOKEN).ceil() as usize
}

/// Abertura de fence: tudo até o primeiro ``` inclusive, com tag de
/// linguagem opcional e a quebra de linha que o segue. Ancorado no
/// primeiro match.
static OPENING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^.*?```[\w+#.-]*[ \t]*\r?\n?").unwrap());

/// Extrai o conteúdo interno do bloco de código de uma resposta do LLM.
///
/// O serviço de geração responde com um bloco cercado por fences,
/// frequentemente com comentário antes e/ou depois. Remove tudo até o
/// primeiro fence de abertura (inclusive) e tudo a partir do último
/// fence de fechamento.
///
/// Respostas sem nenhum fence voltam apenas com trim.
///
/// ```
/// use ai_tests::utils::extract_code_block;
///
/// let raw = "Here:\n```typescript\nconst t=1;\n```";
/// assert_eq!(extract_code_block(raw), "const t=1;");
/// ```
pub fn extract_code_block(response: &str) -> String {
    if !response.contains("```") {
        return response.trim().to_string();
    }

    let after_open = match OPENING_FENCE.find(response) {
        Some(open) => &response[open.end()..],
        None => response,
    };

    // Fechamento: último ``` presente no restante
    let inner = match after_open.rfind("```") {
        Some(position) => &after_open[..position],
        None => after_open,
    };

    inner.trim_end().to_string()
}
