// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SEGMENT - Divisão do Texto de Referência
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Divide o texto renderizado em segmentos dentro do orçamento de tokens
// do serviço de geração. A divisão prefere fronteiras de entrada (blocos
// separados por linha em branco); só desce para linhas e, em último
// caso, caracteres, quando um bloco sozinho estoura o orçamento.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use crate::utils::text::estimate_tokens;

/// Opções de segmentação
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Orçamento máximo de tokens por segmento (default: 1000)
    pub max_tokens: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self { max_tokens: 1000 }
    }
}

impl SegmentOptions {
    /// Cria opções com orçamento customizado
    pub fn with_max_tokens(max_tokens: usize) -> Self {
        Self { max_tokens }
    }
}

/// Divide texto em segmentos dentro do orçamento de tokens.
///
/// Segmentos preservam a ordem original; peças agrupadas num mesmo
/// segmento mantêm o separador pelo qual foram divididas. Texto vazio
/// produz lista vazia.
pub fn segment_text(text: &str, options: &SegmentOptions) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    if estimate_tokens(text) <= options.max_tokens {
        return vec![text.to_string()];
    }

    segment_blocks(text, options.max_tokens)
}

/// Agrupamento guloso de blocos separados por linha em branco.
fn segment_blocks(text: &str, max_tokens: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for block in text.split("\n\n") {
        if estimate_tokens(block) > max_tokens {
            // Bloco sozinho estoura o orçamento: fecha o segmento em
            // andamento e desce para o nível de linhas
            flush(&mut segments, &mut current);
            segments.extend(segment_lines(block, max_tokens));
            continue;
        }

        append_piece(&mut segments, &mut current, block, "\n\n", max_tokens);
    }

    flush(&mut segments, &mut current);
    segments
}

/// Agrupamento guloso de linhas de um bloco grande demais.
fn segment_lines(block: &str, max_tokens: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for line in block.split('\n') {
        if estimate_tokens(line) > max_tokens {
            flush(&mut segments, &mut current);
            segments.extend(split_by_chars(line, max_tokens));
            continue;
        }

        append_piece(&mut segments, &mut current, line, "\n", max_tokens);
    }

    flush(&mut segments, &mut current);
    segments
}

/// Último recurso: fatia por caracteres respeitando boundaries UTF-8
fn split_by_chars(text: &str, max_tokens: usize) -> Vec<String> {
    let max_chars = (max_tokens * 4).max(1);
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for ch in text.chars() {
        if count >= max_chars {
            pieces.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

/// Acrescenta uma peça ao segmento corrente, ou fecha o corrente quando
/// a peça não cabe mais.
fn append_piece(
    segments: &mut Vec<String>,
    current: &mut String,
    piece: &str,
    separator: &str,
    max_tokens: usize,
) {
    if current.is_empty() {
        current.push_str(piece);
        return;
    }

    let candidate_len = current.len() + separator.len() + piece.len();
    if estimate_tokens_for_len(candidate_len) <= max_tokens {
        current.push_str(separator);
        current.push_str(piece);
    } else {
        segments.push(std::mem::take(current));
        current.push_str(piece);
    }
}

fn flush(segments: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        segments.push(std::mem::take(current));
    }
}

fn estimate_tokens_for_len(len: usize) -> usize {
    (len as f32 / 4.0).ceil() as usize
}
