// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FUSÃO DE CHUNKS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// O extrator divide arquivos grandes em chunks numerados, com a convenção
// de sufixo `_chunk_<N>` antes da extensão do caminho original. Este módulo
// reconstrói o caminho lógico e funde os fragmentos de referência de volta
// em um documento por arquivo.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use crate::types::{MergedFileReference, ReferenceResult};

/// Nome decomposto de um caminho possivelmente chunked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedName {
    /// Radical do caminho, sem o sufixo `_chunk_<N>` e sem extensão
    pub stem: String,
    /// Extensão (sem ponto), quando presente
    pub extension: Option<String>,
    /// Índice do chunk (1 quando o caminho não é chunked)
    pub chunk: u32,
}

impl DecomposedName {
    /// Reconstrói o caminho lógico original (`stem.ext`).
    pub fn logical_path(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{}.{}", self.stem, ext),
            None => self.stem.clone(),
        }
    }
}

/// Decompõe um caminho em radical, extensão e índice de chunk.
///
/// O contrato é puramente textual: separa a extensão no último `.`,
/// separa o restante em `_` e reconhece um índice numérico final
/// precedido do componente literal `chunk`. Sem esse marcador, o índice
/// vale 1 e o radical fica inalterado.
///
/// ```
/// use ai_tests::merge::decompose_chunk_name;
///
/// let d = decompose_chunk_name("src/foo_chunk_3.ts");
/// assert_eq!(d.stem, "src/foo");
/// assert_eq!(d.chunk, 3);
/// assert_eq!(d.logical_path(), "src/foo.ts");
/// ```
pub fn decompose_chunk_name(path: &str) -> DecomposedName {
    let (raw_stem, extension) = match path.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext.to_string())),
        None => (path, None),
    };

    let (stem, chunk) = split_chunk_suffix(raw_stem);

    DecomposedName {
        stem,
        extension,
        chunk,
    }
}

/// Separa o sufixo `_chunk_<N>` do radical, se existir.
fn split_chunk_suffix(stem: &str) -> (String, u32) {
    let parts: Vec<&str> = stem.split('_').collect();

    // Exige base não vazia + "chunk" + índice numérico
    if parts.len() >= 3 && parts[parts.len() - 2] == "chunk" {
        if let Ok(index) = parts[parts.len() - 1].parse::<u32>() {
            return (parts[..parts.len() - 2].join("_"), index);
        }
    }

    (stem.to_string(), 1)
}

impl MergedFileReference {
    /// Funde o corpo de mais um chunk neste acumulador.
    ///
    /// Descrições são concatenadas com `\n`; referências e exemplos são
    /// concatenados em ordem de chegada.
    pub fn fold_chunk(&mut self, body: &crate::types::FileReference) {
        self.description.push('\n');
        self.description.push_str(&body.description);
        self.references.extend(body.references.iter().cloned());
        self.examples.extend(body.examples.iter().cloned());
    }
}

/// Funde os resultados do extrator por caminho lógico derivado.
///
/// Entradas com `chunk_total <= 1` (ou ausente) passam inalteradas,
/// chaveadas pelo caminho original. Entradas chunked têm o caminho
/// lógico derivado via [`decompose_chunk_name`] e são dobradas em um
/// acumulador ordenado, num único fold determinístico da esquerda para
/// a direita. A ordem de dobra segue a ordem de retorno do extrator;
/// chunks NÃO são reordenados por índice.
pub fn merge_results(results: &[ReferenceResult]) -> Vec<(String, MergedFileReference)> {
    let mut merged: Vec<(String, MergedFileReference)> = Vec::new();

    for result in results {
        let logical_path = if result.chunk_total.unwrap_or(1) <= 1 {
            result.original_path.clone()
        } else {
            decompose_chunk_name(&result.original_path).logical_path()
        };

        match merged.iter_mut().find(|(path, _)| *path == logical_path) {
            Some((_, accumulator)) => accumulator.fold_chunk(&result.reference_json),
            None => merged.push((
                logical_path,
                MergedFileReference::from(&result.reference_json),
            )),
        }
    }

    merged
}
