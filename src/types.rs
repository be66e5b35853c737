// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TIPOS COMPARTILHADOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

/// Arquivo de entrada carregado em memória.
///
/// Existe apenas durante uma invocação; nenhum identificador é
/// reutilizado entre execuções.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Caminho do arquivo (relativo à raiz processada)
    pub path: String,
    /// Nome do arquivo (com extensão)
    pub name: String,
    /// Conteúdo completo em UTF-8
    pub content: String,
}

/// Linguagens suportadas para geração de testes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    TypeScript,
    JavaScript,
    Rust,
    Python,
    Go,
    Java,
    Kotlin,
    Swift,
    C,
    Cpp,
    CSharp,
    Ruby,
    Php,
    Scala,
    Elixir,
    Dart,
    Lua,
    Shell,
    /// Extensão não mapeada
    Other,
}

impl Default for Language {
    fn default() -> Self {
        Self::Other
    }
}

impl Language {
    /// Infere a linguagem a partir da extensão (minúscula, sem ponto).
    ///
    /// Extensões não mapeadas retornam [`Language::Other`].
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "ts" | "tsx" | "mts" => Self::TypeScript,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "rs" => Self::Rust,
            "py" => Self::Python,
            "go" => Self::Go,
            "java" => Self::Java,
            "kt" | "kts" => Self::Kotlin,
            "swift" => Self::Swift,
            "c" | "h" => Self::C,
            "cpp" | "cc" | "hpp" => Self::Cpp,
            "cs" => Self::CSharp,
            "rb" => Self::Ruby,
            "php" => Self::Php,
            "scala" => Self::Scala,
            "ex" | "exs" => Self::Elixir,
            "dart" => Self::Dart,
            "lua" => Self::Lua,
            "sh" | "bash" => Self::Shell,
            _ => Self::Other,
        }
    }

    /// Infere a linguagem a partir de um nome de arquivo.
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Self::Other,
        }
    }

    /// Nome legível usado no prompt de geração
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
            Self::Rust => "Rust",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
            Self::Swift => "Swift",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Ruby => "Ruby",
            Self::Php => "PHP",
            Self::Scala => "Scala",
            Self::Elixir => "Elixir",
            Self::Dart => "Dart",
            Self::Lua => "Lua",
            Self::Shell => "Shell",
            Self::Other => "the same language as the source",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parâmetro de uma referência de símbolo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRef {
    /// Nome do parâmetro
    pub name: String,
    /// Tipo declarado
    #[serde(rename = "type")]
    pub param_type: String,
}

/// Tipo de retorno de uma referência de símbolo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRef {
    /// Tipo declarado
    #[serde(rename = "type")]
    pub return_type: String,
}

/// Descrição estruturada de um símbolo de código (função, classe, etc.)
/// produzida pelo extrator de referências.
///
/// Forma de árvore via `subreferences` (métodos de uma classe, por
/// exemplo). Campos opcionais ausentes no JSON são desserializados
/// como `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Nome do símbolo
    pub name: String,
    /// Categoria ("function", "class", "method"...)
    pub category: String,
    /// Descrição em linguagem natural
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Protótipo/assinatura
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prototype: Option<String>,
    /// Lista de parâmetros
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterRef>>,
    /// Tipo de retorno
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnRef>,
    /// Símbolos aninhados
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subreferences: Option<Vec<Reference>>,
}

impl Reference {
    /// Cria uma referência mínima (apenas nome e categoria)
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: None,
            prototype: None,
            parameters: None,
            returns: None,
            subreferences: None,
        }
    }
}

/// Corpo de referência de um arquivo, como retornado pelo extrator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileReference {
    /// Descrição geral do arquivo
    #[serde(default)]
    pub description: String,
    /// Referências dos símbolos do arquivo
    #[serde(default)]
    pub references: Vec<Reference>,
    /// Exemplos de uso
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Uma entrada de resultado do extrator, possivelmente um chunk de um
/// arquivo maior.
///
/// `chunk`/`chunk_total` são contabilidade transitória de merge: somem
/// após a fusão em [`MergedFileReference`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceResult {
    /// Caminho original reportado pelo extrator (pode conter sufixo
    /// `_chunk_<N>` antes da extensão)
    #[serde(rename = "originalPath")]
    pub original_path: String,
    /// Total de chunks do arquivo lógico (1 ou ausente = sem chunking)
    #[serde(rename = "chunkTotal", default, skip_serializing_if = "Option::is_none")]
    pub chunk_total: Option<u32>,
    /// Índice deste chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk: Option<u32>,
    /// Referência estruturada deste chunk
    pub reference_json: FileReference,
}

/// Referência consolidada de um arquivo lógico, após fusão de todos os
/// chunks que compartilham o mesmo caminho derivado.
///
/// Invariante: existe exatamente um registro por caminho lógico antes
/// da formatação.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedFileReference {
    /// Descrições concatenadas (separador `\n`, ordem de chegada)
    pub description: String,
    /// Referências concatenadas em ordem de chegada
    pub references: Vec<Reference>,
    /// Exemplos concatenados em ordem de chegada
    pub examples: Vec<String>,
}

impl From<&FileReference> for MergedFileReference {
    fn from(body: &FileReference) -> Self {
        Self {
            description: body.description.clone(),
            references: body.references.clone(),
            examples: body.examples.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("ts"), Language::TypeScript);
        assert_eq!(Language::from_extension("TS"), Language::TypeScript);
        assert_eq!(Language::from_extension("rs"), Language::Rust);
        assert_eq!(Language::from_extension("py"), Language::Python);
        assert_eq!(Language::from_extension("xyz"), Language::Other);
    }

    #[test]
    fn test_language_from_file_name() {
        assert_eq!(Language::from_file_name("a.ts"), Language::TypeScript);
        assert_eq!(Language::from_file_name("mod.tar.gz"), Language::Other);
        assert_eq!(Language::from_file_name("Makefile"), Language::Other);
    }

    #[test]
    fn test_language_display_name() {
        assert_eq!(Language::TypeScript.display_name(), "TypeScript");
        assert_eq!(Language::Cpp.display_name(), "C++");
        assert_eq!(Language::CSharp.display_name(), "C#");
    }

    #[test]
    fn test_reference_result_wire_format() {
        let json = r#"{
            "originalPath": "src/a_chunk_2.ts",
            "chunkTotal": 3,
            "chunk": 2,
            "reference_json": {
                "description": "parte 2",
                "references": [{"name": "f", "category": "function"}],
                "examples": []
            }
        }"#;

        let result: ReferenceResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.original_path, "src/a_chunk_2.ts");
        assert_eq!(result.chunk_total, Some(3));
        assert_eq!(result.chunk, Some(2));
        assert_eq!(result.reference_json.references.len(), 1);
        assert_eq!(result.reference_json.references[0].name, "f");
    }

    #[test]
    fn test_reference_optional_fields_default() {
        let json = r#"{"name": "g", "category": "class"}"#;
        let re: Reference = serde_json::from_str(json).unwrap();
        assert!(re.description.is_none());
        assert!(re.parameters.is_none());
        assert!(re.subreferences.is_none());
    }

    #[test]
    fn test_unchunked_result_without_bookkeeping() {
        let json = r#"{
            "originalPath": "b.py",
            "reference_json": {"description": "", "references": [], "examples": []}
        }"#;
        let result: ReferenceResult = serde_json::from_str(json).unwrap();
        assert!(result.chunk_total.is_none());
        assert!(result.chunk.is_none());
    }
}
