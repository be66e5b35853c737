//! # Testes de Integração
//!
//! Este módulo contém testes de integração que validam o fluxo completo
//! do sistema contra colaboradores mock:
//! - Arquivo → Extração → Renderização → Geração: pipeline de ponta a ponta
//! - Chunks → Fusão: arquivos grandes reconstituídos por caminho lógico
//! - Pasta → JSON: extração crua com eco de progresso
//! - Falhas: erro de um colaborador aborta o lote inteiro

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ai_tests::extractor::MockReferenceExtractor;
use ai_tests::llm::{GenerationClient, GenerationError, MockGenerationClient};
use ai_tests::pipeline::{InputSource, OutputSink, PipelineError, TestGenerator};
use ai_tests::prompts::PromptPair;
use ai_tests::types::{
    FileRecord, FileReference, ParameterRef, Reference, ReferenceResult, ReturnRef,
};

/// Cliente de geração que grava cada prompt recebido
#[derive(Default)]
struct RecordingClient {
    prompts: Mutex<Vec<String>>,
    response: String,
}

impl RecordingClient {
    fn new(response: &str) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            response: response.to_string(),
        }
    }
}

#[async_trait]
impl GenerationClient for RecordingClient {
    async fn generate(&self, prompt: &PromptPair) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.user.clone());
        Ok(self.response.clone())
    }
}

/// Cliente de geração que sempre falha
struct FailingClient;

#[async_trait]
impl GenerationClient for FailingClient {
    async fn generate(&self, _prompt: &PromptPair) -> Result<String, GenerationError> {
        Err(GenerationError::ApiError("service unavailable".into()))
    }
}

fn file_record(name: &str, content: &str) -> FileRecord {
    FileRecord {
        path: name.to_string(),
        name: name.to_string(),
        content: content.to_string(),
    }
}

fn chunk_result(path: &str, total: u32, index: u32, desc: &str, symbol: &str) -> ReferenceResult {
    ReferenceResult {
        original_path: path.to_string(),
        chunk_total: Some(total),
        chunk: Some(index),
        reference_json: FileReference {
            description: desc.to_string(),
            references: vec![Reference::new(symbol, "function")],
            examples: vec![],
        },
    }
}

// ============================================================================
// TESTE 1: Pipeline de ponta a ponta
// Cenário do arquivo único: uma referência sem chunking vira exatamente o
// conteúdo interno do bloco de código da resposta
// ============================================================================

#[tokio::test]
async fn test_single_file_pipeline_end_to_end() {
    let reference = Reference {
        parameters: Some(vec![ParameterRef {
            name: "x".into(),
            param_type: "number".into(),
        }]),
        returns: Some(ReturnRef {
            return_type: "void".into(),
        }),
        ..Reference::new("f", "function")
    };

    let extractor = Arc::new(MockReferenceExtractor::with_results(vec![ReferenceResult {
        original_path: "a.ts".into(),
        chunk_total: None,
        chunk: None,
        reference_json: FileReference {
            description: String::new(),
            references: vec![reference],
            examples: vec![],
        },
    }]));

    let llm = Arc::new(RecordingClient::new("Here:\n```typescript\nconst t=1;\n```"));
    let generator = TestGenerator::with_defaults(extractor, Arc::clone(&llm) as Arc<dyn GenerationClient>);

    let output = generator
        .generate_for_file(&file_record("a.ts", "export function f(x: number) {}"))
        .await
        .unwrap();

    // A resposta perde o comentário e os fences
    assert_eq!(output, "const t=1;");

    // O texto renderizado foi para o prompt num único segmento
    let prompts = llm.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Generate test in `TypeScript` for this:"));
    assert!(prompts[0].contains("f (function)\n\tParams:\n\t\tx (number)\n\tReturns: void"));

    println!("✅ test_single_file_pipeline_end_to_end PASSED");
}

// ============================================================================
// TESTE 2: Chunks → Fusão
// Dois chunks do mesmo arquivo lógico entram num único documento, na
// ordem de retorno do extrator
// ============================================================================

#[tokio::test]
async fn test_chunked_file_merged_before_rendering() {
    let extractor = Arc::new(MockReferenceExtractor::with_results(vec![
        chunk_result("big_chunk_1.ts", 2, 1, "primeira metade", "alpha"),
        chunk_result("big_chunk_2.ts", 2, 2, "segunda metade", "beta"),
    ]));

    let llm = Arc::new(RecordingClient::new("```typescript\nok\n```"));
    let generator = TestGenerator::with_defaults(extractor, Arc::clone(&llm) as Arc<dyn GenerationClient>);

    let output = generator
        .generate_for_file(&file_record("big.ts", "..."))
        .await
        .unwrap();
    assert_eq!(output, "ok");

    let prompts = llm.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1, "documento fundido cabe num segmento");

    // Descrições e símbolos dos dois chunks, na ordem de chegada
    let prompt = &prompts[0];
    assert!(prompt.contains("primeira metade\nsegunda metade"));
    let alpha_at = prompt.find("alpha (function)").unwrap();
    let beta_at = prompt.find("beta (function)").unwrap();
    assert!(alpha_at < beta_at);

    println!("✅ test_chunked_file_merged_before_rendering PASSED");
}

// ============================================================================
// TESTE 3: Pasta → JSON
// O modo pasta grava a saída crua do extrator como JSON pretty e ecoa
// cada caminho original pelo callback de progresso
// ============================================================================

#[tokio::test]
async fn test_folder_mode_writes_raw_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("one.ts"), "const a = 1;").unwrap();
    std::fs::write(dir.path().join("two.ts"), "const b = 2;").unwrap();

    let results = vec![
        ReferenceResult {
            original_path: "one.ts".into(),
            chunk_total: None,
            chunk: None,
            reference_json: FileReference {
                description: "um".into(),
                references: vec![Reference::new("a", "constant")],
                examples: vec![],
            },
        },
        ReferenceResult {
            original_path: "two.ts".into(),
            chunk_total: None,
            chunk: None,
            reference_json: FileReference {
                description: "dois".into(),
                references: vec![],
                examples: vec![],
            },
        },
    ];

    let extractor = Arc::new(MockReferenceExtractor::with_results(results.clone()));
    let llm = Arc::new(MockGenerationClient::new());
    let generator = TestGenerator::with_defaults(extractor, llm);

    let output_path = dir.path().join("ai-tests.json");
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_cb = Arc::clone(&seen);
    let progress = move |result: &ReferenceResult| {
        seen_cb.lock().unwrap().push(result.original_path.clone());
    };

    generator
        .run(
            &InputSource::Folder(dir.path().to_path_buf()),
            &OutputSink::File(output_path.clone()),
            Some(&progress),
        )
        .await
        .unwrap();

    // Progresso ecoou cada caminho, na ordem
    assert_eq!(*seen.lock().unwrap(), vec!["one.ts", "two.ts"]);

    // O JSON gravado é a saída crua do extrator
    let written = std::fs::read_to_string(&output_path).unwrap();
    let parsed: Vec<ReferenceResult> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, results);
    assert!(written.contains("\n"), "saída deve ser pretty-printed");

    println!("✅ test_folder_mode_writes_raw_json PASSED");
}

// ============================================================================
// TESTE 4: Falha aborta o lote
// Um erro do serviço de geração propaga e nenhum resultado parcial sobra
// ============================================================================

#[tokio::test]
async fn test_generation_failure_aborts_batch() {
    let extractor = Arc::new(MockReferenceExtractor::with_results(vec![ReferenceResult {
        original_path: "a.ts".into(),
        chunk_total: None,
        chunk: None,
        reference_json: FileReference {
            description: "doc".into(),
            references: vec![Reference::new("f", "function")],
            examples: vec![],
        },
    }]));

    let generator = TestGenerator::with_defaults(extractor, Arc::new(FailingClient));

    let result = generator
        .generate_for_file(&file_record("a.ts", "..."))
        .await;

    assert!(matches!(result, Err(PipelineError::Generation(_))));

    println!("✅ test_generation_failure_aborts_batch PASSED");
}

// ============================================================================
// TESTE 5: Arquivo inexistente
// O carregador rejeita a fonte antes de qualquer chamada externa
// ============================================================================

#[tokio::test]
async fn test_missing_file_fails_before_extraction() {
    let extractor = Arc::new(MockReferenceExtractor::new());
    let llm = Arc::new(MockGenerationClient::new());
    let generator = TestGenerator::with_defaults(extractor, llm);

    let result = generator
        .run(
            &InputSource::File(PathBuf::from("/nonexistent/missing.ts")),
            &OutputSink::Stdout,
            None,
        )
        .await;

    assert!(matches!(result, Err(PipelineError::Loader(_))));

    println!("✅ test_missing_file_fails_before_extraction PASSED");
}
