// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// AI-TESTS CLI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// CLI para geração de testes unitários a partir de referências de código.
//
// Uso:
//   ai-tests <arquivo>            (pipeline completo, resultado em stdout)
//   ai-tests --quiet <arquivo>    (idem, sem spinner nem logs de progresso)
//   ai-tests <pasta>              (extração crua de toda a pasta em ai-tests.json)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::path::PathBuf;
use std::sync::Arc;

use ai_tests::config::{self, ExtractorVerbosity};
use ai_tests::extractor::HttpReferenceExtractor;
use ai_tests::llm::OpenAiClient;
use ai_tests::pipeline::{InputSource, OutputSink, TestGenerator};
use ai_tests::types::ReferenceResult;
use ai_tests::utils::Spinner;

/// Opções extraídas da linha de comando
#[derive(Debug, PartialEq, Eq)]
struct CliOptions {
    /// Sem spinner nem eco de progresso
    quiet: bool,
    /// Arquivo ou pasta de entrada
    target: PathBuf,
}

/// Interpreta os argumentos; None significa uso inválido.
fn parse_args(args: &[String]) -> Option<CliOptions> {
    let mut quiet = false;
    let mut target = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--quiet" => quiet = true,
            other if target.is_none() && !other.starts_with('-') => {
                target = Some(PathBuf::from(other));
            }
            _ => return None,
        }
    }

    target.map(|target| CliOptions { quiet, target })
}

/// Tenta carregar o arquivo .env de múltiplos locais possíveis
fn load_dotenv() {
    let possible_paths = [
        // Diretório atual
        PathBuf::from(".env"),
        // Diretório do manifesto (fallback em tempo de compilação)
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".env"),
    ];

    for path in &possible_paths {
        if path.exists() && dotenvy::from_path(path).is_ok() {
            log::debug!("✓ Carregado .env de: {:?}", path);
            return;
        }
    }

    let _ = dotenvy::dotenv();
}

/// Encerra com mensagem amigável quando uma chave de API está ausente.
fn require_key(value: Option<String>, var_name: &str) -> String {
    value.unwrap_or_else(|| {
        eprintln!("✗ Erro: {} não encontrada!", var_name);
        eprintln!();
        eprintln!("Certifique-se de que:");
        eprintln!("  1. O arquivo .env existe no diretório atual");
        eprintln!("  2. O arquivo contém: {}=sua-chave-aqui", var_name);
        eprintln!();
        eprintln!("Ou defina a variável de ambiente diretamente:");
        eprintln!("  export {}=sua-chave-aqui", var_name);
        std::process::exit(1);
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Carregar .env PRIMEIRO, antes de qualquer coisa
    load_dotenv();

    // Inicializar logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse argumentos
    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args) {
        Some(options) => options,
        None => {
            eprintln!("Usage: {} [--quiet] <file|folder>", args[0]);
            std::process::exit(1);
        }
    };

    // Carregar configurações do ambiente
    let mut extractor_config = config::load_extractor_config();
    if options.quiet {
        extractor_config.verbosity = ExtractorVerbosity::Quiet;
    }
    let mut llm_config = config::load_llm_config();
    let generator_config = config::load_generator_config();

    let folder_mode = options.target.is_dir();

    // Chaves de API: o modo pasta só usa o extrator
    extractor_config.api_key = Some(require_key(
        extractor_config.api_key.take(),
        "REFERENCE_API_KEY",
    ));

    if !folder_mode {
        llm_config.api_key = Some(require_key(llm_config.api_key.take(), "OPENAI_API_KEY"));
    }

    let extractor = Arc::new(HttpReferenceExtractor::from_config(&extractor_config));
    let llm = Arc::new(OpenAiClient::from_config(&llm_config));

    let generator = TestGenerator::new(extractor, llm, generator_config.clone());

    if folder_mode {
        // Eco de progresso: um caminho original por linha
        let progress = |result: &ReferenceResult| println!("{}", result.original_path);
        let progress_ref: Option<&(dyn Fn(&ReferenceResult) + Send + Sync)> = if options.quiet {
            None
        } else {
            Some(&progress)
        };

        generator
            .run(
                &InputSource::Folder(options.target.clone()),
                &OutputSink::File(generator_config.output_json.clone()),
                progress_ref,
            )
            .await?;

        if !options.quiet {
            eprintln!(
                "✓ Referências gravadas em {}",
                generator_config.output_json.display()
            );
        }
        return Ok(());
    }

    // Modo arquivo único
    let spinner = if options.quiet {
        None
    } else {
        Some(Spinner::start(format!(
            "Gerando testes para {}...",
            options.target.display()
        )))
    };

    let result = generator
        .run(
            &InputSource::File(options.target.clone()),
            &OutputSink::Stdout,
            None,
        )
        .await;

    if let Some(spinner) = spinner {
        spinner.finish();
    }

    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_missing_target() {
        assert_eq!(parse_args(&args(&["ai-tests"])), None);
        assert_eq!(parse_args(&args(&["ai-tests", "--quiet"])), None);
    }

    #[test]
    fn test_parse_args_file() {
        let options = parse_args(&args(&["ai-tests", "a.ts"])).unwrap();
        assert!(!options.quiet);
        assert_eq!(options.target, PathBuf::from("a.ts"));
    }

    #[test]
    fn test_parse_args_quiet_any_position() {
        let options = parse_args(&args(&["ai-tests", "--quiet", "a.ts"])).unwrap();
        assert!(options.quiet);

        let options = parse_args(&args(&["ai-tests", "a.ts", "--quiet"])).unwrap();
        assert!(options.quiet);
        assert_eq!(options.target, PathBuf::from("a.ts"));
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag_and_extra_positional() {
        assert_eq!(parse_args(&args(&["ai-tests", "--verbose", "a.ts"])), None);
        assert_eq!(parse_args(&args(&["ai-tests", "a.ts", "b.ts"])), None);
    }
}
