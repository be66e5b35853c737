// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CARREGAMENTO DE ARQUIVOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Carrega um arquivo ou uma pasta inteira em registros FileRecord.
// Leitura one-shot no início da invocação; nada fica aberto depois.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::path::Path;

use thiserror::Error;
use walkdir::WalkDir;

use crate::types::FileRecord;

/// Erros de carregamento de arquivos
#[derive(Debug, Error)]
pub enum FileLoaderError {
    /// Erro de entrada/saída do sistema de arquivos.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// O caminho dado não é um arquivo regular.
    #[error("Not a file: {0}")]
    NotAFile(String),

    /// O caminho dado não é uma pasta.
    #[error("Not a folder: {0}")]
    NotAFolder(String),

    /// Erro ao percorrer a pasta.
    #[error("Walk error: {0}")]
    WalkError(#[from] walkdir::Error),
}

/// Lê um único arquivo do disco para um [`FileRecord`].
pub fn load_file(path: &Path) -> Result<FileRecord, FileLoaderError> {
    if !path.is_file() {
        return Err(FileLoaderError::NotAFile(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    log::debug!("[load_file] {} ({} bytes)", path.display(), content.len());

    Ok(FileRecord {
        path: path.display().to_string(),
        name,
        content,
    })
}

/// Lê todos os arquivos regulares sob uma pasta, em ordem determinística
/// de caminho.
///
/// Entradas ocultas (prefixo `.`) são ignoradas, assim como qualquer
/// coisa que não seja arquivo regular.
pub fn load_folder(root: &Path) -> Result<Vec<FileRecord>, FileLoaderError> {
    if !root.is_dir() {
        return Err(FileLoaderError::NotAFolder(root.display().to_string()));
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let content = std::fs::read_to_string(path)?;
        let relative = path.strip_prefix(root).unwrap_or(path);

        records.push(FileRecord {
            path: relative.display().to_string(),
            name: entry.file_name().to_string_lossy().into_owned(),
            content,
        });
    }

    log::info!(
        "[load_folder] {} arquivos carregados de {}",
        records.len(),
        root.display()
    );

    Ok(records)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}
