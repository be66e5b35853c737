// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SPINNER DE TERMINAL
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner de feedback para o modo arquivo único.
///
/// Desenha em stderr; o resultado gerado segue limpo para stdout.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Inicia o spinner com a mensagem dada.
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Atualiza a mensagem exibida.
    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    /// Finaliza e apaga a linha do spinner.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        // Em ambiente sem TTY o indicatif vira no-op; só garante que o
        // ciclo inteiro não entra em pânico
        let spinner = Spinner::start("processando");
        spinner.set_message("quase lá");
        spinner.finish();
    }
}
