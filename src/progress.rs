use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Duration;

/// Progress indicator manager
pub struct ProgressManager {
    enabled: bool,
    verbose: bool,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(quiet: bool, verbose: bool) -> Self {
        // Only enable progress if we're in a terminal and not in quiet mode
        let enabled = !quiet && io::stdout().is_terminal();

        Self { enabled, verbose }
    }

    /// Create a spinner for page fetching
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style.tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Some(pb)
    }

    /// Show a simple message (for verbose mode)
    pub fn show_message(&self, message: &str) {
        if self.verbose && self.enabled {
            eprintln!("🔍 {}", message);
        }
    }

    /// Check if progress is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Spinner tracking the pages of one CNPJ lookup
pub struct PageProgress {
    spinner: Option<ProgressBar>,
    manager: Arc<ProgressManager>,
}

impl PageProgress {
    pub fn new(manager: Arc<ProgressManager>, cnpj: &str) -> Self {
        let spinner = manager.create_spinner(&messages::searching(cnpj));
        Self { spinner, manager }
    }

    /// Report that page `page_no` is being processed
    pub fn set_page(&self, page_no: u32, processed: u64) {
        self.set_message(&messages::page(page_no, processed));
    }

    /// Update the progress message
    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.spinner {
            pb.set_message(message.to_string());
        }
        self.manager.show_message(message);
    }

    /// Finish with a success message
    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.spinner {
            pb.finish_with_message(format!("✅ {}", message));
        }
        self.manager.show_message(&format!("Concluído: {}", message));
    }

    /// Finish and clear the progress
    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.spinner {
            pb.finish_and_clear();
        }
    }
}

impl Drop for PageProgress {
    fn drop(&mut self) {
        if let Some(ref pb) = self.spinner {
            pb.finish_and_clear();
        }
    }
}

/// Progress messages
pub mod messages {
    pub fn searching(cnpj: &str) -> String {
        format!("Buscando processos para o CNPJ {}...", cnpj)
    }

    pub fn page(page_no: u32, processed: u64) -> String {
        format!("Processando página {} ({} processos até agora)...", page_no, processed)
    }

    pub fn finished(total: u64, labor: u64) -> String {
        format!("{} processos, {} trabalhistas", total, labor)
    }
}
