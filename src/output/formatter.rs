use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::cli::OutputFormat;
use crate::cnpj;
use crate::counter::LaborReport;
use crate::error::{Result, TrabalhistaError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a labor report
    pub fn format_report(&self, report: &LaborReport) -> Result<String> {
        match self.format {
            OutputFormat::Table => self.format_report_table(report),
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Markdown => self.format_report_markdown(report),
            OutputFormat::Csv => self.format_report_csv(report),
        }
    }

    fn format_report_table(&self, report: &LaborReport) -> Result<String> {
        let mut result = String::new();

        if report.error {
            result.push_str(&format!(
                "\n{} {}\n",
                "❌".red(),
                report.message.as_deref().unwrap_or("Erro").red()
            ));
            return Ok(result);
        }

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Campo").fg(Color::Cyan),
            Cell::new("Valor").fg(Color::Cyan),
        ]);

        table.add_row(vec![Cell::new("CNPJ"), Cell::new(cnpj::format(&report.cnpj))]);
        table.add_row(vec![
            Cell::new("Empresa"),
            Cell::new(truncate_string(report.empresa.as_deref().unwrap_or("-"), 50)),
        ]);
        table.add_row(vec![
            Cell::new("Total de processos"),
            Cell::new(report.total_processos.to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Processos trabalhistas"),
            Cell::new(report.processos_trabalhistas.to_string()).fg(Color::Yellow),
        ]);
        table.add_row(vec![
            Cell::new("Percentual trabalhista"),
            Cell::new(format!("{:.2}%", report.percentual_trabalhista)).fg(Color::Yellow),
        ]);
        table.add_row(vec![
            Cell::new("Consultado em"),
            Cell::new(report.consultado_em.format(TIMESTAMP_FORMAT).to_string()),
        ]);

        table.set_content_arrangement(ContentArrangement::Dynamic);

        result.push_str(&format!(
            "\n{} Total: {} | Trabalhistas: {}\n\n",
            "⚖️".cyan(),
            report.total_processos.to_string().yellow(),
            report.processos_trabalhistas.to_string().yellow()
        ));
        result.push_str(&table.to_string());

        Ok(result)
    }

    fn format_report_json(&self, report: &LaborReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_report_markdown(&self, report: &LaborReport) -> Result<String> {
        let mut result = String::new();
        result.push_str(&format!("# Processos trabalhistas: {}\n\n", cnpj::format(&report.cnpj)));

        if report.error {
            result.push_str(&format!(
                "> **Erro:** {}\n",
                escape_markdown(report.message.as_deref().unwrap_or("-"))
            ));
            return Ok(result);
        }

        result.push_str("| Campo | Valor |\n");
        result.push_str("|-------|-------|\n");
        result.push_str(&format!(
            "| Empresa | {} |\n",
            escape_markdown(report.empresa.as_deref().unwrap_or("-"))
        ));
        result.push_str(&format!("| Total de processos | {} |\n", report.total_processos));
        result.push_str(&format!("| Processos trabalhistas | {} |\n", report.processos_trabalhistas));
        result.push_str(&format!("| Percentual trabalhista | {:.2}% |\n", report.percentual_trabalhista));
        result.push_str(&format!(
            "| Consultado em | {} |\n",
            report.consultado_em.format(TIMESTAMP_FORMAT)
        ));

        Ok(result)
    }

    fn format_report_csv(&self, report: &LaborReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(vec![]);

        writer.write_record([
            "error",
            "message",
            "cnpj",
            "empresa",
            "total_processos",
            "processos_trabalhistas",
            "percentual_trabalhista",
            "consultado_em",
        ])?;

        writer.write_record([
            report.error.to_string(),
            report.message.clone().unwrap_or_default(),
            report.cnpj.clone(),
            report.empresa.clone().unwrap_or_default(),
            report.total_processos.to_string(),
            report.processos_trabalhistas.to_string(),
            format!("{:.2}", report.percentual_trabalhista),
            report.consultado_em.to_rfc3339(),
        ])?;

        let bytes = writer
            .into_inner()
            .map_err(|e| TrabalhistaError::Other(format!("Failed to flush CSV output: {}", e)))?;

        String::from_utf8(bytes).map_err(|e| TrabalhistaError::Parse(e.to_string()))
    }
}

/// Truncate a string to a maximum number of characters, appending "..."
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|")
}
