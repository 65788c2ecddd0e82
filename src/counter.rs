//! Walks every page of proceedings for a CNPJ and counts the labor ones.

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ProceedingsApi;
use crate::cnpj;
use crate::error::{Result, TrabalhistaError};
use crate::lookup;
use crate::progress::PageProgress;

/// Practice area counted as labor
pub const LABOR_AREA: &str = "TRABALHISTA";

/// Area assumed when a proceeding carries none
pub const UNKNOWN_AREA: &str = "unknown";

/// Message attached to failed reports
pub const REPORT_ERROR_MESSAGE: &str = "Erro ao processar a contagem de processos trabalhistas";

/// Only the first listed source is consulted
const AREA_PATH: &str = "fontes.0.area";

/// Whether an area string names the labor practice area (trimmed, case-insensitive)
pub fn is_labor_area(area: &str) -> bool {
    area.trim().to_uppercase() == LABOR_AREA
}

/// Practice area of a proceeding's first source, or [`UNKNOWN_AREA`]
pub fn proceeding_area(record: &Value) -> &str {
    lookup::get_str_or(record, AREA_PATH, UNKNOWN_AREA)
}

/// Share of labor proceedings in percent, `0.0` when there are none at all
pub fn labor_percentage(labor: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        labor as f64 / total as f64 * 100.0
    }
}

/// Running counts for one CNPJ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaborTally {
    /// Proceedings seen across all pages
    pub total: u64,
    /// Proceedings in the labor area, never more than `total`
    pub labor: u64,
    /// Pages visited
    pub pages: u32,
    /// Name of the matched company, if the API returned one
    pub company_name: Option<String>,
}

impl LaborTally {
    fn add_page(&mut self, records: &[Value]) {
        for record in records {
            self.total += 1;
            if is_labor_area(proceeding_area(record)) {
                self.labor += 1;
                debug!(
                    "Labor proceeding: {}",
                    lookup::get_str_or(record, "numero_cnj", "N/A")
                );
            }
        }
    }

    pub fn percentage(&self) -> f64 {
        labor_percentage(self.labor, self.total)
    }
}

/// Knobs for a single counting run
#[derive(Debug, Clone, Copy, Default)]
pub struct CountOptions {
    /// Stop after this many pages and report the partial tally
    pub max_pages: Option<u32>,
}

/// Count total and labor proceedings for a digits-only CNPJ.
///
/// A "not found" answer from the API is a valid empty result, not an error.
pub async fn count_labor_proceedings(
    api: &dyn ProceedingsApi,
    cnpj: &str,
    options: &CountOptions,
    progress: Option<&PageProgress>,
) -> Result<LaborTally> {
    match walk_pages(api, cnpj, options, progress).await {
        Err(e) if e.is_not_found() => {
            info!("No proceedings found for CNPJ {}: {}", cnpj, e);
            Ok(LaborTally::default())
        }
        result => result,
    }
}

async fn walk_pages(
    api: &dyn ProceedingsApi,
    cnpj: &str,
    options: &CountOptions,
    progress: Option<&PageProgress>,
) -> Result<LaborTally> {
    info!("Searching proceedings for CNPJ {} at {}", cnpj, api.base_url());
    let search = api.search_by_cnpj(cnpj).await?;

    let Some(envolvido) = search.envolvido else {
        info!("No party found for CNPJ {}", cnpj);
        return Ok(LaborTally::default());
    };

    let company = lookup::get_or(&envolvido, "nome", Value::from("N/A"));
    info!("Proceedings found for company: {}", company.as_str().unwrap_or("N/A"));

    let mut tally = LaborTally {
        company_name: envolvido.nome.clone(),
        ..Default::default()
    };

    let mut current = Some(search.page);
    while let Some(page) = current {
        tally.pages += 1;
        if let Some(progress) = progress {
            progress.set_page(tally.pages, tally.total);
        }

        if page.is_empty() {
            info!("Page {} has no proceedings", tally.pages);
        } else {
            info!("Processing page {} with {} proceedings", tally.pages, page.len());
            tally.add_page(&page.items);
        }

        if !page.has_more_pages() {
            debug!("No more pages after page {}", tally.pages);
            break;
        }

        if let Some(limit) = options.max_pages {
            if tally.pages >= limit {
                warn!(
                    "Stopping after {} pages (--max-pages); counts are partial",
                    tally.pages
                );
                break;
            }
        }

        current = api.continue_search(&page).await?;
    }

    info!(
        "Finished CNPJ {}: {} proceedings, {} labor, {} pages",
        cnpj, tally.total, tally.labor, tally.pages
    );

    Ok(tally)
}

/// Result summary handed to callers and printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborReport {
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub cnpj: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    pub total_processos: u64,
    pub processos_trabalhistas: u64,
    pub percentual_trabalhista: f64,
    pub consultado_em: DateTime<Utc>,
}

impl LaborReport {
    pub fn success(cnpj: impl Into<String>, tally: &LaborTally) -> Self {
        Self {
            error: false,
            message: None,
            cnpj: cnpj.into(),
            empresa: tally.company_name.clone(),
            total_processos: tally.total,
            processos_trabalhistas: tally.labor,
            percentual_trabalhista: tally.percentage(),
            consultado_em: Utc::now(),
        }
    }

    /// Every failure collapses to zero counts plus a message
    pub fn failure(cnpj: impl Into<String>, err: &TrabalhistaError) -> Self {
        Self {
            error: true,
            message: Some(format!("{}: {}", REPORT_ERROR_MESSAGE, err)),
            cnpj: cnpj.into(),
            empresa: None,
            total_processos: 0,
            processos_trabalhistas: 0,
            percentual_trabalhista: 0.0,
            consultado_em: Utc::now(),
        }
    }

    pub fn from_outcome(cnpj: impl Into<String>, outcome: &Result<LaborTally>) -> Self {
        match outcome {
            Ok(tally) => Self::success(cnpj, tally),
            Err(e) => Self::failure(cnpj, e),
        }
    }
}

/// Normalize `raw_cnpj`, count its proceedings and fold the outcome into a report.
pub async fn labor_processes_report(
    api: &dyn ProceedingsApi,
    raw_cnpj: &str,
    options: &CountOptions,
) -> LaborReport {
    let digits = cnpj::normalize(raw_cnpj);
    if !cnpj::has_valid_length(&digits) {
        warn!("CNPJ '{}' does not have {} digits", raw_cnpj, cnpj::CNPJ_LEN);
    }

    let outcome = count_labor_proceedings(api, &digits, options, None).await;
    if let Err(e) = &outcome {
        error!("Failed to count proceedings for CNPJ {}: {}", digits, e);
    }

    LaborReport::from_outcome(digits, &outcome)
}
