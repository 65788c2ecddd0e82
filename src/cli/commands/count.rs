use log::warn;
use std::sync::Arc;

use crate::api::{ClientConfig, EscavadorClient};
use crate::cli::args::CountArgs;
use crate::cli::OutputFormat;
use crate::cnpj;
use crate::config::Config;
use crate::counter::{count_labor_proceedings, CountOptions, LaborReport};
use crate::error::Result;
use crate::output;
use crate::progress::{messages, PageProgress, ProgressManager};

/// Execute count command
///
/// The report is printed even when counting fails; the error is then
/// returned so the process exits non-zero.
pub async fn execute(args: CountArgs, format: OutputFormat, quiet: bool, verbose: bool) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring configuration file: {}", e);
        Config::default()
    });

    let api_key = config.resolve_token(args.token.as_deref()).unwrap_or_default();

    let digits = cnpj::normalize(&args.cnpj);
    if !cnpj::has_valid_length(&digits) {
        warn!("CNPJ '{}' does not have {} digits", args.cnpj, cnpj::CNPJ_LEN);
    }

    let client_config = ClientConfig {
        api_key,
        base_url: args.base_url.unwrap_or(config.escavador.base_url),
        timeout: config.escavador.timeout,
        ..Default::default()
    };
    let client = EscavadorClient::new(client_config)?;

    let manager = Arc::new(ProgressManager::new(quiet, verbose));
    let progress = PageProgress::new(manager, &digits);
    let options = CountOptions {
        max_pages: args.max_pages,
    };

    let outcome = count_labor_proceedings(&client, &digits, &options, Some(&progress)).await;
    match &outcome {
        Ok(tally) => progress.finish_with_message(&messages::finished(tally.total, tally.labor)),
        Err(_) => progress.finish_and_clear(),
    }

    let report = LaborReport::from_outcome(digits, &outcome);
    println!("{}", output::format_report(&report, format)?);

    outcome.map(|_| ())
}
