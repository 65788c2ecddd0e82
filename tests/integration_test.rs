use chrono::Utc;
use clap::Parser;
use trabalhista::cli::{Cli, Commands, OutputFormat};
use trabalhista::counter::{LaborReport, LaborTally};
use trabalhista::error::TrabalhistaError;
use trabalhista::output::format_report;

fn sample_report() -> LaborReport {
    let tally = LaborTally {
        total: 40,
        labor: 10,
        pages: 2,
        company_name: Some("ACME SERVICOS LTDA".to_string()),
    };
    LaborReport::success("11222333000181", &tally)
}

#[test]
fn test_parse_count_command() {
    let cli = Cli::try_parse_from([
        "trabalhista",
        "--format",
        "json",
        "count",
        "11.222.333/0001-81",
        "--max-pages",
        "3",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Count(args) => {
            assert_eq!(args.cnpj, "11.222.333/0001-81");
            assert_eq!(args.max_pages, Some(3));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_count_alias_and_zero_max_pages() {
    let cli = Cli::try_parse_from(["trabalhista", "contar", "11222333000181"]).unwrap();
    assert!(matches!(cli.command, Commands::Count(_)));

    assert!(Cli::try_parse_from(["trabalhista", "count", "11222333000181", "--max-pages", "0"]).is_err());
}

#[test]
fn test_parse_config_command() {
    let cli = Cli::try_parse_from(["trabalhista", "config", "set", "escavador.timeout", "30"]).unwrap();
    assert!(matches!(cli.command, Commands::Config(_)));
}

mod formatter_tests {
    use super::*;

    #[test]
    fn test_format_json() {
        let json = format_report(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["error"], false);
        assert_eq!(value["cnpj"], "11222333000181");
        assert_eq!(value["empresa"], "ACME SERVICOS LTDA");
        assert_eq!(value["total_processos"], 40);
        assert_eq!(value["processos_trabalhistas"], 10);
        assert_eq!(value["percentual_trabalhista"], 25.0);
        assert!(value.get("message").is_none());

        let parsed: LaborReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_report_with_time(parsed.consultado_em));
    }

    fn sample_report_with_time(at: chrono::DateTime<Utc>) -> LaborReport {
        LaborReport {
            consultado_em: at,
            ..sample_report()
        }
    }

    #[test]
    fn test_format_table() {
        let table = format_report(&sample_report(), OutputFormat::Table).unwrap();
        assert!(table.contains("11.222.333/0001-81"));
        assert!(table.contains("ACME SERVICOS LTDA"));
        assert!(table.contains("25.00%"));
        assert!(table.contains("Total: "));
    }

    #[test]
    fn test_format_markdown() {
        let md = format_report(&sample_report(), OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# Processos trabalhistas: 11.222.333/0001-81"));
        assert!(md.contains("| Processos trabalhistas | 10 |"));
        assert!(md.contains("| Percentual trabalhista | 25.00% |"));
    }

    #[test]
    fn test_format_csv() {
        let csv = format_report(&sample_report(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("error,message,cnpj,empresa,total_processos,processos_trabalhistas,percentual_trabalhista,consultado_em")
        );
        assert!(lines
            .next()
            .unwrap()
            .starts_with("false,,11222333000181,ACME SERVICOS LTDA,40,10,25.00,"));
    }

    #[test]
    fn test_format_error_report() {
        let report = LaborReport::failure("11222333000181", &TrabalhistaError::RateLimit);

        let table = format_report(&report, OutputFormat::Table).unwrap();
        assert!(table.contains("Rate limit exceeded"));

        let md = format_report(&report, OutputFormat::Markdown).unwrap();
        assert!(md.contains("**Erro:**"));

        let json = format_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], true);
        assert_eq!(value["total_processos"], 0);
        assert_eq!(value["percentual_trabalhista"], 0.0);
    }
}
