pub mod args;
pub mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Labor lawsuit counter for Brazilian companies
#[derive(Parser, Debug)]
#[command(
    name = "trabalhista",
    about = "Count labor (trabalhista) lawsuits for a company CNPJ using the Escavador API",
    version,
    author,
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Markdown format
    Markdown,
    /// CSV format
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count total and labor proceedings for a CNPJ
    #[command(alias = "contar")]
    Count(args::CountArgs),

    /// Manage configuration
    #[command(alias = "c")]
    Config(args::ConfigArgs),

    /// Show version information
    Version,

    /// Generate shell completion scripts
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completion scripts
    fn generate_completions(shell: Shell) {
        use clap::CommandFactory;
        use clap_complete::generate;
        use std::io;

        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
    }

    /// Run the CLI application
    pub async fn run() -> crate::error::Result<()> {
        // .env must be loaded before clap reads ESCAVADOR_TOKEN
        crate::config::load_dotenv();

        let cli = Self::parse();

        // Set up logging
        let default_filter = if cli.verbose { "debug" } else { "warn" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .init();

        let result = match cli.command {
            Commands::Count(args) => commands::count::execute(args, cli.format, cli.quiet, cli.verbose).await,
            Commands::Config(args) => commands::config::execute(args).await,
            Commands::Version => {
                commands::version::execute();
                Ok(())
            }
            Commands::Completions { shell } => {
                Self::generate_completions(shell);
                Ok(())
            }
        };

        // Handle errors with better messaging
        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                use crate::error::TrabalhistaError;
                match &e {
                    TrabalhistaError::ApiError { code, message, .. } => {
                        eprintln!("Error: {}", message);
                        if cli.verbose {
                            eprintln!("Code: {}", code);
                        }
                    }
                    TrabalhistaError::Parse(msg) => {
                        eprintln!("Error parsing response: {}", msg);
                        if !cli.verbose {
                            eprintln!("\nRun with --verbose for more details.");
                        }
                    }
                    _ => {
                        eprintln!("Error: {}", e);
                    }
                }
                if let Some(hint) = e.hint() {
                    eprintln!("\nHint: {}", hint);
                }
                Err(e)
            }
        }
    }
}
