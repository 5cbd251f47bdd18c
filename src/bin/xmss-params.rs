//! xmss-params - print or export XMSS / XMSS-MT parameter set documents
//!
//! ```text
//! xmss-params                      # list all parameter set names
//! xmss-params XMSS-SHA2_10_256     # print one document to stdout
//! xmss-params --write              # write every document below the prefix
//! ```

use clap::{Parser, ValueEnum};
use std::io;
use std::process::ExitCode;
use xmss_params::path::DEFAULT_PREFIX;
use xmss_params::{ExportConfig, Exporter, Format};

#[derive(Parser)]
#[command(name = "xmss-params", version)]
#[command(about = "XMSS / XMSS-MT parameter sets (RFC 8391) with derived sizes", long_about = None)]
struct Cli {
    /// Parameter set to print, e.g. XMSS-SHA2_10_256. Lists all names when omitted.
    #[arg(conflicts_with = "write")]
    name: Option<String>,

    /// Write every parameter set to its file below the prefix
    #[arg(long)]
    write: bool,

    /// Output root for --write, including the trailing separator
    #[arg(long, env = "XMSS_PARAMS_PREFIX", default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Document format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => Format::Yaml,
            OutputFormat::Json => Format::Json,
        }
    }
}

fn run(cli: Cli) -> xmss_params::Result<()> {
    let exporter = Exporter::new(ExportConfig {
        prefix: cli.prefix,
        format: cli.format.into(),
    });

    if cli.write {
        let written = exporter.write_all()?;
        log::debug!("Batch export finished with {} files", written.len());
        return Ok(());
    }

    let stdout = io::stdout().lock();
    match cli.name {
        Some(name) => exporter.single(&name, stdout),
        None => exporter.list(stdout),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}
