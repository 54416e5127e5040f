use clap::Parser;
use logcount::types::constants::DEFAULT_LOG_PATH;
use logcount::{count_logs, logging, print_total_as, Config, LogLoader, OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

/// Log Counter - Count the records of a CSV log file
#[derive(Parser, Debug)]
#[command(name = "logcount")]
#[command(about = "Load a CSV log file and print the total number of log records")]
#[command(
    version,
    after_help = "Tool will print \"Total logs: <count>\" to stdout.\nIn case of failure, tool will print message started with: \"Error: <message>\""
)]
struct Args {
    /// Path to CSV log file
    #[arg(short = 'f', long = "filename", default_value = DEFAULT_LOG_PATH)]
    filename: PathBuf,

    /// Field delimiter (default: ',')
    #[arg(short = 'd', long = "delimiter")]
    delimiter: Option<char>,

    /// Quote character (default: '"')
    #[arg(short = 'q', long = "quote")]
    quote: Option<char>,

    /// Output format of the total line
    #[arg(long = "format", value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() {
    let args = Args::parse();
    logging::register_logger();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = build_config(args)?;
    debug!(?config, "starting");

    let table = LogLoader::from_config(&config).load(&config.filename)?;
    print_total_as(count_logs(&table), config.format);
    Ok(())
}

fn build_config(args: Args) -> Result<Config> {
    let mut config = Config::new(args.filename).with_format(args.format);

    if let Some(delimiter) = args.delimiter {
        config = config.with_delimiter(delimiter)?;
    }
    if let Some(quote) = args.quote {
        config = config.with_quote(quote)?;
    }
    config.validate()?;

    Ok(config)
}
