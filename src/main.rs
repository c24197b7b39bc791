use costline::billing::{estimate, report};
use costline::cli::Cli;
use costline::config::Config;
use costline::session::{self, AwsClients};
use costline::store::RateCodeStore;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    if cli.print {
        let config = Config::load().unwrap_or_else(|_| Config::default());
        config.print()?;
        return Ok(());
    }

    if cli.check {
        let config = Config::load()?;
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    if !cli.report && cli.extract.is_none() {
        eprintln!("Nothing to do: pass --report and/or --extract (see --help)");
        std::process::exit(2);
    }

    // Load configuration and apply command-line overrides
    let mut config = Config::load().unwrap_or_else(|_| Config::default());
    config.apply_overrides(cli.profile, cli.region, cli.service, cli.output);

    // One session for the whole run, passed by reference from here on
    let sdk_config = session::load_sdk_config(&config).await;
    let clients = AwsClients::new(&sdk_config);

    if cli.report {
        report::report_cost_and_usage(&clients, &config.report).await?;
        report::report_usage_forecast(&clients, &config.report).await?;
    }

    if let Some(estimate_id) = cli.extract {
        let estimate_id = if estimate_id.is_empty() {
            prompt_estimate_id()?
        } else {
            estimate_id
        };

        let store = RateCodeStore::new(&config.output_path);
        estimate::run_extraction(&clients, &store, estimate_id.trim()).await?;
    }

    Ok(())
}

/// Read the workload estimate id interactively when it was not given on the
/// command line.
fn prompt_estimate_id() -> io::Result<String> {
    print!("Enter Workload Estimate id: ");
    io::stdout().flush()?;

    let mut id = String::new();
    io::stdin().read_line(&mut id)?;
    Ok(id.trim().to_string())
}
