use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "costline")]
#[command(version, about = "AWS cost reporting and rate code extraction")]
pub struct Cli {
    /// Print last month's unblended cost and a 10-day usage forecast
    #[arg(short = 'r', long = "report")]
    pub report: bool,

    /// Extract rate codes for a workload estimate (prompts for the id if omitted)
    #[arg(short = 'x', long = "extract", value_name = "ESTIMATE_ID", num_args = 0..=1, default_missing_value = "")]
    pub extract: Option<String>,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,

    /// AWS profile name override
    #[arg(long = "profile", value_name = "NAME")]
    pub profile: Option<String>,

    /// AWS region override
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Service name for the cost report (e.g. "Amazon DynamoDB")
    #[arg(long = "service", value_name = "SERVICE")]
    pub service: Option<String>,

    /// Output store path for extracted rate codes
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
