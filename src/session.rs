use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_bcmpricingcalculator::Client as PricingCalculatorClient;
use aws_sdk_costexplorer::Client as CostExplorerClient;
use aws_sdk_pricing::Client as PricingClient;

use crate::config::Config;

/// Service clients built once at startup and passed by reference to every
/// API-calling component.
pub struct AwsClients {
    pub cost_explorer: CostExplorerClient,
    pub pricing: PricingClient,
    pub pricing_calculator: PricingCalculatorClient,
}

impl AwsClients {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            cost_explorer: CostExplorerClient::new(sdk_config),
            pricing: PricingClient::new(sdk_config),
            pricing_calculator: PricingCalculatorClient::new(sdk_config),
        }
    }
}

/// Build the shared SDK config from the configured profile and region.
///
/// Credential resolution is lazy, so a misconfigured profile surfaces here
/// only as a missing provider. That is reported but not fatal; the first API
/// call will then fail with its own, clearer error.
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .profile_name(&config.profile)
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    if sdk_config.credentials_provider().is_none() {
        eprintln!("AWS credentials not found or improperly configured.");
    }

    sdk_config
}
