use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tool configuration loaded from ~/.config/costline/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// AWS profile name per ~/.aws/credentials or ~/.aws/config
    pub profile: String,
    /// AWS region the session is pinned to
    pub region: String,
    /// Path of the CSV store rate code rows are appended to
    pub output_path: String,
    pub report: ReportConfig,
}

/// Parameters for the cost and forecast reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Service dimension value, e.g. "Amazon DynamoDB"
    pub service: String,
    /// Region dimension value for the cost report
    pub region: String,
    /// Usage type dimension value for the usage forecast
    pub usage_type: String,
    /// Billing view the forecast is computed against. Left empty, the
    /// forecast runs against the account's default billing view instead of a
    /// named one (a warning is printed when that happens).
    pub billing_view_arn: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            region: "us-east-1".to_string(),
            output_path: "rate_codes.csv".to_string(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            service: "Amazon DynamoDB".to_string(),
            region: "us-east-1".to_string(),
            usage_type: "WriteCapacityUnit-Hrs".to_string(),
            billing_view_arn: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.config/costline/config.toml)
    fn get_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("costline").join("config.toml")
        } else {
            PathBuf::from(".config/costline/config.toml")
        }
    }

    /// Initialize config directory and create default config
    pub fn init() -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.profile.is_empty() {
            return Err("Profile name must not be empty".into());
        }
        if self.region.is_empty() {
            return Err("Region must not be empty".into());
        }
        if self.output_path.is_empty() {
            return Err("Output path must not be empty".into());
        }
        if self.report.service.is_empty() {
            return Err("Report service must not be empty".into());
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn apply_overrides(
        &mut self,
        profile: Option<String>,
        region: Option<String>,
        service: Option<String>,
        output: Option<String>,
    ) {
        if let Some(profile) = profile {
            self.profile = profile;
        }
        if let Some(region) = region {
            self.region = region;
        }
        if let Some(service) = service {
            self.report.service = service;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.check().is_ok());
        assert_eq!(config.profile, "default");
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.output_path, config.output_path);
        assert_eq!(parsed.report.service, config.report.service);
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        config.apply_overrides(
            Some("billing".to_string()),
            None,
            Some("Amazon S3".to_string()),
            None,
        );
        assert_eq!(config.profile, "billing");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.report.service, "Amazon S3");
    }

    #[test]
    fn test_check_rejects_empty_profile() {
        let config = Config {
            profile: String::new(),
            ..Config::default()
        };
        assert!(config.check().is_err());
    }
}
