use serde::Deserialize;

use crate::shared::storage::KeyValueStorage;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
}

/// Shape of the synthetic sales history generated on a fresh session
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedConfig {
    /// Months to generate, `YYYY-MM`
    pub months: Vec<String>,
    pub min_sales_per_product: u32,
    pub max_sales_per_product: u32,
    pub max_quantity: u32,
    pub max_day: u32,
}

/// Storage key holding an optional TOML override
pub const CONFIG_STORAGE_KEY: &str = "app-config";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "debug"

[seed]
months = ["2024-07", "2024-08", "2024-09", "2024-10"]
min_sales_per_product = 20
max_sales_per_product = 69
max_quantity = 3
max_day = 28
"#;

impl Default for Config {
    /// Same values as [`DEFAULT_CONFIG`]
    fn default() -> Self {
        Config {
            logging: LoggingConfig {
                level: "debug".into(),
            },
            seed: SeedConfig {
                months: ["2024-07", "2024-08", "2024-09", "2024-10"]
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
                min_sales_per_product: 20,
                max_sales_per_product: 69,
                max_quantity: 3,
                max_day: 28,
            },
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `debug`
    pub fn log_level(&self) -> log::Level {
        self.level.trim().parse().unwrap_or(log::Level::Debug)
    }
}

/// Parse and sanity-check a TOML configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    let seed = &config.seed;
    if seed.min_sales_per_product > seed.max_sales_per_product {
        anyhow::bail!(
            "seed.min_sales_per_product ({}) exceeds seed.max_sales_per_product ({})",
            seed.min_sales_per_product,
            seed.max_sales_per_product
        );
    }
    if seed.max_quantity == 0 || seed.max_day == 0 || seed.max_day > 28 {
        anyhow::bail!("seed.max_quantity must be positive and seed.max_day within 1..=28");
    }
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. TOML document stored under [`CONFIG_STORAGE_KEY`]
/// 2. Falls back to embedded default config
pub fn load_config<S: KeyValueStorage>(storage: &S) -> Config {
    match storage.get_item(CONFIG_STORAGE_KEY) {
        Ok(Some(contents)) => match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded config override from '{}'", CONFIG_STORAGE_KEY);
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        },
        Ok(None) => {}
        Err(e) => log::warn!("Cannot read config override: {}", e),
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.seed.months.len(), 4);
        assert_eq!(config.seed.max_quantity, 3);
        assert_eq!(config.logging.log_level(), log::Level::Debug);
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn test_override_from_storage() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                CONFIG_STORAGE_KEY,
                r#"
                [logging]
                level = "warn"
                [seed]
                months = ["2025-01"]
                min_sales_per_product = 1
                max_sales_per_product = 2
                max_quantity = 1
                max_day = 10
                "#,
            )
            .unwrap();
        let config = load_config(&storage);
        assert_eq!(config.seed.months, vec!["2025-01".to_string()]);
        assert_eq!(config.logging.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_log_level_names() {
        let level = |name: &str| LoggingConfig { level: name.into() }.log_level();
        assert_eq!(level("error"), log::Level::Error);
        assert_eq!(level("WARN"), log::Level::Warn);
        assert_eq!(level(" info "), log::Level::Info);
        assert_eq!(level("trace"), log::Level::Trace);
        assert_eq!(level("verbose"), log::Level::Debug);
        assert_eq!(level(""), log::Level::Debug);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let storage = MemoryStorage::new();
        storage.set_item(CONFIG_STORAGE_KEY, "not = [valid").unwrap();
        assert_eq!(load_config(&storage), Config::default());
    }

    #[test]
    fn test_rejects_inverted_sales_range() {
        let doc = DEFAULT_CONFIG.replace("min_sales_per_product = 20", "min_sales_per_product = 90");
        assert!(parse_config(&doc).is_err());
    }
}
