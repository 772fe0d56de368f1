use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DemoSettings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.demo.as_of > config.demo.deadline {
        return Err(ConfigError::ValidationError(format!(
            "demo.as_of ({}) falls after the trade deadline ({})",
            config.demo.as_of, config.demo.deadline
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn demo_settings() -> settings::DemoSettings {
        settings::DemoSettings {
            seed: 7,
            your_team: "Portland Pioneers".to_string(),
            their_team: "Charlotte Knights".to_string(),
            target_player: "Dario Canela".to_string(),
            target_position: "SP".to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(),
            as_of: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
        }
    }

    #[test]
    fn test_as_of_after_deadline_is_rejected() {
        let mut config = Config {
            demo: demo_settings(),
        };
        assert!(validate(&config).is_ok());

        config.demo.as_of = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        assert!(validate(&config).is_err());
    }
}
