pub mod console;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: ConfigTable,
    pub session: ConfigSession,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table: ConfigTable::default(),
            session: ConfigSession::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigTable {
    pub payout_blackjack: f64,
    pub dealer_stand_min: u8,
}

impl Default for ConfigTable {
    fn default() -> Self {
        let rule = blackjack::Rule::default();
        ConfigTable {
            payout_blackjack: rule.payout_blackjack,
            dealer_stand_min: rule.dealer_stand_min,
        }
    }
}

impl TryInto<blackjack::Rule> for ConfigTable {
    type Error = serde::de::value::Error;

    fn try_into(self) -> Result<blackjack::Rule, Self::Error> {
        if !self.payout_blackjack.is_finite() || self.payout_blackjack < 0.0 {
            return Err(Self::Error::custom(
                "payout_blackjack must be a non-negative number",
            ));
        }
        if self.dealer_stand_min > 21 {
            return Err(Self::Error::custom("dealer_stand_min cannot exceed 21"));
        }

        Ok(blackjack::Rule {
            payout_blackjack: self.payout_blackjack,
            dealer_stand_min: self.dealer_stand_min,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSession {
    pub starting_balance: u32,
}

impl Default for ConfigSession {
    fn default() -> Self {
        ConfigSession {
            starting_balance: 100,
        }
    }
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &str) -> anyhow::Result<Config> {
    let file_content = fs::read_to_string(filename)?;
    Ok(serde_yaml::from_str(&file_content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_typical_config_table() -> ConfigTable {
        ConfigTable {
            payout_blackjack: 1.5,
            dealer_stand_min: 17,
        }
    }

    #[test]
    fn can_convert_table_rule() {
        let config_table = get_typical_config_table();
        let converted_rule: blackjack::Rule = config_table.try_into().unwrap();
        assert_eq!(converted_rule.payout_blackjack, 1.5);
        assert_eq!(converted_rule.dealer_stand_min, 17);
    }

    #[test]
    fn should_return_error_when_converting_bad_table_rule() {
        let mut config_table = get_typical_config_table();
        config_table.dealer_stand_min = 22;
        let convert_result: Result<blackjack::Rule, serde::de::value::Error> =
            config_table.try_into();
        assert!(convert_result.is_err());

        let mut config_table = get_typical_config_table();
        config_table.payout_blackjack = -1.5;
        let convert_result: Result<blackjack::Rule, serde::de::value::Error> =
            config_table.try_into();
        assert!(convert_result.is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_yaml::from_str("table:\n  dealer_stand_min: 18\n").unwrap();
        assert_eq!(config.table.dealer_stand_min, 18);
        assert_eq!(config.table.payout_blackjack, 1.5);
        assert_eq!(config.session.starting_balance, 100);
    }
}
