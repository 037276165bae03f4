use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Lets a transfer push the sending account's balance below zero.
    #[serde(default = "bool_true")]
    pub allow_overdraft: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            allow_overdraft: bool_true(),
        }
    }
}

fn bool_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdraft_allowed_by_default() {
        assert!(StoreConfig::default().allow_overdraft);
        let config: StoreConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.allow_overdraft);
    }

    #[test]
    fn overdraft_can_be_disabled() {
        let config: StoreConfig = serde_yaml::from_str("allow_overdraft: false").unwrap();
        assert!(!config.allow_overdraft);
    }
}
