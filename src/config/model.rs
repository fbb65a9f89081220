//! Serde data structures for the `~/.fastcli` config file.
//!
//! The file is a JSON array of [`Environment`] records. [`Config`] wraps
//! that array transparently and keeps insertion order, which decides the
//! winner when two environments share a name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named Fastly service and the API token used to talk to it.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Environment {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    #[serde(rename = "ID", alias = "id", alias = "Id")]
    pub id: String,

    #[serde(rename = "Token", alias = "token")]
    pub token: String,
}

impl Environment {
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            token: token.into(),
        }
    }
}

// Tokens must never end up in logs.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Config {
    environments: Vec<Environment>,
}

impl Config {
    #[must_use]
    pub fn new(environments: Vec<Environment>) -> Self {
        Self { environments }
    }

    /// First environment whose name matches exactly (case-sensitive).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Environment> {
        self.environments.iter().find(|env| env.name == name)
    }

    /// Distinct environment names, in file order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.environments.len());
        for env in &self.environments {
            if !names.contains(&env.name) {
                names.push(env.name.clone());
            }
        }
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.environments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config::new(vec![
            Environment::new("prod", "123", "tok"),
            Environment::new("stage", "456", "tok2"),
            Environment::new("prod", "789", "tok3"),
        ])
    }

    #[test]
    fn find_returns_first_match() {
        let config = sample();
        let env = config.find("prod").unwrap();
        assert_eq!(env.id, "123");
        assert_eq!(env.token, "tok");
    }

    #[test]
    fn find_is_case_sensitive() {
        assert!(sample().find("Prod").is_none());
        assert!(sample().find("pro").is_none());
    }

    #[test]
    fn names_are_distinct_and_ordered() {
        assert_eq!(sample().names(), vec!["prod", "stage"]);
    }

    #[test]
    fn deserializes_original_key_names() {
        let json = r#"[{"Name": "prod", "ID": "123", "Token": "tok"}]"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config.find("prod").unwrap(), &Environment::new("prod", "123", "tok"));
    }

    #[test]
    fn accepts_lowercase_keys_and_ignores_unknown_ones() {
        let json = r#"[{"name": "dev", "id": "9", "token": "t", "Comment": "scratch"}]"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.find("dev").unwrap().id, "9");
    }

    #[test]
    fn missing_token_is_rejected() {
        let json = r#"[{"Name": "prod", "ID": "123"}]"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn serializes_with_original_key_names() {
        let config = Config::new(vec![Environment::new("prod", "123", "tok")]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"[{"Name":"prod","ID":"123","Token":"tok"}]"#);
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", Environment::new("prod", "123", "s3cret"));
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
