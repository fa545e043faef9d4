//! Runtime configuration from environment variables.
//!
//! | Variable               | Default | Meaning                                         |
//! |------------------------|---------|-------------------------------------------------|
//! | `CONTENT_FIXTURE`      | unset   | JSON snapshot path; replaces the hosted backend |
//! | `SUPABASE_URL`         | unset   | hosted backend base URL                         |
//! | `SUPABASE_ANON_KEY`    | unset   | public API key for read access                  |
//! | `DEFAULT_LANGUAGE`     | `ru`    | content language when a request names none      |
//! | `PORT`                 | `3000`  | HTTP listen port                                |
//! | `REQUEST_TIMEOUT_SECS` | `10`    | per-request timeout towards the backend         |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::i18n::Language;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no content source: set CONTENT_FIXTURE, or SUPABASE_URL and SUPABASE_ANON_KEY")]
    MissingContentSource,

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Fixture(PathBuf),
    Hosted { url: String, anon_key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub source: ContentSource,
    pub default_language: Language,
    pub port: u16,
    pub request_timeout: Duration,
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var).filter(|v| !v.trim().is_empty()) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let source = match (
            non_empty("CONTENT_FIXTURE"),
            non_empty("SUPABASE_URL"),
            non_empty("SUPABASE_ANON_KEY"),
        ) {
            (Some(path), _, _) => ContentSource::Fixture(PathBuf::from(path)),
            (None, Some(url), Some(anon_key)) => ContentSource::Hosted { url, anon_key },
            _ => return Err(ConfigError::MissingContentSource),
        };

        Ok(Self {
            source,
            default_language: parse_var(&lookup, "DEFAULT_LANGUAGE", Language::Ru)?,
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            request_timeout: Duration::from_secs(parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_hosted_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();

        assert_eq!(
            config.source,
            ContentSource::Hosted { url: "https://example.supabase.co".into(), anon_key: "anon".into() }
        );
        assert_eq!(config.default_language, Language::Ru);
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_fixture_takes_precedence() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("CONTENT_FIXTURE", "fixtures/site.json"),
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("DEFAULT_LANGUAGE", "kz"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.source, ContentSource::Fixture(PathBuf::from("fixtures/site.json")));
        assert_eq!(config.default_language, Language::Kz);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            SiteConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://example.supabase.co")])),
            Err(ConfigError::MissingContentSource)
        );
        assert_eq!(
            SiteConfig::from_lookup(lookup(&[("CONTENT_FIXTURE", "x.json"), ("PORT", "eighty")])),
            Err(ConfigError::InvalidValue { var: "PORT", value: "eighty".into() })
        );
        assert_eq!(
            SiteConfig::from_lookup(lookup(&[("CONTENT_FIXTURE", "x.json"), ("DEFAULT_LANGUAGE", "en")])),
            Err(ConfigError::InvalidValue { var: "DEFAULT_LANGUAGE", value: "en".into() })
        );
    }
}
