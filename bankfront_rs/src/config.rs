//! Application configuration.
//!
//! `AppConfig` is built once at startup and handed to whoever needs it. Values
//! are layered: built-in defaults, then an optional inline TOML document, then
//! individual environment keys. The browser has no process environment, so the
//! landing app captures keys at build time (see [`EnvOverrides::from_build_env`]).

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

/// Environment keys understood by [`EnvOverrides`].
pub mod keys {
    pub const APP_NAME: &str = "BANKFRONT_APP_NAME";
    pub const APP_VERSION: &str = "BANKFRONT_APP_VERSION";
    pub const APP_DESCRIPTION: &str = "BANKFRONT_APP_DESCRIPTION";
    pub const ENVIRONMENT: &str = "BANKFRONT_ENVIRONMENT";
    pub const API_BASE_URL: &str = "BANKFRONT_API_BASE_URL";
    pub const SUPPORT_PHONE: &str = "BANKFRONT_SUPPORT_PHONE";
    pub const REQUEST_TIMEOUT_MS: &str = "BANKFRONT_REQUEST_TIMEOUT_MS";
    pub const SESSION_TIMEOUT_MS: &str = "BANKFRONT_SESSION_TIMEOUT_MS";
    pub const AUTH_API: &str = "BANKFRONT_AUTH_API";
    pub const ACCOUNTS_API: &str = "BANKFRONT_ACCOUNTS_API";
    pub const TRANSACTIONS_API: &str = "BANKFRONT_TRANSACTIONS_API";
    pub const CARDS_API: &str = "BANKFRONT_CARDS_API";
    pub const LOANS_API: &str = "BANKFRONT_LOANS_API";
    pub const SENTRY_DSN: &str = "BANKFRONT_SENTRY_DSN";
    pub const GOOGLE_ANALYTICS_ID: &str = "BANKFRONT_GOOGLE_ANALYTICS_ID";
    pub const HOTJAR_ID: &str = "BANKFRONT_HOTJAR_ID";
    pub const ENABLE_ANALYTICS: &str = "BANKFRONT_ENABLE_ANALYTICS";
    pub const ENABLE_ERROR_TRACKING: &str = "BANKFRONT_ENABLE_ERROR_TRACKING";
    pub const CAROUSEL_INTERVAL_MS: &str = "BANKFRONT_CAROUSEL_INTERVAL_MS";
    pub const MENU_CLOSE_DELAY_MS: &str = "BANKFRONT_MENU_CLOSE_DELAY_MS";
    pub const AUTO_ADVANCE: &str = "BANKFRONT_AUTO_ADVANCE";
    pub const DEBUG_LOGGING: &str = "BANKFRONT_DEBUG_LOGGING";
    /// Whole TOML document, applied before the individual keys.
    pub const CONFIG_INLINE: &str = "BANKFRONT_CONFIG_INLINE";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    app_name: String,
    app_version: String,
    app_description: String,
    environment: String,
    api_base_url: String,
    support_phone: String,
    request_timeout_ms: u64,
    session_timeout_ms: u64,
    auth_api: String,
    accounts_api: String,
    transactions_api: String,
    cards_api: String,
    loans_api: String,
    sentry_dsn: Option<String>,
    google_analytics_id: Option<String>,
    hotjar_id: Option<String>,
    enable_analytics: bool,
    enable_error_tracking: bool,
    carousel_interval_ms: u64,
    menu_close_delay_ms: u64,
    auto_advance: bool,
    debug_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Meridian Bank".to_string(),
            app_version: "1.0.0".to_string(),
            app_description: "Your financial future starts here".to_string(),
            environment: "development".to_string(),
            api_base_url: "https://api.meridian.example".to_string(),
            support_phone: "1-800-555-0199".to_string(),
            request_timeout_ms: 30_000,
            session_timeout_ms: 1_800_000,
            auth_api: "/auth".to_string(),
            accounts_api: "/accounts".to_string(),
            transactions_api: "/transactions".to_string(),
            cards_api: "/cards".to_string(),
            loans_api: "/loans".to_string(),
            sentry_dsn: None,
            google_analytics_id: None,
            hotjar_id: None,
            enable_analytics: false,
            enable_error_tracking: false,
            carousel_interval_ms: 5_000,
            menu_close_delay_ms: 150,
            auto_advance: true,
            debug_logging: false,
        }
    }
}

impl AppConfig {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Tagline shown under the brand in the footer.
    pub fn app_description(&self) -> &str {
        &self.app_description
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn is_test(&self) -> bool {
        self.environment.eq_ignore_ascii_case("test")
    }

    /// Root of the banking API, e.g. `https://api.meridian.example`.
    /// Endpoint paths such as [`AppConfig::auth_api`] are appended to it by
    /// [`AppConfig::api_url`].
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Base URL followed by `endpoint`, verbatim.
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }

    pub fn support_phone(&self) -> &str {
        &self.support_phone
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Idle time before a signed-in session expires.
    pub fn session_timeout(&self) -> Duration {
        Duration::from_millis(self.session_timeout_ms)
    }

    pub fn auth_api(&self) -> &str {
        &self.auth_api
    }

    pub fn accounts_api(&self) -> &str {
        &self.accounts_api
    }

    pub fn transactions_api(&self) -> &str {
        &self.transactions_api
    }

    pub fn cards_api(&self) -> &str {
        &self.cards_api
    }

    pub fn loans_api(&self) -> &str {
        &self.loans_api
    }

    /// `None` when unset or blank.
    pub fn sentry_dsn(&self) -> Option<&str> {
        non_empty(&self.sentry_dsn)
    }

    /// `None` when unset or blank.
    pub fn google_analytics_id(&self) -> Option<&str> {
        non_empty(&self.google_analytics_id)
    }

    /// `None` when unset or blank.
    pub fn hotjar_id(&self) -> Option<&str> {
        non_empty(&self.hotjar_id)
    }

    pub fn enable_analytics(&self) -> bool {
        self.enable_analytics
    }

    pub fn enable_error_tracking(&self) -> bool {
        self.enable_error_tracking
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn menu_close_delay(&self) -> Duration {
        Duration::from_millis(self.menu_close_delay_ms)
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Debug mode. Raises the console log filter to `debug`.
    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    /// Defaults overlaid with a TOML document. Fails on the first bad value.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file = FileConfig::parse(raw)?;
        let mut config = Self::default();
        match config.apply_file(file).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(config),
        }
    }

    /// Lenient layering used at startup: bad values are logged and skipped.
    pub fn load(sources: ConfigSources) -> Self {
        let mut config = Self::default();

        let inline = sources
            .inline_toml
            .as_deref()
            .filter(|raw| !raw.trim().is_empty());
        if let Some(raw) = inline {
            match FileConfig::parse(raw) {
                Ok(file) => {
                    for err in config.apply_file(file) {
                        warn!(error = %err, "ignoring inline configuration value");
                    }
                }
                Err(err) => warn!(error = %err, "ignoring inline configuration"),
            }
        }

        for err in config.apply_env(&sources.env) {
            warn!(error = %err, "ignoring environment override");
        }

        config
    }

    /// [`AppConfig::load`] over values captured when the binary was built.
    pub fn from_build_env() -> Self {
        Self::load(ConfigSources::from_build_env())
    }

    /// Applies every valid value; returns the rejected ones.
    pub fn apply_file(&mut self, file: FileConfig) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let strings = [
            (&mut self.app_name, file.app_name),
            (&mut self.app_version, file.app_version),
            (&mut self.app_description, file.app_description),
            (&mut self.environment, file.environment),
            (&mut self.api_base_url, file.api_base_url),
            (&mut self.support_phone, file.support_phone),
            (&mut self.auth_api, file.auth_api),
            (&mut self.accounts_api, file.accounts_api),
            (&mut self.transactions_api, file.transactions_api),
            (&mut self.cards_api, file.cards_api),
            (&mut self.loans_api, file.loans_api),
        ];
        for (target, value) in strings {
            if let Some(value) = value {
                *target = value;
            }
        }

        let optionals = [
            (&mut self.sentry_dsn, file.sentry_dsn),
            (&mut self.google_analytics_id, file.google_analytics_id),
            (&mut self.hotjar_id, file.hotjar_id),
        ];
        for (target, value) in optionals {
            if value.is_some() {
                *target = value;
            }
        }

        let millis = [
            (&mut self.request_timeout_ms, keys::REQUEST_TIMEOUT_MS, file.request_timeout_ms),
            (&mut self.session_timeout_ms, keys::SESSION_TIMEOUT_MS, file.session_timeout_ms),
            (&mut self.carousel_interval_ms, keys::CAROUSEL_INTERVAL_MS, file.carousel_interval_ms),
            (&mut self.menu_close_delay_ms, keys::MENU_CLOSE_DELAY_MS, file.menu_close_delay_ms),
        ];
        for (target, key, value) in millis {
            if let Some(value) = value {
                set_positive(target, key, value, &mut errors);
            }
        }

        let flags = [
            (&mut self.enable_analytics, file.enable_analytics),
            (&mut self.enable_error_tracking, file.enable_error_tracking),
            (&mut self.auto_advance, file.auto_advance),
            (&mut self.debug_logging, file.debug_logging),
        ];
        for (target, value) in flags {
            if let Some(value) = value {
                *target = value;
            }
        }

        errors
    }

    /// Applies every valid override; returns the rejected ones.
    pub fn apply_env(&mut self, env: &EnvOverrides) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let strings = [
            (&mut self.app_name, &env.app_name),
            (&mut self.app_version, &env.app_version),
            (&mut self.app_description, &env.app_description),
            (&mut self.environment, &env.environment),
            (&mut self.api_base_url, &env.api_base_url),
            (&mut self.support_phone, &env.support_phone),
            (&mut self.auth_api, &env.auth_api),
            (&mut self.accounts_api, &env.accounts_api),
            (&mut self.transactions_api, &env.transactions_api),
            (&mut self.cards_api, &env.cards_api),
            (&mut self.loans_api, &env.loans_api),
        ];
        for (target, raw) in strings {
            if let Some(value) = non_empty(raw) {
                *target = value.to_string();
            }
        }

        let optionals = [
            (&mut self.sentry_dsn, &env.sentry_dsn),
            (&mut self.google_analytics_id, &env.google_analytics_id),
            (&mut self.hotjar_id, &env.hotjar_id),
        ];
        for (target, raw) in optionals {
            if let Some(value) = non_empty(raw) {
                *target = Some(value.to_string());
            }
        }

        let millis = [
            (&mut self.request_timeout_ms, keys::REQUEST_TIMEOUT_MS, &env.request_timeout_ms),
            (&mut self.session_timeout_ms, keys::SESSION_TIMEOUT_MS, &env.session_timeout_ms),
            (&mut self.carousel_interval_ms, keys::CAROUSEL_INTERVAL_MS, &env.carousel_interval_ms),
            (&mut self.menu_close_delay_ms, keys::MENU_CLOSE_DELAY_MS, &env.menu_close_delay_ms),
        ];
        for (target, key, raw) in millis {
            apply_parsed(target, key, raw, parse_millis, &mut errors);
        }

        let flags = [
            (&mut self.enable_analytics, keys::ENABLE_ANALYTICS, &env.enable_analytics),
            (&mut self.enable_error_tracking, keys::ENABLE_ERROR_TRACKING, &env.enable_error_tracking),
            (&mut self.auto_advance, keys::AUTO_ADVANCE, &env.auto_advance),
            (&mut self.debug_logging, keys::DEBUG_LOGGING, &env.debug_logging),
        ];
        for (target, key, raw) in flags {
            apply_parsed(target, key, raw, parse_bool_value, &mut errors);
        }

        errors
    }

    /// Like [`AppConfig::apply_env`] but stops at the first rejected value.
    pub fn apply_env_strict(&mut self, env: &EnvOverrides) -> Result<(), ConfigError> {
        match self.apply_env(env).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Raw configuration document.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FileConfig {
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub app_description: Option<String>,
    pub environment: Option<String>,
    pub api_base_url: Option<String>,
    pub support_phone: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub session_timeout_ms: Option<u64>,
    pub auth_api: Option<String>,
    pub accounts_api: Option<String>,
    pub transactions_api: Option<String>,
    pub cards_api: Option<String>,
    pub loans_api: Option<String>,
    pub sentry_dsn: Option<String>,
    pub google_analytics_id: Option<String>,
    pub hotjar_id: Option<String>,
    pub enable_analytics: Option<bool>,
    pub enable_error_tracking: Option<bool>,
    pub carousel_interval_ms: Option<u64>,
    pub menu_close_delay_ms: Option<u64>,
    pub auto_advance: Option<bool>,
    pub debug_logging: Option<bool>,
}

impl FileConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse { source })
    }
}

/// Unparsed environment values, one per key in [`keys`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvOverrides {
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub app_description: Option<String>,
    pub environment: Option<String>,
    pub api_base_url: Option<String>,
    pub support_phone: Option<String>,
    pub request_timeout_ms: Option<String>,
    pub session_timeout_ms: Option<String>,
    pub auth_api: Option<String>,
    pub accounts_api: Option<String>,
    pub transactions_api: Option<String>,
    pub cards_api: Option<String>,
    pub loans_api: Option<String>,
    pub sentry_dsn: Option<String>,
    pub google_analytics_id: Option<String>,
    pub hotjar_id: Option<String>,
    pub enable_analytics: Option<String>,
    pub enable_error_tracking: Option<String>,
    pub carousel_interval_ms: Option<String>,
    pub menu_close_delay_ms: Option<String>,
    pub auto_advance: Option<String>,
    pub debug_logging: Option<String>,
}

impl EnvOverrides {
    pub fn gather(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            app_name: lookup(keys::APP_NAME),
            app_version: lookup(keys::APP_VERSION),
            app_description: lookup(keys::APP_DESCRIPTION),
            environment: lookup(keys::ENVIRONMENT),
            api_base_url: lookup(keys::API_BASE_URL),
            support_phone: lookup(keys::SUPPORT_PHONE),
            request_timeout_ms: lookup(keys::REQUEST_TIMEOUT_MS),
            session_timeout_ms: lookup(keys::SESSION_TIMEOUT_MS),
            auth_api: lookup(keys::AUTH_API),
            accounts_api: lookup(keys::ACCOUNTS_API),
            transactions_api: lookup(keys::TRANSACTIONS_API),
            cards_api: lookup(keys::CARDS_API),
            loans_api: lookup(keys::LOANS_API),
            sentry_dsn: lookup(keys::SENTRY_DSN),
            google_analytics_id: lookup(keys::GOOGLE_ANALYTICS_ID),
            hotjar_id: lookup(keys::HOTJAR_ID),
            enable_analytics: lookup(keys::ENABLE_ANALYTICS),
            enable_error_tracking: lookup(keys::ENABLE_ERROR_TRACKING),
            carousel_interval_ms: lookup(keys::CAROUSEL_INTERVAL_MS),
            menu_close_delay_ms: lookup(keys::MENU_CLOSE_DELAY_MS),
            auto_advance: lookup(keys::AUTO_ADVANCE),
            debug_logging: lookup(keys::DEBUG_LOGGING),
        }
    }

    /// Values baked in by `option_env!` when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::gather(|key| build_time_var(key).map(str::to_string))
    }
}

/// Everything [`AppConfig::load`] layers over the defaults.
#[derive(Debug, Default, Clone)]
pub struct ConfigSources {
    pub inline_toml: Option<String>,
    pub env: EnvOverrides,
}

impl ConfigSources {
    pub fn from_build_env() -> Self {
        Self {
            inline_toml: build_time_var(keys::CONFIG_INLINE).map(str::to_string),
            env: EnvOverrides::from_build_env(),
        }
    }
}

fn build_time_var(key: &str) -> Option<&'static str> {
    match key {
        keys::APP_NAME => option_env!("BANKFRONT_APP_NAME"),
        keys::APP_VERSION => option_env!("BANKFRONT_APP_VERSION"),
        keys::APP_DESCRIPTION => option_env!("BANKFRONT_APP_DESCRIPTION"),
        keys::ENVIRONMENT => option_env!("BANKFRONT_ENVIRONMENT"),
        keys::API_BASE_URL => option_env!("BANKFRONT_API_BASE_URL"),
        keys::SUPPORT_PHONE => option_env!("BANKFRONT_SUPPORT_PHONE"),
        keys::REQUEST_TIMEOUT_MS => option_env!("BANKFRONT_REQUEST_TIMEOUT_MS"),
        keys::SESSION_TIMEOUT_MS => option_env!("BANKFRONT_SESSION_TIMEOUT_MS"),
        keys::AUTH_API => option_env!("BANKFRONT_AUTH_API"),
        keys::ACCOUNTS_API => option_env!("BANKFRONT_ACCOUNTS_API"),
        keys::TRANSACTIONS_API => option_env!("BANKFRONT_TRANSACTIONS_API"),
        keys::CARDS_API => option_env!("BANKFRONT_CARDS_API"),
        keys::LOANS_API => option_env!("BANKFRONT_LOANS_API"),
        keys::SENTRY_DSN => option_env!("BANKFRONT_SENTRY_DSN"),
        keys::GOOGLE_ANALYTICS_ID => option_env!("BANKFRONT_GOOGLE_ANALYTICS_ID"),
        keys::HOTJAR_ID => option_env!("BANKFRONT_HOTJAR_ID"),
        keys::ENABLE_ANALYTICS => option_env!("BANKFRONT_ENABLE_ANALYTICS"),
        keys::ENABLE_ERROR_TRACKING => option_env!("BANKFRONT_ENABLE_ERROR_TRACKING"),
        keys::CAROUSEL_INTERVAL_MS => option_env!("BANKFRONT_CAROUSEL_INTERVAL_MS"),
        keys::MENU_CLOSE_DELAY_MS => option_env!("BANKFRONT_MENU_CLOSE_DELAY_MS"),
        keys::AUTO_ADVANCE => option_env!("BANKFRONT_AUTO_ADVANCE"),
        keys::DEBUG_LOGGING => option_env!("BANKFRONT_DEBUG_LOGGING"),
        keys::CONFIG_INLINE => option_env!("BANKFRONT_CONFIG_INLINE"),
        _ => None,
    }
}

/// Parse a boolean value, accepting common env-style forms.
///
/// Truthy (case-insensitive): `1`, `true`, `yes`, `on`.
/// Falsy: `0`, `false`, `no`, `off`.
/// Anything else is rejected instead of being read as `false`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_bool_value(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    parse_bool(raw).ok_or_else(|| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        expected: "a boolean (true/false, yes/no, on/off, 1/0)",
    })
}

/// Whole milliseconds, greater than zero. A unit suffix (`12000ms`) is an error.
fn parse_millis(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            expected: "a positive number of milliseconds",
        }),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn apply_parsed<T>(
    target: &mut T,
    key: &'static str,
    raw: &Option<String>,
    parse: fn(&'static str, &str) -> Result<T, ConfigError>,
    errors: &mut Vec<ConfigError>,
) {
    let Some(raw) = non_empty(raw) else {
        return;
    };
    match parse(key, raw) {
        Ok(value) => *target = value,
        Err(err) => errors.push(err),
    }
}

fn set_positive(target: &mut u64, key: &'static str, value: u64, errors: &mut Vec<ConfigError>) {
    if value == 0 {
        errors.push(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            expected: "a positive number of milliseconds",
        });
    } else {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> EnvOverrides {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvOverrides::gather(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.app_name(), "Meridian Bank");
        assert_eq!(config.environment(), "development");
        assert_eq!(config.carousel_interval(), Duration::from_millis(5_000));
        assert_eq!(config.menu_close_delay(), Duration::from_millis(150));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.auto_advance());
        assert!(!config.debug_logging());
        assert!(!config.is_production());
        assert_eq!(config.app_version(), "1.0.0");
        assert_eq!(config.session_timeout(), Duration::from_secs(30 * 60));
        assert_eq!(config.auth_api(), "/auth");
        assert_eq!(config.loans_api(), "/loans");
        assert_eq!(config.sentry_dsn(), None);
        assert!(!config.enable_analytics());
        assert!(!config.enable_error_tracking());
    }

    #[test]
    fn environment_predicates() {
        let config = AppConfig::default();
        assert!(config.is_development());
        assert!(!config.is_test());

        let mut config = AppConfig::default();
        config.apply_env(&env(&[(keys::ENVIRONMENT, "Test")]));
        assert!(config.is_test());
        assert!(!config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn api_url_appends_endpoint_to_base() {
        let config = AppConfig::default();
        assert_eq!(
            config.api_url(config.accounts_api()),
            "https://api.meridian.example/accounts"
        );

        let mut config = AppConfig::default();
        config.apply_env(&env(&[
            (keys::API_BASE_URL, "http://localhost:3001/api"),
            (keys::AUTH_API, "/v2/auth"),
        ]));
        assert_eq!(
            config.api_url(config.auth_api()),
            "http://localhost:3001/api/v2/auth"
        );
    }

    #[test]
    fn blank_optional_values_read_as_none() {
        let config = AppConfig::from_toml_str(
            r#"
sentry_dsn = "   "
google_analytics_id = "G-12345"
"#,
        )
        .expect("valid toml");
        assert_eq!(config.sentry_dsn(), None);
        assert_eq!(config.google_analytics_id(), Some("G-12345"));
        assert_eq!(config.hotjar_id(), None);

        let mut config = AppConfig::default();
        config.apply_env(&env(&[
            (keys::HOTJAR_ID, ""),
            (keys::SENTRY_DSN, " https://key@sentry.meridian.example/1 "),
        ]));
        assert_eq!(config.hotjar_id(), None);
        assert_eq!(
            config.sentry_dsn(),
            Some("https://key@sentry.meridian.example/1")
        );
    }

    #[test]
    fn feature_flags_and_endpoints_follow_env() {
        let mut config = AppConfig::default();
        let errors = config.apply_env(&env(&[
            (keys::ENABLE_ANALYTICS, "true"),
            (keys::ENABLE_ERROR_TRACKING, "yes"),
            (keys::CARDS_API, "/v2/cards"),
            (keys::APP_DESCRIPTION, "Banking for the harbor"),
        ]));

        assert!(errors.is_empty());
        assert!(config.enable_analytics());
        assert!(config.enable_error_tracking());
        assert_eq!(config.cards_api(), "/v2/cards");
        assert_eq!(config.app_description(), "Banking for the harbor");
    }

    #[test]
    fn millisecond_values_with_units_are_rejected() {
        let mut config = AppConfig::default();
        let errors = config.apply_env(&env(&[
            (keys::REQUEST_TIMEOUT_MS, "12000ms"),
            (keys::SESSION_TIMEOUT_MS, "900000"),
        ]));

        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains(keys::REQUEST_TIMEOUT_MS));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.session_timeout(), Duration::from_secs(15 * 60));
    }

    #[test]
    fn parse_bool_accepts_env_forms() {
        for raw in ["1", "true", "YES", " on "] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn env_overrides_replace_defaults() {
        let mut config = AppConfig::default();
        let errors = config.apply_env(&env(&[
            (keys::APP_NAME, "Harbor Credit Union"),
            (keys::ENVIRONMENT, "production"),
            (keys::CAROUSEL_INTERVAL_MS, "8000"),
            (keys::AUTO_ADVANCE, "off"),
        ]));

        assert!(errors.is_empty());
        assert_eq!(config.app_name(), "Harbor Credit Union");
        assert!(config.is_production());
        assert_eq!(config.carousel_interval(), Duration::from_secs(8));
        assert!(!config.auto_advance());
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = AppConfig::default();
        let errors = config.apply_env(&env(&[
            (keys::APP_NAME, "   "),
            (keys::MENU_CLOSE_DELAY_MS, ""),
        ]));
        assert!(errors.is_empty());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_env_values_keep_defaults() {
        let mut config = AppConfig::default();
        let errors = config.apply_env(&env(&[
            (keys::MENU_CLOSE_DELAY_MS, "0"),
            (keys::CAROUSEL_INTERVAL_MS, "soon"),
            (keys::DEBUG_LOGGING, "verbose"),
            (keys::SUPPORT_PHONE, "1-888-000-1111"),
        ]));

        assert_eq!(errors.len(), 3);
        assert_eq!(config.menu_close_delay(), Duration::from_millis(150));
        assert_eq!(config.carousel_interval(), Duration::from_millis(5_000));
        assert!(!config.debug_logging());
        assert_eq!(config.support_phone(), "1-888-000-1111");
    }

    #[test]
    fn strict_env_reports_key() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env_strict(&env(&[(keys::AUTO_ADVANCE, "sometimes")]))
            .expect_err("invalid bool");
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, keys::AUTO_ADVANCE);
                assert_eq!(value, "sometimes");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn toml_document_overlays_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
app_name = "Meridian Bank Staging"
environment = "staging"
carousel_interval_ms = 7000
debug_logging = true
"#,
        )
        .expect("valid toml");

        assert_eq!(config.app_name(), "Meridian Bank Staging");
        assert_eq!(config.environment(), "staging");
        assert_eq!(config.carousel_interval(), Duration::from_secs(7));
        assert!(config.debug_logging());
        assert_eq!(config.menu_close_delay(), Duration::from_millis(150));
    }

    #[test]
    fn toml_rejects_zero_delay() {
        let err = AppConfig::from_toml_str("menu_close_delay_ms = 0").expect_err("zero delay");
        assert!(err.to_string().contains(keys::MENU_CLOSE_DELAY_MS));
    }

    #[test]
    fn toml_syntax_error_is_reported() {
        let err = AppConfig::from_toml_str("app_name = ").expect_err("broken toml");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_layers_env_over_inline_document() {
        let sources = ConfigSources {
            inline_toml: Some(
                "app_name = \"From File\"\ncarousel_interval_ms = 6000".to_string(),
            ),
            env: env(&[(keys::APP_NAME, "From Env")]),
        };
        let config = AppConfig::load(sources);

        assert_eq!(config.app_name(), "From Env");
        assert_eq!(config.carousel_interval(), Duration::from_secs(6));
    }

    #[test]
    fn load_survives_broken_inline_document() {
        let sources = ConfigSources {
            inline_toml: Some("this is not toml".to_string()),
            env: env(&[(keys::DEBUG_LOGGING, "yes")]),
        };
        let config = AppConfig::load(sources);

        assert!(config.debug_logging());
        assert_eq!(config.app_name(), "Meridian Bank");
    }
}
