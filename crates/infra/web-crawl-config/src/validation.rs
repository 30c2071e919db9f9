//! Advisory validation for [`PluginConfig`].
//!
//! Validation is advisory - it produces warnings but doesn't prevent the
//! config from being used. In particular a missing API key is reported here
//! but requests are still sent; the service answers with an auth failure.

use crate::types::{ENGINE_MODE_CHOICES, LANGUAGE_CHOICES, NATION_CHOICES, PluginConfig};
use secrecy::ExposeSecret;

/// An advisory warning about a configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryWarning {
    /// Machine-readable warning code.
    pub code: &'static str,

    /// Human-readable warning message.
    pub message: String,

    /// Dotted path to the problematic config field.
    pub path: &'static str,
}

impl std::fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

/// Validate a configuration and return advisory warnings.
pub fn validate(cfg: &PluginConfig) -> Vec<AdvisoryWarning> {
    let mut warnings = vec![];

    let key_missing = cfg
        .provider
        .jina_api_key
        .as_ref()
        .is_none_or(|k| k.expose_secret().trim().is_empty());
    if key_missing {
        warnings.push(AdvisoryWarning {
            code: "provider.jina_api_key.missing",
            path: "provider.jina_api_key",
            message: "No Jina API key configured; requests will fail upstream".into(),
        });
    }

    validate_url(
        &cfg.provider.search_endpoint,
        "provider.search_endpoint",
        "provider.search_endpoint.invalid",
        &mut warnings,
    );
    validate_url(
        &cfg.provider.reader_endpoint,
        "provider.reader_endpoint",
        "provider.reader_endpoint.invalid",
        &mut warnings,
    );

    validate_choice(
        &cfg.search.search_nation,
        NATION_CHOICES,
        "search.search_nation",
        "search.search_nation.unknown",
        &mut warnings,
    );
    validate_choice(
        &cfg.search.search_language,
        LANGUAGE_CHOICES,
        "search.search_language",
        "search.search_language.unknown",
        &mut warnings,
    );
    validate_choice(
        &cfg.search.engine_mode,
        ENGINE_MODE_CHOICES,
        "search.engine_mode",
        "search.engine_mode.unknown",
        &mut warnings,
    );
    validate_choice(
        &cfg.extract.engine_mode,
        ENGINE_MODE_CHOICES,
        "extract.engine_mode",
        "extract.engine_mode.unknown",
        &mut warnings,
    );

    if !cfg.extract.use_custom_prehandler_scripts
        && !cfg.extract.custom_prehandler_scripts_list.is_empty()
    {
        warnings.push(AdvisoryWarning {
            code: "extract.custom_prehandler_scripts_list.unused",
            path: "extract.custom_prehandler_scripts_list",
            message: "Scripts are listed but use_custom_prehandler_scripts is false".into(),
        });
    }

    warnings
}

fn validate_url(
    url: &str,
    path: &'static str,
    code: &'static str,
    warnings: &mut Vec<AdvisoryWarning>,
) {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        warnings.push(AdvisoryWarning {
            code,
            path,
            message: format!("Expected an http(s) URL, got: '{url}'"),
        });
    }
}

fn validate_choice(
    value: &str,
    choices: &[&str],
    path: &'static str,
    code: &'static str,
    warnings: &mut Vec<AdvisoryWarning>,
) {
    if !choices.contains(&value) {
        warnings.push(AdvisoryWarning {
            code,
            path,
            message: format!(
                "Unknown value '{value}'. Expected one of: {}",
                choices.join(", ")
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn keyed() -> PluginConfig {
        let mut config = PluginConfig::default();
        config.provider.jina_api_key = Some(SecretString::from("jina_k".to_string()));
        config
    }

    #[test]
    fn keyed_default_config_has_no_warnings() {
        let warnings = validate(&keyed());
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn missing_key_warns() {
        let warnings = validate(&PluginConfig::default());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "provider.jina_api_key.missing");

        let mut config = PluginConfig::default();
        config.provider.jina_api_key = Some(SecretString::from("  ".to_string()));
        assert_eq!(validate(&config).len(), 1);
    }

    #[test]
    fn unknown_choices_warn() {
        let mut config = keyed();
        config.search.search_nation = "XX".into();
        config.search.search_language = "klingon".into();
        config.search.engine_mode = "turbo".into();
        config.extract.engine_mode = "slow".into();

        let codes: Vec<_> = validate(&config).into_iter().map(|w| w.code).collect();
        assert_eq!(
            codes,
            vec![
                "search.search_nation.unknown",
                "search.search_language.unknown",
                "search.engine_mode.unknown",
                "extract.engine_mode.unknown",
            ]
        );
    }

    #[test]
    fn not_specified_is_a_valid_choice() {
        let mut config = keyed();
        config.search.search_nation = "not-specified".into();
        config.search.search_language = "not-specified".into();
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn invalid_endpoint_warns() {
        let mut config = keyed();
        config.provider.reader_endpoint = "r.jina.ai".into();

        let warnings = validate(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "provider.reader_endpoint.invalid");
    }

    #[test]
    fn unused_script_list_warns() {
        let mut config = keyed();
        config.extract.custom_prehandler_scripts_list = vec!["a".into()];
        assert!(
            validate(&config)
                .iter()
                .any(|w| w.code == "extract.custom_prehandler_scripts_list.unused")
        );
    }

    #[test]
    fn warning_display() {
        let warning = AdvisoryWarning {
            code: "test.code",
            path: "test.path",
            message: "Test message".into(),
        };
        assert_eq!(warning.to_string(), "[test.code] test.path: Test message");
    }
}
