//! JSON Schema generation for [`PluginConfig`].
//!
//! Hosts render their settings UI from this schema.

use crate::types::PluginConfig;
use schemars::{Schema, generate::SchemaSettings};

/// Generate the JSON Schema for PluginConfig.
pub fn schema() -> Schema {
    SchemaSettings::default()
        .into_generator()
        .into_root_schema_for::<PluginConfig>()
}

/// Generate the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&schema())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn validator() -> jsonschema::Validator {
        jsonschema::validator_for(&serde_json::to_value(schema()).unwrap()).unwrap()
    }

    #[test]
    fn test_schema_is_valid_json() {
        let json = schema_json_pretty().unwrap();
        let _: serde_json::Value = serde_json::from_str(&json).unwrap();
    }

    #[test]
    fn test_schema_has_sections() {
        let json = serde_json::to_value(schema()).unwrap();
        let props = json.get("properties").unwrap();
        for section in ["plugin", "provider", "search", "extract"] {
            assert!(props.get(section).is_some(), "missing section {section}");
        }
        assert!(json.get("$defs").is_some() || json.get("definitions").is_some());
    }

    #[test]
    fn test_schema_never_carries_key_values() {
        let mut config = PluginConfig::default();
        config.provider.jina_api_key = Some(SecretString::from("jina_live_value".to_string()));
        let serialized = serde_json::to_value(&config).unwrap();

        assert!(validator().validate(&serialized).is_ok());
        assert!(!schema_json_pretty().unwrap().contains("jina_live_value"));
    }

    #[test]
    fn test_default_config_validates_against_schema() {
        let config_json = serde_json::to_value(PluginConfig::default()).unwrap();
        let result = validator().validate(&config_json);

        assert!(
            result.is_ok(),
            "Default config should validate against schema: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_partial_config_validates_against_schema() {
        let config_json = serde_json::json!({
            "provider": { "jina_api_key": "jina_x" },
            "extract": { "custom_prehandler_scripts_list": ["a"] }
        });
        let result = validator().validate(&config_json);

        assert!(
            result.is_ok(),
            "Partial config should validate against schema: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_choice_fields_carry_enums_and_labels() {
        let json = serde_json::to_value(schema()).unwrap();
        let defs = &json["$defs"];

        let engine = &defs["SearchConfig"]["properties"]["engine_mode"];
        assert_eq!(engine["type"], "string");
        assert_eq!(engine["enum"], serde_json::json!(["default", "fast", "quality"]));
        assert_eq!(
            engine["description"],
            "引擎模式 (平衡/快速/质量) (获取每个 URL 结果时)"
        );

        let nation = &defs["SearchConfig"]["properties"]["search_nation"];
        assert!(
            nation["enum"]
                .as_array()
                .unwrap()
                .contains(&serde_json::json!("not-specified"))
        );
        assert_eq!(
            defs["ExtractConfig"]["properties"]["engine_mode"]["enum"],
            engine["enum"]
        );
        assert_eq!(
            defs["ExtractConfig"]["properties"]["use_readerlm_v2"]["description"],
            "使用ReaderLM V2进行内容提取"
        );

        let key = &defs["ProviderConfig"]["properties"]["jina_api_key"];
        assert_eq!(key["type"], "string");
        assert_eq!(key["description"], "Jina API Key");
    }

    #[test]
    fn test_unknown_engine_mode_fails_schema() {
        let config_json = serde_json::json!({ "extract": { "engine_mode": "turbo" } });
        assert!(validator().validate(&config_json).is_err());
    }

    #[test]
    fn test_wrong_type_fails_schema() {
        let config_json = serde_json::json!({ "search": { "timeout": "ten" } });
        assert!(validator().validate(&config_json).is_err());
    }
}
