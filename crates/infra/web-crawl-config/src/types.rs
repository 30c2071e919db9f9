//! Configuration types for the web-crawl plugin.
//!
//! The root type is [`PluginConfig`]. Every section uses `#[serde(default)]`
//! so partial documents work; missing keys take the values below.

use jina_async::JinaConfig;
use jina_async::types::{
    ContentOptions, EngineMode, ReaderOptions, SearchOptions, SearchRequest,
};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Allowed values of `search.search_nation`.
pub const NATION_CHOICES: &[&str] = &[
    "not-specified",
    "US",
    "CN",
    "JP",
    "DE",
    "FR",
    "GB",
    "IN",
    "CA",
    "AU",
    "BR",
    "RU",
    "IT",
    "ES",
];

/// Allowed values of `search.search_language`.
pub const LANGUAGE_CHOICES: &[&str] = &["not-specified", "en", "zh-cn", "ja", "de", "fr", "es"];

/// Allowed values of `engine_mode` in both `search` and `extract`.
pub const ENGINE_MODE_CHOICES: &[&str] = &["default", "fast", "quality"];

fn choice_schema(choices: &[&str]) -> Schema {
    json_schema!({ "type": "string", "enum": choices })
}

fn nation_schema(_: &mut SchemaGenerator) -> Schema {
    choice_schema(NATION_CHOICES)
}

fn language_schema(_: &mut SchemaGenerator) -> Schema {
    choice_schema(LANGUAGE_CHOICES)
}

fn engine_mode_schema(_: &mut SchemaGenerator) -> Schema {
    choice_schema(ENGINE_MODE_CHOICES)
}

/// Root configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PluginConfig {
    /// Plugin metadata.
    #[schemars(description = "插件基本信息")]
    pub plugin: PluginSection,

    /// Jina service credentials and endpoints.
    #[schemars(description = "Jina 服务配置")]
    pub provider: ProviderConfig,

    /// `search_web` tool settings.
    #[schemars(description = "搜索功能配置")]
    pub search: SearchConfig,

    /// `crawl_url` tool settings.
    #[schemars(description = "URL 内容提取功能配置")]
    pub extract: ExtractConfig,
}

/// Plugin metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PluginSection {
    #[schemars(description = "插件名称")]
    pub name: String,

    #[schemars(description = "插件版本")]
    pub version: String,

    /// Whether the host should register this plugin's tools.
    #[schemars(description = "是否启用插件")]
    pub enabled: bool,
}

impl Default for PluginSection {
    fn default() -> Self {
        Self {
            name: "cky-web-crawl".into(),
            version: "1.0.0".into(),
            enabled: false,
        }
    }
}

/// Jina service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProviderConfig {
    /// Jina API key, from the file or `JINA_API_KEY`.
    ///
    /// Serialized as `""` when unset and `"[REDACTED]"` otherwise.
    #[serde(
        deserialize_with = "deserialize_secret",
        serialize_with = "serialize_secret"
    )]
    #[schemars(with = "String", description = "Jina API Key")]
    pub jina_api_key: Option<SecretString>,

    /// Search endpoint.
    pub search_endpoint: String,

    /// Reader (content extraction) endpoint.
    pub reader_endpoint: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            jina_api_key: None,
            search_endpoint: jina_async::config::JINA_SEARCH_BASE.into(),
            reader_endpoint: jina_async::config::JINA_READER_BASE.into(),
        }
    }
}

impl ProviderConfig {
    /// Client configuration for these credentials and endpoints.
    ///
    /// The document is authoritative; env overrides are applied by the loader.
    pub fn to_jina_config(&self) -> JinaConfig {
        let config = JinaConfig::new()
            .with_search_base(&self.search_endpoint)
            .with_reader_base(&self.reader_endpoint)
            .without_api_key();
        match &self.jina_api_key {
            Some(key) => config.with_api_key(key.expose_secret()),
            None => config,
        }
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}

#[allow(clippy::ref_option)]
fn serialize_secret<S>(key: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let set = key
        .as_ref()
        .is_some_and(|k| !k.expose_secret().trim().is_empty());
    serializer.serialize_str(if set { "[REDACTED]" } else { "" })
}

/// Search tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SearchConfig {
    /// Country/region code, or `not-specified`.
    #[schemars(schema_with = "nation_schema", description = "搜索国家/地区代码")]
    pub search_nation: String,

    /// Result language code, or `not-specified`.
    #[schemars(schema_with = "language_schema", description = "搜索语言代码")]
    pub search_language: String,

    #[schemars(description = "获取每个搜索结果 URL 的具体信息")]
    pub crawl_details: bool,

    /// `<= 0` disables the hint.
    #[schemars(description = "加载超时时间（秒）(获取每个 URL 结果时)")]
    pub timeout: i64,

    #[schemars(
        schema_with = "engine_mode_schema",
        description = "引擎模式 (平衡/快速/质量) (获取每个 URL 结果时)"
    )]
    pub engine_mode: String,

    #[schemars(description = "移除图片内容 (获取每个 URL 结果时)")]
    pub remove_pictures: bool,

    #[schemars(description = "将链接移到内容末尾 (获取每个 URL 结果时)")]
    pub move_links_to_end: bool,

    #[schemars(description = "将图片链接移到内容末尾 (获取每个 URL 结果时)")]
    pub move_pics_to_end: bool,

    #[schemars(description = "包含图片说明Alt文本 (获取每个 URL 结果时)")]
    pub add_pic_alt: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_nation: "CN".into(),
            search_language: "zh-cn".into(),
            crawl_details: false,
            timeout: 10,
            engine_mode: "default".into(),
            remove_pictures: true,
            move_links_to_end: true,
            move_pics_to_end: true,
            add_pic_alt: true,
        }
    }
}

impl SearchConfig {
    /// Request body for `keywords` with the configured region and language.
    pub fn to_request(&self, keywords: &str) -> SearchRequest {
        SearchRequest::new(keywords)
            .with_nation(&self.search_nation)
            .with_language(&self.search_language)
    }

    /// Header options for a search.
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            crawl_details: self.crawl_details,
            content: ContentOptions {
                engine: EngineMode::parse(&self.engine_mode),
                timeout: self.timeout,
                remove_images: self.remove_pictures,
                links_summary: self.move_links_to_end,
                images_summary: self.move_pics_to_end,
                generated_alt: self.add_pic_alt,
            },
        }
    }
}

/// URL content extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExtractConfig {
    /// Load timeout in seconds; `<= 0` disables the hint.
    #[schemars(description = "加载超时时间（秒）")]
    pub timeout: i64,

    #[schemars(description = "跟随重定向")]
    pub follow_redirect: bool,

    #[schemars(description = "是否使用自定义预处理脚本")]
    pub use_custom_prehandler_scripts: bool,

    /// Only sent while `use_custom_prehandler_scripts` is on.
    #[schemars(description = "自定义预处理脚本列表")]
    pub custom_prehandler_scripts_list: Vec<String>,

    #[schemars(description = "包含Shadow DOM内容")]
    pub include_shadow_dom: bool,

    #[schemars(description = "包含iframe内容")]
    pub include_iframes: bool,

    #[schemars(description = "移除图片内容")]
    pub remove_pictures: bool,

    #[schemars(description = "使用ReaderLM V2进行内容提取")]
    pub use_readerlm_v2: bool,

    #[schemars(description = "将链接移到内容末尾")]
    pub move_links_to_end: bool,

    #[schemars(description = "将图片链接移到内容末尾")]
    pub move_pics_to_end: bool,

    #[schemars(description = "包含图片说明Alt文本")]
    pub add_pic_alt: bool,

    #[schemars(description = "启用为GPT-OSS优化")]
    pub optimize_for_gpt_oss: bool,

    #[schemars(
        schema_with = "engine_mode_schema",
        description = "引擎模式 (平衡/快速/质量)"
    )]
    pub engine_mode: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            follow_redirect: true,
            use_custom_prehandler_scripts: false,
            custom_prehandler_scripts_list: vec![],
            include_shadow_dom: false,
            include_iframes: false,
            remove_pictures: true,
            use_readerlm_v2: false,
            move_links_to_end: true,
            move_pics_to_end: true,
            add_pic_alt: true,
            optimize_for_gpt_oss: false,
            engine_mode: "default".into(),
        }
    }
}

impl ExtractConfig {
    /// Header options for a content extraction.
    pub fn to_options(&self) -> ReaderOptions {
        ReaderOptions {
            content: ContentOptions {
                engine: EngineMode::parse(&self.engine_mode),
                timeout: self.timeout,
                remove_images: self.remove_pictures,
                links_summary: self.move_links_to_end,
                images_summary: self.move_pics_to_end,
                generated_alt: self.add_pic_alt,
            },
            follow_redirects: self.follow_redirect,
            use_prehandler_scripts: self.use_custom_prehandler_scripts,
            prehandler_scripts: self.custom_prehandler_scripts_list.clone(),
            include_shadow_dom: self.include_shadow_dom,
            include_iframes: self.include_iframes,
            use_readerlm_v2: self.use_readerlm_v2,
            optimize_for_gpt_oss: self.optimize_for_gpt_oss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jina_async::config::Config;
    use jina_async::types::NOT_SPECIFIED;

    #[test]
    fn defaults_match_plugin_schema() {
        let cfg = PluginConfig::default();
        assert_eq!(cfg.plugin.name, "cky-web-crawl");
        assert!(!cfg.plugin.enabled);
        assert!(cfg.provider.jina_api_key.is_none());
        assert_eq!(cfg.search.search_nation, "CN");
        assert_eq!(cfg.search.search_language, "zh-cn");
        assert!(!cfg.search.crawl_details);
        assert_eq!(cfg.extract.timeout, 10);
        assert!(cfg.extract.follow_redirect);
        assert!(cfg.extract.custom_prehandler_scripts_list.is_empty());
    }

    #[test]
    fn default_search_sends_metadata_only() {
        let opts = SearchConfig::default().to_options();
        assert!(!opts.crawl_details);
        let h = opts.headers().unwrap();
        assert_eq!(h.len(), 1);
        assert_eq!(h.get("x-respond-with").unwrap(), "no-content");
    }

    #[test]
    fn search_request_skips_sentinel() {
        let cfg = SearchConfig {
            search_nation: NOT_SPECIFIED.into(),
            search_language: "en".into(),
            ..Default::default()
        };
        let req = cfg.to_request("\"exact phrase\" -noise");
        assert_eq!(req.q, "\"exact phrase\" -noise");
        assert_eq!(req.gl, None);
        assert_eq!(req.hl.as_deref(), Some("en"));
    }

    #[test]
    fn extract_defaults_map_to_headers() {
        let h = ExtractConfig::default().to_options().headers().unwrap();
        assert_eq!(h.get("x-timeout").unwrap(), "10");
        assert_eq!(h.get("x-follow-redirects").unwrap(), "true");
        assert_eq!(h.get("x-retain-images").unwrap(), "none");
        assert_eq!(h.get("x-with-links-summary").unwrap(), "true");
        assert_eq!(h.get("x-with-images-summary").unwrap(), "true");
        assert_eq!(h.get("x-with-generated-alt").unwrap(), "true");
        assert!(h.get("x-engine").is_none());
        assert!(h.get("x-use-readerlm-v2").is_none());
        assert_eq!(h.len(), 6);
    }

    #[test]
    fn provider_builds_client_config() {
        let provider = ProviderConfig {
            jina_api_key: Some(SecretString::from("jina_abc".to_string())),
            search_endpoint: "http://localhost:1/s".into(),
            reader_endpoint: "http://localhost:1/r".into(),
        };
        let jina = provider.to_jina_config();
        assert_eq!(jina.search_url(), "http://localhost:1/s");
        assert_eq!(jina.reader_url(), "http://localhost:1/r");
        assert_eq!(
            jina.headers().unwrap().get("authorization").unwrap(),
            "Bearer jina_abc"
        );
    }

    #[test]
    fn api_key_is_redacted_when_serialized() {
        let mut cfg = PluginConfig::default();
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["provider"]["jina_api_key"], "");

        cfg.provider.jina_api_key = Some(SecretString::from("jina_secret".to_string()));
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("jina_secret"));
        assert!(json.contains(r#""jina_api_key":"[REDACTED]""#), "{json}");

        let doc = toml::to_string_pretty(&PluginConfig::default()).unwrap();
        assert!(doc.contains("jina_api_key = \"\""), "{doc}");
        let back: PluginConfig = toml::from_str(&doc).unwrap();
        assert!(back.provider.jina_api_key.as_ref().unwrap().expose_secret().is_empty());
    }
}
