use anyhow::{Context, Result};
use shared::SiteConfig;

use super::logging::Logger;

/// Id of the optional `<script type="application/json">` holding overrides
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Parse the host page's configuration block.
pub fn parse_site_config(json: &str) -> Result<SiteConfig> {
    SiteConfig::from_json(json).with_context(|| format!("reading #{}", CONFIG_ELEMENT_ID))
}

/// Load the configuration once at startup. Falls back to the built-in
/// config when the page has no override or the override is broken.
pub fn load_site_config() -> SiteConfig {
    let raw = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty());

    let config = match raw {
        Some(json) => match parse_site_config(&json) {
            Ok(config) => config,
            Err(e) => {
                Logger::error_with_component("config", &format!("{:#}; using built-in content", e));
                SiteConfig::default()
            }
        },
        None => SiteConfig::default(),
    };

    Logger::set_level(config.log_level);

    for issue in config.content.diagnose() {
        Logger::warn_with_component("config", &issue.to_string());
    }

    Logger::info_with_component(
        "config",
        &format!(
            "loaded {} skills, {} projects, {} clients",
            config.content.skills().len(),
            config.content.projects().len(),
            config.content.clients().len()
        ),
    );

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mentions_element() {
        let err = parse_site_config("[1, 2").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("reading #site-config"));
        assert!(message.contains("invalid site configuration"));
    }

    #[test]
    fn test_parse_override() {
        let config = parse_site_config(r#"{"content": {"clients": ["Solo"]}}"#).unwrap();
        assert_eq!(config.content.clients().len(), 1);
        assert_eq!(config.content.skills().len(), 5);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_config_element_uses_builtin() {
        // The test harness page has no #site-config block
        let config = load_site_config();
        assert_eq!(config, SiteConfig::default());
    }
}
