//! Client Configuration
//!
//! Endpoints, timings and the localized string tables. The page may embed a
//! JSON object in `<script type="application/json" id="idea-client-config">`;
//! any field it omits keeps its default.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ClientError;

/// Element holding the embedded JSON config
pub const CONFIG_ELEMENT_ID: &str = "idea-client-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub ideas_url: String,
    pub add_url: String,
    pub done_url: String,
    /// Falls back to the page's `<html lang>` when unset
    pub locale: Option<Locale>,
    pub message_timeout_ms: u32,
    pub log_level: LevelFilter,
    pub log_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ideas_url: "/ideas".to_string(),
            add_url: "/add".to_string(),
            done_url: "/done".to_string(),
            locale: None,
            message_timeout_ms: 2000,
            log_level: LevelFilter::Info,
            log_capacity: ring_logger::DEFAULT_CAPACITY,
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the embedded config from the current document.
    ///
    /// A missing config element is not an error; a malformed one is.
    pub fn load() -> Result<Self, ClientError> {
        let document = web_sys::window()
            .ok_or(ClientError::NoWindow)?
            .document()
            .ok_or(ClientError::NoWindow)?;

        let embedded = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .filter(|raw| !raw.trim().is_empty());

        match embedded {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Fill in the page locale when the config names none
    pub fn with_page_locale(mut self, page: Option<Locale>) -> Self {
        if self.locale.is_none() {
            self.locale = page;
        }
        self
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.unwrap_or_default().strings()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Map a BCP 47 tag such as `zh-CN` or `en-US` onto a supported locale
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("zh") {
            Locale::Zh
        } else {
            Locale::En
        }
    }

    /// Locale from the page's `<html lang>` attribute
    pub fn from_document() -> Option<Self> {
        web_sys::window()?
            .document()?
            .document_element()?
            .get_attribute("lang")
            .map(|tag| Self::from_tag(&tag))
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}

/// User-visible text for one locale
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub idea_placeholder: &'static str,
    pub date_label: &'static str,
    pub add_button: &'static str,
    pub mark_done: &'static str,
    pub no_ideas: &'static str,
    pub load_failed: &'static str,
    pub added: &'static str,
    pub add_failed: &'static str,
    pub idea_required: &'static str,
}

pub static EN: Strings = Strings {
    title: "Ideas",
    idea_placeholder: "New idea...",
    date_label: "Date",
    add_button: "Add idea",
    mark_done: "Mark done",
    no_ideas: "No ideas recorded.",
    load_failed: "Failed to load ideas.",
    added: "Idea added.",
    add_failed: "Failed to add idea.",
    idea_required: "Please enter an idea.",
};

pub static ZH: Strings = Strings {
    title: "想法",
    idea_placeholder: "新想法...",
    date_label: "日期",
    add_button: "添加",
    mark_done: "标记完成",
    no_ideas: "暂无想法。",
    load_failed: "加载失败。",
    added: "已添加。",
    add_failed: "添加失败。",
    idea_required: "请输入想法。",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"ideas_url": "/api/ideas", "locale": "zh"}"#).unwrap();

        assert_eq!(config.ideas_url, "/api/ideas");
        assert_eq!(config.add_url, "/add");
        assert_eq!(config.done_url, "/done");
        assert_eq!(config.locale, Some(Locale::Zh));
        assert_eq!(config.message_timeout_ms, 2000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level_parses() {
        let config = ClientConfig::from_json(r#"{"log_level": "DEBUG", "log_capacity": 16}"#).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_capacity, 16);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let result = ClientConfig::from_json(r#"{"message_timeout_ms": "soon"}"#);
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::Zh);
        assert_eq!(Locale::from_tag("ZH_tw"), Locale::Zh);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_page_locale_fills_default_config() {
        // a malformed config falls back to defaults, which still honour the page
        assert!(ClientConfig::from_json(r#"{"message_timeout_ms": "soon"}"#).is_err());
        let fallback = ClientConfig::default().with_page_locale(Some(Locale::Zh));
        assert_eq!(fallback.strings(), &ZH);

        let no_page = ClientConfig::default().with_page_locale(None);
        assert_eq!(no_page.strings(), &EN);
    }

    #[test]
    fn test_configured_locale_beats_page() {
        let config = ClientConfig::from_json(r#"{"locale": "en"}"#)
            .unwrap()
            .with_page_locale(Some(Locale::Zh));
        assert_eq!(config.locale, Some(Locale::En));
    }

    #[test]
    fn test_strings_follow_locale() {
        let mut config = ClientConfig::default();
        assert_eq!(config.strings().no_ideas, "No ideas recorded.");

        config.locale = Some(Locale::Zh);
        assert_eq!(config.strings(), &ZH);
    }
}
