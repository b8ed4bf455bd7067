//! Page Settings
//!
//! Optional JSON settings embedded in the host page:
//!
//! ```html
//! <script id="file-drop-config" type="application/json">
//!   { "frame": "#workspace", "log_level": "debug", "drop_effect": "move" }
//! </script>
//! ```
//!
//! `frame` is a CSS selector, or one of the words `document` and `window`.

use leptos_filedrop::{FileDropConfig, FrameSource};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Element id the settings are read from
pub const SETTINGS_ELEMENT_ID: &str = "file-drop-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Frame selector, `document` or `window`; the document when absent
    pub frame: Option<String>,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    #[serde(flatten)]
    pub file_drop: FileDropConfig,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            frame: None,
            log_level: "info".to_string(),
            file_drop: FileDropConfig::default(),
        }
    }
}

impl PageSettings {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn frame_source(&self) -> FrameSource {
        match self.frame.as_deref().map(str::trim) {
            None | Some("") | Some("document") => FrameSource::Document,
            Some("window") => FrameSource::Window,
            Some(selector) => FrameSource::from(selector),
        }
    }

    /// Unknown level names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Read settings from the page, defaults if missing or malformed.
    /// Returns the parse error too, to be logged once a logger exists.
    pub fn load() -> (Self, Option<serde_json::Error>) {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(text) if !text.trim().is_empty() => match Self::parse(&text) {
                Ok(settings) => (settings, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_filedrop::DropEffect;

    #[test]
    fn test_parse_full_settings() {
        let settings = PageSettings::parse(
            r##"{
                "frame": "#workspace",
                "log_level": "debug",
                "drop_effect": "link",
                "class_names": { "target": "zone" }
            }"##,
        )
        .unwrap();

        assert_eq!(settings.frame.as_deref(), Some("#workspace"));
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
        assert_eq!(settings.file_drop.drop_effect, DropEffect::Link);
        assert_eq!(settings.file_drop.class_names.target, "zone");
        assert_eq!(settings.file_drop.class_names.root, "file-drop");
    }

    #[test]
    fn test_frame_source_words_and_selectors() {
        let with_frame = |frame: Option<&str>| PageSettings {
            frame: frame.map(str::to_string),
            ..PageSettings::default()
        };
        assert_eq!(with_frame(None).frame_source(), FrameSource::Document);
        assert_eq!(with_frame(Some("document")).frame_source(), FrameSource::Document);
        assert_eq!(with_frame(Some(" window ")).frame_source(), FrameSource::Window);
        assert_eq!(
            with_frame(Some("#workspace")).frame_source(),
            FrameSource::Selector("#workspace".into())
        );
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PageSettings::parse("{}").unwrap(), PageSettings::default());
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let settings = PageSettings {
            log_level: "loud".to_string(),
            ..PageSettings::default()
        };
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(PageSettings::parse("{ frame: ").is_err());
    }
}
