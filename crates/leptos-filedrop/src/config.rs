//! File Drop Configuration
//!
//! Static per-instance settings: drop-effect hint, class names, engine.

use serde::{Deserialize, Serialize};

/// Drop-effect hint written to the transfer object while hovering the target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    #[default]
    Copy,
    Move,
    Link,
    None,
}

impl DropEffect {
    /// Value accepted by `DataTransfer.dropEffect`
    pub fn as_str(&self) -> &'static str {
        match self {
            DropEffect::Copy => "copy",
            DropEffect::Move => "move",
            DropEffect::Link => "link",
            DropEffect::None => "none",
        }
    }
}

/// Browser engine family, as far as drag-and-drop quirks are concerned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Engine {
    #[default]
    Standard,
    /// Trident-based engines: `types` is not an array and
    /// assigning `dropEffect` misbehaves
    Legacy,
}

impl Engine {
    /// Whether `dropEffect` may be assigned on this engine
    pub fn supports_drop_effect(&self) -> bool {
        matches!(self, Engine::Standard)
    }
}

/// Class names for the presentation states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Outer wrapper, always applied
    pub root: String,
    /// Inner target, always applied
    pub target: String,
    /// Added to the target while files hover anywhere over the frame
    pub dragging_over_frame: String,
    /// Added to the target while files hover the target itself
    pub dragging_over_target: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            root: "file-drop".to_string(),
            target: "file-drop-target".to_string(),
            dragging_over_frame: "file-drop-dragging-over-frame".to_string(),
            dragging_over_target: "file-drop-dragging-over-target".to_string(),
        }
    }
}

impl ClassNames {
    /// Compose the target class list for the current hover flags.
    /// Frame and target classes are independent, both may apply.
    pub fn target_class(&self, over_frame: bool, over_target: bool) -> String {
        let mut c = self.target.clone();
        if over_frame {
            push_class(&mut c, &self.dragging_over_frame);
        }
        if over_target {
            push_class(&mut c, &self.dragging_over_target);
        }
        c
    }
}

fn push_class(list: &mut String, class: &str) {
    if class.is_empty() {
        return;
    }
    if !list.is_empty() {
        list.push(' ');
    }
    list.push_str(class);
}

/// Event source whose bubbling enter/leave/drop define the frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSource {
    /// The whole document
    #[default]
    Document,
    /// The window itself
    Window,
    /// First element matching a CSS selector
    Selector(String),
}

impl FrameSource {
    /// Short description for logs
    pub fn label(&self) -> &str {
        match self {
            FrameSource::Document => "document",
            FrameSource::Window => "window",
            FrameSource::Selector(sel) => sel,
        }
    }
}

impl From<&str> for FrameSource {
    fn from(selector: &str) -> Self {
        FrameSource::Selector(selector.to_string())
    }
}

impl From<String> for FrameSource {
    fn from(selector: String) -> Self {
        FrameSource::Selector(selector)
    }
}

/// Per-instance configuration, resolved once on mount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDropConfig {
    pub drop_effect: DropEffect,
    pub class_names: ClassNames,
}
