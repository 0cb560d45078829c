//! Editing tools shared by both views

use serde::{Deserialize, Serialize};

/// Active manipulation tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTool {
    #[default]
    Select,
    Rotate,
    Scale,
}

impl EditorTool {
    pub const ALL: [EditorTool; 3] = [EditorTool::Select, EditorTool::Rotate, EditorTool::Scale];

    pub fn label(&self) -> &'static str {
        match self {
            EditorTool::Select => "Select",
            EditorTool::Rotate => "Rotate",
            EditorTool::Scale => "Scale",
        }
    }

    /// Keyboard shortcut shown in tooltips
    pub fn shortcut(&self) -> &'static str {
        match self {
            EditorTool::Select => "V",
            EditorTool::Rotate => "R",
            EditorTool::Scale => "S",
        }
    }
}
