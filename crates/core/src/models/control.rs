use serde::{Deserialize, Serialize};

/// The page buttons the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    UpdateAssets,
    AddAsset,
    EditAsset,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::UpdateAssets, Control::AddAsset, Control::EditAsset];

    /// DOM id of the button bound to this control.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Control::UpdateAssets => "update-assets",
            Control::AddAsset => "add-asset",
            Control::EditAsset => "edit-asset",
        }
    }

    /// Look a control up by its DOM id.
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.element_id() == id)
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Enabled flag and caption of a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub enabled: bool,
    pub label: String,
}

impl ControlState {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            enabled: true,
            label: label.into(),
        }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            enabled: false,
            label: label.into(),
        }
    }
}

/// A secondary browser window opened for a form page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub url: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl WindowSpec {
    pub fn new(url: impl Into<String>, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            width,
            height,
        }
    }

    /// Feature string for `window.open`, e.g. `width=600,height=500`.
    #[must_use]
    pub fn features(&self) -> String {
        format!("width={},height={}", self.width, self.height)
    }
}
