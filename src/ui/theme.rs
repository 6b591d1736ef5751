//! Class helpers shared by pages, keyed on whether the page chrome is shown.

use crate::util::config::LaunchConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chrome {
    /// Full window: header, navigation and footer.
    Standalone,
    /// Hosted inside another page; content only.
    Embedded,
}

impl Chrome {
    pub fn from_config(config: &LaunchConfig) -> Self {
        if config.embedded {
            Chrome::Embedded
        } else {
            Chrome::Standalone
        }
    }

    pub fn shows_chrome(&self) -> bool {
        matches!(self, Chrome::Standalone)
    }
}

// ============================================
// LAYOUT
// ============================================

pub fn page_class(chrome: Chrome) -> &'static str {
    match chrome {
        Chrome::Standalone => "calculator",
        Chrome::Embedded => "calculator embedded",
    }
}

pub fn panel(chrome: Chrome) -> &'static str {
    match chrome {
        Chrome::Standalone => "panel",
        Chrome::Embedded => "panel flat",
    }
}

// ============================================
// BUTTONS
// ============================================

pub fn btn_primary() -> &'static str {
    "btn btn-primary"
}

pub fn btn_secondary() -> &'static str {
    "btn btn-secondary"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button active"
    } else {
        "nav-button"
    }
}

pub fn preset_button(active: bool) -> &'static str {
    if active {
        "preset active"
    } else {
        "preset"
    }
}
