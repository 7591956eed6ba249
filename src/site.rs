pub const ACCENT: &str = "#fd7337";

/// Anchors offered in the nav bar and mobile menu.
pub const NAV_ITEMS: [&str; 4] = ["home", "projects", "skills", "contact"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn background(self) -> &'static str {
        match self {
            Theme::Dark => "linear-gradient(135deg, #0f0f23 0%, #1a1a2e 50%, #16213e 100%)",
            Theme::Light => "linear-gradient(135deg, #ffffff 0%, #f8fafc 50%, #f1f5f9 100%)",
        }
    }

    /// Second stop of the accent gradient used on the name and brand.
    pub fn secondary_accent(self) -> &'static str {
        match self {
            Theme::Dark => "#818cf8",
            Theme::Light => "#3b82f6",
        }
    }

    pub fn glow(self) -> &'static str {
        match self {
            Theme::Dark => "#6366f1",
            Theme::Light => "#93c5fd",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark text-white",
            Theme::Light => "text-gray-900",
        }
    }

    pub fn accent_gradient(self) -> String {
        format!(
            "linear-gradient(45deg, {ACCENT}, {})",
            self.secondary_accent()
        )
    }
}

/// Page-level UI flags, owned by the top-level component and handed down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteState {
    pub theme: Theme,
    pub menu_open: bool,
}

impl SiteState {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

pub fn nav_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
