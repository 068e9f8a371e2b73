use ratatui::style::Color;

/// UI colors for the playground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name ("dark" or "light")
    pub name: String,

    // Editor pane
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub cursor: Color,
    pub selection_bg: Color,
    pub line_number_fg: Color,

    // Output pane
    pub output_bg: Color,
    pub output_fg: Color,

    // Chrome
    pub border_fg: Color,
    pub title_fg: Color,
    pub accent: Color,
    pub muted_fg: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub example_active_fg: Color,
    pub example_active_bg: Color,

    // Error line
    pub error_fg: Color,
    pub error_bg: Color,

    // Key help footer
    pub help_fg: Color,
    pub help_key_fg: Color,
}

impl Theme {
    /// Default dark theme (VSCode Dark+ inspired)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            editor_bg: Color::Rgb(30, 30, 30),
            editor_fg: Color::Rgb(212, 212, 212),
            cursor: Color::Rgb(82, 139, 255),
            selection_bg: Color::Rgb(38, 79, 120),
            line_number_fg: Color::Rgb(133, 133, 133),

            output_bg: Color::Rgb(24, 24, 24),
            output_fg: Color::Rgb(156, 220, 254),

            border_fg: Color::DarkGray,
            title_fg: Color::Yellow,
            accent: Color::Cyan,
            muted_fg: Color::DarkGray,
            button_fg: Color::Black,
            button_bg: Color::Rgb(78, 201, 176),
            example_active_fg: Color::Yellow,
            example_active_bg: Color::Blue,

            error_fg: Color::Red,
            error_bg: Color::Rgb(60, 20, 20),

            help_fg: Color::White,
            help_key_fg: Color::Cyan,
        }
    }

    /// Light theme (VSCode Light+ inspired)
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            editor_bg: Color::Rgb(255, 255, 255),
            editor_fg: Color::Rgb(0, 0, 0),
            cursor: Color::Rgb(0, 0, 255),
            selection_bg: Color::Rgb(173, 214, 255),
            line_number_fg: Color::Rgb(133, 133, 133),

            output_bg: Color::Rgb(245, 245, 245),
            output_fg: Color::Rgb(0, 16, 128),

            border_fg: Color::Gray,
            title_fg: Color::Blue,
            accent: Color::Blue,
            muted_fg: Color::Gray,
            button_fg: Color::White,
            button_bg: Color::Rgb(0, 122, 204),
            example_active_fg: Color::Black,
            example_active_bg: Color::Cyan,

            error_fg: Color::Red,
            error_bg: Color::Rgb(255, 220, 220),

            help_fg: Color::Black,
            help_key_fg: Color::Blue,
        }
    }

    /// Get a theme by name, defaults to dark if not found
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn available_themes() -> Vec<String> {
        vec!["dark".to_string(), "light".to_string()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
