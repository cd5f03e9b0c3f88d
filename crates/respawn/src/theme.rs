//! The fixed dark theme, expressed as CSS custom properties.

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub font_family: &'static str,
    pub button_radius_px: u8,
    pub card_radius_px: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette {
                primary: "#21808d",
                primary_light: "#32b8c6",
                primary_dark: "#1a6470",
                secondary: "#32b8c6",
                background: "#1f2121",
                paper: "#262828",
                text_primary: "#f5f5f5",
                text_secondary: "rgba(245, 245, 245, 0.7)",
            },
            font_family: r#""Inter", "Roboto", "Helvetica", "Arial", sans-serif"#,
            button_radius_px: 8,
            card_radius_px: 12,
        }
    }
}

impl Theme {
    /// Custom properties to set on the root element, in declaration order.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        let p = &self.palette;
        vec![
            ("--color-primary", p.primary.to_string()),
            ("--color-primary-light", p.primary_light.to_string()),
            ("--color-primary-dark", p.primary_dark.to_string()),
            ("--color-secondary", p.secondary.to_string()),
            ("--color-background", p.background.to_string()),
            ("--color-paper", p.paper.to_string()),
            ("--color-text", p.text_primary.to_string()),
            ("--color-text-secondary", p.text_secondary.to_string()),
            ("--font-family", self.font_family.to_string()),
            ("--radius-button", format!("{}px", self.button_radius_px)),
            ("--radius-card", format!("{}px", self.card_radius_px)),
        ]
    }

    /// The variables as an inline `style` attribute value.
    pub fn style_attribute(&self) -> String {
        self.css_variables()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
