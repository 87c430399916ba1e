use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    Light,
    Dark,
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Visual parameters of the dashboard. Score colors are not themed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub name: ThemeName,
    pub page_background: &'static str,
    pub panel_background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub shape_stroke: &'static str,
    pub shape_stroke_width: f64,
    pub hover_stroke: &'static str,
    pub hover_stroke_width: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            page_background: "#fafafa",
            panel_background: "#ffffff",
            border: "#e5e5e5",
            text: "#171717",
            muted_text: "#525252",
            accent: "#2563eb",
            accent_text: "#ffffff",
            shape_stroke: "#ffffff",
            shape_stroke_width: 1.5,
            hover_stroke: "#111111",
            hover_stroke_width: 2.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            page_background: "#0f172a",
            panel_background: "#1e293b",
            border: "#334155",
            text: "#f1f5f9",
            muted_text: "#94a3b8",
            accent: "#38bdf8",
            accent_text: "#0f172a",
            shape_stroke: "#0f172a",
            shape_stroke_width: 1.5,
            hover_stroke: "#f8fafc",
            hover_stroke_width: 2.0,
        }
    }

    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
