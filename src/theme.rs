#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub label_color: String,
    /// Fill behind the drawing. `None` keeps the canvas transparent.
    pub background: Option<String>,
}

impl Theme {
    pub fn liumos() -> Self {
        Self {
            label_color: "#202020".to_string(),
            background: None,
        }
    }

    pub fn light() -> Self {
        Self {
            label_color: "#202020".to_string(),
            background: Some("#FFFFFF".to_string()),
        }
    }

    pub fn dark() -> Self {
        Self {
            label_color: "#F0F0F0".to_string(),
            background: Some("#1B1B1F".to_string()),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "liumos" | "default" | "transparent" => Some(Self::liumos()),
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::liumos()
    }
}
