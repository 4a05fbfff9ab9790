use std::collections::HashMap;
use std::fmt;

use ratatui::style::Color;
use tracing::warn;

use crate::error::ValidationError;

/// Color the category form resets to after a successful add.
pub const DEFAULT_COLOR: &str = "#000000";

/// Seed categories used when the config does not provide its own.
pub const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("Работа", "#ff5733"),
    ("Личное", "#33c1ff"),
    ("Спорт", "#75ff33"),
    ("Учеба", "#ff33a1"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Parse "#rrggbb" or the short "#rgb" form.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => Ok(Self {
                r: u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?,
                g: u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?,
                b: u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?,
            }),
            3 => {
                let digit = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self {
                    r: digit(0)?,
                    g: digit(1)?,
                    b: digit(2)?,
                })
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub color: HexColor,
}

impl Category {
    pub fn color(&self) -> Color {
        self.color.to_color()
    }
}

/// Ordered set of categories with unique names.
///
/// Display order is insertion order; lookups by name go through a
/// side index so they stay O(1).
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, color) in DEFAULT_CATEGORIES {
            // The built-in seeds are valid and distinct.
            if let Err(err) = registry.add(name, color) {
                warn!(%err, "skipping default category");
            }
        }
        registry
    }

    /// Build a registry from configured `(name, color)` seeds, skipping
    /// invalid or repeated entries. Falls back to the defaults when no
    /// seed survives.
    pub fn from_seeds<'a, I>(seeds: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut registry = Self::new();
        for (name, color) in seeds {
            if let Err(err) = registry.add(name, color) {
                warn!(%err, name, "skipping configured category");
            }
        }

        if registry.is_empty() {
            Self::with_defaults()
        } else {
            registry
        }
    }

    /// Append a new category. The name must be non-empty and not yet
    /// registered (exact, case-sensitive match).
    pub fn add(&mut self, name: &str, color: &str) -> Result<&Category, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }
        if self.index.contains_key(name) {
            return Err(ValidationError::DuplicateCategory(name.to_string()));
        }
        let color = HexColor::parse(color)?;

        let idx = self.categories.len();
        self.categories.push(Category {
            name: name.to_string(),
            color,
        });
        self.index.insert(name.to_string(), idx);
        Ok(&self.categories[idx])
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.index.get(name).map(|&idx| &self.categories[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn color_of(&self, name: &str) -> Option<Color> {
        self.get(name).map(Category::color)
    }

    pub fn get_index(&self, idx: usize) -> Option<&Category> {
        self.categories.get(idx)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
