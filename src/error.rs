use thiserror::Error;

/// Rejected user input from the event and category forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event title is empty")]
    EmptyTitle,

    #[error("No category chosen for the event")]
    NoCategory,

    #[error("Category '{0}' does not exist")]
    UnknownCategory(String),

    #[error("Category name is empty")]
    EmptyCategoryName,

    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("'{0}' is not a hex color (#rgb or #rrggbb)")]
    InvalidColor(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid date_format '{0}'")]
    DateFormat(String),
}
