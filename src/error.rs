#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error("rule {index} has an empty regex")]
    EmptyRegex { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
