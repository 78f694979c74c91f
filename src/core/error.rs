use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimonError {
    #[error("No live round: call start_new_game first")]
    NoLiveRound,

    #[error("Round is over (score {score}): start a new game to keep playing")]
    RoundOver { score: usize },

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimonError>;
