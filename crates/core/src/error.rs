use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("A board needs at least one pair of cards")]
    NoCards,
    #[error("Card count {0} is odd, every color needs a partner")]
    OddCardCount(usize),
    #[error("A board needs at least one column")]
    NoColumns,
    #[error("{columns} columns do not divide {cards} cards into full rows")]
    RaggedGrid { cards: usize, columns: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DealError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Palette has {available} distinct colors but {needed} pairs were requested")]
    PaletteTooSmall { needed: usize, available: usize },
}

pub type Result<T> = core::result::Result<T, DealError>;
