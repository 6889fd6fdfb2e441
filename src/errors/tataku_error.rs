use std::{fmt::Display, io::Error as IOError};

use serde_json::Error as JsonError;

use super::*;

pub type TatakuResult<T=()> = Result<T, TatakuError>;

#[derive(Debug)]
pub enum TatakuError {
    Beatmap(BeatmapError),
    GameMode(GameModeError),
    Mod(ModError),
    IO(IOError),
    Serde(JsonError),

    String(String),
}
impl TatakuError {
    pub fn from_err(e: impl std::error::Error) -> Self {
        Self::String(format!("{e}"))
    }
}


impl Display for TatakuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Beatmap(e) => write!(f, "{:?}", e),
            Self::GameMode(e) => write!(f, "{:?}", e),
            Self::Mod(e) => write!(f, "{:?}", e),
            Self::IO(e) => write!(f, "{}", e),
            Self::Serde(e) => write!(f, "{:?}", e),
            Self::String(e) => write!(f, "{:?}", e),
        }
    }
}


impl From<BeatmapError> for TatakuError {
    fn from(e: BeatmapError) -> Self {Self::Beatmap(e)}
}
impl From<GameModeError> for TatakuError {
    fn from(e: GameModeError) -> Self {Self::GameMode(e)}
}
impl From<ModError> for TatakuError {
    fn from(e: ModError) -> Self {Self::Mod(e)}
}
impl From<IOError> for TatakuError {
    fn from(e: IOError) -> Self {Self::IO(e)}
}
impl From<JsonError> for TatakuError {
    fn from(e: JsonError) -> Self {Self::Serde(e)}
}
impl From<String> for TatakuError {
    fn from(e: String) -> Self {Self::String(e)}
}


#[derive(Clone, Copy, Debug)]
pub enum GameModeError {
    NotImplemented,
    UnknownGameMode
}

#[derive(Clone, Copy, Debug)]
pub enum ModError {
    /// the mode never declared a mod with the autoplay tag
    NoAutoplayMod
}
