mod game_mode;
mod gameplay_mods;
mod scoring;

pub use game_mode::*;
pub use gameplay_mods::*;
pub use scoring::*;

use crate::prelude::*;

pub trait DiffCalc: Send + Sync {
    /// run diff calc with the given mods applied. mods can change the
    /// rating, so results are per-(map, mods)
    fn calc(&mut self, mods: &ModManager) -> TatakuResult<DiffCalcSummary>;
}

#[derive(Default, Serialize)]
pub struct DiffCalcSummary {
    pub diff: f32,
    pub diffs: Vec<f32>,
    pub strains: HashMap<String, Vec<f32>>
}
impl DiffCalcSummary {
    pub fn save(&self, path: impl AsRef<Path>) -> TatakuResult {
        debug!("saving diff calc summary to {:?}", path.as_ref());
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
