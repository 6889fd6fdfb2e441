use crate::prelude::*;


// needed for std::mem::take/swap
#[derive(Default)]
pub struct NoMode;

const NO_MODE_META: GameModeMeta = GameModeMeta::new("none", "None");

impl GameModeInfo for NoMode {
    fn meta(&self) -> &GameModeMeta { &NO_MODE_META }
    fn description(&self) -> &'static str { "No mode selected" }

    fn get_mods_for(&self, _category: ModCategory) -> Vec<ModEntry> { Vec::new() }

    fn create_game(&self, _map: &BeatmapMeta, _is_current_mode: bool) -> TatakuResult<Box<dyn GameMode>> {
        warn!("tried to create a game without a mode selected");
        Err(TatakuError::GameMode(GameModeError::UnknownGameMode))
    }
    fn create_diffcalc(&self, _map: &BeatmapMeta) -> Box<dyn DiffCalc> { Box::new(NoDiffCalc) }
    fn create_score_processor(&self) -> Box<dyn ScoreProcessor> { Box::new(DefaultScoreProcessor::new(&[])) }
    fn create_gameplay_keys(&self) -> Vec<KeyCounter> { Vec::new() }
}

impl GameMode for NoMode {
    fn apply_mods(&mut self, _mods: &ModManager) {}
    fn update(&mut self, _time: f32) {}
    fn reset(&mut self) {}
}
impl GameModeProperties for NoMode {
    fn playmode(&self) -> Cow<'static, str> { Cow::Borrowed("none") }
    fn end_time(&self) -> f32 { 0.0 }
}


/// diffcalc that reports nothing, for when theres nothing to calc
pub struct NoDiffCalc;
impl DiffCalc for NoDiffCalc {
    fn calc(&mut self, _mods: &ModManager) -> TatakuResult<DiffCalcSummary> {
        Ok(DiffCalcSummary::default())
    }
}


#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn no_mode_has_no_mods() {
        assert!(NoMode.get_all_mods().is_empty());
        assert!(matches!(
            NoMode.get_autoplay_mod(),
            Err(TatakuError::Mod(ModError::NoAutoplayMod))
        ));
    }

    #[test]
    fn no_mode_refuses_to_make_a_game() {
        let map = BeatmapMeta::new(String::new(), String::new(), "osu".to_owned());
        assert!(matches!(
            NoMode.create_game(&map, false),
            Err(TatakuError::GameMode(GameModeError::UnknownGameMode))
        ));
    }

    #[test]
    fn boxed_game_mode_defaults_to_no_mode() {
        let game = Box::<dyn GameMode>::default();
        assert_eq!(game.playmode(), "none");
        assert_eq!(game.end_time(), 0.0);
    }

    #[test]
    fn no_diffcalc_reports_nothing() {
        let summary = NoDiffCalc.calc(&ModManager::new()).unwrap();
        assert_eq!(summary.diff, 0.0);
        assert!(summary.diffs.is_empty());
    }
}
