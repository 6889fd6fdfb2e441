use crate::prelude::*;

/// everything the game needs to treat a mode uniformly.
/// one value per mode, queries only, no state beyond the identity
pub trait GameModeInfo: Send + Sync {
    /// identity for this mode
    fn meta(&self) -> &GameModeMeta;

    /// short description of the mode, shown in the mode list
    fn description(&self) -> &'static str;

    /// mods this mode provides for one category.
    /// cover every category, returning empty for the ones the mode has
    /// nothing for
    fn get_mods_for(&self, category: ModCategory) -> Vec<ModEntry>;

    /// mode-specific stats for a map (ie note count)
    fn get_beatmap_statistics(&self, _map: &BeatmapMeta) -> Vec<BeatmapStatistic> { Vec::new() }

    /// try to create the ingame handler for a map.
    /// is_current_mode means the map is known-native to this mode, so
    /// conversion checks can be skipped
    fn create_game(&self, map: &BeatmapMeta, is_current_mode: bool) -> TatakuResult<Box<dyn GameMode>>;

    fn create_diffcalc(&self, map: &BeatmapMeta) -> Box<dyn DiffCalc>;

    /// fresh processor, one per play
    fn create_score_processor(&self) -> Box<dyn ScoreProcessor>;

    fn create_icon(&self) -> ModeIcon { ModeIcon::UNKNOWN }

    /// key overlay entries for this mode's input scheme
    fn create_gameplay_keys(&self) -> Vec<KeyCounter>;

    /// mode-specific settings menu section
    fn create_settings(&self) -> Option<Box<dyn GameModeSettings>> { None }

    /// id this mode had in the old map format, -1 for none
    fn legacy_id(&self) -> i32 { self.meta().legacy_id }


    /// every mod this mode provides, across all categories in
    /// [ModCategory::ALL] order, with bundles flattened out.
    /// nothing is deduped, a mod listed twice shows up twice
    fn get_all_mods(&self) -> Vec<GameplayMod> {
        ModCategory::ALL
            .iter()
            .flat_map(|category| self.get_mods_for(*category))
            .flat_map(ModEntry::into_mods)
            .collect()
    }

    /// the mod that lets the game play itself.
    /// every playable mode is expected to provide exactly one
    fn get_autoplay_mod(&self) -> TatakuResult<GameplayMod> {
        self.get_all_mods()
            .into_iter()
            .find(|m| m.is_autoplay)
            .ok_or(TatakuError::Mod(ModError::NoAutoplayMod))
    }
}
