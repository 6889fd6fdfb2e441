use crate::prelude::*;

/// ingame handler for a mode. holds one map's gameplay state
pub trait GameMode: GameModeProperties + Send + Sync {
    /// apply the selected mod set
    fn apply_mods(&mut self, mods: &ModManager);

    /// advance gameplay to the given map time
    fn update(&mut self, time: f32);

    /// put everything back to the start of the map for a retry
    fn reset(&mut self);
}
impl Default for Box<dyn GameMode> {
    fn default() -> Self {
        Box::new(NoMode)
    }
}


pub trait GameModeProperties: Send + Sync {
    /// playmode for this game mode
    fn playmode(&self) -> Cow<'static, str>;

    /// should the cursor be visible (ie, osu yes, taiko/mania no)
    fn show_cursor(&self) -> bool { false }

    /// what ms does this map end?
    fn end_time(&self) -> f32;
}
