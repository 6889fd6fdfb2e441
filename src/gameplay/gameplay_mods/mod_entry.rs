use crate::prelude::*;

/// one entry in a mode's mod list for a category: a single mod, or a
/// bundle of mods that get toggled together
#[derive(Clone, Debug, PartialEq)]
pub enum ModEntry {
    Single(GameplayMod),
    Multi(MultiMod),
}
impl ModEntry {
    pub fn multi(display_name: &'static str, mods: impl IntoIterator<Item = GameplayMod>) -> Self {
        Self::Multi(MultiMod::new(display_name, mods))
    }

    /// the mods this entry contributes to the flat list, bundles in
    /// their declared order
    pub fn into_mods(self) -> Vec<GameplayMod> {
        match self {
            Self::Single(m) => vec![m],
            Self::Multi(multi) => multi.mods,
        }
    }
}
impl From<GameplayMod> for ModEntry {
    fn from(m: GameplayMod) -> Self { Self::Single(m) }
}


/// a named bundle of mods shown as one toggle (ie autoplay + cinema).
/// only the mods inside ever apply, the bundle itself never does
#[derive(Clone, Debug, PartialEq)]
pub struct MultiMod {
    pub display_name: &'static str,
    pub mods: Vec<GameplayMod>,
}
impl MultiMod {
    pub fn new(display_name: &'static str, mods: impl IntoIterator<Item = GameplayMod>) -> Self {
        Self {
            display_name,
            mods: mods.into_iter().collect(),
        }
    }
}
