#![allow(non_upper_case_globals)]
use crate::prelude::*;

/// a single behavior modifier. these are consts, modes hand them out
/// through get_mods_for
#[derive(Copy, Clone, Debug)]
pub struct GameplayMod {
    /// mod identifier, used in the mods hashmap
    pub name: &'static str,

    /// short (usually 2 letter) name for the mod (ie HR, EZ)
    pub short_name: &'static str,

    /// actual display name for the mod
    pub display_name: &'static str,

    /// a short description of the mod
    pub description: &'static str,

    /// texture name for this mod
    ///
    /// if this is empty when loading a texture, the loader will use the name property
    pub texture_name: &'static str,


    /// does this mod adjust the difficulty rating? used for diff calc
    pub adjusts_difficulty: bool,

    /// how much does this mod adjust the score multiplier?
    pub score_multiplier: f32,

    /// does this mod play the game for you?
    /// a mode should never have more than one mod with this set
    pub is_autoplay: bool,

    /// which mods is this mod incompatible with?
    pub removes: &'static [&'static str]
}
impl GameplayMod {
    pub const DEFAULT:Self = Self {
        name: "none",
        short_name: "NOPE",
        display_name: "None",
        description: "",
        texture_name: "",
        adjusts_difficulty: false,
        score_multiplier: 1.0,
        is_autoplay: false,
        removes: &[]
    };
}
impl Default for GameplayMod {
    fn default() -> Self { Self::DEFAULT }
}
impl PartialEq for GameplayMod {
    fn eq(&self, other: &Self) -> bool { self.name == other.name }
}
impl Eq for GameplayMod {}
impl AsRef<str> for GameplayMod {
    fn as_ref(&self) -> &str { self.name }
}

impl std::fmt::Display for GameplayMod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}


// default mods
pub const Autoplay: GameplayMod = GameplayMod {
    name: "autoplay",
    short_name: "AT",
    display_name: "Autoplay",

    description: "Let the game play for you!",
    texture_name: "autoplay",

    score_multiplier: 0.0,
    adjusts_difficulty: false,
    is_autoplay: true,
    removes: &[],
};

pub const Cinema: GameplayMod = GameplayMod {
    name: "cinema",
    short_name: "CN",
    display_name: "Cinema",

    description: "Just watch the map play out",
    texture_name: "cinema",

    score_multiplier: 0.0,
    adjusts_difficulty: false,
    is_autoplay: false,
    removes: &[],
};

pub const NoFail: GameplayMod = GameplayMod {
    name: "no_fail",
    short_name: "NF",
    display_name: "No Fail",

    description: "Even if you fail, you don't!",
    texture_name: "no_fail",

    adjusts_difficulty: false,
    score_multiplier: 0.8,
    is_autoplay: false,
    removes: &[
        "sudden_death",
        "perfect"
    ]
};

pub const SuddenDeath: GameplayMod = GameplayMod {
    name: "sudden_death",
    short_name: "SD",
    display_name: "Sudden Death",

    description: "Insta-fail if you miss",
    texture_name: "sudden_death",

    score_multiplier: 1.0,
    adjusts_difficulty: false,
    is_autoplay: false,

    removes: &[
        "no_fail",
        "perfect"
    ]
};

pub const Perfect: GameplayMod = GameplayMod {
    name: "perfect",
    short_name: "PF",
    display_name: "Perfect",

    description: "Insta-fail if you do any less than perfect",
    texture_name: "perfect",

    score_multiplier: 1.0,
    adjusts_difficulty: false,
    is_autoplay: false,

    removes: &[
        "no_fail",
        "sudden_death"
    ]
};


/// stock entries for a category. modes usually splice these into their own lists
pub fn default_mods_for(category: ModCategory) -> Vec<ModEntry> {
    match category {
        ModCategory::DifficultyReduction => vec![NoFail.into()],
        ModCategory::DifficultyIncrease => vec![SuddenDeath.into(), Perfect.into()],
        ModCategory::Automation => vec![ModEntry::multi("Auto", [Autoplay, Cinema])],
        _ => Vec::new(),
    }
}


#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn mods_compare_by_name() {
        let mut renamed = NoFail;
        renamed.display_name = "Totally Different";
        assert_eq!(renamed, NoFail);
        assert_ne!(NoFail, SuddenDeath);
    }

    #[test]
    fn default_entries_cover_the_failure_mods() {
        let reduction = default_mods_for(ModCategory::DifficultyReduction);
        assert_eq!(reduction, vec![NoFail.into()]);

        let increase = default_mods_for(ModCategory::DifficultyIncrease);
        assert_eq!(increase, vec![SuddenDeath.into(), Perfect.into()]);

        assert!(default_mods_for(ModCategory::Conversion).is_empty());
    }

    #[test]
    fn default_automation_is_one_bundle() {
        let automation = default_mods_for(ModCategory::Automation);
        assert_eq!(automation.len(), 1);
        assert_eq!(automation[0].clone().into_mods(), vec![Autoplay, Cinema]);
    }

    #[test]
    fn only_autoplay_carries_the_autoplay_tag() {
        assert!(Autoplay.is_autoplay);
        for m in [Cinema, NoFail, SuddenDeath, Perfect] {
            assert!(!m.is_autoplay, "{} should not be tagged autoplay", m.name);
        }
    }
}
