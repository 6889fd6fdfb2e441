use std::hash::Hash;
use crate::prelude::*;

/// the player's selected mods + game speed
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModManager {
    /// use get/set_speed instead of direct access to this
    pub speed: GameSpeed,
    pub mods: HashSet<String>,
}

// static
impl ModManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// every mod the mode provides, keyed by name.
    /// a mod the mode (incorrectly) lists twice collapses to one entry here
    pub fn mods_for_mode_as_hashmap(mode: &dyn GameModeInfo) -> HashMap<String, GameplayMod> {
        mode.get_all_mods()
            .into_iter()
            .map(|m| (m.name.to_owned(), m))
            .collect()
    }

    pub fn short_mods_string(mods: &[ModDefinition], none_if_empty: bool, mode: &dyn GameModeInfo) -> String {
        if mods.is_empty() {
            if none_if_empty { return "None".to_owned() }
            return String::new();
        }

        let ok_mods = Self::mods_for_mode_as_hashmap(mode);

        let mut list = Vec::new();
        for m in mods.iter() {
            if let Some(m) = ok_mods.get(m.as_ref()) {
                list.push(m.short_name)
            }
        }

        list.join(" ")
    }
}

// instance
impl ModManager {
    pub fn get_speed(&self) -> f32 {
        self.speed.as_f32()
    }
    pub fn set_speed(&mut self, speed: impl Into<GameSpeed>) {
        self.speed = speed.into();
    }

    fn mods_list(&self, include_speed: bool, mode: &dyn GameModeInfo) -> String {
        let ok_mods = Self::mods_for_mode_as_hashmap(mode);

        let mut list = self.mods_sorted()
            .iter()
            .filter_map(|id| ok_mods.get(id))
            .map(|m| m.short_name.to_owned())
            .collect::<Vec<_>>();

        if include_speed && !self.speed.is_default() { list.push(format!("({:.2}x)", self.get_speed())) }

        list.join(" ")
    }

    fn mods_sorted(&self) -> Vec<String> {
        let mut mods = self.mods.iter().cloned().collect::<Vec<_>>();
        mods.sort();
        mods
    }

    pub fn mods_list_string(&self, mode: &dyn GameModeInfo) -> String {
        self.mods_list(true, mode)
    }
    pub fn mods_list_string_no_speed(&self, mode: &dyn GameModeInfo) -> String {
        self.mods_list(false, mode)
    }

    /// owned definitions for every selected mod the mode knows about
    pub fn map_mods_to_definitions(&self, mode: &dyn GameModeInfo) -> Vec<ModDefinition> {
        let ok_mods = Self::mods_for_mode_as_hashmap(mode);

        self.mods_sorted()
            .iter()
            .filter_map(|m| ok_mods.get(m))
            .map(|m| (*m).into())
            .collect()
    }

    // inline helpers
    /// add a single mod
    pub fn with_mod(mut self, m: impl AsRef<str>) -> Self {
        self.add_mod(m);
        self
    }
    /// set all mods
    pub fn with_mods(mut self, mods: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        self.mods = mods.into_iter().map(|i| i.as_ref().to_owned()).collect();
        self
    }
    /// set the speed
    pub fn with_speed(mut self, speed: impl Into<GameSpeed>) -> Self {
        self.set_speed(speed);
        self
    }

    /// add a mod, returns if the mod was newly added
    pub fn add_mod(&mut self, m: impl AsRef<str>) -> bool {
        self.mods.insert(m.as_ref().to_owned())
    }
    /// remove a mod
    pub fn remove_mod(&mut self, m: impl AsRef<str>) {
        self.mods.remove(m.as_ref());
    }
    // toggle a mod, returns if the mod is now enabled or not
    pub fn toggle_mod(&mut self, m: impl AsRef<str>) -> bool {
        let m = m.as_ref();
        if self.has_mod(m) {
            self.remove_mod(m);
            false
        } else {
            self.add_mod(m);
            true
        }
    }

    /// returns if a mod is enabled
    pub fn has_mod(&self, m: impl AsRef<str>) -> bool {
        self.mods.contains(m.as_ref())
    }


    // common mods
    /// is nofail enabled
    pub fn has_nofail(&self) -> bool {
        self.has_mod(NoFail)
    }
    /// is sudden death enabled
    pub fn has_sudden_death(&self) -> bool {
        self.has_mod(SuddenDeath)
    }
    /// is perfect enabled
    pub fn has_perfect(&self) -> bool {
        self.has_mod(Perfect)
    }
    /// is autoplay enabled
    pub fn has_autoplay(&self) -> bool {
        self.has_mod(Autoplay)
    }

    /// stable hash of the mod set + speed, used as score identity
    pub fn as_md5(&self) -> String {
        let mods = self.mods_sorted();
        let mods_str = format!("{}{}", mods.join(""), self.speed.as_u16());
        format!("{:x}", md5::compute(mods_str))
    }
}

// lets pretend this is correct for now
impl Hash for ModManager {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.speed.hash(state);
        let mods = self.mods_sorted();
        mods.hash(state);
    }
}


#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// mode that only provides the stock mods
    struct DefaultsMode;
    const DEFAULTS_META: GameModeMeta = GameModeMeta::new("defaults", "Defaults");

    impl GameModeInfo for DefaultsMode {
        fn meta(&self) -> &GameModeMeta { &DEFAULTS_META }
        fn description(&self) -> &'static str { "Stock mods only" }

        fn get_mods_for(&self, category: ModCategory) -> Vec<ModEntry> {
            default_mods_for(category)
        }

        fn create_game(&self, _map: &BeatmapMeta, _is_current_mode: bool) -> TatakuResult<Box<dyn GameMode>> {
            Err(TatakuError::GameMode(GameModeError::NotImplemented))
        }
        fn create_diffcalc(&self, _map: &BeatmapMeta) -> Box<dyn DiffCalc> { Box::new(NoDiffCalc) }
        fn create_score_processor(&self) -> Box<dyn ScoreProcessor> { Box::new(DefaultScoreProcessor::new(&[])) }
        fn create_gameplay_keys(&self) -> Vec<KeyCounter> { Vec::new() }
    }

    #[test]
    fn add_remove_toggle() {
        let mut mods = ModManager::new();

        assert!(mods.add_mod(NoFail));
        assert!(!mods.add_mod(NoFail));
        assert!(mods.has_nofail());

        mods.remove_mod(NoFail);
        assert!(!mods.has_nofail());

        assert!(mods.toggle_mod(Autoplay));
        assert!(mods.has_autoplay());
        assert!(!mods.toggle_mod(Autoplay));
        assert!(!mods.has_autoplay());
    }

    #[test]
    fn builders() {
        let mods = ModManager::new()
            .with_mods([NoFail, SuddenDeath])
            .with_mod(Perfect)
            .with_speed(1.5);

        assert!(mods.has_nofail());
        assert!(mods.has_sudden_death());
        assert!(mods.has_perfect());
        assert_eq!(mods.get_speed(), 1.5);
    }

    #[test]
    fn mod_strings_resolve_against_the_mode() {
        let mods = ModManager::new()
            .with_mod(Autoplay)
            .with_mod(NoFail)
            .with_speed(1.5);

        // sorted by mod name: autoplay, no_fail
        assert_eq!(mods.mods_list_string(&DefaultsMode), "AT NF (1.50x)");
        assert_eq!(mods.mods_list_string_no_speed(&DefaultsMode), "AT NF");

        // mods the mode doesnt know about are dropped
        let unknown = ModManager::new().with_mod("spin");
        assert_eq!(unknown.mods_list_string_no_speed(&DefaultsMode), "");
    }

    #[test]
    fn short_strings_from_definitions() {
        let mods = ModManager::new().with_mod(Autoplay).with_mod(NoFail);
        let defs = mods.map_mods_to_definitions(&DefaultsMode);
        assert_eq!(defs.len(), 2);

        assert_eq!(ModManager::short_mods_string(&defs, false, &DefaultsMode), "AT NF");
        assert_eq!(ModManager::short_mods_string(&[], true, &DefaultsMode), "None");
        assert_eq!(ModManager::short_mods_string(&[], false, &DefaultsMode), "");
    }

    #[test]
    fn md5_ignores_insertion_order() {
        let a = ModManager::new().with_mod(NoFail).with_mod(SuddenDeath);
        let b = ModManager::new().with_mod(SuddenDeath).with_mod(NoFail);
        assert_eq!(a.as_md5(), b.as_md5());

        let c = b.with_speed(1.5);
        assert_ne!(a.as_md5(), c.as_md5());
    }

    #[test]
    fn serde_round_trip() {
        let mods = ModManager::new().with_mod(NoFail).with_speed(0.75);

        let json = serde_json::to_string(&mods).unwrap();
        let back: ModManager = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mods);

        // missing fields fall back to defaults
        let empty: ModManager = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ModManager::new());
    }
}
