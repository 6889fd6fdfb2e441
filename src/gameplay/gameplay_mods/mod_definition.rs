use crate::prelude::*;

/// owned, serializable form of a mod. scores and replays store these so
/// they stay readable even when the mode that made them isnt loaded
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModDefinition {
    pub name: String,
    pub short_name: String,
    pub display_name: String,
    pub adjusts_difficulty: bool,
    pub score_multiplier: f32,
}
impl From<GameplayMod> for ModDefinition {
    fn from(val: GameplayMod) -> Self {
        ModDefinition {
            name: val.name.to_owned(),
            short_name: val.short_name.to_owned(),
            display_name: val.display_name.to_owned(),
            adjusts_difficulty: val.adjusts_difficulty,
            score_multiplier: val.score_multiplier,
        }
    }
}
impl AsRef<str> for ModDefinition {
    fn as_ref(&self) -> &str { &self.name }
}


#[test]
fn test() {
    let def: ModDefinition = NoFail.into();
    assert_eq!(def.name, "no_fail");
    assert_eq!(def.short_name, "NF");
    assert_eq!(def.score_multiplier, 0.8);

    let json = serde_json::to_string(&def).unwrap();
    let back: ModDefinition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, def);
}
