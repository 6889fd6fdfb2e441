/// identity for a mode. built once when the mode is created and never
/// changed after
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameModeMeta {
    /// stable internal id (ie "taiko")
    pub name: &'static str,

    /// name shown to the user
    pub display_name: &'static str,

    /// id this mode had in the old map format, -1 for none.
    /// dont set this unless you are a legacy mode
    pub legacy_id: i32,
}
impl GameModeMeta {
    pub const fn new(name: &'static str, display_name: &'static str) -> Self {
        Self {
            name,
            display_name,
            legacy_id: -1,
        }
    }

    pub const fn with_legacy_id(mut self, legacy_id: i32) -> Self {
        self.legacy_id = legacy_id;
        self
    }

    pub fn has_legacy_id(&self) -> bool { self.legacy_id >= 0 }
}


#[test]
fn test() {
    let meta = GameModeMeta::new("test", "Test");
    assert_eq!(meta.legacy_id, -1);
    assert!(!meta.has_legacy_id());

    let legacy = GameModeMeta::new("old", "Old").with_legacy_id(1);
    assert_eq!(legacy.legacy_id, 1);
    assert!(legacy.has_legacy_id());
}
