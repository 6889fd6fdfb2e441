/// fixed partitioning of the mod list, used to section the mod menu and
/// to order aggregation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModCategory {
    DifficultyReduction,
    DifficultyIncrease,
    Conversion,
    Automation,
    Fun,
}
impl ModCategory {
    /// every category, in the order mod lists are built and shown.
    /// get_all_mods walks this list, so reordering it reorders every
    /// mode's flattened mod list
    pub const ALL: &'static [ModCategory] = &[
        ModCategory::DifficultyReduction,
        ModCategory::DifficultyIncrease,
        ModCategory::Conversion,
        ModCategory::Automation,
        ModCategory::Fun,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ModCategory::DifficultyReduction => "Difficulty Reduction",
            ModCategory::DifficultyIncrease => "Difficulty Increase",
            ModCategory::Conversion => "Conversion",
            ModCategory::Automation => "Automation",
            ModCategory::Fun => "Fun",
        }
    }
}

impl std::fmt::Display for ModCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}


#[test]
fn test() {
    // display_name is an exhaustive match, so this keeps ALL honest:
    // a new category that isnt listed shows up as a length mismatch
    let unique = ModCategory::ALL.iter().collect::<std::collections::HashSet<_>>();
    assert_eq!(unique.len(), ModCategory::ALL.len());
    assert_eq!(ModCategory::ALL.len(), 5);
    assert_eq!(ModCategory::ALL[0], ModCategory::DifficultyReduction);
}
