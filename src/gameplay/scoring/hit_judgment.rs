/// how a judgment affects the combo counter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AffectsCombo {
    /// add one to the combo
    Increment,
    /// do nothing to the combo
    Ignore,
    /// reset the combo
    Reset,
}

/// one possible hit result for a mode (ie x300, x100, miss)
#[derive(Copy, Clone, Debug)]
pub struct HitJudgment {
    /// internal str for this judgment
    pub internal_name: &'static str,

    /// what this judgment looks like when displayed
    pub display_name: &'static str,

    /// how much health should be gained/lost for this judgment
    pub health: f32,

    /// score this judgment is worth before combo scaling
    pub base_score: i32,

    pub affects_combo: AffectsCombo,

    /// texture name for this judgment
    pub texture_name: &'static str,
}
impl HitJudgment {
    /// how much score is this judgment worth at the given combo
    pub fn get_score(&self, combo: u16) -> i32 {
        if self.base_score <= 0 { return self.base_score }
        self.base_score * (1 + combo as i32 / 10)
    }
}
impl PartialEq for HitJudgment {
    fn eq(&self, other: &Self) -> bool { self.internal_name == other.internal_name }
}
impl Eq for HitJudgment {}


#[test]
fn test() {
    let x300 = HitJudgment {
        internal_name: "x300",
        display_name: "300",
        health: 0.02,
        base_score: 300,
        affects_combo: AffectsCombo::Increment,
        texture_name: "",
    };

    assert_eq!(x300.get_score(0), 300);
    assert_eq!(x300.get_score(9), 300);
    assert_eq!(x300.get_score(10), 600);

    let miss = HitJudgment {
        internal_name: "xmiss",
        display_name: "Miss",
        health: -0.1,
        base_score: 0,
        affects_combo: AffectsCombo::Reset,
        texture_name: "",
    };
    assert_eq!(miss.get_score(50), 0);
}
