use crate::prelude::*;

/// per-play score tracking. modes hand one out per play through
/// create_score_processor
pub trait ScoreProcessor: Send + Sync {
    /// apply one judgment to the running score
    fn add_judgment(&mut self, judgment: HitJudgment);

    fn score(&self) -> u64;
    fn combo(&self) -> u16;
    fn max_combo(&self) -> u16;
    /// 0.0 - 1.0, reads as 1.0 before any judgments land
    fn accuracy(&self) -> f32;
    /// 0.0 - 1.0
    fn health(&self) -> f32;

    /// wipe everything for a retry
    fn reset(&mut self);
}


/// combo/health/accuracy accumulator for modes that dont need their own
/// scoring rules
pub struct DefaultScoreProcessor {
    /// best judgment the mode offers, used to weight accuracy
    max_base_score: i32,

    score: u64,
    combo: u16,
    max_combo: u16,
    health: f32,
    acc_sum: f32,
    acc_count: u32,
}
impl DefaultScoreProcessor {
    pub fn new(judgments: &[HitJudgment]) -> Self {
        Self {
            max_base_score: judgments.iter().map(|j| j.base_score).max().unwrap_or(0),
            score: 0,
            combo: 0,
            max_combo: 0,
            health: 1.0,
            acc_sum: 0.0,
            acc_count: 0,
        }
    }
}
impl ScoreProcessor for DefaultScoreProcessor {
    fn add_judgment(&mut self, judgment: HitJudgment) {
        match judgment.affects_combo {
            AffectsCombo::Increment => {
                self.combo += 1;
                self.max_combo = self.max_combo.max(self.combo);
            }
            AffectsCombo::Reset => self.combo = 0,
            AffectsCombo::Ignore => {}
        }

        let score = judgment.get_score(self.combo);
        if score > 0 { self.score += score as u64 }

        if self.max_base_score > 0 {
            self.acc_sum += judgment.base_score.max(0) as f32 / self.max_base_score as f32;
            self.acc_count += 1;
        }

        self.health = (self.health + judgment.health).clamp(0.0, 1.0);
    }

    fn score(&self) -> u64 { self.score }
    fn combo(&self) -> u16 { self.combo }
    fn max_combo(&self) -> u16 { self.max_combo }

    fn accuracy(&self) -> f32 {
        if self.acc_count == 0 { return 1.0 }
        self.acc_sum / self.acc_count as f32
    }
    fn health(&self) -> f32 { self.health }

    fn reset(&mut self) {
        self.score = 0;
        self.combo = 0;
        self.max_combo = 0;
        self.health = 1.0;
        self.acc_sum = 0.0;
        self.acc_count = 0;
    }
}


#[cfg(test)]
mod tests {
    use crate::prelude::*;

    const X300: HitJudgment = HitJudgment {
        internal_name: "x300",
        display_name: "300",
        health: 0.02,
        base_score: 300,
        affects_combo: AffectsCombo::Increment,
        texture_name: "",
    };
    const X100: HitJudgment = HitJudgment {
        internal_name: "x100",
        display_name: "100",
        health: 0.01,
        base_score: 100,
        affects_combo: AffectsCombo::Increment,
        texture_name: "",
    };
    const MISS: HitJudgment = HitJudgment {
        internal_name: "xmiss",
        display_name: "Miss",
        health: -0.5,
        base_score: 0,
        affects_combo: AffectsCombo::Reset,
        texture_name: "",
    };
    const JUDGMENTS: &[HitJudgment] = &[X300, X100, MISS];

    #[test]
    fn combo_follows_judgments() {
        let mut processor = DefaultScoreProcessor::new(JUDGMENTS);

        processor.add_judgment(X300);
        processor.add_judgment(X100);
        assert_eq!(processor.combo(), 2);

        processor.add_judgment(MISS);
        assert_eq!(processor.combo(), 0);
        assert_eq!(processor.max_combo(), 2);
    }

    #[test]
    fn accuracy_weights_against_the_best_judgment() {
        let mut processor = DefaultScoreProcessor::new(JUDGMENTS);
        assert_eq!(processor.accuracy(), 1.0);

        processor.add_judgment(X300);
        assert_eq!(processor.accuracy(), 1.0);

        processor.add_judgment(MISS);
        assert_eq!(processor.accuracy(), 0.5);
    }

    #[test]
    fn health_is_clamped() {
        let mut processor = DefaultScoreProcessor::new(JUDGMENTS);

        processor.add_judgment(X300);
        assert_eq!(processor.health(), 1.0);

        processor.add_judgment(MISS);
        processor.add_judgment(MISS);
        processor.add_judgment(MISS);
        assert_eq!(processor.health(), 0.0);
    }

    #[test]
    fn reset_keeps_the_judgment_weighting() {
        let mut processor = DefaultScoreProcessor::new(JUDGMENTS);
        processor.add_judgment(X100);
        processor.reset();

        assert_eq!(processor.score(), 0);
        assert_eq!(processor.combo(), 0);
        assert_eq!(processor.accuracy(), 1.0);

        // weighting survives the reset
        processor.add_judgment(X100);
        assert!((processor.accuracy() - 1.0 / 3.0).abs() < 0.0001);
    }
}
