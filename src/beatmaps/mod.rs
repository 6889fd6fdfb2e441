mod beatmap_meta;
mod beatmap_statistic;

pub use beatmap_meta::*;
pub use beatmap_statistic::*;
