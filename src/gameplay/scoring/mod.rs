mod hit_judgment;
mod score_processor;

pub use hit_judgment::*;
pub use score_processor::*;
