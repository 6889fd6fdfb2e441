

#[derive(Clone, Debug)]
pub enum BeatmapError {
    UnsupportedMode,
    NoNotes,
}
