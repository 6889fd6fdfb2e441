pub type PlayMode = String;

/// metadata for a loaded map. the note data stays with the loader, modes
/// only need this much to decide what they can do with a map
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BeatmapMeta {
    pub file_path: String,
    pub beatmap_hash: String,

    /// mode this map was made for
    pub mode: PlayMode,
    pub artist: String,
    pub title: String,
    pub creator: String,
    pub version: String,

    /// time in ms from first note to last note
    pub duration: f32,

    pub hp: f32,
    pub od: f32,
    pub cs: f32,
    pub ar: f32,
    pub bpm_min: f32,
    pub bpm_max: f32,
}
impl BeatmapMeta {
    pub fn new(file_path: String, beatmap_hash: String, mode: PlayMode) -> BeatmapMeta {
        let unknown = "Unknown".to_owned();

        BeatmapMeta {
            file_path,
            beatmap_hash,
            mode,
            artist: unknown.clone(),
            title: unknown.clone(),
            creator: unknown.clone(),
            version: unknown,
            duration: 0.0,
            hp: -1.0,
            od: -1.0,
            cs: -1.0,
            ar: -1.0,
            bpm_min: 0.0,
            bpm_max: 0.0,
        }
    }

    /// whole minutes of map length at the given speed
    pub fn mins(&self, speed: f32) -> f32 {
        ((self.duration / speed) / 60000.0).floor()
    }
    /// leftover seconds of map length at the given speed
    pub fn secs(&self, speed: f32) -> f32 {
        let remaining = (self.duration / speed) - self.mins(speed) * 60000.0;
        (remaining / 1000.0).floor()
    }

    /// which mode this map should play in when the user has `incoming` selected.
    /// osu maps convert to anything, everything else is locked to its native mode
    pub fn playmode(&self, incoming: PlayMode) -> PlayMode {
        match &*self.mode {
            "osu" => incoming,
            m => m.to_owned(),
        }
    }

    /// can this map be adapted to the given mode?
    pub fn is_playable_in(&self, mode: &str) -> bool {
        self.mode == mode || self.mode == "osu"
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn meta(mode: &str) -> BeatmapMeta {
        let mut meta = BeatmapMeta::new("songs/set/map.osu".to_owned(), String::new(), mode.to_owned());
        meta.duration = 92_000.0;
        meta
    }

    #[test]
    fn osu_maps_convert_to_anything() {
        let map = meta("osu");
        assert_eq!(map.playmode("taiko".to_owned()), "taiko");
        assert!(map.is_playable_in("mania"));
    }

    #[test]
    fn native_maps_are_locked() {
        let map = meta("taiko");
        assert_eq!(map.playmode("mania".to_owned()), "taiko");
        assert!(map.is_playable_in("taiko"));
        assert!(!map.is_playable_in("mania"));
    }

    #[test]
    fn length_helpers_follow_speed() {
        let map = meta("osu");
        assert_eq!(map.mins(1.0), 1.0);
        assert_eq!(map.secs(1.0), 32.0);
        assert_eq!(map.mins(2.0), 0.0);
        assert_eq!(map.secs(2.0), 46.0);
    }
}
