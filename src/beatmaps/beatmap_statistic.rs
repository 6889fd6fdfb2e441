/// one mode-specific stat shown for a map (ie note count, max combo)
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapStatistic {
    pub name: &'static str,
    pub content: String,
}
impl BeatmapStatistic {
    pub fn new(name: &'static str, content: impl ToString) -> Self {
        Self {
            name,
            content: content.to_string(),
        }
    }
}


#[test]
fn test() {
    let stat = BeatmapStatistic::new("Note Count", 727);
    assert_eq!(stat.name, "Note Count");
    assert_eq!(stat.content, "727");
}
