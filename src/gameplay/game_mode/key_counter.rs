/// one entry in the ingame key overlay
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyCounter {
    /// label drawn on the counter (ie "K1", "Don")
    pub label: &'static str,

    /// presses this play
    pub count: u32,
}
impl KeyCounter {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            count: 0,
        }
    }

    pub fn hit(&mut self) { self.count += 1 }
    pub fn reset(&mut self) { self.count = 0 }
}


#[test]
fn test() {
    let mut key = KeyCounter::new("K1");
    key.hit();
    key.hit();
    assert_eq!(key.count, 2);

    key.reset();
    assert_eq!(key.count, 0);
}
