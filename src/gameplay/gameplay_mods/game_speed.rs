use crate::prelude::*;

/// map playback speed. stored in hundredths so it hashes and serializes
/// exactly
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSpeed(u16);
impl GameSpeed {
    pub const DEFAULT: Self = Self(100);

    pub fn from_u16(speed: u16) -> Self { Self(speed) }
    pub fn from_f32(speed: f32) -> Self { Self((speed * 100.0).round() as u16) }

    pub fn as_u16(&self) -> u16 { self.0 }
    pub fn as_f32(&self) -> f32 { self.0 as f32 / 100.0 }

    pub fn is_default(&self) -> bool { self.0 == Self::DEFAULT.0 }
}
impl Default for GameSpeed {
    fn default() -> Self { Self::DEFAULT }
}
impl From<f32> for GameSpeed {
    fn from(speed: f32) -> Self { Self::from_f32(speed) }
}
impl From<f64> for GameSpeed {
    fn from(speed: f64) -> Self { Self::from_f32(speed as f32) }
}

impl std::fmt::Display for GameSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}x", self.as_f32())
    }
}


#[test]
fn test() {
    assert_eq!(GameSpeed::from_f32(1.5).as_u16(), 150);
    assert_eq!(GameSpeed::from_f32(0.75).as_f32(), 0.75);
    assert!(GameSpeed::default().is_default());
    assert!(!GameSpeed::from_f32(1.1).is_default());
    assert_eq!(format!("{}", GameSpeed::from_f32(1.5)), "1.50x");
}
