/// texture handle for a mode's icon
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeIcon {
    /// texture name for the skin loader to resolve
    pub texture_name: &'static str,
}
impl ModeIcon {
    /// shown for modes that dont provide their own icon
    pub const UNKNOWN: Self = Self { texture_name: "mode-unknown" };

    pub const fn new(texture_name: &'static str) -> Self {
        Self { texture_name }
    }
}
impl Default for ModeIcon {
    fn default() -> Self { Self::UNKNOWN }
}
