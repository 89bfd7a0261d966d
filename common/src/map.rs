/// Radar size used when a config leaves width or height unset.
pub const DEFAULT_RADAR_SIZE: u32 = 1024;

fn default_radar_size() -> u32 {
    DEFAULT_RADAR_SIZE
}

/// Affine parameters to go from world coordinates onto a map's radar image.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub pos_x: f64,
    pub pos_y: f64,
    pub scale: f64,
    #[serde(default)]
    pub radar_file: String,
    #[serde(default)]
    pub lower_radar_file: Option<String>,
    #[serde(default = "default_radar_size")]
    pub radar_width: u32,
    #[serde(default = "default_radar_size")]
    pub radar_height: u32,
}

impl MapConfig {
    /// Replaces zeroed radar dimensions with [`DEFAULT_RADAR_SIZE`].
    pub fn with_default_radar_size(mut self) -> Self {
        if self.radar_width == 0 {
            self.radar_width = DEFAULT_RADAR_SIZE;
        }
        if self.radar_height == 0 {
            self.radar_height = DEFAULT_RADAR_SIZE;
        }
        self
    }
}
