use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lower/upper bounds enforced by the input widgets (HTML form, CLI flags).
/// Nothing downstream re-checks them.
pub mod limits {
    pub const MIN_PLANES: u32 = 1;
    pub const MIN_SATS_PER_PLANE: u32 = 1;
    pub const MIN_ALTITUDE_KM: f64 = 100.0;
    pub const MIN_INCLINATION_DEG: f64 = 0.0;
    pub const MAX_INCLINATION_DEG: f64 = 180.0;
}

/// Parameters sent to the generation service as `POST /constellation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConstellationRequest {
    #[serde(default = "default_name")]
    pub name: String,
    pub planes: u32,
    pub sats_per_plane: u32,
    pub altitude_km: f64,
    pub inclination_deg: f64,
}

fn default_name() -> String {
    "LEO-Net".to_string()
}

impl Default for ConstellationRequest {
    fn default() -> Self {
        Self {
            name: default_name(),
            planes: 6,
            sats_per_plane: 8,
            altitude_km: 550.0,
            inclination_deg: 53.0,
        }
    }
}

/// A satellite as reported by the generation service. Values are displayed
/// as received; only `name`, `x` and `y` are required to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Satellite {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclination_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raan_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_anomaly_deg: Option<f64>,
    pub x: f64,
    pub y: f64,
}

impl Satellite {
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Constellation {
    #[serde(default)]
    pub name: String,
    pub satellites: Vec<Satellite>,
}
