use crate::{
    foundation::core::{Rgb, Viewport},
    foundation::error::{PetalfallError, PetalfallResult},
};

/// A complete decorative scene.
///
/// A scene config is a pure data model that can be built programmatically or
/// serialized/deserialized via Serde (JSON). Building a runnable scene from it
/// is performed by [`crate::Scene::build`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// Host viewport extent at build time.
    pub viewport: Viewport,
    /// Global determinism seed; per-layer streams are derived from it and the
    /// layer id.
    #[serde(default)]
    pub seed: u64,
    /// Ordered decorative layers.
    pub layers: Vec<LayerConfig>,
}

/// One independently-configured particle layer.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LayerConfig {
    /// Layer identifier (stable within a scene, drives the layer's seed).
    pub id: String,
    /// Which effect this layer runs, with its parameters.
    pub effect: EffectConfig,
}

/// Effect selector with per-variant parameters.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum EffectConfig {
    /// Floating hearts drifting down with pulsing scale.
    Hearts(HeartsParams),
    /// Rose petals falling with sway, z drift, and flutter.
    Petals(PetalsParams),
    /// One-shot rising heart shower.
    Shower(ShowerParams),
}

/// Parameters for a floating-hearts layer.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HeartsParams {
    /// Number of particles in the pool.
    #[serde(default = "default_hearts_count")]
    pub count: usize,
    /// Palette sampled uniformly per particle.
    #[serde(default = "default_hearts_palette")]
    pub colors: Vec<Rgb>,
    /// Spatial extent of the spawn/recycle region before viewport scaling.
    #[serde(default = "default_hearts_area")]
    pub area: f64,
    /// Base scale multiplier before per-particle jitter.
    #[serde(default = "default_hearts_base_size")]
    pub base_size: f64,
    /// Scales per-particle emissive/glow strength.
    #[serde(default = "default_hearts_intensity")]
    pub intensity: f64,
    /// Global multiplier on per-particle fall speed.
    #[serde(default = "default_hearts_falling_speed")]
    pub falling_speed: f64,
}

fn default_hearts_count() -> usize {
    100
}

fn default_hearts_palette() -> Vec<Rgb> {
    vec![
        Rgb::from_u8(0xff, 0x17, 0x44),
        Rgb::from_u8(0xff, 0x40, 0x81),
        Rgb::from_u8(0xff, 0x80, 0xab),
        Rgb::from_u8(0xff, 0xb7, 0xc5),
        Rgb::from_u8(0xff, 0xff, 0xff),
        Rgb::from_u8(0xfc, 0xe4, 0xec),
        Rgb::from_u8(0xf8, 0xbb, 0xd0),
    ]
}

fn default_hearts_area() -> f64 {
    70.0
}

fn default_hearts_base_size() -> f64 {
    0.5
}

fn default_hearts_intensity() -> f64 {
    0.7
}

fn default_hearts_falling_speed() -> f64 {
    1.2
}

impl Default for HeartsParams {
    fn default() -> Self {
        Self {
            count: default_hearts_count(),
            colors: default_hearts_palette(),
            area: default_hearts_area(),
            base_size: default_hearts_base_size(),
            intensity: default_hearts_intensity(),
            falling_speed: default_hearts_falling_speed(),
        }
    }
}

/// Parameters for a falling-petals layer.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PetalsParams {
    /// Number of particles in the pool.
    #[serde(default = "default_petals_count")]
    pub count: usize,
    /// Palette sampled uniformly per particle, with ±10% per-channel jitter.
    #[serde(default = "default_petals_palette")]
    pub colors: Vec<Rgb>,
    /// Spatial extent of the spawn/recycle region before viewport scaling.
    #[serde(default = "default_petals_area")]
    pub area: f64,
    /// Base scale multiplier before per-particle jitter.
    #[serde(default = "default_petals_base_size")]
    pub base_size: f64,
    /// Scales per-particle emissive/glow strength.
    #[serde(default = "default_petals_intensity")]
    pub intensity: f64,
    /// Global multiplier on per-particle fall speed.
    #[serde(default = "default_petals_falling_speed")]
    pub falling_speed: f64,
}

fn default_petals_count() -> usize {
    80
}

fn default_petals_palette() -> Vec<Rgb> {
    vec![
        Rgb::from_u8(0xe9, 0x1e, 0x63),
        Rgb::from_u8(0xec, 0x40, 0x7a),
        Rgb::from_u8(0xf0, 0x62, 0x92),
        Rgb::from_u8(0xf4, 0x8f, 0xb1),
        Rgb::from_u8(0xf8, 0xbb, 0xd0),
        Rgb::from_u8(0xd8, 0x1b, 0x60),
    ]
}

fn default_petals_area() -> f64 {
    60.0
}

fn default_petals_base_size() -> f64 {
    0.3
}

fn default_petals_intensity() -> f64 {
    0.5
}

fn default_petals_falling_speed() -> f64 {
    0.8
}

impl Default for PetalsParams {
    fn default() -> Self {
        Self {
            count: default_petals_count(),
            colors: default_petals_palette(),
            area: default_petals_area(),
            base_size: default_petals_base_size(),
            intensity: default_petals_intensity(),
            falling_speed: default_petals_falling_speed(),
        }
    }
}

/// Parameters for a one-shot shower layer.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShowerParams {
    /// Number of particles in the pool.
    #[serde(default = "default_shower_count")]
    pub count: usize,
    /// Palette sampled uniformly per particle.
    #[serde(default = "default_shower_palette")]
    pub colors: Vec<Rgb>,
    /// Seconds of scene time before the burst begins.
    #[serde(default)]
    pub start_delay: f64,
    /// Total burst duration in seconds; the layer is terminal afterwards.
    #[serde(default = "default_shower_duration")]
    pub duration: f64,
}

fn default_shower_count() -> usize {
    200
}

fn default_shower_palette() -> Vec<Rgb> {
    vec![
        Rgb::from_u8(0xff, 0x17, 0x44),
        Rgb::from_u8(0xff, 0x40, 0x81),
        Rgb::from_u8(0xf5, 0x00, 0x57),
        Rgb::from_u8(0xff, 0x80, 0xab),
        Rgb::from_u8(0xf8, 0xbb, 0xd0),
        Rgb::from_u8(0xff, 0x5c, 0x8d),
        Rgb::from_u8(0xc2, 0x18, 0x5b),
    ]
}

fn default_shower_duration() -> f64 {
    10.0
}

impl Default for ShowerParams {
    fn default() -> Self {
        Self {
            count: default_shower_count(),
            colors: default_shower_palette(),
            start_delay: 0.0,
            duration: default_shower_duration(),
        }
    }
}

impl SceneConfig {
    /// Validate scene invariants and layer parameters.
    pub fn validate(&self) -> PetalfallResult<()> {
        for (name, value) in [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PetalfallError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        for layer in &self.layers {
            if layer.id.trim().is_empty() {
                return Err(PetalfallError::validation("layer id must be non-empty"));
            }
            if !seen.insert(layer.id.as_str()) {
                return Err(PetalfallError::validation(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }
            layer.effect.validate(&layer.id)?;
        }
        Ok(())
    }

    /// Parse a scene config from JSON.
    pub fn from_json(s: &str) -> PetalfallResult<Self> {
        serde_json::from_str(s).map_err(|e| PetalfallError::serde(e.to_string()))
    }

    /// Serialize the scene config to pretty JSON.
    pub fn to_json(&self) -> PetalfallResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PetalfallError::serde(e.to_string()))
    }
}

impl EffectConfig {
    fn validate(&self, layer_id: &str) -> PetalfallResult<()> {
        match self {
            EffectConfig::Hearts(p) => validate_falling(
                layer_id,
                &p.colors,
                p.area,
                p.base_size,
                p.intensity,
                p.falling_speed,
            ),
            EffectConfig::Petals(p) => validate_falling(
                layer_id,
                &p.colors,
                p.area,
                p.base_size,
                p.intensity,
                p.falling_speed,
            ),
            EffectConfig::Shower(p) => {
                if p.colors.is_empty() {
                    return Err(PetalfallError::validation(format!(
                        "layer '{layer_id}' colors must be non-empty"
                    )));
                }
                if !p.start_delay.is_finite() || p.start_delay < 0.0 {
                    return Err(PetalfallError::validation(format!(
                        "layer '{layer_id}' start_delay must be finite and >= 0"
                    )));
                }
                if !p.duration.is_finite() || p.duration <= 0.0 {
                    return Err(PetalfallError::validation(format!(
                        "layer '{layer_id}' duration must be finite and > 0"
                    )));
                }
                Ok(())
            }
        }
    }
}

fn validate_falling(
    layer_id: &str,
    colors: &[Rgb],
    area: f64,
    base_size: f64,
    intensity: f64,
    falling_speed: f64,
) -> PetalfallResult<()> {
    if colors.is_empty() {
        return Err(PetalfallError::validation(format!(
            "layer '{layer_id}' colors must be non-empty"
        )));
    }
    for (name, value) in [("area", area), ("base_size", base_size)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PetalfallError::validation(format!(
                "layer '{layer_id}' {name} must be finite and > 0"
            )));
        }
    }
    for (name, value) in [("intensity", intensity), ("falling_speed", falling_speed)] {
        if !value.is_finite() || value < 0.0 {
            return Err(PetalfallError::validation(format!(
                "layer '{layer_id}' {name} must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
