use crate::{
    assets::shapes::ShapeSet,
    eval::burst::{BurstLayer, BurstPhase},
    eval::falling::FallingLayer,
    field::particle::ParticleInstance,
    foundation::core::Tick,
    foundation::error::PetalfallResult,
    foundation::math::stable_hash64,
    scene::model::{EffectConfig, SceneConfig},
};

/// A runnable scene: validated config turned into live particle layers.
pub struct Scene {
    layers: Vec<SceneLayer>,
}

struct SceneLayer {
    id: String,
    shapes: ShapeSet,
    body: LayerBody,
}

enum LayerBody {
    Falling(FallingLayer),
    Burst(BurstLayer),
}

/// Everything to draw for one tick.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneFrame {
    /// Elapsed scene time the frame was evaluated at.
    pub elapsed: f64,
    /// Per-layer draw sets, in configuration order.
    pub layers: Vec<LayerFrame>,
}

/// One layer's contribution to a frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LayerFrame {
    /// Layer identifier from the config.
    pub id: String,
    /// Outline set the instances' shape indices refer to.
    pub shapes: ShapeSet,
    /// Whether the layer should be drawn at all this frame.
    pub visible: bool,
    /// Evaluated particle instances.
    pub instances: Vec<ParticleInstance>,
}

impl Scene {
    /// Validate a config and populate every layer's pool.
    ///
    /// Layer streams are seeded from the scene seed and the layer id, so a
    /// layer keeps its exact particle stream when other layers are added,
    /// removed, or reordered around it.
    #[tracing::instrument(skip(config))]
    pub fn build(config: &SceneConfig) -> PetalfallResult<Scene> {
        config.validate()?;

        let mut layers = Vec::with_capacity(config.layers.len());
        for layer in &config.layers {
            let seed = stable_hash64(config.seed, &layer.id);
            let (shapes, body) = match &layer.effect {
                EffectConfig::Hearts(p) => (
                    ShapeSet::Hearts,
                    LayerBody::Falling(FallingLayer::hearts(p, config.viewport, seed)),
                ),
                EffectConfig::Petals(p) => (
                    ShapeSet::Petals,
                    LayerBody::Falling(FallingLayer::petals(p, config.viewport, seed)),
                ),
                EffectConfig::Shower(p) => (
                    ShapeSet::ShowerHearts,
                    LayerBody::Burst(BurstLayer::new(p, config.viewport, seed)),
                ),
            };
            layers.push(SceneLayer {
                id: layer.id.clone(),
                shapes,
                body,
            });
        }
        Ok(Scene { layers })
    }

    /// Number of layers in the scene.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Advance every layer one tick and collect the frame.
    pub fn advance(&mut self, tick: Tick) -> SceneFrame {
        let layers = self
            .layers
            .iter_mut()
            .map(|layer| {
                let (visible, instances) = match &mut layer.body {
                    LayerBody::Falling(falling) => (true, falling.advance(tick)),
                    LayerBody::Burst(burst) => {
                        let instances = burst.advance(tick);
                        let visible = matches!(
                            burst.phase(),
                            BurstPhase::Rising | BurstPhase::FadingOut
                        );
                        (visible, instances)
                    }
                };
                LayerFrame {
                    id: layer.id.clone(),
                    shapes: layer.shapes,
                    visible,
                    instances,
                }
            })
            .collect();
        SceneFrame {
            elapsed: tick.elapsed,
            layers,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
