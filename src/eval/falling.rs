use crate::{
    animation::rng::Rng64,
    field::particle::{Motion, Particle, ParticleInstance},
    field::pool,
    foundation::core::{Tick, Vec3, Viewport},
    scene::model::{HeartsParams, PetalsParams},
};

/// Fraction of the layer extent over which hearts fade out at the bottom.
const HEART_FADE_FRACTION: f64 = 0.2;
/// Fraction of the layer extent over which petals fade out at the bottom.
const PETAL_FADE_FRACTION: f64 = 0.1;
/// Upper bound of the random headroom added above the extent at recycle.
const RECYCLE_HEADROOM: f64 = 20.0;

/// An endless falling layer: floating hearts or rose petals.
///
/// The pool is fixed at build time; each tick derives every particle's
/// transform from elapsed time and its spawn parameters. The only mutation is
/// the recycle rewrite of a particle's origin when it crosses the lower bound,
/// which is what makes the fall endless over a finite pool.
pub struct FallingLayer {
    pub(crate) area: f64,
    pub(crate) fade_distance: f64,
    pub(crate) slots: Vec<Particle>,
    pub(crate) rng: Rng64,
}

impl FallingLayer {
    /// Build a floating-hearts layer.
    pub fn hearts(params: &HeartsParams, viewport: Viewport, seed: u64) -> Self {
        let ratio = viewport.ratio();
        let area = params.area * ratio;
        let mut rng = Rng64::new(seed);
        let slots = pool::populate_hearts(params, area, ratio, &mut rng);
        Self {
            area,
            fade_distance: area * HEART_FADE_FRACTION,
            slots,
            rng,
        }
    }

    /// Build a falling-petals layer.
    pub fn petals(params: &PetalsParams, viewport: Viewport, seed: u64) -> Self {
        let ratio = viewport.ratio();
        let area = params.area * ratio;
        let mut rng = Rng64::new(seed);
        let slots = pool::populate_petals(params, area, ratio, &mut rng);
        Self {
            area,
            fade_distance: area * PETAL_FADE_FRACTION,
            slots,
            rng,
        }
    }

    /// Number of particles in the pool.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Scaled extent of the spawn/recycle region.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// The pool slots, in stable order.
    pub fn particles(&self) -> &[Particle] {
        &self.slots
    }

    /// Advance one tick and collect the evaluated instances.
    pub fn advance(&mut self, tick: Tick) -> Vec<ParticleInstance> {
        let mut out = Vec::with_capacity(self.slots.len());
        self.advance_into(tick, &mut out);
        out
    }

    /// Advance one tick, appending instances to a caller-owned buffer.
    pub fn advance_into(&mut self, tick: Tick, out: &mut Vec<ParticleInstance>) {
        let t = tick.elapsed;
        let area = self.area;
        let lower_bound = -area / 2.0;

        for slot in &mut self.slots {
            if t < slot.spawn_delay {
                // Held at the origin until the stagger delay passes.
                out.push(ParticleInstance {
                    position: slot.base,
                    rotation: slot.rotation_seed,
                    scale: Vec3::splat(slot.size),
                    color: slot.color,
                    opacity: slot.opacity,
                    emissive: slot.emissive,
                    shape: slot.shape,
                });
                continue;
            }

            let life = t - slot.fall_started_at;
            let mut y = slot.base.y - life * slot.motion.fall_speed();
            if y < lower_bound {
                slot.base.y = area + self.rng.in_range(0.0, RECYCLE_HEADROOM);
                slot.base.x = self.rng.signed_unit() * area;
                slot.fall_started_at = t;
                y = slot.base.y;
            }

            let (position, rotation, scale, emissive) = match slot.motion {
                Motion::Heart {
                    sway_speed,
                    spin_speed,
                    wobble_amplitude,
                    pulse,
                    ..
                } => {
                    let position = Vec3::new(
                        slot.base.x + (t * sway_speed).sin() * (slot.size * 5.0),
                        y,
                        slot.base.z,
                    );
                    let rotation = Vec3::new(
                        slot.rotation_seed.x + t * spin_speed,
                        slot.rotation_seed.y + (t * 0.5).sin() * wobble_amplitude,
                        slot.rotation_seed.z + (t * 0.5).cos() * wobble_amplitude,
                    );
                    let beat = pulse.scale_at(t);
                    (
                        position,
                        rotation,
                        Vec3::splat(slot.size * beat),
                        slot.emissive * (0.8 + beat * 0.4),
                    )
                }
                Motion::Petal {
                    sway_speed,
                    sway_amplitude,
                    spin_speed,
                    flutter_speed,
                    flutter_amplitude,
                    flutter_phase,
                    ..
                } => {
                    let position = Vec3::new(
                        slot.base.x + (t * sway_speed).sin() * sway_amplitude,
                        y,
                        slot.base.z + (t * sway_speed * 0.7).cos() * sway_amplitude * 0.3,
                    );
                    let flutter = (t * flutter_speed + flutter_phase).sin() * flutter_amplitude;
                    let rotation = Vec3::new(
                        slot.rotation_seed.x + t * spin_speed * 0.5 + flutter,
                        slot.rotation_seed.y + t * spin_speed + flutter * 0.7,
                        slot.rotation_seed.z + t * spin_speed * 0.7 + flutter * 0.5,
                    );
                    let breathe = 1.0 + (t * 0.5 + flutter_phase).sin() * 0.05;
                    let scale = Vec3::new(
                        slot.size * breathe,
                        slot.size * (breathe + 0.02),
                        slot.size * breathe,
                    );
                    (position, rotation, scale, slot.emissive)
                }
            };

            // Linear ramp to zero over the bottom fade band.
            let from_bottom = y - lower_bound;
            let opacity = if from_bottom < self.fade_distance {
                slot.opacity * (from_bottom / self.fade_distance).max(0.0)
            } else {
                slot.opacity
            };

            out.push(ParticleInstance {
                position,
                rotation,
                scale,
                color: slot.color,
                opacity,
                emissive,
                shape: slot.shape,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/falling.rs"]
mod tests;
