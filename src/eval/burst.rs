use crate::{
    animation::rng::Rng64,
    field::particle::{BurstParticle, ParticleInstance},
    field::pool,
    foundation::core::{Tick, Vec3, Viewport},
    scene::model::ShowerParams,
};

/// Per-particle fade-in window after activation.
const FADE_IN_SECS: f64 = 0.5;
/// Fade-out window at the tail of the burst.
const FADE_OUT_SECS: f64 = 1.0;
/// How far above the viewport a particle may rise before wrapping.
const WRAP_MARGIN: f64 = 2.0;
/// Horizontal oscillation rate around the rise path.
const DRIFT_RATE: f64 = 2.0;
/// Horizontal oscillation amplitude around the rise path.
const DRIFT_AMPLITUDE: f64 = 0.25;
/// Fixed emissive strength of shower hearts.
const EMISSIVE_STRENGTH: f64 = 0.5;
/// Per-axis spin rates applied from activation, radians per second.
const SPIN_RATES: Vec3 = Vec3::new(0.2, 0.3, 0.1);

/// Lifecycle of a one-shot burst layer. `Done` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstPhase {
    /// Waiting for the configured start delay.
    Pending,
    /// Particles rising through the viewport.
    Rising,
    /// Final window; opacity ramps down.
    FadingOut,
    /// Burst complete; the layer is hidden and never advances again.
    Done,
}

/// A one-shot rising heart shower.
///
/// Unlike [`crate::FallingLayer`], this layer has a terminal state: after its
/// fixed duration it hides and stops doing per-particle work entirely. While
/// live, particles that rise out of view wrap back below the viewport so the
/// stream stays dense for the whole burst.
pub struct BurstLayer {
    pub(crate) start_delay: f64,
    pub(crate) duration: f64,
    pub(crate) viewport: Viewport,
    pub(crate) slots: Vec<BurstParticle>,
    pub(crate) rng: Rng64,
    pub(crate) phase: BurstPhase,
}

impl BurstLayer {
    /// Build a shower layer.
    pub fn new(params: &ShowerParams, viewport: Viewport, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let slots = pool::populate_shower(params, viewport, &mut rng);
        Self {
            start_delay: params.start_delay,
            duration: params.duration,
            viewport,
            slots,
            rng,
            phase: BurstPhase::Pending,
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

    /// Current lifecycle phase.
    pub fn phase(&self) -> BurstPhase {
        self.phase
    }

    /// Whether the burst has reached its terminal state.
    pub fn is_done(&self) -> bool {
        self.phase == BurstPhase::Done
    }

    /// Advance one tick and collect the evaluated instances.
    ///
    /// Returns an empty set while pending and forever once done.
    pub fn advance(&mut self, tick: Tick) -> Vec<ParticleInstance> {
        if self.phase == BurstPhase::Done {
            return Vec::new();
        }

        let local = tick.elapsed - self.start_delay;
        let next = self.phase_at(local);
        if next != self.phase {
            tracing::debug!(from = ?self.phase, to = ?next, "burst phase transition");
            self.phase = next;
        }
        match self.phase {
            BurstPhase::Pending | BurstPhase::Done => return Vec::new(),
            BurstPhase::Rising | BurstPhase::FadingOut => {}
        }

        let mut out = Vec::with_capacity(self.slots.len());
        let ceiling = self.viewport.height + WRAP_MARGIN;

        for slot in &mut self.slots {
            let active_for = local - slot.spawn_delay;
            if active_for <= 0.0 {
                // Parked invisibly at the spawn point until its delay passes.
                out.push(ParticleInstance {
                    position: slot.base,
                    rotation: slot.rotation_seed,
                    scale: Vec3::splat(slot.size),
                    color: slot.color,
                    opacity: 0.0,
                    emissive: EMISSIVE_STRENGTH,
                    shape: 0,
                });
                continue;
            }

            let rising_for = local - slot.rise_started_at;
            let mut position = slot.base + slot.velocity * rising_for;
            if position.y > ceiling {
                slot.base.y = -self.viewport.height;
                slot.base.x = self.rng.signed_unit() * self.viewport.width * 0.75;
                slot.rise_started_at = local;
                position = slot.base;
            }
            position.x += (active_for * DRIFT_RATE).sin() * DRIFT_AMPLITUDE;

            let rotation = slot.rotation_seed + SPIN_RATES * active_for;

            let opacity = if active_for < FADE_IN_SECS {
                slot.opacity * (active_for / FADE_IN_SECS)
            } else if active_for > self.duration - FADE_OUT_SECS {
                (slot.opacity * (1.0 - (active_for - (self.duration - FADE_OUT_SECS)))).max(0.0)
            } else {
                slot.opacity
            };

            out.push(ParticleInstance {
                position,
                rotation,
                scale: Vec3::splat(slot.size),
                color: slot.color,
                opacity,
                emissive: EMISSIVE_STRENGTH,
                shape: 0,
            });
        }
        out
    }

    fn phase_at(&self, local: f64) -> BurstPhase {
        if local < 0.0 {
            BurstPhase::Pending
        } else if local >= self.duration {
            BurstPhase::Done
        } else if local >= self.duration - FADE_OUT_SECS {
            BurstPhase::FadingOut
        } else {
            BurstPhase::Rising
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/burst.rs"]
mod tests;
