use crate::{
    animation::pulse::Pulse,
    foundation::core::{Rgb, Vec3},
};

/// One pool slot of a falling layer.
///
/// Everything here is fixed at spawn except the recycle origin: `base.y` and
/// `base.x` are rewritten when the particle crosses the lower bound, together
/// with the time base of its current life. Per-frame position, rotation,
/// scale, and opacity are derived, never stored.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Spawn-relative origin of the current life.
    pub base: Vec3,
    /// Initial Euler angles in radians.
    pub rotation_seed: Vec3,
    /// Base scale before per-frame envelopes.
    pub size: f64,
    /// Particle color.
    pub color: Rgb,
    /// Nominal opacity before edge fades.
    pub opacity: f64,
    /// Nominal emissive/glow strength.
    pub emissive: f64,
    /// Index into the layer's [`crate::ShapeSet`] outlines.
    pub shape: usize,
    /// Seconds before this particle starts moving.
    pub spawn_delay: f64,
    /// Variant-specific kinematic parameters.
    pub motion: Motion,
    /// Elapsed-time origin of the current fall, rewritten at recycle.
    pub(crate) fall_started_at: f64,
}

/// Per-particle kinematic parameters for the falling variants.
#[derive(Clone, Copy, Debug)]
pub enum Motion {
    /// Floating hearts: sway scaled by size, slow axis wobble, pulsing scale.
    Heart {
        /// Vertical speed in units per second.
        fall_speed: f64,
        /// Sway oscillation rate; amplitude is `size * 5`.
        sway_speed: f64,
        /// Continuous spin rate on the x axis.
        spin_speed: f64,
        /// Amplitude of the slow y/z wobble.
        wobble_amplitude: f64,
        /// Scale envelope chosen at spawn.
        pulse: Pulse,
    },
    /// Falling petals: explicit sway amplitude, z drift, flutter, breathing.
    Petal {
        /// Vertical speed in units per second.
        fall_speed: f64,
        /// Sway oscillation rate.
        sway_speed: f64,
        /// Sway amplitude; z drift uses 30% of it.
        sway_amplitude: f64,
        /// Base spin rate, distributed unevenly over the three axes.
        spin_speed: f64,
        /// Flutter oscillation rate.
        flutter_speed: f64,
        /// Flutter rotation amplitude.
        flutter_amplitude: f64,
        /// Flutter phase offset, also used by the breathing envelope.
        flutter_phase: f64,
    },
}

impl Motion {
    pub(crate) fn fall_speed(&self) -> f64 {
        match *self {
            Motion::Heart { fall_speed, .. } | Motion::Petal { fall_speed, .. } => fall_speed,
        }
    }
}

/// One pool slot of the shower burst.
///
/// Unlike the falling variants, shower particles carry a full velocity and
/// rise; their fades are keyed to activation time rather than travel.
#[derive(Clone, Debug)]
pub struct BurstParticle {
    /// Spawn-relative origin of the current rise, rewritten at wrap.
    pub base: Vec3,
    /// Initial Euler angles in radians.
    pub rotation_seed: Vec3,
    /// Uniform scale.
    pub size: f64,
    /// Particle color.
    pub color: Rgb,
    /// Nominal opacity before the fade-in/fade-out envelope.
    pub opacity: f64,
    /// Constant velocity in units per second, mostly upward.
    pub velocity: Vec3,
    /// Seconds of layer-local time before this particle starts rising.
    pub spawn_delay: f64,
    /// Layer-local time origin of the current rise, rewritten at wrap.
    pub(crate) rise_started_at: f64,
}

/// Evaluated draw state for one particle on one tick.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ParticleInstance {
    /// World position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Color, straight alpha.
    pub color: Rgb,
    /// Opacity in `[0, 1]` after fades.
    pub opacity: f64,
    /// Emissive/glow strength after modulation.
    pub emissive: f64,
    /// Index into the layer's [`crate::ShapeSet`] outlines.
    pub shape: usize,
}
