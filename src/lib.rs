//! Petalfall is a deterministic procedural particle-field animation engine for
//! decorative scenes: floating hearts, falling rose petals, and one-shot heart
//! showers.
//!
//! The engine owns particle pools and their kinematics; it does not render.
//! Every tick it turns elapsed time into per-particle draw instances (position,
//! rotation, scale, color, opacity, emissive strength, shape index) that any
//! renderer can consume.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: build a [`SceneConfig`] programmatically or from JSON
//!    (layers, palettes, viewport, seed)
//! 2. **Build**: `SceneConfig -> Scene` (validated, pools populated from the
//!    scene seed)
//! 3. **Advance**: `Scene + Tick -> SceneFrame` (pure kinematics over the
//!    pools; recycle origins are the only mutation)
//! 4. **Draw** (external): map each [`ParticleInstance`] onto the outlines in
//!    its layer's [`ShapeSet`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical configs and seeds produce
//!   identical pools and identical frames on any host.
//! - **Host-agnostic time**: the per-frame update is an explicit [`Tick`]
//!   function callable from any scheduler (render loop, fixed-timestep
//!   harness); nothing here blocks, suspends, or reads a clock.
//! - **Fixed pools**: layer capacity never changes after build; particles are
//!   recycled at the bounds, never freed or reallocated.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod eval;
mod field;
mod foundation;
mod scene;

pub use animation::pulse::Pulse;
pub use animation::rng::Rng64;
pub use assets::shapes::{ShapeSet, heart_outlines, petal_outlines, shower_heart_outline};
pub use eval::burst::{BurstLayer, BurstPhase};
pub use eval::falling::FallingLayer;
pub use field::particle::{BurstParticle, Motion, Particle, ParticleInstance};
pub use foundation::core::{Clock, Rgb, Tick, Vec3, Viewport};
pub use foundation::error::{PetalfallError, PetalfallResult};
pub use scene::graph::{LayerFrame, Scene, SceneFrame};
pub use scene::model::{
    EffectConfig, HeartsParams, LayerConfig, PetalsParams, SceneConfig, ShowerParams,
};

pub use kurbo::{BezPath, Point};
