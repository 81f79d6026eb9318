//! Pool initializers: sample a layer's fixed particle population.
//!
//! Every parameter a particle will ever use is drawn here, once, from the
//! layer's seeded generator. Out-of-range counts degrade to an empty pool;
//! an empty palette falls back to white rather than failing.

use crate::{
    animation::{pulse::Pulse, rng::Rng64},
    assets::shapes::ShapeSet,
    field::particle::{BurstParticle, Motion, Particle},
    foundation::core::{Rgb, Vec3, Viewport},
    scene::model::{HeartsParams, PetalsParams, ShowerParams},
};

pub(crate) fn populate_hearts(
    params: &HeartsParams,
    area: f64,
    ratio: f64,
    rng: &mut Rng64,
) -> Vec<Particle> {
    let mut slots = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let shape = rng.index(ShapeSet::Hearts.variant_count());
        let base = Vec3::new(
            rng.signed_unit() * area,
            rng.in_range(area * 0.5, area * 2.0),
            rng.signed_unit() * (area * 0.25) - 10.0,
        );
        let rotation_seed = Vec3::new(rng.angle(), rng.angle(), rng.angle());
        let pulse = match rng.index(3) {
            0 => Pulse::Gentle {
                speed: rng.in_range(0.5, 2.0),
            },
            1 => Pulse::Pop {
                speed: rng.in_range(4.0, 7.0),
                amplitude: rng.in_range(0.1, 0.3),
            },
            _ => Pulse::Heartbeat {
                speed: rng.in_range(0.8, 2.0),
                amplitude: rng.in_range(0.1, 0.3),
            },
        };
        let motion = Motion::Heart {
            fall_speed: rng.in_range(0.5, 1.3) * params.falling_speed,
            sway_speed: rng.in_range(0.2, 1.0),
            spin_speed: rng.in_range(0.1, 0.4),
            wobble_amplitude: rng.in_range(0.1, 0.3),
            pulse,
        };
        let spawn_delay = rng.in_range(0.0, 15.0);
        slots.push(Particle {
            base,
            rotation_seed,
            size: params.base_size * rng.in_range(0.3, 2.0) * ratio,
            color: rng.pick(&params.colors).copied().unwrap_or(Rgb::WHITE),
            opacity: rng.in_range(0.6, 1.0),
            emissive: 0.3 + rng.unit() * 0.7 * params.intensity,
            shape,
            spawn_delay,
            motion,
            fall_started_at: spawn_delay,
        });
    }
    tracing::trace!(count = slots.len(), area, "heart pool populated");
    slots
}

pub(crate) fn populate_petals(
    params: &PetalsParams,
    area: f64,
    ratio: f64,
    rng: &mut Rng64,
) -> Vec<Particle> {
    let mut slots = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let shape = rng.index(ShapeSet::Petals.variant_count());
        let base = Vec3::new(
            rng.signed_unit() * area,
            rng.in_range(area, area * 2.5),
            rng.signed_unit() * (area * 0.25) - 5.0,
        );
        let rotation_seed = Vec3::new(rng.angle(), rng.angle(), rng.angle());
        let motion = Motion::Petal {
            fall_speed: rng.in_range(0.3, 1.0) * params.falling_speed,
            sway_speed: rng.in_range(0.2, 1.0),
            sway_amplitude: rng.in_range(1.0, 4.0),
            spin_speed: rng.in_range(0.1, 0.5),
            flutter_speed: rng.in_range(2.0, 5.0),
            flutter_amplitude: rng.in_range(0.1, 0.4),
            flutter_phase: rng.angle(),
        };
        let color = rng
            .pick(&params.colors)
            .copied()
            .unwrap_or(Rgb::WHITE)
            .jittered(rng, 0.1);
        let spawn_delay = rng.in_range(0.0, 20.0);
        slots.push(Particle {
            base,
            rotation_seed,
            size: params.base_size * rng.in_range(0.6, 1.3) * ratio,
            color,
            opacity: rng.in_range(0.7, 1.0),
            emissive: 0.1 + rng.unit() * 0.4 * params.intensity,
            shape,
            spawn_delay,
            motion,
            fall_started_at: spawn_delay,
        });
    }
    tracing::trace!(count = slots.len(), area, "petal pool populated");
    slots
}

pub(crate) fn populate_shower(
    params: &ShowerParams,
    viewport: Viewport,
    rng: &mut Rng64,
) -> Vec<BurstParticle> {
    let mut slots = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let base = Vec3::new(
            rng.signed_unit() * viewport.width * 0.75,
            -rng.in_range(viewport.height, viewport.height * 2.0),
            rng.in_range(-15.0, -5.0),
        );
        let rotation_seed = Vec3::new(
            rng.unit() * std::f64::consts::PI,
            rng.unit() * std::f64::consts::PI,
            rng.unit() * std::f64::consts::PI,
        );
        let velocity = Vec3::new(
            rng.signed_unit() * 0.1,
            rng.in_range(0.5, 1.0),
            rng.signed_unit() * 0.05,
        );
        let spawn_delay = rng.in_range(0.0, 3.0);
        slots.push(BurstParticle {
            base,
            rotation_seed,
            size: rng.in_range(0.05, 0.15),
            color: rng.pick(&params.colors).copied().unwrap_or(Rgb::WHITE),
            opacity: rng.in_range(0.7, 1.0),
            velocity,
            spawn_delay,
            rise_started_at: spawn_delay,
        });
    }
    tracing::trace!(count = slots.len(), "shower pool populated");
    slots
}

#[cfg(test)]
#[path = "../../tests/unit/field/pool.rs"]
mod tests;
