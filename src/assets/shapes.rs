//! Built-in 2D outlines for the particle shapes.
//!
//! Outlines are unit-scale [`BezPath`]s in a y-up local space; a renderer
//! extrudes or rasterizes them however it likes and applies the per-instance
//! transform from [`crate::ParticleInstance`]. Each particle carries an index
//! into its layer's outline set, chosen at spawn.

use kurbo::BezPath;

/// Which outline set a layer's shape indices refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ShapeSet {
    /// Three heart silhouettes, from regular to doodle-like.
    Hearts,
    /// Four rose-petal silhouettes.
    Petals,
    /// The single rounded heart used by the shower burst.
    ShowerHearts,
}

impl ShapeSet {
    /// Number of outline variants in this set.
    pub fn variant_count(self) -> usize {
        match self {
            ShapeSet::Hearts => 3,
            ShapeSet::Petals => 4,
            ShapeSet::ShowerHearts => 1,
        }
    }

    /// Materialize the outline paths, indexed by a particle's shape index.
    pub fn outlines(self) -> Vec<BezPath> {
        match self {
            ShapeSet::Hearts => heart_outlines(),
            ShapeSet::Petals => petal_outlines(),
            ShapeSet::ShowerHearts => vec![shower_heart_outline()],
        }
    }
}

/// The three heart outlines used by floating-heart layers.
pub fn heart_outlines() -> Vec<BezPath> {
    let mut regular = BezPath::new();
    regular.move_to((0.25, 0.25));
    regular.curve_to((0.25, 0.25), (0.2, 0.0), (0.0, 0.0));
    regular.curve_to((-0.3, 0.0), (-0.3, 0.35), (-0.3, 0.35));
    regular.curve_to((-0.3, 0.6), (-0.15, 0.8), (0.0, 0.95));
    regular.curve_to((0.15, 0.8), (0.3, 0.6), (0.3, 0.35));
    regular.curve_to((0.3, 0.35), (0.3, 0.0), (0.0, 0.0));
    regular.close_path();

    // Rounder, hand-drawn look.
    let mut doodle_round = BezPath::new();
    doodle_round.move_to((0.0, 0.3));
    doodle_round.curve_to((-0.1, 0.1), (-0.4, 0.0), (-0.7, 0.1));
    doodle_round.curve_to((-1.1, 0.2), (-1.1, 0.7), (-0.6, 1.1));
    doodle_round.curve_to((-0.4, 1.3), (-0.2, 1.4), (0.0, 1.2));
    doodle_round.curve_to((0.2, 1.4), (0.4, 1.3), (0.6, 1.1));
    doodle_round.curve_to((1.1, 0.7), (1.1, 0.2), (0.7, 0.1));
    doodle_round.curve_to((0.4, 0.0), (0.1, 0.1), (0.0, 0.3));
    doodle_round.close_path();

    // Exaggerated lobes.
    let mut doodle_wide = BezPath::new();
    doodle_wide.move_to((0.0, 0.25));
    doodle_wide.curve_to((0.0, 0.2), (-0.5, -0.3), (-0.8, 0.0));
    doodle_wide.curve_to((-1.2, 0.3), (-1.3, 0.8), (-0.5, 1.2));
    doodle_wide.curve_to((-0.2, 1.4), (-0.1, 1.5), (0.0, 1.3));
    doodle_wide.curve_to((0.1, 1.5), (0.2, 1.4), (0.5, 1.2));
    doodle_wide.curve_to((1.3, 0.8), (1.2, 0.3), (0.8, 0.0));
    doodle_wide.curve_to((0.5, -0.3), (0.0, 0.2), (0.0, 0.25));
    doodle_wide.close_path();

    vec![regular, doodle_round, doodle_wide]
}

/// The four petal outlines used by falling-petal layers.
pub fn petal_outlines() -> Vec<BezPath> {
    let mut classic = BezPath::new();
    classic.move_to((0.0, 0.0));
    classic.curve_to((0.0, 1.2), (1.2, 1.8), (1.5, 0.8));
    classic.curve_to((1.8, 0.0), (1.0, -0.5), (0.0, 0.0));
    classic.close_path();

    let mut round = BezPath::new();
    round.move_to((0.0, 0.0));
    round.curve_to((0.5, 0.8), (1.5, 1.2), (1.8, 0.5));
    round.curve_to((1.9, 0.0), (1.2, -0.4), (0.5, -0.2));
    round.curve_to((0.2, -0.3), (-0.2, -0.2), (0.0, 0.0));
    round.close_path();

    let mut heart_like = BezPath::new();
    heart_like.move_to((0.0, 0.0));
    heart_like.curve_to((-0.2, 0.5), (-0.8, 0.8), (-0.8, 1.2));
    heart_like.curve_to((-0.8, 1.6), (-0.4, 1.8), (0.0, 1.4));
    heart_like.curve_to((0.4, 1.8), (0.8, 1.6), (0.8, 1.2));
    heart_like.curve_to((0.8, 0.8), (0.2, 0.5), (0.0, 0.0));
    heart_like.close_path();

    let mut irregular = BezPath::new();
    irregular.move_to((0.0, 0.0));
    irregular.curve_to((0.2, 0.4), (0.8, 0.5), (1.0, 0.8));
    irregular.curve_to((1.3, 1.2), (1.2, 1.6), (0.8, 1.6));
    irregular.curve_to((0.4, 1.7), (0.2, 1.4), (0.1, 1.2));
    irregular.curve_to((0.0, 1.4), (-0.2, 1.7), (-0.4, 1.6));
    irregular.curve_to((-0.8, 1.5), (-1.2, 1.0), (-0.8, 0.6));
    irregular.curve_to((-0.5, 0.3), (-0.2, 0.2), (0.0, 0.0));
    irregular.close_path();

    vec![classic, round, heart_like, irregular]
}

/// The rounded heart outline used by the shower burst.
pub fn shower_heart_outline() -> BezPath {
    let mut heart = BezPath::new();
    heart.move_to((0.0, 0.5));
    heart.curve_to((-0.5, 0.3), (-1.0, 0.0), (-1.0, -0.6));
    heart.curve_to((-1.0, -1.4), (-0.5, -1.5), (0.0, -1.0));
    heart.curve_to((0.5, -1.5), (1.0, -1.4), (1.0, -0.6));
    heart.curve_to((1.0, 0.0), (0.5, 0.3), (0.0, 0.5));
    heart.close_path();
    heart
}
