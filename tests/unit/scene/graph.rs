use super::*;
use crate::{
    foundation::core::Viewport,
    scene::model::{HeartsParams, LayerConfig, PetalsParams, ShowerParams},
};

fn viewport() -> Viewport {
    Viewport {
        width: 1000.0,
        height: 1000.0,
    }
}

fn hearts_layer(id: &str) -> LayerConfig {
    LayerConfig {
        id: id.to_string(),
        effect: EffectConfig::Hearts(HeartsParams {
            count: 8,
            ..HeartsParams::default()
        }),
    }
}

fn petals_layer(id: &str) -> LayerConfig {
    LayerConfig {
        id: id.to_string(),
        effect: EffectConfig::Petals(PetalsParams {
            count: 6,
            ..PetalsParams::default()
        }),
    }
}

fn shower_layer(id: &str, start_delay: f64) -> LayerConfig {
    LayerConfig {
        id: id.to_string(),
        effect: EffectConfig::Shower(ShowerParams {
            count: 10,
            start_delay,
            ..ShowerParams::default()
        }),
    }
}

#[test]
fn build_rejects_invalid_configs() {
    let config = SceneConfig {
        viewport: viewport(),
        seed: 1,
        layers: vec![hearts_layer("a"), hearts_layer("a")],
    };
    assert!(Scene::build(&config).is_err());
}

#[test]
fn frames_mirror_the_layer_order_and_shape_sets() {
    let config = SceneConfig {
        viewport: viewport(),
        seed: 1,
        layers: vec![
            hearts_layer("hearts"),
            petals_layer("petals"),
            shower_layer("finale", 0.0),
        ],
    };
    let mut scene = Scene::build(&config).unwrap();
    assert_eq!(scene.layer_count(), 3);

    let frame = scene.advance(Tick::new(1.0, 1.0 / 60.0));
    assert_eq!(frame.elapsed, 1.0);
    assert_eq!(frame.layers.len(), 3);
    assert_eq!(frame.layers[0].id, "hearts");
    assert_eq!(frame.layers[0].shapes, ShapeSet::Hearts);
    assert_eq!(frame.layers[0].instances.len(), 8);
    assert_eq!(frame.layers[1].shapes, ShapeSet::Petals);
    assert_eq!(frame.layers[2].shapes, ShapeSet::ShowerHearts);
    assert!(frame.layers[0].visible);
}

#[test]
fn layer_streams_survive_reordering() {
    let forward = SceneConfig {
        viewport: viewport(),
        seed: 5,
        layers: vec![hearts_layer("hearts"), petals_layer("petals")],
    };
    let reversed = SceneConfig {
        viewport: viewport(),
        seed: 5,
        layers: vec![petals_layer("petals"), hearts_layer("hearts")],
    };

    let tick = Tick::new(2.5, 1.0 / 60.0);
    let frame_a = Scene::build(&forward).unwrap().advance(tick);
    let frame_b = Scene::build(&reversed).unwrap().advance(tick);

    let hearts_a = &frame_a.layers[0];
    let hearts_b = &frame_b.layers[1];
    assert_eq!(hearts_a.id, hearts_b.id);
    for (x, y) in hearts_a.instances.iter().zip(&hearts_b.instances) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.rotation, y.rotation);
    }
}

#[test]
fn scenes_evaluate_identically_for_identical_configs() {
    let config = SceneConfig {
        viewport: viewport(),
        seed: 11,
        layers: vec![
            hearts_layer("hearts"),
            petals_layer("petals"),
            shower_layer("finale", 1.0),
        ],
    };
    let mut a = Scene::build(&config).unwrap();
    let mut b = Scene::build(&config).unwrap();

    for step in 0..120 {
        let tick = Tick::new(step as f64 / 30.0, 1.0 / 30.0);
        let fa = serde_json::to_string(&a.advance(tick)).unwrap();
        let fb = serde_json::to_string(&b.advance(tick)).unwrap();
        assert_eq!(fa, fb);
    }
}

#[test]
fn burst_layers_hide_after_their_duration() {
    let config = SceneConfig {
        viewport: viewport(),
        seed: 2,
        layers: vec![shower_layer("finale", 0.5)],
    };
    let mut scene = Scene::build(&config).unwrap();

    let pending = scene.advance(Tick::new(0.2, 1.0 / 60.0));
    assert!(!pending.layers[0].visible);
    assert!(pending.layers[0].instances.is_empty());

    let live = scene.advance(Tick::new(3.0, 1.0 / 60.0));
    assert!(live.layers[0].visible);
    assert_eq!(live.layers[0].instances.len(), 10);

    for t in [10.6, 11.0, 99.0] {
        let done = scene.advance(Tick::new(t, 1.0 / 60.0));
        assert!(!done.layers[0].visible);
        assert!(done.layers[0].instances.is_empty());
    }
}
