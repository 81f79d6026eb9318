use super::*;
use crate::foundation::core::Viewport;

fn base_config() -> SceneConfig {
    SceneConfig {
        viewport: Viewport {
            width: 1280.0,
            height: 720.0,
        },
        seed: 9,
        layers: vec![
            LayerConfig {
                id: "hearts".to_string(),
                effect: EffectConfig::Hearts(HeartsParams::default()),
            },
            LayerConfig {
                id: "petals".to_string(),
                effect: EffectConfig::Petals(PetalsParams::default()),
            },
        ],
    }
}

#[test]
fn defaults_fill_in_for_minimal_json() {
    let config = SceneConfig::from_json(
        r##"{
            "viewport": { "width": 1280.0, "height": 720.0 },
            "layers": [
                { "id": "hearts", "effect": { "kind": "Hearts", "params": {} } },
                { "id": "petals", "effect": { "kind": "Petals", "params": { "count": 12 } } }
            ]
        }"##,
    )
    .unwrap();

    assert_eq!(config.seed, 0);
    match &config.layers[0].effect {
        EffectConfig::Hearts(p) => {
            assert_eq!(p.count, 100);
            assert_eq!(p.area, 70.0);
            assert_eq!(p.falling_speed, 1.2);
            assert_eq!(p.colors.len(), 7);
        }
        other => panic!("expected hearts, got {other:?}"),
    }
    match &config.layers[1].effect {
        EffectConfig::Petals(p) => {
            assert_eq!(p.count, 12);
            assert_eq!(p.base_size, 0.3);
        }
        other => panic!("expected petals, got {other:?}"),
    }
    config.validate().unwrap();
}

#[test]
fn palettes_serialize_as_hex_strings() {
    let json = base_config().to_json().unwrap();
    assert!(json.contains("\"#ff1744\""));

    let reparsed = SceneConfig::from_json(&json).unwrap();
    assert_eq!(reparsed.to_json().unwrap(), json);
}

#[test]
fn unparseable_palette_entries_are_rejected() {
    let result = SceneConfig::from_json(
        r##"{
            "viewport": { "width": 100.0, "height": 100.0 },
            "layers": [
                { "id": "h", "effect": { "kind": "Hearts", "params": { "colors": ["#nothex"] } } }
            ]
        }"##,
    );
    assert!(result.is_err());
}

#[test]
fn validation_rejects_structural_mistakes() {
    let mut empty_id = base_config();
    empty_id.layers[0].id = "  ".to_string();
    assert!(empty_id.validate().is_err());

    let mut duplicate = base_config();
    duplicate.layers[1].id = "hearts".to_string();
    assert!(duplicate.validate().is_err());

    let mut flat_viewport = base_config();
    flat_viewport.viewport.height = 0.0;
    assert!(flat_viewport.validate().is_err());

    let mut no_colors = base_config();
    if let EffectConfig::Hearts(p) = &mut no_colors.layers[0].effect {
        p.colors.clear();
    }
    assert!(no_colors.validate().is_err());

    let mut negative_area = base_config();
    if let EffectConfig::Petals(p) = &mut negative_area.layers[1].effect {
        p.area = -1.0;
    }
    assert!(negative_area.validate().is_err());
}

#[test]
fn shower_parameters_are_validated() {
    let mut config = base_config();
    config.layers.push(LayerConfig {
        id: "finale".to_string(),
        effect: EffectConfig::Shower(ShowerParams {
            duration: 0.0,
            ..ShowerParams::default()
        }),
    });
    assert!(config.validate().is_err());

    if let EffectConfig::Shower(p) = &mut config.layers[2].effect {
        p.duration = 10.0;
        p.start_delay = -1.0;
    }
    assert!(config.validate().is_err());

    if let EffectConfig::Shower(p) = &mut config.layers[2].effect {
        p.start_delay = 2.0;
    }
    config.validate().unwrap();
}
