use petalfall::{
    EffectConfig, HeartsParams, LayerConfig, PetalsParams, SceneConfig, ShowerParams, Viewport,
};

fn main() -> anyhow::Result<()> {
    let config = SceneConfig {
        viewport: Viewport {
            width: 1280.0,
            height: 720.0,
        },
        seed: 7,
        layers: vec![
            LayerConfig {
                id: "floating-hearts".to_string(),
                effect: EffectConfig::Hearts(HeartsParams::default()),
            },
            LayerConfig {
                id: "falling-petals".to_string(),
                effect: EffectConfig::Petals(PetalsParams::default()),
            },
            LayerConfig {
                id: "finale-shower".to_string(),
                effect: EffectConfig::Shower(ShowerParams {
                    start_delay: 2.0,
                    ..ShowerParams::default()
                }),
            },
        ],
    };
    config.validate()?;
    println!("{}", config.to_json()?);
    Ok(())
}
