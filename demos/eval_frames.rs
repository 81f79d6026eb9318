use petalfall::{Clock, Scene, SceneConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/scene.json");
    let config = SceneConfig::from_json(s)?;
    let mut scene = Scene::build(&config)?;

    // Walk the scene at a fixed 60 Hz step and report once a second.
    let mut clock = Clock::new();
    for step in 0..(15 * 60) {
        let frame = scene.advance(clock.tick(1.0 / 60.0));
        if step % 60 == 0 {
            for layer in &frame.layers {
                println!(
                    "t={:5.1}s  {:16}  visible={}  instances={}",
                    frame.elapsed,
                    layer.id,
                    layer.visible,
                    layer.instances.len()
                );
            }
        }
    }

    Ok(())
}
