use super::*;

fn viewport() -> Viewport {
    Viewport {
        width: 12.0,
        height: 8.0,
    }
}

fn layer(start_delay: f64) -> BurstLayer {
    let params = ShowerParams {
        start_delay,
        ..ShowerParams::default()
    };
    BurstLayer::new(&params, viewport(), 7)
}

#[test]
fn pending_until_the_start_delay_passes() {
    let mut burst = layer(2.0);
    assert!(burst.advance(Tick::new(1.0, 1.0 / 60.0)).is_empty());
    assert_eq!(burst.phase(), BurstPhase::Pending);

    assert!(!burst.advance(Tick::new(2.5, 1.0 / 60.0)).is_empty());
    assert_eq!(burst.phase(), BurstPhase::Rising);
}

#[test]
fn particles_fade_in_over_the_first_half_second() {
    let mut burst = layer(0.0);
    let delay = burst.slots[0].spawn_delay;
    let nominal = burst.slots[0].opacity;

    let mut last = 0.0;
    for i in 0..=10 {
        let t = delay + 0.05 * i as f64;
        let frame = burst.advance(Tick::new(t, 0.05));
        let opacity = frame[0].opacity;
        assert!(opacity >= last - 1e-9, "fade-in must not dip");
        last = opacity;
    }
    assert!((last - nominal).abs() < 1e-6);
}

#[test]
fn opacity_ramps_down_over_the_final_second() {
    let mut burst = layer(0.0);
    // Track the earliest-activated slot so its fade-out window sits inside
    // the burst duration.
    let (index, delay) = burst
        .slots
        .iter()
        .enumerate()
        .map(|(i, s)| (i, s.spawn_delay))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();

    let mut last = f64::INFINITY;
    let mut steps = 0;
    // Activation time crosses duration - 1 at t = delay + 9.
    let mut t = delay + 9.0 + 0.05;
    while t < 10.0 {
        let frame = burst.advance(Tick::new(t, 0.05));
        let opacity = frame[index].opacity;
        assert!(opacity <= last + 1e-9, "fade-out must not rise");
        last = opacity;
        steps += 1;
        t += 0.05;
    }
    assert!(steps > 5, "fade-out window was never observed");
}

#[test]
fn the_terminal_state_is_idempotent() {
    let mut burst = layer(0.0);
    assert!(!burst.advance(Tick::new(5.0, 1.0 / 60.0)).is_empty());

    assert!(burst.advance(Tick::new(10.0, 1.0 / 60.0)).is_empty());
    assert_eq!(burst.phase(), BurstPhase::Done);
    assert!(burst.is_done());

    for t in [10.5, 11.0, 60.0, 1000.0] {
        assert!(burst.advance(Tick::new(t, 1.0 / 60.0)).is_empty());
        assert_eq!(burst.phase(), BurstPhase::Done);
    }
}

#[test]
fn phase_windows_follow_the_duration() {
    let mut burst = layer(0.0);
    burst.advance(Tick::new(5.0, 1.0 / 60.0));
    assert_eq!(burst.phase(), BurstPhase::Rising);
    burst.advance(Tick::new(9.5, 1.0 / 60.0));
    assert_eq!(burst.phase(), BurstPhase::FadingOut);
}

#[test]
fn risers_wrap_instead_of_escaping_the_viewport() {
    let mut burst = layer(0.0);
    let ceiling = viewport().height + 2.0;
    let mut t = 0.0;
    while t < 10.0 {
        for instance in burst.advance(Tick::new(t, 0.1)) {
            assert!(instance.position.y <= ceiling + 1e-9);
        }
        t += 0.1;
    }
}

#[test]
fn inactive_particles_are_parked_invisibly() {
    let mut burst = layer(0.0);
    let frame = burst.advance(Tick::new(1e-6, 1.0 / 60.0));
    for (instance, slot) in frame.iter().zip(&burst.slots) {
        if slot.spawn_delay > 1e-6 {
            assert_eq!(instance.opacity, 0.0);
            assert_eq!(instance.position, slot.base);
        }
    }
}
