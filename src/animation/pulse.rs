use std::f64::consts::{PI, TAU};

/// Scale envelope for heart particles, chosen once at spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pulse {
    /// Symmetric sinusoidal breathing around the base size.
    Gentle {
        /// Oscillation rate in radians per second.
        speed: f64,
    },
    /// One-sided quick pop: only the positive half of the sinusoid grows the
    /// particle, so it snaps back to base size between pops.
    Pop {
        /// Oscillation rate in radians per second.
        speed: f64,
        /// Peak growth above base size.
        amplitude: f64,
    },
    /// Double-beat envelope: two quick swells per cycle, the second slightly
    /// stronger, then a rest until the cycle wraps.
    Heartbeat {
        /// Cycle rate in radians per second.
        speed: f64,
        /// Growth of the first swell; the second is 1.3x.
        amplitude: f64,
    },
}

impl Pulse {
    /// Scale multiplier at elapsed time `t`, always `>= 1 - 0.15`.
    pub fn scale_at(self, t: f64) -> f64 {
        match self {
            Pulse::Gentle { speed } => 1.0 + (t * speed).sin() * 0.15,
            Pulse::Pop { speed, amplitude } => 1.0 + ((t * speed).sin() * amplitude).max(0.0),
            Pulse::Heartbeat { speed, amplitude } => {
                let phase = (t * speed) % TAU;
                if phase < PI * 0.3 {
                    1.0 + (phase * 3.33).sin() * amplitude
                } else if phase < PI * 0.6 {
                    1.0 + ((phase - PI * 0.3) * 3.33).sin() * amplitude * 1.3
                } else {
                    1.0
                }
            }
        }
    }
}
