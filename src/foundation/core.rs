use crate::foundation::error::{PetalfallError, PetalfallResult};

/// Three-component vector used for positions, Euler rotations, and velocities.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    /// Horizontal axis, positive to the right.
    pub x: f64,
    /// Vertical axis, positive upward.
    pub y: f64,
    /// Depth axis, positive toward the viewer.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Build a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a vector with all components equal.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Straight (non-premultiplied) RGB color with channels in `[0, 1]`.
///
/// Serializes as a `#rrggbb` hex string so palettes read the way they are
/// authored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// Red channel in `[0, 1]`.
    pub r: f64,
    /// Green channel in `[0, 1]`.
    pub g: f64,
    /// Blue channel in `[0, 1]`.
    pub b: f64,
}

impl Rgb {
    /// Opaque white, used as the defensive fallback when a palette is empty.
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Build a color from 8-bit channels.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Parse a `#rrggbb` (or bare `rrggbb`) hex string.
    pub fn from_hex(s: &str) -> PetalfallResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PetalfallError::palette(format!(
                "expected 6 hex digits, got '{s}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| PetalfallError::palette(format!("invalid hex digits in '{s}'")))
        };
        Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as a `#rrggbb` hex string (channels clamped and rounded).
    pub fn to_hex(self) -> String {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }

    /// Scale each channel by an independent factor in `1 ± fraction`,
    /// clamping back into `[0, 1]`.
    pub fn jittered(self, rng: &mut crate::animation::rng::Rng64, fraction: f64) -> Self {
        let wiggle = |c: f64, r: f64| (c * (1.0 + r * fraction)).clamp(0.0, 1.0);
        Self {
            r: wiggle(self.r, rng.signed_unit()),
            g: wiggle(self.g, rng.signed_unit()),
            b: wiggle(self.b, rng.signed_unit()),
        }
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Host-reported viewport extent.
///
/// Falling layers only consume the dimensionless [`Viewport::ratio`], which
/// normalizes spawn regions and sizes against a 1000-unit reference design.
/// The shower layer spawns relative to the extent itself, so hosts should pass
/// the visible extent at the depth the particles live at.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
}

impl Viewport {
    /// Responsive scale factor: `min(width, height) / 1000`.
    pub fn ratio(self) -> f64 {
        self.width.min(self.height) / 1000.0
    }
}

/// One step of host time handed to the advancers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Seconds elapsed since the scene was mounted.
    pub elapsed: f64,
    /// Seconds since the previous tick.
    pub delta: f64,
}

impl Tick {
    /// Build a tick from absolute elapsed time and frame delta.
    pub fn new(elapsed: f64, delta: f64) -> Self {
        Self { elapsed, delta }
    }
}

/// Accumulating clock for drivers that only know their frame delta.
///
/// Useful for fixed-timestep harnesses; hosts with an authoritative elapsed
/// time can construct [`Tick`] values directly instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    elapsed: f64,
}

impl Clock {
    /// A clock at zero elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `delta` seconds (negative deltas are ignored) and return the
    /// resulting tick.
    pub fn tick(&mut self, delta: f64) -> Tick {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta;
        Tick::new(self.elapsed, delta)
    }

    /// Seconds accumulated so far.
    pub fn elapsed(self) -> f64 {
        self.elapsed
    }
}
