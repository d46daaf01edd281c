//! Cartesian position/velocity vectors.
//!
//! 2D models simply leave `z` at zero; keeping one vector type across all
//! model variants avoids generic dimension plumbing in the stores.

/// A 3-component `f64` vector (metres, or metres/second for velocities).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to `other`, metres.
    #[inline]
    pub fn distance_to(self, other: Vector3) -> f64 {
        (other - self).length()
    }

    /// Convert spherical kinematics to a Cartesian velocity.
    ///
    /// `direction` is the azimuth in the x-y plane (radians, counter-clockwise
    /// from +x); `pitch` is the elevation out of that plane.
    pub fn from_spherical(speed: f64, direction: f64, pitch: f64) -> Vector3 {
        Vector3 {
            x: speed * direction.cos() * pitch.cos(),
            y: speed * direction.sin() * pitch.cos(),
            z: speed * pitch.sin(),
        }
    }

    /// Azimuth angle of this vector in the x-y plane, radians.
    #[inline]
    pub fn direction(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Elevation angle of this vector out of the x-y plane, radians.
    #[inline]
    pub fn pitch(self) -> f64 {
        self.z.atan2((self.x * self.x + self.y * self.y).sqrt())
    }
}

impl std::ops::Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
