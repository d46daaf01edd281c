//! Axis-aligned bounding regions with a reflect-on-exit policy.
//!
//! A region never mutates after construction; it is shared by reference
//! across every node using the same model configuration.  Construction
//! rejects empty intervals (`min >= max` on any axis), so downstream code
//! can assume a region always has positive extent.
//!
//! The regions only *describe* the bounds; the reflection geometry itself
//! lives in the mobility models, which need to update velocity and heading
//! state alongside the position.

use crate::{CoreError, CoreResult, Vector3};

// ── Rect ─────────────────────────────────────────────────────────────────────

/// A 2D axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Rect {
    /// Construct a rectangle, validating `min < max` on both axes.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> CoreResult<Rect> {
        check_interval("rect x", x_min, x_max)?;
        check_interval("rect y", y_min, y_max)?;
        Ok(Rect { x_min, x_max, y_min, y_max })
    }

    /// `true` if `p` lies inside or on the boundary (z ignored).
    #[inline]
    pub fn contains(&self, p: Vector3) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Project `p` onto the rectangle (z passes through untouched).
    #[inline]
    pub fn clamp(&self, p: Vector3) -> Vector3 {
        Vector3::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
            p.z,
        )
    }
}

// ── Box3 ─────────────────────────────────────────────────────────────────────

/// A 3D axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box3 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Box3 {
    /// Construct a box, validating `min < max` on all three axes.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) -> CoreResult<Box3> {
        check_interval("box x", x_min, x_max)?;
        check_interval("box y", y_min, y_max)?;
        check_interval("box z", z_min, z_max)?;
        Ok(Box3 { x_min, x_max, y_min, y_max, z_min, z_max })
    }

    /// `true` if `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Vector3) -> bool {
        p.x >= self.x_min
            && p.x <= self.x_max
            && p.y >= self.y_min
            && p.y <= self.y_max
            && p.z >= self.z_min
            && p.z <= self.z_max
    }

    /// Project `p` onto the box.
    #[inline]
    pub fn clamp(&self, p: Vector3) -> Vector3 {
        Vector3::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
            p.z.clamp(self.z_min, self.z_max),
        )
    }
}

fn check_interval(what: &'static str, min: f64, max: f64) -> CoreResult<()> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(CoreError::EmptyInterval { what, min, max });
    }
    Ok(())
}
