//! Initial-position allocation.
//!
//! An allocator is consulted once per node at creation time (and by the
//! waypoint model for fresh destinations).  It is pure per call: one
//! independent point per `sample`, no retained state.

use rand::rngs::SmallRng;

use manet_core::{Box3, CoreResult, Rect, Variate, Vector3};

/// Draws points with independently distributed x/y/z components.
///
/// 2D scenarios pin `z` to `Constant(0.0)`; the convenience constructors
/// below cover the two common cases.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoxAllocator {
    pub x: Variate,
    pub y: Variate,
    pub z: Variate,
}

impl RandomBoxAllocator {
    pub fn new(x: Variate, y: Variate, z: Variate) -> Self {
        Self { x, y, z }
    }

    /// Uniform over a 2D rectangle, z = 0.
    pub fn in_rect(rect: Rect) -> Self {
        Self {
            x: Variate::Uniform { min: rect.x_min, max: rect.x_max },
            y: Variate::Uniform { min: rect.y_min, max: rect.y_max },
            z: Variate::Constant(0.0),
        }
    }

    /// Uniform over a 3D box.
    pub fn in_box(bounds: Box3) -> Self {
        Self {
            x: Variate::Uniform { min: bounds.x_min, max: bounds.x_max },
            y: Variate::Uniform { min: bounds.y_min, max: bounds.y_max },
            z: Variate::Uniform { min: bounds.z_min, max: bounds.z_max },
        }
    }

    /// Validate the three component variates.
    pub fn validate(&self) -> CoreResult<()> {
        self.x.validate("allocator x")?;
        self.y.validate("allocator y")?;
        self.z.validate("allocator z")?;
        Ok(())
    }

    /// Draw one point.
    pub fn sample(&self, rng: &mut SmallRng) -> Vector3 {
        Vector3::new(self.x.sample(rng), self.y.sample(rng), self.z.sample(rng))
    }
}
