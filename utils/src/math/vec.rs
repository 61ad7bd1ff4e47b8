use glam::Vec3;

/// Defines utility functions intended for vector types
pub trait VecUtils {
    /// Drops the y component, leaving the projection onto the xz plane.
    fn xz(self) -> Self;

    /// Rotates self 90 degrees around the y axis, taking +x to +z.
    fn right_hand(self) -> Self;

    fn flip(self, flip: bool) -> Self;
}

impl VecUtils for Vec3 {
    fn xz(self) -> Self {
        Self::new(self.x, 0.0, self.z)
    }

    fn right_hand(self) -> Self {
        Self::new(-self.z, self.y, self.x)
    }

    fn flip(self, flip: bool) -> Self {
        if flip {
            self * -1.
        } else {
            self
        }
    }
}
