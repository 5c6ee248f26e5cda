// Math utilities and helper functions

use glam::Vec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Unit vector a sprite facing `angle_degrees` points along.
///
/// 0° points straight up, positive angles turn counter-clockwise.
pub fn heading(angle_degrees: f32) -> Vec2 {
    let radians = angle_degrees.to_radians();
    Vec2::new(-radians.sin(), radians.cos())
}

/// Check whether `a` lies within `distance` of `b` (boundary inclusive)
pub fn within_distance(a: Vec2, b: Vec2, distance: f32) -> bool {
    a.distance(b) <= distance
}
