/// Bounds a scalar into [0, 1].
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
