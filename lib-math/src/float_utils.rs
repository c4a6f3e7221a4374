
/// Approximate equality check for two floats with a given absolute tolerance. Note that NaN is
/// never approximately equal to anything, itself included.
/// 
pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    libm::fabsf(a - b) <= tol
}

/// Are all the given values finite (i.e. neither NaN nor infinite)?
/// 
pub fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}
