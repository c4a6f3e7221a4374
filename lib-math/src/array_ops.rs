//! Free functions over small fixed-length float arrays. These are deliberately minimal and do no
//! validation; degenerate input produces non-finite output instead of a failure.

/// Sum of all elements.
/// 
pub fn sum(values: &[f32]) -> f32 {
    let mut total = 0.0;
    for value in values {
        total += *value;
    }
    total
}

/// Right-handed cross product of two 3D vectors.
/// 
pub fn cross(a: &[f32; 3], b: &[f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Euclidean (L2) norm.
/// 
pub fn norm(values: &[f32]) -> f32 {
    let mut squares = 0.0;
    for value in values {
        squares += value * value;
    }
    libm::sqrtf(squares)
}

/// Dot product of two 3D vectors.
/// 
pub fn dot(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Divides every element by the norm of the array. A zero norm yields NaN components.
/// 
pub fn normalize<const N: usize>(values: &[f32; N]) -> [f32; N] {
    let len = norm(values);
    let mut out = [0.0; N];
    for (o, v) in out.iter_mut().zip(values.iter()) {
        *o = v / len;
    }
    out
}
