use core::ops::{Add, AddAssign, Div, DivAssign, Mul, Sub};

use crate::{approx_eq, array_ops};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector
{
    pub x: f32, 
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for Vector {
    fn from(values: [f32; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl From<Vector> for [f32; 3] {
    fn from(v: Vector) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Vector 
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    /// 
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Sum of the three components.
    /// 
    pub fn sum(&self) -> f32 {
        array_ops::sum(&self.to_array())
    }

    /// Calculate the length/magnitude of the vector
    /// 
    pub fn magnitude(&self) -> f32 {
        array_ops::norm(&self.to_array())
    }

    /// Normalize the vector. Note that this does not check for a zero length vector, normalizing
    /// one gives a vector of NaN's. Use `try_normalize` when that can happen.
    /// 
    pub fn normalize(&self) -> Vector {
        self / self.magnitude()
    }

    /// Normalize the vector, or return `None` when its length is below `min_len`.
    /// 
    pub fn try_normalize(&self, min_len: f32) -> Option<Vector> {
        let len = self.magnitude();
        if !(len >= min_len) || len == 0.0 {
            return None;
        }
        Some(self / len)
    }

    /// Take the dot product of two vectors.
    /// 
    pub fn dot(&self, other: &Vector) -> f32 {
        array_ops::dot(&self.to_array(), &other.to_array())
    }

    /// Get the cross product of two vectors.
    /// 
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::from(array_ops::cross(&self.to_array(), &other.to_array()))
    }

    /// Are all components finite?
    /// 
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f32) -> bool {
        approx_eq(self.x, other.x, tol)
            && approx_eq(self.y, other.y, tol)
            && approx_eq(self.z, other.z, tol)
    }
}

impl Add for Vector
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Div<f32> for Vector
{
    type Output = Self;

    fn div(self, other: f32) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Div<f32> for &Vector
{
    type Output = Vector;

    fn div(self, other: f32) -> Self::Output {
        *self / other
    }
}

impl DivAssign<f32> for Vector
{
    fn div_assign(&mut self, other: f32) {
        self.x /= other;
        self.y /= other;
        self.z /= other;
    }
}

impl Mul<f32> for Vector
{
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
