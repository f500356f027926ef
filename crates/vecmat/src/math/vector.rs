use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Add, Index, Sub};
use std::slice::Iter;
use std::str::FromStr;

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::math::operand::parse_row;

/// An immutable N-dimensional vector of `f64`.
///
/// The components are fixed at construction. `magnitude` and `unit_vector`
/// are computed on first access and cached for the life of the value.
#[derive(Clone)]
pub struct Vector {
    components: Box<[f64]>,
    magnitude: OnceCell<f64>,
    unit: OnceCell<Box<Vector>>,
}

impl Vector {
    pub fn new(components: impl Into<Vec<f64>>) -> Self {
        Self {
            components: components.into().into_boxed_slice(),
            magnitude: OnceCell::new(),
            unit: OnceCell::new(),
        }
    }

    /// Components in order. The slice is shared, so the vector cannot be
    /// modified through it.
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Dimension of the vector, independent of its magnitude.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.components.iter()
    }

    pub fn shape(&self) -> (usize,) {
        (self.len(),)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.components.to_vec()
    }

    /// Euclidean norm.
    ///
    /// Components are scaled by the largest absolute component before
    /// squaring, so finite vectors neither overflow nor underflow to a wrong
    /// norm. A NaN component gives NaN; an infinite one gives infinity.
    pub fn magnitude(&self) -> f64 {
        *self.magnitude.get_or_init(|| {
            let magnitude = scaled_norm(&self.components);
            log::trace!("cached magnitude {} for {:?}", magnitude, self);
            magnitude
        })
    }

    /// The vector scaled to magnitude 1.
    ///
    /// Fails with `Error::Domain` for a vector whose magnitude is exactly
    /// zero, which includes the empty vector, and for one whose magnitude is
    /// not finite.
    pub fn unit_vector(&self) -> Result<&Vector> {
        self.unit
            .get_or_try_init(|| {
                let magnitude = self.magnitude();
                if magnitude == 0.0 {
                    return Err(Error::Domain(
                        "cannot compute unit vector of a zero vector".to_string(),
                    ));
                }
                if !magnitude.is_finite() {
                    return Err(Error::Domain(format!(
                        "cannot compute unit vector of a vector with magnitude {}",
                        magnitude
                    )));
                }
                let unit: Vector = self.iter().map(|c| c / magnitude).collect();
                log::trace!("cached unit vector {:?}", unit);
                Ok(Box::new(unit))
            })
            .map(|unit| &**unit)
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.dimension_check(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.dimension_check(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.dimension_check(other, "dot")?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    fn dimension_check(&self, other: &Vector, op: &'static str) -> Result<()> {
        if self.len() == other.len() {
            return Ok(());
        }
        log::debug!(
            "rejecting vector {}: dimensions {} and {}",
            op,
            self.len(),
            other.len()
        );
        Err(Error::DimensionMismatch {
            op,
            left: format!("{:?}", self.shape()),
            right: format!("{:?}", other.shape()),
        })
    }

    fn zip_with<F>(&self, other: &Vector, f: F) -> Vector
    where
        F: Fn(f64, f64) -> f64,
    {
        self.iter().zip(other.iter()).map(|(a, b)| f(*a, *b)).collect()
    }
}

fn scaled_norm(components: &[f64]) -> f64 {
    if components.iter().any(|c| c.is_nan()) {
        return f64::NAN;
    }
    let scale = components.iter().fold(0.0f64, |acc, c| acc.max(c.abs()));
    if scale == 0.0 || scale.is_infinite() {
        return scale;
    }
    let sum: f64 = components
        .iter()
        .map(|c| {
            let r = c / scale;
            r * r
        })
        .sum();
    scale * sum.sqrt()
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::new(value)
    }
}

impl From<&[f64]> for Vector {
    fn from(value: &[f64]) -> Self {
        Vector::new(value)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(value: [f64; N]) -> Self {
        Vector::new(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.components.into_vec()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect::<Vec<f64>>())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl FromStr for Vector {
    type Err = Error;

    /// Parses `"1,2,3"` or `"[1, 2, 3]"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(s);
        parse_row(inner).map(Vector::new)
    }
}

// Equality and hashing both look at the components only; the caches are
// derived from them.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for c in self.iter() {
            // 0.0 == -0.0, so they must hash alike
            let c = if *c == 0.0 { 0.0f64 } else { *c };
            state.write_u64(c.to_bits());
        }
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: &'b Vector) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl Add for Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: Vector) -> Self::Output {
        Vector::add(&self, &rhs)
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: &'b Vector) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Sub for Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: Vector) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.components.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.components.len() {
                write!(f, " ,")?;
            }
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector((")?;
        for (idx, value) in self.components.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        if self.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, "))")
    }
}
