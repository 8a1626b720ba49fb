use super::norm::{self, NormCache};
use crate::error::{EuclideanVectorError, Result};
use core::{
    mem,
    ops::{Add, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub},
    slice,
};
use std::collections::LinkedList;

/// A dense vector of `f64` components whose dimension is fixed at construction.
///
/// The euclidean norm is memoized. Any mutable access to the components
/// (indexing, [`at_mut`](Self::at_mut), [`iter_mut`](Self::iter_mut), ...)
/// drops the memoized value, even if nothing is written through it.
///
/// Binary `+`, `-` and `/` return a [`Result`], failing on a dimension
/// mismatch or a zero divisor. `*` and unary `-` cannot fail.
#[derive(Debug)]
pub struct EuclideanVector {
    components: Box<[f64]>,
    norm: NormCache,
}

/// Builds a [`EuclideanVector`] from a list of components, like `vec!`.
///
/// `euclidean_vector![value; dimension]` fills every component with `value`.
///
/// ```
/// use euclidean_vector::euclidean_vector;
///
/// let v = euclidean_vector![1, 2, 3];
/// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
/// assert_eq!(euclidean_vector![2.5; 2].as_slice(), &[2.5, 2.5]);
/// ```
#[macro_export]
macro_rules! euclidean_vector {
    () => {
        $crate::EuclideanVector::zero(0)
    };
    ($value:expr; $dimension:expr) => {
        $crate::EuclideanVector::filled($dimension, $value as f64)
    };
    ($($component:expr),+ $(,)?) => {
        $crate::EuclideanVector::from([$($component as f64),+])
    };
}

impl EuclideanVector {
    #[inline]
    fn from_components(components: Box<[f64]>) -> Self {
        Self {
            components,
            norm: NormCache::default(),
        }
    }

    /// Vector of `dimension` components, all 0.
    #[inline]
    pub fn zero(dimension: usize) -> Self {
        Self::filled(dimension, 0.0)
    }

    /// Vector of `dimension` components, all set to `value`.
    pub fn filled(dimension: usize, value: f64) -> Self {
        Self::from_components(vec![value; dimension].into_boxed_slice())
    }

    /// Copies the components of `components` in order.
    pub fn from_slice(components: &[f64]) -> Self {
        Self::from_components(components.into())
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Checked read of the component at `index`.
    pub fn at(&self, index: usize) -> Result<f64> {
        self.components
            .get(index)
            .copied()
            .ok_or(EuclideanVectorError::InvalidIndex { index })
    }

    /// Checked mutable access to the component at `index`.
    ///
    /// On success the cached norm is dropped.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut f64> {
        if index >= self.dimensions() {
            return Err(EuclideanVectorError::InvalidIndex { index });
        }
        self.norm.invalidate();
        Ok(&mut self.components[index])
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Drops the cached norm.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.norm.invalidate();
        &mut self.components
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.components.iter()
    }

    /// Drops the cached norm.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, f64> {
        self.as_mut_slice().iter_mut()
    }

    /// The memoized norm, if one has been computed since the last mutable access.
    #[inline]
    pub fn cached_norm(&self) -> Option<f64> {
        self.norm.get()
    }

    #[inline]
    pub(crate) fn norm_cache(&self) -> &NormCache {
        &self.norm
    }

    /// Unary plus: an unchanged copy.
    #[inline]
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Moves the components out, leaving `self` with no dimensions and no cached norm.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::zero(0))
    }

    pub(crate) fn check_dimensions(&self, rhs: &Self) -> Result<()> {
        if self.dimensions() != rhs.dimensions() {
            return Err(EuclideanVectorError::DimensionMismatch {
                lhs: self.dimensions(),
                rhs: rhs.dimensions(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.check_dimensions(rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .map(|(&lhs, &rhs)| op(lhs, rhs))
            .collect())
    }

    fn map(&self, op: impl Fn(f64) -> f64) -> Self {
        self.iter().map(|&c| op(c)).collect()
    }

    /// In-place `self += rhs`.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
        self.check_dimensions(rhs)?;
        for (c, &r) in self.iter_mut().zip(rhs.iter()) {
            *c += r;
        }
        Ok(self)
    }

    /// In-place `self -= rhs`.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
        self.check_dimensions(rhs)?;
        for (c, &r) in self.iter_mut().zip(rhs.iter()) {
            *c -= r;
        }
        Ok(self)
    }

    /// In-place `self /= divisor`. Dividing by exactly 1 leaves the vector,
    /// and its cached norm, untouched.
    pub fn try_div_assign(&mut self, divisor: f64) -> Result<&mut Self> {
        if divisor == 0.0 {
            return Err(EuclideanVectorError::DivisionByZero);
        }
        if divisor != 1.0 {
            for c in self.iter_mut() {
                *c /= divisor;
            }
        }
        Ok(self)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.components.to_vec()
    }

    pub fn to_list(&self) -> LinkedList<f64> {
        self.iter().copied().collect()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.components.into_vec()
    }

    /// See [`euclidean_norm`](crate::euclidean_norm).
    #[inline]
    pub fn norm(&self) -> f64 {
        norm::euclidean_norm(self)
    }

    /// See [`unit`](crate::unit).
    #[inline]
    pub fn unit(&self) -> Result<Self> {
        norm::unit(self)
    }

    /// See [`dot`](crate::dot).
    #[inline]
    pub fn dot(&self, rhs: &Self) -> Result<f64> {
        norm::dot(self, rhs)
    }
}

/// A single component of value 0.
impl Default for EuclideanVector {
    fn default() -> Self {
        Self::zero(1)
    }
}

impl Clone for EuclideanVector {
    fn clone(&self) -> Self {
        Self {
            components: self.components.clone(),
            norm: self.norm.clone(),
        }
    }

    /// Reuses the existing buffer when the dimensions match. The cached norm
    /// always ends up equal to `source`'s, including when `source` has none.
    fn clone_from(&mut self, source: &Self) {
        if self.dimensions() == source.dimensions() {
            self.components.copy_from_slice(&source.components);
        } else {
            self.components = source.components.clone();
        }
        self.norm.replace(source.cached_norm());
    }
}

/// Exact componentwise equality; the cached norm is not compared.
impl PartialEq for EuclideanVector {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Index<usize> for EuclideanVector {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.dimensions(), "index out of range");
        &self.components[index]
    }
}

/// Drops the cached norm.
impl IndexMut<usize> for EuclideanVector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.dimensions(), "index out of range");
        self.norm.invalidate();
        &mut self.components[index]
    }
}

impl Neg for &EuclideanVector {
    type Output = EuclideanVector;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl Neg for EuclideanVector {
    type Output = EuclideanVector;
    #[inline]
    fn neg(mut self) -> Self::Output {
        for c in self.iter_mut() {
            *c = -*c;
        }
        self
    }
}

impl Add<&EuclideanVector> for &EuclideanVector {
    type Output = Result<EuclideanVector>;
    #[inline]
    fn add(self, rhs: &EuclideanVector) -> Self::Output {
        self.zip_with(rhs, |lhs, rhs| lhs + rhs)
    }
}

impl Add<&EuclideanVector> for EuclideanVector {
    type Output = Result<EuclideanVector>;
    #[inline]
    fn add(mut self, rhs: &EuclideanVector) -> Self::Output {
        self.try_add_assign(rhs)?;
        Ok(self)
    }
}

impl Add<EuclideanVector> for EuclideanVector {
    type Output = Result<EuclideanVector>;
    #[inline]
    fn add(self, rhs: EuclideanVector) -> Self::Output {
        self + &rhs
    }
}

impl Sub<&EuclideanVector> for &EuclideanVector {
    type Output = Result<EuclideanVector>;
    #[inline]
    fn sub(self, rhs: &EuclideanVector) -> Self::Output {
        self.zip_with(rhs, |lhs, rhs| lhs - rhs)
    }
}

impl Sub<&EuclideanVector> for EuclideanVector {
    type Output = Result<EuclideanVector>;
    #[inline]
    fn sub(mut self, rhs: &EuclideanVector) -> Self::Output {
        self.try_sub_assign(rhs)?;
        Ok(self)
    }
}

impl Sub<EuclideanVector> for EuclideanVector {
    type Output = Result<EuclideanVector>;
    #[inline]
    fn sub(self, rhs: EuclideanVector) -> Self::Output {
        self - &rhs
    }
}

/// Multiplying by exactly 1 leaves the vector, and its cached norm, untouched.
impl MulAssign<f64> for EuclideanVector {
    #[inline]
    fn mul_assign(&mut self, coefficient: f64) {
        if coefficient == 1.0 {
            return;
        }
        for c in self.iter_mut() {
            *c *= coefficient;
        }
    }
}

impl Mul<f64> for &EuclideanVector {
    type Output = EuclideanVector;
    #[inline]
    fn mul(self, coefficient: f64) -> Self::Output {
        if coefficient == 1.0 {
            return self.clone();
        }
        self.map(|c| c * coefficient)
    }
}

impl Mul<f64> for EuclideanVector {
    type Output = EuclideanVector;
    #[inline]
    fn mul(mut self, coefficient: f64) -> Self::Output {
        self *= coefficient;
        self
    }
}

impl Mul<&EuclideanVector> for f64 {
    type Output = EuclideanVector;
    #[inline]
    fn mul(self, rhs: &EuclideanVector) -> Self::Output {
        rhs * self
    }
}

impl Mul<EuclideanVector> for f64 {
    type Output = EuclideanVector;
    #[inline]
    fn mul(self, rhs: EuclideanVector) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for &EuclideanVector {
    type Output = Result<EuclideanVector>;
    #[inline]
    fn div(self, divisor: f64) -> Self::Output {
        if divisor == 0.0 {
            return Err(EuclideanVectorError::DivisionByZero);
        }
        if divisor == 1.0 {
            return Ok(self.clone());
        }
        Ok(self.map(|c| c / divisor))
    }
}

impl Div<f64> for EuclideanVector {
    type Output = Result<EuclideanVector>;
    #[inline]
    fn div(mut self, divisor: f64) -> Self::Output {
        self.try_div_assign(divisor)?;
        Ok(self)
    }
}

impl FromIterator<f64> for EuclideanVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_components(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a f64> for EuclideanVector {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl<const N: usize> From<[f64; N]> for EuclideanVector {
    #[inline]
    fn from(components: [f64; N]) -> Self {
        Self::from_components(Box::new(components))
    }
}

impl From<&[f64]> for EuclideanVector {
    #[inline]
    fn from(components: &[f64]) -> Self {
        Self::from_slice(components)
    }
}

impl From<Vec<f64>> for EuclideanVector {
    #[inline]
    fn from(components: Vec<f64>) -> Self {
        Self::from_components(components.into_boxed_slice())
    }
}

impl From<&EuclideanVector> for Vec<f64> {
    #[inline]
    fn from(v: &EuclideanVector) -> Self {
        v.to_vec()
    }
}

impl From<EuclideanVector> for Vec<f64> {
    #[inline]
    fn from(v: EuclideanVector) -> Self {
        v.into_vec()
    }
}

impl From<&EuclideanVector> for LinkedList<f64> {
    #[inline]
    fn from(v: &EuclideanVector) -> Self {
        v.to_list()
    }
}

/// Fails unless the vector has exactly `N` dimensions.
impl<const N: usize> TryFrom<&EuclideanVector> for [f64; N] {
    type Error = EuclideanVectorError;
    fn try_from(v: &EuclideanVector) -> Result<Self> {
        <[f64; N]>::try_from(v.as_slice()).map_err(|_| EuclideanVectorError::DimensionMismatch {
            lhs: v.dimensions(),
            rhs: N,
        })
    }
}

impl<'a> IntoIterator for &'a EuclideanVector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for EuclideanVector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
