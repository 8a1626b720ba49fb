//! The memoized euclidean norm and the free functions built on it.
//!
//! The norm is a derived property, so computing it only needs `&self`; the
//! result is written into a [`Cell`]. That makes [`EuclideanVector`] `!Sync`:
//! sharing one vector between threads requires wrapping it in a lock.

use super::{inner_product, sum_of_squares, EuclideanVector};
use crate::error::{EuclideanVectorError, Result};
use core::cell::Cell;

const TRACE_TARGET: &str = "euclidean_vector::norm";

/// Cache cell for a vector's euclidean norm.
///
/// Every vector owns its own cell; cloning copies the value into a new cell.
#[derive(Clone, Debug, Default)]
pub(crate) struct NormCache(Cell<Option<f64>>);

impl NormCache {
    #[inline]
    pub(crate) fn get(&self) -> Option<f64> {
        self.0.get()
    }

    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> f64) -> f64 {
        if let Some(norm) = self.0.get() {
            return norm;
        }
        let norm = compute();
        self.0.set(Some(norm));
        tracing::trace!(target: TRACE_TARGET, norm, "cached euclidean norm");
        norm
    }

    /// Drops the cached value. Called on every mutable access, whether or not
    /// the caller goes on to write.
    #[inline]
    pub(crate) fn invalidate(&mut self) {
        if self.0.get_mut().take().is_some() {
            tracing::trace!(target: TRACE_TARGET, "invalidated cached euclidean norm");
        }
    }

    #[inline]
    pub(crate) fn replace(&mut self, norm: Option<f64>) {
        *self.0.get_mut() = norm;
    }
}

/// Returns the euclidean norm of `v`, computing and caching it on first use.
///
/// A vector with no dimensions has a norm of 0.
pub fn euclidean_norm(v: &EuclideanVector) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.norm_cache()
        .get_or_compute(|| sum_of_squares(v.as_slice()).sqrt())
}

/// Returns `v` divided by its euclidean norm.
///
/// Fails for a vector with no dimensions and for a vector whose norm is 0.
pub fn unit(v: &EuclideanVector) -> Result<EuclideanVector> {
    if v.is_empty() {
        return Err(EuclideanVectorError::NoDimensions);
    }
    let norm = euclidean_norm(v);
    if norm == 0.0 {
        return Err(EuclideanVectorError::ZeroNorm);
    }
    v / norm
}

/// Sum of the elementwise products of `x` and `y`.
pub fn dot(x: &EuclideanVector, y: &EuclideanVector) -> Result<f64> {
    x.check_dimensions(y)?;
    Ok(inner_product(x.as_slice(), y.as_slice()))
}

#[cfg(test)]
mod test {
    use super::{dot, euclidean_norm, unit};
    use crate::{euclidean_vector, EuclideanVector, EuclideanVectorError};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_norm_is_cached() {
        init_tracing();
        let v = euclidean_vector![1.0, 2.0, 3.0];
        assert_eq!(v.cached_norm(), None);
        assert_eq!(euclidean_norm(&v), 14f64.sqrt());
        assert_eq!(v.cached_norm(), Some(14f64.sqrt()));
        assert_eq!(euclidean_norm(&v), 14f64.sqrt());
    }

    #[test]
    fn test_norm_recomputed_after_mutation() {
        init_tracing();
        let mut v = euclidean_vector![1.0, 2.0, 3.0];
        assert_eq!(euclidean_norm(&v), 14f64.sqrt());

        v[0] = 2.0;
        assert_eq!(v.cached_norm(), None);
        assert_eq!(euclidean_norm(&v), 17f64.sqrt());

        *v.at_mut(2).unwrap() = 0.0;
        assert_eq!(v.cached_norm(), None);
        assert_eq!(euclidean_norm(&v), 8f64.sqrt());
    }

    #[test]
    fn test_mutable_access_invalidates_without_write() {
        let mut v = euclidean_vector![3.0, 4.0];
        assert_eq!(v.norm(), 5.0);
        let _ = &mut v[1];
        assert_eq!(v.cached_norm(), None);

        v.norm();
        let _ = v.at_mut(0).unwrap();
        assert_eq!(v.cached_norm(), None);

        v.norm();
        v.iter_mut().for_each(|_| {});
        assert_eq!(v.cached_norm(), None);

        // a failed checked access hands nothing out
        v.norm();
        assert!(v.at_mut(2).is_err());
        assert_eq!(v.cached_norm(), Some(5.0));
    }

    #[test]
    fn test_norm_of_empty() {
        let v = EuclideanVector::zero(0);
        assert_eq!(euclidean_norm(&v), 0.0);
        assert_eq!(v.cached_norm(), None);
    }

    #[test]
    fn test_unit() {
        let v = euclidean_vector![1.0, 2.0, 3.0];
        let n = 14f64.sqrt();
        assert_eq!(unit(&v).unwrap(), euclidean_vector![1.0 / n, 2.0 / n, 3.0 / n]);
        // computing the unit vector caches the input's norm
        assert_eq!(v.cached_norm(), Some(n));
        assert_eq!(v, euclidean_vector![1.0, 2.0, 3.0]);

        assert_eq!(unit(&euclidean_vector![0.0, -4.0]).unwrap(), euclidean_vector![0.0, -1.0]);
    }

    #[test]
    fn test_unit_domain_errors() {
        assert_eq!(
            unit(&EuclideanVector::zero(0)),
            Err(EuclideanVectorError::NoDimensions)
        );
        assert_eq!(
            unit(&euclidean_vector![0.0, 0.0]),
            Err(EuclideanVectorError::ZeroNorm)
        );
    }

    #[test]
    fn test_dot() {
        let a = euclidean_vector![1.0, 2.0, 3.0];
        let b = euclidean_vector![4.0, 5.0, 6.0];
        assert_eq!(dot(&a, &b), Ok(32.0));
        assert_eq!(a.dot(&b), Ok(32.0));
        assert_eq!(dot(&EuclideanVector::zero(0), &EuclideanVector::zero(0)), Ok(0.0));
        assert_eq!(
            dot(&a, &euclidean_vector![1.0, 2.0]).unwrap_err().to_string(),
            "Dimensions of LHS(3) and RHS(2) do not match"
        );
    }
}
