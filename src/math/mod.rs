mod format;
#[cfg(feature = "glam")]
mod glam_ext;
mod norm;
mod vector;

pub use norm::{dot, euclidean_norm, unit};
pub use vector::EuclideanVector;

#[inline]
pub(crate) fn inner_product(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs)
}

#[inline]
pub(crate) fn sum_of_squares(a: &[f64]) -> f64 {
    inner_product(a, a)
}

#[test]
fn test_inner_product() {
    assert_eq!(inner_product(&[], &[]), 0.0);
    assert_eq!(inner_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    assert_eq!(sum_of_squares(&[1.0, 2.0, 3.0]), 14.0);
}
