//! Conversions to and from glam's fixed-size double precision vectors.

use super::EuclideanVector;
use crate::error::{EuclideanVectorError, Result};
use glam::{DVec2, DVec3, DVec4};

macro_rules! impl_glam_conversions {
    ($glam_type:ty, $dimension:literal) => {
        impl From<$glam_type> for EuclideanVector {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self::from(v.to_array())
            }
        }

        /// Fails unless the vector has exactly the glam type's dimension.
        impl TryFrom<&EuclideanVector> for $glam_type {
            type Error = EuclideanVectorError;
            #[inline]
            fn try_from(v: &EuclideanVector) -> Result<Self> {
                <[f64; $dimension]>::try_from(v).map(<$glam_type>::from)
            }
        }
    };
}

impl_glam_conversions!(DVec2, 2);
impl_glam_conversions!(DVec3, 3);
impl_glam_conversions!(DVec4, 4);

#[cfg(test)]
mod test {
    use crate::{euclidean_vector, EuclideanVector, EuclideanVectorError};
    use glam::{DVec2, DVec3, DVec4};

    #[test]
    fn test_from_glam() {
        assert_eq!(
            EuclideanVector::from(DVec3::new(1.0, 2.0, 3.0)),
            euclidean_vector![1, 2, 3]
        );
        assert_eq!(EuclideanVector::from(DVec2::X), euclidean_vector![1, 0]);
        assert_eq!(EuclideanVector::from(DVec4::ONE).dimensions(), 4);
    }

    #[test]
    fn test_to_glam() {
        let v = euclidean_vector![1, 2, 3];
        assert_eq!(DVec3::try_from(&v), Ok(DVec3::new(1.0, 2.0, 3.0)));
        assert_eq!(
            DVec2::try_from(&v),
            Err(EuclideanVectorError::DimensionMismatch { lhs: 3, rhs: 2 })
        );
        assert_eq!(
            DVec4::try_from(&v).unwrap_err().to_string(),
            "Dimensions of LHS(3) and RHS(4) do not match"
        );
    }

    #[test]
    fn test_norm_matches_glam_length() {
        let v = DVec3::new(2.0, 3.0, 6.0);
        assert_eq!(EuclideanVector::from(v).norm(), v.length());
    }
}
