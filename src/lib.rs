//! Fixed-dimension, dense, mutable vectors over `f64`.
//!
//! [`EuclideanVector`] owns a contiguous buffer of components whose length is
//! fixed at construction, plus a memoized euclidean norm that is dropped
//! whenever a component may have changed.
//!
//! ```
//! use euclidean_vector::{dot, euclidean_norm, euclidean_vector, unit};
//!
//! let a = euclidean_vector![1.0, 2.0, 3.0];
//! let b = euclidean_vector![4.0, 5.0, 6.0];
//! assert_eq!(dot(&a, &b)?, 32.0);
//! assert_eq!(euclidean_norm(&a), 14f64.sqrt());
//! assert_eq!((&a + &b)?.to_string(), "[5 7 9]");
//! assert_eq!(unit(&euclidean_vector![0.0, 2.0])?, euclidean_vector![0.0, 1.0]);
//! # Ok::<(), euclidean_vector::EuclideanVectorError>(())
//! ```

mod error;
mod math;

pub use error::{ErrorKind, EuclideanVectorError, Result};
pub use math::{dot, euclidean_norm, unit, EuclideanVector};
