//! Textual rendering: `[c0 c1 ... cn]`, or `[]` with no dimensions.
//!
//! An explicit precision (`{:.3}`) is applied to every component. Without
//! one, components print in the general form used by C's `%g`: six
//! significant digits, trailing zeros trimmed, scientific notation for
//! exponents below -4 or from 6 up.

use super::EuclideanVector;
use core::fmt;

const SIGNIFICANT_DIGITS: i32 = 6;

impl fmt::Display for EuclideanVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &c) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, c)?,
                None => write!(f, "{}", General(c))?,
            }
        }
        f.write_str("]")
    }
}

struct General(f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // the exponent after rounding to the significant digits, e.g. "9.99999e5"
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.abs()
            )
        } else {
            let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod test {
    use super::General;
    use crate::{euclidean_vector, EuclideanVector};

    #[test]
    fn test_display() {
        let v = euclidean_vector![2.2, 4.4, 6.6];
        let sum = ((&v + &v).unwrap() + &v).unwrap();
        assert_eq!(sum.to_string(), "[6.6 13.2 19.8]");
        assert_eq!(EuclideanVector::zero(0).to_string(), "[]");
        assert_eq!(euclidean_vector![1].to_string(), "[1]");
        assert_eq!(euclidean_vector![1, -2.5, 0].to_string(), "[1 -2.5 0]");
    }

    #[test]
    fn test_display_precision() {
        let v = euclidean_vector![1, 2.5];
        assert_eq!(format!("{:.2}", v), "[1.00 2.50]");
        assert_eq!(format!("{:.0}", euclidean_vector![3.25]), "[3]");
        assert_eq!(format!("{:.3}", EuclideanVector::zero(0)), "[]");
    }

    #[test]
    fn test_general_format() {
        let general = |value: f64| General(value).to_string();
        assert_eq!(general(3.0), "3");
        assert_eq!(general(0.1), "0.1");
        assert_eq!(general(1.0 / 3.0), "0.333333");
        assert_eq!(general(123456.0), "123456");
        assert_eq!(general(1234567.0), "1.23457e+06");
        assert_eq!(general(9999999.0), "1e+07");
        assert_eq!(general(0.0001), "0.0001");
        assert_eq!(general(0.00001234), "1.234e-05");
        assert_eq!(general(-2.5e-300), "-2.5e-300");
        assert_eq!(general(-0.0), "-0");
        assert_eq!(general(f64::NAN), "nan");
        assert_eq!(general(f64::INFINITY), "inf");
        assert_eq!(general(f64::NEG_INFINITY), "-inf");
    }
}
