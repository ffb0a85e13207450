use std::cmp::Ordering;

/// A point in 3D space as `[x, y, z]`.
pub type Point3 = [f64; 3];

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_sq(a: &Point3, b: &Point3) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Total order on coordinates and squared distances.
///
/// Non-NaN values compare numerically (so `-0.0 == 0.0`), NaN sorts after every
/// non-NaN value and all NaNs are equal. Used wherever a sort must stay well-defined
/// on degenerate input.
#[inline]
pub(crate) fn nan_last_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_sq() {
        assert_eq!(distance_sq(&[0.0, 0.0, 0.0], &[1.0, 2.0, 2.0]), 9.0);
        assert_eq!(distance_sq(&[1.5, -1.0, 4.0], &[1.5, -1.0, 4.0]), 0.0);
    }

    #[test]
    fn test_nan_sorts_last() {
        let mut values = vec![f64::NAN, 3.0, -1.0, f64::INFINITY, 0.0];
        values.sort_by(|a, b| nan_last_cmp(*a, *b));
        assert_eq!(&values[..4], &[-1.0, 0.0, 3.0, f64::INFINITY]);
        assert!(values[4].is_nan());
    }

    #[test]
    fn test_signed_zeros_are_equal() {
        assert_eq!(nan_last_cmp(-0.0, 0.0), Ordering::Equal);
        assert_eq!(nan_last_cmp(f64::NAN, f64::NAN), Ordering::Equal);
    }
}
