//! Isolating intervals.

use radicum_rings::RealField;

/// An interval with independently open or closed endpoints.
///
/// Normalized so `lower ≤ upper` at construction; an infinite endpoint is
/// always open. The degenerate both-closed, equal-endpoint case reports an
/// exact root value. Produced only as engine output.
#[derive(Clone, PartialEq, Debug)]
pub struct Interval<T: RealField> {
    lower: T,
    upper: T,
    lower_closed: bool,
    upper_closed: bool,
}

impl<T: RealField> Interval<T> {
    /// Creates an interval from two bounds, swapping them if unordered.
    ///
    /// Endpoint flags travel with their bound through the swap; infinite
    /// endpoints are forced open.
    #[must_use]
    pub fn new(lower: T, upper: T, lower_closed: bool, upper_closed: bool) -> Self {
        let (lower, upper, lower_closed, upper_closed) = if upper < lower {
            (upper, lower, upper_closed, lower_closed)
        } else {
            (lower, upper, lower_closed, upper_closed)
        };
        let lower_closed = lower_closed && lower.is_finite();
        let upper_closed = upper_closed && upper.is_finite();
        Self {
            lower,
            upper,
            lower_closed,
            upper_closed,
        }
    }

    /// Creates the degenerate interval holding an exact root value.
    #[must_use]
    pub fn point(value: T) -> Self {
        Self {
            lower: value.clone(),
            upper: value,
            lower_closed: true,
            upper_closed: true,
        }
    }

    /// The lower bound.
    #[must_use]
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// The upper bound.
    #[must_use]
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// Whether the lower endpoint belongs to the interval.
    #[must_use]
    pub fn is_lower_closed(&self) -> bool {
        self.lower_closed
    }

    /// Whether the upper endpoint belongs to the interval.
    #[must_use]
    pub fn is_upper_closed(&self) -> bool {
        self.upper_closed
    }

    /// Returns true if this interval reports an exact root value.
    #[must_use]
    pub fn is_exact_value(&self) -> bool {
        self.lower_closed && self.upper_closed && self.lower == self.upper
    }

    /// The exact root value, when this is a degenerate interval.
    #[must_use]
    pub fn exact_value(&self) -> Option<&T> {
        if self.is_exact_value() {
            Some(&self.lower)
        } else {
            None
        }
    }

    /// Tests whether a point lies inside the interval.
    ///
    /// Undefined values are contained in nothing (every comparison against
    /// them is false).
    #[must_use]
    pub fn contains(&self, x: &T) -> bool {
        let above = if self.lower.is_negative_infinity() {
            x.is_finite() || x.is_positive_infinity()
        } else if self.lower_closed {
            *x >= self.lower
        } else {
            *x > self.lower
        };
        let below = if self.upper.is_positive_infinity() {
            x.is_finite() || x.is_negative_infinity()
        } else if self.upper_closed {
            *x <= self.upper
        } else {
            *x < self.upper
        };
        above && below
    }
}

impl<T: RealField> std::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.lower_closed { '[' } else { '(' };
        let close = if self.upper_closed { ']' } else { ')' };
        write!(f, "{open}{:?}, {:?}{close}", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes_bound_order() {
        let i = Interval::new(2.0, 1.0, true, false);
        assert_eq!(*i.lower(), 1.0);
        assert_eq!(*i.upper(), 2.0);
        // flags follow their bounds through the swap
        assert!(!i.is_lower_closed());
        assert!(i.is_upper_closed());
    }

    #[test]
    fn infinite_endpoints_are_open() {
        let i = Interval::new(1.0, f64::INFINITY, true, true);
        assert!(i.is_lower_closed());
        assert!(!i.is_upper_closed());
    }

    #[test]
    fn exact_value_detection() {
        let p = Interval::point(1.5);
        assert!(p.is_exact_value());
        assert_eq!(p.exact_value(), Some(&1.5));

        let i = Interval::new(1.0, 2.0, true, true);
        assert!(!i.is_exact_value());
        assert_eq!(i.exact_value(), None);
    }

    #[test]
    fn containment_respects_flags() {
        let half_open = Interval::new(0.0, 1.0, true, false);
        assert!(half_open.contains(&0.0));
        assert!(half_open.contains(&0.5));
        assert!(!half_open.contains(&1.0));

        let ray = Interval::new(1.0, f64::INFINITY, true, true);
        assert!(ray.contains(&1.0));
        assert!(ray.contains(&1.0e12));
        assert!(!ray.contains(&0.5));
        assert!(!ray.contains(&f64::NAN));
    }

    #[test]
    fn display_renders_flags() {
        let i = Interval::new(0.0, 1.0, true, false);
        assert_eq!(format!("{i}"), "[0.0, 1.0)");
    }
}
