use thiserror::Error;

/// One vertex of a piecewise-linear mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    pub input: f64,
    pub output: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("a curve needs at least one control point")]
    Empty,
    #[error("control point {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("control point inputs must be strictly increasing (point {index} does not exceed its predecessor)")]
    NotIncreasing { index: usize },
}

/// Piecewise-linear curve over normalized progress.
///
/// Outputs are interpolated between neighbouring control points and held at
/// the first/last output outside the covered input range, so a curve never
/// extrapolates.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    points: Vec<ControlPoint>,
}

impl Curve {
    pub fn new<I>(points: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points: Vec<ControlPoint> = points
            .into_iter()
            .map(|(input, output)| ControlPoint { input, output })
            .collect();

        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, point) in points.iter().enumerate() {
            if !point.input.is_finite() || !point.output.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if index > 0 && point.input <= points[index - 1].input {
                return Err(CurveError::NotIncreasing { index });
            }
        }

        Ok(Self { points })
    }

    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![ControlPoint { input: 0.0, output: value }],
        }
    }

    pub fn evaluate(&self, progress: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        if progress.is_nan() || progress <= first.input {
            return first.output;
        }
        if progress >= last.input {
            return last.output;
        }

        // progress is strictly inside (first.input, last.input), so some
        // window brackets it.
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if progress <= b.input {
                let t = (progress - a.input) / (b.input - a.input);
                return a.output + (b.output - a.output) * t;
            }
        }
        last.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacity_curve() -> Curve {
        Curve::new([(0.0, 1.0), (0.15, 0.5), (0.3, 0.0)]).unwrap()
    }

    #[test]
    fn interpolates_between_control_points() {
        let curve = Curve::new([(0.0, 0.0), (0.5, -60.0), (1.0, -100.0)]).unwrap();
        assert_eq!(curve.evaluate(0.25), -30.0);
        assert_eq!(curve.evaluate(0.5), -60.0);
        assert_eq!(curve.evaluate(0.75), -80.0);
    }

    #[test]
    fn holds_boundary_values_instead_of_extrapolating() {
        let curve = Curve::new([(0.2, 10.0), (0.8, 20.0)]).unwrap();
        assert_eq!(curve.evaluate(0.0), 10.0);
        assert_eq!(curve.evaluate(-3.0), 10.0);
        assert_eq!(curve.evaluate(1.0), 20.0);
        assert_eq!(curve.evaluate(7.5), 20.0);
        assert_eq!(curve.evaluate(f64::NAN), 10.0);
    }

    #[test]
    fn opacity_reaches_zero_and_stays_there() {
        let curve = opacity_curve();
        assert_eq!(curve.evaluate(0.3), 0.0);
        assert_eq!(curve.evaluate(0.6), 0.0);
        assert_eq!(curve.evaluate(1.0), 0.0);
    }

    #[test]
    fn opacity_curve_is_non_increasing() {
        let curve = opacity_curve();
        let mut previous = curve.evaluate(0.0);
        for step in 1..=200 {
            let value = curve.evaluate(step as f64 / 200.0);
            assert!(value <= previous + 1e-12, "rose at step {step}: {previous} -> {value}");
            previous = value;
        }
    }

    #[test]
    fn rejects_malformed_control_points() {
        assert_eq!(Curve::new(Vec::<(f64, f64)>::new()), Err(CurveError::Empty));
        assert_eq!(
            Curve::new([(0.0, 1.0), (0.5, 0.0), (0.5, 0.2)]),
            Err(CurveError::NotIncreasing { index: 2 })
        );
        assert_eq!(
            Curve::new([(0.0, 1.0), (0.4, 0.0), (0.2, 0.2)]),
            Err(CurveError::NotIncreasing { index: 2 })
        );
        assert_eq!(
            Curve::new([(0.0, f64::INFINITY)]),
            Err(CurveError::NonFinite { index: 0 })
        );
    }

    #[test]
    fn constant_curve_ignores_progress() {
        let curve = Curve::constant(1.0);
        assert_eq!(curve.evaluate(0.0), 1.0);
        assert_eq!(curve.evaluate(0.5), 1.0);
        assert_eq!(curve.evaluate(1.0), 1.0);
    }
}
