mod diagram;

pub use diagram::Diagram;

/// Fraction of the unit square left empty on every side.
pub const PAD: f64 = 0.1;

/// A point in the unit square, `u` to the right and `v` downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub u: f64,
    pub v: f64,
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Returns `None` for an empty point set.
    pub fn of(points: &[(f64, f64)]) -> Option<Self> {
        let (&(x0, y0), rest) = points.split_first()?;
        let init = Bounds {
            min_x: x0,
            max_x: x0,
            min_y: y0,
            max_y: y0,
        };
        Some(rest.iter().fold(init, |b, &(x, y)| Bounds {
            min_x: b.min_x.min(x),
            max_x: b.max_x.max(x),
            min_y: b.min_y.min(y),
            max_y: b.max_y.max(y),
        }))
    }

    /// Map a point into `[PAD, 1 - PAD]` on both axes, flipping Y so that
    /// larger input values end up higher on screen.
    pub fn normalize(&self, (x, y): (f64, f64)) -> Normalized {
        let span = 1.0 - 2.0 * PAD;
        let u = axis_fraction(x, self.min_x, self.max_x) * span + PAD;
        let v = 1.0 - (axis_fraction(y, self.min_y, self.max_y) * span + PAD);
        Normalized { u, v }
    }
}

/// Position of `value` within `[min, max]` as a fraction. A zero extent is
/// treated as 1. Operands are halved so the extent of any finite pair stays
/// finite.
fn axis_fraction(value: f64, min: f64, max: f64) -> f64 {
    let half_extent = max / 2.0 - min / 2.0;
    if half_extent == 0.0 {
        value - min
    } else {
        (value / 2.0 - min / 2.0) / half_extent
    }
}

/// Project planar coordinates into the padded unit square. Output index `i`
/// corresponds to input index `i`; an empty input yields an empty output.
pub fn project(points: &[(f64, f64)]) -> Vec<Normalized> {
    match Bounds::of(points) {
        Some(bounds) => points.iter().map(|&p| bounds.normalize(p)).collect(),
        None => Vec::new(),
    }
}
