use crate::constellation::Satellite;

use super::project;

/// Side length of the square diagram coordinate space.
pub const VIEWPORT_SIZE: f64 = 100.0;

const BODY_RADIUS: f64 = 8.0;
const SATELLITE_RADIUS: f64 = 1.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Satellite layout in viewport units, plus a fixed marker for the central body.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub body: Marker,
    pub satellites: Vec<Marker>,
}

impl Diagram {
    /// Lay out satellites in the order given. Returns `None` when there is
    /// nothing to draw, in which case not even the central body is shown.
    pub fn compose(satellites: &[Satellite]) -> Option<Self> {
        if satellites.is_empty() {
            return None;
        }

        let positions: Vec<_> = satellites.iter().map(Satellite::position).collect();
        let markers = satellites
            .iter()
            .zip(project(&positions))
            .map(|(sat, p)| Marker {
                label: sat.name.clone(),
                cx: p.u * VIEWPORT_SIZE,
                cy: p.v * VIEWPORT_SIZE,
                r: SATELLITE_RADIUS,
            })
            .collect();

        Some(Diagram {
            body: Marker {
                label: "Earth".to_string(),
                cx: VIEWPORT_SIZE / 2.0,
                cy: VIEWPORT_SIZE / 2.0,
                r: BODY_RADIUS,
            },
            satellites: markers,
        })
    }

    pub fn viewport_size(&self) -> f64 {
        VIEWPORT_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sat(name: &str, x: f64, y: f64) -> Satellite {
        Satellite {
            name: name.to_string(),
            altitude_km: None,
            inclination_deg: None,
            raan_deg: None,
            true_anomaly_deg: None,
            x,
            y,
        }
    }

    #[test]
    fn one_marker_per_satellite_in_order() {
        let sats = [sat("A", 0.0, 0.0), sat("B", 1.0, 0.0), sat("C", 0.0, 1.0)];

        let diagram = Diagram::compose(&sats).unwrap();

        let labels: Vec<_> = diagram.satellites.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C"]);
        assert!((diagram.satellites[0].cx - 10.0).abs() < 1e-9);
        assert!((diagram.satellites[0].cy - 90.0).abs() < 1e-9);
        assert!((diagram.satellites[1].cx - 90.0).abs() < 1e-9);
        assert!((diagram.satellites[2].cy - 10.0).abs() < 1e-9);
    }

    #[test]
    fn body_marker_is_centred() {
        let diagram = Diagram::compose(&[sat("only", 3.0, 4.0)]).unwrap();

        assert_eq!(diagram.body.cx, 50.0);
        assert_eq!(diagram.body.cy, 50.0);
        assert_eq!(diagram.body.r, 8.0);
    }

    #[test]
    fn nothing_to_draw_for_empty_constellation() {
        assert_eq!(Diagram::compose(&[]), None);
    }
}
