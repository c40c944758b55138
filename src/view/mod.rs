//! Page composition. Everything here is derived from a [`ControllerState`]
//! snapshot and holds no state of its own.

mod svg;
mod table;

pub use svg::DiagramSvg;
pub use table::{render_text_table, TableRow};

use crate::constellation::{limits, ConstellationRequest};
use crate::controller::ControllerState;
use crate::projection::Diagram;

pub const SUBMIT_LABEL: &str = "Build Constellation";
pub const SUBMITTING_LABEL: &str = "Building...";
pub const EMPTY_PLACEHOLDER: &str = "No constellation built yet.";

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub values: ConstellationRequest,
    pub min_planes: u32,
    pub min_sats_per_plane: u32,
    pub min_altitude_km: f64,
    pub min_inclination_deg: f64,
    pub max_inclination_deg: f64,
}

impl FormView {
    fn new(values: ConstellationRequest) -> Self {
        Self {
            values,
            min_planes: limits::MIN_PLANES,
            min_sats_per_plane: limits::MIN_SATS_PER_PLANE,
            min_altitude_km: limits::MIN_ALTITUDE_KM,
            min_inclination_deg: limits::MIN_INCLINATION_DEG,
            max_inclination_deg: limits::MAX_INCLINATION_DEG,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub heading: String,
    pub updated_at: Option<String>,
    pub diagram: Option<Diagram>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub form: FormView,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    /// Ask the browser to reload until the in-flight submission resolves.
    pub refresh: bool,
    pub error: Option<String>,
    pub result: Option<ResultView>,
    pub placeholder: &'static str,
}

pub fn compose(state: &ControllerState) -> PageView {
    let submitting = state.is_submitting();

    let result = state.constellation.as_ref().map(|constellation| ResultView {
        heading: format!(
            "{} – {} satellites",
            constellation.name,
            constellation.satellites.len()
        ),
        updated_at: state
            .updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        diagram: Diagram::compose(&constellation.satellites),
        rows: constellation.satellites.iter().map(TableRow::from).collect(),
    });

    PageView {
        form: FormView::new(state.form.clone()),
        submit_label: if submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        },
        submit_disabled: submitting,
        refresh: submitting,
        error: state.error().map(String::from),
        result,
        placeholder: EMPTY_PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellation::parse_response;
    use crate::controller::{Controller, GenerationError, FAILURE_MESSAGE};
    use crate::test_support::three_point_body;

    fn triangle() -> crate::constellation::Constellation {
        parse_response(&three_point_body().to_string()).unwrap()
    }

    #[test]
    fn idle_page_has_form_and_placeholder_only() {
        let controller = Controller::new(ConstellationRequest::default());

        let page = compose(controller.state());

        assert_eq!(page.submit_label, SUBMIT_LABEL);
        assert!(!page.submit_disabled);
        assert!(!page.refresh);
        assert_eq!(page.error, None);
        assert_eq!(page.result, None);
        assert_eq!(page.form.values.planes, 6);
        assert_eq!(page.form.max_inclination_deg, 180.0);
    }

    #[test]
    fn submitting_disables_the_button() {
        let mut controller = Controller::new(ConstellationRequest::default());
        controller.submit(ConstellationRequest::default()).unwrap();

        let page = compose(controller.state());

        assert!(page.submit_disabled);
        assert!(page.refresh);
        assert_eq!(page.submit_label, SUBMITTING_LABEL);
    }

    #[test]
    fn diagram_and_table_match_received_order() {
        let mut controller = Controller::new(ConstellationRequest::default());
        let ticket = controller.submit(ConstellationRequest::default()).unwrap();
        controller.complete(ticket.sequence, Ok(triangle()));

        let page = compose(controller.state());
        let result = page.result.unwrap();
        let diagram = result.diagram.unwrap();

        assert_eq!(result.heading, "Triangle – 3 satellites");
        assert_eq!(result.rows.len(), 3);
        assert_eq!(diagram.satellites.len(), 3);
        let row_names: Vec<_> = result.rows.iter().map(|r| r.name.as_str()).collect();
        let marker_names: Vec<_> = diagram.satellites.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(row_names, ["SAT-1", "SAT-2", "SAT-3"]);
        assert_eq!(row_names, marker_names);
    }

    #[test]
    fn empty_constellation_renders_no_rows_and_no_diagram() {
        let mut controller = Controller::new(ConstellationRequest::default());
        let ticket = controller.submit(ConstellationRequest::default()).unwrap();
        let empty = parse_response(r#"{"name": "Void", "satellites": []}"#).unwrap();
        controller.complete(ticket.sequence, Ok(empty));

        let result = compose(controller.state()).result.unwrap();

        assert!(result.rows.is_empty());
        assert_eq!(result.diagram, None);
        assert_eq!(result.heading, "Void – 0 satellites");
    }

    #[test]
    fn result_stays_visible_while_failed_or_submitting() {
        let mut controller = Controller::new(ConstellationRequest::default());
        let ok = controller.submit(ConstellationRequest::default()).unwrap();
        controller.complete(ok.sequence, Ok(triangle()));
        let bad = controller.submit(ConstellationRequest::default()).unwrap();
        controller.complete(bad.sequence, Err(GenerationError::Status(500)));

        let failed = compose(controller.state());
        assert_eq!(failed.error.as_deref(), Some(FAILURE_MESSAGE));
        assert_eq!(failed.result.as_ref().unwrap().rows.len(), 3);

        controller.submit(ConstellationRequest::default()).unwrap();
        let submitting = compose(controller.state());
        assert_eq!(submitting.error, None);
        assert_eq!(submitting.result.unwrap().rows.len(), 3);
    }

    #[test]
    fn identical_resubmission_renders_identical_table() {
        let mut controller = Controller::new(ConstellationRequest::default());
        let first = controller.submit(ConstellationRequest::default()).unwrap();
        controller.complete(first.sequence, Ok(triangle()));
        let before = render_text_table(&compose(controller.state()).result.unwrap().rows);

        let second = controller.submit(ConstellationRequest::default()).unwrap();
        assert!(controller.state().is_submitting());
        controller.complete(second.sequence, Ok(triangle()));
        let after = render_text_table(&compose(controller.state()).result.unwrap().rows);

        assert_eq!(before.as_bytes(), after.as_bytes());
    }
}
