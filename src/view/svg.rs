use askama::Template;

use crate::projection::Diagram;

/// Standalone SVG document for a diagram, embedded in the page and written
/// out by the command line.
#[derive(Template)]
#[template(path = "diagram.svg", escape = "html")]
pub struct DiagramSvg<'a> {
    pub diagram: &'a Diagram,
}

impl<'a> DiagramSvg<'a> {
    pub fn new(diagram: &'a Diagram) -> Self {
        Self { diagram }
    }
}
