use askama::Template;
use askama_web::WebTemplate;

use crate::view::PageView;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageView,
    /// Pre-rendered `diagram.svg`, absent when there is nothing to draw.
    pub diagram_svg: Option<String>,
}
