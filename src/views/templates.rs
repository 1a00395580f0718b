use handlebars::{Handlebars, TemplateError};
use std::{path::Path, sync::Arc};

pub type Hbs = Arc<Handlebars<'static>>;

const TEMPLATES: &[&str] = &[
    "pages/not_found",
    "partials/alerts_list",
    "partials/mandi_table",
    "partials/credit_result",
    "partials/loan_schemes",
    "partials/loan_detail",
];

pub fn build_handlebars(dir: impl AsRef<Path>) -> Result<Hbs, TemplateError> {
    let dir = dir.as_ref();
    let mut hb = Handlebars::new();

    for name in TEMPLATES {
        hb.register_template_file(name, dir.join(format!("{name}.hbs")))?;
    }

    Ok(Arc::new(hb))
}
