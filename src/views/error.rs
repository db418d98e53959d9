use axum::http::StatusCode;

use super::{escape, layout};

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<p class="error">{}</p>
<p><a href="{}">Back to movies</a></p>"#,
        escape(message),
        crate::urls::MOVIES_INDEX
    );
    layout(title, None, &body)
}
