use std::fmt::Write;

use crate::database::models::MovieRequestSummary;
use crate::middleware::CurrentUser;
use crate::urls;

use super::{escape, layout};

pub fn movie_requests(requests: &[MovieRequestSummary], user: &CurrentUser) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"<form method="post" action="{}">
<input type="text" name="name" placeholder="Movie name" required>
<textarea name="description" placeholder="Why should we add it?" required></textarea>
<button type="submit">Submit Request</button>
</form>
"#,
        urls::MOVIE_REQUESTS
    );

    if requests.is_empty() {
        body.push_str("<p>No movie requests yet.</p>\n");
        return layout("Movie Requests", Some(user), &body);
    }

    body.push_str("<ul class=\"requests\">\n");
    for request in requests {
        let _ = write!(
            body,
            r#"<li><strong>{}</strong> <span class="author">by {}</span><p>{}</p><span class="votes">{} {}</span> "#,
            escape(&request.name),
            escape(&request.username),
            escape(&request.description),
            request.vote_count,
            if request.vote_count == 1 { "vote" } else { "votes" }
        );
        let _ = write!(
            body,
            r#"<form class="inline" method="post" action="{}"><button type="submit">{}</button></form>"#,
            urls::vote_movie_request(request.id),
            if request.user_has_voted { "Remove Vote" } else { "Vote" }
        );
        if request.user_id == user.id {
            let _ = write!(
                body,
                r#" <form class="inline" method="post" action="{}"><button type="submit">Delete</button></form>"#,
                urls::delete_movie_request(request.id)
            );
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n");

    layout("Movie Requests", Some(user), &body)
}
