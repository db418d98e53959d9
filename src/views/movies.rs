use std::fmt::Write;

use crate::database::models::{Movie, Review, ReviewWithAuthor};
use crate::middleware::CurrentUser;
use crate::urls;

use super::{escape, layout};

pub fn index(movies: &[Movie], search: Option<&str>, user: Option<&CurrentUser>) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"<form method="get" action="{}">
<input type="text" name="search" value="{}" placeholder="Search movies">
<button type="submit">Search</button>
</form>
"#,
        urls::MOVIES_INDEX,
        escape(search.unwrap_or_default())
    );

    if movies.is_empty() {
        body.push_str("<p>No movies found.</p>\n");
    } else {
        body.push_str("<ul class=\"movies\">\n");
        for movie in movies {
            let _ = writeln!(
                body,
                r#"<li><a href="{}">{}</a></li>"#,
                urls::movie_show(movie.id),
                escape(&movie.name)
            );
        }
        body.push_str("</ul>\n");
    }

    layout("Movies", user, &body)
}

pub fn show(movie: &Movie, reviews: &[ReviewWithAuthor], user: Option<&CurrentUser>) -> String {
    let mut body = String::new();
    let _ = writeln!(body, r#"<p class="description">{}</p>"#, escape(&movie.description));
    let _ = writeln!(body, r#"<p class="price">Price: ${}</p>"#, movie.price);
    if let Some(image) = &movie.image {
        let _ = writeln!(body, r#"<img src="{}" alt="{}">"#, escape(image), escape(&movie.name));
    }

    body.push_str("<h2>Reviews</h2>\n");
    if reviews.is_empty() {
        body.push_str("<p>No reviews yet.</p>\n");
    }
    body.push_str("<ul class=\"reviews\">\n");
    for review in reviews {
        let _ = write!(
            body,
            r#"<li><strong>{}</strong> <time>{}</time><p>{}</p>"#,
            escape(&review.username),
            review.created_at.format("%Y-%m-%d %H:%M"),
            escape(&review.comment)
        );
        if user.map(|u| u.id) == Some(review.user_id) {
            let _ = write!(
                body,
                r#"<a href="{}">Edit</a> <form class="inline" method="post" action="{}"><button type="submit">Delete</button></form>"#,
                urls::edit_review(movie.id, review.id),
                urls::delete_review(movie.id, review.id)
            );
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n");

    if user.is_some() {
        let _ = write!(
            body,
            r#"<h2>Create a review</h2>
<form method="post" action="{}">
<textarea name="comment" required></textarea>
<button type="submit">Add Review</button>
</form>
"#,
            urls::create_review(movie.id)
        );
    }

    layout(&movie.name, user, &body)
}

pub fn edit_review(movie_id: i64, review: &Review, user: Option<&CurrentUser>) -> String {
    let body = format!(
        r#"<form method="post" action="{}">
<textarea name="comment" required>{}</textarea>
<button type="submit">Save</button>
</form>
<p><a href="{}">Cancel</a></p>
"#,
        urls::edit_review(movie_id, review.id),
        escape(&review.comment),
        urls::movie_show(movie_id)
    );
    layout("Edit Review", user, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn movie() -> Movie {
        Movie {
            id: 3,
            name: "Dune".to_string(),
            price: 12,
            description: "Spice".to_string(),
            image: None,
        }
    }

    fn review(user_id: i64, username: &str) -> ReviewWithAuthor {
        ReviewWithAuthor {
            id: 8,
            comment: "<b>loud</b>".to_string(),
            movie_id: 3,
            user_id,
            username: username.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn index_echoes_escaped_search_term() {
        let html = index(&[movie()], Some("\"dune"), None);
        assert!(html.contains(r#"value="&quot;dune""#));
        assert!(html.contains(r#"<a href="/3/">Dune</a>"#));
    }

    #[test]
    fn show_offers_controls_only_to_review_owner() {
        let owner = CurrentUser {
            id: 1,
            username: "alice".to_string(),
        };
        let other = CurrentUser {
            id: 2,
            username: "bob".to_string(),
        };
        let reviews = vec![review(1, "alice")];

        let as_owner = show(&movie(), &reviews, Some(&owner));
        assert!(as_owner.contains("/3/review/8/edit/"));
        assert!(as_owner.contains("/3/review/8/delete/"));
        assert!(as_owner.contains("&lt;b&gt;loud&lt;/b&gt;"));

        let as_other = show(&movie(), &reviews, Some(&other));
        assert!(!as_other.contains("/3/review/8/edit/"));
        assert!(as_other.contains("/3/review/create/"));

        let anonymous = show(&movie(), &reviews, None);
        assert!(!anonymous.contains("/3/review/create/"));
    }
}
