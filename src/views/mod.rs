//! Server-side HTML rendering.
//!
//! Each page function takes already-loaded data and returns the full HTML
//! document. Every interpolated value goes through [`escape`]; nothing in
//! here touches the database.

pub mod accounts;
pub mod error;
pub mod movies;
pub mod requests;

use std::fmt::Write;

use crate::middleware::CurrentUser;
use crate::urls;

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared document shell and navigation bar.
pub fn layout(title: &str, user: Option<&CurrentUser>, body: &str) -> String {
    let mut nav = String::new();
    let _ = write!(
        nav,
        r#"<a href="{}">Movies</a> <a href="{}">Movie Requests</a>"#,
        urls::MOVIES_INDEX,
        urls::MOVIE_REQUESTS
    );
    match user {
        Some(user) => {
            let _ = write!(
                nav,
                r#" <span class="user">{}</span> <form class="inline" method="post" action="{}"><button type="submit">Logout</button></form>"#,
                escape(&user.username),
                urls::LOGOUT
            );
        }
        None => {
            let _ = write!(
                nav,
                r#" <a href="{}">Login</a> <a href="{}">Sign Up</a>"#,
                urls::LOGIN,
                urls::SIGNUP
            );
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav>{nav}</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        nav = nav,
        body = body
    )
}
