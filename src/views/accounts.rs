use std::fmt::Write;

use crate::urls;

use super::{escape, layout};

pub fn login(username: &str, next: &str, error: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(error) = error {
        let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape(error));
    }
    let _ = write!(
        body,
        r#"<form method="post" action="{}">
<input type="hidden" name="next" value="{}">
<label>Username <input type="text" name="username" value="{}" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Login</button>
</form>
<p>No account? <a href="{}">Sign up</a></p>
"#,
        urls::LOGIN,
        escape(next),
        escape(username),
        urls::SIGNUP
    );
    layout("Login", None, &body)
}

pub fn signup(username: &str, errors: &[String]) -> String {
    let mut body = String::new();
    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for error in errors {
            let _ = writeln!(body, "<li>{}</li>", escape(error));
        }
        body.push_str("</ul>\n");
    }
    let _ = write!(
        body,
        r#"<form method="post" action="{}">
<label>Username <input type="text" name="username" value="{}" maxlength="150" required></label>
<label>Password <input type="password" name="password1" required></label>
<label>Password confirmation <input type="password" name="password2" required></label>
<button type="submit">Sign Up</button>
</form>
"#,
        urls::SIGNUP,
        escape(username)
    );
    layout("Sign Up", None, &body)
}
