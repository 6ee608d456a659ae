// src/templates/login.rs
use super::{html_escape, render_page};
use crate::models::LoginFormState;

// Applies the in-flight state on the client as soon as the form is posted.
// Inputs become readonly (a disabled input would drop out of the POST body)
// and the submit control locks until the round trip resolves.
const SUBMIT_GUARD_SCRIPT: &str = r#"<script>
        document.getElementById('login-form').addEventListener('submit', function () {
            var button = this.querySelector('button[type=submit]');
            this.querySelectorAll('input').forEach(function (input) {
                input.setAttribute('readonly', 'readonly');
            });
            button.disabled = true;
            button.textContent = 'Logging in...';
        });
    </script>"#;

pub fn render(form: &LoginFormState, brand: &str) -> String {
    let disabled = form.is_submitting();

    let notice_html = match &form.notice {
        Some(notice) => format!(
            r#"<div class="success-message">{}</div>
    "#,
            html_escape(notice)
        ),
        None => String::new(),
    };

    // Shown above the submit control; wrong username and wrong password are
    // indistinguishable on purpose.
    let submit_error_html = match form.submit_error() {
        Some(error) => format!(
            r#"<p class="submit-error">{}</p>
        "#,
            html_escape(error)
        ),
        None => String::new(),
    };

    let username_field = field_html(
        "text",
        "username",
        "Username",
        "username",
        &form.values.username,
        form.field_errors.username,
        disabled,
    );
    let password_field = field_html(
        "password",
        "password",
        "Password",
        "current-password",
        &form.values.password,
        form.field_errors.password,
        disabled,
    );

    let button_label = if disabled { "Logging in..." } else { "Log in" };
    let button_disabled = if disabled { " disabled" } else { "" };

    let content = format!(
        r##"    <h1>Log in</h1>
    {}<form id="login-form" class="login-form" method="POST" action="/login">
        {}{}{}<button type="submit" class="btn btn-primary btn-full"{}>{}</button>
    </form>
    <p class="auth-footer">
        or, <a href="#">sign up</a>
    </p>
    {}"##,
        notice_html,
        username_field,
        password_field,
        submit_error_html,
        button_disabled,
        button_label,
        SUBMIT_GUARD_SCRIPT
    );

    render_page("Login", &content, brand)
}

fn field_html(
    input_type: &str,
    name: &str,
    label: &str,
    autocomplete: &str,
    value: &str,
    error: Option<&'static str>,
    disabled: bool,
) -> String {
    let class = if error.is_some() {
        "input-error"
    } else {
        ""
    };
    let error_html = match error {
        Some(message) => format!(
            r#"
            <p class="field-error">{}</p>"#,
            message
        ),
        None => String::new(),
    };
    let disabled_attr = if disabled { " disabled" } else { "" };

    format!(
        r#"<div class="form-group">
            <label for="{name}">{label}</label>
            <input type="{input_type}" id="{name}" name="{name}" placeholder="{label}" value="{value}" autocomplete="{autocomplete}" class="{class}"{disabled_attr}>{error_html}
        </div>
        "#,
        name = name,
        label = label,
        input_type = input_type,
        value = html_escape(value),
        autocomplete = autocomplete,
        class = class,
        disabled_attr = disabled_attr,
        error_html = error_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Credentials, FieldErrors, LoginFormState};
    use crate::utils::validation;

    #[test]
    fn test_blank_form() {
        let page = render(&LoginFormState::blank(), "Gatehouse");

        assert!(page.contains("<h1>Log in</h1>"));
        assert!(page.contains(r#"placeholder="Username""#));
        assert!(page.contains(r#"autocomplete="current-password""#));
        assert!(page.contains(">Log in</button>"));
        assert!(page.contains("or, <a href=\"#\">sign up</a>"));
        assert!(!page.contains("field-error"));
        assert!(!page.contains("submit-error"));
    }

    #[test]
    fn test_field_errors_render_inline() {
        let mut form = LoginFormState::blank();
        form.field_errors = FieldErrors {
            username: Some(validation::USERNAME_REQUIRED),
            password: Some(validation::PASSWORD_TOO_SHORT),
        };

        let page = render(&form, "Gatehouse");

        assert!(page.contains("Username is required."));
        assert!(page.contains("Password must be at least 6 characters."));
        assert!(page.contains("input-error"));
    }

    #[test]
    fn test_failure_keeps_values_and_shows_banner() {
        let mut form = LoginFormState::with_values(Credentials {
            username: "testuser".to_string(),
            password: "wrongpass".to_string(),
        });
        form.begin_submit();
        form.fail("Invalid username or password. Please try again.");

        let page = render(&form, "Gatehouse");

        assert!(page.contains("Invalid username or password. Please try again."));
        assert!(page.contains(r#"value="testuser""#));
        assert!(page.contains(r#"value="wrongpass""#));
        assert!(!page.contains("disabled>Logging in..."));
    }

    #[test]
    fn test_in_flight_form_is_locked() {
        let mut form = LoginFormState::with_values(Credentials {
            username: "testuser".to_string(),
            password: "password123".to_string(),
        });
        form.begin_submit();

        let page = render(&form, "Gatehouse");

        assert!(page.contains(r#"autocomplete="username" class="" disabled>"#));
        assert!(page.contains("disabled>Logging in...</button>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let form = LoginFormState::with_values(Credentials {
            username: r#""><script>alert(1)</script>"#.to_string(),
            password: String::new(),
        });

        let page = render(&form, "Gatehouse");

        assert!(page.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!page.contains(r#"value=""><script>"#));
    }

    #[test]
    fn test_success_notice() {
        let mut form = LoginFormState::blank();
        form.notice = Some("Login successful! Welcome, testuser.".to_string());

        let page = render(&form, "Gatehouse");
        assert!(page.contains("Login successful! Welcome, testuser."));
        assert!(page.contains("success-message"));
    }
}
