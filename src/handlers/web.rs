// src/handlers/web.rs
use axum::{
    extract::{Form, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::{AuthOutcome, Authenticator};
use crate::models::{Credentials, LoginFormState};
use crate::templates;
use crate::utils::validation;
use crate::AppState;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password. Please try again.";
pub const INCORRECT_PASSWORD: &str = "Incorrect password provided.";

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub success: Option<String>,
}

pub async fn login_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LoginQuery>,
) -> Html<String> {
    let mut form = LoginFormState::blank();
    form.notice = query.success;
    render_form(&state, &form)
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<Credentials>,
) -> Response {
    let mut form = LoginFormState::with_values(submission.clone());

    // Field validation blocks the attempt before it ever becomes a round
    // trip; the authenticator is not consulted.
    form.field_errors = validation::validate_credentials(&submission);
    if !form.field_errors.is_empty() {
        return (StatusCode::BAD_REQUEST, render_form(&state, &form)).into_response();
    }

    form.begin_submit();

    match state.authenticator.authenticate(&submission).await {
        AuthOutcome::Granted => {
            form.finish();
            if let Some(on_login_success) = &state.on_login_success {
                on_login_success(&submission);
            }

            let notice = success_notice(&submission.username);
            if state.config.reset_form_on_success {
                let target = format!("/login?success={}", urlencoding::encode(&notice));
                return Redirect::to(&target).into_response();
            }

            form.notice = Some(notice);
            render_form(&state, &form).into_response()
        }
        AuthOutcome::Denied => {
            if state.config.password_field_error {
                form.finish();
                form.field_errors.password = Some(INCORRECT_PASSWORD);
            } else {
                form.fail(INVALID_CREDENTIALS);
            }
            (StatusCode::UNAUTHORIZED, render_form(&state, &form)).into_response()
        }
    }
}

/// Stylesheet generated from the configured theme tokens.
pub async fn stylesheet(State(state): State<Arc<AppState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        state.theme.stylesheet(),
    )
        .into_response()
}

fn render_form(state: &AppState, form: &LoginFormState) -> Html<String> {
    Html(templates::login::render(form, &state.config.brand))
}

fn success_notice(username: &str) -> String {
    format!("Login successful! Welcome, {}.", username)
}
