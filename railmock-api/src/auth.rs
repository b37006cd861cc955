use axum::{
    extract::{FromRequest, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use railmock_core::{
    session::{CSRF_TOKEN_KEY, USER_ID_KEY},
    Operation,
};
use railmock_store::secure_random::secure_random_str;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{error::{status_response, AppError}, state::AppState};

const CSRF_TOKEN_LEN: usize = 20;
const MOCK_USER_ID: i64 = 1;

#[derive(Debug, Default, Deserialize)]
struct RegisterForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Default, Deserialize)]
struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
}

async fn read_form<T>(request: Request, state: &AppState) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    let Form(form) = Form::<T>::from_request(request, state)
        .await
        .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    Ok(form)
}

/// POST /api/register
async fn register(State(state): State<AppState>, request: Request) -> Result<Response, AppError> {
    let delays = state.delays.clone();
    delays
        .run(Operation::Register, async move {
            let form: RegisterForm = read_form(request, &state).await?;
            if form.email.is_empty() || form.password.is_empty() {
                return Err(AppError::Validation("email and password are required".into()));
            }

            Ok(status_response(StatusCode::ACCEPTED))
        })
        .await?
}

/// POST /api/login
/// Marks the caller's session as logged in and issues a fresh anti-forgery token.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let delays = state.delays.clone();
    delays
        .run(Operation::Login, async move {
            let form: LoginForm = read_form(request, &state).await?;
            if form.username.is_empty() || form.password.is_empty() {
                return Err(AppError::Validation("username and password are required".into()));
            }

            let credential = jar.get(&state.session_cookie).map(|c| c.value().to_string());
            let mut session = state.sessions.get(credential.as_deref()).await?;

            // A failed token draw must leave the session untouched.
            let token = secure_random_str(CSRF_TOKEN_LEN)
                .map_err(|e| AppError::Internal(format!("CSRF token generation failed: {}", e)))?;
            state.sessions.set(&mut session, USER_ID_KEY, json!(MOCK_USER_ID)).await?;
            state.sessions.set(&mut session, CSRF_TOKEN_KEY, json!(token)).await?;

            info!("Login accepted for {}, session {}", form.username, session.id());

            let cookie = Cookie::build((state.session_cookie.clone(), session.id().to_string()))
                .path("/")
                .http_only(true);

            Ok((jar.add(cookie), status_response(StatusCode::ACCEPTED)))
        })
        .await?
}
