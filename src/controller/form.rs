//! Login/signup/logout submission and error normalization.
//!
//! Each submit computes from its arguments only, so the functions are
//! reentrant-safe; preventing concurrent submits from the same form is the
//! UI's job (controls are disabled while one is in flight).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::backend::{AuthBackend, Session, SignupOutcome};

pub const MSG_MISSING_FIELDS: &str = "Preencha e-mail e senha.";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não coincidem.";
pub const MSG_INVALID_CREDENTIALS: &str = "E-mail ou senha inválidos.";
pub const MSG_ALREADY_REGISTERED: &str = "Este e-mail já está cadastrado.";
pub const MSG_ACCOUNT_CREATED: &str = "Conta criada com sucesso!";
pub const MSG_CONFIRM_EMAIL: &str = "Verifique seu e-mail para confirmar o cadastro.";
pub const MSG_LOGGED_OUT: &str = "Sessão encerrada.";

/// Terminal result of a submit, applied to `AuthState` by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated {
        session: Session,
        notice: Option<String>,
    },
    Unauthenticated {
        notice: Option<String>,
    },
    /// Validation or backend failure. Whatever session existed before the
    /// submit stays as it was.
    Failed {
        message: String,
    },
}

/// Map service error text to user-facing copy.
///
/// Case-insensitive substring match, first match wins; anything unknown
/// passes through verbatim.
pub fn normalize_error(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    if lowered.contains("invalid login") {
        MSG_INVALID_CREDENTIALS.to_owned()
    } else if lowered.contains("user already registered") {
        MSG_ALREADY_REGISTERED.to_owned()
    } else {
        raw.to_owned()
    }
}

/// Password sign-in. Empty fields fail validation before any network call.
pub async fn submit_login<B: AuthBackend>(backend: &B, email: &str, password: &str) -> AuthOutcome {
    if email.trim().is_empty() || password.is_empty() {
        return AuthOutcome::Failed {
            message: MSG_MISSING_FIELDS.to_owned(),
        };
    }

    match backend.sign_in(email, password).await {
        Ok(session) => AuthOutcome::Authenticated {
            session,
            notice: None,
        },
        Err(err) => AuthOutcome::Failed {
            message: normalize_error(&err.to_string()),
        },
    }
}

/// Account creation. Empty fields and a mismatched confirmation fail
/// validation before any network call. `redirect_to` is the current page
/// origin, where the confirmation email sends the user back to.
pub async fn submit_signup<B: AuthBackend>(
    backend: &B,
    email: &str,
    password: &str,
    confirm_password: &str,
    redirect_to: &str,
) -> AuthOutcome {
    if email.trim().is_empty() || password.is_empty() {
        return AuthOutcome::Failed {
            message: MSG_MISSING_FIELDS.to_owned(),
        };
    }
    if password != confirm_password {
        return AuthOutcome::Failed {
            message: MSG_PASSWORD_MISMATCH.to_owned(),
        };
    }

    match backend.sign_up(email, password, redirect_to).await {
        Ok(SignupOutcome::Confirmed(session)) => AuthOutcome::Authenticated {
            session,
            notice: Some(MSG_ACCOUNT_CREATED.to_owned()),
        },
        Ok(SignupOutcome::PendingConfirmation) => AuthOutcome::Unauthenticated {
            notice: Some(MSG_CONFIRM_EMAIL.to_owned()),
        },
        Err(err) => AuthOutcome::Failed {
            message: normalize_error(&err.to_string()),
        },
    }
}

/// Sign out. On failure the prior session state stays untouched.
pub async fn submit_logout<B: AuthBackend>(backend: &B) -> AuthOutcome {
    match backend.sign_out().await {
        Ok(()) => AuthOutcome::Unauthenticated {
            notice: Some(MSG_LOGGED_OUT.to_owned()),
        },
        Err(err) => AuthOutcome::Failed {
            message: normalize_error(&err.to_string()),
        },
    }
}
