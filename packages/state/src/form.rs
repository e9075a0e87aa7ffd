//! # Credential form: login and registration
//!
//! [`CredentialForm`] owns the field values ([`FormState`]), the per-field
//! errors ([`ErrorState`]), the current [`Mode`] and the outcome of the last
//! submission. It is plain data: the UI keeps it in a signal and calls the
//! methods below from event handlers.
//!
//! ## Change path
//!
//! [`set_field`](CredentialForm::set_field) normalises the raw input, stores
//! it, and re-validates that single field. Validity is never stored:
//! [`is_valid`](CredentialForm::is_valid) recomputes it from the whole form and
//! the current mode every time it is asked.
//!
//! ## Submit path
//!
//! Submitting is split so no borrow of the form is held across an await:
//!
//! 1. [`begin_submit`](CredentialForm::begin_submit) returns a [`Submission`]
//!    (or `None` while invalid or already submitting);
//! 2. [`submit`] runs it against a [`Backend`];
//! 3. [`finish_submit`](CredentialForm::finish_submit) applies the
//!    [`SubmitOutcome`].
//!
//! A successful login is reported to the [`crate::Session`] by the caller.

use std::collections::BTreeMap;

use api::{Backend, Credentials, Endpoint, NewUser, ServerError};

use crate::field::{Field, FieldError, Validation};

/// Login shows two fields, registration all five.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    /// Fields rendered, and required, in this mode.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Mode::Login => &[Field::Username, Field::Password],
            Mode::Register => &Field::ALL,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Mode::Login => "Iniciar Sesión",
            Mode::Register => "Registro de Usuarios",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Mode::Login => "Iniciar sesión",
            Mode::Register => "Registrar usuario",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            Mode::Login => "¿No tienes una cuenta? Regístrate",
            Mode::Register => "¿Ya tienes cuenta? Inicia sesión",
        }
    }
}

/// Current value of every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub email: String,
    pub birth_date: String,
    pub full_name: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::Email => &self.email,
            Field::BirthDate => &self.birth_date,
            Field::FullName => &self.full_name,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            Field::Email => &mut self.email,
            Field::BirthDate => &mut self.birth_date,
            Field::FullName => &mut self.full_name,
        };
        *slot = value;
    }

    /// All of `fields` hold a non-empty value.
    pub fn has_all(&self, fields: &[Field]) -> bool {
        fields.iter().all(|f| !self.get(*f).is_empty())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    pub fn new_user(&self) -> NewUser {
        NewUser {
            username: self.username.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            birth_date: self.birth_date.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

/// Errors of the fields that are currently invalid. No entry means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState(BTreeMap<Field, FieldError>);

impl ErrorState {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn record(&mut self, field: Field, validation: Validation) {
        match validation {
            Validation::Valid => {
                self.0.remove(&field);
            }
            Validation::Invalid(err) => {
                self.0.insert(field, err);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Login(Credentials),
    Register(NewUser),
}

impl Submission {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Submission::Login(_) => Endpoint::Validate,
            Submission::Register(_) => Endpoint::Register,
        }
    }
}

/// What came back from a [`Submission`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    LoggedIn {
        username: String,
        message: Option<String>,
    },
    Registered {
        message: Option<String>,
    },
    Failed(ServerError),
}

/// Run a submission against the back-end.
pub async fn submit<B: Backend>(backend: &B, submission: Submission) -> SubmitOutcome {
    match submission {
        Submission::Login(credentials) => match backend.login(&credentials).await {
            Ok(reply) => SubmitOutcome::LoggedIn {
                username: credentials.username,
                message: reply.int_message,
            },
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                SubmitOutcome::Failed(e.to_server_error())
            }
        },
        Submission::Register(user) => match backend.register(&user).await {
            Ok(ack) => SubmitOutcome::Registered {
                message: ack.message,
            },
            Err(e) => {
                tracing::warn!(error = %e, "registration failed");
                SubmitOutcome::Failed(e.to_server_error())
            }
        },
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialForm {
    values: FormState,
    errors: ErrorState,
    mode: Mode,
    submitting: bool,
    server_error: Option<ServerError>,
    notice: Option<String>,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn server_error(&self) -> Option<&ServerError> {
        self.server_error.as_ref()
    }

    /// Success message of the last submission, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Store user input for `field` and re-validate that field only.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        let value = field.normalize(raw);
        let validation = field.validate(&value);
        self.values.set(field, value);
        self.errors.record(field, validation);
        self.notice = None;
    }

    /// Switch between login and registration. Values and errors are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// No field error anywhere, and every field of the current mode filled in.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.values.has_all(self.mode.fields())
    }

    pub fn submission(&self) -> Option<Submission> {
        if !self.is_valid() {
            return None;
        }
        Some(match self.mode {
            Mode::Login => Submission::Login(self.values.credentials()),
            Mode::Register => Submission::Register(self.values.new_user()),
        })
    }

    /// Mark the form as submitting and hand out the request to send.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        let submission = self.submission()?;
        self.submitting = true;
        self.notice = None;
        Some(submission)
    }

    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;
        match outcome {
            SubmitOutcome::LoggedIn { message, .. } => {
                self.server_error = None;
                self.notice = message.clone();
            }
            SubmitOutcome::Registered { message } => {
                self.server_error = None;
                self.values = FormState::default();
                self.errors.clear();
                self.notice = message.clone();
            }
            SubmitOutcome::Failed(err) => {
                self.server_error = Some(err.clone());
            }
        }
    }

    /// Close the error presenter.
    pub fn dismiss_error(&mut self) {
        self.server_error = None;
    }
}
