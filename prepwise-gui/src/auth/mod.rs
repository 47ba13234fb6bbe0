pub mod message;
pub mod schema;
pub mod view;

use std::sync::Arc;

use iced::Task;

use prepwise_ui::{component::form, widget::Element};

use crate::services::identity::{AuthBackend, Credentials, IdentityError};

use message::{Message, NoticeKind, Route, ViewMessage};
use schema::{auth_form_schema, Field, Mode, Schema, FIELDS};

/// The live values of the form's inputs.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    pub name: form::Value<String>,
    pub email: form::Value<String>,
    pub password: form::Value<String>,
}

impl FieldSet {
    pub fn get(&self, field: Field) -> &form::Value<String> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut form::Value<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

/// Submit lifecycle of the form.
///
/// `Succeeded` and `Failed` fall back to `Editing` as soon as the user
/// interacts with the form again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Editing,
    Submitting { generation: u64 },
    Succeeded,
    Failed,
}

/// Side effects decided by a settled submission, applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        notice: &'static str,
        redirect: Option<Route>,
    },
    Failure {
        reason: String,
    },
}

/// State machine of one form instance: owns the field values, their
/// validity against the mode's schema, and the submit lifecycle.
#[derive(Debug)]
pub struct AuthForm {
    mode: Mode,
    schema: Schema,
    fields: FieldSet,
    lifecycle: Lifecycle,
    generation: u64,
}

impl AuthForm {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            schema: auth_form_schema(mode),
            fields: FieldSet::default(),
            lifecycle: Lifecycle::Editing,
            generation: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Submitting { .. })
    }

    /// Message to surface under a field whose current value violates the
    /// schema.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        if self.fields.get(field).valid {
            None
        } else {
            self.schema.rule(field).map(|rule| rule.message())
        }
    }

    /// Records a keystroke and revalidates the edited field.
    ///
    /// An empty value is not flagged while editing, the strict check happens
    /// on the submit attempt.
    pub fn edit_field(&mut self, field: Field, value: String) {
        if matches!(self.lifecycle, Lifecycle::Succeeded | Lifecycle::Failed) {
            self.lifecycle = Lifecycle::Editing;
        }
        let entry = self.fields.get_mut(field);
        entry.valid = value.is_empty() || self.schema.validate(field, &value).is_ok();
        entry.value = value;
    }

    /// Revalidates every field from its live value and, if the whole form
    /// holds, moves to `Submitting` and returns the payload for the
    /// submission capability.
    ///
    /// Returns `None` without any side effect when an attempt is already in
    /// flight, or when a field is invalid (each violated field gets its
    /// message surfaced).
    pub fn try_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }

        let mut all_valid = true;
        for field in FIELDS {
            let value = self.fields.get(field).value.clone();
            let valid = self.schema.validate(field, &value).is_ok();
            self.fields.get_mut(field).valid = valid;
            all_valid &= valid;
        }

        if !all_valid {
            self.lifecycle = Lifecycle::Editing;
            return None;
        }

        self.generation += 1;
        self.lifecycle = Lifecycle::Submitting {
            generation: self.generation,
        };
        Some(Credentials {
            name: (self.mode == Mode::SignUp).then(|| self.fields.name.value.clone()),
            email: self.fields.email.value.clone(),
            password: self.fields.password.value.clone(),
        })
    }

    /// Applies the result of a settled submission.
    ///
    /// Returns `None` when the result does not belong to the attempt
    /// currently in flight (an outdated attempt, or a result delivered to a
    /// remounted instance): such results are dropped, never applied.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<(), IdentityError>,
    ) -> Option<Outcome> {
        if self.lifecycle != (Lifecycle::Submitting { generation }) {
            return None;
        }
        Some(match result {
            Ok(()) => {
                self.lifecycle = Lifecycle::Succeeded;
                match self.mode {
                    // Registration does not open a session, the user signs in
                    // separately.
                    Mode::SignUp => Outcome::Success {
                        notice: "Account created successfully!",
                        redirect: Some(Route::SignIn),
                    },
                    Mode::SignIn => Outcome::Success {
                        notice: "Welcome back!",
                        redirect: None,
                    },
                }
            }
            Err(e) => {
                self.lifecycle = Lifecycle::Failed;
                Outcome::Failure {
                    reason: e.to_string(),
                }
            }
        })
    }
}

/// Iced wiring around [`AuthForm`]: turns view messages into state
/// transitions and the submit transition into a task against the identity
/// backend.
pub struct AuthPanel {
    form: AuthForm,
    backend: Arc<dyn AuthBackend + Send + Sync>,
}

impl AuthPanel {
    pub fn new(mode: Mode, backend: Arc<dyn AuthBackend + Send + Sync>) -> Self {
        Self {
            form: AuthForm::new(mode),
            backend,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::FieldEdited(field, value)) => {
                self.form.edit_field(field, value);
                Task::none()
            }
            Message::View(ViewMessage::Submit) => {
                if let Some(credentials) = self.form.try_submit() {
                    let backend = self.backend.clone();
                    let mode = self.form.mode();
                    let generation = self.form.generation();
                    Task::perform(
                        async move { backend.submit_credentials(mode, credentials).await },
                        move |res| Message::Submitted(generation, res),
                    )
                } else {
                    Task::none()
                }
            }
            Message::Submitted(generation, result) => {
                match self.form.resolve(generation, result) {
                    Some(Outcome::Success { notice, redirect }) => {
                        // The notification is emitted before any navigation.
                        let mut task = Task::perform(async {}, move |_| {
                            Message::Notify(NoticeKind::Success, notice.to_string())
                        });
                        if let Some(route) = redirect {
                            task =
                                task.chain(Task::perform(async {}, move |_| {
                                    Message::Navigate(route)
                                }));
                        } else if self.form.mode() == Mode::SignIn {
                            let email = self.form.fields().email.value.clone();
                            task = task.chain(Task::perform(async move { email }, |email| {
                                Message::SessionOpened(email)
                            }));
                        }
                        task
                    }
                    Some(Outcome::Failure { reason }) => {
                        tracing::warn!("Submission failed: {}", reason);
                        Task::perform(async move { reason }, |reason| {
                            Message::Notify(NoticeKind::Error, reason)
                        })
                    }
                    None => {
                        tracing::debug!("Ignoring a submission result with no attempt in flight");
                        Task::none()
                    }
                }
            }
            // Handled by the embedding GUI.
            Message::View(ViewMessage::GoTo(_))
            | Message::Notify(..)
            | Message::Navigate(_)
            | Message::SessionOpened(_) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::auth_form(&self.form).map(Message::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mock::FakeBackend;

    fn filled(mode: Mode, name: &str, email: &str, password: &str) -> AuthForm {
        let mut form = AuthForm::new(mode);
        if !name.is_empty() {
            form.edit_field(Field::Name, name.to_string());
        }
        form.edit_field(Field::Email, email.to_string());
        form.edit_field(Field::Password, password.to_string());
        form
    }

    #[test]
    fn short_name_refuses_registration() {
        let mut form = filled(Mode::SignUp, "Jo", "a@b.com", "abcdefgh");
        assert!(form.try_submit().is_none());
        assert_eq!(
            form.field_error(Field::Name),
            Some("Name must be at least 3 characters")
        );
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
    }

    #[test]
    fn invalid_email_refuses_sign_in() {
        let mut form = filled(Mode::SignIn, "", "not-an-email", "abcdefgh");
        assert!(form.try_submit().is_none());
        assert_eq!(
            form.field_error(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
    }

    #[test]
    fn empty_fields_tolerated_while_editing_but_block_submit() {
        let mut form = AuthForm::new(Mode::SignIn);
        form.edit_field(Field::Email, "".to_string());
        // No error is surfaced before a submit attempt.
        assert_eq!(form.field_error(Field::Email), None);
        assert!(form.try_submit().is_none());
        assert_eq!(
            form.field_error(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            form.field_error(Field::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[tokio::test]
    async fn submit_forwards_only_mode_relevant_fields() {
        let backend = FakeBackend::succeeding();
        let mut form = filled(Mode::SignIn, "", "ada@example.com", "analytical1");

        let credentials = form.try_submit().expect("the form is valid");
        assert_eq!(credentials.name, None);
        let res = backend
            .submit_credentials(form.mode(), credentials.clone())
            .await;
        form.resolve(form.generation(), res);

        assert_eq!(backend.calls(), vec![(Mode::SignIn, credentials)]);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        let backend = FakeBackend::succeeding();
        let mut form = filled(Mode::SignIn, "", "ada@example.com", "analytical1");

        let mut calls = 0;
        for _ in 0..2 {
            if let Some(credentials) = form.try_submit() {
                let _ = backend.submit_credentials(form.mode(), credentials).await;
                calls += 1;
            }
        }

        assert_eq!(calls, 1);
        assert_eq!(backend.calls().len(), 1);
        assert!(form.is_submitting());
    }

    #[tokio::test]
    async fn registration_success_notifies_then_redirects() {
        let backend = FakeBackend::succeeding();
        let mut form = filled(Mode::SignUp, "Ada Lovelace", "ada@example.com", "analytical1");

        let credentials = form.try_submit().expect("the form is valid");
        assert_eq!(credentials.name.as_deref(), Some("Ada Lovelace"));
        let res = backend.submit_credentials(form.mode(), credentials).await;
        let outcome = form.resolve(form.generation(), res).expect("not stale");

        assert_eq!(
            outcome,
            Outcome::Success {
                notice: "Account created successfully!",
                redirect: Some(Route::SignIn),
            }
        );
        assert_eq!(Route::SignIn.path(), "/sign-in");
        assert_eq!(form.lifecycle(), Lifecycle::Succeeded);
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn sign_in_failure_preserves_fields() {
        let backend = FakeBackend::failing("invalid credentials");
        let mut form = filled(Mode::SignIn, "", "ada@example.com", "wrongpass");

        let credentials = form.try_submit().expect("the form is valid");
        let res = backend.submit_credentials(form.mode(), credentials).await;
        let outcome = form.resolve(form.generation(), res).expect("not stale");

        match outcome {
            Outcome::Failure { reason } => assert!(reason.contains("invalid credentials")),
            Outcome::Success { .. } => panic!("expected a failure"),
        }
        assert_eq!(form.lifecycle(), Lifecycle::Failed);
        assert_eq!(form.fields().email.value, "ada@example.com");
        assert_eq!(form.fields().password.value, "wrongpass");
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut form = filled(Mode::SignIn, "", "ada@example.com", "analytical1");
        assert!(form.try_submit().is_some());
        let stale = form.generation() - 1;

        assert!(form.resolve(stale, Ok(())).is_none());
        assert!(form.is_submitting());

        // A remounted instance drops results of the previous one.
        let mut remounted = AuthForm::new(Mode::SignIn);
        assert!(remounted.resolve(1, Ok(())).is_none());
        assert_eq!(remounted.lifecycle(), Lifecycle::Editing);
    }

    #[test]
    fn terminal_states_return_to_editing_on_interaction() {
        let mut form = filled(Mode::SignIn, "", "ada@example.com", "analytical1");
        assert!(form.try_submit().is_some());
        form.resolve(form.generation(), Ok(()));
        assert_eq!(form.lifecycle(), Lifecycle::Succeeded);

        form.edit_field(Field::Password, "analytical2".to_string());
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
    }

    #[tokio::test]
    async fn failed_attempt_can_be_retried() {
        let backend = FakeBackend::failing("server error");
        let mut form = filled(Mode::SignIn, "", "ada@example.com", "analytical1");

        let credentials = form.try_submit().expect("the form is valid");
        let res = backend.submit_credentials(form.mode(), credentials).await;
        form.resolve(form.generation(), res);
        assert_eq!(form.lifecycle(), Lifecycle::Failed);

        // Same values, new attempt, new generation.
        let retry = form.try_submit().expect("fields were preserved");
        assert_eq!(retry.email, "ada@example.com");
        assert_eq!(form.generation(), 2);
    }
}
