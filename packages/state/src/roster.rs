//! # Roster: list, edit and delete registered users
//!
//! [`Roster`] is the state behind the users screen. Like the credential form
//! it is plain data; requests run in free async functions so the UI never
//! holds a borrow of the state across an await:
//!
//! | Step | Call |
//! |------|------|
//! | load | [`Roster::begin_fetch`] → [`fetch_users`] → [`Roster::apply_fetch`] |
//! | delete | [`Roster::request_delete`] → [`Roster::confirm_delete`] → [`delete_and_refresh`] → [`Roster::apply_mutation`] |
//! | update | [`Roster::edit`] → [`Roster::begin_update`] → [`update_and_refresh`] → [`Roster::apply_mutation`] |
//!
//! A mutation is always followed by a re-fetch, and only when the mutation
//! succeeded. If that re-fetch fails the previous list is kept and flagged
//! [`stale`](Roster::is_stale).
//!
//! Every load or mutation takes a [`Ticket`]. A list carried by a superseded
//! ticket is dropped, and after [`Roster::close`] nothing is applied at all.

use api::{ApiError, Backend, UserId, UserRecord, UserUpdate};

use crate::ticket::{Ticket, Tickets};

pub const DELETE_CONFIRMATION: &str = "¿Estás seguro de eliminar este usuario?";
pub const EMPTY_ROSTER: &str = "No hay usuarios registrados";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient message shown above the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.to_string(),
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.to_string(),
        }
    }
}

/// Inputs of the edit form. The username is not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Email,
    BirthDate,
    FullName,
    Password,
}

impl EditField {
    pub const ALL: [EditField; 4] = [
        EditField::Email,
        EditField::BirthDate,
        EditField::FullName,
        EditField::Password,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditField::Email => "Email",
            EditField::BirthDate => "Fecha de Nacimiento",
            EditField::FullName => "Nombre Completo",
            EditField::Password => "Contraseña",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            EditField::Email => "email",
            EditField::BirthDate => "date",
            EditField::FullName => "text",
            EditField::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub email: String,
    pub birth_date: String,
    pub full_name: String,
    pub password: String,
}

impl EditForm {
    /// Pre-filled from `user`; the password always starts empty.
    pub fn for_user(user: &UserRecord) -> Self {
        Self {
            email: user.email.clone(),
            birth_date: user.birth_date.clone(),
            full_name: user.full_name.clone(),
            password: String::new(),
        }
    }

    pub fn get(&self, field: EditField) -> &str {
        match field {
            EditField::Email => &self.email,
            EditField::BirthDate => &self.birth_date,
            EditField::FullName => &self.full_name,
            EditField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: EditField, value: String) {
        match field {
            EditField::Email => self.email = value,
            EditField::BirthDate => self.birth_date = value,
            EditField::FullName => self.full_name = value,
            EditField::Password => self.password = value,
        }
    }

    fn into_update(self, username: String) -> UserUpdate {
        UserUpdate {
            username,
            password: self.password,
            email: self.email,
            birth_date: self.birth_date,
            full_name: self.full_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Delete,
    Update,
}

impl Mutation {
    fn success_text(self) -> &'static str {
        match self {
            Mutation::Delete => "Usuario eliminado exitosamente",
            Mutation::Update => "Usuario actualizado exitosamente",
        }
    }

    fn failure_text(self) -> &'static str {
        match self {
            Mutation::Delete => "No se pudo eliminar el usuario",
            Mutation::Update => "No se pudo actualizar el usuario",
        }
    }
}

/// Result of a mutation and of the re-fetch that follows it.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Failed(ApiError),
    Done {
        refreshed: Result<Vec<UserRecord>, ApiError>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    users: Vec<UserRecord>,
    loading: bool,
    stale: bool,
    editing: Option<UserRecord>,
    edit_form: EditForm,
    pending_delete: Option<UserId>,
    mutating: bool,
    notice: Option<Notice>,
    tickets: Tickets,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The list on screen may no longer match the server.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn editing(&self) -> Option<&UserRecord> {
        self.editing.as_ref()
    }

    pub fn edit_form(&self) -> &EditForm {
        &self.edit_form
    }

    pub fn pending_delete(&self) -> Option<&UserId> {
        self.pending_delete.as_ref()
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        self.loading = true;
        self.tickets.issue()
    }

    /// Apply the result of a plain load. A failed load shows an empty roster.
    pub fn apply_fetch(&mut self, ticket: Ticket, result: Result<Vec<UserRecord>, ApiError>) {
        if !self.tickets.is_current(ticket) {
            tracing::debug!(?ticket, "dropping superseded users list");
            return;
        }
        self.loading = false;
        self.stale = false;
        self.users = match result {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(error = %e, "could not load users");
                Vec::new()
            }
        };
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: UserId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirmation given: hand out the id to delete.
    pub fn confirm_delete(&mut self) -> Option<(UserId, Ticket)> {
        if self.mutating {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.mutating = true;
        Some((id, self.tickets.issue()))
    }

    pub fn edit(&mut self, user: &UserRecord) {
        self.edit_form = EditForm::for_user(user);
        self.editing = Some(user.clone());
    }

    pub fn set_edit_field(&mut self, field: EditField, value: String) {
        self.edit_form.set(field, value);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit_form = EditForm::default();
    }

    /// Build the update for the user being edited.
    pub fn begin_update(&mut self) -> Option<(UserId, UserUpdate, Ticket)> {
        if self.mutating {
            return None;
        }
        let target = self.editing.as_ref()?;
        let id = target.id.clone();
        let update = self.edit_form.clone().into_update(target.username.clone());
        self.mutating = true;
        Some((id, update, self.tickets.issue()))
    }

    pub fn apply_mutation(&mut self, ticket: Ticket, mutation: Mutation, outcome: MutationOutcome) {
        if self.tickets.is_closed() {
            return;
        }
        self.mutating = false;
        let current = self.tickets.is_current(ticket);
        if current {
            self.loading = false;
        }
        let refreshed = match outcome {
            MutationOutcome::Failed(e) => {
                tracing::error!(?mutation, error = %e, "mutation failed");
                self.notice = Some(Notice::error(mutation.failure_text()));
                return;
            }
            MutationOutcome::Done { refreshed } => refreshed,
        };

        self.notice = Some(Notice::success(mutation.success_text()));
        if mutation == Mutation::Update {
            self.cancel_edit();
        }
        if !current {
            tracing::debug!(?ticket, "dropping superseded users list");
            return;
        }
        match refreshed {
            Ok(users) => {
                self.users = users;
                self.stale = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not refresh users");
                self.stale = true;
            }
        }
    }

    /// The screen went away; late responses are ignored from now on.
    pub fn close(&mut self) {
        self.tickets.close();
    }
}

pub async fn fetch_users<B: Backend>(backend: &B) -> Result<Vec<UserRecord>, ApiError> {
    backend.list_users().await
}

/// `DELETE /users/:id`, then `GET /users` if the delete went through.
pub async fn delete_and_refresh<B: Backend>(backend: &B, id: &UserId) -> MutationOutcome {
    if let Err(e) = backend.delete_user(id).await {
        return MutationOutcome::Failed(e);
    }
    MutationOutcome::Done {
        refreshed: backend.list_users().await,
    }
}

/// `PUT /users/:id`, then `GET /users` if the update went through.
pub async fn update_and_refresh<B: Backend>(
    backend: &B,
    id: &UserId,
    update: &UserUpdate,
) -> MutationOutcome {
    if let Err(e) = backend.update_user(id, update).await {
        return MutationOutcome::Failed(e);
    }
    MutationOutcome::Done {
        refreshed: backend.list_users().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Call, Endpoint, MemoryBackend, Method, NewUser};

    fn seeded(count: usize) -> MemoryBackend {
        let backend = MemoryBackend::new();
        for i in 1..=count {
            backend.insert_user(NewUser {
                username: format!("user{i}"),
                password: "abc123".into(),
                email: format!("user{i}@example.com"),
                birth_date: "1990-04-01".into(),
                full_name: format!("User {i}"),
            });
        }
        backend
    }

    async fn loaded(backend: &MemoryBackend) -> Roster {
        let mut roster = Roster::new();
        let ticket = roster.begin_fetch();
        roster.apply_fetch(ticket, fetch_users(backend).await);
        backend.clear_calls();
        roster
    }

    async fn run_delete(roster: &mut Roster, backend: &MemoryBackend) {
        let (id, ticket) = roster.confirm_delete().unwrap();
        let outcome = delete_and_refresh(backend, &id).await;
        roster.apply_mutation(ticket, Mutation::Delete, outcome);
    }

    async fn run_update(roster: &mut Roster, backend: &MemoryBackend) {
        let (id, update, ticket) = roster.begin_update().unwrap();
        let outcome = update_and_refresh(backend, &id, &update).await;
        roster.apply_mutation(ticket, Mutation::Update, outcome);
    }

    #[tokio::test]
    async fn test_load_lists_users_in_server_order() {
        let backend = seeded(3);
        let roster = loaded(&backend).await;
        let names: Vec<&str> = roster.users().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["user1", "user2", "user3"]);
        assert!(!roster.is_loading());
    }

    #[tokio::test]
    async fn test_failed_load_shows_empty_roster() {
        let backend = seeded(2);
        backend.set_offline(true);
        let roster = loaded(&backend).await;
        assert!(roster.users().is_empty());
        assert!(!roster.is_stale());
    }

    #[tokio::test]
    async fn test_cancelled_delete_sends_nothing() {
        let backend = seeded(5);
        let mut roster = loaded(&backend).await;

        roster.request_delete(UserId::from(5));
        roster.cancel_delete();

        assert_eq!(roster.confirm_delete(), None);
        assert!(backend.calls().is_empty());
        assert_eq!(roster.users().len(), 5);
    }

    #[tokio::test]
    async fn test_confirmed_delete_then_refetch() {
        let backend = seeded(5);
        let mut roster = loaded(&backend).await;

        roster.request_delete(UserId::from(5));
        run_delete(&mut roster, &backend).await;

        assert_eq!(
            backend.calls(),
            vec![
                Call::new(Method::Delete, "/users/5"),
                Call::new(Method::Get, "/users"),
            ]
        );
        assert_eq!(roster.users().len(), 4);
        assert_eq!(
            roster.notice(),
            Some(&Notice::success("Usuario eliminado exitosamente"))
        );
    }

    #[tokio::test]
    async fn test_failed_delete_skips_refetch() {
        let backend = seeded(2);
        let mut roster = loaded(&backend).await;
        backend.fail_on(Endpoint::DeleteUser(UserId::from(1)), ApiError::Status(500));

        roster.request_delete(UserId::from(1));
        run_delete(&mut roster, &backend).await;

        assert_eq!(backend.calls(), vec![Call::new(Method::Delete, "/users/1")]);
        assert_eq!(roster.users().len(), 2);
        assert_eq!(
            roster.notice(),
            Some(&Notice::error("No se pudo eliminar el usuario"))
        );
        assert!(!roster.is_mutating());
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_list_marked_stale() {
        let backend = seeded(3);
        let mut roster = loaded(&backend).await;
        backend.fail_on(Endpoint::Users, ApiError::Network("reset".into()));

        roster.request_delete(UserId::from(2));
        run_delete(&mut roster, &backend).await;

        assert_eq!(backend.users().len(), 2);
        assert_eq!(roster.users().len(), 3);
        assert!(roster.is_stale());

        let ticket = roster.begin_fetch();
        roster.apply_fetch(ticket, fetch_users(&backend).await);
        assert!(!roster.is_stale());
        assert_eq!(roster.users().len(), 2);
    }

    #[tokio::test]
    async fn test_edit_then_cancel_sends_nothing() {
        let backend = seeded(2);
        let mut roster = loaded(&backend).await;
        let before = roster.users().to_vec();

        let target = roster.users()[1].clone();
        roster.edit(&target);
        roster.set_edit_field(EditField::FullName, "Someone Else".into());
        roster.cancel_edit();

        assert_eq!(roster.editing(), None);
        assert_eq!(roster.edit_form(), &EditForm::default());
        assert_eq!(roster.begin_update(), None);
        assert!(backend.calls().is_empty());
        assert_eq!(roster.users(), before.as_slice());
    }

    #[tokio::test]
    async fn test_edit_form_prefills_without_password() {
        let backend = seeded(1);
        let mut roster = loaded(&backend).await;
        let target = roster.users()[0].clone();
        roster.edit(&target);

        let form = roster.edit_form();
        assert_eq!(form.email, "user1@example.com");
        assert_eq!(form.full_name, "User 1");
        assert_eq!(form.birth_date, "1990-04-01");
        assert!(form.password.is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_username_and_refetches() {
        let backend = seeded(2);
        let mut roster = loaded(&backend).await;
        let target = roster.users()[0].clone();

        roster.edit(&target);
        roster.set_edit_field(EditField::Email, "new@example.com".into());
        roster.set_edit_field(EditField::Password, "secret9".into());
        run_update(&mut roster, &backend).await;

        assert_eq!(
            backend.calls(),
            vec![
                Call::new(Method::Put, "/users/1"),
                Call::new(Method::Get, "/users"),
            ]
        );
        assert_eq!(roster.users()[0].username, "user1");
        assert_eq!(roster.users()[0].email, "new@example.com");
        assert_eq!(roster.editing(), None);
        assert_eq!(
            roster.notice(),
            Some(&Notice::success("Usuario actualizado exitosamente"))
        );
    }

    #[tokio::test]
    async fn test_failed_update_keeps_editing_target() {
        let backend = seeded(2);
        let mut roster = loaded(&backend).await;
        let target = roster.users()[0].clone();

        roster.edit(&target);
        // Taken by user2.
        roster.set_edit_field(EditField::Email, "user2@example.com".into());
        roster.set_edit_field(EditField::Password, "secret9".into());
        run_update(&mut roster, &backend).await;

        assert_eq!(backend.calls(), vec![Call::new(Method::Put, "/users/1")]);
        assert_eq!(roster.editing(), Some(&target));
        assert_eq!(roster.edit_form().email, "user2@example.com");
        assert_eq!(
            roster.notice(),
            Some(&Notice::error("No se pudo actualizar el usuario"))
        );
    }

    #[test]
    fn test_superseded_fetch_is_dropped() {
        let mut roster = Roster::new();
        let first = roster.begin_fetch();
        let second = roster.begin_fetch();

        roster.apply_fetch(second, Ok(Vec::new()));
        let late = vec![UserRecord {
            id: UserId::from(1),
            username: "late".into(),
            email: String::new(),
            full_name: String::new(),
            birth_date: String::new(),
        }];
        roster.apply_fetch(first, Ok(late));
        assert!(roster.users().is_empty());
    }

    #[test]
    fn test_nothing_applies_after_close() {
        let mut roster = Roster::new();
        roster.request_delete(UserId::from(3));
        let (_, ticket) = roster.confirm_delete().unwrap();
        roster.close();

        roster.apply_mutation(
            ticket,
            Mutation::Delete,
            MutationOutcome::Done {
                refreshed: Ok(Vec::new()),
            },
        );
        assert_eq!(roster.notice(), None);
    }

    #[test]
    fn test_one_mutation_at_a_time() {
        let mut roster = Roster::new();
        roster.request_delete(UserId::from(1));
        assert!(roster.confirm_delete().is_some());
        roster.request_delete(UserId::from(2));
        assert!(roster.confirm_delete().is_none());
        assert_eq!(roster.pending_delete(), Some(&UserId::from(2)));
    }
}
