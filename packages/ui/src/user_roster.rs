//! Registered users screen: list, edit and delete.

use api::{Endpoint, HttpBackend};
use dioxus::prelude::*;
use state::roster::{DELETE_CONFIRMATION, EMPTY_ROSTER};
use state::{
    delete_and_refresh, fetch_users, update_and_refresh, EditField, Mutation, MutationOutcome,
    NoticeLevel, Roster,
};

use crate::activity_log::{log_activity, log_call, use_activity_log, ActivityLog, LogLevel};
use crate::auth::{use_session, BackToStartButton};
use crate::backend::use_backend;
use crate::confirm_dialog::ConfirmDialog;
use crate::edit_user_form::EditUserForm;
use crate::icons::{FaPen, FaRotateRight, FaTrash, FaXmark};
use crate::Icon;

fn log_mutation(log: &mut Signal<ActivityLog>, endpoint: &Endpoint, outcome: &MutationOutcome) {
    match outcome {
        MutationOutcome::Failed(e) => {
            log_activity(log, LogLevel::Error, &format!("{endpoint}: {e}"));
        }
        MutationOutcome::Done { refreshed } => {
            log_activity(log, LogLevel::Success, &format!("{endpoint}"));
            log_call(log, &Endpoint::Users, refreshed, false);
        }
    }
}

fn load(backend: HttpBackend, mut roster: Signal<Roster>, mut log: Signal<ActivityLog>) {
    let ticket = roster.write().begin_fetch();
    spawn(async move {
        let result = fetch_users(&backend).await;
        log_call(&mut log, &Endpoint::Users, &result, true);
        roster.write().apply_fetch(ticket, result);
    });
}

#[component]
pub fn UserRoster() -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut log = use_activity_log();
    let mut roster = use_signal(Roster::new);

    use_effect({
        let backend = backend.clone();
        move || load(backend.clone(), roster, log)
    });

    use_drop(move || {
        if let Ok(mut roster) = roster.try_write() {
            roster.close();
        }
    });

    let reload = {
        let backend = backend.clone();
        move |_: MouseEvent| load(backend.clone(), roster, log)
    };

    let confirm_delete = {
        let backend = backend.clone();
        move |_: ()| {
            let Some((id, ticket)) = roster.write().confirm_delete() else {
                return;
            };
            let backend = backend.clone();
            spawn(async move {
                let outcome = delete_and_refresh(&backend, &id).await;
                log_mutation(&mut log, &Endpoint::DeleteUser(id), &outcome);
                roster.write().apply_mutation(ticket, Mutation::Delete, outcome);
            });
        }
    };

    let submit_update = {
        let backend = backend.clone();
        move |_: ()| {
            let Some((id, update, ticket)) = roster.write().begin_update() else {
                return;
            };
            let backend = backend.clone();
            spawn(async move {
                let outcome = update_and_refresh(&backend, &id, &update).await;
                log_mutation(&mut log, &Endpoint::UpdateUser(id), &outcome);
                roster.write().apply_mutation(ticket, Mutation::Update, outcome);
            });
        }
    };

    let snapshot = roster.read().clone();
    let username = session().username().unwrap_or_default().to_string();

    rsx! {
        div {
            class: "roster-page",
            div {
                class: "roster-header",
                h1 { "Usuarios Registrados" }
                span { class: "muted", "{username}" }
                BackToStartButton { class: "secondary" }
            }

            if let Some(notice) = snapshot.notice() {
                div {
                    class: if notice.level == NoticeLevel::Error { "notice error" } else { "notice success" },
                    span { "{notice.text}" }
                    button {
                        class: "icon-button",
                        title: "Cerrar",
                        onclick: move |_| roster.write().dismiss_notice(),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }

            if snapshot.is_stale() {
                div {
                    class: "notice warning",
                    span { "La lista puede estar desactualizada" }
                    button {
                        class: "icon-button",
                        title: "Recargar",
                        onclick: reload,
                        Icon { icon: FaRotateRight, width: 12, height: 12 }
                    }
                }
            }

            if let Some(target) = snapshot.editing() {
                EditUserForm {
                    username: target.username.clone(),
                    form: snapshot.edit_form().clone(),
                    busy: snapshot.is_mutating(),
                    on_change: move |(field, value): (EditField, String)| {
                        roster.write().set_edit_field(field, value)
                    },
                    on_submit: submit_update,
                    on_cancel: move |_| roster.write().cancel_edit(),
                }
            }

            if snapshot.is_loading() && snapshot.users().is_empty() {
                p { class: "muted", "Cargando..." }
            } else if snapshot.users().is_empty() {
                p { class: "empty", "{EMPTY_ROSTER}" }
            } else {
                ul {
                    class: "user-list",
                    for user in snapshot.users().iter().cloned() {
                        li {
                            key: "{user.id}",
                            class: "card user-card",
                            div {
                                class: "user-card-body",
                                h3 { "{user.full_name}" }
                                p { class: "muted", "@{user.username}" }
                                a { href: "mailto:{user.email}", "{user.email}" }
                                p { "{user.birth_date}" }
                            }
                            div {
                                class: "user-card-actions",
                                button {
                                    class: "secondary",
                                    onclick: {
                                        let user = user.clone();
                                        move |_: MouseEvent| roster.write().edit(&user)
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                    " Editar"
                                }
                                button {
                                    class: "danger",
                                    disabled: snapshot.is_mutating(),
                                    onclick: {
                                        let id = user.id.clone();
                                        move |_: MouseEvent| roster.write().request_delete(id.clone())
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                    " Eliminar"
                                }
                            }
                        }
                    }
                }
            }

            if snapshot.pending_delete().is_some() {
                ConfirmDialog {
                    message: DELETE_CONFIRMATION.to_string(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| roster.write().cancel_delete(),
                }
            }
        }
    }
}
