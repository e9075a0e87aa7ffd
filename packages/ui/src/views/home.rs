use dioxus::prelude::*;
use state::View;

use crate::auth::use_session;
use crate::credential_form::CredentialFormView;
use crate::user_roster::UserRoster;

/// Credential form while anonymous, the roster once logged in.
#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let view = session.read().view();

    match view {
        View::Credentials => rsx! { CredentialFormView {} },
        View::Roster => rsx! { UserRoster {} },
    }
}
