//! # State crate: UI-independent application logic
//!
//! Everything the screens do that can be tested without rendering: form
//! validation, the login session, the roster workflows and the practice list.
//! Types here are plain data that the UI stores in signals; requests go through
//! any [`api::Backend`], so tests run against [`api::MemoryBackend`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`field`] | The five form fields, their normalisers and validation rules |
//! | [`form`] | [`CredentialForm`]: login / registration form and its submission |
//! | [`session`] | [`Session`]: anonymous or authenticated, and the matching [`View`] |
//! | [`presenter`] | Server error → title, description and suggestions |
//! | [`roster`] | [`Roster`]: list, edit and delete users |
//! | [`ticket`] | Request tickets that let late responses be discarded |
//! | [`practice`] | [`PracticeList`]: the DOM practice widget |

pub mod field;
pub mod form;
pub mod practice;
pub mod presenter;
pub mod roster;
pub mod session;
pub mod ticket;

pub use field::{Field, FieldError, Validation};
pub use form::{submit, CredentialForm, ErrorState, FormState, Mode, Submission, SubmitOutcome};
pub use practice::{PracticeItem, PracticeList};
pub use presenter::{present, Presentation, PresentedError};
pub use roster::{
    delete_and_refresh, fetch_users, update_and_refresh, EditField, EditForm, Mutation,
    MutationOutcome, Notice, NoticeLevel, Roster,
};
pub use session::{Session, View};
pub use ticket::{Ticket, Tickets};
