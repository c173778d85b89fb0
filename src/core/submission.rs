//! Submission controller - drives one bill from file selection to the store.
//!
//! The controller owns the in-flight attachment and the identity fields (`bill_id`,
//! `file_url`, `file_name`). Those fields are only filled once the store confirms creation;
//! a rejected creation leaves them empty and is returned to the caller untouched.
//!
//! Submitting always replaces the browser's default form navigation: the controller is
//! the only thing that decides where to go after a submit.

use crate::{
    core::{
        attachment::{self, Validation},
        draft::{self, FormFields},
        navigation::{Navigator, Route},
        session::SessionContext,
    },
    errors::{Error, Result},
    models::{Attachment, Bill, BillIdentity},
    store::BillStore,
};
use tracing::{debug, error, info, instrument, warn};

/// Receives validation rejection reasons.
pub trait DiagnosticSink {
    fn report(&mut self, reason: &str);
}

/// Diagnostic sink forwarding reasons to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, reason: &str) {
        error!("{reason}");
    }
}

/// Where the controller is in the life of one bill.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// No attachment selected yet
    #[default]
    Idle,
    /// Last selected file was refused; the input has been cleared
    AttachmentRejected,
    /// A validated attachment is held
    AttachmentAccepted,
    /// Upload or creation is in flight
    Submitting,
    /// The store confirmed the bill
    Persisted,
    /// The store rejected the bill
    Failed { message: String },
}

/// Controller behind the new-bill form.
pub struct SubmissionController<S, N, D = TracingDiagnostics> {
    store: S,
    navigator: N,
    diagnostics: D,
    session: SessionContext,
    state: SubmissionState,
    attachment: Option<Attachment>,
    identity: Option<BillIdentity>,
}

impl<S, N> SubmissionController<S, N>
where
    S: BillStore,
    N: Navigator,
{
    /// Creates a controller that reports rejections through `tracing`.
    pub fn new(store: S, navigator: N, session: SessionContext) -> Self {
        Self::with_diagnostics(store, navigator, TracingDiagnostics, session)
    }
}

impl<S, N, D> SubmissionController<S, N, D>
where
    S: BillStore,
    N: Navigator,
    D: DiagnosticSink,
{
    pub fn with_diagnostics(store: S, navigator: N, diagnostics: D, session: SessionContext) -> Self {
        Self {
            store,
            navigator,
            diagnostics,
            session,
            state: SubmissionState::Idle,
            attachment: None,
            identity: None,
        }
    }

    /// Handles a new file selection.
    ///
    /// An accepted file replaces any previous one, renamed to its canonical name. A rejected
    /// file is reported to the diagnostic sink and clears the input, so no stale file can be
    /// submitted afterwards.
    #[instrument(skip(self, file), fields(file_name = %file.file_name, mime_type = %file.mime_type))]
    pub fn on_attachment_selected(&mut self, file: Attachment) -> Validation {
        let validation = attachment::validate(&file);
        self.identity = None;
        match &validation {
            Validation::Accepted { name, .. } => {
                debug!("Accepted attachment {name}");
                self.attachment = Some(Attachment {
                    file_name: name.clone(),
                    ..file
                });
                self.state = SubmissionState::AttachmentAccepted;
            }
            Validation::Rejected { reason } => {
                self.diagnostics.report(reason);
                self.attachment = None;
                self.state = SubmissionState::AttachmentRejected;
            }
        }
        validation
    }

    /// Submits the form.
    ///
    /// Uploads the held attachment, creates the bill from `form` and, once the store
    /// confirms, records the identity and navigates to the bill list.
    ///
    /// # Errors
    /// - `Error::SubmissionInProgress` while an earlier submit has not resolved
    /// - `Error::MissingAttachment` when no file has been accepted; nothing is sent
    /// - any form validation error from [`draft::assemble`]; nothing is sent
    /// - the store's rejection, unchanged; identity fields stay empty and nothing is retried
    #[instrument(skip(self, form), fields(email = %self.session.email))]
    pub async fn on_submit(&mut self, form: &FormFields) -> Result<Bill> {
        if self.state == SubmissionState::Submitting {
            warn!("Ignoring submit while a previous one is in flight");
            return Err(Error::SubmissionInProgress);
        }
        let Some(attachment) = self.attachment.as_ref() else {
            warn!("Submit without an accepted attachment");
            return Err(Error::MissingAttachment);
        };

        let mut bill = draft::assemble(form, &self.session)?;
        self.identity = None;
        self.state = SubmissionState::Submitting;

        let result = match self.store.upload(attachment, &self.session.email).await {
            Ok(upload) => self.store.create(&bill, &upload).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(identity) => {
                info!("Bill {} created", identity.id);
                bill.identity = Some(identity.clone());
                self.identity = Some(identity);
                self.attachment = None;
                self.state = SubmissionState::Persisted;
                self.navigator.navigate(Route::Bills);
                Ok(bill)
            }
            Err(e) => {
                error!("Bill creation failed: {e}");
                self.state = SubmissionState::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Navigates to `route`, whatever the submission state.
    pub fn request_navigation(&mut self, route: Route) {
        self.navigator.navigate(route);
    }

    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Attachment currently held by the file input, if any.
    #[must_use]
    pub const fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    #[must_use]
    pub fn bill_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.id.as_str())
    }

    #[must_use]
    pub fn file_url(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.file_url.as_str())
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.file_name.as_str())
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    #[must_use]
    pub const fn diagnostics(&self) -> &D {
        &self.diagnostics
    }
}
