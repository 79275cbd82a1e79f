//! Generic list-with-create state shared by the project and rating pages.
//!
//! DESIGN
//! ======
//! Both list pages follow the same cycle: fetch on mount, render, open a
//! modal, POST a draft, then refetch. `ResourceList` holds that cycle once,
//! parameterized by the entity `T` and the form draft `D`, so the two pages
//! cannot drift apart in how they load, report errors, or reset forms.
//!
//! Load phases: `Idle → Loading → {Ready | Failed}`. The form cycle is
//! orthogonal: `closed ⇄ open → submitting → {closed | open + error}`.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

/// Progress of the list fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// A draft that cannot be turned into a request body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Select a project")]
    MissingProject,
    #[error("Selected project no longer exists")]
    UnknownProject,
}

/// Creation modal state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<D> {
    pub open: bool,
    pub submitting: bool,
    pub draft: D,
}

/// List items plus load, error, and creation-form state for one page.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceList<T, D> {
    /// Last successfully fetched items; replaced wholesale on every fetch.
    pub items: Vec<T>,
    pub phase: LoadPhase,
    /// Banner text. Set by failed loads and failed submits.
    pub error: Option<String>,
    pub form: FormState<D>,
}

impl<T, D: Default> Default for ResourceList<T, D> {
    fn default() -> Self {
        Self { items: Vec::new(), phase: LoadPhase::Idle, error: None, form: FormState::default() }
    }
}

impl<T, D: Default> ResourceList<T, D> {
    /// State of a page that has just mounted and issued its first fetch.
    pub fn loading() -> Self {
        Self { phase: LoadPhase::Loading, ..Self::default() }
    }

    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Apply a fetch result. Failures keep the previous items.
    pub fn finish_load(&mut self, result: Result<Vec<T>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Ready;
                self.error = None;
            }
            Err(message) => {
                self.phase = LoadPhase::Failed;
                self.error = Some(message);
            }
        }
    }

    pub fn open_form(&mut self) {
        self.form.open = true;
    }

    /// Hide the modal. The draft is kept so reopening shows the same input.
    pub fn close_form(&mut self) {
        self.form.open = false;
    }

    /// Mark a submit in flight. Returns `false` if one already is.
    pub fn begin_submit(&mut self) -> bool {
        if self.form.submitting {
            return false;
        }
        self.form.submitting = true;
        true
    }

    pub fn submit_succeeded(&mut self) {
        self.form = FormState::default();
        self.error = None;
    }

    /// Keep the modal open with the user's draft and show `message`.
    pub fn submit_failed(&mut self, message: String) {
        self.form.submitting = false;
        self.form.open = true;
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// The first fetch (or a retry) is outstanding.
    pub fn is_initial_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn show_empty_state(&self) -> bool {
        self.phase == LoadPhase::Ready && self.items.is_empty()
    }

    /// The last load failed. Stays true after the banner is dismissed.
    pub fn can_retry(&self) -> bool {
        self.phase == LoadPhase::Failed
    }
}
