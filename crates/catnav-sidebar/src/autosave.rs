//! Form auto-save policy.
//!
//! One narrow rule: while a form of one specific record type is being
//! edited and the record's active flag is false, every applied field
//! change saves the record immediately. No debouncing, no confirmation.

/// Editing mode of the host form view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// The form accepts field edits.
    Edit,
    /// The form is read-only.
    ReadOnly,
}

/// Snapshot of the form at the moment a field change was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormState<'a> {
    /// Record type shown by the form.
    pub model: &'a str,
    /// Current editing mode.
    pub mode: FormMode,
    /// The record's active flag.
    pub active: bool,
}

/// Save access to the host form.
pub trait FormSaver {
    /// Persist the form's current record.
    fn save_record(&mut self);
}

/// Saves inactive records of one record type on every field change.
#[derive(Debug, Clone)]
pub struct AutoSavePolicy {
    model: String,
}

impl AutoSavePolicy {
    /// Create a policy governing the given record type.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Whether a field change in this form state triggers a save.
    #[must_use]
    pub fn should_save(&self, form: &FormState<'_>) -> bool {
        form.mode == FormMode::Edit && form.model == self.model && !form.active
    }

    /// Apply the policy after a field change has been applied.
    pub fn on_field_changed(&self, form: &FormState<'_>, saver: &mut dyn FormSaver) {
        if self.should_save(form) {
            tracing::debug!(model = form.model, "auto-saving inactive record");
            saver.save_record();
        }
    }
}
