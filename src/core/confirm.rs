//! User confirmation gate for destructive operations

/// What the user is asked before a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        Self {
            title: "Are you sure you want to delete this entry?".to_string(),
            message: "This action cannot be undone.".to_string(),
        }
    }
}

/// Presentation-side collaborator that accepts or cancels a pending action.
///
/// The call blocks the flow until the user answers. Closures work too:
///
/// ```rust,ignore
/// claims.delete_confirmed("3", &|_: &ConfirmPrompt| true)?;
/// ```
pub trait Confirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmPrompt) -> bool,
{
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self(prompt)
    }
}

/// Accepts every prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        true
    }
}

/// Cancels every prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        false
    }
}

/// Outcome of a confirmed delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    Cancelled,
}
