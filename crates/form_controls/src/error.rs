use dom::DomError;
use input_core::InputId;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncError {
    Dom(DomError),
    /// The target of a reconcile call has no input state.
    MissingInput(InputId),
    /// A radio sharing the group's name has no registered props, i.e. it is
    /// not managed by this library. Unsupported; the restore stops here.
    UnmanagedRadioSibling { sibling: InputId, name: String },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Dom(err) => write!(f, "{err}"),
            SyncError::MissingInput(id) => write!(f, "input {id} is not known to the store"),
            SyncError::UnmanagedRadioSibling { sibling, name } => write!(
                f,
                "radio input {sibling} shares the name {name:?} but is not managed; \
                 mixing managed and unmanaged radio inputs with the same name is not supported"
            ),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::Dom(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomError> for SyncError {
    fn from(err: DomError) -> Self {
        SyncError::Dom(err)
    }
}
