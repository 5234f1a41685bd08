use crate::types::NodeId;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomError {
    MissingNode(NodeId),
    NotAnInput(NodeId),
    InvalidParent(NodeId),
    AlreadyAttached(NodeId),
    NotAChild { parent: NodeId, child: NodeId },
    CycleDetected { parent: NodeId, child: NodeId },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::MissingNode(id) => write!(f, "{id} does not exist"),
            DomError::NotAnInput(id) => write!(f, "{id} is not an <input> element"),
            DomError::InvalidParent(id) => write!(f, "{id} cannot have children"),
            DomError::AlreadyAttached(id) => write!(f, "{id} already has a parent"),
            DomError::NotAChild { parent, child } => {
                write!(f, "{child} is not a child of {parent}")
            }
            DomError::CycleDetected { parent, child } => {
                write!(f, "appending {child} to {parent} would create a cycle")
            }
        }
    }
}

impl std::error::Error for DomError {}
