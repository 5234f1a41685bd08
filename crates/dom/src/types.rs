use input_core::InputId;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The document node every [`Document`](crate::Document) starts with.
    pub const DOCUMENT: NodeId = NodeId(0);
}

impl From<NodeId> for InputId {
    #[inline]
    fn from(id: NodeId) -> Self {
        InputId::from_raw(id.0 as u64)
    }
}

impl From<InputId> for NodeId {
    #[inline]
    fn from(id: InputId) -> Self {
        NodeId(id.as_raw() as u32)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug)]
pub(crate) struct NodeRecord {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl NodeRecord {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn allows_children(&self) -> bool {
        matches!(self.kind, NodeKind::Document | NodeKind::Element { .. })
    }
}

#[derive(Debug)]
pub(crate) enum NodeKind {
    Document,
    Element { name: Arc<str> },
    Text { text: String },
}
