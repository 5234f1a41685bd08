use crate::error::DomError;
use crate::types::{NodeId, NodeKind, NodeRecord};
use input_core::{InputId, InputState, InputStore, InputValueStore, WrapperState};
use std::sync::Arc;

/// Arena of nodes rooted at [`NodeId::DOCUMENT`].
///
/// Nodes are never freed; detached subtrees keep their ids and can be
/// re-attached. Node ids double as [`InputId`]s for the inputs they host.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeRecord>,
    pub(crate) inputs: InputValueStore,
    active: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeRecord::new(NodeKind::Document)],
            inputs: InputValueStore::new(),
            active: None,
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a detached element. `<input>` elements get a clean `text` state.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        if name.eq_ignore_ascii_case("input") {
            return self.create_input(InputState::new("text"));
        }
        self.push(NodeKind::Element {
            name: Arc::from(name),
        })
    }

    /// Create a detached `<input>` with the given live state.
    pub fn create_input(&mut self, state: InputState) -> NodeId {
        let id = self.push(NodeKind::Element {
            name: Arc::from("input"),
        });
        self.inputs.insert(id.into(), state);
        id
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text {
            text: text.to_string(),
        })
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord::new(kind));
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.record(child)?;
        if !self.record(parent)?.allows_children() {
            return Err(DomError::InvalidParent(parent));
        }
        if parent == child || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::CycleDetected { parent, child });
        }
        if self.nodes[child.0 as usize].parent.is_some() {
            return Err(DomError::AlreadyAttached(child));
        }

        self.nodes[parent.0 as usize].children.push(child);
        self.nodes[child.0 as usize].parent = Some(parent);

        // Inserted checked radios claim their group.
        for id in self.descendants(child) {
            self.enforce_radio_exclusivity(id);
        }
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.record(parent)?;
        if self.record(child)?.parent != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.nodes[parent.0 as usize].children.retain(|&c| c != child);
        self.nodes[child.0 as usize].parent = None;
        Ok(())
    }

    // =========================================================================
    // Tree queries
    // =========================================================================

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0 as usize).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0 as usize)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id.0 as usize)?.kind {
            NodeKind::Element { name } => Some(name),
            _ => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id.0 as usize)?.kind {
            NodeKind::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Topmost ancestor reached by walking parent links.
    ///
    /// For a connected node this is [`NodeId::DOCUMENT`]; for a node in a
    /// detached subtree it is the subtree's root.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.root_of(id) == NodeId::DOCUMENT
    }

    /// The nearest `<form>` ancestor, or `None` when the element is scoped to
    /// its tree.
    pub fn form_owner(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if self
                .tag_name(node)
                .is_some_and(|name| name.eq_ignore_ascii_case("form"))
            {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// `root` and all of its descendants in tree order.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if self.nodes.get(current.0 as usize).is_none() {
                continue;
            }
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn record(&self, id: NodeId) -> Result<&NodeRecord, DomError> {
        self.nodes
            .get(id.0 as usize)
            .ok_or(DomError::MissingNode(id))
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focus(&mut self, id: NodeId) -> Result<(), DomError> {
        self.record(id)?;
        self.active = Some(id);
        Ok(())
    }

    pub fn blur(&mut self) {
        self.active = None;
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    pub fn input(&self, id: NodeId) -> Option<&InputState> {
        self.inputs.get(id.into())
    }

    /// Direct access to an input's state, bypassing radio-group behavior.
    pub fn input_mut(&mut self, id: NodeId) -> Option<&mut InputState> {
        self.inputs.get_mut(id.into())
    }

    pub fn expect_input(&self, id: NodeId) -> Result<&InputState, DomError> {
        self.record(id)?;
        self.input(id).ok_or(DomError::NotAnInput(id))
    }

    /// Activation behavior of a checkbox or radio, as a user click performs it.
    ///
    /// Returns `true` if any checkedness changed.
    pub fn click(&mut self, id: NodeId) -> Result<bool, DomError> {
        let st = self.expect_input(id)?;
        let before = st.checked();
        let next = match st.input_type() {
            "checkbox" => !before,
            "radio" => true,
            _ => return Ok(false),
        };

        let mut changed = before != next;
        if let Some(st) = self.input_mut(id) {
            st.user_set_checked(next);
        }
        changed |= self.enforce_radio_exclusivity(id);
        Ok(changed)
    }
}

impl InputStore for Document {
    #[inline]
    fn input(&self, id: InputId) -> Option<&InputState> {
        self.inputs.get(id)
    }

    #[inline]
    fn is_active(&self, id: InputId) -> bool {
        self.active == Some(NodeId::from(id))
    }

    fn set_value(&mut self, id: InputId, value: String) {
        self.inputs.set_value(id, value);
    }

    fn set_default_value(&mut self, id: InputId, value: String) {
        self.inputs.set_default_value(id, value);
    }

    fn remove_value_attribute(&mut self, id: InputId) {
        self.inputs.remove_value_attribute(id);
    }

    fn set_checked(&mut self, id: InputId, checked: bool) {
        self.inputs.set_checked(id, checked);
        self.enforce_radio_exclusivity(id.into());
    }

    fn set_default_checked(&mut self, id: InputId, checked: bool) {
        self.inputs.set_default_checked(id, checked);
        self.enforce_radio_exclusivity(id.into());
    }

    fn set_name(&mut self, id: InputId, name: String) {
        self.inputs.set_name(id, name);
        self.enforce_radio_exclusivity(id.into());
    }

    fn set_wrapper_state(&mut self, id: InputId, wrapper: WrapperState) {
        self.inputs.set_wrapper_state(id, wrapper);
    }
}
