use crate::document::Document;
use crate::types::NodeId;

impl Document {
    /// Radio inputs under `root` (inclusive) whose `name` equals `name`, in
    /// tree order. Matching is case-sensitive; form owners are not compared.
    pub fn query_radio_group(&self, root: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| {
                self.input(id)
                    .is_some_and(|st| st.is_radio() && st.name() == name)
            })
            .collect()
    }

    /// The other members of `id`'s radio group: same tree, same non-empty
    /// name, same form owner.
    pub fn radio_group_members(&self, id: NodeId) -> Vec<NodeId> {
        let Some(st) = self.input(id) else {
            return Vec::new();
        };
        if !st.is_radio() || st.name().is_empty() {
            return Vec::new();
        }

        let owner = self.form_owner(id);
        self.query_radio_group(self.root_of(id), st.name())
            .into_iter()
            .filter(|&other| other != id && self.form_owner(other) == owner)
            .collect()
    }

    /// If `id` is a checked radio, uncheck every other checked member of its
    /// group. Returns `true` if any member changed.
    pub(crate) fn enforce_radio_exclusivity(&mut self, id: NodeId) -> bool {
        if !self
            .input(id)
            .is_some_and(|st| st.is_radio() && st.checked())
        {
            return false;
        }

        let mut changed = false;
        for member in self.radio_group_members(id) {
            if let Some(st) = self.inputs.get_mut(member.into())
                && st.checked()
            {
                log::trace!(
                    target: "dom.radio",
                    "{id} became checked, unchecking {member} (name={:?})",
                    st.name()
                );
                st.clear_checkedness_for_group();
                changed = true;
            }
        }
        changed
    }
}
