/// Reconciler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// Mirror controlled `value`/`checked` into the `value`/`checked` content
    /// attributes (`defaultValue`/`defaultChecked`).
    ///
    /// When disabled, the attributes are driven only by the
    /// `default_value`/`default_checked` props.
    pub attribute_syncing: bool,
}

impl SyncConfig {
    pub const fn new() -> Self {
        Self {
            attribute_syncing: true,
        }
    }

    pub const fn without_attribute_syncing(mut self) -> Self {
        self.attribute_syncing = false;
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}
