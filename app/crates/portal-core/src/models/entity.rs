use std::fmt::Debug;

/// A server-owned record kept in a store collection, keyed by its id.
pub trait Entity: Clone + Debug + PartialEq {
    /// Singular label used in surfaced messages ("project")
    const LABEL: &'static str;
    /// Plural label used in surfaced messages ("projects")
    const PLURAL: &'static str;

    fn id(&self) -> &str;
}
