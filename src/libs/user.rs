use super::child::Child;

/// Root of the in-memory data graph: the children of one family.
///
/// `revision` is bumped on every successful mutation made through the
/// managers. Callers that need to know whether data changed since a save
/// compare revisions instead of subscribing to entity events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub children: Vec<Child>,
    revision: u64,
}

impl User {
    pub fn new(children: Vec<Child>) -> Self {
        User { children, revision: 0 }
    }

    pub fn add_child(&mut self, child: Child) {
        self.children.push(child);
        self.touch();
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Comparison used for child names and activity titles, ignoring case and
/// surrounding whitespace.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    a == b || a.to_lowercase() == b.to_lowercase()
}
