use crate::catalog::PatchCatalogEntry;

/// Insertion-ordered patch map keyed by entry name.
///
/// Re-inserting a name overwrites the stored entry but keeps its original
/// position, so accumulation order is decided by the first predicate that
/// asked for the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchAccumulator {
    entries: Vec<PatchCatalogEntry>,
}

impl PatchAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: PatchCatalogEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<PatchCatalogEntry> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PatchCatalogEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    pub fn retain(&mut self, keep: impl FnMut(&PatchCatalogEntry) -> bool) {
        self.entries.retain(keep);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<PatchCatalogEntry> {
        self.entries
    }
}
