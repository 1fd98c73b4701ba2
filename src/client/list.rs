//! File list store and the derived, filtered view.
//!
//! The raw list is replaced wholesale on every folder load, which also
//! resets all selection flags. The visible view is a pure function of
//! `(raw, search, type filter)` and is recomputed synchronously whenever
//! any of the three inputs changes. Selection operations always work on
//! the raw list, so flags stay consistent while a filter narrows the
//! view.

use crate::models::FileDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub file: FileDescriptor,
    pub selected: bool,
}

/// A named set of acceptable mime types. An empty `mimes` set means no
/// type restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFilter {
    pub label: String,
    pub mimes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FileListStore {
    entries: Vec<FileEntry>,
    search: String,
    type_filter: Option<TypeFilter>,
    visible: Vec<usize>,
}

impl FileListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the raw list with a fresh load. Previous entries and
    /// their selection flags are discarded.
    pub fn set_files(&mut self, files: Vec<FileDescriptor>) {
        self.entries = files
            .into_iter()
            .map(|file| FileEntry {
                file,
                selected: false,
            })
            .collect();
        self.recompute();
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_lowercase();
        self.recompute();
    }

    pub fn set_type_filter(&mut self, filter: Option<TypeFilter>) {
        self.type_filter = filter;
        self.recompute();
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// The derived view: raw entries passing both predicates, in raw
    /// order.
    pub fn visible(&self) -> Vec<&FileEntry> {
        self.visible.iter().map(|&index| &self.entries[index]).collect()
    }

    pub fn visible_names(&self) -> Vec<&str> {
        self.visible
            .iter()
            .map(|&index| self.entries[index].file.name.as_str())
            .collect()
    }

    pub fn select_all(&mut self, selected: bool) {
        for entry in &mut self.entries {
            entry.selected = selected;
        }
    }

    pub fn invert_selection(&mut self) {
        for entry in &mut self.entries {
            entry.selected = !entry.selected;
        }
    }

    pub fn select(&mut self, id: &str, selected: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.file.id == id) {
            entry.selected = selected;
        }
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.file.id.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.selected).count()
    }

    fn recompute(&mut self) {
        self.visible = visible_indices(&self.entries, &self.search, self.type_filter.as_ref());
    }
}

/// Pure derivation of the visible entries: case-insensitive substring
/// match on the name, mime membership when the filter set is non-empty.
/// `search` must already be lowercased.
fn visible_indices(
    entries: &[FileEntry],
    search: &str,
    type_filter: Option<&TypeFilter>,
) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            let search_ok =
                search.is_empty() || entry.file.name.to_lowercase().contains(search);
            let type_ok = type_filter.is_none_or(|filter| {
                filter.mimes.is_empty() || filter.mimes.iter().any(|mime| *mime == entry.file.mime)
            });
            search_ok && type_ok
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, mime: &str) -> FileDescriptor {
        FileDescriptor {
            id: name.to_string(),
            name: name.to_string(),
            thumbnail_url: format!("/uploads/{name}"),
            url: format!("/uploads/{name}"),
            mime: mime.to_string(),
            width: 0,
            height: 0,
        }
    }

    fn loaded_store() -> FileListStore {
        let mut store = FileListStore::new();
        store.set_files(vec![
            descriptor("cat.png", "image/png"),
            descriptor("doc.pdf", "application/pdf"),
        ]);
        store
    }

    #[test]
    fn search_matches_case_insensitive_substrings() {
        let mut store = loaded_store();
        store.set_search("CAT");
        assert_eq!(store.visible_names(), vec!["cat.png"]);
    }

    #[test]
    fn type_filter_matches_mime_membership() {
        let mut store = loaded_store();
        store.set_type_filter(Some(TypeFilter {
            label: "documents".to_string(),
            mimes: vec!["application/pdf".to_string()],
        }));
        assert_eq!(store.visible_names(), vec!["doc.pdf"]);
    }

    #[test]
    fn empty_mime_set_means_no_restriction() {
        let mut store = loaded_store();
        store.set_type_filter(Some(TypeFilter::default()));
        assert_eq!(store.visible_names(), vec!["cat.png", "doc.pdf"]);
    }

    #[test]
    fn non_matching_search_with_any_filter_is_empty() {
        let mut store = loaded_store();
        store.set_search("nothing");
        store.set_type_filter(Some(TypeFilter {
            label: "documents".to_string(),
            mimes: vec!["application/pdf".to_string()],
        }));
        assert!(store.visible_names().is_empty());
    }

    #[test]
    fn reload_discards_selection_state() {
        let mut store = loaded_store();
        store.select_all(true);
        assert_eq!(store.selected_count(), 2);

        store.set_files(vec![descriptor("cat.png", "image/png")]);
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn invert_twice_restores_every_flag() {
        let mut store = loaded_store();
        store.select("cat.png", true);
        let before: Vec<bool> = store.entries().iter().map(|entry| entry.selected).collect();

        store.invert_selection();
        store.invert_selection();

        let after: Vec<bool> = store.entries().iter().map(|entry| entry.selected).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn selection_operates_on_raw_entries_while_filtered() {
        let mut store = loaded_store();
        store.set_search("cat");
        store.select_all(true);

        // Both raw entries are selected even though only one is visible.
        assert_eq!(store.visible_names(), vec!["cat.png"]);
        assert_eq!(store.selected_count(), 2);
        assert_eq!(store.selected_ids(), vec!["cat.png", "doc.pdf"]);
    }

    #[test]
    fn view_recomputes_when_the_raw_list_is_replaced() {
        let mut store = loaded_store();
        store.set_search("cat");
        assert_eq!(store.visible_names(), vec!["cat.png"]);

        store.set_files(vec![descriptor("catalog.pdf", "application/pdf")]);
        assert_eq!(store.visible_names(), vec!["catalog.pdf"]);
    }
}
