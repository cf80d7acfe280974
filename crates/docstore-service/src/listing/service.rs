//! Merges folders and documents into one sorted, paginated sequence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use docstore_core::result::AppResult;
use docstore_core::types::{
    DocumentFilter, PageRequest, PageResponse, ParentFilter, SortDirection, SortKey,
};
use docstore_database::repositories::document::DocumentRepository;
use docstore_database::repositories::folder::FolderRepository;
use docstore_entity::listing::FileEntry;

/// Query parameters for the unified listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Level to list; the unified listing defaults to root, not "anywhere".
    pub folder: ParentFilter,
    /// Case-insensitive substring match on entry names.
    pub search: Option<String>,
    /// Sort key.
    pub sort: SortKey,
    /// Sort direction.
    pub direction: SortDirection,
    /// Page selection.
    pub page: PageRequest,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            folder: ParentFilter::Root,
            search: None,
            sort: SortKey::default(),
            direction: SortDirection::default(),
            page: PageRequest::default(),
        }
    }
}

/// Produces the polymorphic folder+document listing.
#[derive(Debug, Clone)]
pub struct ListingService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(folder_repo: Arc<FolderRepository>, document_repo: Arc<DocumentRepository>) -> Self {
        Self {
            folder_repo,
            document_repo,
        }
    }

    /// Lists folders and documents at one level as a single sorted,
    /// paginated sequence.
    ///
    /// `total` is the folder-match-count plus the document-match-count for
    /// the active filter; the merged sequence is sorted in memory and sliced
    /// by the page request.
    pub async fn list(&self, query: &ListingQuery) -> AppResult<PageResponse<FileEntry>> {
        let folders = self.folder_repo.find_all(query.folder).await?;

        let doc_filter = DocumentFilter {
            folder: query.folder,
            search: query.search.clone(),
            ..DocumentFilter::default()
        };
        let documents = self.document_repo.find_all(&doc_filter).await?;

        let mut entries: Vec<FileEntry> = folders
            .into_iter()
            .filter(|f| matches_search(&f.name, query.search.as_deref()))
            .map(FileEntry::from)
            .collect();
        entries.extend(documents.into_iter().map(FileEntry::from));

        let total = entries.len() as u64;
        sort_entries(&mut entries, query.sort, query.direction);
        let items = paginate(entries, &query.page);

        Ok(PageResponse::new(items, &query.page, total))
    }
}

/// Case-insensitive substring match, mirroring the ILIKE semantics used for
/// documents.
fn matches_search(name: &str, search: Option<&str>) -> bool {
    match search {
        Some(needle) if !needle.is_empty() => {
            name.to_lowercase().contains(&needle.to_lowercase())
        }
        _ => true,
    }
}

/// Sort the merged sequence in place. The sort is stable, so ties keep the
/// order the merge produced.
fn sort_entries(entries: &mut [FileEntry], sort: SortKey, direction: SortDirection) {
    entries.sort_by(|a, b| {
        let ordering = match sort {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Type => a.kind.label().cmp(b.kind.label()),
            SortKey::Size => a.sort_size().cmp(&b.sort_size()),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Slice the sorted sequence by `(page-1)*limit .. +limit`.
fn paginate(entries: Vec<FileEntry>, page: &PageRequest) -> Vec<FileEntry> {
    let offset = page.offset() as usize;
    entries
        .into_iter()
        .skip(offset)
        .take(page.limit as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use docstore_entity::document::Document;
    use docstore_entity::folder::Folder;

    fn folder_entry(id: i64, name: &str, minute: u32) -> FileEntry {
        FileEntry::from(Folder {
            id,
            name: name.to_string(),
            parent_id: None,
            created_by: "alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, minute, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, minute, 0).unwrap(),
        })
    }

    fn document_entry(id: i64, name: &str, size: i64, minute: u32) -> FileEntry {
        FileEntry::from(Document {
            id,
            name: name.to_string(),
            doc_type: "pdf".to_string(),
            size_bytes: size,
            folder_id: None,
            created_by: "alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, minute, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, minute, 0).unwrap(),
        })
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let mut entries = vec![
            document_entry(1, "zeta.pdf", 10, 0),
            folder_entry(2, "Alpha", 1),
            document_entry(3, "midway.pdf", 20, 2),
        ];
        sort_entries(&mut entries, SortKey::Name, SortDirection::Asc);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "midway.pdf", "zeta.pdf"]);
    }

    #[test]
    fn test_sort_by_size_treats_folders_as_zero() {
        let mut entries = vec![
            document_entry(1, "big.pdf", 4096, 0),
            folder_entry(2, "Stuff", 1),
            document_entry(3, "small.pdf", 12, 2),
        ];
        sort_entries(&mut entries, SortKey::Size, SortDirection::Asc);
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_type_groups_kinds() {
        let mut entries = vec![
            folder_entry(1, "A", 0),
            document_entry(2, "b.pdf", 1, 1),
            folder_entry(3, "C", 2),
        ];
        sort_entries(&mut entries, SortKey::Type, SortDirection::Asc);
        // "document" < "folder" lexicographically.
        assert_eq!(entries[0].id, 2);
    }

    #[test]
    fn test_sort_by_created_at_descending_is_default_shape() {
        let mut entries = vec![
            document_entry(1, "old.pdf", 1, 0),
            document_entry(2, "new.pdf", 1, 30),
        ];
        sort_entries(&mut entries, SortKey::CreatedAt, SortDirection::Desc);
        assert_eq!(entries[0].id, 2);
    }

    #[test]
    fn test_pagination_slices_sorted_sequence() {
        let entries: Vec<FileEntry> = (0..20)
            .map(|i| document_entry(i, &format!("doc{i:02}.pdf"), i, i as u32))
            .collect();

        let page = PageRequest::new(2, 5);
        let slice = paginate(entries.clone(), &page);
        assert_eq!(slice.len(), 5);
        assert_eq!(slice[0].id, 5);
        assert_eq!(slice[4].id, 9);

        // Re-requesting the same page yields the identical slice.
        let again = paginate(entries, &page);
        let ids: Vec<i64> = slice.iter().map(|e| e.id).collect();
        let again_ids: Vec<i64> = again.iter().map(|e| e.id).collect();
        assert_eq!(ids, again_ids);
    }

    #[test]
    fn test_pagination_past_the_end_is_empty() {
        let entries = vec![folder_entry(1, "Only", 0)];
        let slice = paginate(entries, &PageRequest::new(3, 10));
        assert!(slice.is_empty());
    }

    #[test]
    fn test_page_response_totals() {
        let page = PageRequest::new(2, 5);
        let items: Vec<FileEntry> = (5..10)
            .map(|i| document_entry(i, &format!("doc{i}.pdf"), i, i as u32))
            .collect();
        let resp = PageResponse::new(items, &page, 20);
        assert_eq!(resp.total, 20);
        assert_eq!(resp.total_pages, 4);
        assert_eq!(resp.items.len(), 5);
    }

    #[test]
    fn test_search_matches_case_insensitively() {
        assert!(matches_search("Quarterly Report.pdf", Some("report")));
        assert!(matches_search("anything", None));
        assert!(matches_search("anything", Some("")));
        assert!(!matches_search("notes.txt", Some("report")));
    }
}
