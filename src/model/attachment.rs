//! The ordered attachment list and its preview-file lifecycle.

use std::path::{Path, PathBuf};

use super::blob::FileBlob;

/// A transient on-disk preview copy of an image attachment.
///
/// The terminal cannot render the blob inline, so image attachments get a
/// copy written under the cache directory that an external viewer can open
/// from the preview pane. The file is owned exclusively by its attachment
/// entry: it is written once, lazily, and deleted exactly once when the
/// handle is dropped (attachment removed, composition reset or discarded).
#[derive(Debug)]
pub struct PreviewHandle {
    path: PathBuf,
}

impl PreviewHandle {
    /// Write `blob` to a preview file under `dir`.
    ///
    /// Returns `None` if the file cannot be written; the preview pane then
    /// simply shows no path. `seq` keeps names unique across the session so
    /// two attachments with the same file name never share a preview file.
    fn create(dir: &Path, seq: u64, blob: &FileBlob) -> Option<Self> {
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "Cannot create preview directory");
            return None;
        }

        let path = dir.join(format!("{seq:04}_{}", sanitize_name(&blob.name)));
        match std::fs::write(&path, &blob.bytes) {
            Ok(()) => Some(Self { path }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot write preview file");
                None
            }
        }
    }

    /// Path of the preview file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        // The file may already be gone (cache cleanup, external deletion);
        // releasing a missing preview is a no-op.
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Sanitize a blob name for use as a preview file name.
fn sanitize_name(s: &str) -> String {
    let sanitized: String = s
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '.' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(120)
        .collect();

    if sanitized.is_empty() {
        "attachment".to_string()
    } else {
        sanitized
    }
}

/// One attached file plus its free-text description.
#[derive(Debug)]
pub struct Attachment {
    /// The attached file content.
    pub blob: FileBlob,

    /// Free-text description, edited independently per attachment.
    pub description: String,

    /// Lazily created preview file for image blobs.
    preview: Option<PreviewHandle>,
}

impl Attachment {
    fn new(blob: FileBlob) -> Self {
        Self {
            blob,
            description: String::new(),
            preview: None,
        }
    }

    /// Whether the blob is an image.
    pub fn is_image(&self) -> bool {
        self.blob.is_image()
    }

    /// Path of the preview file, if one has been created.
    pub fn preview_path(&self) -> Option<&Path> {
        self.preview.as_ref().map(PreviewHandle::path)
    }
}

/// Ordered collection of attachments.
///
/// Reads always reflect insertion order minus removals — entries are never
/// resorted, and removing one shifts everything after it down by one.
#[derive(Debug)]
pub struct AttachmentList {
    items: Vec<Attachment>,
    preview_dir: PathBuf,
    /// Monotonic counter for preview file names.
    next_preview: u64,
}

impl AttachmentList {
    /// Create an empty list. Image previews are written under `preview_dir`.
    pub fn new(preview_dir: PathBuf) -> Self {
        Self {
            items: Vec::new(),
            preview_dir,
            next_preview: 0,
        }
    }

    /// Append each blob as a new attachment with an empty description,
    /// preserving input order, after all existing entries.
    ///
    /// Duplicate blobs (by name) are allowed and not deduplicated.
    pub fn append(&mut self, blobs: Vec<FileBlob>) {
        self.items.extend(blobs.into_iter().map(Attachment::new));
    }

    /// Replace the description at `index`. Silent no-op if out of range.
    pub fn set_description(&mut self, index: usize, text: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            item.description = text.into();
        }
    }

    /// Remove the attachment at `index`; later entries shift down by one.
    /// Silent no-op if out of range. The entry's preview file (if any) is
    /// deleted when the removed attachment drops.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Remove all attachments, releasing every preview file.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of attachments.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The attachment at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Attachment> {
        self.items.get(index)
    }

    /// Iterate over attachments in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attachment> {
        self.items.iter()
    }

    /// Ensure the attachment at `index` has a preview file if it is an
    /// image, returning the preview path.
    ///
    /// Non-image attachments never get one. Creation happens at most once
    /// per entry; a failed write is retried on the next call.
    pub(crate) fn ensure_preview(&mut self, index: usize) -> Option<PathBuf> {
        let seq = self.next_preview;
        let item = self.items.get_mut(index)?;
        if !item.blob.is_image() {
            return None;
        }
        if item.preview.is_none() {
            item.preview = PreviewHandle::create(&self.preview_dir, seq, &item.blob);
            if item.preview.is_some() {
                self.next_preview += 1;
            }
        }
        item.preview.as_ref().map(|h| h.path().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(name: &str, mime: &str) -> FileBlob {
        FileBlob::new(name, mime, name.as_bytes().to_vec())
    }

    fn list() -> (AttachmentList, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        (AttachmentList::new(dir.path().to_path_buf()), dir)
    }

    #[test]
    fn test_append_preserves_input_order() {
        let (mut l, _dir) = list();
        l.append(vec![blob("a.txt", "text/plain"), blob("b.txt", "text/plain")]);
        l.append(vec![blob("c.txt", "text/plain")]);

        let names: Vec<&str> = l.iter().map(|a| a.blob.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let (mut l, _dir) = list();
        l.append(vec![blob("same.txt", "text/plain"), blob("same.txt", "text/plain")]);
        assert_eq!(l.len(), 2);
    }

    #[test]
    fn test_set_description_targets_one_position() {
        let (mut l, _dir) = list();
        l.append(vec![blob("a.txt", "text/plain"), blob("b.txt", "text/plain")]);
        l.set_description(1, "report");

        assert_eq!(l.get(0).unwrap().description, "");
        assert_eq!(l.get(1).unwrap().description, "report");
    }

    #[test]
    fn test_set_description_out_of_range_is_noop() {
        let (mut l, _dir) = list();
        l.append(vec![blob("a.txt", "text/plain")]);
        l.set_description(5, "ignored");
        assert_eq!(l.get(0).unwrap().description, "");
    }

    #[test]
    fn test_remove_shifts_following_entries() {
        let (mut l, _dir) = list();
        l.append(vec![
            blob("a.txt", "text/plain"),
            blob("b.txt", "text/plain"),
            blob("c.txt", "text/plain"),
        ]);
        l.set_description(2, "third");

        l.remove(1);

        assert_eq!(l.len(), 2);
        assert_eq!(l.get(0).unwrap().blob.name, "a.txt");
        // c.txt moved from index 2 to index 1, keeping blob and description
        assert_eq!(l.get(1).unwrap().blob.name, "c.txt");
        assert_eq!(l.get(1).unwrap().description, "third");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let (mut l, _dir) = list();
        l.append(vec![blob("a.txt", "text/plain")]);
        l.remove(3);
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn test_interleaved_ops_keep_insertion_order() {
        let (mut l, _dir) = list();
        l.append(vec![blob("1", "text/plain"), blob("2", "text/plain")]);
        l.remove(0);
        l.append(vec![blob("3", "text/plain")]);
        l.set_description(0, "two");
        l.append(vec![blob("4", "text/plain")]);
        l.remove(2);

        let names: Vec<&str> = l.iter().map(|a| a.blob.name.as_str()).collect();
        assert_eq!(names, ["2", "3"]);
        assert_eq!(l.get(0).unwrap().description, "two");
    }

    #[test]
    fn test_preview_only_for_images() {
        let (mut l, _dir) = list();
        l.append(vec![blob("a.png", "image/png"), blob("b.txt", "text/plain")]);

        assert!(l.ensure_preview(0).is_some());
        assert!(l.ensure_preview(1).is_none());
        assert!(l.ensure_preview(9).is_none());
    }

    #[test]
    fn test_preview_file_written_once_and_removed_on_drop() {
        let (mut l, _dir) = list();
        l.append(vec![blob("pic.png", "image/png")]);

        let first = l.ensure_preview(0).expect("preview");
        let second = l.ensure_preview(0).expect("preview");
        assert_eq!(first, second, "preview must be created at most once");
        assert!(first.exists());
        assert_eq!(std::fs::read(&first).unwrap(), b"pic.png");

        l.remove(0);
        assert!(!first.exists(), "removal must delete the preview file");
    }

    #[test]
    fn test_clear_releases_all_previews() {
        let (mut l, _dir) = list();
        l.append(vec![blob("x.png", "image/png"), blob("y.jpg", "image/jpeg")]);
        let p0 = l.ensure_preview(0).expect("preview");
        let p1 = l.ensure_preview(1).expect("preview");

        l.clear();
        assert!(!p0.exists());
        assert!(!p1.exists());
    }

    #[test]
    fn test_duplicate_image_names_get_distinct_previews() {
        let (mut l, _dir) = list();
        l.append(vec![blob("a.png", "image/png"), blob("a.png", "image/png")]);
        let p0 = l.ensure_preview(0).expect("preview");
        let p1 = l.ensure_preview(1).expect("preview");
        assert_ne!(p0, p1);
    }

    #[test]
    fn test_deleting_preview_file_externally_is_harmless() {
        let (mut l, _dir) = list();
        l.append(vec![blob("a.png", "image/png")]);
        let p = l.ensure_preview(0).expect("preview");
        std::fs::remove_file(&p).expect("external delete");
        // Dropping the attachment must not fault on the missing file.
        l.remove(0);
    }
}
