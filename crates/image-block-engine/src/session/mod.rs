//! Edit session for the image insert/edit drawer.
//!
//! One [`EditSession`] per editor. It only holds transient UI state; the
//! document is read on [`EditSession::open`] and written once, through the
//! insertion command, on [`EditSession::save`].

mod asset;

pub use asset::LibraryAsset;

use std::fmt;

use crate::editing::{EditorHost, Patch, TransactionError};
use crate::image::{ImageAttributes, ImageNode, SetImage};

/// Snapshot of the session handed to observers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_open: bool,
    pub selection: Option<ImageAttributes>,
    /// Raw text of the URL input, separate from `selection.src` until applied
    pub pending_url_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Inserted(Patch),
    /// Nothing was selected, the save acted as a cancel
    Skipped,
    Rejected(TransactionError),
}

type Observer = Box<dyn FnMut(&SessionState)>;

#[derive(Default)]
pub struct EditSession {
    state: SessionState,
    observers: Vec<Observer>,
}

impl fmt::Debug for EditSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSession")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn selection(&self) -> Option<&ImageAttributes> {
        self.state.selection.as_ref()
    }

    pub fn pending_url_text(&self) -> &str {
        &self.state.pending_url_text
    }

    /// Register a callback run after every state change
    pub fn subscribe(&mut self, observer: impl FnMut(&SessionState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Open the drawer, seeded from the image under the cursor if there is one
    pub fn open<E: EditorHost + ?Sized>(&mut self, editor: &E) {
        let existing = editor
            .is_active(ImageNode::NAME)
            .then(|| editor.get_attributes(ImageNode::NAME))
            .flatten();

        match existing {
            Some(attrs) => {
                log::debug!("Editing existing image {attrs:?}");
                self.state.pending_url_text = attrs.src.clone().unwrap_or_default();
                self.state.selection = Some(attrs);
            }
            None => {
                self.state.selection = None;
                self.state.pending_url_text.clear();
            }
        }
        self.state.is_open = true;
        self.notify();
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
        self.state.selection = None;
        self.state.pending_url_text.clear();
        self.notify();
    }

    /// Insert the selection as one focus+insert transaction, then close.
    ///
    /// The session ends closed whatever the outcome.
    pub fn save<E: EditorHost>(&mut self, editor: &mut E) -> SaveOutcome {
        let outcome = match self.state.selection.take() {
            Some(attrs) => match editor.chain().focus().set_image(attrs).run() {
                Ok(patch) => SaveOutcome::Inserted(patch),
                Err(err) => {
                    log::warn!("Image insertion rejected: {err}");
                    SaveOutcome::Rejected(err)
                }
            },
            None => SaveOutcome::Skipped,
        };
        self.close();
        outcome
    }

    pub fn select_from_library(&mut self, asset: &LibraryAsset) {
        self.state.selection = Some(ImageAttributes::from(asset));
        self.notify();
    }

    /// Replace the selection with an external image; empty `url` is ignored
    pub fn set_direct_url(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        self.state.selection = Some(ImageAttributes {
            alt: Some(String::new()),
            ..ImageAttributes::external(url)
        });
        self.notify();
    }

    pub fn set_pending_url_text(&mut self, text: impl Into<String>) {
        self.state.pending_url_text = text.into();
        self.notify();
    }

    /// Apply the typed URL through [`Self::set_direct_url`]
    pub fn apply_pending_url(&mut self) {
        let url = self.state.pending_url_text.clone();
        self.set_direct_url(&url);
    }

    /// Edit the selection in place (alt text, dimensions, caption)
    pub fn update_selection(&mut self, edit: impl FnOnce(&mut ImageAttributes)) {
        if let Some(selection) = self.state.selection.as_mut() {
            edit(selection);
            self.notify();
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{Document, Node, Step};
    use crate::tests::document_with_selected_image;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn library_asset() -> LibraryAsset {
        LibraryAsset {
            id: "5".into(),
            title: Some("t".into()),
            filename_download: Some("f.jpg".into()),
            width: Some(10),
            height: Some(20),
        }
    }

    #[test]
    fn open_on_existing_image_copies_attributes() {
        let attrs = ImageAttributes {
            alt: Some("cat".into()),
            ..ImageAttributes::external("https://example.com/cat.png")
        };
        let doc = document_with_selected_image(attrs.clone());
        let mut session = EditSession::new();

        session.open(&doc);

        assert!(session.is_open());
        assert_eq!(session.selection(), Some(&attrs));
        assert_eq!(session.pending_url_text(), "https://example.com/cat.png");
    }

    #[test]
    fn open_on_asset_image_has_empty_pending_url() {
        let doc = document_with_selected_image(ImageAttributes {
            alt: Some("cat".into()),
            ..ImageAttributes::asset("abc")
        });
        let mut session = EditSession::new();

        session.open(&doc);

        assert_eq!(session.selection().and_then(|s| s.alt.as_deref()), Some("cat"));
        assert_eq!(session.pending_url_text(), "");
    }

    #[test]
    fn open_without_image_clears_previous_state() {
        let doc = Document::from_nodes(vec![Node::paragraph("text")]);
        let mut session = EditSession::new();
        session.set_direct_url("https://example.com/a.png");
        session.set_pending_url_text("typed");

        session.open(&doc);

        assert!(session.is_open());
        assert_eq!(session.selection(), None);
        assert_eq!(session.pending_url_text(), "");
    }

    #[test]
    fn close_after_open_resets_everything() {
        let doc = document_with_selected_image(ImageAttributes::external("a.png"));
        let mut session = EditSession::new();
        session.open(&doc);

        session.close();

        assert_eq!(session.state(), &SessionState::default());
    }

    #[test]
    fn close_is_idempotent() {
        let mut session = EditSession::new();
        session.close();
        session.close();

        assert_eq!(session.state(), &SessionState::default());
    }

    #[test]
    fn save_without_selection_does_not_insert() {
        let mut doc = Document::from_nodes(vec![Node::paragraph("text")]);
        let mut session = EditSession::new();
        session.open(&doc);

        let outcome = session.save(&mut doc);

        assert_eq!(outcome, SaveOutcome::Skipped);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.version(), 0);
        assert!(!doc.is_focused());
        assert!(!session.is_open());
    }

    #[test]
    fn save_inserts_and_focuses() {
        let mut doc = Document::from_nodes(vec![Node::paragraph("text")]);
        let mut session = EditSession::new();
        session.open(&doc);
        session.select_from_library(&library_asset());

        let outcome = session.save(&mut doc);

        assert!(matches!(outcome, SaveOutcome::Inserted(ref patch) if patch.version == 1));
        assert_eq!(
            doc.nodes()[1].image_attributes().and_then(|a| a.id.as_deref()),
            Some("5")
        );
        assert!(doc.is_focused());
        assert_eq!(session.state(), &SessionState::default());
    }

    #[test]
    fn save_replaces_edited_image() {
        let mut doc = document_with_selected_image(ImageAttributes::asset("abc"));
        let mut session = EditSession::new();
        session.open(&doc);
        session.update_selection(|attrs| attrs.title = Some("Caption".into()));

        session.save(&mut doc);

        assert_eq!(doc.len(), 3);
        assert_eq!(
            doc.nodes()[1].image_attributes(),
            Some(&ImageAttributes {
                title: Some("Caption".into()),
                ..ImageAttributes::asset("abc")
            })
        );
    }

    struct RejectingEditor;

    impl EditorHost for RejectingEditor {
        fn is_active(&self, _node_name: &str) -> bool {
            false
        }

        fn get_attributes(&self, _node_name: &str) -> Option<ImageAttributes> {
            None
        }

        fn dispatch(&mut self, steps: Vec<Step>) -> Result<Patch, TransactionError> {
            assert!(matches!(steps.as_slice(), [Step::Focus, Step::InsertContent(_)]));
            Err(TransactionError::InvalidPosition { range: 4..4, len: 0 })
        }
    }

    #[test]
    fn rejected_insert_still_closes() {
        let mut editor = RejectingEditor;
        let mut session = EditSession::new();
        session.open(&editor);
        session.set_direct_url("https://example.com/a.png");

        let outcome = session.save(&mut editor);

        assert!(matches!(outcome, SaveOutcome::Rejected(_)));
        assert!(!session.is_open());
    }

    #[test]
    fn select_from_library_maps_fields() {
        let mut session = EditSession::new();
        session.set_pending_url_text("typed");

        session.select_from_library(&library_asset());

        assert_eq!(
            session.selection(),
            Some(&ImageAttributes {
                id: Some("5".into()),
                alt: Some("t".into()),
                filename: Some("f.jpg".into()),
                width: Some("10".into()),
                height: Some("20".into()),
                ..ImageAttributes::default()
            })
        );
        assert_eq!(session.selection().and_then(|s| s.src.as_ref()), None);
        assert_eq!(session.pending_url_text(), "typed");
    }

    #[test]
    fn set_direct_url_discards_asset_identity() {
        let mut session = EditSession::new();
        session.select_from_library(&library_asset());

        session.set_direct_url("https://example.com/a.png");

        assert_eq!(
            session.selection(),
            Some(&ImageAttributes {
                alt: Some(String::new()),
                ..ImageAttributes::external("https://example.com/a.png")
            })
        );
    }

    #[test]
    fn empty_direct_url_keeps_selection() {
        let mut session = EditSession::new();
        session.select_from_library(&LibraryAsset {
            id: "x".into(),
            title: None,
            filename_download: None,
            width: None,
            height: None,
        });
        let before = session.selection().cloned();

        session.set_direct_url("");

        assert_eq!(session.selection().cloned(), before);
        assert_eq!(before, Some(ImageAttributes::asset("x")));
    }

    #[test]
    fn apply_pending_url_uses_typed_text() {
        let mut session = EditSession::new();
        session.set_pending_url_text("https://example.com/typed.png");

        session.apply_pending_url();

        assert_eq!(
            session.selection().and_then(|s| s.src.as_deref()),
            Some("https://example.com/typed.png")
        );
    }

    #[test]
    fn update_selection_without_selection_is_noop() {
        let mut session = EditSession::new();
        session.update_selection(|attrs| attrs.alt = Some("x".into()));
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn observers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut session = EditSession::new();
        let sink = Rc::clone(&seen);
        session.subscribe(move |state| sink.borrow_mut().push(state.is_open));

        let doc = Document::new();
        session.open(&doc);
        session.set_direct_url("");
        session.set_direct_url("a.png");
        session.close();

        assert_eq!(*seen.borrow(), vec![true, true, false]);
    }
}
