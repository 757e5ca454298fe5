//! # Interaction Controller
//!
//! A [`Session`] owns one [`Template`] plus the transient state that is not
//! part of it: the current selection, the drag source, and the view mode.
//! All template mutation goes through the session so that its invariants
//! hold after every gesture:
//!
//! - the selection always names an element present in the template
//! - nothing is selected or dragged while previewing
//! - removing the selected element clears the selection in the same step
//!
//! Gestures that target a missing element or an out-of-range index are
//! absorbed as no-ops. The only gesture that can fail is a property patch
//! that does not fit the element's schema.
//!
//! ## Async boundaries
//!
//! Printing and image loading complete later. Both re-enter through the
//! session ([`Session::finish_print`], [`Session::complete_image_load`]) and
//! re-check the current state instead of trusting what was true when they
//! started. See [`print`] and [`upload`].

mod gesture;
pub mod print;
pub mod upload;

pub use gesture::{Gesture, Outcome};
pub use print::{PrintFacility, PrintOutcome, PrintScheduler, SpoolPrinter};
pub use upload::{ingest_image, load_image};

use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::document::{Direction, ElementId, ElementKind, PropsError, Template};
use crate::fields::FieldCatalog;
use crate::render::{Medium, Node, PageState, ViewMode, render_page};

/// A session shared between request handlers and background tasks.
pub type SharedSession = Arc<RwLock<Session>>;

/// Handle for one requested print, used to detect superseded requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrintTicket(u64);

/// One designer session.
#[derive(Debug, Default)]
pub struct Session {
    template: Template,
    selection: Option<ElementId>,
    dragged: Option<usize>,
    view: ViewMode,
    print_seq: u64,
}

/// Serializable view of a session for the frontend.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub template: &'a Template,
    pub selection: Option<&'a ElementId>,
    pub dragged: Option<usize>,
    pub view: ViewMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing template, in editing view with nothing selected.
    pub fn with_template(template: Template) -> Self {
        Self {
            template,
            ..Self::default()
        }
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn selection(&self) -> Option<&ElementId> {
        self.selection.as_ref()
    }

    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            template: &self.template,
            selection: self.selection.as_ref(),
            dragged: self.dragged,
            view: self.view,
        }
    }

    // ========================================================================
    // TEMPLATE OPERATIONS
    // ========================================================================

    /// Append an element of `kind`. It becomes the selection while editing.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.template.add(kind);
        if self.view == ViewMode::Editing {
            self.selection = Some(id.clone());
        }
        debug!(kind = kind.tag(), id = %id, "element added");
        id
    }

    /// Shallow-merge `partial` into the element's properties.
    ///
    /// `Ok(false)` when no element has `id`.
    pub fn update_props(
        &mut self,
        id: &ElementId,
        partial: &Map<String, Value>,
    ) -> Result<bool, PropsError> {
        self.template.update_props(id, partial)
    }

    /// Remove an element, clearing the selection if it pointed there.
    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        if self.template.remove(id).is_none() {
            return false;
        }
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
        }
        // Indices shift on removal; a stale drag index would mark the wrong element.
        self.dragged = None;
        debug!(id = %id, "element removed");
        true
    }

    /// Swap an element with its neighbour. An in-progress drag follows the
    /// element it started on.
    pub fn move_element(&mut self, index: usize, direction: Direction) -> bool {
        if !self.template.swap_by_offset(index, direction) {
            return false;
        }
        let Some(target) = index.checked_add_signed(direction.offset()) else {
            return true;
        };
        self.dragged = self.dragged.map(|d| match d {
            d if d == index => target,
            d if d == target => index,
            d => d,
        });
        true
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Select an element. Ignored for unknown ids and while previewing.
    pub fn select(&mut self, id: &ElementId) -> bool {
        if self.view != ViewMode::Editing || !self.template.contains(id) {
            return false;
        }
        if self.selection.as_ref() == Some(id) {
            return false;
        }
        self.selection = Some(id.clone());
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }

    // ========================================================================
    // DRAG
    // ========================================================================

    pub fn drag_start(&mut self, index: usize) -> bool {
        if self.view != ViewMode::Editing || index >= self.template.len() {
            return false;
        }
        self.dragged = Some(index);
        true
    }

    /// Move the dragged element to `index` immediately.
    ///
    /// The dragged marker follows the element, so successive hovers keep
    /// relocating the same element.
    pub fn drag_over(&mut self, index: usize) -> bool {
        let Some(from) = self.dragged else {
            return false;
        };
        if !self.template.relocate(from, index) {
            return false;
        }
        self.dragged = Some(index);
        true
    }

    /// End the drag. The order was already updated during the hover.
    pub fn drag_end(&mut self) -> bool {
        self.dragged.take().is_some()
    }

    // ========================================================================
    // VIEW AND PRINT
    // ========================================================================

    /// Switch view. Entering preview clears the selection and any drag.
    pub fn set_view(&mut self, view: ViewMode) -> bool {
        if view == ViewMode::Previewing {
            self.selection = None;
            self.dragged = None;
        }
        let changed = self.view != view;
        self.view = view;
        changed
    }

    /// Enter preview and issue a ticket for the delayed print.
    pub fn request_print(&mut self) -> PrintTicket {
        self.set_view(ViewMode::Previewing);
        self.print_seq += 1;
        PrintTicket(self.print_seq)
    }

    /// A ticket is current while the session is still previewing and no
    /// newer print was requested.
    pub fn is_print_current(&self, ticket: PrintTicket) -> bool {
        self.view == ViewMode::Previewing && ticket.0 == self.print_seq
    }

    /// Print facility completion: back to editing, whatever the view was.
    pub fn finish_print(&mut self) {
        self.view = ViewMode::Editing;
    }

    /// Merge an ingested image into the element's image slot.
    ///
    /// No-op when the element was removed in the meantime or its kind has
    /// no image slot.
    pub fn complete_image_load(&mut self, id: &ElementId, reference: &str) -> bool {
        let Some(slot) = self.template.get(id).and_then(|el| el.props().image_slot()) else {
            debug!(id = %id, "image load discarded: no target");
            return false;
        };
        let mut patch = Map::new();
        patch.insert(slot.to_string(), Value::String(reference.to_string()));
        matches!(self.template.update_props(id, &patch), Ok(true))
    }

    // ========================================================================
    // GESTURES
    // ========================================================================

    /// Apply one gesture.
    pub fn apply(&mut self, gesture: Gesture) -> Result<Outcome, PropsError> {
        if gesture.requires_editing() && self.view != ViewMode::Editing {
            debug!(?gesture, "gesture ignored while previewing");
            return Ok(Outcome::Unchanged);
        }

        let outcome = match gesture {
            Gesture::Add { kind } => Outcome::Added(self.add_element(kind)),
            Gesture::Select { id } => Outcome::from_flag(self.select(&id)),
            Gesture::ClearSelection => Outcome::from_flag(self.clear_selection()),
            Gesture::EditProps { id, props } => Outcome::from_flag(self.update_props(&id, &props)?),
            Gesture::Remove { id } => Outcome::from_flag(self.remove_element(&id)),
            Gesture::Move { index, direction } => {
                Outcome::from_flag(self.move_element(index, direction))
            }
            Gesture::DragStart { index } => Outcome::from_flag(self.drag_start(index)),
            Gesture::DragOver { index } => Outcome::from_flag(self.drag_over(index)),
            Gesture::DragEnd => Outcome::from_flag(self.drag_end()),
            Gesture::SetView { view } => Outcome::from_flag(self.set_view(view)),
            Gesture::Print => Outcome::PrintRequested(self.request_print()),
            Gesture::PrintFinished => {
                let was_previewing = self.view == ViewMode::Previewing;
                self.finish_print();
                Outcome::from_flag(was_previewing)
            }
        };
        Ok(outcome)
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// The page as a visual tree, with this session's affordances.
    pub fn page(&self, catalog: &FieldCatalog) -> Node {
        let state = PageState {
            mode: self.view,
            selected: self.selection.as_ref(),
            dragged: self.dragged,
        };
        render_page(&self.template, &state, catalog)
    }

    pub fn render(&self, catalog: &FieldCatalog, medium: Medium) -> String {
        self.page(catalog).to_html(medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn session_with(kinds: &[ElementKind]) -> (Session, Vec<ElementId>) {
        let mut session = Session::new();
        let ids = kinds.iter().map(|k| session.add_element(*k)).collect();
        session.clear_selection();
        (session, ids)
    }

    #[test]
    fn test_add_selects_new_element() {
        let mut session = Session::new();
        let a = session.add_element(ElementKind::Row);
        assert_eq!(session.selection(), Some(&a));
        let b = session.add_element(ElementKind::Table);
        assert_eq!(session.selection(), Some(&b));
        assert_eq!(session.template().len(), 2);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let (mut session, ids) = session_with(&[ElementKind::Row, ElementKind::Title]);
        session.select(&ids[0]);
        assert!(session.remove_element(&ids[0]));
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let (mut session, ids) = session_with(&[ElementKind::Row, ElementKind::Title]);
        session.select(&ids[0]);
        assert!(session.remove_element(&ids[1]));
        assert_eq!(session.selection(), Some(&ids[0]));
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let (mut session, ids) = session_with(&[ElementKind::Row]);
        session.select(&ids[0]);
        assert!(!session.select(&ElementId::from("ghost")));
        assert_eq!(session.selection(), Some(&ids[0]));
    }

    #[test]
    fn test_continuous_drag() {
        let kinds = [ElementKind::Row, ElementKind::Title, ElementKind::Table, ElementKind::Signature];
        let (mut session, ids) = session_with(&kinds);

        assert!(session.drag_start(0));
        assert!(session.drag_over(1));
        assert_eq!(session.template().ids(), vec![ids[1].clone(), ids[0].clone(), ids[2].clone(), ids[3].clone()]);
        assert!(session.drag_over(3));
        assert_eq!(session.template().ids(), vec![ids[1].clone(), ids[2].clone(), ids[3].clone(), ids[0].clone()]);
        assert_eq!(session.dragged(), Some(3));

        let before = session.template().ids();
        assert!(session.drag_end());
        assert_eq!(session.template().ids(), before);
        assert_eq!(session.dragged(), None);
    }

    #[test]
    fn test_drag_marker_follows_swap() {
        let kinds = [ElementKind::Row, ElementKind::Title, ElementKind::Table];
        let (mut session, ids) = session_with(&kinds);

        assert!(session.drag_start(1));
        assert!(session.move_element(1, Direction::Up));
        assert_eq!(session.dragged(), Some(0));

        assert!(session.move_element(1, Direction::Down));
        assert_eq!(session.dragged(), Some(0));

        assert!(session.drag_over(2));
        assert_eq!(session.template().ids()[2], ids[1]);
    }

    #[test]
    fn test_drag_over_without_drag_is_noop() {
        let (mut session, ids) = session_with(&[ElementKind::Row, ElementKind::Title]);
        assert!(!session.drag_over(1));
        assert_eq!(session.template().ids(), ids);
    }

    #[test]
    fn test_preview_clears_selection_and_blocks_editing() {
        let (mut session, ids) = session_with(&[ElementKind::Row, ElementKind::Title]);
        session.select(&ids[0]);
        session.drag_start(1);
        session.set_view(ViewMode::Previewing);
        assert_eq!(session.selection(), None);
        assert_eq!(session.dragged(), None);

        let outcome = session.apply(Gesture::Select { id: ids[0].clone() }).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        let outcome = session.apply(Gesture::Remove { id: ids[0].clone() }).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(session.template().len(), 2);
    }

    #[test]
    fn test_print_ticket_lifecycle() {
        let (mut session, ids) = session_with(&[ElementKind::Row]);
        session.select(&ids[0]);

        let first = session.request_print();
        assert_eq!(session.view(), ViewMode::Previewing);
        assert_eq!(session.selection(), None);
        assert!(session.is_print_current(first));

        let second = session.request_print();
        assert!(!session.is_print_current(first));
        assert!(session.is_print_current(second));

        session.set_view(ViewMode::Editing);
        assert!(!session.is_print_current(second));

        session.set_view(ViewMode::Previewing);
        session.finish_print();
        assert_eq!(session.view(), ViewMode::Editing);
    }

    #[test]
    fn test_image_load_targets() {
        let (mut session, ids) = session_with(&[ElementKind::MainHeader, ElementKind::Row]);
        assert!(session.complete_image_load(&ids[0], "data:image/png;base64,AAAA"));
        let props = session.template().get(&ids[0]).unwrap().props().to_value();
        assert_eq!(props["logo_url"], json!("data:image/png;base64,AAAA"));

        assert!(!session.complete_image_load(&ids[1], "data:image/png;base64,AAAA"));

        session.remove_element(&ids[0]);
        assert!(!session.complete_image_load(&ids[0], "data:image/png;base64,BBBB"));
    }

    #[test]
    fn test_apply_edit_props() {
        let mut session = Session::new();
        let Outcome::Added(id) = session.apply(Gesture::Add { kind: ElementKind::SectionHeader }).unwrap() else {
            panic!("expected an added element");
        };
        let props = json!({"text": "WITNESSES"}).as_object().unwrap().clone();
        let outcome = session.apply(Gesture::EditProps { id: id.clone(), props: props.clone() }).unwrap();
        assert_eq!(outcome, Outcome::Changed);

        let missing = session
            .apply(Gesture::EditProps { id: ElementId::from("ghost"), props })
            .unwrap();
        assert_eq!(missing, Outcome::Unchanged);

        let bad = json!({"font": "serif"}).as_object().unwrap().clone();
        assert!(session.apply(Gesture::EditProps { id, props: bad }).is_err());
    }

    #[test]
    fn test_print_finished_returns_to_editing() {
        let mut session = Session::new();
        let outcome = session.apply(Gesture::Print).unwrap();
        assert!(matches!(outcome, Outcome::PrintRequested(_)));
        assert_eq!(session.apply(Gesture::PrintFinished).unwrap(), Outcome::Changed);
        assert_eq!(session.view(), ViewMode::Editing);
    }
}
