//! Editing gestures as data.
//!
//! Every interaction the frontend can produce is one variant here, so the
//! whole controller is driven through [`Session::apply`](super::Session::apply).
//!
//! ```json
//! {"type": "add", "kind": "row"}
//! {"type": "edit_props", "id": "3f2a...", "props": {"left": {...}}}
//! {"type": "move", "index": 2, "direction": "up"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::{Direction, ElementId, ElementKind};
use crate::render::ViewMode;

use super::PrintTicket;

/// One user gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    /// Append a new element of `kind` and select it.
    Add { kind: ElementKind },
    /// Click on an element.
    Select { id: ElementId },
    /// Click on the canvas background.
    ClearSelection,
    /// Property panel edit: a partial bag shallow-merged into the element.
    EditProps { id: ElementId, props: Map<String, Value> },
    Remove { id: ElementId },
    /// Up/down control on the selected element.
    Move { index: usize, direction: Direction },
    DragStart { index: usize },
    /// Pointer entered the element at `index` while dragging.
    DragOver { index: usize },
    DragEnd,
    /// Switch tabs without printing.
    SetView { view: ViewMode },
    /// Enter preview and schedule a print.
    Print,
    /// The print facility finished.
    PrintFinished,
}

impl Gesture {
    /// Whether the gesture only makes sense with editing affordances.
    pub fn requires_editing(&self) -> bool {
        matches!(
            self,
            Gesture::Add { .. }
                | Gesture::Select { .. }
                | Gesture::EditProps { .. }
                | Gesture::Remove { .. }
                | Gesture::Move { .. }
                | Gesture::DragStart { .. }
                | Gesture::DragOver { .. }
        )
    }
}

/// What applying a gesture did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Ignored: stale target, out of range, or wrong view.
    Unchanged,
    Changed,
    Added(ElementId),
    /// The caller must hand the ticket to a print scheduler.
    PrintRequested(PrintTicket),
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }

    pub(super) fn from_flag(changed: bool) -> Self {
        if changed { Outcome::Changed } else { Outcome::Unchanged }
    }
}
