//! Live-reordering sortable list.

use crate::event::DragEvent;
use crate::session::DragSession;

/// An ordered list of string items reordered by dragging.
///
/// The order is updated on every hover, so the list already reflects the
/// final order when the gesture ends.
#[derive(Debug, Clone, Default)]
pub struct SortableList {
    items: Vec<String>,
    session: DragSession,
    /// Order at drag start, restored on cancel.
    before_drag: Option<Vec<String>>,
}

impl SortableList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            session: DragSession::new(),
            before_drag: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Id of the item being dragged.
    pub fn active(&self) -> Option<&str> {
        self.session.active_id()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item == id)
    }

    /// Move `active` into the slot currently held by `over`.
    ///
    /// Items in between shift by one. Returns false (and changes nothing)
    /// when the ids are equal or either is not in the list.
    pub fn move_item(&mut self, active: &str, over: &str) -> bool {
        let (Some(from), Some(to)) = (self.index_of(active), self.index_of(over)) else {
            return false;
        };
        if from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        log::debug!("Moved {active} from {from} to {to}");
        true
    }

    /// Feed one drag notification. Returns true if the order changed.
    pub fn handle(&mut self, event: DragEvent) -> bool {
        match event {
            DragEvent::Start { active } => {
                self.before_drag = Some(self.items.clone());
                self.session.begin(active, None);
                false
            }
            DragEvent::Over { active, over } => match over {
                Some(target) => self.move_item(&active, &target.id),
                None => false,
            },
            DragEvent::End { .. } => {
                self.session.finish();
                self.before_drag = None;
                false
            }
            DragEvent::Cancel => {
                self.session.cancel();
                match self.before_drag.take() {
                    Some(order) if order != self.items => {
                        self.items = order;
                        true
                    }
                    _ => false,
                }
            }
        }
    }
}
