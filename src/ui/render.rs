//! Visual side effects of a selection change.
//!
//! [`render`] is a pure function of the selection; a [`Surface`] receives
//! its output as a single frame, so the old and new active buttons always
//! swap together.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::ui::item::{Item, ItemId};
use crate::ui::layout::BarLayout;
use crate::ui::selection::SelectionState;
use crate::ui::theme::{BarStyle, ItemStyle, ACTIVE_ITEM, BAR_STYLE, DEFAULT_ITEM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    Default,
    Active,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemVisual {
    pub index: usize,
    pub id: ItemId,
    pub state: VisualState,
    pub style: ItemStyle,
}

/// Complete visual state of the bar at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub items: Vec<ItemVisual>,
}

impl RenderFrame {
    pub fn active_index(&self) -> Option<usize> {
        self.items
            .iter()
            .find(|item| item.state == VisualState::Active)
            .map(|item| item.index)
    }

    pub fn active_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.state == VisualState::Active)
            .count()
    }
}

/// Haptic feedback strength requested alongside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactStyle {
    Light,
}

/// Rendering collaborator owned by one controller.
pub trait Surface: Send + 'static {
    fn apply(&mut self, frame: RenderFrame);
    fn impact(&mut self, style: ImpactStyle);
}

pub fn render(items: &[Item], state: &SelectionState) -> RenderFrame {
    let items = items
        .iter()
        .map(|item| {
            let (visual, style) = if state.is_selected(item.index()) {
                (VisualState::Active, ACTIVE_ITEM)
            } else {
                (VisualState::Default, DEFAULT_ITEM)
            };
            ItemVisual {
                index: item.index(),
                id: item.id().clone(),
                state: visual,
                style,
            }
        })
        .collect();
    RenderFrame { items }
}

/// What the host can observe about an embedded view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub layout: BarLayout,
    pub style: BarStyle,
    pub frame: Option<RenderFrame>,
    pub frames_applied: u64,
    pub impacts: u64,
}

impl ViewSnapshot {
    pub fn active_index(&self) -> Option<usize> {
        self.frame.as_ref().and_then(RenderFrame::active_index)
    }
}

/// Root visual container of one embedding.
///
/// Clones share the same view; the controller writes through its
/// [`Surface`] impl while the host reads snapshots.
#[derive(Debug, Clone)]
pub struct RootView {
    inner: Arc<Mutex<ViewSnapshot>>,
}

impl RootView {
    pub fn new(layout: BarLayout) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ViewSnapshot {
                layout,
                style: BAR_STYLE,
                frame: None,
                frames_applied: 0,
                impacts: 0,
            })),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.inner.lock().clone()
    }

    pub fn layout(&self) -> BarLayout {
        self.inner.lock().layout.clone()
    }

    pub fn button_count(&self) -> usize {
        self.inner.lock().layout.buttons.len()
    }
}

impl Surface for RootView {
    fn apply(&mut self, frame: RenderFrame) {
        let mut view = self.inner.lock();
        view.frame = Some(frame);
        view.frames_applied += 1;
    }

    fn impact(&mut self, style: ImpactStyle) {
        tracing::trace!(?style, "Impact feedback");
        self.inner.lock().impacts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::item::items_from_ids;
    use crate::ui::layout::Rect;
    use crate::ui::mvi::Reducer;
    use crate::ui::selection::{SelectionIntent, SelectionReducer};

    #[test]
    fn nothing_active_before_first_selection() {
        let items = items_from_ids(["a", "b", "c"]);
        let frame = render(&items, &SelectionState::new(3));
        assert_eq!(frame.active_count(), 0);
        assert!(frame.items.iter().all(|item| item.style == DEFAULT_ITEM));
    }

    #[test]
    fn selected_item_gets_active_treatment() {
        let items = items_from_ids(["a", "b", "c"]);
        let state = SelectionReducer::reduce(
            SelectionState::new(3),
            SelectionIntent::Assigned { index: 2 },
        );
        let frame = render(&items, &state);
        assert_eq!(frame.active_index(), Some(2));
        assert_eq!(frame.active_count(), 1);
        assert_eq!(frame.items[2].style, ACTIVE_ITEM);
        assert_eq!(frame.items[0].style, DEFAULT_ITEM);
        assert_eq!(frame.items[2].id.as_str(), "c");
    }

    #[test]
    fn root_view_counts_frames_and_impacts() {
        let mut view = RootView::new(BarLayout::compute(Rect::new(0.0, 0.0, 240.0, 52.0), 1));
        let items = items_from_ids(["only"]);
        view.apply(render(&items, &SelectionState::new(1)));
        view.impact(ImpactStyle::Light);

        let snapshot = view.snapshot();
        assert_eq!(snapshot.frames_applied, 1);
        assert_eq!(snapshot.impacts, 1);
        assert_eq!(snapshot.active_index(), None);
    }

    #[test]
    fn root_view_carries_glass_bar_style() {
        let view = RootView::new(BarLayout::compute(Rect::new(0.0, 0.0, 240.0, 52.0), 3));
        let snapshot = view.snapshot();

        assert_eq!(snapshot.style, BAR_STYLE);
        assert_eq!(snapshot.style.material, "systemUltraThinMaterial");
        assert_eq!(snapshot.style.corner_radius, 26.0);
        assert_eq!(snapshot.style.shadow.offset, (0.0, 2.0));
        assert_eq!(view.button_count(), 3);
    }
}
