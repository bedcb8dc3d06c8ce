//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use glassbar::bridge::ViewId;
use glassbar::config::Config;
use glassbar::embedding::{CreationParams, EmbeddingFactory};
use glassbar::ui::{items_from_ids, ImpactStyle, Rect, RenderFrame, SelectionController, Surface};
use parking_lot::Mutex;
use std::sync::Arc;

pub const ICONS: [&str; 3] = ["book.fill", "pencil", "gearshape.fill"];

/// Everything a controller painted, in order.
#[derive(Default)]
pub struct Recorded {
    pub frames: Vec<RenderFrame>,
    pub impacts: Vec<ImpactStyle>,
}

#[derive(Clone, Default)]
pub struct SpySurface(pub Arc<Mutex<Recorded>>);

impl SpySurface {
    pub fn last_active(&self) -> Option<usize> {
        self.0.lock().frames.last().and_then(RenderFrame::active_index)
    }

    pub fn frame_count(&self) -> usize {
        self.0.lock().frames.len()
    }

    pub fn impact_count(&self) -> usize {
        self.0.lock().impacts.len()
    }
}

impl Surface for SpySurface {
    fn apply(&mut self, frame: RenderFrame) {
        self.0.lock().frames.push(frame);
    }

    fn impact(&mut self, style: ImpactStyle) {
        self.0.lock().impacts.push(style);
    }
}

pub fn spy_controller(count: usize) -> (SelectionController, SpySurface) {
    let spy = SpySurface::default();
    let ids: Vec<String> = (0..count).map(|i| format!("icon.{}", i)).collect();
    let controller = SelectionController::new(items_from_ids(ids), Box::new(spy.clone()));
    (controller, spy)
}

pub fn frame() -> Rect {
    Rect::new(0.0, 0.0, 320.0, 64.0)
}

pub fn params(view_id: i64) -> CreationParams {
    CreationParams::new(ViewId(view_id), frame())
}

pub fn factory() -> EmbeddingFactory {
    EmbeddingFactory::new(Config::default())
}
