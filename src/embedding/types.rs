use serde_json::Value;
use thiserror::Error;

use crate::bridge::{BridgeError, CodecError, HostEndpoint, InstanceHandle, ViewId};
use crate::ui::{Point, Rect, RootView};

/// Errors from creating, routing to, or disposing embedded views.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("View {0} is already embedded")]
    DuplicateView(ViewId),

    #[error("View {0} is not embedded")]
    UnknownView(ViewId),

    #[error("No embedded view listens on channel '{0}'")]
    UnknownChannel(String),

    #[error("An embedded selector needs at least one item")]
    NoItems,

    #[error("Initial index {index} is outside [0, {item_count})")]
    InvalidInitialIndex { index: i64, item_count: usize },

    #[error("Invalid creation arguments: {0}")]
    InvalidCreationArgs(String),

    #[error("Embedding requires a running Tokio runtime")]
    NoRuntime,

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Everything the host supplies when it asks for a new view.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationParams {
    pub view_id: ViewId,
    /// Initial bounds. Affects layout only, never the selection.
    pub frame: Rect,
    /// Overrides the configured icons for this view.
    pub items: Option<Vec<String>>,
    /// Selection to start with; `None` leaves every button unselected.
    pub initial_index: Option<i64>,
}

impl CreationParams {
    pub fn new(view_id: ViewId, frame: Rect) -> Self {
        Self {
            view_id,
            frame,
            items: None,
            initial_index: None,
        }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_initial_index(mut self, index: i64) -> Self {
        self.initial_index = Some(index);
        self
    }

    /// Reads decoded creation arguments: `null`, or an object with
    /// optional `items` (array of strings) and `initialIndex` (integer).
    pub fn from_args(view_id: ViewId, frame: Rect, args: &Value) -> Result<Self, EmbedError> {
        let mut params = Self::new(view_id, frame);
        let map = match args {
            Value::Null => return Ok(params),
            Value::Object(map) => map,
            other => {
                return Err(EmbedError::InvalidCreationArgs(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };

        if let Some(items) = map.get("items") {
            let items = items
                .as_array()
                .ok_or_else(|| EmbedError::InvalidCreationArgs("items must be an array".into()))?
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        EmbedError::InvalidCreationArgs("items must be strings".into())
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            params.items = Some(items);
        }

        if let Some(index) = map.get("initialIndex") {
            let index = index.as_i64().ok_or_else(|| {
                EmbedError::InvalidCreationArgs("initialIndex must be an integer".into())
            })?;
            params.initial_index = Some(index);
        }

        Ok(params)
    }
}

/// What [`EmbeddingFactory::create`](super::EmbeddingFactory::create) hands back.
///
/// The root view and tap handle belong to the native side; the endpoint
/// belongs to the host.
pub struct EmbeddedView {
    view_id: ViewId,
    root: RootView,
    taps: InstanceHandle,
    host: HostEndpoint,
}

impl EmbeddedView {
    pub(crate) fn new(
        view_id: ViewId,
        root: RootView,
        taps: InstanceHandle,
        host: HostEndpoint,
    ) -> Self {
        Self {
            view_id,
            root,
            taps,
            host,
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn view(&self) -> &RootView {
        &self.root
    }

    pub fn host(&self) -> &HostEndpoint {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut HostEndpoint {
        &mut self.host
    }

    /// Press the button at `index`.
    ///
    /// Fails with [`BridgeError::InvalidTap`] without reaching the instance
    /// when `index` names no button.
    pub fn tap(&self, index: usize) -> Result<(), BridgeError> {
        let item_count = self.root.button_count();
        if index >= item_count {
            return Err(BridgeError::InvalidTap { index, item_count });
        }
        self.taps.tap(index)
    }

    /// Press whatever button is under `point`. Returns the index pressed.
    pub fn tap_at(&self, point: Point) -> Result<Option<usize>, BridgeError> {
        let Some(index) = self.root.layout().hit_test(point) else {
            return Ok(None);
        };
        self.taps.tap(index)?;
        Ok(Some(index))
    }
}
