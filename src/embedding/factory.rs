use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use crate::bridge::{
    channel_name, parse_channel_name, HostBridge, InstanceHandle, JsonMethodCodec, MethodCall,
    MethodResult, ViewId,
};
use crate::config::Config;
use crate::ui::{items_from_ids, BarLayout, Rect, RootView, SelectionController};

use super::types::{CreationParams, EmbedError, EmbeddedView};

struct InstanceEntry {
    handle: InstanceHandle,
    task: JoinHandle<()>,
    channel: String,
}

/// Builds and tracks embedded selectors.
///
/// Each factory owns its own registry; two factories never see each
/// other's views. Clones share the registry.
#[derive(Clone)]
pub struct EmbeddingFactory {
    config: Arc<Config>,
    instances: Arc<RwLock<HashMap<ViewId, InstanceEntry>>>,
}

impl EmbeddingFactory {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            instances: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Identifier this factory is registered under on the host side.
    pub fn view_type(&self) -> &str {
        &self.config.bridge.view_type
    }

    pub fn channel_for(&self, view_id: ViewId) -> String {
        channel_name(&self.config.bridge.channel_prefix, view_id)
    }

    /// Creates the controller, bridge and root view for `params.view_id`
    /// and starts routing calls to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn create(&self, params: CreationParams) -> Result<EmbeddedView, EmbedError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| EmbedError::NoRuntime)?;

        let ids = params
            .items
            .unwrap_or_else(|| self.config.bar.items.clone());
        if ids.is_empty() {
            return Err(EmbedError::NoItems);
        }
        let items = items_from_ids(ids);
        let item_count = items.len();

        let bounds = Rect::new(0.0, 0.0, params.frame.width, params.frame.height);
        let root = RootView::new(BarLayout::compute(bounds, item_count));
        let mut controller = SelectionController::new(items, Box::new(root.clone()));
        if let Some(index) = params.initial_index {
            controller
                .on_host_set_selection(index)
                .map_err(|_| EmbedError::InvalidInitialIndex { index, item_count })?;
        }

        let view_id = params.view_id;
        let channel = self.channel_for(view_id);

        let mut instances = self.instances.write();
        if instances.contains_key(&view_id) {
            return Err(EmbedError::DuplicateView(view_id));
        }

        let (handle, server, endpoint) = HostBridge::open(
            view_id,
            channel.clone(),
            self.config.bridge.request_timeout(),
        );
        let task = runtime.spawn(server.run(controller));
        instances.insert(
            view_id,
            InstanceEntry {
                handle: handle.clone(),
                task,
                channel: channel.clone(),
            },
        );
        drop(instances);

        tracing::info!(view_id = %view_id, %channel, item_count, "Embedding created");
        Ok(EmbeddedView::new(view_id, root, handle, endpoint))
    }

    /// Routes a host call to the instance registered as `view_id`.
    pub async fn invoke(
        &self,
        view_id: ViewId,
        call: MethodCall,
    ) -> Result<MethodResult, EmbedError> {
        let handle = self.handle(view_id)?;
        Ok(handle.invoke(call).await?)
    }

    /// Binary entry point: decodes a call arriving on `channel`, routes it,
    /// and encodes the reply envelope.
    pub async fn handle_message(&self, channel: &str, bytes: &[u8]) -> Result<Vec<u8>, EmbedError> {
        let view_id = parse_channel_name(&self.config.bridge.channel_prefix, channel)
            .filter(|view_id| self.contains(*view_id))
            .ok_or_else(|| EmbedError::UnknownChannel(channel.to_string()))?;

        let call = JsonMethodCodec::decode_method_call(bytes)?;
        tracing::trace!(%channel, method = %call.method, "Inbound message");
        let result = self.invoke(view_id, call).await?;
        Ok(JsonMethodCodec::encode_envelope(&result)?)
    }

    /// Tears down one view.
    ///
    /// Routing stops before the instance is told to shut down, and this
    /// returns only after its task has finished.
    pub async fn dispose(&self, view_id: ViewId) -> Result<(), EmbedError> {
        let entry = self
            .instances
            .write()
            .remove(&view_id)
            .ok_or(EmbedError::UnknownView(view_id))?;

        if entry.handle.shutdown().is_err() {
            tracing::debug!(view_id = %view_id, "Instance already stopped");
        }
        if let Err(err) = entry.task.await {
            tracing::warn!(view_id = %view_id, error = %err, "Instance task failed");
        }

        tracing::info!(view_id = %view_id, channel = %entry.channel, "Embedding disposed");
        Ok(())
    }

    pub async fn dispose_all(&self) {
        for view_id in self.view_ids() {
            if let Err(err) = self.dispose(view_id).await {
                tracing::debug!(view_id = %view_id, error = %err, "Dispose skipped");
            }
        }
    }

    pub fn contains(&self, view_id: ViewId) -> bool {
        self.instances.read().contains_key(&view_id)
    }

    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }

    /// Registered view ids in ascending order.
    pub fn view_ids(&self) -> Vec<ViewId> {
        let mut ids: Vec<ViewId> = self.instances.read().keys().copied().collect();
        ids.sort();
        ids
    }

    fn handle(&self, view_id: ViewId) -> Result<InstanceHandle, EmbedError> {
        self.instances
            .read()
            .get(&view_id)
            .map(|entry| entry.handle.clone())
            .ok_or(EmbedError::UnknownView(view_id))
    }
}
