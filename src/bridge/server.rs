use serde_json::Value;
use tokio::sync::mpsc;

use crate::ui::{SelectionController, SelectionEvent};

use super::types::{
    InstanceCommand, MethodCall, MethodError, MethodResult, ViewId, METHOD_SET_SELECTED_INDEX,
};

/// Sequential owner of one instance's controller.
///
/// Taps and host calls share one queue, so they are applied strictly in
/// arrival order and the controller never needs a lock.
pub struct InstanceServer {
    view_id: ViewId,
    receiver: mpsc::UnboundedReceiver<InstanceCommand>,
    outbound: mpsc::UnboundedSender<MethodCall>,
}

impl InstanceServer {
    pub(crate) fn new(
        view_id: ViewId,
        receiver: mpsc::UnboundedReceiver<InstanceCommand>,
        outbound: mpsc::UnboundedSender<MethodCall>,
    ) -> Self {
        Self {
            view_id,
            receiver,
            outbound,
        }
    }

    /// Pulls the next command without handling it.
    #[cfg(test)]
    pub(crate) async fn next_command(&mut self) -> Option<InstanceCommand> {
        self.receiver.recv().await
    }

    /// Runs until a `Shutdown` command arrives or every handle is dropped.
    /// Commands still queued at that point are discarded unprocessed.
    pub async fn run(mut self, mut controller: SelectionController) {
        tracing::debug!(view_id = %self.view_id, "Instance started");
        while let Some(command) = self.receiver.recv().await {
            match command {
                InstanceCommand::Tap { index } => {
                    controller.on_user_tap(index);
                    self.flush(&mut controller);
                }
                InstanceCommand::Invoke { call, respond_to } => {
                    let result = dispatch(&mut controller, &call);
                    if let Err(error) = &result {
                        tracing::debug!(
                            view_id = %self.view_id,
                            method = %call.method,
                            %error,
                            "Host call rejected"
                        );
                    }
                    self.flush(&mut controller);
                    if respond_to.send(result).is_err() {
                        tracing::trace!(
                            view_id = %self.view_id,
                            method = %call.method,
                            "Bridge: response dropped (caller gone)"
                        );
                    }
                }
                InstanceCommand::Shutdown => break,
            }
        }
        self.receiver.close();
        tracing::debug!(view_id = %self.view_id, "Instance stopped");
    }

    /// Forwards controller events to the host. Delivery is best effort.
    fn flush(&self, controller: &mut SelectionController) {
        for event in controller.take_events() {
            let call = match event {
                SelectionEvent::Changed { index } => MethodCall::on_button_tap(index),
            };
            if self.outbound.send(call).is_err() {
                tracing::debug!(
                    view_id = %self.view_id,
                    ?event,
                    "Bridge: host channel closed, dropping notification"
                );
            }
        }
    }
}

/// Decodes one inbound call and applies it to the controller.
pub fn dispatch(controller: &mut SelectionController, call: &MethodCall) -> MethodResult {
    match call.method.as_str() {
        METHOD_SET_SELECTED_INDEX => {
            let Some(index) = call.args.as_i64() else {
                return Err(MethodError::invalid_argument("Expected integer"));
            };
            controller
                .on_host_set_selection(index)
                .map(|()| Value::Null)
                .map_err(|err| MethodError::invalid_argument(err.to_string()))
        }
        other => Err(MethodError::not_implemented(other)),
    }
}
