use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use super::types::{BridgeError, InstanceCommand, MethodCall, MethodResult};

/// Sending half of an instance queue. Cheap to clone.
#[derive(Clone)]
pub struct InstanceHandle {
    sender: mpsc::UnboundedSender<InstanceCommand>,
    timeout: Duration,
}

impl InstanceHandle {
    pub(crate) fn new(sender: mpsc::UnboundedSender<InstanceCommand>, timeout: Duration) -> Self {
        Self { sender, timeout }
    }

    /// Queues a local button press and returns immediately.
    pub fn tap(&self, index: usize) -> Result<(), BridgeError> {
        self.sender
            .send(InstanceCommand::Tap { index })
            .map_err(|_| BridgeError::Disconnected)
    }

    /// Sends a host call and waits for the instance's reply.
    pub async fn invoke(&self, call: MethodCall) -> Result<MethodResult, BridgeError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(InstanceCommand::Invoke { call, respond_to })
            .map_err(|_| BridgeError::Disconnected)?;

        recv_with_timeout(receiver, self.timeout).await
    }

    pub async fn set_selected_index(&self, index: i64) -> Result<MethodResult, BridgeError> {
        self.invoke(MethodCall::set_selected_index(index)).await
    }

    pub(crate) fn shutdown(&self) -> Result<(), BridgeError> {
        self.sender
            .send(InstanceCommand::Shutdown)
            .map_err(|_| BridgeError::Disconnected)
    }
}

/// Host side of one channel: inbound calls out, outbound notifications in.
pub struct HostEndpoint {
    channel: String,
    handle: InstanceHandle,
    outbound: mpsc::UnboundedReceiver<MethodCall>,
}

impl HostEndpoint {
    pub(crate) fn new(
        channel: String,
        handle: InstanceHandle,
        outbound: mpsc::UnboundedReceiver<MethodCall>,
    ) -> Self {
        Self {
            channel,
            handle,
            outbound,
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub async fn invoke_method(&self, call: MethodCall) -> Result<MethodResult, BridgeError> {
        self.handle.invoke(call).await
    }

    /// Next notification from the control, `None` once the instance is gone.
    pub async fn next_message(&mut self) -> Option<MethodCall> {
        self.outbound.recv().await
    }

    /// Non-blocking variant of [`next_message`](Self::next_message).
    pub fn try_next_message(&mut self) -> Option<MethodCall> {
        self.outbound.try_recv().ok()
    }
}

async fn recv_with_timeout<T>(
    receiver: oneshot::Receiver<T>,
    timeout: Duration,
) -> Result<T, BridgeError> {
    match tokio::time::timeout(timeout, receiver).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(BridgeError::Disconnected),
        Err(_) => Err(BridgeError::Timeout),
    }
}
