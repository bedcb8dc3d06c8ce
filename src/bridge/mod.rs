//! Per-instance host channel.
//!
//! Every embedded view gets its own queue pair. Inbound host calls and
//! local taps are serialized through one [`InstanceServer`]; notifications
//! for the host leave through the [`HostEndpoint`] in the order the taps
//! happened.

mod client;
mod codec;
mod server;
mod types;


use std::time::Duration;

use tokio::sync::mpsc;

pub use client::{HostEndpoint, InstanceHandle};
pub use codec::{CodecError, JsonMethodCodec};
pub use server::{dispatch, InstanceServer};
pub use types::{
    channel_name, parse_channel_name, BridgeError, ErrorCode, InstanceCommand, MethodCall,
    MethodError, MethodResult, ViewId, METHOD_ON_BUTTON_TAP, METHOD_SET_SELECTED_INDEX,
};

pub struct HostBridge;

impl HostBridge {
    /// Opens the channel `channel` for `view_id`.
    ///
    /// The server must be spawned with the instance's controller before
    /// any call through the handle or endpoint can complete.
    pub fn open(
        view_id: ViewId,
        channel: String,
        timeout: Duration,
    ) -> (InstanceHandle, InstanceServer, HostEndpoint) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let handle = InstanceHandle::new(sender, timeout);
        let server = InstanceServer::new(view_id, receiver, outbound_tx);
        let endpoint = HostEndpoint::new(channel, handle.clone(), outbound_rx);
        (handle, server, endpoint)
    }
}
