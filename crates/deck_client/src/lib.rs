//! Deck client: HTTP transport, the perpetual status poller, and the
//! background handle bridging them to the app thread.
mod client;
mod poller;
mod transport;
mod types;

pub use client::{ClientConfig, ClientHandle};
pub use poller::{poll_loop, ChannelEventSink, EventSink, PollSettings};
pub use transport::{HttpTransport, Transport, TransportSettings};
pub use types::{ClientEvent, FailureKind, StatusResponse, TransportError, WireUser};
