//! Actions representing side effects to be executed by the runtime shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! bridging pure state transformations and effectful operations. The runtime
//! executes them in sequence: gateway requests go to the worker channel, quit
//! tears the terminal down.

use crate::worker::ApiRequest;

/// Commands emitted by the event handler for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends a request to the API worker.
    ///
    /// The response re-enters the event handler as
    /// [`Event::Api`](crate::app::Event) when the worker finishes.
    CallApi(ApiRequest),

    /// Exits the application.
    Quit,
}
