//! `lift-server`: serves one lift simulation to network clients.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`handle`]   | `SimHandle`: init/status/tick/speed/reset/rush-hour      |
//! | [`autoplay`] | timer task that ticks the session at `1000 / speed` ms    |
//! | [`protocol`] | `Request` / `Response` wire types                         |
//! | [`server`]   | TCP accept loop, one JSON object per line                 |
//! | [`error`]    | `ServerError`, `ServerResult<T>`                          |

pub mod autoplay;
pub mod error;
pub mod handle;
pub mod protocol;
pub mod server;


pub use error::{ServerError, ServerResult};
pub use handle::{DynSim, SimHandle};
pub use protocol::{Request, Response};
pub use server::{MAX_LINE_BYTES, respond, serve};
