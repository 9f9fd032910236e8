//! Tool routing domain - the table of tools the gateway forwards.

mod descriptor;

pub use descriptor::{SuccessPayload, ToolDescriptor, ToolKind};
