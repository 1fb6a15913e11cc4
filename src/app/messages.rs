//! AppMessage enum for async communication within the application.

use crate::loader::LoadCompletion;

/// Messages delivered to the event loop by background tasks
#[derive(Debug)]
pub enum AppMessage {
    /// A question fetch finished (successfully or not)
    LoadFinished(LoadCompletion),
}
