use serde::Serialize;

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct Message {
    message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Message { message: message.into() }
    }
}
