/// Marker trait for intents: key presses, edits, settled catalog requests.
pub trait Intent: Send + 'static {}
