mod bidirectional;
mod forward;

pub use bidirectional::BidirectionalCursor;
pub use forward::ForwardCursor;
