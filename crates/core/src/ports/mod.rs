mod package_source;
mod sink;
mod stream_source;

pub use package_source::*;
pub use sink::*;
pub use stream_source::*;
