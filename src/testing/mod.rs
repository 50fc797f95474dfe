
#[allow(unused_imports)]
pub use ports::MemoryWriter;
#[allow(unused_imports)]
pub use ports::RecordingEnvironment;
#[allow(unused_imports)]
pub use ports::RecordingLayout;
