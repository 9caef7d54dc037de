pub mod console;
pub mod factory;
pub mod file;
pub mod level;
pub mod logger_config;
pub mod macros;
pub mod null;
pub mod prefix;
pub mod report;
pub mod sink;

pub use console::ConsoleSink;
pub use factory::{SinkRegistry, create_sink};
pub use file::FileSink;
pub use level::Level;
pub use logger_config::LoggerConfig;
pub use null::NullSink;
pub use report::ErrorReport;
pub use sink::LogSink;
