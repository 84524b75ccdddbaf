mod analyzer;
mod report;
mod saddle_point;

pub use self::analyzer::GameAnalyzer;
pub use self::report::GameReport;
pub use self::saddle_point::SaddlePoint;
