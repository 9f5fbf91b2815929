// Keyword analysis
// Implements: keyword intake, whole-word matching, scoring, quality bands,
// results rendering and the exported report. Nothing in here touches shell state.

pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod quality;
pub mod report;
pub mod view;

pub use keywords::KeywordList;
pub use matcher::{AnalysisResult, DocumentText, KeywordMatcher, WholeWordMatcher};
pub use report::ReportDownload;
pub use view::ResultsView;
