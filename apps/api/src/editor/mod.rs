// Raw-mode editor helpers: the snippet catalogue, the sample document and
// the line re-indent formatter.

pub mod format;
pub mod handlers;
pub mod snippets;

pub use format::format_code;
pub use snippets::{Snippet, SAMPLE_DOCUMENT, SNIPPETS};
