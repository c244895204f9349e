pub mod loader;
pub mod source;
pub mod validation;

pub use loader::{load_resume, ResumeError};
pub use source::{FsResumeSource, ResumeSource};
