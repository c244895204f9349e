pub mod picker;
pub mod source;

pub use picker::{latest_pdf, AssetError, PdfNaming, PdfVersion};
pub use source::{AssetSource, FsAssetSource};
