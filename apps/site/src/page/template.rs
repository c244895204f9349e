use askama::Template;

use crate::assets::{PdfNaming, PdfVersion};
use crate::models::resume::ResumeData;
use crate::page::PageData;

#[derive(Template)]
#[template(path = "index.html")]
pub struct ResumePage<'a> {
    pub resume: &'a ResumeData,
    pub pdf_filename: &'a str,
    /// e.g. `June 15, 2024`, taken from the chosen PDF's stamp.
    pub last_updated: Option<String>,
}

impl<'a> ResumePage<'a> {
    pub fn new(data: &'a PageData, naming: &PdfNaming) -> Self {
        let last_updated = PdfVersion::parse(&data.pdf_filename, naming)
            .and_then(|v| v.date)
            .map(|d| d.format("%B %-d, %Y").to_string());

        ResumePage {
            resume: &data.resume,
            pdf_filename: &data.pdf_filename,
            last_updated,
        }
    }
}
