mod course;
mod format;
mod report;
mod result;
mod service;
mod student;

use format::FormatService;
pub(crate) use service::Service;

/// What a sub-menu asks of the main loop once it returns.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Back,
    Quit,
}

pub(crate) type ServiceResult = Result<(), anyhow::Error>;

trait Reportable {
    fn report(self);
}

impl Reportable for ServiceResult {
    fn report(self) {
        if let Err(err) = self {
            FormatService::error(&format!("{:#}", err));
        }
    }
}
