use std::path::PathBuf;

use log::LevelFilter;

/// Read access to a collection of records keyed by identifier.
pub(crate) trait Lookup {
    type Record;

    /// Returns the first record whose id equals `id`.
    fn find(&self, id: &str) -> Option<&Self::Record>;
}

pub(crate) trait ConfigProvider {
    fn path(&self) -> Option<PathBuf>;
    fn color(&self) -> bool;
    fn log_level(&self) -> LevelFilter;
}
