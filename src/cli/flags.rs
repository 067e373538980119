#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub level: Option<i64>,
    pub number: Option<usize>,
    pub store: Option<StoreTarget>,
}

/// Destination for `--store SERVER USERNAME`.
#[derive(Debug, PartialEq, Eq)]
pub struct StoreTarget {
    pub server: String,
    pub username: String,
}
