/// Which page the central panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    /// Keyed by the record's `tail`.
    Detail(String),
    About,
}
