/// Post-setup options collected after the install steps.
///
/// `link_valet` is always false on Windows; the question is never asked
/// there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdditionalOptions {
    pub link_valet: bool,
    pub run_migrations: bool,
    pub run_seeders: bool,
    pub run_tests: bool,
}
