/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing diagnostics so they never mix with the
/// report written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a non-fatal warning
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
