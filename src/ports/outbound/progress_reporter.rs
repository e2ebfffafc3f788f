/// ProgressReporter port for diagnostics during a run
///
/// Everything reported here goes to a side channel (stderr) so that the
/// primary output on stdout stays machine-readable.
pub trait ProgressReporter {
    /// Reports an informational progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Signals the start of a blocking step such as waiting on make
    fn start_activity(&self, message: &str);

    /// Signals the end of the step started by `start_activity`
    fn finish_activity(&self, message: &str);
}
