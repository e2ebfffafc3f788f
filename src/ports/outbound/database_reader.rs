use crate::shared::Result;

/// DatabaseReader port for obtaining make's rule database as text
///
/// This port abstracts where the `make -pq` output comes from: a live make
/// invocation or a dump saved earlier.
pub trait DatabaseReader {
    /// Returns the complete database dump
    ///
    /// # Errors
    /// Returns an error if:
    /// - make cannot be spawned or its output cannot be captured
    /// - make does not finish within the configured timeout
    /// - a saved dump cannot be read
    fn read_database(&self) -> Result<String>;

    /// Short human-readable description of the source, for progress messages
    fn describe(&self) -> String;
}

/// Lets callers pick the source at runtime as `Box<dyn DatabaseReader>`
impl<T: DatabaseReader + ?Sized> DatabaseReader for Box<T> {
    fn read_database(&self) -> Result<String> {
        (**self).read_database()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
