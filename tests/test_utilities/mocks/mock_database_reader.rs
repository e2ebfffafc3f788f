use make_prereqs::prelude::*;

/// Mock DatabaseReader returning a fixed dump
pub struct MockDatabaseReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockDatabaseReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DatabaseReader for MockDatabaseReader {
    fn read_database(&self) -> Result<String> {
        if self.should_fail {
            return Err(PrereqError::DatabaseUnavailable {
                program: "make".to_string(),
                details: "Mock database read failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "mock database".to_string()
    }
}
