use crate::ports::outbound::DatabaseReader;
use crate::shared::error::PrereqError;
use crate::shared::Result;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// Flags that make print its rule database without running any recipe
const DUMP_FLAGS: &str = "-pq";

/// Settings for one `make -pq` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeInvocation {
    /// make executable name or path
    pub program: String,
    /// Directory passed to make with `-C`
    pub directory: Option<PathBuf>,
    /// Makefile passed to make with `-f`
    pub makefile: Option<PathBuf>,
    /// Extra arguments appended after the dump flags (e.g. `VAR=value`)
    pub extra_args: Vec<String>,
    /// Kill make if it runs longer than this
    pub timeout: Option<Duration>,
}

impl Default for MakeInvocation {
    fn default() -> Self {
        Self {
            program: "make".to_string(),
            directory: None,
            makefile: None,
            extra_args: Vec::new(),
            timeout: None,
        }
    }
}

impl MakeInvocation {
    /// Arguments passed to the make program, in order
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from(DUMP_FLAGS)];
        if let Some(directory) = &self.directory {
            args.push(OsString::from("-C"));
            args.push(directory.clone().into_os_string());
        }
        if let Some(makefile) = &self.makefile {
            args.push(OsString::from("-f"));
            args.push(makefile.clone().into_os_string());
        }
        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }
}

/// MakeDatabaseReader adapter that captures the output of `make -pq`
///
/// make's exit status is ignored: `-q` exits 1 whenever a target is out of
/// date and 2 on makefile errors, and the database is printed either way.
/// Only a failure to run make at all is an error.
///
/// The call blocks until make exits. With a timeout configured, make is
/// killed once the timeout elapses.
pub struct MakeDatabaseReader {
    invocation: MakeInvocation,
    stderr_sink: Option<Box<dyn Fn(&str)>>,
}

impl MakeDatabaseReader {
    pub fn new(invocation: MakeInvocation) -> Self {
        Self {
            invocation,
            stderr_sink: None,
        }
    }

    /// Receives make's stderr output, when there is any
    pub fn with_stderr_sink(mut self, sink: impl Fn(&str) + 'static) -> Self {
        self.stderr_sink = Some(Box::new(sink));
        self
    }

    fn unavailable(&self, details: impl Into<String>) -> anyhow::Error {
        PrereqError::DatabaseUnavailable {
            program: self.invocation.program.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Runs make on a current-thread runtime so the timeout can cancel it
    fn run(&self) -> Result<Output> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| self.unavailable(format!("Failed to start process runtime: {}", e)))?;

        let mut command = Command::new(&self.invocation.program);
        command
            .args(self.invocation.args())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        runtime.block_on(async {
            let output = command.output();
            match self.invocation.timeout {
                Some(limit) => match tokio::time::timeout(limit, output).await {
                    Ok(result) => result.map_err(|e| self.unavailable(e.to_string())),
                    Err(_) => Err(PrereqError::DatabaseTimeout {
                        program: self.invocation.program.clone(),
                        seconds: limit.as_secs(),
                    }
                    .into()),
                },
                None => output.await.map_err(|e| self.unavailable(e.to_string())),
            }
        })
    }
}

impl DatabaseReader for MakeDatabaseReader {
    fn read_database(&self) -> Result<String> {
        let output = self.run()?;

        if let Some(sink) = &self.stderr_sink {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim_end();
            if !stderr.is_empty() {
                sink(stderr);
            }
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn describe(&self) -> String {
        let args: Vec<String> = self
            .invocation
            .args()
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        format!("`{} {}`", self.invocation.program, args.join(" "))
    }
}
