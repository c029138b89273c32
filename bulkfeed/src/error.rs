use std::{error, fmt, result};

/// Type alias for convenience when using the Result type with our error.
pub type FeedResult<T> = result::Result<T, FeedError>;

/// Internal error representation with kind and optional source error.
///
/// Boxed so the public error type stays one pointer wide on the success path.
struct ErrorInner {
    kind: ErrorKind,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

/// Error classification for the import pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Configuration is missing or inconsistent.
    ConfigurationError { reason: String },
    /// The requested block code has no registered steps.
    UnknownBlock { block: String },

    /// Filesystem operation failure (open, rename, glob).
    IoFailed { context: String },
    /// A line exceeded the scanner's maximum buffer.
    LineTooLong { file: String, line_no: i64 },

    /// A typed row channel was closed while a decoder still had rows to send.
    RowChannelClosed { block: String },

    /// A database operation outside the bulk writers failed.
    QueryExecutionFailed { operation: String },
    /// Transaction begin/commit/rollback failure.
    TransactionFailed,
    /// A bulk-copy stream failed at a specific row.
    BulkCopyFailed {
        table: String,
        row: u64,
        columns: String,
    },
    /// The MERGE from the temp table into the target failed.
    MergeFailed { table: String },

    /// Finalize is already RUNNING for this process id and block.
    FinalizeAlreadyRunning { block: String },
    /// The external finalize procedure reported an error.
    FinalizeProcedureFailed {
        procedure: String,
        number: i64,
        state: i64,
        line: i64,
        message: String,
    },

    /// A spawned task panicked or was aborted.
    WorkerPanicked { worker: String },
    /// The run was cancelled.
    Cancelled,
    /// An operation exceeded its deadline.
    Timeout { operation: String },
}

/// A stable error type for the import library.
pub struct FeedError(Box<ErrorInner>);

impl FeedError {
    /// Creates a new error with the specified kind.
    pub fn new(kind: ErrorKind) -> Self {
        FeedError(Box::new(ErrorInner { kind, source: None }))
    }

    /// Creates a new error with the specified kind and source error.
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        FeedError(Box::new(ErrorInner {
            kind,
            source: Some(source.into()),
        }))
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigurationError {
            reason: reason.into(),
        })
    }

    pub fn unknown_block(block: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownBlock {
            block: block.into(),
        })
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorKind::IoFailed {
                context: context.into(),
            },
            source,
        )
    }

    pub fn query(operation: impl Into<String>, source: tiberius::error::Error) -> Self {
        Self::with_source(
            ErrorKind::QueryExecutionFailed {
                operation: operation.into(),
            },
            source,
        )
    }

    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ErrorKind {
        &self.0.kind
    }

    /// Returns true if this error is the cancellation sentinel.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.0.kind, ErrorKind::Cancelled)
    }
}

impl fmt::Debug for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedError")
            .field("kind", &self.0.kind)
            .field("source", &self.0.source)
            .finish()
    }
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;

        match &self.0.kind {
            ConfigurationError { reason } => write!(f, "configuration error: {reason}"),
            UnknownBlock { block } => write!(f, "unknown block: {block}"),
            IoFailed { context } => write!(f, "i/o failure: {context}"),
            LineTooLong { file, line_no } => {
                write!(f, "line {line_no} in '{file}' exceeds the scanner limit")
            }
            RowChannelClosed { block } => {
                write!(f, "row channel for block {block} closed before end of input")
            }
            QueryExecutionFailed { operation } => {
                write!(f, "query execution failed: {operation}")
            }
            TransactionFailed => write!(f, "database transaction failed"),
            BulkCopyFailed {
                table,
                row,
                columns,
            } => {
                write!(
                    f,
                    "bulk copy into {table} failed at row #{row} (columns: {columns})"
                )
            }
            MergeFailed { table } => write!(f, "merge into {table} failed"),
            FinalizeAlreadyRunning { block } => {
                write!(f, "{block} finalize already RUNNING")
            }
            FinalizeProcedureFailed {
                procedure,
                number,
                state,
                line,
                message,
            } => {
                write!(
                    f,
                    "{procedure} failed | number={number} state={state} line={line} msg={message}"
                )
            }
            WorkerPanicked { worker } => write!(f, "{worker} worker panicked"),
            Cancelled => write!(f, "run cancelled"),
            Timeout { operation } => write!(f, "{operation} timed out"),
        }?;

        if let Some(source) = &self.0.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl error::Error for FeedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.0
            .source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn error::Error + 'static))
    }
}

impl From<ErrorKind> for FeedError {
    fn from(kind: ErrorKind) -> Self {
        FeedError::new(kind)
    }
}

impl From<bulkfeed_mssql::MssqlError> for FeedError {
    fn from(err: bulkfeed_mssql::MssqlError) -> Self {
        FeedError::with_source(
            ErrorKind::QueryExecutionFailed {
                operation: "acquire connection".to_string(),
            },
            err,
        )
    }
}

impl From<tokio::task::JoinError> for FeedError {
    fn from(err: tokio::task::JoinError) -> Self {
        FeedError::with_source(
            ErrorKind::WorkerPanicked {
                worker: "background".to_string(),
            },
            err,
        )
    }
}
