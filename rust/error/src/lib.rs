// A small set of standard error codes, following the codes defined in the
// gRPC spec. https://grpc.github.io/grpc/core/md_doc_statuscodes.html
// Custom errors carry one of these codes to allow for generic handling.
use std::error::Error;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ErrorCodes {
    // OK is returned on success, we use "Success" since Ok is a keyword in Rust.
    Success = 0,
    // UNKNOWN indicates an unknown error.
    Unknown = 2,
    // INVALID_ARGUMENT indicates the caller specified an invalid argument.
    InvalidArgument = 3,
    // NOT_FOUND means some requested entity (e.g. the input file) was not found.
    NotFound = 5,
    // OUT_OF_RANGE means an operation was attempted past the valid range.
    OutOfRange = 11,
    // INTERNAL errors are internal errors.
    Internal = 13,
}

impl ErrorCodes {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCodes::InvalidArgument => "InvalidArgumentError",
            ErrorCodes::NotFound => "NotFoundError",
            ErrorCodes::OutOfRange => "OutOfRangeError",
            ErrorCodes::Internal => "InternalError",
            _ => "UnitnormError",
        }
    }
}

pub trait UnitnormError: Error + Send {
    fn code(&self) -> ErrorCodes;
    fn boxed(self) -> Box<dyn UnitnormError>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl Error for Box<dyn UnitnormError> {}

impl UnitnormError for Box<dyn UnitnormError> {
    fn code(&self) -> ErrorCodes {
        self.as_ref().code()
    }
}

impl UnitnormError for std::io::Error {
    fn code(&self) -> ErrorCodes {
        match self.kind() {
            std::io::ErrorKind::NotFound => ErrorCodes::NotFound,
            _ => ErrorCodes::Unknown,
        }
    }
}
