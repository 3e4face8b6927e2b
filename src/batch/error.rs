use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("no operations supplied")]
    EmptyInput,

    #[error("operation {index} needs {size} bytes on its own, limit is {limit}")]
    SizeExceeded {
        index: usize,
        size: usize,
        limit: usize,
    },

    #[error("instruction cap of zero admits no operation")]
    ZeroInstructionCap,

    #[error("failed to compile message: {0}")]
    Compile(String),
}
