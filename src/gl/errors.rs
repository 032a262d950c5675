use glutin;

/// Failures raised by the GL side of the adapter. These are checked
/// errors the caller is expected to handle; misuse of the backend
/// contract is a panic instead, not an `Error`.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Glutin: {}", _0)]
    Glutin(String),
    #[fail(display = "Shared GL contexts are not supported by this backend.")]
    SharedContextUnsupported,
    #[fail(display = "The GL drawable has not been realized yet.")]
    NotRealized,
    #[fail(display = "The rendering surface is unavailable.")]
    SurfaceUnavailable,
    #[fail(display = "The rendering surface is already locked.")]
    SurfaceAlreadyLocked,
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}
