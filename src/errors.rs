pub type Result<T> = ::std::result::Result<T, ::failure::Error>;

macro_rules! err_format {
    ($e:expr) => {
        ::failure::err_msg($e)
    };
    ($fmt:expr, $($arg:tt)+) => {
        ::failure::err_msg(format!($fmt, $($arg)+))
    };
}
