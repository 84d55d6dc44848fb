#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {}", $msg, why);
            }
        }
    };
}

#[macro_export]
macro_rules! tsuya_error {
    ($($arg:tt)+) => {
        $crate::log::error!($($arg)+)
    };
}

#[macro_export]
macro_rules! tsuya_warn {
    ($($arg:tt)+) => {
        $crate::log::warn!($($arg)+)
    };
}

#[macro_export]
macro_rules! tsuya_info {
    ($($arg:tt)+) => {
        $crate::log::info!($($arg)+)
    };
}

#[macro_export]
macro_rules! tsuya_debug {
    ($($arg:tt)+) => {
        $crate::log::debug!($($arg)+)
    };
}

#[macro_export]
macro_rules! tsuya_trace {
    ($($arg:tt)+) => {
        $crate::log::trace!($($arg)+)
    };
}
