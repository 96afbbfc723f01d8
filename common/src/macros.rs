#[macro_export]
macro_rules! verbose {
    ($opts:expr, $($arg:tt)*) => {
        if $opts.verbose {
            println!($($arg)*);
        }
    };
}

/// Like `verbose!`, but also prints in noop mode, so the user can see what would happen.
#[macro_export]
macro_rules! announce {
    ($opts:expr, $($arg:tt)*) => {
        if $opts.verbose || $opts.noop {
            println!($($arg)*);
        }
    };
}
