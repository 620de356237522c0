#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        eprintln!("[INFO] {}", format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        eprintln!("[WARN] {}", format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        eprintln!("[ERROR] {}", format_args!($($arg)*));
    }};
}

// Chart confirmations are part of the console contract and go to stdout.
#[macro_export]
macro_rules! ok {
    ($($arg:tt)*) => {{
        println!("[OK] {}", format_args!($($arg)*));
    }};
}
