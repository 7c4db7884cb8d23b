pub mod types;

#[macro_export]
macro_rules! fs_err {
    // Reading: classify by io::ErrorKind
    (read, $path:expr) => {
        |e| $crate::error::types::MakebinError::FileSystem(
            $crate::error::types::FileSystemError::from_read($path, e),
        )
    };

    // Writing: classify by io::ErrorKind
    (write, $path:expr) => {
        |e| $crate::error::types::MakebinError::FileSystem(
            $crate::error::types::FileSystemError::from_write($path, e),
        )
    };
}

pub use types::*;
