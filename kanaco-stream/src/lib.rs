//! Line-oriented kana conversion over buffered readers
//!
//! [`KanaReader`] wraps any [`std::io::BufRead`], reads it one `\n`-terminated
//! line at a time and converts each line with a [`kanaco_core::Converter`].
//! Lines keep their delimiter, and a final line without one is still
//! returned.
//!
//! ```rust
//! use kanaco_stream::KanaReader;
//! use std::io::Cursor;
//!
//! let input = Cursor::new("ﾃﾞｰﾀ\nＡＢＣ");
//! let lines: Vec<Vec<u8>> = KanaReader::new(input, "Kr")
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(lines, vec!["データ\n".as_bytes().to_vec(), b"ABC".to_vec()]);
//! ```

pub mod error;
pub mod reader;

pub use error::{Result, StreamError};
pub use reader::KanaReader;
