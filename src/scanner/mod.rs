pub use mode::Mode;
pub use scanner::{scan, scan_text, Scanner, MAX_TOKEN_LEN};
pub use token::Match;

mod mode;
mod scanner;
mod token;
