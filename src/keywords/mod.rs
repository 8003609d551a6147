pub use c::{c_keywords, C_KEYWORDS, C_KEYWORD_PAIRS};
pub use load::{load_table_file, parse_table};
pub use result::{TableErr, TableErrKind, TableResult};
pub use table::KeywordTable;

mod c;
mod load;
mod result;
mod table;
