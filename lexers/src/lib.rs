mod helpers;
mod scanner;

pub use scanner::Scanner;

pub use helpers::scan_longest;
pub use helpers::scan_number;
pub use helpers::skip_whitespace;
