mod output;
mod word_list;
pub use output::*;
pub use word_list::*;
