pub mod loader;
pub mod manager;

pub use loader::{dictionary_path, load_language, load_word_list, read_words};
