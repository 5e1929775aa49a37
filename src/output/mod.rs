mod store;

pub use store::{read_corpus, write_json, write_raw};
