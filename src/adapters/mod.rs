pub mod tokenizer;

pub use tokenizer::LineTokenizer;
