pub mod interpreter;
pub mod tokenizer;
