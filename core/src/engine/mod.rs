//! Provider-agnostic tokenization, key encoding and query planning.

pub mod assembler;
pub mod key;
pub mod mutator;
pub mod planner;
pub mod tokenizer;

pub use key::{CompositeKey, KeyRange};
pub use planner::{QueryPlan, plan};
pub use tokenizer::{Token, tokenize};
