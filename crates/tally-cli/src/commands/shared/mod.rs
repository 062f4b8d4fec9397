pub mod actor;
pub mod parse;
pub mod scope;
