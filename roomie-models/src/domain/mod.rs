mod blog;
mod consent;
#[allow(clippy::needless_update)]
mod lead;
mod llm;
pub mod prelude;
mod setting;
