mod group;
mod input;
mod options;
mod runtime;
mod terminal;

pub use group::FieldGroup;
pub use input::{KeyCommand, classify};
pub use options::UiOptions;
pub use runtime::App;
pub use terminal::TerminalGuard;
