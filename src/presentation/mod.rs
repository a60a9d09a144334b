mod field;

pub use field::{render_field, render_group};
