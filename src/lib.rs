#![deny(rust_2018_idioms)]

mod anim;
mod field;
mod scale;

pub mod app;
pub mod presentation;

pub use anim::{EasingTime, SnapshotOverlay, SpringCurve, Transition, TransitionTiming};
pub use field::{
    Caption, CaptionTier, CaptionVisual, Editor, FloatingField, LayoutMode, LayoutRules,
    SizePolicy,
};
pub use scale::{ContentResizable, SizeCategory};

pub mod prelude {
    pub use super::app::{FieldGroup, UiOptions};
    pub use super::{
        ContentResizable, FloatingField, LayoutMode, LayoutRules, SizeCategory, SizePolicy,
    };
}
