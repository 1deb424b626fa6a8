mod badge;
mod button;
mod number_input;
mod range;

pub use badge::{Badge, BadgeProps};
pub use button::{Button, ButtonProps};
pub use number_input::{DraftText, NumberInput, NumberInputProps};
pub use range::{Range, RangeProps};
