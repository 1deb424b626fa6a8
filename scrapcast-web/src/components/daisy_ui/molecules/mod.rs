mod stat;

pub use stat::{Stat, StatItem, StatProps};
