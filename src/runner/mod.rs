mod demo;
mod generate;
mod review;

pub use demo::DemoRunner;
pub use generate::PairGenerator;
pub use review::{ReviewReport, ReviewRunner};
