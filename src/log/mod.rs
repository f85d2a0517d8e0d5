//! Log parsing for container image build output.

pub mod component;
pub mod parse;

pub use component::Component;
pub use parse::parse_build_log;
