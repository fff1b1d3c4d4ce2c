//! Bootstrap adapters: real process spawning and a recording fake.

pub mod fake;
pub mod process;

pub use fake::FakeBootstrap;
pub use process::ProcessBootstrap;
