pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{aggregate, AggregateOptions};
pub use exec::exec;
pub use output::{output_stats, render};
