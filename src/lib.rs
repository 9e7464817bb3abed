pub mod api;
pub mod cli;
pub mod error;
pub mod model;
pub mod peruser;
pub mod redirect;
pub mod totals;
pub mod util;
