pub mod scenario;
pub mod util;

pub use util::{parse_params, split_csv};
