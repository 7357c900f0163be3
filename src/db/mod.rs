mod load;
mod migrate;

pub use load::load_run;
pub use migrate::migrate;
