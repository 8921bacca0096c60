mod driver;

pub use driver::Driver;
