pub mod cust_error;
pub mod scanner;
pub mod tree;
pub mod mis_finder;
pub mod exhaustive;
pub mod driver;
pub mod logger;
