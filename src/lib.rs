pub mod graph;
pub mod subset;
pub mod cust_error;
pub mod multiset;
pub mod solver;
pub mod instance;
pub mod report;
