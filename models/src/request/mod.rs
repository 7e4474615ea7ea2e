pub mod descriptor;
pub mod options;
pub mod transport;
