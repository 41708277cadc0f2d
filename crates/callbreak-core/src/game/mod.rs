pub mod history;
pub mod replay;
pub mod serialization;
pub mod session;
