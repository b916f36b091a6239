mod command_result;
pub mod helper;
pub mod init;
pub mod scan;
pub mod stats;
pub mod unused_keys;
pub mod validate;

pub use command_result::*;
