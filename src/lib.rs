pub mod cli;
pub mod component;
pub mod config;
pub mod init;
pub mod signal;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod tools;
