pub mod check;
pub mod config;
pub mod duration;
pub mod export;
pub mod init;
pub mod list;
pub mod total;
