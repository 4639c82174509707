pub mod label;
pub mod months;
pub mod total;
