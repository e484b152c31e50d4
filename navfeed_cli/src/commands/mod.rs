pub mod import;
pub mod latest;
pub mod show;
pub mod update;
