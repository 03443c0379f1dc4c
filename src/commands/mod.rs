//! CLI commands for gradus

pub mod dispatch;
pub mod helpers;
pub mod run;
pub mod samples;
pub mod show;
