/*
[INPUT]:  CLI modules
[OUTPUT]: Public surface of the adyen-cli crate (config + commands)
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod commands;
pub mod config;

pub use commands::{Cli, Command, run};
pub use config::{CliConfig, EnvironmentKind};
