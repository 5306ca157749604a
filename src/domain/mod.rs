// Domain layer - Models and rules with no I/O
pub mod command;
pub mod history;
pub mod robot;
pub mod weather;
pub mod wind_rose;
