pub mod cli;
pub mod config;
pub mod driver;
pub mod keywords;
pub mod report;
pub mod result;
pub mod run;
pub mod scanner;

#[cfg(test)]
mod tests;
