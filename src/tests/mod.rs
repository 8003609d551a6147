mod report;
mod run;
