mod integration;
mod report;
mod snapshot;
