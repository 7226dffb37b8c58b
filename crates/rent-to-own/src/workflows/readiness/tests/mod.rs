mod common;
mod report;
mod routing;
