//! Integration scenarios, one file per area.

mod colleges;
mod dashboard;
mod faculty;
mod http;
mod login;
mod stale_responses;
