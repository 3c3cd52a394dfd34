//! Company registration - a three-step web form for registering a new company
//!
//! The form collects business details, then a contact person, then shows a
//! review page that submits everything to a remote company service. All form
//! state travels in the query string; the server keeps none between requests.

pub mod catalog;
pub mod config;
pub mod form;
pub mod logging;
pub mod submission;
pub mod web;
