// Client data layer for the hotel predictive-maintenance service
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
