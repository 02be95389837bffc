// Business domains
pub mod chat;
