pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod insights;
pub mod onboarding;
pub mod rbac;
pub mod sales;
pub mod settings;
