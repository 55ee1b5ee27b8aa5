pub mod escape;
pub mod links;
pub mod price;
pub mod user_agent;
