// handlers/mod.rs - Two-tier handler layout
//
// public:    no login required (catalogue, accounts, health)
// protected: behind `middleware::require_login` (reviews, movie requests)

pub mod protected;
pub mod public;
