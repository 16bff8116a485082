pub mod companies;
pub mod foam_types;
pub mod health;
pub mod recycling_options;

pub use companies::SqliteCompanyRepository;
pub use foam_types::SqliteFoamTypeRepository;
pub use health::SqliteStorageHealth;
pub use recycling_options::SqliteRecyclingOptionRepository;
