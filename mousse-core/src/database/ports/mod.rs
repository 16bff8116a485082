//! Repository ports grouped by bounded context. The SQLite adapters live in
//! `database::infrastructure::sqlite`.

pub mod companies;
pub mod foam_types;
pub mod health;
pub mod recycling_options;

pub use companies::CompanyRepository;
pub use foam_types::FoamTypeRepository;
pub use health::StorageHealth;
pub use recycling_options::RecyclingOptionRepository;
