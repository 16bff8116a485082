pub mod repositories;

pub use repositories::{
    SqliteCompanyRepository, SqliteFoamTypeRepository, SqliteRecyclingOptionRepository,
    SqliteStorageHealth,
};
