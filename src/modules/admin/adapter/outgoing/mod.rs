pub mod admin_query_postgres;
pub mod admin_repository_postgres;
pub mod sea_orm_entity;

pub use admin_query_postgres::AdminQueryPostgres;
pub use admin_repository_postgres::AdminRepositoryPostgres;
