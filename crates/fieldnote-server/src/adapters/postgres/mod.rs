//! PostgreSQL Adapter Implementations

mod activity_log;
mod form_repository;
mod permission_checker;
mod project_repository;
mod token_repository;
mod user_repository;

pub use activity_log::PgActivityLog;
pub use form_repository::PgFormRepository;
pub use permission_checker::PgPermissionChecker;
pub use project_repository::PgProjectRepository;
pub use token_repository::PgTokenRepository;
pub use user_repository::PgUserRepository;
