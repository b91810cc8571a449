mod executor;

pub mod prelude {
    pub use crate::executor::SqliteExecutor;
}
