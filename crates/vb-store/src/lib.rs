pub mod error;
pub mod schema;
pub mod session;

pub use error::{Result, StoreError};
pub use session::{
    BOARD_KEY, FEEDBACK_KEY, SELECTIONS_KEY, SessionStore, default_base_dir,
};
