// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

pub mod codec;
pub mod error;
pub mod logging;
pub mod probe;
pub mod store;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use codec::{Capabilities, Codec, Format};
pub use error::StoreError;
pub use probe::{PathProbe, RealFs};
pub use store::{
    AssociationFailure, AssociationMap, AssociationStore, LoadOptions, Names, Orientation, Role,
    SaveOptions, Side, UnknownOrientation,
};
pub use user_config::{load_user_config, load_user_config_from, UserConfig, UserConfigError};
