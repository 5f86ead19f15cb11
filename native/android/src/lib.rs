//! Android platform glue for Ember.
//!
//! Currently one shim: recovering the native asset-manager pointer from its
//! Java wrapper object (see [`asset_manager`]).

mod asset_manager;

pub use asset_manager::{
    resolve_asset_manager, AssetManagerHandle, ResolveError, EXTERNAL_ASSET_MANAGER_CLASS,
    HANDLE_FIELD,
};
