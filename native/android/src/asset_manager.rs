//! Recover the native asset-manager pointer from its Java wrapper.
//!
//! The Java side stores the native pointer in the `mObject` long field of
//! `org.godotengine.godot.ExternalAssetManager`. Every call re-resolves the
//! class and field; there is no caching. Validity and lifetime of the
//! returned handle remain entirely the caller's responsibility.

use std::ffi::c_void;
use std::ptr::NonNull;

use jni::objects::JObject;
use jni::signature::{Primitive, ReturnType};
use jni::sys::jlong;
use jni::JNIEnv;
use thiserror::Error;

/// Fully qualified name of the Java wrapper class.
pub const EXTERNAL_ASSET_MANAGER_CLASS: &str = "org/godotengine/godot/ExternalAssetManager";

/// Field holding the native pointer, declared `long` on the Java side.
pub const HANDLE_FIELD: &str = "mObject";
const HANDLE_FIELD_SIG: &str = "J";

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Class or field lookup failed in the Java runtime.
    #[error("JNI lookup failed: {0}")]
    Jni(#[from] jni::errors::Error),
    /// The field was zero; the wrapper has no native object attached.
    #[error("{EXTERNAL_ASSET_MANAGER_CLASS}.{HANDLE_FIELD} is null")]
    NullHandle,
}

/// Non-null, pointer-sized handle to the native asset manager.
///
/// The bridge does no lifetime tracking; holding an `AssetManagerHandle`
/// does not keep the underlying object alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetManagerHandle(NonNull<c_void>);

impl AssetManagerHandle {
    /// Wrap a raw field value; `None` when the field is zero.
    pub fn from_raw(raw: jlong) -> Option<Self> {
        NonNull::new(raw as *mut c_void).map(AssetManagerHandle)
    }

    pub fn as_ptr(&self) -> *mut c_void {
        self.0.as_ptr()
    }
}

/// Read the native handle out of an `ExternalAssetManager` instance.
///
/// Lookup failures propagate from the Java runtime via [`ResolveError::Jni`];
/// a zero field becomes [`ResolveError::NullHandle`] instead of a bare
/// reinterpreted integer.
pub fn resolve_asset_manager(
    env: &mut JNIEnv,
    manager: &JObject,
) -> Result<AssetManagerHandle, ResolveError> {
    let class = env.find_class(EXTERNAL_ASSET_MANAGER_CLASS)?;
    let field = env.get_field_id(&class, HANDLE_FIELD, HANDLE_FIELD_SIG)?;
    let raw = env
        .get_field_unchecked(manager, field, ReturnType::Primitive(Primitive::Long))?
        .j()?;

    AssetManagerHandle::from_raw(raw).ok_or_else(|| {
        log::warn!("{EXTERNAL_ASSET_MANAGER_CLASS} instance carries a null {HANDLE_FIELD}");
        ResolveError::NullHandle
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_field_is_not_a_handle() {
        assert!(AssetManagerHandle::from_raw(0).is_none());
    }

    #[test]
    fn nonzero_field_round_trips() {
        let handle = AssetManagerHandle::from_raw(0x1000).unwrap();
        assert_eq!(handle.as_ptr() as usize, 0x1000);
    }

    #[test]
    fn null_handle_error_names_class_and_field() {
        let message = ResolveError::NullHandle.to_string();
        assert!(message.contains(EXTERNAL_ASSET_MANAGER_CLASS));
        assert!(message.contains(HANDLE_FIELD));
    }
}
