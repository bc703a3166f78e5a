//! Method Interception Contract
//!
//! The hooking transport itself lives outside this workspace; an embedder
//! implements [`HookRuntime`] against whatever native mechanism the target
//! environment offers. A guard installed through it runs before the original
//! method body with access to the receiver, the positional arguments, and a
//! result slot that, when written, suppresses the original body.

use std::sync::Arc;

use crate::error::HostResult;
use crate::object::{HostClass, HostObject};
use crate::version::ApiLevel;

/// Signature of a hookable method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSig {
    /// Method name on the host class
    pub name: &'static str,

    /// Parameter type names, in declaration order
    pub params: &'static [&'static str],
}

impl MethodSig {
    pub const fn new(name: &'static str, params: &'static [&'static str]) -> Self {
        Self { name, params }
    }
}

impl std::fmt::Display for MethodSig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(", "))
    }
}

/// One intercepted invocation, as seen from a guard
///
/// Borrowed state is only valid for the duration of the guard callback;
/// nothing here may be cached across calls.
pub trait InterceptedCall {
    /// The object the method was invoked on
    fn receiver(&self) -> &dyn HostObject;

    /// Read a positional integer argument
    fn int_arg(&self, index: usize) -> HostResult<i32>;

    /// Replace the call's result, suppressing the original method body
    fn override_result(&mut self, value: i32);
}

/// A before-call guard installed on a host method
pub trait CallGuard: Send + Sync {
    /// Runs before the original method body
    ///
    /// Errors propagate to the interception layer, which decides whether the
    /// original call still completes; the guard defines no fallback decision.
    fn before_call(&self, call: &mut dyn InterceptedCall) -> HostResult<()>;
}

/// Owned handle to an installed guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardToken {
    class: String,
    method: String,
}

impl GuardToken {
    pub fn new(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            method: method.into(),
        }
    }

    /// Class the guard was installed on
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Method name the guard was installed on
    pub fn method(&self) -> &str {
        &self.method
    }
}

/// Host runtime services needed to set the patch up
///
/// Class lookup, hook installation, and the ambient environment queries
/// (SDK level, the device-wide audio manager).
pub trait HookRuntime: Send + Sync {
    /// SDK level of the running host
    fn api_level(&self) -> ApiLevel;

    /// Resolve a class by fully-qualified name
    ///
    /// Fails with [`HostError::ClassNotFound`](crate::HostError::ClassNotFound)
    /// when this host build does not define the class (e.g., a vendor variant
    /// absent on stock builds).
    fn find_class(&self, name: &str) -> HostResult<Arc<dyn HostClass>>;

    /// Handle to the device-wide audio manager
    fn audio_manager(&self) -> HostResult<Arc<dyn HostObject>>;

    /// Install a before-call guard on a method of the given class
    fn hook_before(
        &self,
        class: &Arc<dyn HostClass>,
        method: &MethodSig,
        guard: Arc<dyn CallGuard>,
    ) -> HostResult<GuardToken>;
}

/// Host class and field names the patch targets
///
/// Vendor-modified builds ship the audio service under alternate names; the
/// selection is a pure function of the vendor-compatibility option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookTarget {
    /// Audio service class carrying `getActiveStreamType`
    pub service_class: &'static str,

    /// Static audio system class
    pub system_class: &'static str,

    /// Per-stream maximum volume table field on the system class
    pub max_stream_volume_field: &'static str,
}

impl HookTarget {
    const STANDARD: HookTarget = HookTarget {
        service_class: "android.media.AudioService",
        system_class: "android.media.AudioSystem",
        max_stream_volume_field: "MAX_STREAM_VOLUME",
    };

    const VENDOR: HookTarget = HookTarget {
        service_class: "android.media.AudioServiceEx",
        system_class: "android.media.AudioSystem",
        max_stream_volume_field: "MAX_STREAM_VOLUME_Ex",
    };

    /// Pick the target names for this device
    pub fn select(vendor_compat: bool) -> Self {
        if vendor_compat {
            Self::VENDOR
        } else {
            Self::STANDARD
        }
    }
}
