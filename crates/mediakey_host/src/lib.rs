//! Mediakey Host - Runtime Capability Layer
//!
//! This crate defines the contracts the patch module needs from its host
//! runtime, and the versioned readers built on top of them:
//! - Reflective access to live host objects (fields, methods, sub-objects)
//! - Before-call method interception with a mutable result slot
//! - Preference lookups with defaults
//! - The host OS version model and per-version audio service state readers
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              mediakey_core (policy, init)               │
//! └─────────────────────────────────────────────────────────┘
//!                │ AudioServiceState / HookRuntime
//!                ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  mediakey_host: versioned readers, capability traits    │
//! │  LegacyServiceReader (< KitKat) │ ModernServiceReader   │
//! └─────────────────────────────────────────────────────────┘
//!                │ HostObject / HostClass
//!                ▼
//!        embedder's binding layer (out of scope)
//! ```

mod error;
mod hook;
mod object;
mod prefs;
mod state;
mod stream;
mod version;

pub use error::{HostError, HostResult};
pub use hook::{CallGuard, GuardToken, HookRuntime, HookTarget, InterceptedCall, MethodSig};
pub use object::{HostClass, HostObject, HostValue};
pub use prefs::{FilePreferences, PreferenceSource};
pub use state::{
    service_state_for, AudioServiceState, LegacyServiceReader, ModernServiceReader,
};
pub use stream::StreamType;
pub use version::ApiLevel;
