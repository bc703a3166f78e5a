//! Shared test fakes implementing the host capability traits.

use std::sync::{Arc, Mutex};

use mediakey_host::{
    ApiLevel, CallGuard, GuardToken, HookRuntime, HostClass, HostError, HostObject, HostResult,
    HostValue, InterceptedCall, MethodSig,
};

/// Scripted audio service receiver; `None` models members absent on this
/// host build.
#[derive(Default)]
pub struct FakeService {
    pub voice_capable: Option<bool>,
    pub in_communication: bool,
    pub music_active_recently: Option<bool>,
    pub remote_active: Option<bool>,
    pub focus_remote_active: Option<bool>,
}

impl HostObject for FakeService {
    fn get_bool(&self, field: &str) -> HostResult<bool> {
        match field {
            "mVoiceCapable" => self
                .voice_capable
                .ok_or_else(|| HostError::FieldNotFound(field.into())),
            _ => Err(HostError::FieldNotFound(field.into())),
        }
    }

    fn get_object(&self, field: &str) -> HostResult<Box<dyn HostObject>> {
        match field {
            "mMediaFocusControl" => match self.focus_remote_active {
                Some(active) => Ok(Box::new(FakeFocusControl {
                    remote_active: active,
                }) as Box<dyn HostObject>),
                None => Err(HostError::FieldNotFound(field.into())),
            },
            _ => Err(HostError::FieldNotFound(field.into())),
        }
    }

    fn call_bool(&self, method: &str, _args: &[HostValue]) -> HostResult<bool> {
        match method {
            "isInCommunication" => Ok(self.in_communication),
            "isAfMusicActiveRecently" => self
                .music_active_recently
                .ok_or_else(|| HostError::MethodNotFound(method.into())),
            "checkUpdateRemoteStateIfActive" => self
                .remote_active
                .ok_or_else(|| HostError::MethodNotFound(method.into())),
            _ => Err(HostError::MethodNotFound(method.into())),
        }
    }
}

pub struct FakeFocusControl {
    pub remote_active: bool,
}

impl HostObject for FakeFocusControl {
    fn get_bool(&self, field: &str) -> HostResult<bool> {
        Err(HostError::FieldNotFound(field.into()))
    }

    fn get_object(&self, field: &str) -> HostResult<Box<dyn HostObject>> {
        Err(HostError::FieldNotFound(field.into()))
    }

    fn call_bool(&self, method: &str, _args: &[HostValue]) -> HostResult<bool> {
        match method {
            "checkUpdateRemoteStateIfActive" => Ok(self.remote_active),
            _ => Err(HostError::MethodNotFound(method.into())),
        }
    }
}

#[derive(Default)]
pub struct FakeAudioManager {
    pub volume_fixed: bool,
}

impl HostObject for FakeAudioManager {
    fn get_bool(&self, field: &str) -> HostResult<bool> {
        Err(HostError::FieldNotFound(field.into()))
    }

    fn get_object(&self, field: &str) -> HostResult<Box<dyn HostObject>> {
        Err(HostError::FieldNotFound(field.into()))
    }

    fn call_bool(&self, method: &str, _args: &[HostValue]) -> HostResult<bool> {
        match method {
            "isVolumeFixed" => Ok(self.volume_fixed),
            _ => Err(HostError::MethodNotFound(method.into())),
        }
    }
}

#[derive(Default)]
pub struct FakeAudioSystem {
    pub stream_active: bool,
}

impl HostClass for FakeAudioSystem {
    fn name(&self) -> &str {
        "android.media.AudioSystem"
    }

    fn call_static_bool(&self, method: &str, _args: &[HostValue]) -> HostResult<bool> {
        match method {
            "isStreamActive" => Ok(self.stream_active),
            _ => Err(HostError::MethodNotFound(method.into())),
        }
    }
}

/// One recorded intercepted invocation.
pub struct FakeCall {
    pub receiver: FakeService,
    pub args: Vec<i32>,
    pub result: Option<i32>,
}

impl FakeCall {
    pub fn new(receiver: FakeService, arg: i32) -> Self {
        Self {
            receiver,
            args: vec![arg],
            result: None,
        }
    }
}

impl InterceptedCall for FakeCall {
    fn receiver(&self) -> &dyn HostObject {
        &self.receiver
    }

    fn int_arg(&self, index: usize) -> HostResult<i32> {
        self.args
            .get(index)
            .copied()
            .ok_or(HostError::ArgumentMissing(index))
    }

    fn override_result(&mut self, value: i32) {
        self.result = Some(value);
    }
}

/// Opaque class handle resolved by [`FakeRuntime`].
pub struct FakeClassHandle {
    name: String,
}

impl HostClass for FakeClassHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn call_static_bool(&self, method: &str, _args: &[HostValue]) -> HostResult<bool> {
        Err(HostError::MethodNotFound(method.into()))
    }
}

/// Hook runtime with a scripted class table, recording installed hooks.
pub struct FakeRuntime {
    pub level: ApiLevel,
    pub classes: Vec<&'static str>,
    pub hooks: Mutex<Vec<(String, String)>>,
}

impl FakeRuntime {
    /// A stock host at the given level, defining the standard class names.
    pub fn stock(level: ApiLevel) -> Self {
        Self {
            level,
            classes: vec!["android.media.AudioService", "android.media.AudioSystem"],
            hooks: Mutex::new(Vec::new()),
        }
    }

    pub fn installed_hooks(&self) -> Vec<(String, String)> {
        self.hooks.lock().unwrap().clone()
    }
}

impl HookRuntime for FakeRuntime {
    fn api_level(&self) -> ApiLevel {
        self.level
    }

    fn find_class(&self, name: &str) -> HostResult<Arc<dyn HostClass>> {
        if self.classes.contains(&name) {
            Ok(Arc::new(FakeClassHandle { name: name.into() }))
        } else {
            Err(HostError::ClassNotFound(name.into()))
        }
    }

    fn audio_manager(&self) -> HostResult<Arc<dyn HostObject>> {
        Ok(Arc::new(FakeAudioManager::default()))
    }

    fn hook_before(
        &self,
        class: &Arc<dyn HostClass>,
        method: &MethodSig,
        _guard: Arc<dyn CallGuard>,
    ) -> HostResult<GuardToken> {
        self.hooks
            .lock()
            .unwrap()
            .push((class.name().to_string(), method.name.to_string()));
        Ok(GuardToken::new(class.name(), method.name))
    }
}
