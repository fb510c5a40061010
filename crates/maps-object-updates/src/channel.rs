//! The message channel to the platform side of the map.

use serde_json::Value;

use crate::ChannelError;

/// Sends method calls to the native map.
pub trait MethodChannel {
    fn invoke_method(&mut self, method: &str, arguments: Value) -> Result<(), ChannelError>;
}

impl<C: MethodChannel + ?Sized> MethodChannel for &mut C {
    fn invoke_method(&mut self, method: &str, arguments: Value) -> Result<(), ChannelError> {
        (**self).invoke_method(method, arguments)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Value,
}

/// In-memory channel that records every call it accepts.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    calls: Vec<MethodCall>,
    closed: bool,
    rejections: Vec<(String, String)>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[MethodCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<MethodCall> {
        std::mem::take(&mut self.calls)
    }

    /// Refuse all further calls with [`ChannelError::Closed`].
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Answer every later call to `method` with [`ChannelError::Rejected`].
    pub fn reject(&mut self, method: impl Into<String>, message: impl Into<String>) {
        self.rejections.push((method.into(), message.into()));
    }
}

impl MethodChannel for RecordingChannel {
    fn invoke_method(&mut self, method: &str, arguments: Value) -> Result<(), ChannelError> {
        if self.closed {
            return Err(ChannelError::Closed);
        }
        if let Some((_, message)) = self.rejections.iter().find(|(rejected, _)| rejected == method) {
            return Err(ChannelError::Rejected {
                method: method.to_owned(),
                message: message.clone(),
            });
        }
        self.calls.push(MethodCall {
            method: method.to_owned(),
            arguments,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_accepted_calls() {
        let mut channel = RecordingChannel::new();
        channel.invoke_method("markers#update", json!({})).unwrap();
        assert_eq!(channel.calls().len(), 1);
        assert_eq!(channel.take_calls()[0].method, "markers#update");
        assert!(channel.calls().is_empty());
    }

    #[test]
    fn test_rejects_configured_method() {
        let mut channel = RecordingChannel::new();
        channel.reject("circles#update", "no map attached");
        let err = channel.invoke_method("circles#update", json!({})).unwrap_err();
        assert_eq!(
            err,
            ChannelError::Rejected {
                method: "circles#update".into(),
                message: "no map attached".into(),
            }
        );
        assert_eq!(err.to_string(), "platform rejected `circles#update`: no map attached");
        assert!(channel.invoke_method("markers#update", json!({})).is_ok());
        assert_eq!(channel.calls().len(), 1);
    }
}
