//! MDM command bodies
//!
//! A [`Command`] is one of a small set of tagged variants. Each variant knows
//! how to render itself as the `Command` dictionary of an envelope.

use super::request_type::RequestType;
use crate::error::Result;
use log::debug;
use plist::{Dictionary, Value};
use rand::Rng;
use std::io::Read;

/// Key holding the command kind discriminator
pub const REQUEST_TYPE_KEY: &str = "RequestType";
/// Key holding the DeviceInformation query list
pub const QUERIES_KEY: &str = "Queries";
/// Key holding the raw profile bytes for InstallProfile
pub const PAYLOAD_KEY: &str = "Payload";
/// Key holding the profile identifier for RemoveProfile
pub const IDENTIFIER_KEY: &str = "Identifier";

/// A single MDM command body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One of the fixed parameterless request types
    Simple(RequestType),
    /// Any other request type, passed through without validation
    Unchecked(String),
    /// DeviceInformation with optional queries
    DeviceInformation { queries: Vec<String> },
    /// InstallProfile carrying the raw configuration profile
    InstallProfile { payload: Vec<u8> },
    /// RemoveProfile by profile identifier
    RemoveProfile { identifier: String },
}

impl Command {
    /// Build a parameterless command
    pub fn simple(request_type: RequestType) -> Self {
        Self::Simple(request_type)
    }

    /// Build a parameterless command with an arbitrary request type
    pub fn unchecked(request_type: impl Into<String>) -> Self {
        Self::Unchecked(request_type.into())
    }

    /// Build a DeviceInformation command; query order is kept
    pub fn device_information<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::DeviceInformation {
            queries: queries.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an InstallProfile command from an in-memory profile
    pub fn install_profile(payload: impl Into<Vec<u8>>) -> Self {
        Self::InstallProfile {
            payload: payload.into(),
        }
    }

    /// Build an InstallProfile command by draining a byte source
    pub fn install_profile_from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;
        debug!("Read {} bytes of profile payload", payload.len());
        Ok(Self::InstallProfile { payload })
    }

    /// Build a RemoveProfile command
    pub fn remove_profile(identifier: impl Into<String>) -> Self {
        Self::RemoveProfile {
            identifier: identifier.into(),
        }
    }

    /// Pick one of the read-only request types uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let pool = &RequestType::READ_ONLY;
        let picked = pool[rng.gen_range(0..pool.len())];
        debug!("Randomly selected {}", picked);
        Self::Simple(picked)
    }

    /// The `RequestType` string this command is emitted with
    pub fn request_type(&self) -> &str {
        match self {
            Self::Simple(rt) => rt.as_str(),
            Self::Unchecked(name) => name,
            Self::DeviceInformation { .. } => "DeviceInformation",
            Self::InstallProfile { .. } => "InstallProfile",
            Self::RemoveProfile { .. } => "RemoveProfile",
        }
    }

    /// Render the command body dictionary
    pub fn to_dictionary(&self) -> Dictionary {
        let mut body = Dictionary::new();
        body.insert(
            REQUEST_TYPE_KEY.to_string(),
            Value::String(self.request_type().to_string()),
        );

        match self {
            Self::Simple(_) | Self::Unchecked(_) => {}
            Self::DeviceInformation { queries } => {
                if !queries.is_empty() {
                    let queries = queries.iter().cloned().map(Value::String).collect();
                    body.insert(QUERIES_KEY.to_string(), Value::Array(queries));
                }
            }
            Self::InstallProfile { payload } => {
                body.insert(PAYLOAD_KEY.to_string(), Value::Data(payload.clone()));
            }
            Self::RemoveProfile { identifier } => {
                body.insert(
                    IDENTIFIER_KEY.to_string(),
                    Value::String(identifier.clone()),
                );
            }
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::mock::StepRng;

    fn dict(entries: &[(&str, Value)]) -> Dictionary {
        let mut d = Dictionary::new();
        for (k, v) in entries {
            d.insert(k.to_string(), v.clone());
        }
        d
    }

    #[test]
    fn test_simple_commands_only_carry_request_type() {
        for rt in RequestType::ALL {
            let body = Command::simple(rt).to_dictionary();
            assert_eq!(
                body,
                dict(&[(REQUEST_TYPE_KEY, Value::String(rt.as_str().into()))])
            );
        }
    }

    #[test]
    fn test_unchecked_accepts_any_name() {
        let body = Command::unchecked("ScheduleOSUpdateScan").to_dictionary();
        assert_eq!(
            body,
            dict(&[(REQUEST_TYPE_KEY, Value::String("ScheduleOSUpdateScan".into()))])
        );

        let body = Command::unchecked("").to_dictionary();
        assert_eq!(body.get(REQUEST_TYPE_KEY), Some(&Value::String(String::new())));
    }

    #[test]
    fn test_device_information_without_queries() {
        let body = Command::device_information(Vec::<String>::new()).to_dictionary();
        assert_eq!(
            body,
            dict(&[(REQUEST_TYPE_KEY, Value::String("DeviceInformation".into()))])
        );
        assert!(body.get(QUERIES_KEY).is_none());
    }

    #[test]
    fn test_device_information_keeps_query_order() {
        let body = Command::device_information(["Model", "OSVersion"]).to_dictionary();
        assert_eq!(
            body,
            dict(&[
                (REQUEST_TYPE_KEY, Value::String("DeviceInformation".into())),
                (
                    QUERIES_KEY,
                    Value::Array(vec![
                        Value::String("Model".into()),
                        Value::String("OSVersion".into()),
                    ])
                ),
            ])
        );
    }

    #[test]
    fn test_remove_profile() {
        let body = Command::remove_profile("com.example.profile").to_dictionary();
        assert_eq!(
            body,
            dict(&[
                (REQUEST_TYPE_KEY, Value::String("RemoveProfile".into())),
                (IDENTIFIER_KEY, Value::String("com.example.profile".into())),
            ])
        );
    }

    #[test]
    fn test_install_profile_from_reader() {
        let bytes = vec![0u8, 1, 2, 0xff, b'<', b'?'];
        let cmd = Command::install_profile_from_reader(bytes.as_slice()).unwrap();
        let body = cmd.to_dictionary();
        assert_eq!(body.get(PAYLOAD_KEY), Some(&Value::Data(bytes)));
        assert_eq!(
            body.get(REQUEST_TYPE_KEY),
            Some(&Value::String("InstallProfile".into()))
        );
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_random_only_picks_read_only() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            match Command::random(&mut rng) {
                Command::Simple(rt) => assert!(rt.is_read_only(), "{rt} is not read-only"),
                other => panic!("unexpected command {other:?}"),
            }
        }
    }

    #[test]
    fn test_random_is_deterministic_for_fixed_rng() {
        let mut a = StepRng::new(7, 13);
        let mut b = StepRng::new(7, 13);
        assert_eq!(Command::random(&mut a), Command::random(&mut b));
    }
}
