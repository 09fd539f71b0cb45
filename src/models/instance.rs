use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::utils::config::{env_var, non_empty};
use crate::utils::constant::*;

/// Static description of the running instance, returned verbatim by the ping endpoint.
///
/// Built once at startup. Optional fields serialize as `null` rather than being
/// skipped, so clients always see the full set of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub correspondence_email: Option<String>,
    #[serde(rename = "correspondenceUserID")]
    pub correspondence_user_id: Option<String>,
    pub front_page: Option<String>,
    pub tos_page: Option<String>,
}

impl InstanceMetadata {
    /// Metadata with the default name and description and every optional field unset.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: DEFAULT_INSTANCE_NAME.to_string(),
            description: DEFAULT_INSTANCE_DESCRIPTION.to_string(),
            image: None,
            correspondence_email: None,
            correspondence_user_id: None,
            front_page: None,
            tos_page: None,
        }
    }

    /// Reads instance metadata from `INSTANCE_*` environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `INSTANCE_ID` - Overrides the host name as the instance id
    /// - `INSTANCE_NAME`, `INSTANCE_DESCRIPTION` - Fall back to the built-in defaults
    /// - `INSTANCE_IMAGE`, `INSTANCE_CORRESPONDENCE_EMAIL`, `INSTANCE_CORRESPONDENCE_USER_ID`,
    ///   `INSTANCE_FRONT_PAGE`, `INSTANCE_TOS_PAGE` - Stay `null` when unset
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Same as [`InstanceMetadata::from_env`], reading values through `lookup` instead.
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| non_empty(lookup(key));

        let id = get("INSTANCE_ID").unwrap_or_else(host_id);
        let defaults = Self::new(id);

        let metadata = Self {
            name: get("INSTANCE_NAME").unwrap_or(defaults.name),
            description: get("INSTANCE_DESCRIPTION").unwrap_or(defaults.description),
            image: get("INSTANCE_IMAGE"),
            correspondence_email: get("INSTANCE_CORRESPONDENCE_EMAIL"),
            correspondence_user_id: get("INSTANCE_CORRESPONDENCE_USER_ID"),
            front_page: get("INSTANCE_FRONT_PAGE"),
            tos_page: get("INSTANCE_TOS_PAGE"),
            ..defaults
        };
        debug!(id = %metadata.id, name = %metadata.name, "Loaded instance metadata");
        metadata
    }
}

/// The network name of the host, used as the default instance id.
fn host_id() -> String {
    match hostname::get().map(|name| name.into_string()) {
        Ok(Ok(name)) if !name.trim().is_empty() => name,
        Ok(Ok(_)) => {
            error!("Host name is empty, using fallback '{FALLBACK_INSTANCE_ID}'");
            FALLBACK_INSTANCE_ID.to_string()
        }
        Ok(Err(raw)) => {
            error!(?raw, "Host name is not valid UTF-8, using fallback '{FALLBACK_INSTANCE_ID}'");
            FALLBACK_INSTANCE_ID.to_string()
        }
        Err(e) => {
            error!(?e, "Failed to read host name, using fallback '{FALLBACK_INSTANCE_ID}'");
            FALLBACK_INSTANCE_ID.to_string()
        }
    }
}

/// Body of a successful `GET /api/v1/ping`.
#[derive(Debug, Serialize)]
pub struct PingResponse<'a> {
    pub ping: &'static str,
    pub instance: &'a InstanceMetadata,
}

impl<'a> PingResponse<'a> {
    pub fn new(instance: &'a InstanceMetadata) -> Self {
        Self {
            ping: PING_REPLY,
            instance,
        }
    }
}

/// `{ "message": ... }` body shared by the POST ping endpoint and all errors.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
