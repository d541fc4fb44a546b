use entrait::entrait_export as entrait;

pub mod error;

use error::{FetchError, FetchResult};

/// The profile field holding the location of the avatar image.
pub const AVATAR_URL_FIELD: &str = "avatar_url";

///
/// A user profile as returned by the profile service.
///
/// Kept verbatim: only the avatar URL is ever interpreted.
///
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Profile(pub serde_json::Map<String, serde_json::Value>);

impl Profile {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn login(&self) -> Option<&str> {
        self.get("login").and_then(serde_json::Value::as_str)
    }

    pub fn id(&self) -> Option<u64> {
        self.get("id").and_then(serde_json::Value::as_u64)
    }

    pub fn avatar_url(&self) -> FetchResult<url::Url> {
        let value = self
            .get(AVATAR_URL_FIELD)
            .ok_or_else(|| FetchError::schema(AVATAR_URL_FIELD, "missing"))?;

        let raw = value
            .as_str()
            .ok_or_else(|| FetchError::schema(AVATAR_URL_FIELD, "not a string"))?;

        url::Url::parse(raw).map_err(|e| FetchError::schema(AVATAR_URL_FIELD, e.to_string()))
    }
}

/// Raw avatar payload, never decoded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Avatar(pub bytes::Bytes);

#[derive(Clone, Debug)]
pub struct ProfileWithAvatar {
    pub profile: Profile,
    pub avatar: Avatar,
}

///
/// Implemented by the application to tell where the profile service lives.
///
#[entrait]
pub trait ProfileServiceLocation {
    fn profile_base_url(&self) -> &url::Url;
}

#[entrait(pub GetProfileBaseUrl)]
fn get_profile_base_url(deps: &impl ProfileServiceLocation) -> url::Url {
    deps.profile_base_url().clone()
}

/// Mock clauses shared by the test suites of dependent crates.
#[cfg(any(test, feature = "test-util"))]
pub mod test {
    use super::*;
    use unimock::*;

    pub fn mock_profile_base_url(base_url: &str) -> unimock::Clause {
        get_profile_base_url::Fn
            .each_call(matching!())
            .returns(url::Url::parse(base_url).expect("test base url should parse"))
            .in_any_order()
    }
}
