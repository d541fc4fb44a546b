pub mod pulls;

use ghprofile_core::error::{FetchError, FetchResult};
use ghprofile_core::{Avatar, GetProfileBaseUrl, Profile, ProfileWithAvatar};
use ghprofile_http::GetBytes;

use entrait::entrait_export as entrait;

///
/// Fetch a user's profile, then the avatar it points at.
///
/// The avatar location is only known once the profile has been parsed,
/// so the two requests are strictly sequential.
///
#[entrait(pub FetchProfileWithAvatar)]
async fn fetch_profile_with_avatar(
    deps: &(impl GetProfileBaseUrl + GetBytes),
    username: String,
) -> FetchResult<ProfileWithAvatar> {
    let profile = fetch_profile(deps, &username).await?;
    let avatar_url = profile.avatar_url()?;

    let avatar = Avatar(deps.get_bytes(avatar_url).await?);

    tracing::debug!(
        "fetched profile of {username} with a {} byte avatar",
        avatar.0.len()
    );

    Ok(ProfileWithAvatar { profile, avatar })
}

async fn fetch_profile(
    deps: &(impl GetProfileBaseUrl + GetBytes),
    username: &str,
) -> FetchResult<Profile> {
    let url = endpoint_url(deps.get_profile_base_url(), &["users", username])?;
    let body = deps.get_bytes(url.clone()).await?;

    serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
}

/// Append path segments to the profile service base URL.
///
/// Each segment is percent-encoded, so a username can never leave its segment.
pub(crate) fn endpoint_url(mut base: url::Url, segments: &[&str]) -> FetchResult<url::Url> {
    {
        let mut path = base
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("profile base URL cannot carry a path"))?;

        path.pop_if_empty().extend(segments);
    }

    Ok(base)
}
