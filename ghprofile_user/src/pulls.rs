use crate::endpoint_url;
use ghprofile_core::error::{FetchError, FetchResult};
use ghprofile_core::GetProfileBaseUrl;
use ghprofile_http::GetBytes;

use entrait::entrait_export as entrait;
use time::OffsetDateTime;

/// Only the first page is read.
const PULLS_PER_PAGE: &str = "100";

/// A repository named as `owner/name`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepoName {
    pub owner: String,
    pub name: String,
}

impl std::str::FromStr for RepoName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(format!("expected a repository as owner/name, got {s:?}")),
        }
    }
}

impl std::fmt::Display for RepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PullStatus {
    Open,
    Closed,
    Merged,
}

impl PullStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Merged => "merged",
        }
    }

    pub fn marker(self) -> char {
        match self {
            Self::Open => '○',
            Self::Closed => '✕',
            Self::Merged => '✓',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PullSummary {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub status: PullStatus,
    pub created_at: OffsetDateTime,
    pub merged_at: Option<OffsetDateTime>,
}

#[derive(serde::Deserialize)]
struct Account {
    login: String,
}

#[derive(serde::Deserialize)]
struct PullRequest {
    number: u64,
    title: String,
    html_url: String,
    state: String,
    user: Option<Account>,
    #[serde(default)]
    assignee: Option<Account>,
    #[serde(default)]
    assignees: Option<Vec<Account>>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    merged_at: Option<OffsetDateTime>,
}

impl PullRequest {
    /// Authored by, or assigned to, the given login.
    fn involves(&self, login: &str) -> bool {
        let is_login = |account: &Account| account.login == login;

        self.user.as_ref().map_or(false, is_login)
            || self.assignee.as_ref().map_or(false, is_login)
            || self.assignees.iter().flatten().any(is_login)
    }

    fn status(&self) -> PullStatus {
        if self.merged_at.is_some() {
            PullStatus::Merged
        } else if self.state == "closed" {
            PullStatus::Closed
        } else {
            PullStatus::Open
        }
    }
}

impl From<PullRequest> for PullSummary {
    fn from(pull: PullRequest) -> Self {
        Self {
            status: pull.status(),
            number: pull.number,
            title: pull.title,
            html_url: pull.html_url,
            created_at: pull.created_at,
            merged_at: pull.merged_at,
        }
    }
}

///
/// List the pull requests of a repository that the user authored or is assigned to.
///
#[entrait(pub ListUserPulls)]
async fn list_user_pulls(
    deps: &(impl GetProfileBaseUrl + GetBytes),
    repo: RepoName,
    username: String,
) -> FetchResult<Vec<PullSummary>> {
    let mut url = endpoint_url(
        deps.get_profile_base_url(),
        &["repos", repo.owner.as_str(), repo.name.as_str(), "pulls"],
    )?;
    url.query_pairs_mut()
        .append_pair("state", "all")
        .append_pair("per_page", PULLS_PER_PAGE);

    let body = deps.get_bytes(url.clone()).await?;
    let pulls: Vec<PullRequest> =
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })?;

    let total = pulls.len();
    let summaries: Vec<PullSummary> = pulls
        .into_iter()
        .filter(|pull| pull.involves(&username))
        .map(PullSummary::from)
        .collect();

    tracing::debug!(
        "{} of {total} pull requests in {repo} involve {username}",
        summaries.len()
    );

    Ok(summaries)
}
