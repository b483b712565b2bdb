//! GitHub GraphQL client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::sponsors::{SPONSORSHIPS_PER_SPONSOR, SPONSORS_PAGE_SIZE};
use crate::domain::ports::{
    AccountProfile, PageInfo, SponsorAccount, SponsorEdge, SponsorSource, Sponsorship,
    SponsorsPage,
};
use crate::error::GitHubError;

const SPONSORS_QUERY: &str = r#"query($organization: String!, $maintainers: [String!], $first: Int!, $sponsorships: Int!, $cursor: String) {
  organization(login: $organization) {
    sponsors(first: $first, after: $cursor) {
      pageInfo {
        endCursor
        hasNextPage
      }
      edges {
        node {
          __typename
          ... on User {
            login
            name
            avatarUrl
          }
          ... on Organization {
            login
            name
            avatarUrl
          }
          ... on Sponsorable {
            sponsorshipsAsSponsor(maintainerLogins: $maintainers, first: $sponsorships) {
              edges {
                node {
                  isActive
                  tier {
                    monthlyPriceInCents
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

/// Implementation of the sponsor source over the GitHub GraphQL API
pub struct GitHubClientImpl {
    http: Client,
    endpoint: String,
}

impl GitHubClientImpl {
    pub fn new(endpoint: &str, token: &str) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| GitHubError::InvalidToken(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GitHubError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(GitHubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for the GraphQL endpoint
#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Serialize)]
struct SponsorsVariables<'a> {
    organization: &'a str,
    maintainers: [&'a str; 1],
    first: u32,
    sponsorships: u32,
    cursor: Option<&'a str>,
}

impl<'a> SponsorsVariables<'a> {
    fn new(organization: &'a str, cursor: Option<&'a str>) -> Self {
        Self {
            organization,
            maintainers: [organization],
            first: SPONSORS_PAGE_SIZE,
            sponsorships: SPONSORSHIPS_PER_SPONSOR,
            cursor,
        }
    }
}

/// Response types from the GraphQL endpoint
#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Deserialize)]
struct SponsorsData {
    organization: Option<OrganizationResponse>,
}

#[derive(Deserialize)]
struct OrganizationResponse {
    sponsors: SponsorConnectionResponse,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SponsorConnectionResponse {
    page_info: PageInfoResponse,
    #[serde(default)]
    edges: Vec<SponsorEdgeResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfoResponse {
    end_cursor: Option<String>,
    has_next_page: bool,
}

impl From<PageInfoResponse> for PageInfo {
    fn from(r: PageInfoResponse) -> Self {
        PageInfo {
            end_cursor: r.end_cursor,
            has_next_page: r.has_next_page,
        }
    }
}

#[derive(Deserialize)]
struct SponsorEdgeResponse {
    node: Option<SponsorNodeResponse>,
}

#[derive(Deserialize)]
#[serde(tag = "__typename")]
enum SponsorNodeResponse {
    User(AccountNodeResponse),
    Organization(AccountNodeResponse),
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountNodeResponse {
    login: String,
    name: Option<String>,
    avatar_url: String,
    sponsorships_as_sponsor: Option<SponsorshipConnectionResponse>,
}

#[derive(Deserialize)]
struct SponsorshipConnectionResponse {
    #[serde(default)]
    edges: Vec<SponsorshipEdgeResponse>,
}

#[derive(Deserialize)]
struct SponsorshipEdgeResponse {
    node: Option<SponsorshipNodeResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SponsorshipNodeResponse {
    is_active: bool,
    tier: Option<TierResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TierResponse {
    monthly_price_in_cents: i64,
}

impl From<SponsorshipNodeResponse> for Sponsorship {
    fn from(r: SponsorshipNodeResponse) -> Self {
        Sponsorship {
            is_active: r.is_active,
            monthly_price_in_cents: r.tier.map(|t| t.monthly_price_in_cents).unwrap_or(0),
        }
    }
}

impl AccountNodeResponse {
    fn into_parts(self) -> (AccountProfile, Vec<Sponsorship>) {
        let sponsorships = self
            .sponsorships_as_sponsor
            .map(|c| c.edges)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|edge| edge.node)
            .map(Sponsorship::from)
            .collect();

        let profile = AccountProfile {
            login: self.login,
            name: self.name.unwrap_or_default(),
            avatar_url: self.avatar_url,
        };

        (profile, sponsorships)
    }
}

impl From<SponsorEdgeResponse> for SponsorEdge {
    fn from(r: SponsorEdgeResponse) -> Self {
        let (account, sponsorships) = match r.node {
            Some(SponsorNodeResponse::User(node)) => {
                let (profile, sponsorships) = node.into_parts();
                (Some(SponsorAccount::User(profile)), sponsorships)
            }
            Some(SponsorNodeResponse::Organization(node)) => {
                let (profile, sponsorships) = node.into_parts();
                (Some(SponsorAccount::Organization(profile)), sponsorships)
            }
            Some(SponsorNodeResponse::Unknown) | None => (None, Vec::new()),
        };

        SponsorEdge {
            account,
            sponsorships,
        }
    }
}

/// Turn a decoded GraphQL response into a page, surfacing query errors
fn into_sponsors_page(
    response: GraphQlResponse<SponsorsData>,
    organization: &str,
) -> Result<SponsorsPage, GitHubError> {
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(GitHubError::Query(messages.join("; ")));
    }

    let data = response.data.ok_or(GitHubError::MissingData)?;
    let sponsors = data
        .organization
        .ok_or_else(|| GitHubError::OrganizationNotFound(organization.to_string()))?
        .sponsors;

    Ok(SponsorsPage {
        edges: sponsors.edges.into_iter().map(SponsorEdge::from).collect(),
        page_info: sponsors.page_info.into(),
    })
}

#[async_trait]
impl SponsorSource for GitHubClientImpl {
    async fn fetch_sponsors_page(
        &self,
        organization: &str,
        cursor: Option<&str>,
    ) -> Result<SponsorsPage, GitHubError> {
        let request = GraphQlRequest {
            query: SPONSORS_QUERY,
            variables: SponsorsVariables::new(organization, cursor),
        };

        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let body: GraphQlResponse<SponsorsData> = self.handle_response(response).await?;
        into_sponsors_page(body, organization)
    }
}
