pub(crate) mod cors;

use actix_web::{dev::Payload, http::header, Error, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use roomie_utils::net::first_forwarded_for;

/// Who sent the request, as far as the proxy chain tells us.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMeta {
    /// Left-most `X-Forwarded-For` entry, else the socket peer
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl FromRequest for ClientMeta {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let headers = req.headers();
        let ip = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(first_forwarded_for)
            .map(str::to_owned)
            .or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()));
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        ready(Ok(ClientMeta { ip, user_agent }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn forwarded_for_wins_over_peer() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.7, 10.0.0.1"))
            .insert_header((header::USER_AGENT, "Mozilla/5.0"))
            .peer_addr("198.51.100.4:5555".parse().unwrap())
            .to_http_request();

        let meta = ClientMeta::extract(&req).await.unwrap();
        assert_eq!(meta.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(meta.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[actix_web::test]
    async fn peer_address_is_the_fallback() {
        let req = TestRequest::default()
            .peer_addr("198.51.100.4:5555".parse().unwrap())
            .to_http_request();

        let meta = ClientMeta::extract(&req).await.unwrap();
        assert_eq!(meta.ip.as_deref(), Some("198.51.100.4"));
        assert_eq!(meta.user_agent, None);
    }
}
