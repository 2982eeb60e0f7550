//! IP metadata lookup: validate, fetch, decode, render.
//!
//! Each step can end the lookup early with a [`LookupError`]; nothing is
//! retried and no partial record is ever rendered.

use std::net::IpAddr;

use log::debug;

use crate::constants;
use crate::core::http::HttpGet;
use crate::error::LookupError;
use crate::state::AddressInformation;
use crate::theme::Theme;

/// Where and how to query the metadata service.
#[derive(Clone, Copy, Debug)]
pub struct LookupService<'a> {
    /// Base URL without a trailing slash, e.g. `https://ipinfo.io`.
    pub base_url: &'a str,
    pub token: Option<&'a str>,
}

impl LookupService<'_> {
    /// Request URL for `ip`, with the token as a query parameter if present.
    #[must_use]
    pub fn url_for(&self, ip: IpAddr) -> String {
        match self.token {
            Some(token) => format!(
                "{}/{ip}?token={}",
                self.base_url,
                urlencoding::encode(token)
            ),
            None => format!("{}/{ip}", self.base_url),
        }
    }
}

/// Validates the command-line argument as an IPv4 or IPv6 address.
///
/// # Errors
///
/// [`LookupError::MissingAddress`] if absent or empty,
/// [`LookupError::InvalidAddress`] if it does not parse. The argument is not
/// trimmed, so surrounding whitespace makes it invalid.
pub fn parse_address(argument: Option<&str>) -> Result<IpAddr, LookupError> {
    let argument = argument
        .filter(|a| !a.is_empty())
        .ok_or(LookupError::MissingAddress)?;

    argument
        .parse::<IpAddr>()
        .map_err(|_| LookupError::InvalidAddress(argument.to_string()))
}

/// Decodes the service's JSON body.
///
/// A `null` body decodes to an empty record. Keys are matched exactly
/// (lowercase, as the service sends them).
///
/// # Errors
///
/// Returns [`LookupError::Decode`] if the body is not a matching JSON object.
pub fn decode(body: &str) -> Result<AddressInformation, LookupError> {
    let info: Option<AddressInformation> = serde_json::from_str(body)?;
    Ok(info.unwrap_or_default())
}

/// Runs validate -> fetch -> decode for one argument.
///
/// Validation failures return before any request is made.
///
/// # Errors
///
/// Any [`LookupError`]; see the individual steps.
pub fn lookup(
    http: &dyn HttpGet,
    service: LookupService<'_>,
    argument: Option<&str>,
) -> Result<AddressInformation, LookupError> {
    let ip = parse_address(argument)?;
    let url = service.url_for(ip);
    debug!("Looking up {ip}");

    let body = http.get_text(&url)?;
    decode(&body)
}

/// Fills the fixed report template.
#[must_use]
pub fn render(info: &AddressInformation, theme: Theme) -> String {
    format!(
        "{}\n  Address: {}\n  Location: {}, {} {} ({})\n  Organization: {}",
        theme.heading(constants::LABEL_LOOKUP_HEADING),
        info.ip,
        info.city,
        info.region,
        info.country,
        info.postal,
        info.org,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::mock::MockHttp;
    use crate::error::NetError;

    const GOOGLE_DNS: &str = r#"{"ip":"8.8.8.8","city":"Mountain View","region":"California","country":"US","org":"Google LLC","postal":"94043"}"#;

    fn service() -> LookupService<'static> {
        LookupService {
            base_url: constants::LOOKUP_API_BASE,
            token: None,
        }
    }

    #[test]
    fn test_parse_address_accepts_both_families() {
        assert_eq!(
            parse_address(Some("8.8.8.8")).unwrap(),
            "8.8.8.8".parse::<IpAddr>().unwrap()
        );
        assert!(parse_address(Some("2001:4860:4860::8888")).unwrap().is_ipv6());
    }

    #[test]
    fn test_parse_address_does_not_trim() {
        for padded in [" 1.1.1.1 ", "1.1.1.1\n", "   "] {
            assert!(
                matches!(parse_address(Some(padded)), Err(LookupError::InvalidAddress(_))),
                "{padded:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_address_missing() {
        assert!(matches!(parse_address(None), Err(LookupError::MissingAddress)));
        assert!(matches!(parse_address(Some("")), Err(LookupError::MissingAddress)));
    }

    #[test]
    fn test_parse_address_invalid() {
        for bad in ["999.999.999.999", "notanip:x:y", "example.com", "1.2.3"] {
            assert!(
                matches!(parse_address(Some(bad)), Err(LookupError::InvalidAddress(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_url_for() {
        let ip: IpAddr = "8.8.8.8".parse().unwrap();
        assert_eq!(service().url_for(ip), "https://ipinfo.io/8.8.8.8");

        let with_token = LookupService {
            token: Some("a b&c"),
            ..service()
        };
        assert_eq!(
            with_token.url_for(ip),
            "https://ipinfo.io/8.8.8.8?token=a%20b%26c"
        );
    }

    #[test]
    fn test_invalid_argument_makes_no_request() {
        let http = MockHttp::ok(GOOGLE_DNS);
        let err = lookup(&http, service(), Some("999.999.999.999")).unwrap_err();
        assert_eq!(err.to_string(), "That is not a valid IP Address.");
        assert!(http.calls().is_empty());

        let err = lookup(&http, service(), Some("")).unwrap_err();
        assert_eq!(err.to_string(), "IP address argument is required.");
        assert!(http.calls().is_empty());
    }

    #[test]
    fn test_successful_lookup() {
        let http = MockHttp::ok(GOOGLE_DNS);
        let info = lookup(&http, service(), Some("8.8.8.8")).unwrap();
        assert_eq!(http.calls(), vec!["https://ipinfo.io/8.8.8.8"]);
        assert_eq!(info.city, "Mountain View");
        assert_eq!(info.org, "Google LLC");
    }

    #[test]
    fn test_render_template() {
        let info = decode(GOOGLE_DNS).unwrap();
        assert_eq!(
            render(&info, Theme::plain()),
            "IPINFO - Address Information\n  Address: 8.8.8.8\n  Location: Mountain View, California US (94043)\n  Organization: Google LLC"
        );
    }

    #[test]
    fn test_null_body_decodes_to_empty_record() {
        assert_eq!(decode("null").unwrap(), AddressInformation::default());
        assert_eq!(
            render(&decode("null").unwrap(), Theme::plain()),
            "IPINFO - Address Information\n  Address: \n  Location: ,   ()\n  Organization: "
        );
    }

    #[test]
    fn test_whitespace_argument_makes_no_request() {
        let http = MockHttp::ok("{}");
        let err = lookup(&http, service(), Some(" 8.8.8.8 ")).unwrap_err();
        assert_eq!(err.to_string(), "That is not a valid IP Address.");
        assert!(http.calls().is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        let http = MockHttp::ok("<html>rate limited</html>");
        let err = lookup(&http, service(), Some("8.8.8.8")).unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_network_error_is_reported() {
        let http = MockHttp::with(vec![Err(NetError::Request("connection refused".into()))]);
        let err = lookup(&http, service(), Some("1.1.1.1")).unwrap_err();
        assert_eq!(err.to_string(), "Network request failed: connection refused");
    }
}
