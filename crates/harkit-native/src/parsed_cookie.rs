use crate::cookies::NativeCookie;
use chrono::{DateTime, FixedOffset};
use cookie::Cookie;

/// Attributes the cookie did not carry come out as `""`, `None` or `false`.
/// `cookie` drops a leading `.` from `Domain`. A `Max-Age` alone does not
/// produce an expiry.
impl NativeCookie for Cookie<'_> {
    fn name(&self) -> &str {
        Cookie::name(self)
    }

    fn value(&self) -> &str {
        Cookie::value(self)
    }

    fn domain(&self) -> &str {
        Cookie::domain(self).unwrap_or_default()
    }

    fn path(&self) -> &str {
        Cookie::path(self).unwrap_or_default()
    }

    fn expires(&self) -> Option<DateTime<FixedOffset>> {
        let at = self.expires_datetime()?;
        let offset = FixedOffset::east_opt(at.offset().whole_seconds())?;
        DateTime::from_timestamp(at.unix_timestamp(), at.nanosecond())
            .map(|utc| utc.with_timezone(&offset))
    }

    fn http_only(&self) -> bool {
        Cookie::http_only(self).unwrap_or(false)
    }

    fn secure(&self) -> bool {
        Cookie::secure(self).unwrap_or(false)
    }
}

#[cfg(feature = "http")]
mod header_map {
    use super::*;
    use crate::cookies::cookies_from_native;
    use harkit_core::har;
    use http::HeaderMap;
    use http::header::{COOKIE, SET_COOKIE};

    /// Cookies sent in the request `Cookie` headers, in header order
    ///
    /// Pairs that fail to parse or are not valid UTF-8 are skipped.
    pub fn request_cookies_from_header_map(headers: &HeaderMap) -> Vec<har::Cookie> {
        let parsed = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(|result| match result {
                Ok(cookie) => Some(cookie),
                Err(err) => {
                    tracing::debug!("Skipping unparsable request cookie: {}", err);
                    None
                }
            });

        cookies_from_native(parsed)
    }

    /// Cookies set by the response `Set-Cookie` headers, one per header
    ///
    /// Headers that fail to parse or are not valid UTF-8 are skipped.
    pub fn response_cookies_from_header_map(headers: &HeaderMap) -> Vec<har::Cookie> {
        let parsed = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|raw| match Cookie::parse(raw) {
                Ok(cookie) => Some(cookie),
                Err(err) => {
                    tracing::debug!("Skipping unparsable Set-Cookie header: {}", err);
                    None
                }
            });

        cookies_from_native(parsed)
    }
}

#[cfg(feature = "http")]
pub use header_map::{request_cookies_from_header_map, response_cookies_from_header_map};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::cookies_from_native;

    #[test]
    fn test_set_cookie_attributes_are_mapped() {
        let native = Cookie::parse(
            "sid=42; Domain=example.com; Path=/app; Expires=Wed, 21 Oct 2015 07:28:00 GMT; \
             HttpOnly; Secure",
        )
        .unwrap();

        let cookies = cookies_from_native([&native]);

        assert_eq!(cookies.len(), 1);
        let cookie = &cookies[0];
        assert_eq!(cookie.name, "sid");
        assert_eq!(cookie.value, "42");
        assert_eq!(cookie.domain, "example.com");
        assert_eq!(cookie.path, "/app");
        assert_eq!(
            cookie.expires,
            Some(DateTime::parse_from_rfc3339("2015-10-21T07:28:00Z").unwrap())
        );
        assert!(cookie.http_only);
        assert!(cookie.secure);
    }

    #[test]
    fn test_bare_cookie_maps_to_empty_fields() {
        let native = Cookie::parse("theme=dark").unwrap();

        let cookies = cookies_from_native([native]);

        assert_eq!(
            cookies[0],
            harkit_core::har::Cookie {
                name: "theme".to_string(),
                value: "dark".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_max_age_alone_has_no_expiry() {
        let native = Cookie::parse("id=1; Max-Age=3600").unwrap();

        let cookies = cookies_from_native([native]);

        assert_eq!(cookies[0].expires, None);
    }

    #[cfg(feature = "http")]
    mod header_map {
        use super::super::*;
        use http::HeaderMap;
        use http::header::{COOKIE, HeaderValue, SET_COOKIE};

        #[test]
        fn test_response_set_cookie_headers_in_order() {
            let mut headers = HeaderMap::new();
            headers.append(SET_COOKIE, HeaderValue::from_static("sid=42; Path=/; HttpOnly"));
            headers.append(SET_COOKIE, HeaderValue::from_static("no-equals-sign"));
            headers.append(SET_COOKIE, HeaderValue::from_static("lang=en; Secure"));

            let cookies = response_cookies_from_header_map(&headers);

            let names: Vec<&str> = cookies.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, ["sid", "lang"]);
            assert_eq!(cookies[0].path, "/");
            assert!(cookies[0].http_only);
            assert!(!cookies[0].secure);
            assert!(cookies[1].secure);
            assert_eq!(cookies[1].domain, "");
        }

        #[test]
        fn test_request_cookie_header_is_split() {
            let mut headers = HeaderMap::new();
            headers.insert(COOKIE, HeaderValue::from_static("a=1; b=2"));

            let cookies = request_cookies_from_header_map(&headers);

            assert_eq!(cookies.len(), 2);
            assert_eq!((cookies[0].name.as_str(), cookies[0].value.as_str()), ("a", "1"));
            assert_eq!((cookies[1].name.as_str(), cookies[1].value.as_str()), ("b", "2"));
            assert!(cookies.iter().all(|c| c.path.is_empty() && !c.secure));
        }

        #[test]
        fn test_no_cookie_headers() {
            let headers = HeaderMap::new();
            assert!(request_cookies_from_header_map(&headers).is_empty());
            assert!(response_cookies_from_header_map(&headers).is_empty());
        }
    }
}
