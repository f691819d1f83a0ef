use chrono::{DateTime, FixedOffset};
use harkit_core::har::Cookie;

/// Read access to a cookie as an HTTP client stores it
///
/// Empty strings stand for attributes the cookie did not carry.
pub trait NativeCookie {
    fn name(&self) -> &str;
    fn value(&self) -> &str;
    fn domain(&self) -> &str;
    fn path(&self) -> &str;
    fn expires(&self) -> Option<DateTime<FixedOffset>>;
    fn http_only(&self) -> bool;
    fn secure(&self) -> bool;
}

impl<T: NativeCookie + ?Sized> NativeCookie for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value(&self) -> &str {
        (**self).value()
    }

    fn domain(&self) -> &str {
        (**self).domain()
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn expires(&self) -> Option<DateTime<FixedOffset>> {
        (**self).expires()
    }

    fn http_only(&self) -> bool {
        (**self).http_only()
    }

    fn secure(&self) -> bool {
        (**self).secure()
    }
}

/// Convert native cookies into HAR cookies
///
/// One output per input, in input order. Fields are copied verbatim: no
/// domain or path normalization, and expired cookies are kept. A source
/// holding `Option<C>` should be flattened first; missing cookies are then
/// skipped rather than turned into empty records.
pub fn cookies_from_native<I>(cookies: I) -> Vec<Cookie>
where
    I: IntoIterator,
    I::Item: NativeCookie,
{
    let converted: Vec<Cookie> = cookies
        .into_iter()
        .map(|native| Cookie {
            name: native.name().to_string(),
            value: native.value().to_string(),
            path: native.path().to_string(),
            domain: native.domain().to_string(),
            expires: native.expires(),
            http_only: native.http_only(),
            secure: native.secure(),
            comment: String::new(),
        })
        .collect();

    tracing::trace!("Converted {} native cookies", converted.len());
    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ClientCookie {
        name: String,
        value: String,
        domain: String,
        path: String,
        expires: Option<DateTime<FixedOffset>>,
        http_only: bool,
        secure: bool,
    }

    impl NativeCookie for ClientCookie {
        fn name(&self) -> &str {
            &self.name
        }

        fn value(&self) -> &str {
            &self.value
        }

        fn domain(&self) -> &str {
            &self.domain
        }

        fn path(&self) -> &str {
            &self.path
        }

        fn expires(&self) -> Option<DateTime<FixedOffset>> {
            self.expires
        }

        fn http_only(&self) -> bool {
            self.http_only
        }

        fn secure(&self) -> bool {
            self.secure
        }
    }

    fn client_cookie(name: &str, value: &str) -> ClientCookie {
        ClientCookie {
            name: name.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cookies_keep_order_and_flags() {
        let mut secure = client_cookie("b", "2");
        secure.secure = true;
        let native = vec![client_cookie("a", "1"), secure];

        let cookies = cookies_from_native(&native);

        assert_eq!(cookies.len(), 2);
        assert_eq!(
            cookies[0],
            Cookie {
                name: "a".to_string(),
                value: "1".to_string(),
                ..Default::default()
            }
        );
        assert_eq!(
            cookies[1],
            Cookie {
                name: "b".to_string(),
                value: "2".to_string(),
                secure: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_cookies_copied_verbatim() {
        let expired = DateTime::parse_from_rfc3339("1999-01-01T00:00:00Z").unwrap();
        let native = ClientCookie {
            name: "SID".to_string(),
            value: "x y".to_string(),
            domain: "Example.COM".to_string(),
            path: String::new(),
            expires: Some(expired),
            http_only: true,
            secure: false,
        };

        let cookies = cookies_from_native([&native]);

        assert_eq!(cookies[0].domain, "Example.COM");
        assert_eq!(cookies[0].path, "");
        assert_eq!(cookies[0].value, "x y");
        assert_eq!(cookies[0].expires, Some(expired));
        assert!(cookies[0].http_only);
        assert!(!cookies[0].secure);
    }

    #[test]
    fn test_empty_input_gives_empty_vec() {
        let native: Vec<ClientCookie> = Vec::new();
        assert!(cookies_from_native(native).is_empty());
    }

    #[test]
    fn test_missing_entries_are_skipped_after_flatten() {
        let first = client_cookie("a", "1");
        let last = client_cookie("c", "3");
        let native = [Some(&first), None, Some(&last)];

        let cookies = cookies_from_native(native.into_iter().flatten());

        let names: Vec<&str> = cookies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_input_is_left_untouched() {
        let native = vec![client_cookie("a", "1")];
        let _ = cookies_from_native(&native);
        let _ = cookies_from_native(&native);
        assert_eq!(native[0].name, "a");
        assert_eq!(native.len(), 1);
    }
}
