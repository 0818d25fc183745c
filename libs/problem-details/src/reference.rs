//! HTTP status code references
//!
//! Maps every status code registered with IANA to the RFC section that
//! defines it. See <https://www.iana.org/assignments/http-status-codes/http-status-codes.xhtml>.

/// Registered status codes and their defining sections, sorted by code.
const STATUS_REFERENCES: &[(u16, &str)] = &[
    // 1xx
    (100, "https://tools.ietf.org/html/rfc9110#section-15.2.1"),
    (101, "https://tools.ietf.org/html/rfc9110#section-15.2.2"),
    (102, "https://tools.ietf.org/html/rfc2518#section-10.1"),
    (103, "https://tools.ietf.org/html/rfc8297#section-2"),
    // 2xx
    (200, "https://tools.ietf.org/html/rfc9110#section-15.3.1"),
    (201, "https://tools.ietf.org/html/rfc9110#section-15.3.2"),
    (202, "https://tools.ietf.org/html/rfc9110#section-15.3.3"),
    (203, "https://tools.ietf.org/html/rfc9110#section-15.3.4"),
    (204, "https://tools.ietf.org/html/rfc9110#section-15.3.5"),
    (205, "https://tools.ietf.org/html/rfc9110#section-15.3.6"),
    (206, "https://tools.ietf.org/html/rfc9110#section-15.3.7"),
    (207, "https://tools.ietf.org/html/rfc4918#section-11.1"),
    (208, "https://tools.ietf.org/html/rfc5842#section-7.1"),
    (226, "https://tools.ietf.org/html/rfc3229#section-10.4.1"),
    // 3xx
    (300, "https://tools.ietf.org/html/rfc9110#section-15.4.1"),
    (301, "https://tools.ietf.org/html/rfc9110#section-15.4.2"),
    (302, "https://tools.ietf.org/html/rfc9110#section-15.4.3"),
    (303, "https://tools.ietf.org/html/rfc9110#section-15.4.4"),
    (304, "https://tools.ietf.org/html/rfc9110#section-15.4.5"),
    (305, "https://tools.ietf.org/html/rfc9110#section-15.4.6"),
    (307, "https://tools.ietf.org/html/rfc9110#section-15.4.8"),
    (308, "https://tools.ietf.org/html/rfc9110#section-15.4.9"),
    // 4xx
    (400, "https://tools.ietf.org/html/rfc9110#section-15.5.1"),
    (401, "https://tools.ietf.org/html/rfc9110#section-15.5.2"),
    (402, "https://tools.ietf.org/html/rfc9110#section-15.5.3"),
    (403, "https://tools.ietf.org/html/rfc9110#section-15.5.4"),
    (404, "https://tools.ietf.org/html/rfc9110#section-15.5.5"),
    (405, "https://tools.ietf.org/html/rfc9110#section-15.5.6"),
    (406, "https://tools.ietf.org/html/rfc9110#section-15.5.7"),
    (407, "https://tools.ietf.org/html/rfc9110#section-15.5.8"),
    (408, "https://tools.ietf.org/html/rfc9110#section-15.5.9"),
    (409, "https://tools.ietf.org/html/rfc9110#section-15.5.10"),
    (410, "https://tools.ietf.org/html/rfc9110#section-15.5.11"),
    (411, "https://tools.ietf.org/html/rfc9110#section-15.5.12"),
    (412, "https://tools.ietf.org/html/rfc9110#section-15.5.13"),
    (413, "https://tools.ietf.org/html/rfc9110#section-15.5.14"),
    (414, "https://tools.ietf.org/html/rfc9110#section-15.5.15"),
    (415, "https://tools.ietf.org/html/rfc9110#section-15.5.16"),
    (416, "https://tools.ietf.org/html/rfc9110#section-15.5.17"),
    (417, "https://tools.ietf.org/html/rfc9110#section-15.5.18"),
    (418, "https://tools.ietf.org/html/rfc9110#section-15.5.19"),
    (421, "https://tools.ietf.org/html/rfc9110#section-15.5.20"),
    (422, "https://tools.ietf.org/html/rfc9110#section-15.5.21"),
    (423, "https://tools.ietf.org/html/rfc4918#section-11.3"),
    (424, "https://tools.ietf.org/html/rfc4918#section-11.4"),
    (425, "https://tools.ietf.org/html/rfc8470#section-5.2"),
    (426, "https://tools.ietf.org/html/rfc9110#section-15.5.22"),
    (428, "https://tools.ietf.org/html/rfc6585#section-3"),
    (429, "https://tools.ietf.org/html/rfc6585#section-4"),
    (431, "https://tools.ietf.org/html/rfc6585#section-5"),
    (451, "https://tools.ietf.org/html/rfc7725#section-3"),
    // 5xx
    (500, "https://tools.ietf.org/html/rfc9110#section-15.6.1"),
    (501, "https://tools.ietf.org/html/rfc9110#section-15.6.2"),
    (502, "https://tools.ietf.org/html/rfc9110#section-15.6.3"),
    (503, "https://tools.ietf.org/html/rfc9110#section-15.6.4"),
    (504, "https://tools.ietf.org/html/rfc9110#section-15.6.5"),
    (505, "https://tools.ietf.org/html/rfc9110#section-15.6.6"),
    (506, "https://tools.ietf.org/html/rfc2295#section-8.1"),
    (507, "https://tools.ietf.org/html/rfc4918#section-11.5"),
    (508, "https://tools.ietf.org/html/rfc5842#section-7.2"),
    (510, "https://tools.ietf.org/html/rfc2774#section-7"),
    (511, "https://tools.ietf.org/html/rfc6585#section-6"),
];

/// Returns the URI of the RFC section defining `code`.
///
/// Returns an empty string when the code is not registered; this is not an
/// error, callers treat it as "no known reference".
#[must_use]
pub fn status_reference(code: i32) -> &'static str {
    let Ok(code) = u16::try_from(code) else {
        return "";
    };
    STATUS_REFERENCES
        .binary_search_by_key(&code, |&(c, _)| c)
        .map_or("", |idx| STATUS_REFERENCES[idx].1)
}
