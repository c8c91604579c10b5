use crate::parse::operation::HttpMethod;

/// The URL and function name derived for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOperation {
    pub cleaned_url: String,
    pub function_name: String,
}

pub fn normalize(method: HttpMethod, raw_url: &str) -> NormalizedOperation {
    let cleaned_url = clean_url(raw_url);
    let function_name = function_name(method, &cleaned_url);
    NormalizedOperation {
        cleaned_url,
        function_name,
    }
}

/// Strip trailing placeholder segments and trailing slashes from a path template.
///
/// The segment holding the last `{` is cut together with the `/` before it,
/// repeatedly, until no placeholder is left; then trailing slashes go.
///
/// - `/users/{id}` → `/users`
/// - `/users/{id}/orders` → `/users`
/// - `/users/` → `/users`
///
/// The result contains no `{` and no trailing `/`, so cleaning is idempotent.
pub fn clean_url(raw_url: &str) -> String {
    let mut url = raw_url;
    while let Some(brace) = url.rfind('{') {
        url = match url[..brace].rfind('/') {
            Some(slash) => &url[..slash],
            None => "",
        };
    }
    url.trim_end_matches('/').to_string()
}

/// Method followed by every path segment with its first character upper-cased.
///
/// `get` + `/users/orders` → `getUsersOrders`. Empty segments (from `//`)
/// contribute nothing, so `/a//b` gives `getAB`.
pub fn function_name(method: HttpMethod, cleaned_url: &str) -> String {
    let path = cleaned_url.strip_prefix('/').unwrap_or(cleaned_url);
    let mut name = String::from(method.as_str());
    for segment in path.split('/') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url() {
        assert_eq!(clean_url("/users/{id}"), "/users");
        assert_eq!(clean_url("/users/{id}/"), "/users");
        assert_eq!(clean_url("/users/"), "/users");
        assert_eq!(clean_url("/users/orders"), "/users/orders");
        assert_eq!(clean_url("/{id}"), "");
        assert_eq!(clean_url("/"), "");
        assert_eq!(clean_url(""), "");
    }

    #[test]
    fn test_clean_url_placeholder_mid_path() {
        assert_eq!(clean_url("/users/{id}/orders"), "/users");
        assert_eq!(clean_url("/a/{x}/b/{y}"), "/a");
        assert_eq!(clean_url("/files/report{id}"), "/files");
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name(HttpMethod::Get, "/users/orders"), "getUsersOrders");
        assert_eq!(function_name(HttpMethod::Post, "/orders"), "postOrders");
        assert_eq!(function_name(HttpMethod::Delete, "/user-info"), "deleteUser-info");
        assert_eq!(function_name(HttpMethod::Get, ""), "get");
    }

    #[test]
    fn test_function_name_keeps_inner_case() {
        assert_eq!(function_name(HttpMethod::Put, "/sysUser/resetPwd"), "putSysUserResetPwd");
    }

    #[test]
    fn test_normalize() {
        let n = normalize(HttpMethod::Get, "/users/{id}");
        assert_eq!(n.cleaned_url, "/users");
        assert_eq!(n.function_name, "getUsers");
    }
}
