use crate::domain::Page;

/// `X-Total-Count` plus an RFC 5988 `Link` header with next/prev/last/first
/// relations expressed as `offset`/`limit` query parameters on `base_url`.
pub fn pagination_headers<T>(page: &Page<T>, base_url: &str) -> Vec<(String, String)> {
    let limit = page.request.limit();
    let link = |offset: i64, rel: &str| format!("<{base_url}?offset={offset}&limit={limit}>; rel=\"{rel}\"");

    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(link(page.next_offset(), "next"));
    }
    if page.has_previous() {
        links.push(link(page.previous_offset(), "prev"));
    }
    links.push(link(page.last_offset(), "last"));
    links.push(link(0, "first"));

    vec![
        ("X-Total-Count".to_string(), page.total.to_string()),
        ("Link".to_string(), links.join(",")),
    ]
}
