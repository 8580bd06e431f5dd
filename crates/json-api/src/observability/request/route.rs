//! Route labels for logs and metrics.

use uuid::Uuid;

/// Replaces uuid path segments with `{uuid}` so every cart, item and order
/// shares one label.
pub(super) fn route_label(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::route_label;

    #[test]
    fn uuid_segments_are_collapsed() {
        let path = "/carts/0190f2c4-7d1e-7cc3-8a57-8f1f0d7a9b10/items/0190f2c4-7d1e-7cc3-8a57-8f1f0d7a9b11";

        assert_eq!(route_label(path), "/carts/{uuid}/items/{uuid}");
    }

    #[test]
    fn static_paths_are_kept() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/orders"), "/orders");
        assert_eq!(route_label("/carts/"), "/carts");
    }
}
