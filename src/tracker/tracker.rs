use crate::common::common::unique_stable;

const MISTRANSLATED_ANNOUNCE: [&str; 6] = ["/anunciar", "/Anunciar", "/ANUNCIAR", "/anunc", "/Anunc", "/ANUNC"];

const TRACKER_SCHEMES: [&str; 3] = ["udp://", "http://", "https://"];

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

pub fn is_udp_tracker(url: &str) -> bool {
    has_scheme(url, "udp://")
}

/// Trims a tracker URL, drops anything that is not udp/http/https and
/// rewrites translated announce paths (`/anunciar`, `/anunc`) to `/announce`.
pub fn normalize_tracker(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() || !TRACKER_SCHEMES.iter().any(|scheme| has_scheme(url, scheme)) {
        return None;
    }
    let mut normalized = url.to_string();
    for token in MISTRANSLATED_ANNOUNCE {
        if normalized.contains(token) {
            normalized = normalized.replace(token, "/announce");
        }
    }
    Some(normalized)
}

/// Newline separated mirror body to a normalized tracker list.
pub fn parse_tracker_list(body: &str) -> Vec<String> {
    unique_stable(body.lines().filter_map(normalize_tracker))
}

/// Record trackers first, then the dynamic list, or the static fallback when
/// the dynamic list is empty. Deduplicated, UDP only, capped at
/// `max_trackers` unless it is zero.
pub fn merge_trackers(record: &[String], dynamic: &[String], fallback: &[String], max_trackers: usize) -> Vec<String> {
    let extra = if dynamic.is_empty() { fallback } else { dynamic };
    let mut trackers: Vec<String> = unique_stable(
        record.iter()
            .chain(extra.iter())
            .filter_map(|url| normalize_tracker(url))
    )
        .into_iter()
        .filter(|url| is_udp_tracker(url))
        .collect();
    if max_trackers > 0 {
        trackers.truncate(max_trackers);
    }
    trackers
}
