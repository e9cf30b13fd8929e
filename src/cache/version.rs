//! Version parsing and range matching
//!
//! Explicit versions are full `MAJOR.MINOR.PATCH` semantic versions,
//! optionally written with a leading `v` or `=`. Anything else is a range
//! expression in the runner grammar:
//!
//! - comparator sets joined by `||`
//! - comparators inside a set separated by whitespace (`>=1.2 <2.0`)
//! - wildcards `1.x`, `1.2.*`, `*`
//! - hyphen ranges `1.2.3 - 2.0`
//! - tilde and caret (`~1.2.3`, `^0.4`)
//!
//! Each comparator set is rewritten into a [`semver::VersionReq`] and a
//! candidate matches the range when it satisfies any set.

use semver::{Version, VersionReq};

/// Strip whitespace plus a leading `=` and `v` the way runners write versions
fn strip_version_prefix(input: &str) -> &str {
    let trimmed = input.trim().trim_start_matches('=').trim_start();
    trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed)
}

/// Parse a single explicit semantic version
pub fn parse_version(input: &str) -> Option<Version> {
    Version::parse(strip_version_prefix(input)).ok()
}

/// Whether `spec` names one exact version rather than a range
pub fn is_explicit_version(spec: &str) -> bool {
    parse_version(spec).is_some()
}

/// Canonical `MAJOR.MINOR.PATCH` form of a version
///
/// Pre-release and build metadata are dropped. Strings that do not parse as
/// a semantic version are returned unchanged.
pub fn clean_version(version: &str) -> String {
    match parse_version(version) {
        Some(v) => format!("{}.{}.{}", v.major, v.minor, v.patch),
        None => version.to_string(),
    }
}

/// A parsed range expression: a disjunction of comparator sets
#[derive(Debug, Clone)]
pub struct VersionRange {
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    /// Parse a range expression, returning `None` if any set is malformed
    pub fn parse(spec: &str) -> Option<Self> {
        let alternatives = spec
            .split("||")
            .map(parse_comparator_set)
            .collect::<Option<Vec<_>>>()?;

        Some(Self { alternatives })
    }

    /// Whether the version satisfies at least one comparator set
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }
}

/// Rewrite one whitespace-separated comparator set into a `VersionReq`
fn parse_comparator_set(set: &str) -> Option<VersionReq> {
    let set = set.trim();

    if let Some((low, high)) = set.split_once(" - ") {
        let low = normalize_comparator(">=", low.trim())?;
        let high = normalize_comparator("<=", high.trim())?;
        return build_req(low.into_iter().chain(high).collect());
    }

    let mut comparators = Vec::new();
    let mut pending_op: Option<&str> = None;

    for token in set.split_whitespace() {
        let split = token
            .find(|c: char| !matches!(c, '<' | '>' | '=' | '~' | '^'))
            .unwrap_or(token.len());
        let (op, version) = token.split_at(split);

        // ">= 1.2.0" writes the operator as its own token
        if version.is_empty() {
            if pending_op.is_some() {
                return None;
            }
            pending_op = Some(op);
            continue;
        }

        let op = match pending_op.take() {
            Some(prev) if op.is_empty() => prev,
            Some(_) => return None,
            None => op,
        };

        if let Some(comparator) = normalize_comparator(op, version)? {
            comparators.push(comparator);
        }
    }

    if pending_op.is_some() {
        return None;
    }

    build_req(comparators)
}

fn build_req(comparators: Vec<String>) -> Option<VersionReq> {
    if comparators.is_empty() {
        return Some(VersionReq::STAR);
    }
    VersionReq::parse(&comparators.join(", ")).ok()
}

/// Below every release and every pre-release, so nothing satisfies it
const MATCH_NONE: &str = "<0.0.0-0";

/// Normalize one comparator into Cargo requirement syntax
///
/// Returns `Some(None)` for a comparator that matches everything and `None`
/// when the version part is malformed.
fn normalize_comparator(op: &str, version: &str) -> Option<Option<String>> {
    let op = match op {
        "~>" => "~",
        "" | "=" | "<" | "<=" | ">" | ">=" | "~" | "^" => op,
        _ => return None,
    };

    let version = strip_version_prefix(version);
    let (core, suffix) = match version.find(['-', '+']) {
        Some(idx) => version.split_at(idx),
        None => (version, ""),
    };

    let mut parts = Vec::new();
    for part in core.split('.') {
        if matches!(part, "x" | "X" | "*") {
            break;
        }
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        parts.push(part);
    }

    // Nothing is below or above "any version"
    if parts.is_empty() {
        return Some(match op {
            "<" | ">" => Some(MATCH_NONE.to_string()),
            _ => None,
        });
    }
    if parts.len() > 3 {
        return None;
    }

    // A bare version pins to exactly what is written: "1.2" means 1.2.x
    let op = if op.is_empty() { "=" } else { op };
    let suffix = if parts.len() == 3 { suffix } else { "" };

    Some(Some(format!("{}{}{}", op, parts.join("."), suffix)))
}

/// Pick the highest candidate version that satisfies `spec`
///
/// Candidates that do not parse as explicit versions are skipped. The
/// returned string is the candidate exactly as it was supplied.
pub fn max_satisfying<I, S>(spec: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let range = VersionRange::parse(spec)?;

    candidates
        .into_iter()
        .filter_map(|candidate| {
            let version = parse_version(candidate.as_ref())?;
            range
                .matches(&version)
                .then(|| (version, candidate.as_ref().to_string()))
        })
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, candidate)| candidate)
}
